pub mod catalog;
pub mod init;
pub mod screen;

pub use catalog::{present_airline_list, present_flight_card, present_flight_list};
pub use init::present_init_result;
pub use screen::{
    REMOVE_FILTER_LABEL, present_alert, present_filter_selector, present_flight_page,
    present_header, present_loading, present_sort_selector, present_status_bar,
};
