pub mod price;
pub mod time;

pub use price::format_price;
pub use time::{FLIGHT_TIME_FORMAT, format_flight_time};
