pub mod flight;
pub mod timestamp;
pub mod view;

pub use flight::*;
pub use timestamp::*;
pub use view::*;
