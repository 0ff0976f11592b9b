pub mod date_range;
pub mod day_format;
pub mod popup;

pub use date_range::{DateRange, DateRangeError};
pub use day_format::{DayFormatError, DISPLAY_DAY_FORMAT, ISO_DAY_FORMAT};
pub use popup::ActivePopup;
