pub mod date_range_picker;
pub mod date_range_selector;
pub mod header;
pub mod login_popup;
pub mod register_popup;
pub mod side_panel;
pub mod statistics;

pub use header::Header;
pub use login_popup::LoginPopup;
pub use register_popup::RegisterPopup;
pub use side_panel::SidePanel;
pub use statistics::Statistics;
