pub mod use_active_popup;
pub mod use_date_range;
