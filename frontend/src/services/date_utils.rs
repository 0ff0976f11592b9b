use chrono::NaiveDate;

/// Today's calendar day from the browser clock, time-of-day discarded.
pub fn current_day() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).expect("browser clock returned an invalid date")
}
