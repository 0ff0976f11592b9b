use chrono::NaiveDate;
use shared::DateRange;
use yew::prelude::*;

use crate::services::date_utils::current_day;

pub struct UseDateRangeResult {
    pub range: DateRange,
    pub actions: UseDateRangeActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDateRangeActions {
    pub set_start: Callback<NaiveDate>,
    pub set_end: Callback<NaiveDate>,
}

/// Owns the reporting period for the statistics page.
///
/// The range starts out as the week leading up to today and is only ever
/// mutated through the two endpoint callbacks; the picker widgets keep the
/// emitted days inside the selectable bounds.
#[hook]
pub fn use_date_range() -> UseDateRangeResult {
    let range = use_state(|| DateRange::week_ending(current_day()));

    let set_start = {
        let range = range.clone();
        use_callback(*range, move |day: NaiveDate, current: &DateRange| {
            let mut next = *current;
            next.set_start(day);
            gloo::console::log!(format!("range start -> {}", next.start_iso()));
            range.set(next);
        })
    };

    let set_end = {
        let range = range.clone();
        use_callback(*range, move |day: NaiveDate, current: &DateRange| {
            let mut next = *current;
            next.set_end(day);
            gloo::console::log!(format!("range end -> {}", next.end_iso()));
            range.set(next);
        })
    };

    UseDateRangeResult {
        range: *range,
        actions: UseDateRangeActions { set_start, set_end },
    }
}
