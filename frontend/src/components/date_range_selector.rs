use chrono::NaiveDate;
use shared::DateRange;
use yew::prelude::*;

use super::date_range_picker::DateRangePicker;

#[derive(Properties, PartialEq)]
pub struct DateRangeSelectorProps {
    /// The owned range, passed down by value.
    pub range: DateRange,
    pub on_start_change: Callback<NaiveDate>,
    pub on_end_change: Callback<NaiveDate>,
}

/// Two linked day pickers over one range.
///
/// The start picker is capped at the current end and the end picker is
/// floored at the current start, so `start <= end` holds by construction —
/// there is no post-hoc validation anywhere. Selections are forwarded
/// through the callbacks; the range itself is never mutated here.
#[function_component(DateRangeSelector)]
pub fn date_range_selector(props: &DateRangeSelectorProps) -> Html {
    html! {
        <div class="date-range-selector">
            <DateRangePicker
                selected={props.range.start()}
                on_select={props.on_start_change.clone()}
                max_day={Some(props.range.max_selectable_start())}
                label={Some("From".to_string())}
            />
            <DateRangePicker
                selected={props.range.end()}
                on_select={props.on_end_change.clone()}
                min_day={Some(props.range.min_selectable_end())}
                label={Some("To".to_string())}
            />
        </div>
    }
}
