use shared::day_format;
use yew::prelude::*;

use super::date_range_selector::DateRangeSelector;
use crate::hooks::use_date_range::use_date_range;

/// Statistics page section. Owns the reporting period and re-renders when
/// either endpoint changes.
#[function_component(Statistics)]
pub fn statistics() -> Html {
    let date_range = use_date_range();

    html! {
        <section class="statistics">
            <h2>{"Statistics"}</h2>
            <DateRangeSelector
                range={date_range.range}
                on_start_change={date_range.actions.set_start.clone()}
                on_end_change={date_range.actions.set_end.clone()}
            />
            <p class="statistics-period">
                {format!(
                    "Spending from {} to {}",
                    day_format::format_display(date_range.range.start()),
                    day_format::format_display(date_range.range.end()),
                )}
            </p>
        </section>
    }
}
