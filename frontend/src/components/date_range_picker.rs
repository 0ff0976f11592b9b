use chrono::{Datelike, Days, NaiveDate};
use gloo::events::EventListener;
use shared::day_format;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::services::date_utils::current_day;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Currently selected day.
    pub selected: NaiveDate,
    /// Callback when the user picks a day.
    pub on_select: Callback<NaiveDate>,
    /// Earliest day offered for selection, when a range floor applies.
    #[prop_or_default]
    pub min_day: Option<NaiveDate>,
    /// Latest day offered for selection, when a range cap applies.
    #[prop_or_default]
    pub max_day: Option<NaiveDate>,
    /// Optional label above the picker.
    #[prop_or_default]
    pub label: Option<String>,
}

/// One bounded day picker: a button showing the selected day in DD-MM-YYYY
/// form, with a month-grid dropdown. Days outside `[min_day, max_day]` are
/// rendered disabled, so an out-of-range day can never be emitted.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let calendar_ref = use_node_ref();

    // Month shown in the dropdown; starts on the selected day's month
    let view_month = use_state(|| props.selected.month());
    let view_year = use_state(|| props.selected.year());

    let display_text = day_format::format_display(props.selected);

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(!*show_calendar);
        })
    };

    let on_day_select = {
        let on_select = props.on_select.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |day: NaiveDate| {
            on_select.emit(day);
            show_calendar.set(false);
        })
    };

    // Close the dropdown when the user clicks anywhere outside it
    {
        let show_calendar = show_calendar.clone();
        let calendar_ref = calendar_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = is_open.then(|| {
                EventListener::new(&window().unwrap(), "click", move |e| {
                    let clicked_outside = e
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .zip(calendar_ref.cast::<Element>())
                        .map(|(target, root)| !root.contains(Some(&target)))
                        .unwrap_or(false);
                    if clicked_outside {
                        show_calendar.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let prev_month = {
        let view_month = view_month.clone();
        let view_year = view_year.clone();
        Callback::from(move |_: MouseEvent| {
            if *view_month == 1 {
                view_month.set(12);
                view_year.set(*view_year - 1);
            } else {
                view_month.set(*view_month - 1);
            }
        })
    };

    let next_month = {
        let view_month = view_month.clone();
        let view_year = view_year.clone();
        Callback::from(move |_: MouseEvent| {
            if *view_month == 12 {
                view_month.set(1);
                view_year.set(*view_year + 1);
            } else {
                view_month.set(*view_month + 1);
            }
        })
    };

    let grid = month_grid(*view_year, *view_month, props.min_day, props.max_day);
    let today = current_day();

    html! {
        <div class="date-picker" ref={calendar_ref.clone()}>
            {if let Some(label) = &props.label {
                html! { <label class="date-picker-label">{label}</label> }
            } else { html! {} }}

            <div class="date-picker-input">
                <button
                    type="button"
                    class="date-display-button"
                    onclick={toggle_calendar}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if *show_calendar {
                    html! {
                        <div class="calendar-dropdown">
                            <div class="calendar-header">
                                <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                                <span class="month-year">
                                    {format!("{} {}", month_name(*view_month), *view_year)}
                                </span>
                                <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                            </div>

                            <div class="calendar-grid">
                                <div class="weekday-header">
                                    <span>{"Sun"}</span>
                                    <span>{"Mon"}</span>
                                    <span>{"Tue"}</span>
                                    <span>{"Wed"}</span>
                                    <span>{"Thu"}</span>
                                    <span>{"Fri"}</span>
                                    <span>{"Sat"}</span>
                                </div>

                                <div class="calendar-days">
                                    {for grid.iter().map(|grid_day| {
                                        let date = grid_day.date;
                                        let on_day_select = on_day_select.clone();
                                        let is_selected = date == props.selected;
                                        let is_today = date == today;

                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(
                                                    "calendar-day",
                                                    grid_day.in_month.then_some("current-month"),
                                                    (!grid_day.in_month).then_some("other-month"),
                                                    (!grid_day.selectable).then_some("out-of-range"),
                                                    is_selected.then_some("selected"),
                                                    is_today.then_some("today"),
                                                )}
                                                disabled={!grid_day.selectable}
                                                onclick={Callback::from(move |_: MouseEvent| {
                                                    on_day_select.emit(date);
                                                })}
                                            >
                                                {date.day()}
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct GridDay {
    date: NaiveDate,
    in_month: bool,
    selectable: bool,
}

/// Six-week grid for one month, padded with the neighbor months' days so the
/// first cell is always a Sunday.
fn month_grid(
    year: i32,
    month: u32,
    min_day: Option<NaiveDate>,
    max_day: Option<NaiveDate>,
) -> Vec<GridDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first - Days::new(lead);

    (0..42)
        .map(|offset| {
            let date = grid_start + Days::new(offset);
            GridDay {
                date,
                in_month: date.month() == month,
                selectable: within_bounds(date, min_day, max_day),
            }
        })
        .collect()
}

fn within_bounds(day: NaiveDate, min_day: Option<NaiveDate>, max_day: Option<NaiveDate>) -> bool {
    min_day.map_or(true, |floor| day >= floor) && max_day.map_or(true, |cap| day <= cap)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).unwrap()
    }

    #[test]
    fn test_month_grid_pads_to_six_sunday_aligned_weeks() {
        // June 2024 starts on a Saturday, so the grid opens on May 26
        let grid = month_grid(2024, 6, None, None);
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].date, day(2024, 5, 26));
        assert!(!grid[0].in_month);
        assert_eq!(grid.iter().filter(|g| g.in_month).count(), 30);
        assert_eq!(grid[41].date, day(2024, 7, 6));
    }

    #[test]
    fn test_month_grid_handles_leap_february() {
        let grid = month_grid(2024, 2, None, None);
        assert_eq!(grid.iter().filter(|g| g.in_month).count(), 29);
    }

    #[test]
    fn test_days_past_the_cap_are_not_selectable() {
        let grid = month_grid(2024, 6, None, Some(day(2024, 6, 10)));
        let on = |dom: u32| grid.iter().find(|g| g.date == day(2024, 6, dom)).unwrap();

        assert!(on(10).selectable);
        assert!(!on(11).selectable);
    }

    #[test]
    fn test_days_before_the_floor_are_not_selectable() {
        let grid = month_grid(2024, 6, Some(day(2024, 6, 3)), None);
        let on = |dom: u32| grid.iter().find(|g| g.date == day(2024, 6, dom)).unwrap();

        assert!(!on(2).selectable);
        assert!(on(3).selectable);
    }

    #[test]
    fn test_bounds_apply_across_both_endpoints() {
        assert!(within_bounds(day(2024, 6, 5), Some(day(2024, 6, 3)), Some(day(2024, 6, 10))));
        assert!(!within_bounds(day(2024, 6, 2), Some(day(2024, 6, 3)), Some(day(2024, 6, 10))));
        assert!(!within_bounds(day(2024, 6, 11), Some(day(2024, 6, 3)), Some(day(2024, 6, 10))));
        assert!(within_bounds(day(2024, 6, 5), None, None));
    }
}
