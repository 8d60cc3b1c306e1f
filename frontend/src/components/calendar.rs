use crate::utils::calendar::{
    CalendarDay, CalendarEvent, CalendarState, MONTH_NAMES, WEEKDAY_LABELS,
};
use chrono::NaiveDate;
use leptos::*;

fn subtitle(leave_type: Option<&str>, state: &CalendarState) -> String {
    match leave_type.map(str::trim).filter(|t| !t.is_empty()) {
        Some(kind) => format!("Planning {} leave", kind),
        None if state.is_displaying_today_month() => "Current Month".to_string(),
        None => format!(
            "{} {}",
            state.displayed().name(),
            state.displayed_year()
        ),
    }
}

fn day_class(day: &CalendarDay) -> &'static str {
    if !day.belongs_to_displayed_month {
        "cal-day text-fg-muted/30 bg-surface-muted/20 cursor-default border-transparent"
    } else if day.is_past {
        "cal-day text-fg-muted bg-surface-muted cursor-not-allowed"
    } else if day.is_today {
        "cal-day cal-today bg-action-primary-bg/30 font-bold cursor-not-allowed"
    } else if day.is_range_start || day.is_range_end {
        "cal-day cal-endpoint bg-action-primary-bg text-action-primary-text font-bold"
    } else if day.is_range_interior() {
        "cal-day cal-in-range bg-action-primary-bg/20"
    } else {
        "cal-day bg-surface text-fg hover:border-action-primary-bg cursor-pointer"
    }
}

fn nav_class(enabled: bool) -> &'static str {
    if enabled {
        "px-4 py-2 rounded-lg font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "px-4 py-2 rounded-lg font-medium bg-surface-muted text-fg-muted cursor-not-allowed"
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

fn range_length(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

fn short_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Not set".to_string())
}

/// Applies `event` and, when it completes a range, reports start then end.
fn dispatch_event(
    state: RwSignal<CalendarState>,
    event: CalendarEvent,
    on_start: Callback<String>,
    on_end: Callback<String>,
) {
    let transition = state.get_untracked().apply(event);
    state.set(transition.state);
    if let Some(range) = transition.completed {
        on_start.call(range.start_iso());
        on_end.call(range.end_iso());
    }
}

/// Month grid that turns two qualifying clicks into an ordered date range.
/// `on_start`/`on_end` receive `YYYY-MM-DD` strings, in that order, each time
/// a range is completed.
#[component]
pub fn RangeCalendar(
    #[prop(default = None)] leave_type: Option<String>,
    today: NaiveDate,
    on_start: Callback<String>,
    on_end: Callback<String>,
    on_request: Callback<()>,
) -> impl IntoView {
    let state = create_rw_signal(CalendarState::new(today));
    let leave_type = store_value(leave_type);

    let dispatch = move |event: CalendarEvent| dispatch_event(state, event, on_start, on_end);

    let title = move || {
        let current = state.get();
        format!(
            "{} {}",
            MONTH_NAMES[current.displayed_month0() as usize],
            current.displayed_year()
        )
    };
    let heading = move || leave_type.with_value(|kind| subtitle(kind.as_deref(), &state.get()));
    let can_previous = move || state.get().can_go_previous();
    let can_next = move || state.get().can_go_next();
    let has_selection = move || {
        let current = state.get();
        current.start().is_some() || current.end().is_some()
    };

    view! {
        <div class="w-full max-w-6xl mx-auto">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h2 class="text-4xl font-bold text-fg">{title}</h2>
                    <p class="text-fg-muted mt-2 font-medium">{heading}</p>
                </div>
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        title="Previous Month"
                        class=move || nav_class(can_previous())
                        disabled=move || !can_previous()
                        on:click=move |_| dispatch(CalendarEvent::PreviousMonth)
                    >
                        "Previous"
                    </button>
                    <button
                        type="button"
                        title="Next Month"
                        class=move || nav_class(can_next())
                        disabled=move || !can_next()
                        on:click=move |_| dispatch(CalendarEvent::NextMonth)
                    >
                        "Next"
                    </button>
                </div>
            </div>

            <div class="bg-surface-elevated rounded-2xl border-2 border-border shadow-lg p-8">
                <div class="grid grid-cols-7 gap-4 mb-6">
                    {WEEKDAY_LABELS
                        .iter()
                        .map(|label| view! {
                            <div class="text-center font-semibold text-fg-muted text-sm uppercase">
                                {*label}
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-7 gap-4">
                    {move || {
                        state
                            .get()
                            .grid()
                            .into_iter()
                            .map(|day| {
                                view! {
                                    <button
                                        type="button"
                                        class=day_class(&day)
                                        disabled=!day.is_selectable()
                                        on:click=move |_| dispatch(CalendarEvent::DayClicked(day))
                                    >
                                        {day.day_number}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=has_selection>
                    <SelectedPeriod state=state on_request=on_request />
                </Show>
            </div>
        </div>
    }
}

/// Start/end summary under the grid; the request button needs a full range.
#[component]
fn SelectedPeriod(state: RwSignal<CalendarState>, on_request: Callback<()>) -> impl IntoView {
    view! {
        <div class="mt-8 pt-8 border-t-2 border-border">
            <p class="text-fg-muted mb-3 text-sm font-medium uppercase tracking-wide">
                "Selected Leave Period"
            </p>
            <div class="flex items-center gap-4">
                <div>
                    <p class="text-xs text-fg-muted uppercase font-medium">"Start Date"</p>
                    <p class="text-xl font-bold">{move || short_date(state.get().start())}</p>
                </div>
                <span class="text-2xl font-light">"→"</span>
                <div>
                    <p class="text-xs text-fg-muted uppercase font-medium">"End Date"</p>
                    <p class="text-xl font-bold">{move || short_date(state.get().end())}</p>
                </div>
            </div>
            {move || {
                state.get().selected_range().map(|range| {
                    view! {
                        <div class="mt-4 pt-4 border-t border-border">
                            <p class="text-sm text-fg-muted">"Full range:"</p>
                            <p class="text-lg font-semibold text-fg">
                                {format!("{} → {}", long_date(range.start), long_date(range.end))}
                            </p>
                            <p class="text-sm text-fg-muted">{range_length(range.days())}</p>
                        </div>
                    }
                })
            }}
            <Show when=move || state.get().can_finalize()>
                <button
                    type="button"
                    class="mt-4 px-6 py-2 bg-action-primary-bg text-action-primary-text rounded-lg font-semibold"
                    on:click=move |_| on_request.call(())
                >
                    "Leave Requests"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn subtitle_prefers_leave_type() {
        let state = CalendarState::new(date(2026, 2, 15));
        assert_eq!(subtitle(Some("SICK"), &state), "Planning SICK leave");
        assert_eq!(subtitle(None, &state), "Current Month");
        assert_eq!(subtitle(Some("  "), &state), "Current Month");

        let later = state.next_month();
        assert_eq!(subtitle(None, &later), "March 2026");
    }

    #[test]
    fn day_class_orders_visual_states() {
        let state = CalendarState::new(date(2026, 2, 15));
        let grid = state.grid();
        let placeholder = grid.iter().find(|d| !d.belongs_to_displayed_month).unwrap();
        let past = grid
            .iter()
            .find(|d| d.belongs_to_displayed_month && d.day_number == 3)
            .unwrap();
        let today = grid.iter().find(|d| d.is_today).unwrap();
        assert!(day_class(placeholder).contains("cursor-default"));
        assert!(day_class(past).contains("cursor-not-allowed"));
        assert!(day_class(today).contains("cal-today"));
    }

    #[test]
    fn date_labels_fall_back_when_unset() {
        assert_eq!(short_date(None), "Not set");
        assert_eq!(short_date(Some(date(2026, 2, 10))), "Feb 10, 2026");
        assert_eq!(long_date(date(2026, 2, 10)), "Tuesday, Feb 10");
        assert_eq!(range_length(1), "1 day");
        assert_eq!(range_length(11), "11 days");
    }
}
