use super::{utils::page_subtitle, view_model::ApplyLeaveViewModel};
use crate::{
    components::{calendar::RangeCalendar, layout::Layout, overlay::StatusOverlay},
    pages::calendar::utils::{normalize_leave_type, ApplyOutcome},
    utils::time::today_in_app_tz,
};
use chrono::NaiveDate;
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn CalendarPanel() -> impl IntoView {
    let query = use_query_map();
    let leave_type = normalize_leave_type(query.with_untracked(|params| params.get("leaveType").cloned()));
    view! { <ApplyLeavePanel leave_type=leave_type today=today_in_app_tz() /> }
}

#[component]
pub fn ApplyLeavePanel(
    #[prop(default = None)] leave_type: Option<String>,
    today: NaiveDate,
) -> impl IntoView {
    let vm = ApplyLeaveViewModel::new(leave_type.clone());
    let subtitle = page_subtitle(leave_type.as_deref());

    let on_start = Callback::new(move |iso: String| vm.record_start(iso));
    let on_end = Callback::new(move |iso: String| vm.record_end(iso));
    let on_request = Callback::new(move |_: ()| vm.submit());

    let overlay = move || {
        vm.outcome.get().map(|outcome| {
            view! {
                <StatusOverlay
                    title=outcome.title()
                    message=outcome.message()
                    success=matches!(outcome, ApplyOutcome::Applied)
                />
            }
        })
    };

    view! {
        <Layout>
            <div class="mb-8">
                <h1 class="text-4xl font-bold text-fg">"Calendar"</h1>
                <p class="text-fg-muted mt-2">{subtitle}</p>
            </div>
            <RangeCalendar
                leave_type=leave_type
                today=today
                on_start=on_start
                on_end=on_end
                on_request=on_request
            />
            {overlay}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, session_user};
    use crate::test_support::ssr::render_to_string;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    #[test]
    fn apply_leave_panel_renders_calendar_for_leave_type() {
        let html = render_to_string(|| {
            provide_session(Some(session_user("Jane Doe")));
            view! { <ApplyLeavePanel leave_type=Some("EARNED".to_string()) today=today() /> }
        });
        assert!(html.contains("Calendar"));
        assert!(html.contains("Select dates for your EARNED request"));
        assert!(html.contains("February 2026"));
        assert!(!html.contains("Leave Applied Successfully"));
    }

    #[test]
    fn apply_leave_panel_without_leave_type_uses_default_copy() {
        let html = render_to_string(|| {
            provide_session(Some(session_user("Jane Doe")));
            view! { <ApplyLeavePanel today=today() /> }
        });
        assert!(html.contains("Select the dates for your leave request"));
        assert!(html.contains("Current Month"));
    }
}
