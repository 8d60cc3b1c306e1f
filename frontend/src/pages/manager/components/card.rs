use crate::{
    api::{days_label, Decision, PendingRequest},
    components::leave_type::LeaveKind,
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn PendingCard(request: PendingRequest, on_decide: Callback<(String, Decision)>) -> impl IntoView {
    let kind = LeaveKind::from_type(&request.leave_type);
    let id = store_value(request.id.clone());

    view! {
        <div class=format!(
            "bg-surface-elevated rounded-xl shadow-sm border-l-4 {} p-5 space-y-4",
            kind.border_class()
        )>
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="font-bold text-lg text-fg">{request.employee_name.clone()}</h3>
                    <p class="text-xs text-fg-muted">{format!("ID: {}", request.employee_id)}</p>
                </div>
                <span class="text-sm font-semibold text-fg">
                    {kind.icon()} " " {request.leave_type.clone()}
                </span>
            </div>
            <div class="grid grid-cols-3 gap-4 text-sm">
                <div>
                    <p class="text-fg-muted">"From"</p>
                    <p class="font-semibold text-fg">{format_display_date(&request.start)}</p>
                </div>
                <div>
                    <p class="text-fg-muted">"To"</p>
                    <p class="font-semibold text-fg">{format_display_date(&request.end)}</p>
                </div>
                <div>
                    <p class="text-fg-muted">"Duration"</p>
                    <p class="font-semibold text-fg">{days_label(request.no_days)}</p>
                </div>
            </div>
            <p class="text-xs text-fg-muted">
                {format!("Applied on {}", format_display_date(&request.applied_on))}
            </p>
            <div class="flex gap-3">
                <button
                    type="button"
                    class="flex-1 py-2 rounded-lg font-semibold bg-status-success-bg text-status-success-text"
                    on:click=move |_| on_decide.call((id.get_value(), Decision::Approve))
                >
                    "Accept"
                </button>
                <button
                    type="button"
                    class="flex-1 py-2 rounded-lg font-semibold bg-status-error-bg text-status-error-text"
                    on:click=move |_| on_decide.call((id.get_value(), Decision::Reject))
                >
                    "Reject"
                </button>
            </div>
        </div>
    }
}
