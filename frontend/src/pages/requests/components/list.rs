use crate::{
    api::{days_label, LeaveRequestRecord},
    components::leave_type::LeaveKind,
    pages::requests::utils::status_badge_class,
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn RequestCard(record: LeaveRequestRecord) -> impl IntoView {
    let kind = LeaveKind::from_type(&record.leave_type);
    let applied = record
        .applied_date
        .as_deref()
        .map(|date| format!("Applied {}", format_display_date(date)));

    view! {
        <div class=format!(
            "bg-surface-elevated rounded-xl shadow-sm border-l-4 {} p-5 flex items-center justify-between",
            kind.border_class()
        )>
            <div class="flex items-center gap-4">
                <span class="text-2xl">{kind.icon()}</span>
                <div>
                    <h3 class="font-bold text-fg">{record.leave_type.clone()}</h3>
                    <p class="text-sm text-fg-muted">{days_label(record.no_days)}</p>
                    {applied.map(|text| view! { <p class="text-xs text-fg-muted">{text}</p> })}
                </div>
            </div>
            <div class="flex items-center gap-6">
                <div class="text-right text-sm">
                    <p class="text-fg-muted">"Start"</p>
                    <p class="font-semibold text-fg">{format_display_date(&record.start)}</p>
                </div>
                <div class="text-right text-sm">
                    <p class="text-fg-muted">"End"</p>
                    <p class="font-semibold text-fg">{format_display_date(&record.end)}</p>
                </div>
                <span class=format!(
                    "px-3 py-1 rounded-full text-xs font-semibold {}",
                    status_badge_class(record.status)
                )>{record.status.label()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn RequestsList(#[prop(into)] records: Signal<Vec<LeaveRequestRecord>>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <For
                each=move || records.get()
                key=|record| record.id.clone()
                children=move |record| view! { <RequestCard record=record /> }
            />
        </div>
    }
}
