use crate::{
    api::LeaveBalance,
    components::{leave_type::LeaveKind, progress::CircularProgress},
    pages::dashboard::utils::calendar_path,
};
use leptos::*;

fn bar_width(balance: &LeaveBalance) -> String {
    format!("width: {:.0}%", balance.remaining_percent())
}

#[component]
pub fn BalanceCard(balance: LeaveBalance) -> impl IntoView {
    let kind = LeaveKind::from_type(&balance.leave_type);
    let href = calendar_path(&balance.leave_type);
    let width = bar_width(&balance);
    let used = balance.used_days();
    let remaining = balance.remaining_days;
    let max = balance.max_days;
    let title = balance.leave_type.clone();

    view! {
        <div class=format!(
            "bg-surface-elevated rounded-2xl shadow-md border-l-4 {} p-6 flex flex-col gap-6",
            kind.border_class()
        )>
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class="text-3xl">{kind.icon()}</span>
                    <div>
                        <h3 class="text-lg font-bold text-fg">{title}</h3>
                        <p class="text-xs text-fg-muted uppercase tracking-wide">"Leave Balance"</p>
                    </div>
                </div>
                <a
                    href=href
                    class="px-4 py-2 rounded-lg text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                >
                    "Request"
                </a>
            </div>

            <CircularProgress balance=balance />

            <dl class="grid grid-cols-3 gap-2 text-center">
                <div>
                    <dt class="text-xs text-fg-muted">"Total Allocation"</dt>
                    <dd class="text-lg font-bold text-fg">{max}</dd>
                </div>
                <div>
                    <dt class="text-xs text-fg-muted">"Used"</dt>
                    <dd class="text-lg font-bold text-fg">{used}</dd>
                </div>
                <div>
                    <dt class="text-xs text-fg-muted">"Remaining"</dt>
                    <dd class="text-lg font-bold text-fg">{remaining}</dd>
                </div>
            </dl>

            <div class="w-full h-2 rounded-full bg-surface-muted overflow-hidden">
                <div
                    class="h-full rounded-full"
                    style=format!("{}; background-color: {}", width, kind.stroke_color())
                ></div>
            </div>
        </div>
    }
}
