use crate::{api::LeaveBalance, components::leave_type::LeaveKind};
use leptos::*;
use std::f64::consts::PI;

pub const RING_RADIUS: f64 = 45.0;

pub fn circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Stroke offset that leaves `percent` of the ring drawn.
pub fn dash_offset(percent: f64) -> f64 {
    let percent = percent.clamp(0.0, 100.0);
    circumference() - percent / 100.0 * circumference()
}

#[component]
pub fn CircularProgress(balance: LeaveBalance) -> impl IntoView {
    let kind = LeaveKind::from_type(&balance.leave_type);
    let offset = dash_offset(balance.remaining_percent());

    view! {
        <div class="flex flex-col items-center justify-center">
            <div class="relative w-32 h-32">
                <svg class="w-full h-full transform -rotate-90" viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r="45" fill="none" stroke=kind.track_color() stroke-width="8"/>
                    <circle
                        cx="50"
                        cy="50"
                        r="45"
                        fill="none"
                        stroke=kind.stroke_color()
                        stroke-width="8"
                        stroke-linecap="round"
                        stroke-dasharray=format!("{:.2}", circumference())
                        stroke-dashoffset=format!("{:.2}", offset)
                    />
                </svg>
                <div class="absolute inset-0 flex flex-col items-center justify-center">
                    <div class="text-2xl font-bold text-fg">{balance.remaining_days}</div>
                    <div class="text-xs text-fg-muted">{format!("of {}", balance.max_days)}</div>
                </div>
            </div>
            <div class="mt-4 text-center">
                <p class="text-sm font-semibold text-fg">{balance.leave_type.clone()}</p>
                <p class="text-xs text-fg-muted mt-1">{balance.remaining_label()}</p>
            </div>
        </div>
    }
}
