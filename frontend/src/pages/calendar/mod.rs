use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{ApplyLeavePanel, CalendarPanel};

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! { <CalendarPanel /> }
}
