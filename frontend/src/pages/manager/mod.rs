use leptos::*;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::ManagerPanel;

#[component]
pub fn ManagerPage() -> impl IntoView {
    view! { <ManagerPanel /> }
}
