use super::{
    components::balance_card::BalanceCard, utils::welcome_message,
    view_model::use_dashboard_view_model,
};
use crate::{
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (session, _) = use_session();
    let greeting = move || {
        session.with(|state| {
            welcome_message(
                state
                    .user
                    .as_ref()
                    .map(|user| user.first_name())
                    .unwrap_or("User"),
            )
        })
    };

    let balances_view = move || match vm.balances_resource.get() {
        None => view! { <LoadingSpinner label="Loading leave balance..." /> }.into_view(),
        Some(Err(err)) => view! {
            <div class="col-span-full space-y-3">
                <ErrorMessage message=err.error />
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg font-semibold bg-action-primary-bg text-action-primary-text"
                    on:click=move |_| vm.retry()
                >
                    "Retry"
                </button>
            </div>
        }
        .into_view(),
        Some(Ok(balances)) if balances.is_empty() => view! {
            <div class="col-span-full">
                <EmptyState title="No leave balance data available." />
            </div>
        }
        .into_view(),
        Some(Ok(balances)) => balances
            .into_iter()
            .map(|balance| view! { <BalanceCard balance=balance /> })
            .collect_view(),
    };

    view! {
        <Layout>
            <div class="mb-10">
                <h1 class="text-4xl font-bold text-fg">{greeting}</h1>
                <p class="text-fg-muted mt-2">"Here's your leave balance overview for this year"</p>
            </div>
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{balances_view}</div>
        </Layout>
    }
}
