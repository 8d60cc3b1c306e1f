use super::{
    components::{filter::RequestsFilter, list::RequestsList},
    view_model::use_requests_view_model,
};
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn RequestsPanel() -> impl IntoView {
    let vm = use_requests_view_model();
    let all_records = vm.all_records();
    let filtered = vm.filtered_records();

    let body = move || match vm.requests_resource.get() {
        None => view! { <LoadingSpinner label="Loading requests..." /> }.into_view(),
        Some(Err(err)) => view! {
            <div class="space-y-3">
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
        Some(Ok(_)) => view! {
            <RequestsFilter filter=vm.filter records=all_records />
            <Show
                when=move || filtered.with(|records| !records.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No leave requests found"
                        description="Requests you submit will appear here."
                    />
                }
            >
                <RequestsList records=filtered />
            </Show>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="mb-8">
                <h1 class="text-4xl font-bold text-fg">"Requests History"</h1>
                <p class="text-fg-muted mt-2">"Track the status of your leave requests"</p>
            </div>
            {body}
        </Layout>
    }
}
