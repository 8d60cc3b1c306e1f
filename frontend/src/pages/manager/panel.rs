use super::{components::card::PendingCard, view_model::use_manager_view_model};
use crate::{
    api::Decision,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};
use leptos::*;

fn awaiting_label(count: usize) -> String {
    if count == 1 {
        "1 request awaiting approval".to_string()
    } else {
        format!("{} requests awaiting approval", count)
    }
}

#[component]
pub fn ManagerPanel() -> impl IntoView {
    let vm = use_manager_view_model();
    let visible = vm.visible_requests();
    let on_decide = Callback::new(move |(id, decision): (String, Decision)| vm.decide(id, decision));

    let body = move || match vm.pending_resource.get() {
        None => view! { <LoadingSpinner label="Loading pending requests..." /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
        Some(Ok(_)) => view! {
            <p class="text-fg-muted mb-6">{move || visible.with(|requests| awaiting_label(requests.len()))}</p>
            <Show
                when=move || visible.with(|requests| !requests.is_empty())
                fallback=|| view! {
                    <EmptyState title="No pending requests" description="You're all caught up." icon="✅" />
                }
            >
                <div class="grid gap-4 md:grid-cols-2">
                    <For
                        each=move || visible.get()
                        key=|request| request.id.clone()
                        children=move |request| view! { <PendingCard request=request on_decide=on_decide /> }
                    />
                </div>
            </Show>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="mb-4">
                <h1 class="text-4xl font-bold text-fg">"Pending Approvals"</h1>
            </div>
            {body}
        </Layout>
    }
}
