use crate::{state::session::use_session, utils::navigation};
use leptos::*;

/// Renders `children` only while a session token is present; otherwise the
/// "User Not Found" screen.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let is_authenticated = create_memo(move |_| session.get().is_authenticated());
    view! {
        <Show
            when=move || is_authenticated.get()
            fallback=|| view! { <UserNotFound /> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn UserNotFound() -> impl IntoView {
    view! {
        <div class="flex h-screen items-center justify-center bg-surface">
            <div class="text-center bg-surface-elevated p-8 rounded-lg shadow-md max-w-md">
                <div class="mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-status-error-bg">
                    <span class="text-3xl">"🚫"</span>
                </div>
                <h1 class="text-2xl font-bold text-fg mb-2">"User Not Found"</h1>
                <p class="text-fg-muted mb-6">
                    "The user you are looking for does not exist or may have been removed."
                </p>
                <button
                    type="button"
                    class="rounded-full bg-action-primary-bg px-6 py-2 text-action-primary-text font-medium"
                    on:click=move |_| navigation::go_back()
                >
                    "← Go Back"
                </button>
            </div>
        </div>
    }
}
