use crate::state::session::{use_logout, use_session};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, _set_session) = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let logout = use_logout();

    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.display_name().to_string())
            .unwrap_or_else(|| "User".to_string())
    };
    let email = move || session.get().user.map(|user| user.email).unwrap_or_default();
    let initials = move || {
        session
            .get()
            .user
            .map(|user| user.initials())
            .unwrap_or_else(|| "U".to_string())
    };
    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <a href="/dashboard" class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-lg bg-action-primary-bg flex items-center justify-center text-action-primary-text">
                            "📅"
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-fg">"LeaveHub"</h1>
                            <p class="text-xs text-fg-muted">"Leave Management"</p>
                        </div>
                    </a>
                    <div class="flex items-center gap-6">
                        <nav class="hidden md:flex items-center gap-2">
                            <a
                                href="/dashboard/requests"
                                class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded-lg font-medium"
                                aria-label="View leave requests"
                            >
                                "Requests History"
                            </a>
                            <a
                                href="/dashboard/manager"
                                class="px-4 py-2 text-fg-muted hover:text-fg rounded-lg font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Approvals"
                            </a>
                        </nav>
                        <div class="relative">
                            <button
                                type="button"
                                class="flex items-center gap-3 p-2 rounded-lg hover:bg-action-ghost-bg-hover"
                                on:click=toggle_menu
                                aria-expanded=move || menu_open.get().to_string()
                                aria-haspopup="true"
                            >
                                <div class="user-avatar w-10 h-10 rounded-full bg-action-primary-bg/20 flex items-center justify-center font-semibold">
                                    {initials}
                                </div>
                                <div class="text-left hidden sm:block">
                                    <p class="text-sm font-semibold text-fg">{display_name}</p>
                                    <p class="text-xs text-fg-muted">{email}</p>
                                </div>
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="absolute right-0 mt-2 w-48 bg-surface-elevated rounded-lg shadow-lg border border-border py-2">
                                    <a
                                        href="/dashboard/requests"
                                        class="md:hidden block px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Requests History"
                                    </a>
                                    <a
                                        href="/dashboard/manager"
                                        class="md:hidden block px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Approvals"
                                    </a>
                                    <button
                                        type="button"
                                        on:click=on_logout
                                        class="w-full text-left px-4 py-2 text-status-error-text text-sm"
                                    >
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="col-span-full flex justify-center items-center gap-2 p-8 text-fg-muted">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|text| view! { <span>{text}</span> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
