use super::{
    components::forms::{LoginForm, SignUpForm},
    utils::AuthTab,
    view_model::use_auth_view_model,
};
use crate::components::overlay::StatusOverlay;
use leptos::{ev::SubmitEvent, *};

fn tab_class(active: bool) -> &'static str {
    if active {
        "flex-1 py-3 font-semibold border-b-2 border-action-primary-bg text-fg"
    } else {
        "flex-1 py-3 font-medium border-b-2 border-transparent text-fg-muted"
    }
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let vm = use_auth_view_model();
    let active_tab = vm.active_tab;

    let on_login = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_login();
    });
    let on_sign_up = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_sign_up();
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-md bg-surface-elevated rounded-2xl shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-fg">"LeaveHub"</h1>
                    <p class="text-fg-muted mt-1">"Leave Management"</p>
                </div>
                <div class="flex">
                    <button
                        type="button"
                        class=move || tab_class(active_tab.get() == AuthTab::Login)
                        on:click=move |_| vm.select_tab(AuthTab::Login)
                    >
                        "Login"
                    </button>
                    <button
                        type="button"
                        class=move || tab_class(active_tab.get() == AuthTab::SignUp)
                        on:click=move |_| vm.select_tab(AuthTab::SignUp)
                    >
                        "Sign Up"
                    </button>
                </div>
                <Show
                    when=move || active_tab.get() == AuthTab::Login
                    fallback=move || view! {
                        <SignUpForm
                            form=vm.sign_up_form
                            error=vm.form_error
                            pending=vm.sign_up_action.pending().into()
                            on_submit=on_sign_up
                        />
                    }
                >
                    <LoginForm
                        form=vm.login_form
                        error=vm.form_error
                        pending=vm.login_action.pending().into()
                        on_submit=on_login
                    />
                </Show>
                <p class="text-center text-sm text-fg-muted">
                    "Keep track of your leave requests in one place"
                </p>
            </div>
            <Show when=move || vm.login_failed.get()>
                <StatusOverlay title="Invalid Credentials" message="Refreshing in 2 seconds..." />
            </Show>
            <Show when=move || vm.sign_up_failed.get()>
                <StatusOverlay title="Email already exists" message="Please try again with a different email" />
            </Show>
        </div>
    }
}
