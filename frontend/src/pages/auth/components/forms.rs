use crate::api::ApiError;
use crate::pages::auth::utils::{LoginFormState, SignUpFormState};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-border bg-surface text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";
const SUBMIT_CLASS: &str = "w-full py-3 rounded-lg font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50";

#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                required
                class=INPUT_CLASS
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn InlineError(error: RwSignal<Option<ApiError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <p class="text-sm text-status-error-text">{err.error}</p>
            }
        })
    }
}

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-5" on:submit=move |ev| on_submit.call(ev)>
            <FormField id="login-email" label="Email" input_type="email" value=form.email />
            <FormField id="login-password" label="Password" input_type="password" value=form.password />
            <InlineError error=error />
            <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                {move || if pending.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[component]
pub fn SignUpForm(
    form: SignUpFormState,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-5" on:submit=move |ev| on_submit.call(ev)>
            <FormField id="signup-name" label="Full Name" input_type="text" value=form.full_name />
            <FormField id="signup-email" label="Email" input_type="email" value=form.email />
            <FormField id="signup-password" label="Password" input_type="password" value=form.password />
            <FormField
                id="signup-confirm"
                label="Confirm Password"
                input_type="password"
                value=form.confirm_password
            />
            <InlineError error=error />
            <button type="submit" class=SUBMIT_CLASS disabled=move || pending.get()>
                {move || if pending.get() { "Creating account..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
