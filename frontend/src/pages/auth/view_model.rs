use super::utils::{
    AuthTab, LoginFormState, SignUpFormState, LOGIN_FAILURE_RESET_MS, SIGN_UP_FAILURE_RESET_MS,
};
use crate::api::{ApiError, LoginRequest, SignUpRequest};
use crate::state::session;
use crate::utils::{navigation, time::sleep_ms};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AuthViewModel {
    pub active_tab: RwSignal<AuthTab>,
    pub login_form: LoginFormState,
    pub sign_up_form: SignUpFormState,
    /// Validation problems caught before anything is sent.
    pub form_error: RwSignal<Option<ApiError>>,
    pub login_failed: RwSignal<bool>,
    pub sign_up_failed: RwSignal<bool>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub sign_up_action: Action<SignUpRequest, Result<(), ApiError>>,
}

fn apply_login_result(
    result: Option<Result<(), ApiError>>,
    login_form: LoginFormState,
    login_failed: RwSignal<bool>,
) {
    match result {
        Some(Ok(())) => navigation::assign_location("/dashboard"),
        Some(Err(err)) => {
            log::warn!("login failed: {}", err);
            login_failed.set(true);
            spawn_local(async move {
                sleep_ms(LOGIN_FAILURE_RESET_MS).await;
                login_form.reset();
                login_failed.set(false);
            });
        }
        None => {}
    }
}

fn apply_sign_up_result(
    result: Option<Result<(), ApiError>>,
    sign_up_form: SignUpFormState,
    sign_up_failed: RwSignal<bool>,
) {
    match result {
        Some(Ok(())) => navigation::assign_location("/dashboard"),
        Some(Err(err)) => {
            log::warn!("sign up failed: {}", err);
            sign_up_form.reset();
            sign_up_failed.set(true);
            spawn_local(async move {
                sleep_ms(SIGN_UP_FAILURE_RESET_MS).await;
                sign_up_failed.set(false);
            });
        }
        None => {}
    }
}

impl AuthViewModel {
    pub fn new() -> Self {
        let active_tab = create_rw_signal(AuthTab::default());
        let login_form = LoginFormState::default();
        let sign_up_form = SignUpFormState::default();
        let form_error = create_rw_signal(None::<ApiError>);
        let login_failed = create_rw_signal(false);
        let sign_up_failed = create_rw_signal(false);
        let login_action = session::use_login_action();
        let sign_up_action = session::use_sign_up_action();

        create_effect(move |_| {
            apply_login_result(login_action.value().get(), login_form, login_failed);
        });
        create_effect(move |_| {
            apply_sign_up_result(sign_up_action.value().get(), sign_up_form, sign_up_failed);
        });

        Self {
            active_tab,
            login_form,
            sign_up_form,
            form_error,
            login_failed,
            sign_up_failed,
            login_action,
            sign_up_action,
        }
    }

    pub fn select_tab(&self, tab: AuthTab) {
        self.form_error.set(None);
        self.active_tab.set(tab);
    }

    pub fn submit_login(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.login_form.to_request() {
            Ok(request) => {
                self.form_error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub fn submit_sign_up(&self) {
        if self.sign_up_action.pending().get_untracked() {
            return;
        }
        match self.sign_up_form.to_request() {
            Ok(request) => {
                self.form_error.set(None);
                self.sign_up_action.dispatch(request);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }
}

pub fn use_auth_view_model() -> AuthViewModel {
    match use_context::<AuthViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AuthViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
