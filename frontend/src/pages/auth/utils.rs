use crate::api::{ApiError, LoginRequest, SignUpRequest};
use leptos::*;

pub const LOGIN_FAILURE_RESET_MS: u32 = 2_000;
pub const SIGN_UP_FAILURE_RESET_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.password.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct SignUpFormState {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl Default for SignUpFormState {
    fn default() -> Self {
        Self {
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }
}

impl SignUpFormState {
    pub fn to_request(&self) -> Result<SignUpRequest, ApiError> {
        let request = SignUpRequest {
            full_name: self.full_name.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        };
        validate_sign_up(&request)?;
        Ok(request)
    }

    pub fn reset(&self) {
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.confirm_password.set(String::new());
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

pub fn validate_sign_up(request: &SignUpRequest) -> Result<(), ApiError> {
    if request.full_name.is_empty() {
        return Err(ApiError::validation("Full name is required"));
    }
    validate_credentials(&request.email, &request.password)?;
    if request.password != request.confirm_password {
        return Err(ApiError::validation("Passwords do not match!"));
    }
    Ok(())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_states_build_requests_and_reset() {
        with_runtime(|| {
            let login = LoginFormState::default();
            login.email.set(" jane@example.com ".into());
            login.password.set("pw".into());
            assert_eq!(login.to_request().unwrap().email, "jane@example.com");
            login.reset();
            assert!(login.email.get().is_empty());

            let sign_up = SignUpFormState::default();
            sign_up.full_name.set("Jane".into());
            sign_up.email.set("jane@example.com".into());
            sign_up.password.set("a".into());
            sign_up.confirm_password.set("b".into());
            assert!(sign_up.to_request().is_err());
            sign_up.confirm_password.set("a".into());
            assert_eq!(sign_up.to_request().unwrap().full_name, "Jane");
            sign_up.reset();
            assert!(sign_up.confirm_password.get().is_empty());
        });
    }
}
