use crate::{
    api::{load_session, ApiClient, ApiError, LoginRequest, SessionUser, SignUpRequest},
    pages::auth::repository::AuthRepository,
};
use leptos::*;
use std::rc::Rc;

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    pub fn from_storage() -> Self {
        Self {
            user: load_session(),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().map(SessionUser::has_token).unwrap_or(false)
    }
}

fn create_session_context() -> SessionContext {
    let state = SessionState::from_storage();
    log::debug!("session restored: authenticated={}", state.is_authenticated());
    create_signal(state)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(create_session_context)
}

fn auth_repository() -> AuthRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AuthRepository::new_with_client(Rc::new(api))
}

async fn establish_session<F>(
    attempt: F,
    set_state: WriteSignal<SessionState>,
) -> Result<(), ApiError>
where
    F: std::future::Future<Output = Result<SessionUser, ApiError>>,
{
    set_state.update(|state| state.loading = true);
    match attempt.await {
        Ok(user) => {
            set_state.update(|state| {
                state.user = Some(user);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &AuthRepository,
    set_state: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    establish_session(repo.login(request), set_state).await
}

pub async fn sign_up_request(
    request: SignUpRequest,
    repo: &AuthRepository,
    set_state: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    establish_session(repo.sign_up(request), set_state).await
}

pub fn logout(repo: &AuthRepository, set_state: WriteSignal<SessionState>) {
    repo.logout();
    set_state.set(SessionState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let repo = auth_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_session).await }
    })
}

pub fn use_sign_up_action() -> Action<SignUpRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let repo = auth_repository();

    create_action(move |request: &SignUpRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { sign_up_request(payload, &repo, set_session).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_session, set_session) = use_session();
    let repo = store_value(auth_repository());
    Callback::new(move |_| logout(&repo.get_value(), set_session))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{clear_session, load_session};
    use crate::test_support::ssr::with_local_runtime_async;
    use crate::utils::navigation::{self, Navigation};

    #[test]
    fn login_and_logout_update_session_state() {
        with_local_runtime_async(|| async {
            clear_session();
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/user/login");
                then.status(200).json_body(serde_json::json!({
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "jwt": "token-1"
                }));
            });

            let runtime = create_runtime();
            let (state, set_state) = create_signal(SessionState::default());
            let api = ApiClient::new_with_base_url(server.url(""));
            let repo = AuthRepository::new_with_client(Rc::new(api));

            login_request(
                LoginRequest {
                    email: "jane@example.com".into(),
                    password: "secret".into(),
                },
                &repo,
                set_state,
            )
            .await
            .unwrap();

            let snapshot = state.get();
            assert!(snapshot.is_authenticated());
            assert!(!snapshot.loading);
            assert!(load_session().is_some());

            navigation::take_recorded();
            logout(&repo, set_state);
            assert!(!state.get().is_authenticated());
            assert!(load_session().is_none());
            assert_eq!(navigation::take_recorded(), vec![Navigation::Replace("/".into())]);
            runtime.dispose();
        });
    }

    #[test]
    fn failed_sign_up_leaves_state_signed_out() {
        with_local_runtime_async(|| async {
            clear_session();
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/user/signIn");
                then.status(409).json_body(serde_json::json!("Email already exists"));
            });

            let runtime = create_runtime();
            let (state, set_state) = create_signal(SessionState::default());
            let repo = AuthRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                server.url(""),
            )));

            let result = sign_up_request(
                SignUpRequest {
                    full_name: "Jane Doe".into(),
                    email: "jane@example.com".into(),
                    password: "pw".into(),
                    confirm_password: "pw".into(),
                },
                &repo,
                set_state,
            )
            .await;

            assert!(result.is_err());
            assert_eq!(state.get(), SessionState::default());
            runtime.dispose();
        });
    }
}
