#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{persist_session, SessionUser};
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn session_user(name: &str) -> SessionUser {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "email": "user@example.com",
            "jwt": "test-token"
        }))
        .expect("session fixture")
    }

    /// Writes a signed-in session to storage, as a previous login would.
    pub fn store_session(name: &str) -> SessionUser {
        let user = session_user(name);
        persist_session(&user).expect("persist session");
        user
    }

    pub fn provide_session(user: Option<SessionUser>) -> SessionContext {
        let ctx = create_signal(SessionState {
            user,
            loading: false,
        });
        provide_context::<SessionContext>(ctx);
        ctx
    }
}
