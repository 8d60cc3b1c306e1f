#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::utils::navigation::{self, Navigation};
use serde_json::json;

fn session_json(jwt: &str) -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "jwt": jwt,
        "role": "EMPLOYEE"
    })
}

fn balances_json() -> serde_json::Value {
    json!([
        { "leaveType": "SICK", "remainingDays": 8, "maxDays": 12 },
        { "leaveType": "CASUAL", "remainingDays": 0, "maxDays": 6 }
    ])
}

fn history_json() -> serde_json::Value {
    json!([
        {
            "id": "r1",
            "leaveType": "EARNED",
            "start": "2026-03-02",
            "end": "2026-03-06",
            "noDays": 5,
            "status": "APPROVED",
            "appliedDate": "2026-02-20"
        },
        {
            "id": "r2",
            "leaveType": "SICK",
            "start": "2026-04-01",
            "end": "2026-04-01",
            "noDays": 1,
            "status": "PENDING"
        }
    ])
}

fn pending_json() -> serde_json::Value {
    json!([{
        "id": "p1",
        "employeeName": "John Smith",
        "employeeId": "EMP-7",
        "leaveType": "CASUAL",
        "start": "2026-05-11",
        "end": "2026-05-12",
        "noDays": 2,
        "appliedOn": "2026-05-01"
    }])
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url(""))
}

fn sign_in_locally() {
    let user: SessionUser = serde_json::from_value(session_json("token-123")).unwrap();
    persist_session(&user).unwrap();
}

#[tokio::test]
async fn login_persists_returned_session() {
    clear_session();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/user/login");
        then.status(200).json_body(session_json("token-abc"));
    });

    let client = api_client(&server);
    let user = client
        .login(LoginRequest {
            email: "jane@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.first_name(), "Jane");
    assert_eq!(load_session().map(|u| u.jwt), Some("token-abc".into()));
    let sent = server.received();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        Some(json!({ "email": "jane@example.com", "password": "secret" }))
    );
    assert_eq!(sent[0].authorization, None);
    clear_session();
}

#[tokio::test]
async fn login_failure_keeps_session_empty() {
    clear_session();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/user/login");
        then.status(400).json_body(json!("Invalid Credentials"));
    });

    let err = api_client(&server)
        .login(LoginRequest {
            email: "jane@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, "VALIDATION_ERROR");
    assert!(load_session().is_none());
}

#[tokio::test]
async fn sign_up_rejects_mismatched_passwords_without_calling_backend() {
    let server = MockServer::start_async().await;
    let err = api_client(&server)
        .sign_up(SignUpRequest {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, "VALIDATION_ERROR");
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn sign_up_posts_camel_case_form_and_stores_session() {
    clear_session();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/user/signIn");
        then.status(200).json_body(session_json("token-new"));
    });

    api_client(&server)
        .sign_up(SignUpRequest {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        })
        .await
        .unwrap();

    assert_eq!(server.received()[0].body.as_ref().unwrap()["fullName"], "Jane Doe");
    assert!(load_session().is_some());
    clear_session();
}

#[tokio::test]
async fn leave_endpoints_send_bearer_token_and_decode_payloads() {
    sign_in_locally();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/balance/all");
        then.status(200).json_body(balances_json());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/leaves/history");
        then.status(200).json_body(history_json());
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/leaves/apply");
        then.status(200).json_body(json!("Leave applied"));
    });

    let client = api_client(&server);
    let balances = client.get_balances().await.unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].used_days(), 4);

    let history = client.get_my_requests().await.unwrap();
    assert_eq!(history[0].status, LeaveStatus::Approved);
    assert_eq!(history[1].applied_date, None);

    client
        .apply_leave(ApplyLeaveRequest {
            leave_type: Some("SICK".into()),
            start: Some("2026-02-10".into()),
            end: Some("2026-02-20".into()),
        })
        .await
        .unwrap();

    for request in server.received() {
        assert_eq!(request.authorization.as_deref(), Some("Bearer token-123"));
    }
    assert_eq!(
        server.received().last().unwrap().body,
        Some(json!({ "leaveType": "SICK", "start": "2026-02-10", "end": "2026-02-20" }))
    );
    clear_session();
}

#[tokio::test]
async fn apply_leave_reports_insufficient_balance_as_not_found() {
    sign_in_locally();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/leaves/apply");
        then.status(404).json_body(json!("Not enough remaining days"));
    });

    let err = api_client(&server)
        .apply_leave(ApplyLeaveRequest {
            leave_type: Some("CASUAL".into()),
            start: Some("2026-02-10".into()),
            end: Some("2026-02-20".into()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, "NOT_FOUND");
    clear_session();
}

#[tokio::test]
async fn manager_endpoints_list_and_decide() {
    sign_in_locally();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/manage/users/pending");
        then.status(200).json_body(pending_json());
    });
    server.mock(|when, then| {
        when.method(PUT).path("/manage/requests/p1/approve");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/manage/requests/p1/reject");
        then.status(500).json_body(json!({ "error": "boom", "code": "INTERNAL" }));
    });

    let client = api_client(&server);
    let pending = client.get_pending_requests().await.unwrap();
    assert_eq!(pending[0].employee_name, "John Smith");
    client.approve_request("p1").await.unwrap();
    let err = client.reject_request("p1").await.unwrap_err();
    assert_eq!(err.code, "INTERNAL");
    assert_eq!(server.hits(PUT, "/manage/requests/p1/approve"), 1);
    clear_session();
}

#[tokio::test]
async fn unauthorized_response_clears_session_and_redirects_home() {
    sign_in_locally();
    navigation::take_recorded();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/balance/all");
        then.status(401).json_body(json!({ "error": "unauthorized", "code": "UNAUTHORIZED" }));
    });

    let err = api_client(&server).get_balances().await.unwrap_err();
    assert_eq!(err.code, "UNAUTHORIZED");
    assert!(load_session().is_none());
    assert_eq!(navigation::take_recorded(), vec![Navigation::Replace("/".into())]);
}

#[tokio::test]
async fn authorized_call_without_session_never_reaches_backend() {
    clear_session();
    let server = MockServer::start_async().await;
    let err = api_client(&server).get_my_requests().await.unwrap_err();
    assert_eq!(err.code, "UNAUTHORIZED");
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn logout_forgets_session_and_leaves_app() {
    sign_in_locally();
    navigation::take_recorded();
    ApiClient::new().logout();
    assert!(load_session().is_none());
    assert_eq!(navigation::take_recorded(), vec![Navigation::Replace("/".into())]);
}
