//! Talks to a local axum server standing in for the profile API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use profile_model::{PasswordChangeRequest, PersonalInfo, ProfileInfo};
use profile_screen::domains::profile::commands::{
    self, CommandContext, ProfileCommand,
};
use profile_screen::domains::profile::{ProfileError, ProfileMessage};
use profile_screen::infra::api_client::{ApiClient, ApiError};
use profile_screen::infra::services::{ProfileApiAdapter, ProfileService};
use profile_screen::infra::token_store::{FileTokenStore, TOKEN_KEY};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

const WRONG_PASSWORD_BODY: &str = r#"{"message":"wrong password"}"#;

#[derive(Debug, Clone)]
struct Seen {
    method: &'static str,
    authorization: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Backend {
    seen: Arc<Mutex<Vec<Seen>>>,
    /// When set, writes answer with this status and raw body.
    write_failure: Arc<Mutex<Option<(StatusCode, String)>>>,
}

impl Backend {
    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn fail_writes(&self, status: StatusCode, body: &str) {
        *self.write_failure.lock().unwrap() = Some((status, body.to_string()));
    }

    fn record(
        &self,
        method: &'static str,
        headers: &HeaderMap,
        body: Option<Value>,
    ) {
        let authorization = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        self.seen.lock().unwrap().push(Seen {
            method,
            authorization,
            body,
        });
    }

    fn write_response(&self) -> Response {
        match self.write_failure.lock().unwrap().clone() {
            Some((status, body)) => (status, body).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

async fn get_profile(
    State(backend): State<Backend>,
    headers: HeaderMap,
) -> Response {
    backend.record("GET", &headers, None);
    axum::Json(json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann@x.com",
        "username": "annlee",
        "id": 7
    }))
    .into_response()
}

async fn put_profile(
    State(backend): State<Backend>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<Value>,
) -> Response {
    backend.record("PUT", &headers, Some(body));
    backend.write_response()
}

async fn put_password(
    State(backend): State<Backend>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<Value>,
) -> Response {
    backend.record("PUT", &headers, Some(body));
    backend.write_response()
}

struct Harness {
    backend: Backend,
    tokens: FileTokenStore,
    service: ProfileApiAdapter,
    _dir: TempDir,
}

async fn spawn_backend() -> Harness {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/profile", get(get_profile).put(put_profile))
        .route("/api/profile/password", put(put_password))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let tokens = FileTokenStore::new(dir.path().join("session.json"));
    let client = ApiClient::new(
        &format!("http://{}/api", addr),
        Arc::new(tokens.clone()),
    )
    .unwrap();

    Harness {
        backend,
        tokens,
        service: ProfileApiAdapter::new(Arc::new(client)),
        _dir: dir,
    }
}

#[tokio::test]
async fn fetch_decodes_personal_info_and_ignores_extra_fields() {
    let harness = spawn_backend().await;
    harness.tokens.set(TOKEN_KEY, "abc").unwrap();

    let info = harness.service.fetch_profile().await.unwrap();

    assert_eq!(
        info,
        PersonalInfo {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            username: "annlee".into(),
        }
    );
    let seen = harness.backend.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn token_is_read_again_for_every_request() {
    let harness = spawn_backend().await;
    harness.tokens.set(TOKEN_KEY, "first").unwrap();
    harness.service.fetch_profile().await.unwrap();

    harness.tokens.set(TOKEN_KEY, "second").unwrap();
    harness
        .service
        .update_personal_info(PersonalInfo::default())
        .await
        .unwrap();

    let auth: Vec<_> = harness
        .backend
        .seen()
        .into_iter()
        .map(|seen| seen.authorization)
        .collect();
    assert_eq!(
        auth,
        vec![Some("Bearer first".into()), Some("Bearer second".into())]
    );
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let harness = spawn_backend().await;

    harness.service.fetch_profile().await.unwrap();
    harness.tokens.set(TOKEN_KEY, "").unwrap();
    harness.service.fetch_profile().await.unwrap();

    for seen in harness.backend.seen() {
        assert_eq!(seen.authorization, None);
    }
}

#[tokio::test]
async fn write_bodies_use_camel_case_wire_names() {
    let harness = spawn_backend().await;
    harness.tokens.set(TOKEN_KEY, "abc").unwrap();

    harness
        .service
        .update_personal_info(PersonalInfo {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@y.com".into(),
            username: "annlee".into(),
        })
        .await
        .unwrap();
    harness
        .service
        .update_profile_info(ProfileInfo {
            secondary_email: "alt@x.com".into(),
            ..ProfileInfo::default()
        })
        .await
        .unwrap();
    harness
        .service
        .change_password(PasswordChangeRequest::new("a", "b"))
        .await
        .unwrap();

    let bodies: Vec<_> = harness
        .backend
        .seen()
        .into_iter()
        .filter_map(|seen| seen.body)
        .collect();
    assert_eq!(
        bodies[0],
        json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "ann@y.com",
            "username": "annlee"
        })
    );
    assert_eq!(bodies[1]["secondaryEmail"], "alt@x.com");
    assert!(bodies[1].get("firstName").is_none());
    assert_eq!(bodies[2], json!({"oldPassword": "a", "newPassword": "b"}));
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let harness = spawn_backend().await;
    harness.backend.fail_writes(StatusCode::BAD_REQUEST, WRONG_PASSWORD_BODY);

    let err = harness
        .service
        .change_password(PasswordChangeRequest::new("a", "b"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
    assert_eq!(err.server_message(), Some("wrong password"));
}

#[tokio::test]
async fn non_json_error_body_has_no_message() {
    let harness = spawn_backend().await;
    harness
        .backend
        .fail_writes(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");

    let err = harness
        .service
        .update_personal_info(PersonalInfo::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Status {
            message: None,
            ..
        }
    ));
}

#[tokio::test]
async fn password_rejection_reaches_the_screen_message() {
    let harness = spawn_backend().await;
    harness.backend.fail_writes(StatusCode::BAD_REQUEST, WRONG_PASSWORD_BODY);
    let context = CommandContext::new(
        Arc::new(harness.service.clone()),
        Duration::from_millis(1),
    );

    let message = commands::execute(
        ProfileCommand::ChangePassword(PasswordChangeRequest::new("a", "b")),
        context,
    )
    .await;

    let ProfileMessage::PasswordChangeResult(Err(err)) = message else {
        panic!("expected a rejected password change");
    };
    assert_eq!(err.to_string(), "wrong password");
}

#[tokio::test]
async fn unreachable_server_fails_the_load() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let tokens = FileTokenStore::new(dir.path().join("session.json"));
    let client = ApiClient::with_timeout(
        &format!("{}/api", addr),
        Arc::new(tokens),
        Some(Duration::from_secs(5)),
    )
    .unwrap();
    let context = CommandContext::new(
        Arc::new(ProfileApiAdapter::new(Arc::new(client))),
        Duration::from_millis(1),
    );

    let message = commands::execute(ProfileCommand::LoadProfile, context).await;

    let ProfileMessage::ProfileLoaded(Err(err)) = message else {
        panic!("expected a failed load");
    };
    assert_eq!(err, ProfileError::Load);
}
