use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let upload_limit = DefaultBodyLimit::max(state.upload_limit);

    Router::new()
        .route("/status", get(handlers::status))
        .route("/api/content", get(handlers::content))
        .route("/api/hero", get(handlers::hero))
        .route("/api/portfolio", get(handlers::portfolio))
        .route("/api/blog", get(handlers::blog))
        .route("/api/blog/{slug}", get(handlers::blog_post))
        .route("/api/careers", get(handlers::careers))
        .route("/api/route", get(handlers::route))
        .route("/api/forms/session", get(handlers::form_session))
        .route("/api/forms/contact", post(handlers::submit_contact).layer(upload_limit))
        .route("/api/forms/careers", post(handlers::submit_application).layer(upload_limit))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use base64::{Engine as _, engine::general_purpose};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use lib_site::careers::CareersLoader;
    use lib_site::configs::DEFAULT_MAX_UPLOAD_BYTES;
    use lib_site::content::{ContentContext, default_hero, default_site_content};
    use lib_site::forms::{Attachment, FormGate, FormRecipients, FormRelay, FormService, RelayError};
    use lib_site::loggers::LoggerLocal;
    use lib_site::retrieve::{InlineSource, SourceError};

    use super::*;
    use crate::site_logic::state::{FormSessions, SESSION_TTL};

    struct CountingRelay {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl FormRelay for CountingRelay {
        async fn send_json(&self, _recipient: &str, _body: Value) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail { Err(RelayError::Status(503)) } else { Ok(()) }
        }

        async fn send_multipart(
            &self,
            _recipient: &str,
            _fields: Vec<(&'static str, String)>,
            _attachment: Attachment,
        ) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail { Err(RelayError::Status(503)) } else { Ok(()) }
        }
    }

    fn app_state(fail_relay: bool) -> (AppState, Arc<CountingRelay>) {
        let logger = Arc::new(LoggerLocal::silent("router_test"));
        let relay = Arc::new(CountingRelay {
            calls: AtomicUsize::new(0),
            fail: fail_relay,
        });
        let careers = CareersLoader::new(logger.clone())
            .with_cms(Arc::new(InlineSource::failing("cms", SourceError::Transport("offline".into()))));
        let state = AppState {
            content: ContentContext::fixed(default_site_content()),
            hero: ContentContext::fixed(default_hero()),
            careers: Arc::new(careers),
            forms: Arc::new(FormService::new(relay.clone(), FormRecipients::default(), logger)),
            sessions: FormSessions::new(Duration::from_secs(3), SESSION_TTL),
            upload_limit: DEFAULT_MAX_UPLOAD_BYTES,
        };
        (state, relay)
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn settled_token(state: &AppState) -> String {
        let gate = FormGate::opened_at(Instant::now() - Duration::from_secs(10), Duration::from_secs(3));
        state.sessions.issue_gate(gate).await
    }

    #[tokio::test]
    async fn content_serves_the_default_table() {
        let (state, _) = app_state(false);
        let (status, body) = send(router(state), get_req("/api/content")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["about"]["values"][0]["icon"], "target");
        assert_eq!(body.as_object().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn careers_falls_back_and_reports_skips() {
        let (state, _) = app_state(false);
        let (status, body) = send(router(state), get_req("/api/careers")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], "fallback");
        assert_eq!(body["positions"].as_array().unwrap().len(), 3);
        assert_eq!(body["skipped"][0]["tier"], "cms");
    }

    #[tokio::test]
    async fn route_matches_careers_exactly() {
        let (state, _) = app_state(false);
        let app = router(state);
        let (_, body) = send(app.clone(), get_req("/api/route?path=/careers")).await;
        assert_eq!(body["route"], "careers");
        let (_, body) = send(app, get_req("/api/route?path=/careers/")).await;
        assert_eq!(body["route"], "home");
    }

    #[tokio::test]
    async fn unknown_article_is_404_with_seo() {
        let (state, _) = app_state(false);
        let (status, body) = send(router(state), get_req("/api/blog/no-such-post")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["seo"]["canonicalUrl"], "https://zenture.in/blog/no-such-post");
    }

    #[tokio::test]
    async fn fresh_session_blocks_without_relay_call() {
        let (state, relay) = app_state(false);
        let app = router(state);
        let (_, session) = send(app.clone(), get_req("/api/forms/session")).await;
        assert_eq!(session["minFillMs"], 3000);

        let req = post_json(
            "/api/forms/contact",
            json!({"token": session["token"], "name": "A", "email": "a@b.c", "message": "hi"}),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Unable to submit right now. Please try again.");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_contact_consumes_the_session() {
        let (state, relay) = app_state(false);
        let token = settled_token(&state).await;
        let app = router(state);
        let body = json!({"token": token, "name": "A", "email": "a@b.c", "message": "hi"});

        let (status, receipt) = send(app.clone(), post_json("/api/forms/contact", body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["recipient"], "info@zenture.in");

        let (status, _) = send(app, post_json("/api/forms/contact", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn relay_failure_keeps_the_session_for_a_retry() {
        let (state, _) = app_state(true);
        let token = settled_token(&state).await;
        let sessions = state.sessions.clone();
        let body = json!({"token": token, "name": "A", "email": "a@b.c", "message": "hi"});

        let (status, err) = send(router(state), post_json("/api/forms/contact", body)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(err["error"], "Submission failed. Please try again.");
        assert!(sessions.take(&token).await.is_some());
    }

    #[tokio::test]
    async fn application_requires_a_resume() {
        let (state, relay) = app_state(false);
        let token = settled_token(&state).await;
        let body = json!({"token": token, "fullName": "A", "email": "a@b.c"});
        let (status, err) = send(router(state), post_json("/api/forms/careers", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "Please attach your resume before submitting.");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    fn application_body(token: &str, resume: &[u8]) -> Value {
        json!({
            "token": token,
            "fullName": "A",
            "email": "a@b.c",
            "resume": {
                "fileName": "cv.pdf",
                "contentType": "application/pdf",
                "data": general_purpose::STANDARD.encode(resume),
            }
        })
    }

    #[tokio::test]
    async fn multi_megabyte_resume_is_relayed() {
        let (state, relay) = app_state(false);
        let token = settled_token(&state).await;
        let resume = vec![b'%'; 2 * 1024 * 1024];
        let req = post_json("/api/forms/careers", application_body(&token, &resume));
        let (status, receipt) = send(router(state), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["recipient"], "careers@zenture.in");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn oversized_body_is_a_json_error_and_keeps_the_session() {
        let (mut state, relay) = app_state(false);
        state.upload_limit = 64 * 1024;
        let token = settled_token(&state).await;
        let sessions = state.sessions.clone();
        let req = post_json("/api/forms/careers", application_body(&token, &vec![0u8; 128 * 1024]));

        let (status, err) = send(router(state), req).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err["error"], "Submission failed. Please try again.");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
        assert!(sessions.take(&token).await.is_some());
    }

    #[tokio::test]
    async fn malformed_contact_body_is_a_json_error() {
        let (state, relay) = app_state(false);
        let req = Request::builder()
            .method("POST")
            .uri("/api/forms/contact")
            .header("content-type", "application/json")
            .body(Body::from("{\"token\": "))
            .unwrap();
        let (status, err) = send(router(state), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "Submission failed. Please try again.");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn content_is_served_from_the_shared_snapshot() {
        let (state, _) = app_state(false);
        let axum::Json(served) = handlers::content(axum::extract::State(state.clone())).await;
        assert!(Arc::ptr_eq(&served, &state.content.current()));
    }

    #[tokio::test]
    async fn application_with_resume_is_relayed() {
        let (state, relay) = app_state(false);
        let token = settled_token(&state).await;
        let req = post_json("/api/forms/careers", application_body(&token, b"%PDF"));
        let (status, receipt) = send(router(state), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["message"], "Application sent to careers@zenture.in.");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }
}
