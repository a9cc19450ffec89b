//! End-to-end handler tests driving the full router with `oneshot` requests.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::{
    model::auth::AUTH_HEADER,
    server::{router::router, service::auth::token::TokenService, state::AppState},
};


struct TestApp {
    _context: TestContext,
    db: DatabaseConnection,
    app: Router,
    tokens: TokenService,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();
        let tokens = TokenService::new("0123456789abcdef0123456789abcdef", Duration::hours(4));
        let app = router().with_state(AppState::new(db.clone(), tokens.clone()));

        Self {
            _context: context,
            db,
            app,
            tokens,
        }
    }

    fn token_for(&self, user: &entity::user::Model) -> String {
        self.tokens.issue(&user.id).unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(AUTH_HEADER, token);
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, headers, body)
    }
}
