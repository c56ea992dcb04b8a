//! Test harness: the real v1 router over an in-memory store.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    api,
    config::TokenConfig,
    repos::{
        memory::MemoryStore,
        user_repo::{UserFields, UserRow},
    },
    services::auth::{PasswordHasher, TokenCodec},
    state::AppState,
};

pub const SECRET: &str = "test-secret";
const COST: u32 = 4;

pub fn token_config() -> TokenConfig {
    TokenConfig {
        secret: SECRET.to_string(),
        ttl: Duration::from_secs(300),
        leeway_seconds: 0,
    }
}

pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    /// Value of the `token` cookie from `Set-Cookie`, if any.
    pub fn token_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|v| v.strip_prefix("token="))
            .map(|v| v.split(';').next().unwrap_or_default().to_string())
    }
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let tokens = Arc::new(TokenCodec::new(&token_config()).unwrap());
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            tokens,
            PasswordHasher::new(COST),
            false,
        );
        let router = Router::new()
            .nest("/api/v1", api::v1::routes(&state))
            .with_state(state.clone());

        Self { state, router }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };

        self.dispatch(builder.body(body).unwrap()).await
    }

    /// Sends `body` verbatim, without a Content-Type.
    pub async fn send_raw(&self, method: Method, uri: &str, cookie: &str, body: &str) -> Response {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(req).await
    }

    async fn dispatch(&self, req: Request<Body>) -> Response {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();

        Response {
            status,
            headers,
            body,
        }
    }

    /// Inserts a user directly, bypassing sign-up.
    pub async fn seed_user(&self, name: &str, password: &str, is_admin: bool) -> UserRow {
        let mut conn = self.state.store.acquire().await.unwrap();
        conn.create_user(&UserFields {
            name: name.to_string(),
            password_hash: self.state.passwords.hash(password).unwrap(),
            email: format!("{name}@example.com"),
            is_admin,
        })
        .await
        .unwrap()
    }

    /// `Cookie` header value carrying a fresh token for `username`.
    pub fn cookie_for(&self, username: &str) -> String {
        let issued = self.state.tokens.issue_now(username).unwrap();
        format!("token={}", issued.token)
    }
}
