#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use paddock_api::auth::jwt::{generate_access_token, JwtConfig};
use paddock_api::config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use paddock_api::router::build_app_router;
use paddock_api::state::AppState;
use paddock_core::roles::{ROLE_ADMIN, ROLE_USER};

const MULTIPART_BOUNDARY: &str = "paddock-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        jwt: JwtConfig {
            secret: "paddock-integration-test-secret".to_string(),
            access_token_expiry_mins: 5,
        },
    }
}

/// Build the production router over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the production router with a caller-tuned config.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn admin_token() -> String {
    generate_access_token(Uuid::new_v4(), ROLE_ADMIN, &test_config().jwt).unwrap()
}

pub fn user_token() -> String {
    generate_access_token(Uuid::new_v4(), ROLE_USER, &test_config().jwt).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// One part of a multipart form body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

impl<'a> Part<'a> {
    /// A `file` part named `content_cache.json` of type `application/json`.
    pub fn json_file(bytes: &'a [u8]) -> Self {
        Part::File {
            name: "file",
            file_name: "content_cache.json",
            content_type: "application/json",
            bytes,
        }
    }
}

/// Encode parts as a `multipart/form-data` body.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart form, optionally with a bearer token.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    token: Option<&str>,
    parts: &[Part<'_>],
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri).header(
        CONTENT_TYPE,
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
    );
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(multipart_body(parts))).unwrap();
    app.oneshot(request).await.unwrap()
}
