//! Shared helpers for API integration tests.
//!
//! Requests go through [`build_app`] so tests exercise the same middleware
//! stack (CORS, request ID, tracing, panic recovery) that production uses.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use family_budget_api::app::build_app;
use family_budget_api::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState { pool })
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Send a raw, possibly malformed, JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    send(app, method, uri, Some(body.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category through the API and return its `data` object.
pub async fn create_category(app: Router, body: Value) -> Value {
    let response = post_json(app, "/api/categories", body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}
