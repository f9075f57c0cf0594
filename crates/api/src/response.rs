//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ... }` envelope, list endpoints add
//! a `count`, and operations with nothing to return send a `message`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [T], "count": n }` envelope for unpaginated lists.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// `{ "message": "..." }` envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
