//! Local stand-in for a probe target.
//!
//! Every request outside the `/_mock/requests` listing route is answered with the
//! configured status (plus a `Location` header when one is set) and an empty
//! body, and recorded so tests can check what the probe sent.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub use axum::http::StatusCode;

pub const REQUESTS_PATH: &str = "/_mock/requests";

/// What the server saw of one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub host: Option<String>,
    pub body_len: usize,
}

#[derive(Clone, Debug)]
pub struct MockState {
    status: StatusCode,
    location: Option<String>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockState {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            location: None,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Send `Location: <location>` with every answer, for redirect statuses.
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }
}

/// Parse a status for the mock to answer with. Only 100-599 is accepted.
pub fn parse_status(raw: &str) -> Result<StatusCode, std::io::Error> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|code| (100..=599).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid status {raw:?}, expected 100-599"),
            )
        })
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route(REQUESTS_PATH, get(list_requests))
        .fallback(answer)
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn list_requests(State(state): State<MockState>) -> Json<Vec<RecordedRequest>> {
    Json(state.requests().await)
}

async fn answer(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.write().await.push(RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        host,
        body_len: body.len(),
    });
    match state.location {
        Some(location) => (state.status, [(header::LOCATION, location)]).into_response(),
        None => state.status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_request_serializes_to_json() {
        let req = RecordedRequest {
            method: "GET".to_string(),
            path: "/".to_string(),
            host: Some("127.0.0.1:3000".to_string()),
            body_len: 0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["path"], "/");
        assert_eq!(json["host"], "127.0.0.1:3000");
        assert_eq!(json["body_len"], 0);
    }

    #[test]
    fn parse_status_accepts_valid_codes() {
        assert_eq!(parse_status("200").unwrap(), StatusCode::OK);
        assert_eq!(parse_status(" 404 ").unwrap(), StatusCode::NOT_FOUND);
        assert_eq!(parse_status("599").unwrap().as_u16(), 599);
    }

    #[test]
    fn parse_status_rejects_garbage_and_out_of_range() {
        for raw in ["abc", "", "99", "600", "1000", "-1"] {
            let err = parse_status(raw).unwrap_err();
            assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput, "{raw:?}");
        }
    }

    #[tokio::test]
    async fn new_state_has_no_requests() {
        let state = MockState::new(StatusCode::IM_A_TEAPOT);
        assert_eq!(state.status(), StatusCode::IM_A_TEAPOT);
        assert!(state.requests().await.is_empty());
    }
}
