//! HTTP exchange abstraction.
//!
//! The API client never talks to a concrete HTTP stack. The browser build plugs
//! in `fetch`, the CLI plugs in reqwest, and tests use [`ScriptedTransport`].

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use thiserror::Error;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failure to complete an HTTP exchange at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Minimal HTTP surface the API client needs.
///
/// Futures are not `Send`: the browser runtime is single-threaded and
/// `JsFuture` cannot cross threads.
#[async_trait(?Send)]
pub trait Transport {
    /// Issue a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be completed.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Issue a `POST` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be completed.
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request observed by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// In-memory transport that replays queued replies and records every request.
///
/// Used by tests and by the CLI's dry-run mode.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with the given status and body.
    #[must_use]
    pub fn with_reply(self, status: u16, body: impl Into<String>) -> Self {
        self.push_reply(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    #[must_use]
    pub fn with_failure(self, error: TransportError) -> Self {
        self.push_reply(Err(error));
        self
    }

    pub fn push_reply(&self, reply: Result<HttpResponse, TransportError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Requests seen so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn answer(&self, request: RecordedRequest) -> Result<HttpResponse, TransportError> {
        log::debug!("scripted {:?} {}", request.method, request.url);
        self.requests.borrow_mut().push(request);
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(TransportError::Unavailable(
                "no scripted reply left".to_string(),
            ))
        })
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.answer(RecordedRequest {
            method: Method::Get,
            url: url.to_string(),
            body: None,
        })
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        self.answer(RecordedRequest {
            method: Method::Post,
            url: url.to_string(),
            body: Some(body.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn scripted_transport_replays_in_order_and_records() {
        let transport = ScriptedTransport::new()
            .with_reply(200, "first")
            .with_failure(TransportError::Network("down".into()));

        let first = block_on(transport.get("http://x/a")).unwrap();
        assert_eq!(first.body, "first");
        let second = block_on(transport.post_json("http://x/b", "{}"));
        assert_eq!(second, Err(TransportError::Network("down".into())));
        let third = block_on(transport.get("http://x/c"));
        assert!(matches!(third, Err(TransportError::Unavailable(_))));

        let seen = transport.requests();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[1].method, Method::Post);
        assert_eq!(seen[1].body.as_deref(), Some("{}"));
    }
}
