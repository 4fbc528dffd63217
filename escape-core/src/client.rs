//! Backend API client.
//!
//! Every operation returns [`ApiResult`]. Failures carry an [`ErrorKind`] tag
//! that separates transport problems from business rejections. Reservation
//! rejections are not errors at all: they come back as an unsuccessful
//! [`ReservationResponse`].

use crate::config::ApiConfig;
use crate::model::{Envelope, ReservationResponse, UserAlert};
use crate::transport::{HttpResponse, Transport, TransportError};
use crate::venue::ReservationRequest;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const ALERTS_PATH: &str = "/api/user-alerts";

/// Message used when the backend rejects an alert fetch without saying why.
pub const ALERTS_FALLBACK_MESSAGE: &str = "Failed to fetch user alerts";

/// Message used when the backend rejects a reservation without saying why.
pub const RESERVATION_FALLBACK_MESSAGE: &str = "Reservation failed";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The exchange itself failed: network, status or body problems.
    Transport,
    /// The backend answered with `success: false`.
    Business,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("response envelope carried no data")]
    MissingData,
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected(_) => ErrorKind::Business,
            Self::Transport(_)
            | Self::Status { .. }
            | Self::Decode(_)
            | Self::Encode(_)
            | Self::MissingData => ErrorKind::Transport,
        }
    }

    /// Message supplied by the server, when there was one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn logged(operation: &str, err: ApiError) -> ApiError {
    log::error!("Error {operation}: {err}");
    err
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<Envelope<T>> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Client for the reservation backend, bound to one config and transport.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub const fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the user's alerts, optionally filtered by user id.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies are
    /// `Transport`-kind errors. A `success: false` envelope becomes
    /// [`ApiError::Rejected`] with the server message or
    /// [`ALERTS_FALLBACK_MESSAGE`].
    pub async fn fetch_alerts(&self, user_id: Option<u64>) -> ApiResult<Vec<UserAlert>> {
        const OP: &str = "fetching user alerts";
        let mut url = self.config.endpoint(ALERTS_PATH);
        if let Some(id) = user_id {
            url.push_str(&format!("?userId={id}"));
        }

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| logged(OP, e.into()))?;

        if !response.is_success() {
            let message = decode::<serde_json::Value>(&response)
                .ok()
                .and_then(|env| env.message().map(str::to_string));
            return Err(logged(
                OP,
                ApiError::Status {
                    status: response.status,
                    message,
                },
            ));
        }

        let envelope = decode::<Vec<UserAlert>>(&response).map_err(|e| logged(OP, e))?;
        if !envelope.success {
            let message = envelope.message().unwrap_or(ALERTS_FALLBACK_MESSAGE);
            return Err(logged(OP, ApiError::Rejected(message.to_string())));
        }
        Ok(envelope.data.unwrap_or_default())
    }

    /// Submit a booking to the venue's endpoint.
    ///
    /// A `success: false` envelope is returned as `Ok` with an unsuccessful
    /// [`ReservationResponse`] whose `reservation_id` is `None`.
    ///
    /// # Errors
    ///
    /// Only `Transport`-kind errors: the request could not be sent, or the
    /// body is not an envelope (reported as [`ApiError::Status`] when the
    /// status was also non-2xx).
    pub async fn submit_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ApiResult<ReservationResponse> {
        const OP: &str = "submitting reservation";
        let body = serde_json::to_string(request)
            .map_err(|e| logged(OP, ApiError::Encode(e.to_string())))?;
        let url = self.config.endpoint(request.endpoint());

        let response = self
            .transport
            .post_json(&url, &body)
            .await
            .map_err(|e| logged(OP, e.into()))?;

        let envelope = match decode::<ReservationResponse>(&response) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(logged(
                    OP,
                    ApiError::Status {
                        status: response.status,
                        message: None,
                    },
                ));
            }
            Err(err) => return Err(logged(OP, err)),
        };

        if !envelope.success {
            let message = envelope.message().unwrap_or(RESERVATION_FALLBACK_MESSAGE);
            log::warn!("Reservation rejected by {}: {message}", request.venue().slug());
            return Ok(ReservationResponse::failure(message));
        }
        envelope.data.ok_or_else(|| logged(OP, ApiError::MissingData))
    }
}
