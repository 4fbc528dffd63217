//! Escape Alert core
//!
//! Platform-agnostic logic for the escape-room reservation and alert front-end.
//! This crate holds the API client, venue descriptors and the reservation form
//! workflow without any browser or UI dependencies.

pub mod alerts;
pub mod client;
pub mod config;
pub mod form;
pub mod model;
pub mod phone;
pub mod transport;
pub mod venue;

// Re-export commonly used types
pub use alerts::{AlertListState, load_alerts};
pub use client::{
    ALERTS_FALLBACK_MESSAGE, ALERTS_PATH, ApiClient, ApiError, ApiResult, ErrorKind,
    RESERVATION_FALLBACK_MESSAGE,
};
pub use config::{ApiConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use form::{
    FormEdit, FormField, FormMessage, FormStatus, MAX_PEOPLE, MIN_PEOPLE, MessageKind,
    MessageText, NAME_MAX_CHARS, ReservationController, ReservationForm, SubmitOutcome,
    ValidationError,
};
pub use model::{Envelope, ReservationResponse, Theme, UserAlert};
pub use phone::format_phone_number;
pub use transport::{
    HttpResponse, Method, RecordedRequest, ScriptedTransport, Transport, TransportError,
};
pub use venue::{
    Branch, DayKind, ReservationRequest, ThemeChoices, ThemeOption, Venue, VenueDescriptor,
    time_label,
};
