//! Reservation form state and submission workflow.
//!
//! One controller serves every venue; the venue-specific parts come from its
//! [`VenueDescriptor`]. The controller moves between [`FormStatus::Editing`]
//! and [`FormStatus::Submitting`] and keeps at most one inline message.

use crate::client::{ApiClient, ApiError, ApiResult, RESERVATION_FALLBACK_MESSAGE};
use crate::model::ReservationResponse;
use crate::phone::format_phone_number;
use crate::transport::Transport;
use crate::venue::{ReservationRequest, ThemeChoices, ThemeOption, Venue, VenueDescriptor};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_PEOPLE: u8 = 2;
pub const MAX_PEOPLE: u8 = 6;
pub const DEFAULT_PEOPLE: u8 = MIN_PEOPLE;
pub const NAME_MAX_CHARS: usize = 10;

/// Field values of a reservation form, shared by every venue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub branch: String,
    pub theme: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub people: u8,
    pub payment: String,
    /// Consent to the privacy policy and venue notices.
    pub policy: bool,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            branch: String::new(),
            theme: String::new(),
            date: String::new(),
            time: String::new(),
            name: String::new(),
            phone: String::new(),
            people: DEFAULT_PEOPLE,
            payment: String::new(),
            policy: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Branch,
    Theme,
    Date,
    Time,
    Name,
    Phone,
}

impl FormField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Theme => "theme",
            Self::Date => "date",
            Self::Time => "time",
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEdit {
    Branch(String),
    Theme(String),
    Date(String),
    Time(String),
    Name(String),
    /// Raw phone input; stored formatted.
    Phone(String),
    People(u8),
    Policy(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Message text: a translation key, or text that came from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageText {
    Key(&'static str),
    Server(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: MessageText,
}

impl FormMessage {
    const fn success(key: &'static str) -> Self {
        Self {
            kind: MessageKind::Success,
            text: MessageText::Key(key),
        }
    }

    const fn error(text: MessageText) -> Self {
        Self {
            kind: MessageKind::Error,
            text,
        }
    }
}

/// Problems found locally, before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a reservation is already being submitted")]
    AlreadySubmitting,
    #[error("consent to the privacy policy is required")]
    ConsentRequired,
    #[error("{0} is required")]
    Missing(FormField),
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("party size {0} is outside {MIN_PEOPLE}-{MAX_PEOPLE}")]
    PeopleOutOfRange(u8),
    #[error("{0} is not a valid date")]
    InvalidDate(String),
    #[error("{date} is before {today}")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("time {0} is not offered")]
    UnknownTimeSlot(String),
    #[error("branch {0} is not offered")]
    UnknownBranch(String),
    #[error("theme {0} is not offered for the current selection")]
    ThemeUnavailable(String),
}

impl ValidationError {
    /// Translation key of the inline message shown for this error.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::AlreadySubmitting => "reservation.errors.submitting",
            Self::ConsentRequired => "reservation.errors.consent",
            Self::Missing(FormField::Branch) => "reservation.errors.missing_branch",
            Self::Missing(FormField::Theme) => "reservation.errors.missing_theme",
            Self::Missing(FormField::Date) => "reservation.errors.missing_date",
            Self::Missing(FormField::Time) => "reservation.errors.missing_time",
            Self::Missing(FormField::Name) => "reservation.errors.missing_name",
            Self::Missing(FormField::Phone) => "reservation.errors.missing_phone",
            Self::NameTooLong { .. } => "reservation.errors.name_too_long",
            Self::PeopleOutOfRange(_) => "reservation.errors.people",
            Self::InvalidDate(_) => "reservation.errors.invalid_date",
            Self::DateInPast { .. } => "reservation.errors.past_date",
            Self::UnknownTimeSlot(_) => "reservation.errors.time",
            Self::UnknownBranch(_) => "reservation.errors.branch",
            Self::ThemeUnavailable(_) => "reservation.errors.theme",
        }
    }
}

/// How a finished submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed(ReservationResponse),
    Rejected(ReservationResponse),
    Failed(ApiError),
}

/// Form state machine for one mounted reservation page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationController {
    venue: Venue,
    form: ReservationForm,
    status: FormStatus,
    message: Option<FormMessage>,
}

impl ReservationController {
    #[must_use]
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            form: venue.descriptor().defaults(),
            status: FormStatus::Editing,
            message: None,
        }
    }

    #[must_use]
    pub const fn venue(&self) -> Venue {
        self.venue
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static VenueDescriptor {
        self.venue.descriptor()
    }

    #[must_use]
    pub const fn form(&self) -> &ReservationForm {
        &self.form
    }

    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    #[must_use]
    pub const fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Themes selectable right now, derived from the current fields.
    #[must_use]
    pub fn theme_choices(&self) -> ThemeChoices {
        self.descriptor().theme_choices(&self.form)
    }

    fn selected_theme(&self) -> Option<ThemeOption> {
        self.theme_choices().find(&self.form.theme)
    }

    /// Apply one input change.
    ///
    /// Ignored while submitting. Clears the inline message, and clears the
    /// theme whenever the change means the selected theme is no longer the
    /// one on offer (branch switch, weekday/weekend flip, date or time unset).
    pub fn edit(&mut self, edit: FormEdit) {
        if self.is_submitting() {
            return;
        }
        let previous = self.selected_theme();
        let reconcile = !matches!(edit, FormEdit::Theme(_));

        match edit {
            FormEdit::Branch(v) => self.form.branch = v,
            FormEdit::Theme(v) => self.form.theme = v,
            FormEdit::Date(v) => self.form.date = v,
            FormEdit::Time(v) => self.form.time = v,
            FormEdit::Name(v) => self.form.name = v,
            FormEdit::Phone(v) => self.form.phone = format_phone_number(&v),
            FormEdit::People(v) => self.form.people = v,
            FormEdit::Policy(v) => self.form.policy = v,
        }
        self.message = None;

        if reconcile && !self.form.theme.is_empty() {
            let choices = self.theme_choices();
            let still_offered =
                choices.enabled && previous.is_some_and(|p| choices.options.contains(&p));
            if !still_offered {
                log::debug!("clearing theme {} after edit", self.form.theme);
                self.form.theme.clear();
            }
        }
    }

    /// Check the form and build the venue request without changing state.
    ///
    /// `today` enables the past-date check; pass `None` to skip it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found. Consent is checked before the
    /// required fields.
    pub fn validate(&self, today: Option<NaiveDate>) -> Result<ReservationRequest, ValidationError> {
        if self.is_submitting() {
            return Err(ValidationError::AlreadySubmitting);
        }
        let form = &self.form;
        let descriptor = self.descriptor();
        if !form.policy {
            return Err(ValidationError::ConsentRequired);
        }

        let required = [
            (FormField::Branch, descriptor.requires_branch(), &form.branch),
            (FormField::Theme, true, &form.theme),
            (FormField::Date, true, &form.date),
            (FormField::Time, true, &form.time),
            (FormField::Name, true, &form.name),
            (FormField::Phone, true, &form.phone),
        ];
        if let Some((field, ..)) = required
            .iter()
            .find(|(_, needed, value)| *needed && value.trim().is_empty())
        {
            return Err(ValidationError::Missing(*field));
        }

        if form.name.trim().chars().count() > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong {
                max: NAME_MAX_CHARS,
            });
        }
        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&form.people) {
            return Err(ValidationError::PeopleOutOfRange(form.people));
        }
        let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(form.date.clone()))?;
        if let Some(today) = today.filter(|today| date < *today) {
            return Err(ValidationError::DateInPast { date, today });
        }
        if !descriptor.offers_time(&form.time) {
            return Err(ValidationError::UnknownTimeSlot(form.time.clone()));
        }
        if descriptor.requires_branch() && !descriptor.branches.iter().any(|b| b.id == form.branch)
        {
            return Err(ValidationError::UnknownBranch(form.branch.clone()));
        }
        let choices = self.theme_choices();
        if !choices.enabled || choices.find(&form.theme).is_none() {
            return Err(ValidationError::ThemeUnavailable(form.theme.clone()));
        }

        Ok(descriptor.build_request(form))
    }

    /// `Editing -> Submitting`.
    ///
    /// On success the request to send is returned and the message cleared.
    ///
    /// # Errors
    ///
    /// On a validation failure the state stays `Editing` and the error is
    /// shown inline. A second begin while submitting is refused without
    /// touching the message.
    pub fn begin_submit(
        &mut self,
        today: Option<NaiveDate>,
    ) -> Result<ReservationRequest, ValidationError> {
        match self.validate(today) {
            Ok(request) => {
                self.status = FormStatus::Submitting;
                self.message = None;
                Ok(request)
            }
            Err(ValidationError::AlreadySubmitting) => Err(ValidationError::AlreadySubmitting),
            Err(err) => {
                self.message = Some(FormMessage::error(MessageText::Key(err.message_key())));
                Err(err)
            }
        }
    }

    /// `Submitting -> Editing` with the result of the single request.
    ///
    /// A confirmed booking resets every field to the venue defaults. Any
    /// failure keeps the fields as they were.
    pub fn finish_submit(&mut self, result: ApiResult<ReservationResponse>) -> SubmitOutcome {
        self.status = FormStatus::Editing;
        match result {
            Ok(response) if response.success => {
                self.form = self.descriptor().defaults();
                self.message = Some(FormMessage::success("reservation.success"));
                SubmitOutcome::Confirmed(response)
            }
            Ok(response) => {
                let text = if response.message.trim().is_empty()
                    || response.message == RESERVATION_FALLBACK_MESSAGE
                {
                    MessageText::Key("reservation.errors.rejected")
                } else {
                    MessageText::Server(response.message.clone())
                };
                self.message = Some(FormMessage::error(text));
                SubmitOutcome::Rejected(response)
            }
            Err(err) => {
                log::warn!("Reservation for {} failed: {err}", self.venue.slug());
                self.message = Some(FormMessage::error(MessageText::Key(
                    "reservation.errors.transport",
                )));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validate, send exactly one request, and apply its result.
    ///
    /// # Errors
    ///
    /// Returns the validation error when nothing was sent.
    pub async fn submit<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        today: Option<NaiveDate>,
    ) -> Result<SubmitOutcome, ValidationError> {
        let request = self.begin_submit(today)?;
        let result = client.submit_reservation(&request).await;
        Ok(self.finish_submit(result))
    }
}
