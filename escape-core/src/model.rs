use serde::{Deserialize, Serialize};

/// Theme an alert watches, as the backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub theme_id: i64,
    pub theme_name: String,
    pub cafe_name: String,
    pub branch_name: String,
}

/// A saved availability watch owned by a user.
///
/// Read-only on this side: the backend owns and mutates alerts, the front-end
/// only keeps the copy returned by the latest fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAlert {
    pub alert_id: i64,
    #[serde(default)]
    pub is_active: bool,
    pub theme: Theme,
    pub date_start: String,
    pub date_end: String,
    #[serde(default)]
    pub preferred_times: Vec<String>,
    #[serde(default)]
    pub preferred_days: Vec<String>,
    /// Nullable on the backend.
    #[serde(default)]
    pub num_people: Option<u32>,
    #[serde(default)]
    pub notified_count: u32,
    #[serde(default)]
    pub last_notified_at: Option<String>,
}

impl UserAlert {
    /// Watch period in the `start ~ end` form used on cards.
    #[must_use]
    pub fn period_label(&self) -> String {
        format!("{} ~ {}", self.date_start, self.date_end)
    }

    /// Preferred times trimmed and comma-joined, or `None` when there are none.
    ///
    /// The backend splits a stored JSON list on commas, so entries can carry
    /// leading whitespace.
    #[must_use]
    pub fn preferred_times_label(&self) -> Option<String> {
        let times: Vec<&str> = self
            .preferred_times
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if times.is_empty() {
            None
        } else {
            Some(times.join(", "))
        }
    }

    /// `cafe branch` line shown under the theme name.
    #[must_use]
    pub fn venue_label(&self) -> String {
        format!("{} {}", self.theme.cafe_name, self.theme.branch_name)
            .trim()
            .to_string()
    }
}

/// Result of a reservation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reservation_id: Option<String>,
}

impl ReservationResponse {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            reservation_id: None,
        }
    }
}

/// Uniform `{success, data, message?}` wrapper around every backend response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Server message, ignoring blank strings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert_json() -> &'static str {
        r#"{
            "alertId": 7,
            "isActive": true,
            "theme": {"themeId": 51, "themeName": "ALIVE", "cafeName": "제로월드", "branchName": "홍대점"},
            "dateStart": "2025-01-01",
            "dateEnd": "2025-01-31",
            "preferredTimes": ["18:00", " 19:00", " 20:00"],
            "preferredDays": [],
            "numPeople": 3,
            "notifiedCount": 2,
            "lastNotifiedAt": null
        }"#
    }

    #[test]
    fn user_alert_reads_camel_case_payload() {
        let alert: UserAlert = serde_json::from_str(alert_json()).unwrap();
        assert_eq!(alert.alert_id, 7);
        assert!(alert.is_active);
        assert_eq!(alert.theme.theme_name, "ALIVE");
        assert_eq!(alert.num_people, Some(3));
        assert_eq!(alert.last_notified_at, None);
        assert_eq!(alert.period_label(), "2025-01-01 ~ 2025-01-31");
        assert_eq!(alert.venue_label(), "제로월드 홍대점");
    }

    #[test]
    fn preferred_times_are_trimmed_and_ordered() {
        let mut alert: UserAlert = serde_json::from_str(alert_json()).unwrap();
        assert_eq!(
            alert.preferred_times_label().as_deref(),
            Some("18:00, 19:00, 20:00")
        );
        alert.preferred_times = vec!["20:00".into(), "18:00".into(), "20:00".into()];
        assert_eq!(
            alert.preferred_times_label().as_deref(),
            Some("20:00, 18:00, 20:00")
        );
        alert.preferred_times.clear();
        assert_eq!(alert.preferred_times_label(), None);
    }

    #[test]
    fn envelope_tolerates_missing_data_and_null_message() {
        let env: Envelope<ReservationResponse> =
            serde_json::from_str(r#"{"success": false, "message": null}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message(), None);

        let env: Envelope<ReservationResponse> =
            serde_json::from_str(r#"{"success": false, "data": null, "message": "  "}"#).unwrap();
        assert_eq!(env.message(), None);
    }

    #[test]
    fn reservation_failure_has_no_id() {
        let failure = ReservationResponse::failure("slot taken");
        assert!(!failure.success);
        assert_eq!(failure.message, "slot taken");
        assert_eq!(failure.reservation_id, None);
    }
}
