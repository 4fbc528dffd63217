//! State behind the alert list page.

use crate::client::{ApiClient, ApiResult};
use crate::model::UserAlert;
use crate::transport::Transport;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AlertListState {
    #[default]
    Loading,
    Loaded(Vec<UserAlert>),
    /// Any failure; the page shows one generic message.
    Errored,
}

impl AlertListState {
    /// Collapse a fetch result; errors are logged and otherwise dropped.
    #[must_use]
    pub fn from_result(result: ApiResult<Vec<UserAlert>>) -> Self {
        match result {
            Ok(alerts) => Self::Loaded(alerts),
            Err(err) => {
                log::error!("Error loading alerts: {err}");
                Self::Errored
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn alerts(&self) -> &[UserAlert] {
        match self {
            Self::Loaded(alerts) => alerts,
            Self::Loading | Self::Errored => &[],
        }
    }

    /// Loaded with nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Loaded(alerts) if alerts.is_empty())
    }
}

/// Single fetch used when the alert list mounts.
pub async fn load_alerts<T: Transport>(
    client: &ApiClient<T>,
    user_id: Option<u64>,
) -> AlertListState {
    AlertListState::from_result(client.fetch_alerts(user_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiError;

    #[test]
    fn starts_loading() {
        let state = AlertListState::default();
        assert!(state.is_loading());
        assert!(state.alerts().is_empty());
        assert!(!state.is_empty());
    }

    #[test]
    fn errors_collapse_to_errored() {
        let state = AlertListState::from_result(Err(ApiError::Rejected("nope".into())));
        assert_eq!(state, AlertListState::Errored);
        assert!(!state.is_empty());
    }

    #[test]
    fn empty_list_is_distinct_from_error() {
        let state = AlertListState::from_result(Ok(Vec::new()));
        assert!(state.is_empty());
        assert!(!state.is_loading());
    }
}
