//! Build-time settings for the browser bundle.
//!
//! Values are baked in with `option_env!` when the wasm bundle is built, so the
//! page never reads configuration at load time.

use crate::router::Route;
use escape_core::{ApiConfig, DEFAULT_API_BASE_URL};
use yew_router::Routable;

/// API host for this build, from `API_BASE_URL` when it was set.
///
/// An invalid value is logged and replaced by the default host.
#[must_use]
pub fn api_config() -> ApiConfig {
    api_config_from(option_env!("API_BASE_URL"))
}

fn api_config_from(raw: Option<&str>) -> ApiConfig {
    ApiConfig::from_override(raw).unwrap_or_else(|err| {
        log::error!("Invalid API_BASE_URL, using {DEFAULT_API_BASE_URL}: {err}");
        ApiConfig::default()
    })
}

/// Route `/` redirects to, from `DEFAULT_ROUTE` when it names a known page.
#[must_use]
pub fn default_route() -> Route {
    default_route_from(option_env!("DEFAULT_ROUTE"))
}

fn default_route_from(raw: Option<&str>) -> Route {
    raw.map(str::trim)
        .filter(|path| !path.is_empty())
        .and_then(Route::recognize)
        .filter(|route| !matches!(route, Route::Home | Route::NotFound))
        .unwrap_or(Route::Alerts)
}

/// Optional `userId` filter for the alert list, from `ALERTS_USER_ID`.
#[must_use]
pub fn alerts_user_id() -> Option<u64> {
    option_env!("ALERTS_USER_ID").and_then(|raw| raw.trim().parse().ok())
}
