//! Deployment base path for the router.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/alerts-app` when hosted in
/// a subdirectory), routes are mounted under it. Builds without `PUBLIC_URL`
/// serve from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Absolute path of a route under the deployment base.
#[must_use]
pub fn public_path(route_path: &str) -> String {
    public_path_with_base(route_path, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn public_path_with_base(route_path: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = route_path.trim_start_matches('/');
    format!("{base}/{rel}")
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
