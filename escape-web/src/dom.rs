//! Browser glue: window access, console logging and the `fetch` transport.

use async_trait::async_trait;
use escape_core::{HttpResponse, Transport, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage, Window};

/// Retrieve the global `window` object, when running in a browser.
///
/// Always `None` off wasm32, where no JavaScript host exists.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Access the browser `localStorage` handle, if there is one.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Today's date in the browser's local time zone.
#[must_use]
pub fn today() -> Option<chrono::NaiveDate> {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        chrono::NaiveDate::from_ymd_opt(
            i32::try_from(now.get_full_year()).ok()?,
            now.get_month() + 1,
            now.get_date(),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Some(chrono::Local::now().date_naive())
    }
}

fn network_error(value: &JsValue) -> TransportError {
    TransportError::Network(js_error_message(value))
}

/// [`Transport`] over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchTransport;

fn browser_window() -> Result<Window, TransportError> {
    window().ok_or_else(|| TransportError::Unavailable("no browser window".to_string()))
}

impl FetchTransport {
    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    async fn send(window: &Window, request: &Request) -> Result<HttpResponse, TransportError> {
        let value = JsFuture::from(window.fetch_with_request(request))
            .await
            .map_err(|e| network_error(&e))?;
        let response: Response = value.dyn_into().map_err(|e| network_error(&e))?;
        let text = response.text().map_err(|e| network_error(&e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| network_error(&e))?
            .as_string()
            .unwrap_or_default();
        Ok(HttpResponse::new(response.status(), body))
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let window = browser_window()?;
        let init = RequestInit::new();
        init.set_method("GET");
        let request =
            Request::new_with_str_and_init(url, &init).map_err(|e| network_error(&e))?;
        Self::send(&window, &request).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        let window = browser_window()?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(body));
        let request =
            Request::new_with_str_and_init(url, &init).map_err(|e| network_error(&e))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| network_error(&e))?;
        Self::send(&window, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn fetch_transport_reports_missing_browser() {
        let err = block_on(FetchTransport.get("http://localhost:8080/api/user-alerts"));
        assert!(matches!(err, Err(TransportError::Unavailable(_))));
        let err = block_on(FetchTransport.post_json("http://localhost:8080/x", "{}"));
        assert!(matches!(err, Err(TransportError::Unavailable(_))));
    }

    #[test]
    fn storage_is_absent_off_browser() {
        assert!(local_storage().is_none());
        assert!(today().is_some());
    }
}
