#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::Date;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a backend `LocalDateTime` (`YYYY-MM-DDTHH:MM:SS`) for display.
///
/// The browser uses the locale's date-time format; elsewhere the value is
/// shortened to `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn fmt_timestamp(iso: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let date = Date::new(&JsValue::from_str(iso));
            if date.get_time().is_nan() {
                return plain_timestamp(iso);
            }
            date.to_locale_string(&bundle.lang, &JsValue::UNDEFINED)
                .as_string()
                .unwrap_or_else(|| plain_timestamp(iso))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        plain_timestamp(iso)
    }
}

fn plain_timestamp(iso: &str) -> String {
    let spaced = iso.trim().replacen('T', " ", 1);
    spaced.get(..16).map_or(spaced.clone(), str::to_string)
}
