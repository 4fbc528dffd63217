mod bundle;
mod context;
mod format;
mod locales;
mod render;

pub use bundle::{DEFAULT_LANG, I18nBundle, current_lang, set_lang};
pub use context::{Locale, use_locale};
pub use format::fmt_timestamp;
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
