use yew::prelude::*;

/// Active language, provided at the app root.
///
/// Components that render translated text subscribe through [`use_locale`] so
/// a language switch re-renders them without remounting their state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale(pub AttrValue);

#[hook]
pub fn use_locale() -> Option<Locale> {
    use_context::<Locale>()
}
