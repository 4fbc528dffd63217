use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Whether the owning component is still mounted.
///
/// Cleared by the effect cleanup on unmount, so a response that arrives after
/// the user navigated away is dropped instead of written into stale state.
#[derive(Clone)]
pub struct MountedFlag(Rc<RefCell<bool>>);

impl MountedFlag {
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        *self.0.borrow()
    }

    pub fn set_mounted(&self, mounted: bool) {
        *self.0.borrow_mut() = mounted;
    }
}

impl Default for MountedFlag {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(true)))
    }
}

#[hook]
pub fn use_mounted() -> MountedFlag {
    let flag = MountedFlag(use_mut_ref(|| true));
    {
        let flag = flag.clone();
        use_effect_with((), move |()| {
            flag.set_mounted(true);
            move || flag.set_mounted(false)
        });
    }
    flag
}

/// Shell-wide state.
#[derive(Clone)]
pub struct AppState {
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        current_language: use_state(crate::i18n::current_lang),
    }
}
