use crate::app::state::{MountedFlag, use_mounted};
use crate::pages::alert_list::AlertListPage;
use escape_core::{AlertListState, load_alerts};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Hand a finished load to `apply` unless the screen has unmounted.
pub fn deliver_alerts(
    mounted: &MountedFlag,
    loaded: AlertListState,
    apply: impl FnOnce(AlertListState),
) -> bool {
    if !mounted.is_mounted() {
        return false;
    }
    if matches!(loaded, AlertListState::Errored) {
        crate::dom::console_error("Error loading alerts");
    }
    apply(loaded);
    true
}

/// Alert list bound to the backend: one fetch on mount, no retry.
#[function_component(AlertsScreen)]
pub fn alerts_screen() -> Html {
    let state = use_state(AlertListState::default);
    let mounted = use_mounted();

    {
        let state = state.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = super::api_client();
                let loaded = load_alerts(&client, crate::config::alerts_user_id()).await;
                deliver_alerts(&mounted, loaded, |loaded| state.set(loaded));
            });
        });
    }

    html! { <AlertListPage state={(*state).clone()} /> }
}
