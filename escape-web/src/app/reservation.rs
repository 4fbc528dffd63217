use crate::app::state::{MountedFlag, use_mounted};
use crate::pages::reservation::ReservationPage;
use escape_core::{
    ApiResult, FormEdit, ReservationController, ReservationResponse, SubmitOutcome, Venue,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReservationScreenProps {
    pub venue: Venue,
}

/// Apply a submission result to the controller snapshot taken at submit.
///
/// `None` when the screen unmounted while the request was in flight.
pub fn finish_if_mounted(
    mounted: &MountedFlag,
    mut controller: ReservationController,
    result: ApiResult<ReservationResponse>,
) -> Option<ReservationController> {
    if !mounted.is_mounted() {
        return None;
    }
    if let SubmitOutcome::Failed(err) = controller.finish_submit(result) {
        crate::dom::console_error(&format!("Error submitting reservation: {err}"));
    }
    Some(controller)
}

/// Reservation form for one venue, owning its controller.
#[function_component(ReservationScreen)]
pub fn reservation_screen(p: &ReservationScreenProps) -> Html {
    let venue = p.venue;
    let controller = use_state(move || ReservationController::new(venue));
    let mounted = use_mounted();
    let today = crate::dom::today();

    let on_edit = {
        let controller = controller.clone();
        Callback::from(move |edit: FormEdit| {
            let mut next = (*controller).clone();
            next.edit(edit);
            controller.set(next);
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |()| {
            let mut next = (*controller).clone();
            let Ok(request) = next.begin_submit(today) else {
                controller.set(next);
                return;
            };
            controller.set(next.clone());

            let controller = controller.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                let result = super::api_client().submit_reservation(&request).await;
                if let Some(done) = finish_if_mounted(&mounted, next, result) {
                    controller.set(done);
                }
            });
        })
    };

    let min_date = today.map(|d| AttrValue::from(d.format("%Y-%m-%d").to_string()));

    html! {
        <ReservationPage
            controller={(*controller).clone()}
            {on_edit}
            {on_submit}
            {min_date}
        />
    }
}
