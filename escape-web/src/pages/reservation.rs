use crate::components::reservation_form::ReservationForm;
use crate::i18n::t;
use escape_core::{FormEdit, ReservationController};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReservationPageProps {
    pub controller: ReservationController,
    pub on_edit: Callback<FormEdit>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub min_date: Option<AttrValue>,
}

#[function_component(ReservationPage)]
pub fn reservation_page(p: &ReservationPageProps) -> Html {
    let _locale = crate::i18n::use_locale();
    let descriptor = p.controller.descriptor();
    html! {
        <div class={classes!("reservation-container", p.controller.venue().slug())}>
            <div class="page-header">
                <h2 class="page-title">{ t(descriptor.title_key) }</h2>
            </div>
            <ReservationForm
                controller={p.controller.clone()}
                on_edit={p.on_edit.clone()}
                on_submit={p.on_submit.clone()}
                min_date={p.min_date.clone()}
            />
        </div>
    }
}
