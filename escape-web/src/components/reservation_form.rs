//! Reservation form markup shared by every venue.
//!
//! Purely presentational: the owning screen keeps the
//! [`ReservationController`] and feeds edits back through `on_edit`.

use crate::i18n::{t, tr};
use escape_core::phone::MAX_PHONE_CHARS;
use escape_core::{
    FormEdit, FormMessage, MAX_PEOPLE, MIN_PEOPLE, MessageKind, MessageText, NAME_MAX_CHARS,
    ReservationController, time_label,
};
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub controller: ReservationController,
    pub on_edit: Callback<FormEdit>,
    pub on_submit: Callback<()>,
    /// Earliest selectable date (`YYYY-MM-DD`).
    #[prop_or_default]
    pub min_date: Option<AttrValue>,
}

fn on_select(on_edit: &Callback<FormEdit>, make: fn(String) -> FormEdit) -> Callback<Event> {
    on_edit.reform(move |e: Event| {
        make(
            e.target_dyn_into::<HtmlSelectElement>()
                .map(|sel| sel.value())
                .unwrap_or_default(),
        )
    })
}

fn on_text(on_edit: &Callback<FormEdit>, make: fn(String) -> FormEdit) -> Callback<InputEvent> {
    on_edit.reform(move |e: InputEvent| {
        make(
            e.target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default(),
        )
    })
}

fn message_text(message: &FormMessage) -> String {
    match &message.text {
        MessageText::Key(key) => t(key),
        MessageText::Server(text) => text.clone(),
    }
}

fn people_label(count: u8) -> String {
    let count = count.to_string();
    tr(
        "reservation.people_option",
        Some(&BTreeMap::from([("count", count.as_str())])),
    )
}

#[function_component(ReservationForm)]
pub fn reservation_form(p: &Props) -> Html {
    let _locale = crate::i18n::use_locale();
    let controller = &p.controller;
    let descriptor = controller.descriptor();
    let form = controller.form();
    let choices = controller.theme_choices();
    let submitting = controller.is_submitting();

    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let branch = descriptor.requires_branch().then(|| {
        html! {
            <div class="form-group">
                <label for="branch">{ t("reservation.branch") }</label>
                <select id="branch" name="branch" required=true
                        onchange={on_select(&p.on_edit, FormEdit::Branch)}>
                    { for descriptor.branches.iter().map(|b| html! {
                        <option value={b.id} selected={b.id == form.branch}>{ b.name }</option>
                    }) }
                </select>
            </div>
        }
    });

    let day_label = choices
        .day_kind
        .map(|kind| html! { <span class="theme-type">{ format!(" ({})", t(kind.label_key())) }</span> });
    let theme = html! {
        <div class="form-group">
            <label for="theme">{ t("reservation.theme") }{ for day_label }</label>
            <select id="theme" name="theme" required=true disabled={!choices.enabled}
                    onchange={on_select(&p.on_edit, FormEdit::Theme)}>
                <option value="" selected={form.theme.is_empty()}>{ t("reservation.select_theme") }</option>
                { for choices.options.iter().map(|o| html! {
                    <option value={o.id} selected={o.id == form.theme}>{ o.name }</option>
                }) }
            </select>
            if !choices.enabled {
                <p class="form-hint">{ t("reservation.theme_hint") }</p>
            }
        </div>
    };

    let date = html! {
        <div class="form-group">
            <label for="date">{ t("reservation.date") }</label>
            <input type="date" id="date" name="date" required=true
                   min={p.min_date.clone()}
                   value={form.date.clone()}
                   oninput={on_text(&p.on_edit, FormEdit::Date)} />
        </div>
    };

    let time = html! {
        <div class="form-group">
            <label for="time">{ t("reservation.time") }</label>
            <select id="time" name="time" required=true
                    onchange={on_select(&p.on_edit, FormEdit::Time)}>
                <option value="" selected={form.time.is_empty()}>{ t("reservation.select_time") }</option>
                { for descriptor.time_slots.iter().map(|slot| html! {
                    <option value={*slot} selected={*slot == form.time}>{ time_label(slot).to_string() }</option>
                }) }
            </select>
        </div>
    };

    // Earth Escape picks branch and theme first; Zero World needs date and time
    // before its theme list is known.
    let booking = if descriptor.requires_branch() {
        html! { <>{ for branch }{ theme }{ date }{ time }</> }
    } else {
        html! { <>{ date }{ time }{ theme }</> }
    };

    let on_people = p.on_edit.reform(|e: Event| {
        let value = e
            .target_dyn_into::<HtmlSelectElement>()
            .and_then(|sel| sel.value().parse().ok())
            .unwrap_or(MIN_PEOPLE);
        FormEdit::People(value)
    });
    let on_policy = p.on_edit.reform(|e: Event| {
        FormEdit::Policy(
            e.target_dyn_into::<HtmlInputElement>()
                .is_some_and(|input| input.checked()),
        )
    });

    let message = controller.message().map(|m| {
        let kind = match m.kind {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        };
        html! {
            <div class={classes!("message", kind)} role="status">{ message_text(m) }</div>
        }
    });

    let submit_label = if submitting {
        t("reservation.submitting")
    } else {
        t("reservation.submit")
    };

    html! {
        <form class="reservation-form" {onsubmit} novalidate=true>
            <fieldset disabled={submitting}>
                <div class="form-section">
                    <h2 class="section-title">{ t("reservation.section_booking") }</h2>
                    { booking }
                    <div class="form-group">
                        <label for="people">{ t("reservation.people") }</label>
                        <select id="people" name="people" required=true onchange={on_people}>
                            { for (MIN_PEOPLE..=MAX_PEOPLE).map(|n| html! {
                                <option value={n.to_string()} selected={n == form.people}>{ people_label(n) }</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="form-section">
                    <h2 class="section-title">{ t("reservation.section_customer") }</h2>
                    <div class="form-group">
                        <label for="name">{ t("reservation.name") }</label>
                        <input type="text" id="name" name="name" required=true
                               maxlength={NAME_MAX_CHARS.to_string()}
                               placeholder={t("reservation.name_placeholder")}
                               value={form.name.clone()}
                               oninput={on_text(&p.on_edit, FormEdit::Name)} />
                    </div>
                    <div class="form-group">
                        <label for="phone">{ t("reservation.phone") }</label>
                        <input type="tel" id="phone" name="phone" required=true
                               maxlength={MAX_PHONE_CHARS.to_string()}
                               placeholder={t("reservation.phone_placeholder")}
                               value={form.phone.clone()}
                               oninput={on_text(&p.on_edit, FormEdit::Phone)} />
                        <p class="form-hint">{ t("reservation.phone_hint") }</p>
                    </div>
                </div>

                <div class="form-section">
                    <h2 class="section-title">{ t("reservation.section_payment") }</h2>
                    <div class="form-group">
                        <label>{ t("reservation.payment") }</label>
                        <div class="payment-info">{ t(descriptor.payment_key) }</div>
                    </div>
                    <div class="form-group checkbox-group">
                        <label class="checkbox-label">
                            <input type="checkbox" name="policy" checked={form.policy} onchange={on_policy} />
                            <span>{ t("reservation.policy") }</span>
                        </label>
                    </div>
                    <div class="notice-box">
                        <h3>{ t("reservation.notices") }</h3>
                        <ul>
                            { for descriptor.notice_keys.iter().map(|key| html! { <li>{ t(key) }</li> }) }
                        </ul>
                    </div>
                </div>
            </fieldset>

            { for message }

            <div class="form-actions">
                <button type="submit" class="btn-submit" disabled={submitting}>
                    { submit_label }
                </button>
            </div>
        </form>
    }
}
