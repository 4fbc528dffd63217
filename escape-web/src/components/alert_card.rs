use crate::i18n::{fmt_timestamp, t, tr};
use escape_core::UserAlert;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub alert: UserAlert,
}

fn detail_row(label: &str, value: String) -> Html {
    html! {
        <div class="detail-row">
            <span class="detail-label">{ label.to_string() }</span>
            <span class="detail-value">{ value }</span>
        </div>
    }
}

fn counted(key: &str, count: u32) -> String {
    let count = count.to_string();
    let args = BTreeMap::from([("count", count.as_str())]);
    tr(key, Some(&args))
}

/// One saved alert. The action buttons are placeholders with no behaviour.
#[function_component(AlertCard)]
pub fn alert_card(p: &Props) -> Html {
    let _locale = crate::i18n::use_locale();
    let alert = &p.alert;
    let state = if alert.is_active { "active" } else { "inactive" };
    let status_key = if alert.is_active {
        "alerts.active"
    } else {
        "alerts.inactive"
    };

    let preferred = alert
        .preferred_times_label()
        .map(|times| detail_row(&t("alerts.preferred_times"), times));
    let notified = (alert.notified_count > 0).then(|| {
        detail_row(
            &t("alerts.notified"),
            counted("alerts.notified_count", alert.notified_count),
        )
    });
    let people = alert.num_people.map_or_else(
        || t("alerts.people_unknown"),
        |n| counted("alerts.people_count", n),
    );
    let last = alert
        .last_notified_at
        .as_deref()
        .map(|at| detail_row(&t("alerts.last_notified"), fmt_timestamp(at)));

    html! {
        <div class={classes!("alert-card", state)} data-alert-id={alert.alert_id.to_string()}>
            <div class="alert-header">
                <span class={classes!("status-badge", state)}>{ t(status_key) }</span>
            </div>
            <h3 class="theme-name">{ alert.theme.theme_name.clone() }</h3>
            <p class="cafe-info">{ alert.venue_label() }</p>
            <div class="alert-details">
                { detail_row(&t("alerts.period"), alert.period_label()) }
                { for preferred }
                { detail_row(&t("alerts.people"), people) }
                { for notified }
                { for last }
            </div>
            <div class="alert-actions">
                <button type="button" class="btn-secondary">{ t("alerts.details") }</button>
                <button type="button" class="btn-danger">{ t("alerts.delete") }</button>
            </div>
        </div>
    }
}
