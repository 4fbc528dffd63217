use crate::components::alert_card::AlertCard;
use crate::i18n::{t, tr};
use escape_core::AlertListState;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AlertListPageProps {
    pub state: AlertListState,
}

/// Alert list in one of its three states.
///
/// The logout and add buttons are placeholders with no behaviour.
#[function_component(AlertListPage)]
pub fn alert_list_page(p: &AlertListPageProps) -> Html {
    let _locale = crate::i18n::use_locale();
    let alerts = match &p.state {
        AlertListState::Loading => {
            return html! {
                <div class="alert-list-container">
                    <div class="loading" aria-busy="true">{ t("alerts.loading") }</div>
                </div>
            };
        }
        AlertListState::Errored => {
            return html! {
                <div class="alert-list-container">
                    <div class="error" role="alert">{ t("alerts.error") }</div>
                </div>
            };
        }
        AlertListState::Loaded(alerts) => alerts,
    };

    let count = alerts.len().to_string();
    let heading = tr(
        "alerts.count",
        Some(&BTreeMap::from([("count", count.as_str())])),
    );

    let body = if alerts.is_empty() {
        html! {
            <div class="empty-state">
                <div class="empty-icon" aria-hidden="true">{ "📭" }</div>
                <p class="empty-text">{ t("alerts.empty") }</p>
                <button type="button" class="btn-add">{ t("alerts.add") }</button>
            </div>
        }
    } else {
        html! {
            <div class="alerts-grid">
                { for alerts.iter().map(|alert| html! {
                    <AlertCard key={alert.alert_id} alert={alert.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="alert-list-container">
            <div class="page-header">
                <h2 class="page-title">{ t("app.title") }</h2>
                <button type="button" class="logout-btn">{ t("nav.logout") }</button>
            </div>
            <div class="list-header">
                <h2 class="section-title">{ heading }</h2>
            </div>
            { body }
        </div>
    }
}
