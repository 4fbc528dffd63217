use escape_web::i18n;
use escape_web::router::Route;
use std::collections::BTreeMap;
use yew_router::Routable;

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");

    let vars = BTreeMap::from([("count", "3")]);
    assert_eq!(i18n::tr("alerts.people_count", Some(&vars)), "3 people");
    assert_eq!(i18n::t("missing.key"), "missing.key");
    assert_eq!(i18n::fmt_timestamp("2025-01-01T08:05:00"), "2025-01-01 08:05");

    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "en");
    i18n::set_lang("ko");
    assert_eq!(i18n::tr("alerts.people_count", Some(&vars)), "3명");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert_eq!(metas[0].code, i18n::DEFAULT_LANG);
    assert!(metas.iter().any(|m| m.code == "en"));
}

#[test]
fn routes_round_trip_through_paths() {
    for route in [Route::Alerts, Route::ZeroWorld, Route::EarthEscape] {
        assert_eq!(Route::recognize(&route.to_path()), Some(route.clone()));
    }
    assert_eq!(escape_web::config::default_route(), Route::Alerts);
}

#[test]
fn api_client_uses_default_host() {
    let client = escape_web::app::api_client();
    assert_eq!(
        client.config().base_url(),
        escape_core::DEFAULT_API_BASE_URL
    );
}
