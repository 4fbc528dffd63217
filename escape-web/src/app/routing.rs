use crate::app::alerts::AlertsScreen;
use crate::app::reservation::ReservationScreen;
use crate::i18n::t;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Page title for a route: the page name followed by the app name.
#[must_use]
pub fn document_title(route: Option<&Route>) -> String {
    let app = t("app.title");
    let page = match route {
        Some(Route::Alerts) => Some(t("nav.alerts")),
        Some(route) => route
            .venue()
            .map(|venue| t(venue.descriptor().title_key))
            .or_else(|| matches!(route, Route::NotFound).then(|| t("not_found.title"))),
        None => None,
    };
    page.map_or_else(|| app.clone(), |page| format!("{page} | {app}"))
}

/// Keep `document.title` in step with the active route.
#[hook]
pub fn use_document_title(route: Option<Route>, lang: String) {
    use_effect_with((route, lang), |(route, _)| {
        if let Some(doc) = crate::dom::window().and_then(|w| w.document()) {
            doc.set_title(&document_title(route.as_ref()));
        }
    });
}

#[function_component(NotFoundScreen)]
fn not_found_screen() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Alerts);
        }
    });
    html! { <NotFound {on_go_home} /> }
}

/// Render function for the route switch.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={crate::config::default_route()} /> },
        Route::Alerts => html! { <AlertsScreen /> },
        Route::ZeroWorld | Route::EarthEscape => match route.venue() {
            Some(venue) => html! { <ReservationScreen key={venue.slug()} {venue} /> },
            None => html! { <NotFoundScreen /> },
        },
        Route::NotFound => html! { <NotFoundScreen /> },
    }
}
