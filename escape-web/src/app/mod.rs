use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::dom::FetchTransport;
use crate::i18n::Locale;
use crate::router::Route;
use escape_core::ApiClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod alerts;
pub mod reservation;
pub mod routing;
pub mod state;

/// API client for this build, talking to the browser `fetch` API.
#[must_use]
pub fn api_client() -> ApiClient<FetchTransport> {
    ApiClient::new(crate::config::api_config(), FetchTransport)
}

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_document_title(route.clone(), (*app_state.current_language).clone());

    let on_navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });
    let on_lang_change = {
        let lang = app_state.current_language.clone();
        Callback::from(move |code: String| lang.set(code))
    };

    let locale = Locale(AttrValue::from((*app_state.current_language).clone()));

    html! {
        <ContextProvider<Locale> context={locale}>
            <Header
                current={route}
                {on_navigate}
                {on_lang_change}
                current_lang={(*app_state.current_language).clone()}
            />
            <main id="main" role="main" class="main-content">
                <Switch<Route> render={routing::switch} />
            </main>
            <Footer />
        </ContextProvider<Locale>>
    }
}
