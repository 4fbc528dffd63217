use crate::i18n::{locales, set_lang, t};
use crate::router::{NAV_ROUTES, Route};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub current: Option<Route>,
    pub on_navigate: Callback<Route>,
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let _locale = crate::i18n::use_locale();
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };

    let links = NAV_ROUTES.iter().filter_map(|route| {
        let key = route.nav_key()?;
        let href = crate::paths::public_path(&route.to_path());
        let onclick = {
            let cb = p.on_navigate.clone();
            let route = route.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                cb.emit(route.clone());
            })
        };
        let current = p.current.as_ref() == Some(route);
        Some(html! {
            <a {href} {onclick}
               class={classes!("nav-link", current.then_some("active"))}
               aria-current={current.then_some("page")}>
                { t(key) }
            </a>
        })
    });

    html! {
        <header role="banner" class="header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <h1 class="title">{ t("app.title") }</h1>
                <nav aria-label={t("nav.main")} class="header-nav">
                    { for links }
                </nav>
                <div class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </div>
            </div>
        </header>
    }
}
