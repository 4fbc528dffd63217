use crate::i18n::t;
use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let _locale = crate::i18n::use_locale();
    let go_home = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h2 class="page-title">{ t("not_found.title") }</h2>
            <p>{ t("not_found.body") }</p>
            <button type="button" onclick={go_home}>
                { t("not_found.back") }
            </button>
        </section>
    }
}
