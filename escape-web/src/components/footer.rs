use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let _locale = crate::i18n::use_locale();
    html! {
        <footer class="footer">{ t("footer.copyright") }</footer>
    }
}
