use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlSelectElement};
use yew::Renderer;

use escape_web::app::App;
use escape_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    dom::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    escape_web::i18n::set_lang("ko");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(
        skip.get_attribute("href").unwrap_or_default(),
        "#main",
        "skip link must target the main landmark"
    );
}

#[wasm_bindgen_test]
fn language_toggle_updates_lang_and_storage() {
    render_app();
    let doc = document();
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");

    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
    let saved = dom::local_storage()
        .and_then(|s| s.get_item("escape.locale").ok().flatten());
    assert_eq!(saved.as_deref(), Some("en"));

    select.set_value("ko");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    assert_eq!(html.get_attribute("lang"), Some("ko".into()));
}

#[wasm_bindgen_test]
fn browser_helpers_have_a_window() {
    assert!(dom::window().is_some());
    assert!(dom::today().is_some());
}
