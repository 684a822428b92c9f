use eatwise_web::dom;
use eatwise_web::i18n::{self, Lang};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn language_selection_survives_persist_and_load() {
    i18n::persist(Lang::Ta);
    assert_eq!(i18n::load_saved(), Lang::Ta);
    i18n::persist(Lang::En);
    assert_eq!(i18n::load_saved(), Lang::En);
}

#[wasm_bindgen_test]
fn document_lang_attribute_follows_selection() {
    i18n::apply_document_lang(Lang::Hi);
    let lang = dom::document()
        .document_element()
        .and_then(|el| el.get_attribute("lang"));
    assert_eq!(lang.as_deref(), Some("hi"));
    i18n::apply_document_lang(Lang::En);
}

#[wasm_bindgen_test]
fn theme_attribute_is_applied_to_document() {
    dom::apply_theme("dark");
    let theme = dom::document()
        .document_element()
        .and_then(|el| el.get_attribute("data-theme"));
    assert_eq!(theme.as_deref(), Some("dark"));
    dom::apply_theme("light");
}
