pub use wasm_bindgen::JsCast;
pub use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::class_list;
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mt-2");
        let rendered = class_list(&["card", "shadow"], &extra).to_string();
        assert!(rendered.contains("card"));
        assert!(rendered.contains("shadow"));
        assert!(rendered.contains("mt-2"));
    }
}
