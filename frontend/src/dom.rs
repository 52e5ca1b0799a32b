//! Small helpers over `web_sys` shared by the effects.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::{EffectError, EffectResult};

pub fn window() -> EffectResult<Window> {
    web_sys::window().ok_or(EffectError::NoWindow)
}

pub fn document() -> EffectResult<Document> {
    window()?.document().ok_or(EffectError::NoDocument)
}

pub fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// First element matching `selector`, or `MissingElement`.
pub fn query(document: &Document, selector: &'static str) -> EffectResult<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(EffectError::MissingElement(selector))
}

/// Every element matching `selector`; an invalid selector yields nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    collect(document.query_selector_all(selector).ok())
}

/// Same as [`query_all`] but scoped to a subtree.
pub fn query_all_within(parent: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    collect(parent.query_selector_all(selector).ok())
}

fn collect(list: Option<web_sys::NodeList>) -> Vec<HtmlElement> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Cosmetic writes never fail the effect that makes them.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// `translateY(..px) translateZ(0)`, the layer-promoting translation used by
/// the scroll effects.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px) translateZ(0)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_pixel_values() {
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(0.0), "0px");
        assert_eq!(translate_y(-4.0), "translateY(-4px) translateZ(0)");
    }
}
