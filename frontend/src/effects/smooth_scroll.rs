//! In-page anchor links scroll smoothly and clear the fixed header.

use gloo_events::{EventListener, EventListenerOptions};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::{EffectError, EffectResult};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The selector an in-page href points at, if it names a target at all.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.starts_with('#').then_some(href).filter(|h| h.len() > 1)
}

/// Programmatic scrolls jump straight to the target when motion is reduced.
pub fn scroll_behavior(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    }
}

/// Where to scroll so a target at `offset_top` lands just under the header.
pub fn scroll_top_for(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn install(
        window: &Window,
        document: &Document,
        header_offset: f64,
        behavior: ScrollBehavior,
    ) -> EffectResult<Self> {
        let anchors = dom::query_all(document, ANCHOR_SELECTOR);
        if anchors.is_empty() {
            return Err(EffectError::MissingElement(ANCHOR_SELECTOR));
        }

        let listeners: Vec<_> = anchors
            .into_iter()
            .map(|anchor| {
                let window = window.clone();
                let document = document.clone();
                let target = anchor.clone();
                EventListener::new_with_options(
                    target.as_ref(),
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let Some(href) = anchor.get_attribute("href") else {
                            return;
                        };
                        let Some(selector) = fragment_target(&href) else {
                            return;
                        };
                        let Some(section) = document
                            .query_selector(selector)
                            .ok()
                            .flatten()
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        else {
                            debug!("No scroll target for {}", selector);
                            return;
                        };
                        let options = ScrollToOptions::new();
                        options.set_top(scroll_top_for(section.offset_top() as f64, header_offset));
                        options.set_behavior(behavior);
                        window.scroll_to_with_scroll_to_options(&options);
                    },
                )
            })
            .collect();
        debug!("Smooth scrolling {} anchors", listeners.len());

        Ok(Self {
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_named_fragments_have_targets() {
        assert_eq!(fragment_target("#services"), Some("#services"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/pricing#faq"), None);
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        assert_eq!(scroll_behavior(true), ScrollBehavior::Instant);
        assert_eq!(scroll_behavior(false), ScrollBehavior::Smooth);
    }

    #[test]
    fn header_height_is_subtracted() {
        assert_eq!(scroll_top_for(1240.0, 80.0), 1160.0);
        assert_eq!(scroll_top_for(40.0, 80.0), -40.0);
    }
}
