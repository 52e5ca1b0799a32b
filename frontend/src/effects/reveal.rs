//! One-shot reveal of page sections as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::EffectsConfig;
use crate::dom;
use crate::error::{EffectError, EffectResult};

pub const REVEAL_SELECTOR: &str = ".section-title, .section-subtitle, .step-item, .trust-paragraph, \
     .cta-title, .cta-subtitle, .cta-large, .cta-note, .goal-card";
pub const VISIBLE_CLASS: &str = "visible";

/// Remembers which elements were already revealed.
#[derive(Debug)]
pub struct RevealLedger<K> {
    threshold: f64,
    revealed: Vec<K>,
}

impl<K: PartialEq> RevealLedger<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: Vec::new(),
        }
    }

    /// True exactly once per key: the first time it is seen intersecting at
    /// or above the threshold.
    pub fn should_reveal(&mut self, key: K, intersecting: bool, ratio: f64) -> bool {
        if !intersecting || ratio < self.threshold || self.revealed.contains(&key) {
            return false;
        }
        self.revealed.push(key);
        true
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct RevealOnScroll {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealOnScroll {
    pub fn install(document: &Document, config: &EffectsConfig) -> EffectResult<Self> {
        let targets = dom::query_all(document, REVEAL_SELECTOR);
        if targets.is_empty() {
            return Err(EffectError::MissingElement(REVEAL_SELECTOR));
        }

        let ledger: Rc<RefCell<RevealLedger<Element>>> =
            Rc::new(RefCell::new(RevealLedger::new(config.reveal_threshold)));
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let reveal = ledger.borrow_mut().should_reveal(
                    target.clone(),
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if reveal {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                    debug!("Revealed {} sections so far", ledger.borrow().revealed_count());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in &targets {
            observer.observe(target);
        }
        debug!("Observing {} reveal targets", targets.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealOnScroll {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_then_ignores_the_element() {
        let mut ledger = RevealLedger::new(0.15);
        assert!(ledger.should_reveal(1, true, 0.4));
        assert!(!ledger.should_reveal(1, true, 0.9));
        assert!(!ledger.should_reveal(1, false, 0.0));
        assert!(!ledger.should_reveal(1, true, 0.5));
        assert_eq!(ledger.revealed_count(), 1);
    }

    #[test]
    fn below_threshold_does_not_count() {
        let mut ledger = RevealLedger::new(0.15);
        assert!(!ledger.should_reveal("hero", true, 0.05));
        assert!(!ledger.should_reveal("hero", false, 0.3));
        assert_eq!(ledger.revealed_count(), 0);
        assert!(ledger.should_reveal("hero", true, 0.15));
    }

    #[test]
    fn elements_are_tracked_independently() {
        let mut ledger = RevealLedger::new(0.15);
        assert!(ledger.should_reveal('a', true, 1.0));
        assert!(ledger.should_reveal('b', true, 0.2));
        assert!(!ledger.should_reveal('a', true, 1.0));
        assert_eq!(ledger.revealed_count(), 2);
    }
}
