//! Hero entrance: fade the content in shortly after load and stagger the
//! subtitle words.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Document, Window};

use crate::config::EffectsConfig;
use crate::dom;

pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
pub const HERO_WORD_SELECTOR: &str = ".hero-subtitle .subtitle-word";

/// `animation-delay` of every subtitle word, in whole milliseconds.
pub fn word_delays(count: usize, base_secs: f64, step_secs: f64) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}ms", ((base_secs + i as f64 * step_secs) * 1000.0).round()))
        .collect()
}

pub struct HeroEntrance {
    _load: Option<EventListener>,
    _timer: Rc<RefCell<Option<Timeout>>>,
}

impl HeroEntrance {
    /// `on_load` runs once the page has loaded, alongside the entrance.
    pub fn install(window: &Window, document: &Document, config: &EffectsConfig, on_load: impl Fn() + 'static) -> Self {
        let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let start = {
            let timer = timer.clone();
            let document = document.clone();
            let config = config.clone();
            move || {
                on_load();
                let document = document.clone();
                let config = config.clone();
                let timeout = Timeout::new(config.hero_reveal_delay_ms, move || enter(&document, &config));
                *timer.borrow_mut() = Some(timeout);
            }
        };

        let load = if is_loaded(document) {
            start();
            None
        } else {
            Some(EventListener::once(window.as_ref(), "load", move |_| start()))
        };

        Self {
            _load: load,
            _timer: timer,
        }
    }
}

fn enter(document: &Document, config: &EffectsConfig) {
    if let Ok(content) = dom::query(document, HERO_CONTENT_SELECTOR) {
        dom::set_style(&content, "opacity", "1");
    }
    let words = dom::query_all(document, HERO_WORD_SELECTOR);
    let delays = word_delays(words.len(), config.hero_word_base_delay, config.hero_word_delay_step);
    for (word, delay) in words.iter().zip(&delays) {
        dom::set_style(word, "animation-delay", delay);
    }
    debug!("Hero entrance staggered {} words", words.len());
}

fn is_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_staggered_from_the_base_delay() {
        assert_eq!(
            word_delays(4, 1.5, 0.04),
            vec!["1500ms", "1540ms", "1580ms", "1620ms"]
        );
    }

    #[test]
    fn no_words_no_delays() {
        assert!(word_delays(0, 1.5, 0.04).is_empty());
    }
}
