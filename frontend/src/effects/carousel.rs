//! Manually paged services slider.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::config::EffectsConfig;
use crate::dom;
use crate::effects::viewport::Breakpoint;
use crate::error::{EffectError, EffectResult};

pub const TRACK_SELECTOR: &str = ".services-slider-track";
pub const ITEM_SELECTOR: &str = ".service-card-wrapper";
pub const DOTS_SELECTOR: &str = ".slider-dots";
pub const PREV_SELECTOR: &str = ".slider-btn-prev";
pub const NEXT_SELECTOR: &str = ".slider-btn-next";
pub const DOT_CLASS: &str = "slider-dot";
pub const ACTIVE_CLASS: &str = "active";

/// Index state of a slider showing `visible` of `item_count` items at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    item_count: usize,
    visible: usize,
}

/// Enabled state of the prev/next buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Carousel {
    pub fn new(item_count: usize, visible: usize) -> Self {
        Self {
            index: 0,
            item_count,
            visible,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Last index that still fills every visible slot.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible)
    }

    /// Returns false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.index < self.max_index() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already at the start.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.max_index());
    }

    /// Changes how many items fit and pulls the index back into range.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.index = self.index.min(self.max_index());
    }

    /// Horizontal track translation for items of `item_width` spaced by `gap`.
    pub fn offset(&self, item_width: f64, gap: f64) -> f64 {
        -(self.index as f64) * (item_width + gap)
    }

    pub fn controls(&self) -> Controls {
        Controls {
            prev_disabled: self.index == 0,
            next_disabled: self.index >= self.max_index(),
        }
    }
}

struct SliderParts {
    track: HtmlElement,
    first_item: HtmlElement,
    dots: Vec<HtmlElement>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
}

struct SliderState {
    parts: SliderParts,
    carousel: RefCell<Carousel>,
    config: EffectsConfig,
}

impl SliderState {
    fn render(&self) {
        let carousel = self.carousel.borrow();
        let width = self.parts.first_item.offset_width() as f64;
        let offset = carousel.offset(width, self.config.slide_gap);
        dom::set_style(&self.parts.track, "transform", &format!("translateX({}px)", offset));

        for (i, dot) in self.parts.dots.iter().enumerate() {
            let _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, i == carousel.index());
        }

        let controls = carousel.controls();
        if let Some(prev) = &self.parts.prev {
            prev.set_disabled(controls.prev_disabled);
        }
        if let Some(next) = &self.parts.next {
            next.set_disabled(controls.next_disabled);
        }
    }

    fn update(&self, change: impl FnOnce(&mut Carousel) -> bool) {
        let changed = change(&mut *self.carousel.borrow_mut());
        if changed {
            self.render();
        }
    }
}

pub struct Slider {
    state: Rc<SliderState>,
    _listeners: Vec<EventListener>,
}

impl Slider {
    pub fn install(document: &Document, config: &EffectsConfig, width: f64) -> EffectResult<Self> {
        let track = dom::query(document, TRACK_SELECTOR)?;
        let items = dom::query_all_within(&track, ITEM_SELECTOR);
        let Some(first_item) = items.first().cloned() else {
            return Err(EffectError::MissingElement(ITEM_SELECTOR));
        };

        let dots = match dom::query(document, DOTS_SELECTOR) {
            Ok(container) => build_dots(document, &container, items.len())?,
            Err(_) => Vec::new(),
        };
        let button = |selector| {
            dom::query(document, selector)
                .ok()
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        };

        let visible = Breakpoint::classify(width, config).visible_slides();
        let state = Rc::new(SliderState {
            parts: SliderParts {
                track,
                first_item,
                dots,
                prev: button(PREV_SELECTOR),
                next: button(NEXT_SELECTOR),
            },
            carousel: RefCell::new(Carousel::new(items.len(), visible)),
            config: config.clone(),
        });

        let mut listeners = Vec::new();
        for (i, dot) in state.parts.dots.iter().enumerate() {
            let state = state.clone();
            listeners.push(EventListener::new(dot.as_ref(), "click", move |_| {
                state.update(|carousel| {
                    carousel.go_to(i);
                    true
                });
            }));
        }
        if let Some(next) = &state.parts.next {
            let state = state.clone();
            listeners.push(EventListener::new(next.as_ref(), "click", move |_| {
                state.update(Carousel::next);
            }));
        }
        if let Some(prev) = &state.parts.prev {
            let state = state.clone();
            listeners.push(EventListener::new(prev.as_ref(), "click", move |_| {
                state.update(Carousel::prev);
            }));
        }

        debug!("Slider with {} items, {} visible", items.len(), state.carousel.borrow().visible());
        state.render();
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Re-derives the visible count for a new viewport width.
    pub fn fit_width(&self, width: f64) {
        let visible = Breakpoint::classify(width, &self.state.config).visible_slides();
        self.state.update(|carousel| {
            carousel.set_visible(visible);
            true
        });
    }

    pub fn index(&self) -> usize {
        self.state.carousel.borrow().index()
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        for dot in &self.state.parts.dots {
            dot.remove();
        }
    }
}

/// Creates every dot detached first and attaches them only once all are
/// built; a failed attach takes the already attached ones back out.
fn build_dots(document: &Document, container: &HtmlElement, count: usize) -> EffectResult<Vec<HtmlElement>> {
    let mut dots = Vec::with_capacity(count);
    for i in 0..count {
        let dot: HtmlElement = document.create_element("button")?.unchecked_into();
        dot.set_class_name(DOT_CLASS);
        dot.set_attribute("type", "button")?;
        dot.set_attribute("aria-label", &dot_label(i))?;
        if i == 0 {
            dot.class_list().add_1(ACTIVE_CLASS)?;
        }
        dots.push(dot);
    }
    for (attached, dot) in dots.iter().enumerate() {
        if let Err(e) = container.append_child(dot) {
            for dot in &dots[..attached] {
                dot.remove();
            }
            return Err(e.into());
        }
    }
    Ok(dots)
}

pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}
