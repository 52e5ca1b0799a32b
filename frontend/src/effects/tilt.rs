//! 3D tilt that follows the pointer across each service card.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::EffectsConfig;
use crate::dom;
use crate::effects::scheduler::FrameSlot;
use crate::error::{EffectError, EffectResult};

pub const CARD_SELECTOR: &str = ".service-card";

/// Rotation in degrees around each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are the pointer offset inside a `width` × `height` box.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn transform(&self, perspective: f64, lift: f64) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px) translateZ(0)",
            perspective, self.rotate_x, self.rotate_y, -lift
        )
    }
}

pub fn resting_transform(perspective: f64) -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) translateY(0) translateZ(0)",
        perspective
    )
}

struct Card {
    element: HtmlElement,
    hovered: Cell<bool>,
    frame: FrameSlot,
}

impl Card {
    fn tilt_towards(&self, client_x: f64, client_y: f64, config: &EffectsConfig) {
        let rect = self.element.get_bounding_client_rect();
        let tilt = Tilt::from_pointer(
            client_x - rect.left(),
            client_y - rect.top(),
            rect.width(),
            rect.height(),
            config.tilt_divisor,
        );
        dom::set_style(&self.element, "transform", &tilt.transform(config.tilt_perspective, config.tilt_lift));
    }

    fn rest(&self, config: &EffectsConfig) {
        self.hovered.set(false);
        self.frame.cancel();
        dom::set_style(&self.element, "transform", &resting_transform(config.tilt_perspective));
    }
}

pub struct TiltCards {
    cards: Vec<Rc<Card>>,
    _listeners: Vec<EventListener>,
}

impl TiltCards {
    pub fn install(document: &Document, config: &EffectsConfig) -> EffectResult<Self> {
        let cards: Vec<Rc<Card>> = dom::query_all(document, CARD_SELECTOR)
            .into_iter()
            .map(|element| {
                Rc::new(Card {
                    element,
                    hovered: Cell::new(false),
                    frame: FrameSlot::default(),
                })
            })
            .collect();
        if cards.is_empty() {
            return Err(EffectError::MissingElement(CARD_SELECTOR));
        }

        let mut listeners = Vec::with_capacity(cards.len() * 3);
        for card in &cards {
            let target = card.element.clone();

            let on_enter = {
                let card = card.clone();
                move |_: &web_sys::Event| card.hovered.set(true)
            };
            listeners.push(EventListener::new(target.as_ref(), "mouseenter", on_enter));

            let on_move = {
                let card = Rc::downgrade(card);
                let config = config.clone();
                move |event: &web_sys::Event| {
                    let (Some(current), Some(event)) = (card.upgrade(), event.dyn_ref::<MouseEvent>()) else {
                        return;
                    };
                    if !current.hovered.get() {
                        return;
                    }
                    let (x, y) = (event.client_x() as f64, event.client_y() as f64);
                    let card = card.clone();
                    let config = config.clone();
                    current.frame.replace(move || {
                        if let Some(card) = card.upgrade() {
                            card.tilt_towards(x, y, &config);
                        }
                    });
                }
            };
            listeners.push(EventListener::new(target.as_ref(), "mousemove", on_move));

            let on_leave = {
                let card = card.clone();
                let config = config.clone();
                move |_: &web_sys::Event| card.rest(&config)
            };
            listeners.push(EventListener::new(target.as_ref(), "mouseleave", on_leave));
        }
        debug!("Tilt bound to {} cards", cards.len());

        Ok(Self {
            cards,
            _listeners: listeners,
        })
    }
}

impl Drop for TiltCards {
    fn drop(&mut self) {
        for card in &self.cards {
            card.frame.cancel();
        }
    }
}
