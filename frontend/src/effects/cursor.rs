//! Custom cursor: a dot pinned to the pointer and a ring that eases after it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::EffectsConfig;
use crate::dom;
use crate::effects::scheduler::FrameLoop;
use crate::effects::viewport::Breakpoint;
use crate::error::EffectResult;

pub const CURSOR_SELECTOR: &str = ".cursor";
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .service-card, .cta-button";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer position plus the trailing position chasing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Follower {
    pub pointer: Point,
    pub trail: Point,
    smoothing: f64,
}

impl Follower {
    pub fn new(smoothing: f64) -> Self {
        Self {
            pointer: Point::default(),
            trail: Point::default(),
            smoothing,
        }
    }

    pub fn point_at(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// One frame of exponential smoothing toward the pointer.
    pub fn step(&mut self) -> Point {
        self.trail.x += (self.pointer.x - self.trail.x) * self.smoothing;
        self.trail.y += (self.pointer.y - self.trail.y) * self.smoothing;
        self.trail
    }
}

/// Scale and border colour of both cursor parts in one hover state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLook {
    pub cursor_scale: f64,
    pub cursor_border: &'static str,
    pub follower_scale: f64,
    pub follower_border: &'static str,
}

impl CursorLook {
    pub const IDLE: CursorLook = CursorLook {
        cursor_scale: 1.0,
        cursor_border: "var(--soft-teal)",
        follower_scale: 1.0,
        follower_border: "rgba(78, 205, 196, 0.3)",
    };

    pub const HOVER: CursorLook = CursorLook {
        cursor_scale: 1.5,
        cursor_border: "var(--warm-gold)",
        follower_scale: 1.3,
        follower_border: "rgba(244, 162, 97, 0.5)",
    };

    pub fn for_hover(hovering: bool) -> Self {
        if hovering {
            Self::HOVER
        } else {
            Self::IDLE
        }
    }
}

/// Whether the page draws its own cursor or leaves the native one alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Custom,
    Native,
}

impl CursorMode {
    pub fn for_width(width: f64, config: &EffectsConfig) -> Self {
        if Breakpoint::classify(width, config).shows_custom_cursor() {
            CursorMode::Custom
        } else {
            CursorMode::Native
        }
    }

    pub fn marker_display(self) -> &'static str {
        match self {
            CursorMode::Custom => "block",
            CursorMode::Native => "none",
        }
    }

    pub fn body_cursor(self) -> &'static str {
        match self {
            CursorMode::Custom => "none",
            CursorMode::Native => "auto",
        }
    }

    /// The follower loop only runs while the markers are drawn.
    pub fn runs_follower(self) -> bool {
        self == CursorMode::Custom
    }
}

/// Both markers are centred on their position, then scaled.
pub fn centred_scale(scale: f64) -> String {
    format!("translate(-50%, -50%) scale({})", scale)
}

struct Markers {
    cursor: HtmlElement,
    follower: HtmlElement,
    body: Option<HtmlElement>,
}

impl Markers {
    fn show(&self, mode: CursorMode) {
        dom::set_style(&self.cursor, "display", mode.marker_display());
        dom::set_style(&self.follower, "display", mode.marker_display());
        if let Some(body) = &self.body {
            dom::set_style(body, "cursor", mode.body_cursor());
        }
    }

    fn apply_look(&self, look: CursorLook) {
        dom::set_style(&self.cursor, "transform", &centred_scale(look.cursor_scale));
        dom::set_style(&self.cursor, "border-color", look.cursor_border);
        dom::set_style(&self.follower, "transform", &centred_scale(look.follower_scale));
        dom::set_style(&self.follower, "border-color", look.follower_border);
    }
}

pub struct CustomCursor {
    markers: Rc<Markers>,
    follow: FrameLoop,
    config: EffectsConfig,
    _listeners: Vec<EventListener>,
}

impl CustomCursor {
    pub fn install(document: &Document, config: &EffectsConfig, width: f64) -> EffectResult<Self> {
        let markers = Rc::new(Markers {
            cursor: dom::query(document, CURSOR_SELECTOR)?,
            follower: dom::query(document, FOLLOWER_SELECTOR)?,
            body: document.body(),
        });
        let tracker = Rc::new(RefCell::new(Follower::new(config.follower_smoothing)));

        let follow = {
            let markers = markers.clone();
            let tracker = tracker.clone();
            FrameLoop::new(move || {
                let trail = tracker.borrow_mut().step();
                dom::set_style(&markers.follower, "left", &dom::px(trail.x));
                dom::set_style(&markers.follower, "top", &dom::px(trail.y));
            })
        };

        let mut listeners = Vec::new();
        {
            let markers = markers.clone();
            listeners.push(EventListener::new(document.as_ref(), "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = Point::new(event.client_x() as f64, event.client_y() as f64);
                tracker.borrow_mut().point_at(pointer);
                dom::set_style(&markers.cursor, "left", &dom::px(pointer.x));
                dom::set_style(&markers.cursor, "top", &dom::px(pointer.y));
            }));
        }

        let targets = dom::query_all(document, INTERACTIVE_SELECTOR);
        for target in &targets {
            for (kind, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let markers = markers.clone();
                listeners.push(EventListener::new(target.as_ref(), kind, move |_| {
                    markers.apply_look(CursorLook::for_hover(hovering));
                }));
            }
        }
        debug!("Custom cursor bound to {} hover targets", targets.len());

        let cursor = Self {
            markers,
            follow,
            config: config.clone(),
            _listeners: listeners,
        };
        cursor.fit_width(width);
        Ok(cursor)
    }

    /// Shows the markers and runs the follower only on wide viewports.
    pub fn fit_width(&self, width: f64) {
        let mode = CursorMode::for_width(width, &self.config);
        self.markers.show(mode);
        if mode.runs_follower() {
            self.follow.start();
        } else {
            self.follow.stop();
        }
    }

    pub fn is_following(&self) -> bool {
        self.follow.is_running()
    }
}

/// Hides both markers without binding anything, for pages that should keep
/// the native cursor.
pub fn hide_markers(document: &Document) {
    let mode = CursorMode::Native;
    for selector in [CURSOR_SELECTOR, FOLLOWER_SELECTOR] {
        if let Ok(marker) = dom::query(document, selector) {
            dom::set_style(&marker, "display", mode.marker_display());
        }
    }
    if let Some(body) = document.body() {
        dom::set_style(&body, "cursor", mode.body_cursor());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_covers_fifteen_percent_of_the_gap() {
        let mut follower = Follower::new(0.15);
        follower.point_at(Point::new(100.0, -40.0));
        let trail = follower.step();
        assert!((trail.x - 15.0).abs() < 1e-9);
        assert!((trail.y + 6.0).abs() < 1e-9);
    }

    #[test]
    fn each_step_is_relative_to_the_previous_trail() {
        let mut follower = Follower::new(0.15);
        follower.trail = Point::new(50.0, 50.0);
        follower.point_at(Point::new(150.0, 10.0));
        let before = follower.trail;
        let after = follower.step();
        assert!((after.x - (before.x + (150.0 - before.x) * 0.15)).abs() < 1e-9);
        assert!((after.y - (before.y + (10.0 - before.y) * 0.15)).abs() < 1e-9);
    }

    #[test]
    fn trail_converges_on_a_still_pointer() {
        let mut follower = Follower::new(0.15);
        follower.point_at(Point::new(300.0, 200.0));
        for _ in 0..200 {
            follower.step();
        }
        assert!((follower.trail.x - 300.0).abs() < 1e-6);
        assert!((follower.trail.y - 200.0).abs() < 1e-6);
    }

    #[test]
    fn trail_at_pointer_does_not_move() {
        let mut follower = Follower::new(0.15);
        follower.point_at(Point::new(0.0, 0.0));
        assert_eq!(follower.step(), Point::new(0.0, 0.0));
    }

    #[test]
    fn narrow_viewports_keep_the_native_cursor_and_no_follower() {
        let config = EffectsConfig::default();
        let mode = CursorMode::for_width(500.0, &config);
        assert_eq!(mode, CursorMode::Native);
        assert_eq!(mode.marker_display(), "none");
        assert_eq!(mode.body_cursor(), "auto");
        assert!(!mode.runs_follower());
        assert_eq!(CursorMode::for_width(768.0, &config), CursorMode::Native);
    }

    #[test]
    fn wide_viewports_draw_the_custom_cursor() {
        let config = EffectsConfig::default();
        let mode = CursorMode::for_width(1300.0, &config);
        assert_eq!(mode, CursorMode::Custom);
        assert_eq!(mode.marker_display(), "block");
        assert_eq!(mode.body_cursor(), "none");
        assert!(mode.runs_follower());
        assert_eq!(CursorMode::for_width(769.0, &config), CursorMode::Custom);
    }

    #[test]
    fn hover_look_enlarges_both_markers() {
        assert_eq!(CursorLook::for_hover(true), CursorLook::HOVER);
        assert_eq!(CursorLook::for_hover(false), CursorLook::IDLE);
        assert_eq!(centred_scale(CursorLook::HOVER.cursor_scale), "translate(-50%, -50%) scale(1.5)");
        assert_eq!(centred_scale(CursorLook::IDLE.follower_scale), "translate(-50%, -50%) scale(1)");
    }
}
