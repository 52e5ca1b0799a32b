//! Viewport width classes and the single debounced resize listener every
//! width-dependent effect subscribes to.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::Window;

use crate::config::EffectsConfig;
use crate::dom;
use crate::effects::scheduler::Debouncer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn classify(width: f64, config: &EffectsConfig) -> Self {
        if width > config.desktop_breakpoint {
            Breakpoint::Desktop
        } else if width > config.mobile_breakpoint {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// How many slider items fit side by side.
    pub fn visible_slides(self) -> usize {
        match self {
            Breakpoint::Desktop => 3,
            Breakpoint::Tablet => 2,
            Breakpoint::Mobile => 1,
        }
    }

    /// Touch-sized screens keep the native cursor.
    pub fn shows_custom_cursor(self) -> bool {
        self != Breakpoint::Mobile
    }
}

type Subscriber = Box<dyn Fn(f64)>;

pub struct ResizeWatcher {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    _listener: EventListener,
}

impl ResizeWatcher {
    pub fn install(window: &Window, delay_ms: u32) -> Self {
        let subscribers: Rc<RefCell<Vec<Subscriber>>> = Rc::new(RefCell::new(Vec::new()));
        let debouncer = Debouncer::new(delay_ms);

        let listener = {
            let subscribers = subscribers.clone();
            let win = window.clone();
            EventListener::new(window.as_ref(), "resize", move |_| {
                let subscribers = subscribers.clone();
                let win = win.clone();
                debouncer.call(move || {
                    let width = dom::inner_width(&win);
                    debug!("Viewport settled at {}px", width);
                    for subscriber in subscribers.borrow().iter() {
                        subscriber(width);
                    }
                });
            })
        };

        Self {
            subscribers,
            _listener: listener,
        }
    }

    /// `on_resize` receives the new inner width once resizing settles.
    pub fn subscribe(&self, on_resize: impl Fn(f64) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(on_resize));
    }
}
