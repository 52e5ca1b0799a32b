use gloo_events::EventListener;
use web_sys::{Document, HtmlElement, Window};

use crate::dom;
use crate::effects::scheduler::FrameCoalescer;
use crate::error::EffectResult;

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const RESTING_SHADOW: &str = "0 2px 20px rgba(46, 168, 159, 0.05)";
pub const SCROLLED_SHADOW: &str = "0 4px 30px rgba(46, 168, 159, 0.15)";

pub fn shadow_for(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        SCROLLED_SHADOW
    } else {
        RESTING_SHADOW
    }
}

/// Deepens the navbar shadow once the page has scrolled past the threshold.
pub struct NavbarShadow {
    _frame: FrameCoalescer,
    _listener: EventListener,
}

impl NavbarShadow {
    pub fn install(window: &Window, document: &Document, threshold: f64) -> EffectResult<Self> {
        let navbar: HtmlElement = dom::query(document, NAVBAR_SELECTOR)?;
        let frame = {
            let window = window.clone();
            FrameCoalescer::new(move || {
                dom::set_style(&navbar, "box-shadow", shadow_for(dom::scroll_y(&window), threshold))
            })
        };
        frame.run_now();
        let listener = {
            let frame = frame.clone();
            EventListener::new(window.as_ref(), "scroll", move |_| frame.schedule())
        };
        Ok(Self {
            _frame: frame,
            _listener: listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_deepens_past_the_threshold() {
        assert_eq!(shadow_for(0.0, 100.0), RESTING_SHADOW);
        assert_eq!(shadow_for(100.0, 100.0), RESTING_SHADOW);
        assert_eq!(shadow_for(100.5, 100.0), SCROLLED_SHADOW);
    }
}
