//! Scroll-driven translation of the decorative background layers.

use gloo_events::EventListener;
use log::debug;
use web_sys::{Document, HtmlElement, Window};

use crate::config::EffectsConfig;
use crate::dom;
use crate::effects::scheduler::FrameCoalescer;
use crate::error::{EffectError, EffectResult};

pub const HERO_BACKGROUND_SELECTOR: &str = ".hero-background";
pub const FLOAT_SELECTOR: &str = ".float-circle";
pub const TRUST_BACKGROUND_SELECTOR: &str = ".trust-background";
pub const TRUST_SECTION_SELECTOR: &str = ".trust-section";

/// What the layers need to know about the page for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Viewport-relative top and bottom of the trust section, if any.
    pub trust_bounds: Option<(f64, f64)>,
}

/// Offsets to apply this frame. `None` leaves that layer untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallaxOffsets {
    pub hero: Option<f64>,
    pub floats: Option<Vec<f64>>,
    pub trust: Option<f64>,
}

pub fn offsets(sample: ScrollSample, float_count: usize, config: &EffectsConfig) -> ParallaxOffsets {
    let ScrollSample {
        scroll_y,
        viewport_height,
        trust_bounds,
    } = sample;

    let hero = (scroll_y < viewport_height * config.hero_parallax_extent)
        .then(|| scroll_y * config.hero_parallax_speed);

    let floats = (scroll_y < viewport_height * config.float_parallax_extent).then(|| {
        (0..float_count)
            .map(|i| scroll_y * (config.float_parallax_speed + i as f64 * config.float_parallax_step))
            .collect()
    });

    let trust = trust_bounds
        .filter(|&(top, bottom)| top < viewport_height && bottom > 0.0)
        .map(|(top, _)| (scroll_y - top) * config.trust_parallax_speed);

    ParallaxOffsets { hero, floats, trust }
}

struct Layers {
    hero: Option<HtmlElement>,
    floats: Vec<HtmlElement>,
    trust: Option<(HtmlElement, HtmlElement)>,
}

impl Layers {
    fn is_empty(&self) -> bool {
        self.hero.is_none() && self.floats.is_empty() && self.trust.is_none()
    }

    fn sample(&self, window: &Window) -> ScrollSample {
        ScrollSample {
            scroll_y: dom::scroll_y(window),
            viewport_height: dom::inner_height(window),
            trust_bounds: self.trust.as_ref().map(|(_, section)| {
                let rect = section.get_bounding_client_rect();
                (rect.top(), rect.bottom())
            }),
        }
    }

    fn apply(&self, offsets: &ParallaxOffsets) {
        if let (Some(hero), Some(offset)) = (&self.hero, offsets.hero) {
            dom::set_style(hero, "transform", &dom::translate_y(offset));
        }
        if let Some(floats) = &offsets.floats {
            for (el, offset) in self.floats.iter().zip(floats) {
                dom::set_style(el, "transform", &dom::translate_y(*offset));
            }
        }
        if let (Some((background, _)), Some(offset)) = (&self.trust, offsets.trust) {
            dom::set_style(background, "transform", &dom::translate_y(offset));
        }
    }
}

pub struct Parallax {
    frame: FrameCoalescer,
    _listener: EventListener,
}

impl Parallax {
    pub fn install(window: &Window, document: &Document, config: &EffectsConfig) -> EffectResult<Self> {
        let trust = match (
            dom::query(document, TRUST_BACKGROUND_SELECTOR),
            dom::query(document, TRUST_SECTION_SELECTOR),
        ) {
            (Ok(background), Ok(section)) => Some((background, section)),
            _ => None,
        };
        let layers = Layers {
            hero: dom::query(document, HERO_BACKGROUND_SELECTOR).ok(),
            floats: dom::query_all(document, FLOAT_SELECTOR),
            trust,
        };
        if layers.is_empty() {
            return Err(EffectError::MissingElement(HERO_BACKGROUND_SELECTOR));
        }
        debug!("Parallax over {} floating layers", layers.floats.len());

        let frame = {
            let window = window.clone();
            let config = config.clone();
            FrameCoalescer::new(move || {
                let sample = layers.sample(&window);
                layers.apply(&offsets(sample, layers.floats.len(), &config));
            })
        };

        let listener = {
            let frame = frame.clone();
            EventListener::new(window.as_ref(), "scroll", move |_| frame.schedule())
        };

        frame.run_now();
        Ok(Self {
            frame,
            _listener: listener,
        })
    }

    /// Recompute on the next frame.
    pub fn refresh(&self) {
        self.frame.schedule();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scroll_y: f64) -> ScrollSample {
        ScrollSample {
            scroll_y,
            viewport_height: 800.0,
            trust_bounds: None,
        }
    }

    #[test]
    fn hero_moves_at_thirty_percent_while_in_view() {
        let config = EffectsConfig::default();
        assert!((offsets(sample(100.0), 0, &config).hero.unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(offsets(sample(799.0), 0, &config).hero.map(|o| o.round()), Some(240.0));
        assert_eq!(offsets(sample(800.0), 0, &config).hero, None);
    }

    #[test]
    fn each_float_is_faster_than_the_last() {
        let config = EffectsConfig::default();
        let floats = offsets(sample(100.0), 3, &config).floats.unwrap();
        assert_eq!(floats.len(), 3);
        assert!((floats[0] - 20.0).abs() < 1e-9);
        assert!((floats[1] - 25.0).abs() < 1e-9);
        assert!((floats[2] - 30.0).abs() < 1e-9);
    }

    #[test]
    fn floats_stop_after_one_and_a_half_viewports() {
        let config = EffectsConfig::default();
        assert!(offsets(sample(1000.0), 2, &config).floats.is_some());
        assert!(offsets(sample(1200.0), 2, &config).floats.is_none());
    }

    #[test]
    fn trust_layer_moves_only_while_its_section_is_visible() {
        let config = EffectsConfig::default();
        let visible = ScrollSample {
            scroll_y: 1500.0,
            viewport_height: 800.0,
            trust_bounds: Some((300.0, 900.0)),
        };
        assert!((offsets(visible, 0, &config).trust.unwrap() - 180.0).abs() < 1e-9);

        let below = ScrollSample {
            trust_bounds: Some((800.0, 1400.0)),
            ..visible
        };
        assert_eq!(offsets(below, 0, &config).trust, None);

        let above = ScrollSample {
            trust_bounds: Some((-600.0, 0.0)),
            ..visible
        };
        assert_eq!(offsets(above, 0, &config).trust, None);
    }

    #[test]
    fn missing_trust_section_leaves_it_alone() {
        let config = EffectsConfig::default();
        assert_eq!(offsets(sample(10.0), 0, &config).trust, None);
    }
}
