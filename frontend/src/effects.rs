//! Every motion effect on the landing page, installed and torn down together.

pub mod carousel;
pub mod cursor;
pub mod hero;
pub mod motion;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod scheduler;
pub mod smooth_scroll;
pub mod tilt;
pub mod viewport;

use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::ScrollBehavior;

use crate::config::EffectsConfig;
use crate::dom;
use crate::error::{EffectError, EffectResult};

use self::carousel::Slider;
use self::cursor::CustomCursor;
use self::hero::HeroEntrance;
use self::motion::StillStyles;
use self::navbar::NavbarShadow;
use self::parallax::Parallax;
use self::reveal::RevealOnScroll;
use self::smooth_scroll::SmoothScroll;
use self::tilt::TiltCards;
use self::viewport::ResizeWatcher;

/// Which effects run for a given reduced-motion preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPlan {
    pub cursor: bool,
    pub parallax: bool,
    pub tilt: bool,
    pub still_styles: bool,
    pub scroll_behavior: ScrollBehavior,
}

impl MotionPlan {
    pub fn for_preference(reduced_motion: bool) -> Self {
        Self {
            cursor: !reduced_motion,
            parallax: !reduced_motion,
            tilt: !reduced_motion,
            still_styles: reduced_motion,
            scroll_behavior: smooth_scroll::scroll_behavior(reduced_motion),
        }
    }
}

/// Owns the installed effects. Dropping it removes every listener, cancels
/// pending frames and timers, and takes out anything it added to the page.
pub struct PageEffects {
    _resize: ResizeWatcher,
    _hero: HeroEntrance,
    cursor: Option<Rc<CustomCursor>>,
    parallax: Option<Rc<Parallax>>,
    slider: Option<Rc<Slider>>,
    reveal: Option<RevealOnScroll>,
    tilt: Option<TiltCards>,
    smooth_scroll: Option<SmoothScroll>,
    navbar: Option<NavbarShadow>,
    still: Option<StillStyles>,
    reduced_motion: bool,
}

impl PageEffects {
    pub fn install(config: EffectsConfig) -> EffectResult<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(EffectError::NoDocument)?;
        let width = dom::inner_width(&window);
        let reduced_motion = motion::prefers_reduced_motion(&window);
        let plan = MotionPlan::for_preference(reduced_motion);

        let still = if plan.still_styles {
            cursor::hide_markers(&document);
            settle("reduced-motion styles", StillStyles::install(&document))
        } else {
            None
        };

        let resize = ResizeWatcher::install(&window, config.resize_debounce_ms);

        let cursor = if plan.cursor {
            settle("cursor", CustomCursor::install(&document, &config, width)).map(Rc::new)
        } else {
            None
        };
        if let Some(cursor) = &cursor {
            let cursor = cursor.clone();
            resize.subscribe(move |width| cursor.fit_width(width));
        }

        let parallax = if plan.parallax {
            settle("parallax", Parallax::install(&window, &document, &config)).map(Rc::new)
        } else {
            None
        };
        if let Some(parallax) = &parallax {
            let parallax = parallax.clone();
            resize.subscribe(move |_| parallax.refresh());
        }

        let tilt = if plan.tilt {
            settle("card tilt", TiltCards::install(&document, &config))
        } else {
            None
        };

        let reveal = settle("reveal", RevealOnScroll::install(&document, &config));

        let slider = settle("slider", Slider::install(&document, &config, width)).map(Rc::new);
        if let Some(slider) = &slider {
            let slider = slider.clone();
            resize.subscribe(move |width| slider.fit_width(width));
        }

        let smooth_scroll = settle(
            "smooth scroll",
            SmoothScroll::install(&window, &document, config.header_offset, plan.scroll_behavior),
        );
        let navbar = settle(
            "navbar",
            NavbarShadow::install(&window, &document, config.navbar_shadow_threshold),
        );

        let hero = {
            let parallax = parallax.clone();
            HeroEntrance::install(&window, &document, &config, move || {
                if let Some(parallax) = &parallax {
                    parallax.refresh();
                }
            })
        };

        let effects = Self {
            _resize: resize,
            _hero: hero,
            cursor,
            parallax,
            slider,
            reveal,
            tilt,
            smooth_scroll,
            navbar,
            still,
            reduced_motion,
        };
        info!("Page effects installed: {}", effects.summary());
        if let Some(cursor) = &effects.cursor {
            debug!("Cursor follower running: {}", cursor.is_following());
        }
        if let Some(slider) = &effects.slider {
            debug!("Slider starts at index {}", slider.index());
        }
        Ok(effects)
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn summary(&self) -> String {
        let installed = [
            ("cursor", self.cursor.is_some()),
            ("parallax", self.parallax.is_some()),
            ("tilt", self.tilt.is_some()),
            ("reveal", self.reveal.is_some()),
            ("slider", self.slider.is_some()),
            ("smooth-scroll", self.smooth_scroll.is_some()),
            ("navbar", self.navbar.is_some()),
            ("still", self.still.is_some()),
        ];
        installed
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        debug!("Tearing down page effects");
    }
}

/// An effect that cannot install is skipped; the rest carry on.
fn settle<T>(name: &str, result: EffectResult<T>) -> Option<T> {
    match result {
        Ok(effect) => Some(effect),
        Err(EffectError::MissingElement(selector)) => {
            debug!("Skipping {}: no {} on this page", name, selector);
            None
        }
        Err(e) => {
            warn!("Skipping {}: {}", name, e);
            None
        }
    }
}
