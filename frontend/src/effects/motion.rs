//! The user's reduced-motion preference.

use web_sys::{Document, Element, Window};

use crate::error::{EffectError, EffectResult};

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub const STILL_CSS: &str = r#"
*,
*::before,
*::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
}
"#;

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map_or(false, |query| query.matches())
}

/// Stylesheet that collapses every animation and transition; removed again
/// when dropped.
pub struct StillStyles {
    style: Element,
}

impl StillStyles {
    pub fn install(document: &Document) -> EffectResult<Self> {
        let head = document.head().ok_or(EffectError::MissingElement("head"))?;
        let style = document.create_element("style")?;
        style.set_text_content(Some(STILL_CSS));
        head.append_child(&style)?;
        Ok(Self { style })
    }
}

impl Drop for StillStyles {
    fn drop(&mut self) {
        self.style.remove();
    }
}
