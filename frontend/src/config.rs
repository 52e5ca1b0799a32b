use serde::Deserialize;
use log::warn;

/// Id of the optional inline JSON block a page can use to override tuning.
pub const CONFIG_ELEMENT_ID: &str = "effects-config";

/// Tuning for every effect on the landing page. Defaults reproduce the
/// published page; any field can be overridden from the page itself.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Widths at or below this are treated as touch/mobile.
    pub mobile_breakpoint: f64,
    /// Widths above this show three slides.
    pub desktop_breakpoint: f64,
    pub follower_smoothing: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub hero_parallax_speed: f64,
    pub float_parallax_speed: f64,
    pub float_parallax_step: f64,
    pub trust_parallax_speed: f64,
    /// Hero background moves only while scrollY is below this many viewport heights.
    pub hero_parallax_extent: f64,
    pub float_parallax_extent: f64,
    pub tilt_divisor: f64,
    pub tilt_perspective: f64,
    pub tilt_lift: f64,
    pub slide_gap: f64,
    pub header_offset: f64,
    pub navbar_shadow_threshold: f64,
    pub resize_debounce_ms: u32,
    pub hero_reveal_delay_ms: u32,
    pub hero_word_base_delay: f64,
    pub hero_word_delay_step: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            desktop_breakpoint: 1200.0,
            follower_smoothing: 0.15,
            reveal_threshold: 0.15,
            reveal_root_margin: "0px 0px -30px 0px".to_string(),
            hero_parallax_speed: 0.3,
            float_parallax_speed: 0.2,
            float_parallax_step: 0.05,
            trust_parallax_speed: 0.15,
            hero_parallax_extent: 1.0,
            float_parallax_extent: 1.5,
            tilt_divisor: 25.0,
            tilt_perspective: 1000.0,
            tilt_lift: 10.0,
            slide_gap: 32.0,
            header_offset: 80.0,
            navbar_shadow_threshold: 100.0,
            resize_debounce_ms: 150,
            hero_reveal_delay_ms: 100,
            hero_word_base_delay: 1.5,
            hero_word_delay_step: 0.04,
        }
    }
}

impl EffectsConfig {
    /// Parses an override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the page's override block, falling back to defaults when it is
    /// absent or malformed.
    pub fn load(document: &web_sys::Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed #{} block: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = EffectsConfig::from_json(r#"{ "header_offset": 96, "slide_gap": 24 }"#).unwrap();
        assert_eq!(config.header_offset, 96.0);
        assert_eq!(config.slide_gap, 24.0);
        assert_eq!(config.follower_smoothing, 0.15);
        assert_eq!(config.resize_debounce_ms, 150);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(EffectsConfig::from_json("{}").unwrap(), EffectsConfig::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(EffectsConfig::from_json(r#"{ "resize_debounce_ms": "soon" }"#).is_err());
    }
}
