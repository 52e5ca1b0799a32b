use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why an effect could not be installed. None of these are fatal: the
/// controller logs them and carries on without that one effect.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        EffectError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type EffectResult<T> = Result<T, EffectError>;
