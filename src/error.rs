use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no global window")]
    NoWindow,
    #[error("matchMedia returned nothing for {0}")]
    MediaQueryUnavailable(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("scene config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for ViewerError {
    fn from(v: JsValue) -> Self {
        let msg = match v.dyn_ref::<js_sys::Error>() {
            Some(e) => String::from(e.message()),
            None => v.as_string().unwrap_or_else(|| format!("{:?}", v)),
        };
        Self::Js(msg)
    }
}
