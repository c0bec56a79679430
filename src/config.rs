// Viewer configuration; a JSON override may be stored in localStorage under `bv_config`.

use serde::{Deserialize, Serialize};

use crate::state::ControllerSettings;
use crate::util::cwarn;

pub const STORAGE_KEY: &str = "bv_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Widths at or below this many CSS pixels count as narrow.
    pub narrow_max_width_px: u32,
    pub swipe_threshold_px: f64,
    pub model_url: String,
    pub debug_logging: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            narrow_max_width_px: 1000,
            swipe_threshold_px: 0.0,
            model_url: "./neuralnet/scene.gltf".to_string(),
            debug_logging: false,
        }
    }
}

impl ViewerConfig {
    pub fn media_query(&self) -> String {
        format!("(max-width: {}px)", self.narrow_max_width_px)
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            swipe_threshold: self.swipe_threshold_px.max(0.0),
        }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Reads the stored override, falling back to defaults when absent or
    /// unreadable.
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    match Self::from_json(&raw) {
                        Ok(cfg) => return cfg,
                        Err(e) => cwarn(&format!("ignoring malformed {}: {}", STORAGE_KEY, e)),
                    }
                }
            }
        }
        Self::default()
    }
}
