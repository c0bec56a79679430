// Console logging helpers. Silent on non-wasm targets so host tests stay quiet.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn set_debug_logging(enabled: bool) {
    DEBUG_LOGGING.store(enabled, Ordering::Relaxed);
}

pub fn debug_logging() -> bool {
    DEBUG_LOGGING.load(Ordering::Relaxed)
}

/// Debug trace; dropped unless `debug_logging` is enabled in the viewer config.
pub fn clog(msg: &str) {
    if !debug_logging() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Always emitted; used for recoverable setup failures.
pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn format_percent(progress: f64) -> String {
    format!("{:.2}%", progress.clamp(0.0, 100.0))
}
