// Binding to the three.js scene in js/brain_scene.js. Load progress arrives as 0..=100.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlCanvasElement;

use crate::error::ViewerError;
use crate::model::SceneConfig;
use crate::util::clog;

#[wasm_bindgen(module = "/js/brain_scene.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = mountScene)]
    fn mount_scene(
        canvas: &HtmlCanvasElement,
        config_json: &str,
        on_progress: &Closure<dyn FnMut(f64)>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = updateScene)]
    fn update_scene(handle: &JsValue, config_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = unmountScene)]
    fn unmount_scene(handle: &JsValue);
}

/// A mounted renderer. Dropping it stops the render loop and frees GPU
/// resources on the JS side.
pub struct SceneHandle {
    handle: JsValue,
    _on_progress: Closure<dyn FnMut(f64)>,
}

impl SceneHandle {
    pub fn mount(
        canvas: &HtmlCanvasElement,
        config: &SceneConfig,
        on_progress: impl FnMut(f64) + 'static,
    ) -> Result<Self, ViewerError> {
        let json = config.to_json()?;
        let on_progress = Closure::wrap(Box::new(on_progress) as Box<dyn FnMut(f64)>);
        let handle = mount_scene(canvas, &json, &on_progress)?;
        clog(&format!("scene mounted {:?}: {:?}", config.mode, config.pose()));
        Ok(Self {
            handle,
            _on_progress: on_progress,
        })
    }

    pub fn update(&self, config: &SceneConfig) -> Result<(), ViewerError> {
        let json = config.to_json()?;
        update_scene(&self.handle, &json)?;
        clog(&format!("scene re-posed {:?}: {:?}", config.mode, config.pose()));
        Ok(())
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        unmount_scene(&self.handle);
        clog("scene unmounted");
    }
}
