use super::brain_canvas::BrainCanvas;
use crate::config::ViewerConfig;
use crate::util::{clog, set_debug_logging};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        let cfg = ViewerConfig::load();
        set_debug_logging(cfg.debug_logging);
        clog(&format!("viewer config: {:?}", cfg));
        cfg
    });

    html! {
        <section style="position:relative; width:100%; height:100vh; margin:0 auto;">
            <BrainCanvas config={config.clone()} />
        </section>
    }
}
