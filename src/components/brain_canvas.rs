use std::rc::Rc;

use web_sys::{HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

use super::canvas_loader::CanvasLoader;
use crate::config::ViewerConfig;
use crate::model::{SceneConfig, ViewportMode};
use crate::scene_host::SceneHandle;
use crate::state::{ModeObserver, ViewportController};
use crate::util::cwarn;
use crate::web::{MediaQuerySource, WindowScroll};

#[derive(Properties, PartialEq, Clone)]
pub struct BrainCanvasProps {
    pub config: Rc<ViewerConfig>,
}

fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().item(0).map(|t| t.client_y() as f64)
}

#[function_component(BrainCanvas)]
pub fn brain_canvas(props: &BrainCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let mode = use_state(ViewportMode::default);
    let progress = use_state(|| 0.0_f64);
    let controller = use_mut_ref(|| None::<ViewportController<WindowScroll>>);
    let scene = use_mut_ref(|| None::<SceneHandle>);

    // Breakpoint tracking, scoped to the mounted lifetime
    {
        let controller = controller.clone();
        let mode = mode.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let setter = mode.setter();
            let observer: ModeObserver = Rc::new(move |m: ViewportMode| setter.set(m));
            let query = config.media_query();
            match MediaQuerySource::new(&query).and_then(|source| {
                WindowScroll::new().map(|scroll| {
                    ViewportController::initialize(
                        &source,
                        scroll,
                        config.controller_settings(),
                        Some(observer),
                    )
                })
            }) {
                Ok(c) => {
                    mode.set(c.mode());
                    *controller.borrow_mut() = Some(c);
                }
                Err(e) => cwarn(&format!("viewport tracking disabled: {}", e)),
            }
            move || {
                if let Some(mut c) = controller.borrow_mut().take() {
                    c.teardown();
                }
            }
        });
    }

    // Mount the renderer once; progress drives the loader overlay
    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let progress = progress.clone();
        let config = props.config.clone();
        let initial_mode = *mode;
        use_effect_with((), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let cfg = SceneConfig::for_mode(initial_mode, &config.model_url);
                let setter = progress.setter();
                match SceneHandle::mount(&canvas, &cfg, move |p| setter.set(p)) {
                    Ok(h) => *scene.borrow_mut() = Some(h),
                    Err(e) => cwarn(&format!("scene mount failed: {}", e)),
                }
            }
            move || {
                scene.borrow_mut().take();
            }
        });
    }

    // Re-pose on breakpoint crossings
    {
        let scene = scene.clone();
        let config = props.config.clone();
        use_effect_with(*mode, move |m| {
            if let Some(h) = scene.borrow().as_ref() {
                if let Err(e) = h.update(&SceneConfig::for_mode(*m, &config.model_url)) {
                    cwarn(&format!("scene update failed: {}", e));
                }
            }
            || ()
        });
    }

    let ontouchstart = {
        let controller = controller.clone();
        Callback::from(move |e: TouchEvent| {
            if let (Some(y), Some(c)) = (first_touch_y(&e), controller.borrow_mut().as_mut()) {
                c.on_gesture_start(y);
            }
        })
    };
    let ontouchmove = {
        let controller = controller.clone();
        Callback::from(move |e: TouchEvent| {
            if let (Some(y), Some(c)) = (first_touch_y(&e), controller.borrow_mut().as_mut()) {
                c.on_gesture_move(y);
            }
        })
    };
    let ontouchend = {
        let controller = controller.clone();
        Callback::from(move |_e: TouchEvent| {
            if let Some(c) = controller.borrow_mut().as_mut() {
                c.on_gesture_end();
            }
        })
    };

    let mode_attr = if mode.is_narrow() { "narrow" } else { "wide" };
    let loading = *progress < 100.0;

    html! {
        <div style="position:relative; width:100%; height:100%;">
            <canvas
                ref={canvas_ref}
                data-mode={mode_attr}
                style="display:block; width:100%; height:100%;"
                ontouchstart={ontouchstart}
                ontouchmove={ontouchmove}
                ontouchend={ontouchend.clone()}
                ontouchcancel={ontouchend}
            />
            if loading {
                <CanvasLoader progress={*progress} />
            }
        </div>
    }
}
