use yew::prelude::*;

use crate::util::format_percent;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasLoaderProps {
    /// 0..=100
    pub progress: f64,
}

#[function_component(CanvasLoader)]
pub fn canvas_loader(props: &CanvasLoaderProps) -> Html {
    html! {
        <div style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; pointer-events:none;">
            <span style="width:32px; height:32px; border:3px solid #30363d; border-top-color:#f1f1f1; border-radius:50%; animation:bv-spin 0.9s linear infinite;"></span>
            <p style="margin:12px 0 0 0; font-size:14px; font-weight:800; color:#f1f1f1;">{ format_percent(props.progress) }</p>
            <style>{"@keyframes bv-spin { to { transform: rotate(360deg); } }"}</style>
        </div>
    }
}
