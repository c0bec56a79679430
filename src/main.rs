mod components;
mod config;
mod error;
mod model;
mod scene_host;
mod state;
mod util;
mod web;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
