pub mod app;
pub mod brain_canvas;
pub mod canvas_loader;
