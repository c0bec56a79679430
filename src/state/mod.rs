pub mod gesture;
pub mod viewport;

pub use viewport::{
    ControllerSettings, ModeObserver, ScrollSink, Subscription, ViewportController,
    ViewportSignalSource,
};
