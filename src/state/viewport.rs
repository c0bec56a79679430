use std::cell::Cell;
use std::rc::Rc;

use super::gesture::GestureState;
use crate::model::ViewportMode;
use crate::util::{clog, cwarn};

/// Page-level vertical scrolling.
pub trait ScrollSink {
    fn scroll_by(&self, delta_y: f64);
}

/// The environment's "narrow display" predicate plus change notifications.
pub trait ViewportSignalSource {
    fn currently_narrow(&self) -> bool;
    /// `None` when the environment refused the listener.
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Option<Subscription>;
}

/// Deregisters a listener when released or dropped, whichever comes first.
#[must_use = "dropping a Subscription deregisters the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        if let Some(f) = self.release.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.release.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerSettings {
    /// A move scrolls the page only when `|delta|` exceeds this. Zero means
    /// every nonzero delta scrolls.
    pub swipe_threshold: f64,
}

pub type ModeObserver = Rc<dyn Fn(ViewportMode)>;

/// Current viewport mode, shared between the controller and its listener.
pub struct BreakpointTracker {
    mode: Cell<ViewportMode>,
    observer: Option<ModeObserver>,
}

impl BreakpointTracker {
    fn new(mode: ViewportMode, observer: Option<ModeObserver>) -> Self {
        Self {
            mode: Cell::new(mode),
            observer,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode.get()
    }

    /// Narrow iff `matches`. Runs the observer on every call.
    pub fn on_breakpoint_change(&self, matches: bool) {
        let next = ViewportMode::from_matches(matches);
        if self.mode.replace(next) != next {
            clog(&format!("viewport mode -> {:?}", next));
        }
        if let Some(cb) = &self.observer {
            cb(next);
        }
    }
}

/// Tracks the viewport breakpoint and forwards vertical canvas drags to page
/// scroll. Owns its breakpoint listener; tearing down (or dropping) the
/// controller deregisters it.
pub struct ViewportController<K: ScrollSink> {
    breakpoint: Rc<BreakpointTracker>,
    gesture: GestureState,
    scroll: K,
    settings: ControllerSettings,
    subscription: Option<Subscription>,
}

impl<K: ScrollSink> ViewportController<K> {
    /// Reads the current breakpoint state and subscribes exactly one listener.
    /// `observer` runs after every delivered breakpoint notification.
    pub fn initialize<S: ViewportSignalSource + ?Sized>(
        source: &S,
        scroll: K,
        settings: ControllerSettings,
        observer: Option<ModeObserver>,
    ) -> Self {
        let breakpoint = Rc::new(BreakpointTracker::new(
            ViewportMode::from_matches(source.currently_narrow()),
            observer,
        ));
        let subscription = {
            let breakpoint = breakpoint.clone();
            source.subscribe(Box::new(move |matches: bool| {
                breakpoint.on_breakpoint_change(matches);
            }))
        };
        if subscription.is_none() {
            cwarn("breakpoint listener refused; viewport mode is fixed");
        }
        clog(&format!("viewport controller up, mode={:?}", breakpoint.mode()));
        Self {
            breakpoint,
            gesture: GestureState::Idle,
            scroll,
            settings,
            subscription,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.breakpoint.mode()
    }

    #[cfg(test)]
    fn breakpoint(&self) -> &BreakpointTracker {
        &self.breakpoint
    }

    #[cfg(test)]
    fn gesture(&self) -> GestureState {
        self.gesture
    }

    #[cfg(test)]
    fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn on_gesture_start(&mut self, contact_y: f64) {
        self.gesture.start(contact_y);
    }

    pub fn on_gesture_move(&mut self, contact_y: f64) {
        if let Some(delta) = self.gesture.track_move(contact_y, self.settings.swipe_threshold) {
            self.scroll.scroll_by(delta);
        }
    }

    pub fn on_gesture_end(&mut self) {
        self.gesture.end();
    }

    /// Releases the breakpoint listener. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.release();
            clog("viewport controller torn down");
        }
    }
}

impl<K: ScrollSink> Drop for ViewportController<K> {
    fn drop(&mut self) {
        self.teardown();
    }
}
