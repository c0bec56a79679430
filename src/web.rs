// Browser-backed capabilities for the viewport controller.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::error::ViewerError;
use crate::state::{ScrollSink, Subscription, ViewportSignalSource};
use crate::util::{clog, cwarn};

fn window() -> Result<Window, ViewerError> {
    web_sys::window().ok_or(ViewerError::NoWindow)
}

/// `window.matchMedia(query)` with `change` notifications.
pub struct MediaQuerySource {
    query: String,
    mql: MediaQueryList,
}

impl MediaQuerySource {
    pub fn new(query: &str) -> Result<Self, ViewerError> {
        let mql = window()?
            .match_media(query)?
            .ok_or_else(|| ViewerError::MediaQueryUnavailable(query.to_string()))?;
        Ok(Self {
            query: query.to_string(),
            mql,
        })
    }
}

impl ViewportSignalSource for MediaQuerySource {
    fn currently_narrow(&self) -> bool {
        self.mql.matches()
    }

    fn subscribe(&self, mut on_change: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        let cb = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
            on_change(e.matches());
        }) as Box<dyn FnMut(_)>);
        if let Err(e) = self
            .mql
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        {
            cwarn(&format!(
                "could not watch {}: {}",
                self.query,
                ViewerError::from(e)
            ));
            return None;
        }
        clog(&format!("watching {}", self.query));
        let mql = self.mql.clone();
        // The closure must outlive the registration; it is dropped right after removal.
        Some(Subscription::new(move || {
            let _ = mql.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
            drop(cb);
        }))
    }
}

/// `window.scrollBy(0, dy)`.
pub struct WindowScroll {
    win: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self, ViewerError> {
        Ok(Self { win: window()? })
    }
}

impl ScrollSink for WindowScroll {
    fn scroll_by(&self, delta_y: f64) {
        self.win.scroll_by_with_x_and_y(0.0, delta_y);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::MediaQueryListEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_change(source: &MediaQuerySource, matches: bool) {
        let init = MediaQueryListEventInit::new();
        init.set_matches(matches);
        init.set_media(&source.query);
        let event = MediaQueryListEvent::new_with_event_init_dict("change", &init).unwrap();
        source.mql.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_sees_changes_until_released() {
        let source = MediaQuerySource::new("(max-width: 1000px)").unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            source
                .subscribe(Box::new(move |m: bool| seen.borrow_mut().push(m)))
                .expect("listener registered")
        };
        fire_change(&source, true);
        fire_change(&source, false);
        assert_eq!(*seen.borrow(), vec![true, false]);

        sub.release();
        fire_change(&source, true);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[wasm_bindgen_test]
    fn dropping_the_subscription_deregisters() {
        let source = MediaQuerySource::new("(max-width: 1000px)").unwrap();
        let count = Rc::new(RefCell::new(0));
        {
            let count = count.clone();
            let _sub = source.subscribe(Box::new(move |_: bool| *count.borrow_mut() += 1));
            fire_change(&source, true);
        }
        fire_change(&source, false);
        assert_eq!(*count.borrow(), 1);
    }

    #[wasm_bindgen_test]
    fn window_scroll_is_available_in_the_browser() {
        assert!(WindowScroll::new().is_ok());
    }
}
