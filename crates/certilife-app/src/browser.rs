// crates/certilife-app/src/browser.rs
// web-sys / gloo glue behind the core's scheduling and scrolling traits

use certilife_core::{CancelFn, IntervalHost, ScrollSample, ScrollSurface};
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

// ============================================================================
// Timers
// ============================================================================

/// `setInterval` through gloo.
pub struct BrowserIntervals;

impl IntervalHost for BrowserIntervals {
    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> CancelFn {
        let interval = Interval::new(period_ms, move || tick());
        // Dropping a gloo Interval clears it
        Box::new(move || drop(interval))
    }
}

/// High-resolution timestamp in milliseconds.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

// ============================================================================
// Scrolling
// ============================================================================

/// The live document.
pub struct BrowserPage;

impl ScrollSurface for BrowserPage {
    fn element_top(&self, id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, y: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Measure the page for the scroll tracker.
pub fn scroll_sample() -> ScrollSample {
    let Some(window) = web_sys::window() else {
        return ScrollSample::default();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let root = window.document().and_then(|d| d.document_element());
    let (viewport_height, document_height) = match root {
        Some(root) => (root.client_height() as f64, root.scroll_height() as f64),
        None => (0.0, 0.0),
    };
    ScrollSample {
        scroll_y,
        viewport_height,
        document_height,
    }
}

// ============================================================================
// Visibility
// ============================================================================

/// One-shot "element scrolled into view" trigger. Disconnects itself after
/// the first intersection, and on drop.
pub struct ViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewObserver {
    pub fn once(element: &Element, mut on_visible: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if visible {
                    observer.disconnect();
                    on_visible();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.0));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
