// crates/certilife-app/src/state.rs
// Presentation state bridged into Leptos signals (via Context)

use certilife_core::{
    LandingConfig, PresentationController, PresentationState, RotationHandles, ScrollTracker,
    Subscription,
};
use leptos::ev;
use leptos::prelude::*;

use crate::browser::{self, BrowserIntervals, BrowserPage};

/// Everything that must be released when the page unmounts.
struct PageResources {
    rotations: RotationHandles,
    _subscription: Subscription,
    scroll_listener: WindowListenerHandle,
}

/// Read side of the controller plus named intents for the views.
#[derive(Clone, Copy)]
pub struct Presentation {
    pub state: ReadSignal<PresentationState>,
    /// Panel keys. Views that rebuild per tab or case read these, never
    /// the whole snapshot.
    pub active_tab: Memo<usize>,
    pub active_case: Memo<usize>,
    /// Spring-smoothed scroll progress in `[0, 1]`.
    pub progress: ReadSignal<f64>,
    pub config: LandingConfig,
    controller: StoredValue<PresentationController, LocalStorage>,
}

impl Presentation {
    pub fn toggle_menu(&self) {
        self.controller.with_value(|c| c.toggle_menu());
    }

    pub fn navigate_to(&self, section_id: &str) {
        self.controller.with_value(|c| {
            c.navigate_to(&BrowserPage, section_id);
        });
    }

    /// Feature tile or showcase tab click.
    pub fn select_feature(&self, index: usize) {
        self.controller.with_value(|c| {
            c.select_feature(&BrowserPage, index);
        });
    }

    pub fn next_case(&self) {
        self.controller.with_value(|c| c.next_case());
    }

    pub fn prev_case(&self) {
        self.controller.with_value(|c| c.prev_case());
    }
}

pub fn provide_presentation_context() -> Presentation {
    let config = LandingConfig::load();
    let controller = PresentationController::new(&config);
    let (state, subscription) = bridge(&controller);
    let (active_tab, active_case) = panel_keys(state);
    let (progress, set_progress) = signal(0.0);

    let rotations = controller.start_rotations(&BrowserIntervals, &config.rotation);

    let controller = StoredValue::new_local(controller);
    let tracker = StoredValue::new_local(ScrollTracker::new(
        config.scroll.scrolled_threshold_px,
        config.scroll.spring,
    ));
    let animating = StoredValue::new(false);

    let on_scroll = move || {
        let sample = browser::scroll_sample();
        controller.with_value(|c| c.observe_scroll_offset(sample.scroll_y));
        tracker.update_value(|t| {
            t.observe(sample);
        });
        if !animating.get_value() {
            animating.set_value(true);
            run_progress(tracker, set_progress, animating, browser::now_ms());
        }
    };
    // A reload can restore a mid-page scroll position
    on_scroll();
    let scroll_listener = window_event_listener(ev::scroll, move |_| on_scroll());

    let resources = StoredValue::new_local(Some(PageResources {
        rotations,
        _subscription: subscription,
        scroll_listener,
    }));
    on_cleanup(move || {
        resources.try_update_value(|r| {
            if let Some(mut r) = r.take() {
                r.rotations.cancel();
                r.scroll_listener.remove();
            }
        });
        log::debug!("Presentation timers and listeners released");
    });

    let presentation = Presentation {
        state,
        active_tab,
        active_case,
        progress,
        config,
        controller,
    };
    provide_context(presentation);
    presentation
}

pub fn use_presentation() -> Presentation {
    expect_context::<Presentation>()
}

/// Mirror every controller change into a signal.
fn bridge(controller: &PresentationController) -> (ReadSignal<PresentationState>, Subscription) {
    let (state, set_state) = signal(controller.snapshot());
    let subscription = controller.subscribe(move |s| {
        set_state.try_set(*s);
    });
    (state, subscription)
}

/// `(active_tab, active_case)`, each changing only when its own index does.
fn panel_keys(state: ReadSignal<PresentationState>) -> (Memo<usize>, Memo<usize>) {
    (
        Memo::new(move |_| state.get().active_tab),
        Memo::new(move |_| state.get().active_case),
    )
}

/// Step the progress spring once per display frame until it settles.
fn run_progress(
    tracker: StoredValue<ScrollTracker, LocalStorage>,
    set_progress: WriteSignal<f64>,
    animating: StoredValue<bool>,
    last_ms: f64,
) {
    request_animation_frame(move || {
        let now = browser::now_ms();
        let dt = ((now - last_ms) / 1000.0).max(0.0);
        match tracker.try_update_value(|t| t.step(dt)).flatten() {
            Some(ratio) => {
                // Signal gone means the page unmounted
                if set_progress.try_set(ratio).is_none() {
                    run_progress(tracker, set_progress, animating, now);
                }
            }
            None => {
                animating.try_update_value(|a| *a = false);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Count how often a derivation keyed on `key` re-runs.
    fn count_runs(key: Memo<usize>) -> (Arc<AtomicUsize>, ImmediateEffect) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let effect = ImmediateEffect::new_isomorphic(move || {
            key.get();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (runs, effect)
    }

    #[test]
    fn test_case_panel_ignores_unrelated_changes() {
        let owner = Owner::new();
        owner.set();

        let controller = PresentationController::default();
        let (state, _subscription) = bridge(&controller);
        let (_, active_case) = panel_keys(state);
        let (runs, _effect) = count_runs(active_case);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        controller.advance_tab();
        controller.observe_scroll_offset(80.0);
        controller.toggle_menu();
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        controller.next_case();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(active_case.get_untracked(), 1);
    }

    #[test]
    fn test_tab_panel_ignores_case_ticks() {
        let owner = Owner::new();
        owner.set();

        let controller = PresentationController::default();
        let (state, _subscription) = bridge(&controller);
        let (active_tab, _) = panel_keys(state);
        let (runs, _effect) = count_runs(active_tab);

        controller.next_case();
        controller.prev_case();
        controller.observe_scroll_offset(80.0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        controller.select_tab(2);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        // Re-selecting the shown tab changes nothing
        controller.select_tab(2);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
