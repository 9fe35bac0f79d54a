// crates/certilife-core/tests/presentation_flow.rs
// Timer-driven scenarios against a manual clock

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use certilife_core::config::LandingConfig;
use certilife_core::rotation::{CancelFn, IntervalHost};
use certilife_core::{PresentationController, PresentationState, ScrollSurface};

/// Interval host backed by a virtual millisecond clock.
#[derive(Default)]
struct ManualClock {
    now: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

struct Timer {
    period: u64,
    next_due: u64,
    tick: Box<dyn FnMut()>,
    cancelled: Rc<Cell<bool>>,
}

impl IntervalHost for ManualClock {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> CancelFn {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(Timer {
            period: period_ms as u64,
            next_due: self.now.get() + period_ms as u64,
            tick,
            cancelled: cancelled.clone(),
        });
        Box::new(move || cancelled.set(true))
    }
}

impl ManualClock {
    /// Move the clock forward, firing every due tick in time order.
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| !t.cancelled.get() && t.next_due <= target)
                    .min_by_key(|(_, t)| t.next_due)
                    .map(|(i, t)| (i, t.next_due))
            };
            let Some((index, due)) = next else { break };
            self.now.set(due);
            let mut timers = self.timers.borrow_mut();
            let timer = &mut timers[index];
            timer.next_due += timer.period;
            (timer.tick)();
        }
        self.now.set(target);
    }

    fn live_timers(&self) -> usize {
        self.timers.borrow().iter().filter(|t| !t.cancelled.get()).count()
    }
}

struct NoSections;

impl ScrollSurface for NoSections {
    fn element_top(&self, _id: &str) -> Option<f64> {
        None
    }

    fn scroll_y(&self) -> f64 {
        0.0
    }

    fn smooth_scroll_to(&self, _y: f64) {}
}

fn setup() -> (ManualClock, PresentationController, LandingConfig) {
    let config = LandingConfig::load();
    let clock = ManualClock::default();
    let ctrl = PresentationController::new(&config);
    (clock, ctrl, config)
}

#[test]
fn six_tab_ticks_return_to_first_tab() {
    let (clock, ctrl, config) = setup();
    let _handles = ctrl.start_rotations(&clock, &config.rotation);

    for expected in 1..=5 {
        clock.advance(6000);
        assert_eq!(ctrl.snapshot().active_tab, expected);
    }
    clock.advance(6000);
    assert_eq!(ctrl.snapshot().active_tab, 0);
}

#[test]
fn manual_selection_does_not_pause_rotation() {
    let (clock, ctrl, config) = setup();
    let _handles = ctrl.start_rotations(&clock, &config.rotation);

    clock.advance(2000);
    ctrl.select_tab(3);
    clock.advance(4000);
    assert_eq!(ctrl.snapshot().active_tab, 4);
}

#[test]
fn feature_click_is_overwritten_by_next_tick() {
    let (clock, ctrl, config) = setup();
    let _handles = ctrl.start_rotations(&clock, &config.rotation);

    clock.advance(5999);
    assert!(!ctrl.select_feature(&NoSections, 1));
    assert_eq!(ctrl.snapshot().active_tab, 1);
    clock.advance(1);
    assert_eq!(ctrl.snapshot().active_tab, 2);
}

#[test]
fn clocks_run_independently() {
    let (clock, ctrl, config) = setup();
    let _handles = ctrl.start_rotations(&clock, &config.rotation);

    clock.advance(24_000);
    let state = ctrl.snapshot();
    // 24s / 6s = 4 tab ticks, 24s / 8s = 3 case ticks
    assert_eq!(state.active_tab, 4);
    assert_eq!(state.active_case, 1);
}

#[test]
fn case_buttons_and_timer_share_the_index() {
    let (clock, ctrl, config) = setup();
    let _handles = ctrl.start_rotations(&clock, &config.rotation);

    ctrl.prev_case();
    assert_eq!(ctrl.snapshot().active_case, 1);
    clock.advance(8000);
    assert_eq!(ctrl.snapshot().active_case, 0);
}

#[test]
fn teardown_stops_all_ticks() {
    let (clock, ctrl, config) = setup();
    let mut handles = ctrl.start_rotations(&clock, &config.rotation);
    assert_eq!(clock.live_timers(), 2);

    clock.advance(6000);
    handles.cancel();
    handles.cancel();
    assert_eq!(clock.live_timers(), 0);

    clock.advance(60_000);
    assert_eq!(
        ctrl.snapshot(),
        PresentationState {
            active_tab: 1,
            ..PresentationState::default()
        }
    );
}

#[test]
fn subscribers_follow_timer_ticks() {
    let (clock, ctrl, config) = setup();
    let tabs = Rc::new(RefCell::new(Vec::new()));
    let sink = tabs.clone();
    let _sub = ctrl.subscribe(move |state| sink.borrow_mut().push(state.active_tab));
    let _handles = ctrl.start_rotations(&clock, &config.rotation);

    clock.advance(18_000);
    // tab ticks at 6s, 12s, 18s; case tick at 8s and 16s also notify
    assert_eq!(*tabs.borrow(), vec![1, 1, 2, 2, 3]);
}
