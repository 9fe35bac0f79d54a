// crates/certilife-core/src/controller.rs
// Presentation state owner: menu, active tab, active case, scrolled flag
//
// All mutation goes through the intent methods below. Views subscribe and
// re-read the snapshot they are handed; nothing writes fields directly.

use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::{Rc, Weak};

use crate::config::{LandingConfig, RotationConfig};
use crate::content::{CASE_STUDIES, FEATURES, SECTION_SHOWCASE};
use crate::navigator::{Navigator, ScrollSurface};
use crate::rotation::{start_rotation, Advance, IntervalHost, ModularIndex, RotationHandle};
use crate::scroll::is_scrolled;

const fn non_empty(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("rotating content must not be empty"),
    }
}

pub const FEATURE_COUNT: NonZeroUsize = non_empty(FEATURES.len());
pub const CASE_COUNT: NonZeroUsize = non_empty(CASE_STUDIES.len());

/// Snapshot handed to subscribers and views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub menu_open: bool,
    pub active_tab: usize,
    pub active_case: usize,
    pub scrolled: bool,
}

#[derive(Debug, Clone, Copy)]
struct State {
    menu_open: bool,
    tab: ModularIndex,
    case: ModularIndex,
    scrolled: bool,
}

impl State {
    fn new(tabs: NonZeroUsize, cases: NonZeroUsize) -> Self {
        Self {
            menu_open: false,
            tab: ModularIndex::new(tabs),
            case: ModularIndex::new(cases),
            scrolled: false,
        }
    }

    fn snapshot(&self) -> PresentationState {
        PresentationState {
            menu_open: self.menu_open,
            active_tab: self.tab.get(),
            active_case: self.case.get(),
            scrolled: self.scrolled,
        }
    }
}

type Subscriber = Rc<dyn Fn(&PresentationState)>;

struct Inner {
    state: RefCell<State>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    next_subscriber: Cell<u64>,
    navigator: Navigator,
    scrolled_threshold: f64,
}

/// Cheap-to-clone handle to the page's presentation state. Single-threaded:
/// every clone talks to the same state, and writes are ordered by the UI
/// scheduler, so the most recent intent wins.
#[derive(Clone)]
pub struct PresentationController {
    inner: Rc<Inner>,
}

impl Default for PresentationController {
    fn default() -> Self {
        Self::new(&LandingConfig::default())
    }
}

impl std::fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationController")
            .field("state", &self.snapshot())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl PresentationController {
    pub fn new(config: &LandingConfig) -> Self {
        Self::with_counts(config, FEATURE_COUNT, CASE_COUNT)
    }

    /// Controller over arbitrary tab/case counts.
    pub fn with_counts(config: &LandingConfig, tabs: NonZeroUsize, cases: NonZeroUsize) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(State::new(tabs, cases)),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
                navigator: Navigator::new(config.scroll.header_offset_px),
                scrolled_threshold: config.scroll.scrolled_threshold_px,
            }),
        }
    }

    pub fn snapshot(&self) -> PresentationState {
        self.inner.state.borrow().snapshot()
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Call `callback` after every change. The subscription lasts until the
    /// returned guard is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PresentationState) + 'static,
    {
        let id = self.inner.next_subscriber.get();
        self.inner.next_subscriber.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            id,
            owner: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self, state: &PresentationState) {
        // Clone the list so callbacks may subscribe, unsubscribe or fire
        // further intents.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(state);
        }
    }

    fn update(&self, intent: &str, mutate: impl FnOnce(&mut State)) {
        let (before, after) = {
            let mut state = self.inner.state.borrow_mut();
            let before = state.snapshot();
            mutate(&mut state);
            (before, state.snapshot())
        };
        if before != after {
            log::debug!("{}: {:?}", intent, after);
            self.notify(&after);
        }
    }

    // ========================================================================
    // Menu
    // ========================================================================

    pub fn toggle_menu(&self) {
        self.update("toggle_menu", |s| s.menu_open = !s.menu_open);
    }

    pub fn close_menu(&self) {
        self.update("close_menu", |s| s.menu_open = false);
    }

    // ========================================================================
    // Feature tabs
    // ========================================================================

    /// Show tab `index`. Out-of-range indices are ignored.
    pub fn select_tab(&self, index: usize) -> bool {
        let mut accepted = false;
        self.update("select_tab", |s| accepted = s.tab.set(index));
        if !accepted {
            log::warn!("Ignoring out-of-range tab index {}", index);
        }
        accepted
    }

    pub fn advance_tab(&self) {
        self.update("advance_tab", |s| s.tab.next());
    }

    fn apply_tab_tick(&self, advance: Advance) {
        self.update("tab_tick", |s| {
            s.tab.set(advance.apply(s.tab.get()));
        });
    }

    // ========================================================================
    // Case studies
    // ========================================================================

    pub fn next_case(&self) {
        self.update("next_case", |s| s.case.next());
    }

    pub fn prev_case(&self) {
        self.update("prev_case", |s| s.case.prev());
    }

    fn apply_case_tick(&self, advance: Advance) {
        self.update("case_tick", |s| {
            s.case.set(advance.apply(s.case.get()));
        });
    }

    // ========================================================================
    // Scrolling & navigation
    // ========================================================================

    pub fn observe_scroll_offset(&self, scroll_y: f64) {
        let scrolled = is_scrolled(scroll_y, self.inner.scrolled_threshold);
        self.update("observe_scroll", |s| s.scrolled = scrolled);
    }

    /// Smooth-scroll to `section_id`, then close the mobile menu whether or
    /// not the section exists.
    pub fn navigate_to<S: ScrollSurface + ?Sized>(&self, surface: &S, section_id: &str) -> bool {
        let found = self.inner.navigator.scroll_to_section(surface, section_id);
        self.close_menu();
        found
    }

    /// Feature tile click: show its tab and bring the showcase into view.
    pub fn select_feature<S: ScrollSurface + ?Sized>(&self, surface: &S, index: usize) -> bool {
        if !self.select_tab(index) {
            return false;
        }
        self.navigate_to(surface, SECTION_SHOWCASE)
    }

    // ========================================================================
    // Automatic rotation
    // ========================================================================

    /// Start both carousels. Ticks advance unconditionally: a manual
    /// selection neither pauses nor restarts its timer.
    pub fn start_rotations<H: IntervalHost + ?Sized>(
        &self,
        host: &H,
        config: &RotationConfig,
    ) -> RotationHandles {
        let (tab_count, case_count) = {
            let state = self.inner.state.borrow();
            (state.tab.modulus(), state.case.modulus())
        };

        let ctrl = self.clone();
        let tabs = start_rotation(host, config.feature_period_ms, tab_count, move |advance| {
            ctrl.apply_tab_tick(advance)
        });
        let ctrl = self.clone();
        let cases = start_rotation(host, config.case_period_ms, case_count, move |advance| {
            ctrl.apply_case_tick(advance)
        });

        RotationHandles { tabs, cases }
    }
}

/// Guard for a [`PresentationController::subscribe`] registration.
pub struct Subscription {
    id: u64,
    owner: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.owner.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Both carousel timers. Cancelled together on teardown or drop.
#[derive(Debug)]
pub struct RotationHandles {
    pub tabs: RotationHandle,
    pub cases: RotationHandle,
}

impl RotationHandles {
    pub fn cancel(&mut self) {
        self.tabs.cancel();
        self.cases.cancel();
    }
}
