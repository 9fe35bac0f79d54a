// crates/certilife-core/src/rotation.rs
// Fixed-period index rotation and the wrapping counter it drives

use std::num::NonZeroUsize;

/// Cancels a scheduled interval when called.
pub type CancelFn = Box<dyn FnOnce()>;

/// Something that can run a callback on a fixed period.
///
/// The browser implementation wraps `gloo_timers::callback::Interval`; tests
/// drive a manual clock. Dropping the returned canceller without calling it
/// must also stop the interval.
pub trait IntervalHost {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> CancelFn;
}

// ============================================================================
// Modular counter
// ============================================================================

/// Integer state that wraps around `[0, modulus)` instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModularIndex {
    value: usize,
    modulus: NonZeroUsize,
}

impl ModularIndex {
    pub fn new(modulus: NonZeroUsize) -> Self {
        Self { value: 0, modulus }
    }

    pub fn get(&self) -> usize {
        self.value
    }

    pub fn modulus(&self) -> NonZeroUsize {
        self.modulus
    }

    /// Set the index directly. Returns false (and leaves the value alone)
    /// when `index` is out of range.
    pub fn set(&mut self, index: usize) -> bool {
        if index < self.modulus.get() {
            self.value = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        self.value = Advance::new(self.modulus).apply(self.value);
    }

    pub fn prev(&mut self) {
        let n = self.modulus.get();
        self.value = (self.value + n - 1) % n;
    }
}

/// The wrapping rule handed to every rotation tick: `index -> (index + 1) mod n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    modulus: NonZeroUsize,
}

impl Advance {
    pub fn new(modulus: NonZeroUsize) -> Self {
        Self { modulus }
    }

    pub fn apply(self, index: usize) -> usize {
        (index + 1) % self.modulus.get()
    }
}

// ============================================================================
// Rotation timer
// ============================================================================

/// Handle returned by [`start_rotation`]. Cancelling is idempotent and
/// dropping the handle cancels as well.
pub struct RotationHandle {
    cancel: Option<CancelFn>,
}

impl RotationHandle {
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for RotationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Invoke `on_tick` every `period_ms` with the wrapping advance rule for
/// `modulus`. No jitter, no backoff.
pub fn start_rotation<H, F>(
    host: &H,
    period_ms: u32,
    modulus: NonZeroUsize,
    mut on_tick: F,
) -> RotationHandle
where
    H: IntervalHost + ?Sized,
    F: FnMut(Advance) + 'static,
{
    let advance = Advance::new(modulus);
    log::debug!("Starting rotation: every {}ms over {} items", period_ms, modulus);
    let cancel = host.every(period_ms, Box::new(move || on_tick(advance)));
    RotationHandle {
        cancel: Some(cancel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Host that stores the tick and fires it on demand.
    #[derive(Default)]
    struct StepHost {
        tick: RefCell<Option<Box<dyn FnMut()>>>,
        cancelled: Rc<Cell<u32>>,
    }

    impl StepHost {
        fn fire(&self, times: usize) {
            for _ in 0..times {
                if let Some(tick) = self.tick.borrow_mut().as_mut() {
                    tick();
                }
            }
        }
    }

    impl IntervalHost for StepHost {
        fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> CancelFn {
            *self.tick.borrow_mut() = Some(tick);
            let cancelled = self.cancelled.clone();
            Box::new(move || cancelled.set(cancelled.get() + 1))
        }
    }

    #[test]
    fn test_k_ticks_land_on_k_mod_n() {
        for modulus in 1..=7 {
            let host = StepHost::default();
            let index = Rc::new(Cell::new(0usize));
            let seen = index.clone();
            let _handle = start_rotation(&host, 6000, nz(modulus), move |advance| {
                seen.set(advance.apply(seen.get()));
            });
            for k in 0..20 {
                assert_eq!(index.get(), k % modulus);
                host.fire(1);
            }
        }
    }

    #[test]
    fn test_modulus_one_never_moves() {
        let mut index = ModularIndex::new(nz(1));
        index.next();
        index.prev();
        assert_eq!(index.get(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let host = StepHost::default();
        let mut handle = start_rotation(&host, 8000, nz(2), |_| {});
        assert!(handle.is_active());
        handle.cancel();
        handle.cancel();
        drop(handle);
        assert_eq!(host.cancelled.get(), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let host = StepHost::default();
        {
            let _handle = start_rotation(&host, 8000, nz(2), |_| {});
        }
        assert_eq!(host.cancelled.get(), 1);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut index = ModularIndex::new(nz(2));
        index.prev();
        assert_eq!(index.get(), 1);
        index.next();
        assert_eq!(index.get(), 0);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut index = ModularIndex::new(nz(6));
        assert!(index.set(5));
        assert!(!index.set(6));
        assert_eq!(index.get(), 5);
    }
}
