// crates/certilife-core/src/animator.rs
// Counting number animation (ease-out quartic)

/// Inputs for a counter animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterParams {
    pub from: i64,
    pub to: i64,
    pub duration_secs: f64,
}

impl CounterParams {
    pub fn new(from: i64, to: i64, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            duration_secs,
        }
    }
}

/// One computed frame: the value to display and whether it is the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// `1 - (1 - t)^4`: fast start, slow finish.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Value shown `elapsed_ms` after the animation started.
///
/// The final frame reports `to` exactly, whatever the float/floor drift.
pub fn compute_frame(elapsed_ms: f64, params: &CounterParams) -> CounterFrame {
    let total_ms = params.duration_secs * 1000.0;
    let progress = if total_ms.is_finite() && total_ms > 0.0 {
        (elapsed_ms / total_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };

    if progress >= 1.0 {
        return CounterFrame {
            value: params.to,
            done: true,
        };
    }

    let span = params.to as f64 - params.from as f64;
    let value = (params.from as f64 + span * ease_out_quart(progress)).floor() as i64;
    CounterFrame { value, done: false }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running { start_ms: f64 },
    Finished,
}

/// Counter lifecycle: idle until its element first scrolls into view, then
/// running until the final frame. Activation happens once per instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    params: CounterParams,
    phase: Phase,
}

impl CounterAnimation {
    pub fn new(params: CounterParams) -> Self {
        Self {
            params,
            phase: Phase::Idle,
        }
    }

    /// Value to render before any frame has run.
    pub fn initial_value(&self) -> i64 {
        self.params.from
    }

    /// Mark the element as visible. Returns true only on the first call.
    pub fn enter_view(&mut self, now_ms: f64) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running { start_ms: now_ms };
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Advance to `now_ms`. `None` while idle or once finished; callers stop
    /// scheduling frames after a frame with `done` set.
    pub fn frame(&mut self, now_ms: f64) -> Option<CounterFrame> {
        let Phase::Running { start_ms } = self.phase else {
            return None;
        };
        let frame = compute_frame(now_ms - start_ms, &self.params);
        if frame.done {
            self.phase = Phase::Finished;
        }
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(params: CounterParams, step_ms: f64) -> Vec<i64> {
        let mut anim = CounterAnimation::new(params);
        anim.enter_view(1_000.0);
        let mut values = Vec::new();
        let mut now = 1_000.0;
        while let Some(frame) = anim.frame(now) {
            values.push(frame.value);
            now += step_ms;
        }
        values
    }

    #[test]
    fn test_sequence_is_monotone_and_lands_on_target() {
        let cases = [
            (0, 93, 2.0),
            (0, 1231, 1.0),
            (10, 11, 0.5),
            (5, 5, 2.0),
            (0, 483, 2.0),
        ];
        for (from, to, duration) in cases {
            let values = run(CounterParams::new(from, to, duration), 16.7);
            assert!(values[0] >= from);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
            assert!(values.iter().all(|&v| v <= to));
            assert_eq!(*values.last().unwrap(), to);
        }
    }

    #[test]
    fn test_first_frame_starts_at_from() {
        let frame = compute_frame(0.0, &CounterParams::new(0, 93, 2.0));
        assert_eq!((frame.value, frame.done), (0, false));
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        let frame = compute_frame(1000.0, &CounterParams::new(0, 100, 2.0));
        // 1 - 0.5^4 = 0.9375
        assert_eq!(frame.value, 93);
    }

    #[test]
    fn test_exact_target_at_and_after_duration() {
        let params = CounterParams::new(0, 198, 2.0);
        for elapsed in [2000.0, 9000.0] {
            let frame = compute_frame(elapsed, &params);
            assert_eq!((frame.value, frame.done), (198, true));
        }
    }

    #[test]
    fn test_extreme_span_does_not_overflow() {
        let params = CounterParams::new(i64::MIN, i64::MAX, 2.0);
        let mid = compute_frame(1000.0, &params);
        assert!(mid.value > 0);
        assert!(!mid.done);
        assert_eq!(compute_frame(2000.0, &params).value, i64::MAX);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let frame = compute_frame(0.0, &CounterParams::new(0, 30, 0.0));
        assert_eq!((frame.value, frame.done), (30, true));
    }

    #[test]
    fn test_idle_until_in_view() {
        let mut anim = CounterAnimation::new(CounterParams::new(0, 93, 2.0));
        assert_eq!(anim.frame(500.0), None);
        assert_eq!(anim.initial_value(), 0);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_activation_is_one_shot() {
        let mut anim = CounterAnimation::new(CounterParams::new(0, 93, 2.0));
        assert!(anim.enter_view(0.0));
        assert!(!anim.enter_view(1500.0));
        // still timed from the first activation
        let last = anim.frame(2000.0).map(|f| (f.value, f.done));
        assert_eq!(last, Some((93, true)));
        assert!(anim.is_finished());
        assert!(!anim.enter_view(5000.0));
        assert_eq!(anim.frame(6000.0), None);
    }
}
