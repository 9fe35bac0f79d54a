// crates/certilife-core/src/spring.rs
// Damped spring used to smooth the scroll progress bar

use serde::Deserialize;

/// Longest frame gap integrated in one call; anything longer (tab switch,
/// debugger pause) is treated as this long.
const MAX_FRAME_SECS: f64 = 0.05;
/// Integration sub-step, small enough to stay stable at the stiffness we use.
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    /// `damping / (2 * sqrt(stiffness * mass))`; 1.0 is critical.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Second-order filter that follows a moving target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Move the target. Wakes the spring unless it is already sitting there.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
        if self.at_rest && (target - self.value).abs() >= self.config.rest_delta {
            self.at_rest = false;
        }
    }

    /// Integrate `dt_secs` of motion. Returns true while still moving; once
    /// within the rest thresholds the value snaps to the target and further
    /// calls are no-ops until the target changes.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.at_rest {
            return false;
        }

        let mut remaining = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_SUBSTEP_SECS);
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) / self.config.mass * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }

        if (self.target - self.value).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        !self.at_rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_default_constants() {
        let config = SpringConfig::default();
        assert_eq!(config.stiffness, 100.0);
        assert_eq!(config.damping, 30.0);
        assert_eq!(config.rest_delta, 0.001);
        // 30 / (2 * 10) - no oscillation
        assert!(config.damping_ratio() >= 1.0);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let mut frames = 0;
        let mut last = 0.0;
        while spring.step(FRAME) {
            assert!(spring.value() <= 1.0 + 1e-6, "overshoot: {}", spring.value());
            assert!(spring.value() >= last - 1e-9);
            last = spring.value();
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_lags_behind_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(FRAME);
        assert!(spring.value() > 0.0);
        assert!(spring.value() < 0.5);
    }

    #[test]
    fn test_resting_spring_does_not_step() {
        let mut spring = Spring::new(SpringConfig::default(), 0.4);
        assert!(!spring.step(FRAME));
        spring.set_target(0.4005);
        assert!(spring.is_at_rest());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 0.4);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        for _ in 0..10 {
            spring.step(FRAME);
        }
        spring.set_target(0.2);
        while spring.step(FRAME) {}
        assert_eq!(spring.value(), 0.2);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(10.0);
        assert!(spring.value().is_finite());
        assert!(spring.value() < 1.0);
    }
}
