// crates/certilife-core/src/config.rs
// Timing and layout configuration, embedded from landing.toml

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::navigator::HEADER_OFFSET_PX;
use crate::scroll::SCROLLED_THRESHOLD_PX;
use crate::spring::SpringConfig;

const EMBEDDED: &str = include_str!("../landing.toml");

/// Top-level config structure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct LandingConfig {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Automatic carousel periods
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub feature_period_ms: u32,
    pub case_period_ms: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            feature_period_ms: 6000,
            case_period_ms: 8000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub scrolled_threshold_px: f64,
    pub header_offset_px: f64,
    pub spring: SpringConfig,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            header_offset_px: HEADER_OFFSET_PX,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_secs: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_secs: 2.0 }
    }
}

impl LandingConfig {
    /// Load the embedded landing.toml, falling back to defaults if it does
    /// not parse or validate.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => {
                log::debug!("Loaded landing config");
                config
            }
            Err(e) => {
                log::warn!("Failed to load landing config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rotation.feature_period_ms == 0 {
            return Err(invalid("rotation.feature_period_ms", "must be greater than zero"));
        }
        if self.rotation.case_period_ms == 0 {
            return Err(invalid("rotation.case_period_ms", "must be greater than zero"));
        }
        if !non_negative(self.scroll.scrolled_threshold_px) {
            return Err(invalid(
                "scroll.scrolled_threshold_px",
                "must be a finite, non-negative number",
            ));
        }
        if !non_negative(self.scroll.header_offset_px) {
            return Err(invalid(
                "scroll.header_offset_px",
                "must be a finite, non-negative number",
            ));
        }

        let spring = &self.scroll.spring;
        for (field, value) in [
            ("scroll.spring.stiffness", spring.stiffness),
            ("scroll.spring.damping", spring.damping),
            ("scroll.spring.mass", spring.mass),
            ("scroll.spring.rest_delta", spring.rest_delta),
            ("scroll.spring.rest_speed", spring.rest_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a finite, positive number"));
            }
        }

        if !non_negative(self.counter.duration_secs) {
            return Err(invalid(
                "counter.duration_secs",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = LandingConfig::from_toml_str(EMBEDDED).unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(LandingConfig::load(), config);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = LandingConfig::from_toml_str("").unwrap();
        assert_eq!(config.rotation.feature_period_ms, 6000);
        assert_eq!(config.rotation.case_period_ms, 8000);
        assert_eq!(config.scroll.scrolled_threshold_px, 50.0);
        assert_eq!(config.scroll.header_offset_px, 100.0);
        assert_eq!(config.counter.duration_secs, 2.0);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[rotation]
case_period_ms = 5000

[scroll.spring]
damping = 20.0
"#;
        let config = LandingConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.rotation.feature_period_ms, 6000);
        assert_eq!(config.rotation.case_period_ms, 5000);
        assert_eq!(config.scroll.spring.damping, 20.0);
        assert_eq!(config.scroll.spring.stiffness, 100.0);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = LandingConfig::from_toml_str("[rotation]\nfeature_period_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "rotation.feature_period_ms", .. }
        ));
    }

    #[test]
    fn test_non_positive_spring_rejected() {
        let err = LandingConfig::from_toml_str("[scroll.spring]\nmass = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("scroll.spring.mass"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LandingConfig::from_toml_str("[rotation\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
