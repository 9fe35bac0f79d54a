// crates/certilife-core/src/lib.rs
// Presentation logic for the CertiLife PCO landing page (native + WASM compatible)
// No web-only dependencies allowed here

pub mod animator;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod navigator;
pub mod rotation;
pub mod scroll;
pub mod spring;

pub use animator::{compute_frame, ease_out_quart, CounterAnimation, CounterFrame, CounterParams};
pub use config::LandingConfig;
pub use controller::{PresentationController, PresentationState, RotationHandles, Subscription};
pub use error::ConfigError;
pub use navigator::{scroll_target, Navigator, ScrollSurface};
pub use rotation::{start_rotation, Advance, CancelFn, IntervalHost, ModularIndex, RotationHandle};
pub use scroll::{ScrollSample, ScrollSignals, ScrollTracker};
pub use spring::{Spring, SpringConfig};
