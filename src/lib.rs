//! Tasbih counter: a single-screen tap counter that counts toward a chosen
//! target and buzzes once when the target is reached.
//!
//! The counting rules live in [`counter`] and are plain Rust with no browser
//! dependency. [`hooks`] and [`components`] wrap them for Yew, and
//! [`haptics`] is the only module that touches `navigator.vibrate`.

pub mod components;
pub mod config;
pub mod counter;
pub mod draft;
pub mod haptics;
pub mod hooks;
pub mod utils;

pub use counter::{CounterState, TapOutcome};
pub use draft::TargetDraft;
pub use haptics::{HapticError, HapticPort, HapticsContext, NavigatorHaptics, VibrationPattern};
pub use utils::TargetInputError;
