//! Best-effort vibration output.
//!
//! The counter never talks to the platform directly. It hands a
//! [`VibrationPattern`] to whatever [`HapticPort`] the app was given; in the
//! browser that is [`NavigatorHaptics`], which calls `navigator.vibrate`.

use crate::config::DEFAULT_VIBRATION_PATTERN;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Navigator;

/// Alternating on/off durations in milliseconds, starting with "on".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VibrationPattern(pub &'static [u32]);

impl Default for VibrationPattern {
    fn default() -> Self {
        VibrationPattern(DEFAULT_VIBRATION_PATTERN)
    }
}

impl VibrationPattern {
    pub fn durations(&self) -> &'static [u32] {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// Not running inside a browser window.
    NoWindow,
    /// `navigator.vibrate` is missing or not callable.
    Unsupported,
    /// The pattern could not be converted to a JS array.
    Encode(String),
    /// The platform threw while vibrating.
    Rejected(String),
}

impl fmt::Display for HapticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticError::NoWindow => write!(f, "No browser window available"),
            HapticError::Unsupported => write!(f, "Vibration is not supported"),
            HapticError::Encode(msg) => write!(f, "Failed to encode vibration pattern: {}", msg),
            HapticError::Rejected(msg) => write!(f, "Vibration call failed: {}", msg),
        }
    }
}

impl std::error::Error for HapticError {}

pub trait HapticPort {
    /// Whether the platform exposes a vibration capability at all.
    fn is_supported(&self) -> bool;

    fn try_fire(&self, pattern: VibrationPattern) -> Result<(), HapticError>;

    /// Vibrate, ignoring any failure. Never panics into the caller.
    fn fire(&self, pattern: VibrationPattern) {
        if let Err(e) = self.try_fire(pattern) {
            debug!("Haptic pulse skipped: {}", e);
        }
    }
}

/// `navigator.vibrate` in the current browser window.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorHaptics;

impl NavigatorHaptics {
    fn navigator() -> Result<Navigator, HapticError> {
        web_sys::window()
            .map(|window| window.navigator())
            .ok_or(HapticError::NoWindow)
    }

    // Looked up reflectively so browsers without the API, or ones that throw
    // from it, surface as errors instead of aborting the wasm module.
    fn vibrate_fn(navigator: &Navigator) -> Result<js_sys::Function, HapticError> {
        let key = JsValue::from_str("vibrate");
        if !js_sys::Reflect::has(navigator, &key).unwrap_or(false) {
            return Err(HapticError::Unsupported);
        }
        js_sys::Reflect::get(navigator, &key)
            .map_err(|e| HapticError::Rejected(describe_js_error(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| HapticError::Unsupported)
    }
}

impl HapticPort for NavigatorHaptics {
    fn is_supported(&self) -> bool {
        Self::navigator()
            .and_then(|navigator| Self::vibrate_fn(&navigator))
            .is_ok()
    }

    fn try_fire(&self, pattern: VibrationPattern) -> Result<(), HapticError> {
        let navigator = Self::navigator()?;
        let vibrate = Self::vibrate_fn(&navigator)?;
        let js_pattern = serde_wasm_bindgen::to_value(&pattern)
            .map_err(|e| HapticError::Encode(e.to_string()))?;
        vibrate
            .call1(&navigator, &js_pattern)
            .map_err(|e| HapticError::Rejected(describe_js_error(&e)))?;
        Ok(())
    }
}

fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Shared haptic port handed down through Yew context.
#[derive(Clone)]
pub struct HapticsContext(pub Rc<dyn HapticPort>);

impl HapticsContext {
    pub fn new(port: impl HapticPort + 'static) -> Self {
        Self(Rc::new(port))
    }
}

impl Default for HapticsContext {
    fn default() -> Self {
        Self::new(NavigatorHaptics)
    }
}

impl PartialEq for HapticsContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for HapticsContext {
    type Target = dyn HapticPort;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
