//! Application-level configuration constants.

// Target selection
pub const DEFAULT_TARGET: u64 = 1000;
pub const FALLBACK_TARGET: u64 = 33;
pub const TARGET_PRESETS: [u64; 3] = [33, 100, 1000];

// Vibration
pub const DEFAULT_VIBRATION_ARMED: bool = true;
/// Pulse fired once when the count reaches the target.
pub const TARGET_REACHED_PATTERN: &[u32] = &[180, 100, 280];
/// Generic pattern for callers that don't supply one.
pub const DEFAULT_VIBRATION_PATTERN: &[u32] = &[150, 100, 200];

// UI strings
pub const APP_TITLE: &str = "Tasbih Counter";
pub const VIBRATION_SUPPORTED_NOTE: &str = "Vibration supported on this device.";
pub const VIBRATION_UNSUPPORTED_NOTE: &str =
    "Note: Vibration works on most Android browsers over HTTPS.";
pub const CUSTOM_INPUT_PLACEHOLDER: &str = "Enter a number";
