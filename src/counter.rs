//! The tap counter state machine.
//!
//! `CounterState` owns the committed count, target and vibration flags and is
//! mutated only through its four actions. Platform effects stay outside: a tap
//! that should buzz reports it through [`TapOutcome`] and the caller forwards
//! the pattern to a [`crate::haptics::HapticPort`].

use crate::config::{
    DEFAULT_TARGET, DEFAULT_VIBRATION_ARMED, FALLBACK_TARGET, TARGET_REACHED_PATTERN,
};
use crate::haptics::VibrationPattern;
use crate::utils::validate_target;
use log::{debug, info};

/// Result of a single `tap()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The count was already at the target; nothing changed.
    Ignored,
    /// The count advanced but the target is still ahead.
    Counted,
    /// This tap brought the count to the target.
    Reached {
        /// Pattern to play, present only the first time the target is hit while armed.
        haptic: Option<VibrationPattern>,
    },
}

impl TapOutcome {
    pub fn haptic(&self) -> Option<VibrationPattern> {
        match self {
            TapOutcome::Reached { haptic } => *haptic,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    count: u64,
    target: u64,
    vibration_armed: bool,
    has_fired_for_current_target: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            target: DEFAULT_TARGET,
            vibration_armed: DEFAULT_VIBRATION_ARMED,
            has_fired_for_current_target: false,
        }
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn vibration_armed(&self) -> bool {
        self.vibration_armed
    }

    pub fn has_fired_for_current_target(&self) -> bool {
        self.has_fired_for_current_target
    }

    /// `count >= target`; taps are ignored from here on.
    pub fn is_completed(&self) -> bool {
        self.count >= self.target
    }

    /// Advance the count by one unless the target is already reached.
    pub fn tap(&mut self) -> TapOutcome {
        if self.is_completed() {
            debug!("Tap ignored at {}/{}", self.count, self.target);
            return TapOutcome::Ignored;
        }

        self.count += 1;
        if self.count != self.target {
            return TapOutcome::Counted;
        }

        let haptic = if self.vibration_armed && !self.has_fired_for_current_target {
            self.has_fired_for_current_target = true;
            info!("Target {} reached, firing haptic pulse", self.target);
            Some(VibrationPattern(TARGET_REACHED_PATTERN))
        } else {
            None
        };
        TapOutcome::Reached { haptic }
    }

    /// Start a fresh run toward the same target.
    pub fn reset(&mut self) {
        self.count = 0;
        self.has_fired_for_current_target = false;
    }

    /// Commit a new target and restart the count.
    ///
    /// `None` stands for input that did not parse as a number at all. Such
    /// input and non-positive values fall back to [`FALLBACK_TARGET`]. Returns
    /// the target actually committed.
    pub fn set_target(&mut self, candidate: Option<i64>) -> u64 {
        let target = match candidate.map(validate_target) {
            Some(Ok(target)) => target,
            Some(Err(e)) => {
                debug!("{}, using fallback target {}", e, FALLBACK_TARGET);
                FALLBACK_TARGET
            }
            None => {
                debug!(
                    "Target input is not a number, using fallback target {}",
                    FALLBACK_TARGET
                );
                FALLBACK_TARGET
            }
        };

        self.target = target;
        self.count = 0;
        self.has_fired_for_current_target = false;
        info!("Target set to {}", target);
        target
    }

    pub fn toggle_vibration_armed(&mut self) {
        self.vibration_armed = !self.vibration_armed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap_n(state: &mut CounterState, n: u32) -> Vec<TapOutcome> {
        (0..n).map(|_| state.tap()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CounterState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.target(), 1000);
        assert!(state.vibration_armed());
        assert!(!state.has_fired_for_current_target());
        assert!(!state.is_completed());
    }

    #[test]
    fn test_tap_counts_until_target() {
        let mut state = CounterState::new();
        state.set_target(Some(3));
        assert_eq!(state.tap(), TapOutcome::Counted);
        assert_eq!(state.tap(), TapOutcome::Counted);
        assert_eq!(
            state.tap(),
            TapOutcome::Reached {
                haptic: Some(VibrationPattern(TARGET_REACHED_PATTERN))
            }
        );
        assert_eq!(state.count(), 3);
        assert!(state.is_completed());
        assert!(state.has_fired_for_current_target());
    }

    #[test]
    fn test_tap_at_target_is_noop() {
        let mut state = CounterState::new();
        state.set_target(Some(2));
        tap_n(&mut state, 2);
        let before = state;
        assert_eq!(state.tap(), TapOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_disarmed_reach_has_no_haptic() {
        let mut state = CounterState::new();
        state.set_target(Some(1));
        state.toggle_vibration_armed();
        assert_eq!(state.tap(), TapOutcome::Reached { haptic: None });
        assert!(!state.has_fired_for_current_target());
    }

    #[test]
    fn test_target_of_one_fires_on_first_tap() {
        let mut state = CounterState::new();
        state.set_target(Some(1));
        assert!(state.tap().haptic().is_some());
        assert!(state.tap().haptic().is_none());
    }

    #[test]
    fn test_reset_rearms_haptic() {
        let mut state = CounterState::new();
        state.set_target(Some(2));
        let first = tap_n(&mut state, 2);
        assert!(first[1].haptic().is_some());

        state.reset();
        assert_eq!(state.count(), 0);
        assert!(!state.has_fired_for_current_target());
        assert_eq!(state.target(), 2);
        assert!(state.vibration_armed());

        let second = tap_n(&mut state, 2);
        assert!(second[1].haptic().is_some());
    }

    #[test]
    fn test_reset_preserves_disarmed() {
        let mut state = CounterState::new();
        state.toggle_vibration_armed();
        tap_n(&mut state, 10);
        state.reset();
        assert!(!state.vibration_armed());
        assert_eq!(state.target(), 1000);
    }

    #[test]
    fn test_set_target_restarts_count() {
        let mut state = CounterState::new();
        tap_n(&mut state, 40);
        assert_eq!(state.set_target(Some(250)), 250);
        assert_eq!(state.count(), 0);
        assert_eq!(state.target(), 250);
        assert!(!state.has_fired_for_current_target());
    }

    #[test]
    fn test_set_target_same_value_clears_fired() {
        let mut state = CounterState::new();
        state.set_target(Some(5));
        tap_n(&mut state, 5);
        assert!(state.has_fired_for_current_target());
        state.set_target(Some(5));
        assert_eq!(state.count(), 0);
        assert!(!state.has_fired_for_current_target());
    }

    #[test]
    fn test_invalid_targets_fall_back() {
        for candidate in [Some(0), Some(-5), Some(i64::MIN), None] {
            let mut state = CounterState::new();
            assert_eq!(state.set_target(candidate), FALLBACK_TARGET);
            assert_eq!(state.target(), 33);
            assert_eq!(state.count(), 0);
        }
    }

    #[test]
    fn test_targets_past_u32_are_kept() {
        let mut state = CounterState::new();
        assert_eq!(state.set_target(Some(5_000_000_000)), 5_000_000_000);
        assert_eq!(state.set_target(Some(i64::MAX)), i64::MAX as u64);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_toggle_only_flips_armed() {
        let mut state = CounterState::new();
        state.set_target(Some(4));
        tap_n(&mut state, 4);
        let before = state;

        state.toggle_vibration_armed();
        assert!(!state.vibration_armed());
        assert_eq!(state.count(), before.count());
        assert_eq!(state.target(), before.target());
        assert_eq!(
            state.has_fired_for_current_target(),
            before.has_fired_for_current_target()
        );

        state.toggle_vibration_armed();
        assert_eq!(state, before);
    }

    #[test]
    fn test_arming_after_reach_does_not_fire() {
        let mut state = CounterState::new();
        state.set_target(Some(2));
        state.toggle_vibration_armed();
        tap_n(&mut state, 2);
        state.toggle_vibration_armed();
        assert_eq!(state.tap(), TapOutcome::Ignored);
    }
}
