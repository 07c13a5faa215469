//! Uncommitted target selection held by the target sheet.
//!
//! The draft lives only while the sheet is open. It is seeded from the
//! committed target each time the sheet opens and produces a candidate for
//! [`crate::counter::CounterState::set_target`] when the user confirms.

use crate::utils::parse_leading_int;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDraft {
    selected: u64,
    custom_mode: bool,
    custom_text: String,
}

impl TargetDraft {
    pub fn seeded(target: u64) -> Self {
        Self {
            selected: target,
            custom_mode: false,
            custom_text: String::new(),
        }
    }

    pub fn selected(&self) -> u64 {
        self.selected
    }

    pub fn custom_mode(&self) -> bool {
        self.custom_mode
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    pub fn choose_preset(&mut self, value: u64) {
        self.custom_mode = false;
        self.selected = value;
    }

    pub fn choose_custom(&mut self) {
        self.custom_mode = true;
    }

    pub fn set_custom_text(&mut self, text: impl Into<String>) {
        self.custom_text = text.into();
    }

    /// A preset pill is highlighted only outside custom mode.
    pub fn is_preset_selected(&self, value: u64) -> bool {
        !self.custom_mode && self.selected == value
    }

    /// Value to commit; `None` when the custom text isn't a number.
    pub fn candidate(&self) -> Option<i64> {
        if self.custom_mode {
            parse_leading_int(&self.custom_text).ok()
        } else {
            i64::try_from(self.selected).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_target() {
        let draft = TargetDraft::seeded(100);
        assert_eq!(draft.selected(), 100);
        assert!(!draft.custom_mode());
        assert_eq!(draft.custom_text(), "");
        assert!(draft.is_preset_selected(100));
        assert_eq!(draft.candidate(), Some(100));
    }

    #[test]
    fn test_seeded_from_custom_target_highlights_nothing() {
        let draft = TargetDraft::seeded(250);
        assert!([33, 100, 1000].iter().all(|&p| !draft.is_preset_selected(p)));
        assert_eq!(draft.candidate(), Some(250));
    }

    #[test]
    fn test_custom_mode_uses_text() {
        let mut draft = TargetDraft::seeded(1000);
        draft.choose_custom();
        assert!(!draft.is_preset_selected(1000));
        assert_eq!(draft.candidate(), None);

        draft.set_custom_text("77");
        assert_eq!(draft.candidate(), Some(77));

        draft.set_custom_text("-4");
        assert_eq!(draft.candidate(), Some(-4));

        draft.set_custom_text("5000000000");
        assert_eq!(draft.candidate(), Some(5_000_000_000));

        draft.set_custom_text("12\u{0663}");
        assert_eq!(draft.candidate(), Some(12));
    }

    #[test]
    fn test_preset_leaves_custom_mode_but_keeps_text() {
        let mut draft = TargetDraft::seeded(1000);
        draft.choose_custom();
        draft.set_custom_text("12");
        draft.choose_preset(33);
        assert!(!draft.custom_mode());
        assert_eq!(draft.custom_text(), "12");
        assert_eq!(draft.candidate(), Some(33));

        draft.choose_custom();
        assert_eq!(draft.candidate(), Some(12));
    }
}
