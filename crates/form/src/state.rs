//! Per-field state flags

use bitflags::bitflags;

bitflags! {
    /// Flags representing the current state of a form field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u8 {
        /// The user has left the field at least once.
        const TOUCHED = 0b0000_0001;
        /// The value differs from the initial one.
        const DIRTY = 0b0000_0010;
        /// The field passes its rule, or has none.
        const VALID = 0b0000_0100;
    }
}

/// Runtime state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldState {
    flags: FieldFlags,
}

impl FieldState {
    /// Fresh state: untouched, clean, and valid until evaluated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: FieldFlags::VALID,
        }
    }

    /// Get the current flags.
    #[must_use]
    pub fn flags(&self) -> FieldFlags {
        self.flags
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.flags.contains(FieldFlags::TOUCHED)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.flags.contains(FieldFlags::DIRTY)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.flags.contains(FieldFlags::VALID)
    }

    /// Marks the field touched. Returns true if it was not touched before.
    pub fn mark_touched(&mut self) -> bool {
        let first = !self.is_touched();
        self.flags.insert(FieldFlags::TOUCHED);
        first
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.flags.set(FieldFlags::DIRTY, dirty);
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.flags.set(FieldFlags::VALID, valid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_valid_and_untouched() {
        let state = FieldState::new();
        assert!(state.is_valid());
        assert!(!state.is_touched());
        assert!(!state.is_dirty());
    }

    #[test]
    fn touch_reports_first_time_only() {
        let mut state = FieldState::new();
        assert!(state.mark_touched());
        assert!(!state.mark_touched());
        assert_eq!(state.flags(), FieldFlags::VALID | FieldFlags::TOUCHED);
    }

    #[test]
    fn flags_are_independent() {
        let mut state = FieldState::new();
        state.set_dirty(true);
        state.set_valid(false);
        assert_eq!(state.flags(), FieldFlags::DIRTY);
        state.set_dirty(false);
        assert!(state.flags().is_empty());
    }
}
