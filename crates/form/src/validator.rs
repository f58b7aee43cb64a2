//! The per-form validation engine.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::FormError;
use crate::rule::{Rule, Ruleset};
use crate::state::FieldState;
use crate::value::FieldValue;

/// Keys that can name form fields.
///
/// Implemented for any hashable, clonable, displayable type, so `&str`,
/// `String` and field enums with a `Display` impl all work.
pub trait FieldKey: Eq + Hash + Clone + fmt::Display {}

impl<T: Eq + Hash + Clone + fmt::Display> FieldKey for T {}

/// Validation and touch tracking for one form instance.
///
/// The field set is fixed by the initial values. Every mutator recomputes
/// validity before returning, so readers never see stale results. An error
/// is shown for a field only once it has been touched (blurred).
///
/// ```
/// use litefi_form::{rules, FieldValue, FormValidator, Ruleset};
///
/// let mut form = FormValidator::new(
///     [("email", FieldValue::from(""))],
///     Ruleset::new().with("email", rules::email()),
/// );
/// assert!(!form.show_error(&"email"));
///
/// form.handle_blur(&"email").unwrap();
/// assert!(form.show_error(&"email"));
///
/// form.handle_change(&"email", "ada@litefi.ng").unwrap();
/// assert!(!form.show_error(&"email"));
/// assert!(form.is_form_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator<K: FieldKey> {
    /// Values the form was created with, restored by `reset`.
    initial: IndexMap<K, FieldValue>,
    values: IndexMap<K, FieldValue>,
    states: IndexMap<K, FieldState>,
    rules: Ruleset<K>,
}

impl<K: FieldKey> FormValidator<K> {
    /// Creates an engine for the given fields. All fields start untouched.
    pub fn new(initial_values: impl IntoIterator<Item = (K, FieldValue)>, rules: Ruleset<K>) -> Self {
        let initial: IndexMap<K, FieldValue> = initial_values.into_iter().collect();
        let states = initial.keys().map(|key| (key.clone(), FieldState::new())).collect();

        let mut form = Self {
            values: initial.clone(),
            initial,
            states,
            rules,
        };
        form.revalidate_all();
        form
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    /// Sets a field's value and revalidates it. Does not touch the field.
    pub fn handle_change(&mut self, key: &K, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let Some(slot) = self.values.get_mut(key) else {
            tracing::warn!(field = %key, "change for unknown form field");
            return Err(FormError::unknown_field(key));
        };
        *slot = value.into();

        let dirty = self.initial.get(key) != Some(&*slot);
        let valid = evaluate(self.rules.get(key), slot);
        if let Some(state) = self.states.get_mut(key) {
            state.set_dirty(dirty);
            state.set_valid(valid);
        }
        tracing::trace!(field = %key, valid, dirty, "field changed");
        Ok(())
    }

    /// Marks a field touched. Idempotent.
    pub fn handle_blur(&mut self, key: &K) -> Result<(), FormError> {
        let Some(state) = self.states.get_mut(key) else {
            tracing::warn!(field = %key, "blur for unknown form field");
            return Err(FormError::unknown_field(key));
        };
        if state.mark_touched() {
            tracing::trace!(field = %key, "field touched");
        }
        Ok(())
    }

    /// Marks every field touched, typically right before submit.
    pub fn touch_all_fields(&mut self) {
        for state in self.states.values_mut() {
            state.mark_touched();
        }
        tracing::debug!(fields = self.states.len(), "touched all fields");
    }

    /// Replaces the whole ruleset and revalidates every field.
    pub fn set_validation_rules(&mut self, rules: Ruleset<K>) {
        tracing::debug!(
            previous = self.rules.len(),
            current = rules.len(),
            "replacing validation rules"
        );
        self.rules = rules;
        self.revalidate_all();
    }

    /// Restores the initial values and clears touched and dirty flags.
    pub fn reset(&mut self) {
        self.values.clone_from(&self.initial);
        for state in self.states.values_mut() {
            *state = FieldState::new();
        }
        self.revalidate_all();
        tracing::debug!(fields = self.states.len(), "form reset");
    }

    fn revalidate_all(&mut self) {
        for (key, state) in &mut self.states {
            let value = self.values.get(key).unwrap_or(&FieldValue::Empty);
            state.set_valid(evaluate(self.rules.get(key), value));
        }
    }

    // ========================================================================
    // VALIDITY
    // ========================================================================

    /// Validity of every field, in field order. Fields without a rule are valid.
    pub fn validations(&self) -> IndexMap<K, bool> {
        self.states
            .iter()
            .map(|(key, state)| (key.clone(), state.is_valid()))
            .collect()
    }

    /// Whether a field passes its rule.
    ///
    /// A key that is not a form field is checked as an empty value.
    pub fn is_field_valid(&self, key: &K) -> bool {
        match self.states.get(key) {
            Some(state) => state.is_valid(),
            None => evaluate(self.rules.get(key), &FieldValue::Empty),
        }
    }

    /// Whether each field should display its error, in field order.
    pub fn show_errors(&self) -> IndexMap<K, bool> {
        self.states
            .keys()
            .map(|key| (key.clone(), self.show_error(key)))
            .collect()
    }

    /// Touched, has a rule, and fails it.
    pub fn show_error(&self, key: &K) -> bool {
        self.states
            .get(key)
            .is_some_and(|state| state.is_touched() && self.rules.contains(key) && !state.is_valid())
    }

    /// Messages of the errors currently shown, in field order.
    pub fn error_messages(&self) -> Vec<(&K, &str)> {
        self.states
            .keys()
            .filter(|key| self.show_error(key))
            .filter_map(|key| Some((key, self.rules.get(key)?.error_message())))
            .collect()
    }

    /// True when every rule in the ruleset passes.
    ///
    /// Untouched fields count too. A rule keyed by something that is not a
    /// form field is checked against an empty value.
    pub fn is_form_valid(&self) -> bool {
        self.rules.keys().all(|key| self.is_field_valid(key))
    }

    // ========================================================================
    // STATE
    // ========================================================================

    /// True if any value differs from its initial one.
    pub fn is_dirty(&self) -> bool {
        self.states.values().any(FieldState::is_dirty)
    }

    /// Fields whose value differs from the initial one, in field order.
    pub fn dirty_fields(&self) -> Vec<&K> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_dirty())
            .map(|(key, _)| key)
            .collect()
    }

    pub fn is_touched(&self, key: &K) -> bool {
        self.states.get(key).is_some_and(FieldState::is_touched)
    }

    pub fn values(&self) -> &IndexMap<K, FieldValue> {
        &self.values
    }

    pub fn value(&self, key: &K) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn rules(&self) -> &Ruleset<K> {
        &self.rules
    }

    /// Field keys, in order.
    pub fn fields(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }
}

fn evaluate(rule: Option<&Rule>, value: &FieldValue) -> bool {
    rule.is_none_or(|rule| rule.test(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use pretty_assertions::assert_eq;

    fn signup() -> FormValidator<&'static str> {
        FormValidator::new(
            [
                ("full_name", FieldValue::from("")),
                ("email", FieldValue::from("")),
                ("referral", FieldValue::from("")),
            ],
            Ruleset::new()
                .with("full_name", rules::min_length(3))
                .with("email", rules::email()),
        )
    }

    #[test]
    fn starts_untouched_with_computed_validity() {
        let form = signup();
        assert_eq!(
            form.validations(),
            IndexMap::from([("full_name", false), ("email", false), ("referral", true)])
        );
        assert!(form.show_errors().values().all(|shown| !shown));
        assert!(!form.is_form_valid());
    }

    #[test]
    fn change_revalidates_only_through_rules() {
        let mut form = signup();
        form.handle_change(&"full_name", "Ada Obi").unwrap();
        form.handle_change(&"referral", 42.0).unwrap();
        assert!(form.is_field_valid(&"full_name"));
        assert!(form.is_field_valid(&"referral"));
        assert!(!form.is_touched(&"full_name"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut form = signup();
        assert_eq!(
            form.handle_change(&"phone", "0803"),
            Err(FormError::UnknownField {
                field: "phone".to_owned()
            })
        );
        assert!(form.handle_blur(&"phone").is_err());
        assert_eq!(form.values().len(), 3);
    }

    #[test]
    fn error_messages_follow_field_order() {
        let mut form = signup();
        form.touch_all_fields();
        assert_eq!(
            form.error_messages(),
            vec![
                (&"full_name", "Must be at least 3 characters"),
                (&"email", "Enter a valid email address"),
            ]
        );
    }

    #[test]
    fn dirty_tracks_difference_from_initial() {
        let mut form = signup();
        form.handle_change(&"email", "a").unwrap();
        assert_eq!(form.dirty_fields(), vec![&"email"]);
        form.handle_change(&"email", "").unwrap();
        assert!(!form.is_dirty());
    }

    #[test]
    fn reset_restores_everything() {
        let mut form = signup();
        form.handle_change(&"email", "ada@litefi.ng").unwrap();
        form.touch_all_fields();
        form.reset();
        assert_eq!(form.value(&"email"), Some(&FieldValue::from("")));
        assert!(!form.is_touched(&"email"));
        assert!(!form.is_dirty());
        assert!(!form.is_field_valid(&"email"));
    }

    #[test]
    fn rules_for_missing_fields_see_empty() {
        let form = FormValidator::new(
            [("email", FieldValue::from("ada@litefi.ng"))],
            Ruleset::new()
                .with("email", rules::email())
                .with("nin", rules::nin()),
        );
        assert!(form.is_form_valid());

        let mut form = form;
        form.set_validation_rules(Ruleset::new().with("bvn", rules::bvn()));
        assert!(!form.is_form_valid());
        assert!(!form.is_field_valid(&"bvn"));
        assert!(!form.show_error(&"bvn"));
    }
}
