//! Rules and rulesets.
//!
//! A [`Rule`] is a tagged function value: a name, an optional user-facing
//! message, and a shared [`Predicate`]. A [`Ruleset`] maps field keys to
//! rules, in insertion order.

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use litefi_validator::foundation::Validate;

use crate::value::FieldValue;

/// Message used when a failing rule has none of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid value";

// ============================================================================
// PREDICATE
// ============================================================================

/// A pure test over a field value.
///
/// Implemented for every `Fn(&FieldValue) -> bool`.
pub trait Predicate {
    fn test(&self, value: &FieldValue) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&FieldValue) -> bool,
{
    fn test(&self, value: &FieldValue) -> bool {
        self(value)
    }
}

/// Adapts a string validator to field values.
///
/// `Empty` is validated as `""`; numbers, booleans and files fail.
struct TextPredicate<V>(V);

impl<V> Predicate for TextPredicate<V>
where
    V: Validate<Input = str>,
{
    fn test(&self, value: &FieldValue) -> bool {
        value.as_input().is_some_and(|text| self.0.is_valid(text))
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A named predicate attached to a field.
///
/// Cloning is cheap: the predicate is shared.
///
/// ```
/// use litefi_form::{FieldValue, Rule};
///
/// let adult = Rule::new("adult", |v: &FieldValue| matches!(v, FieldValue::Number(n) if *n >= 18.0))
///     .with_message("You must be 18 or older");
/// assert!(adult.test(&FieldValue::Number(21.0)));
/// assert!(!adult.test(&FieldValue::Empty));
/// ```
#[derive(Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
    predicate: Arc<dyn Predicate + Send + Sync>,
}

impl Rule {
    /// Creates a rule from any predicate.
    pub fn new<P>(name: impl Into<Cow<'static, str>>, predicate: P) -> Self
    where
        P: Predicate + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Creates a rule from a string validator.
    ///
    /// The validator's own error message is not used; set one with
    /// [`with_message`](Self::with_message).
    pub fn from_validator<V>(name: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        Self::new(name, TextPredicate(validator))
    }

    /// Sets the message shown when the rule fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Combines rules so that all must pass.
    ///
    /// The combined rule is named after its parts (`"required+email"`) and
    /// keeps the first message any part carries.
    pub fn all(rules: Vec<Self>) -> Self {
        let name = rules
            .iter()
            .map(|rule| rule.name.as_ref())
            .collect::<Vec<_>>()
            .join("+");
        let message = rules.iter().find_map(|rule| rule.message.clone());
        Self {
            name: name.into(),
            message,
            predicate: Arc::new(move |value: &FieldValue| rules.iter().all(|rule| rule.test(value))),
        }
    }

    /// Rule name, e.g. `"min_length"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message set for this rule, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The message to show when this rule fails.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.message().unwrap_or(DEFAULT_ERROR_MESSAGE)
    }

    /// Evaluates the rule.
    #[must_use]
    pub fn test(&self, value: &FieldValue) -> bool {
        self.predicate.test(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RULESET
// ============================================================================

/// Field key to rule mapping, in insertion order.
///
/// ```
/// use litefi_form::{rules, Ruleset};
///
/// let ruleset = Ruleset::new()
///     .with("email", rules::email())
///     .with("bvn", rules::bvn());
/// assert_eq!(ruleset.len(), 2);
/// assert_eq!(ruleset.get(&"bvn").map(|r| r.name()), Some("bvn"));
/// ```
#[derive(Debug, Clone)]
pub struct Ruleset<K> {
    rules: IndexMap<K, Rule>,
}

impl<K> Default for Ruleset<K> {
    fn default() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }
}

impl<K: Eq + Hash> Ruleset<K> {
    /// Creates an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, replacing any previous rule for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: K, rule: Rule) -> Self {
        self.insert(key, rule);
        self
    }

    /// Sets the rule for `key`, returning the previous one.
    pub fn insert(&mut self, key: K, rule: Rule) -> Option<Rule> {
        self.rules.insert(key, rule)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Rule> {
        self.rules.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.rules.contains_key(key)
    }

    /// Iterates rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Rule)> {
        self.rules.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rules.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Eq + Hash> FromIterator<(K, Rule)> for Ruleset<K> {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, const N: usize> From<[(K, Rule); N]> for Ruleset<K> {
    fn from(entries: [(K, Rule); N]) -> Self {
        entries.into_iter().collect()
    }
}
