//! Rulesets loaded from JSON.
//!
//! A configuration maps field names to one rule spec or a list of them:
//!
//! ```json
//! {
//!   "full_name": { "rule": "min_length", "min": 3 },
//!   "email": [{ "rule": "required" }, { "rule": "email", "message": "Check your email" }],
//!   "nin": { "rule": "nin" }
//! }
//! ```
//!
//! A list is combined with [`Rule::all`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::rule::{Rule, Ruleset};
use crate::rules;

/// The named rules a configuration can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength { min: usize },
    Email,
    OptionalEmail,
    Phone,
    Bvn,
    Nin,
    NotEmpty,
    HasValue,
    Date,
    StrongPassword,
    NigerianPhone,
}

impl RuleKind {
    /// Builds the rule with its default message.
    #[must_use]
    pub fn to_rule(self) -> Rule {
        match self {
            Self::Required => rules::required(),
            Self::MinLength { min } => rules::min_length(min),
            Self::Email => rules::email(),
            Self::OptionalEmail => rules::optional_email(),
            Self::Phone => rules::phone(),
            Self::Bvn => rules::bvn(),
            Self::Nin => rules::nin(),
            Self::NotEmpty => rules::not_empty(),
            Self::HasValue => rules::has_value(),
            Self::Date => rules::date(),
            Self::StrongPassword => rules::strong_password(),
            Self::NigerianPhone => rules::nigerian_phone(),
        }
    }
}

/// One configured rule, optionally overriding its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    #[serde(flatten)]
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleSpec {
    #[must_use]
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn to_rule(&self) -> Rule {
        let rule = self.kind.to_rule();
        match &self.message {
            Some(message) => rule.with_message(message.clone()),
            None => rule,
        }
    }
}

/// The rules configured for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldRules {
    One(RuleSpec),
    All(Vec<RuleSpec>),
}

impl FieldRules {
    fn to_rule(&self, field: &str) -> Result<Rule, FormError> {
        match self {
            Self::One(spec) => Ok(spec.to_rule()),
            Self::All(specs) => match specs.as_slice() {
                [] => Err(FormError::Config {
                    reason: format!("no rules listed for field `{field}`"),
                }),
                [spec] => Ok(spec.to_rule()),
                specs => Ok(Rule::all(specs.iter().map(RuleSpec::to_rule).collect())),
            },
        }
    }
}

/// Field name to rules, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulesetConfig {
    fields: IndexMap<String, FieldRules>,
}

impl RulesetConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds rules for a field, replacing earlier ones.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(field.into(), rules);
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|err| {
            tracing::warn!(error = %err, "rejecting rule configuration");
            FormError::from(err)
        })
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the ruleset.
    pub fn to_ruleset(&self) -> Result<Ruleset<String>, FormError> {
        self.fields
            .iter()
            .map(|(field, rules)| Ok((field.clone(), rules.to_rule(field)?)))
            .collect::<Result<Ruleset<String>, FormError>>()
            .inspect_err(|err| tracing::warn!(error = %err, "rejecting rule configuration"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Ruleset<String> {
    /// Loads a ruleset from its JSON configuration.
    ///
    /// ```
    /// use litefi_form::Ruleset;
    ///
    /// let ruleset = Ruleset::from_json(r#"{ "bvn": { "rule": "bvn" } }"#).unwrap();
    /// assert!(ruleset.contains(&"bvn".to_owned()));
    ///
    /// assert!(Ruleset::from_json(r#"{ "bvn": { "rule": "bank" } }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        RulesetConfig::from_json(json)?.to_ruleset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_single_and_list_specs() {
        let config = RulesetConfig::from_json(
            r#"{
                "full_name": { "rule": "min_length", "min": 3 },
                "email": [{ "rule": "required" }, { "rule": "email", "message": "Check your email" }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            RulesetConfig::new()
                .with("full_name", FieldRules::One(RuleSpec::new(RuleKind::MinLength { min: 3 })))
                .with(
                    "email",
                    FieldRules::All(vec![
                        RuleSpec::new(RuleKind::Required),
                        RuleSpec::new(RuleKind::Email).with_message("Check your email"),
                    ])
                )
        );
    }

    #[test]
    fn list_rules_combine_and_keep_first_message() {
        let ruleset = Ruleset::from_json(
            r#"{ "email": [{ "rule": "required" }, { "rule": "email" }] }"#,
        )
        .unwrap();
        let rule = ruleset.get(&"email".to_owned()).unwrap();
        assert_eq!(rule.name(), "required+email");
        assert_eq!(rule.message(), Some("This field is required"));
        assert!(!rule.test(&FieldValue::from("  ")));
        assert!(!rule.test(&FieldValue::from("ada@")));
        assert!(rule.test(&FieldValue::from("ada@litefi.ng")));
    }

    #[test]
    fn message_override() {
        let ruleset =
            Ruleset::from_json(r#"{ "bvn": { "rule": "bvn", "message": "Check your BVN" } }"#)
                .unwrap();
        assert_eq!(ruleset.get(&"bvn".to_owned()).unwrap().message(), Some("Check your BVN"));
    }

    #[test]
    fn rejects_bad_configuration() {
        for json in [
            "{",
            r#"{ "bvn": { "rule": "bank" } }"#,
            r#"{ "name": { "rule": "min_length" } }"#,
            r#"{ "bvn": "bvn" }"#,
        ] {
            let err = Ruleset::from_json(json).unwrap_err();
            assert!(matches!(err, FormError::Config { .. }), "{json}");
        }
    }

    #[test]
    fn rejects_empty_rule_list() {
        let err = Ruleset::from_json(r#"{ "bvn": [] }"#).unwrap_err();
        assert_eq!(
            err,
            FormError::Config {
                reason: "no rules listed for field `bvn`".to_owned()
            }
        );
    }

    #[test]
    fn keeps_document_order() {
        let ruleset =
            Ruleset::from_json(r#"{ "z": { "rule": "nin" }, "a": { "rule": "date" } }"#).unwrap();
        let keys: Vec<_> = ruleset.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let config = RulesetConfig::new().with(
            "phone",
            FieldRules::One(RuleSpec::new(RuleKind::Phone).with_message("Phone?")),
        );
        assert_eq!(config.to_json().unwrap(), r#"{"phone":{"rule":"phone","message":"Phone?"}}"#);
    }
}
