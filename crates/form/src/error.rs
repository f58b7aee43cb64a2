/// Error type for form engine misuse and rule configuration.
///
/// Failed validation is not an error: it shows up as `false` in
/// [`validations`](crate::FormValidator::validations). These variants cover
/// calls the engine cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The field is not part of this form. The field set is fixed at construction.
    #[error("unknown form field `{field}`")]
    UnknownField { field: String },

    /// A rule configuration could not be parsed or names an unknown rule.
    #[error("invalid rule configuration: {reason}")]
    Config { reason: String },
}

impl FormError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownField { .. } => "FORM_UNKNOWN_FIELD",
            Self::Config { .. } => "FORM_CONFIG",
        }
    }

    pub(crate) fn unknown_field(field: impl ToString) -> Self {
        Self::UnknownField {
            field: field.to_string(),
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
