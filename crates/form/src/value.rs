//! Values held by form fields.

use serde::{Deserialize, Serialize};

/// A file chosen in an upload field. Only its metadata is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

/// The value of one form field.
///
/// Serializes untagged, so `"text"`, `42`, `true`, `null` and
/// `{"name": "id.png"}` are all valid JSON field values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value yet.
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    File(FileRef),
}

impl FieldValue {
    /// The text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text view used by string rules: `Empty` reads as `""`.
    ///
    /// Returns `None` for numbers, booleans and files.
    #[must_use]
    pub fn as_input(&self) -> Option<&str> {
        match self {
            Self::Empty => Some(""),
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for `Empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Truthiness: non-empty text, a non-zero number, `true`, or any file.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::File(_) => true,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<FileRef> for FieldValue {
    fn from(value: FileRef) -> Self {
        Self::File(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldValue::Empty, false)]
    #[case(FieldValue::from(""), false)]
    #[case(FieldValue::from(" "), true)]
    #[case(FieldValue::from(0.0), false)]
    #[case(FieldValue::from(f64::NAN), false)]
    #[case(FieldValue::from(-1.5), true)]
    #[case(FieldValue::from(false), false)]
    #[case(FieldValue::from(true), true)]
    #[case(FieldValue::File(FileRef { name: "id.png".into(), size: 0 }), true)]
    fn truthiness(#[case] value: FieldValue, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn deserializes_untagged() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[null, true, 2.5, "ada", {"name": "id.png"}]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Empty,
                FieldValue::Bool(true),
                FieldValue::Number(2.5),
                FieldValue::Text("ada".into()),
                FieldValue::File(FileRef { name: "id.png".into(), size: 0 }),
            ]
        );
    }

    #[test]
    fn option_maps_none_to_empty() {
        assert_eq!(FieldValue::from(None::<&str>), FieldValue::Empty);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x".into()));
    }

    #[test]
    fn input_view() {
        assert_eq!(FieldValue::Empty.as_input(), Some(""));
        assert_eq!(FieldValue::from(1.0).as_input(), None);
        assert_eq!(FieldValue::Empty.as_text(), None);
    }
}
