//! JSON-configured rulesets behave like hand-built ones.

use litefi_form::{FieldValue, FormValidator, Ruleset, rules};
use rstest::rstest;

const ONBOARDING: &str = r#"{
    "full_name": { "rule": "min_length", "min": 3 },
    "email": [{ "rule": "required" }, { "rule": "email" }],
    "phone": { "rule": "phone" },
    "bvn": { "rule": "bvn" },
    "nin": { "rule": "nin" },
    "referral_email": { "rule": "optional_email" },
    "date_of_birth": { "rule": "date" },
    "password": { "rule": "strong_password" },
    "terms": { "rule": "has_value", "message": "Accept the terms to continue" }
}"#;

fn hand_built() -> Ruleset<String> {
    Ruleset::new()
        .with("full_name".to_owned(), rules::min_length(3))
        .with("email".to_owned(), rules::email())
        .with("phone".to_owned(), rules::phone())
        .with("bvn".to_owned(), rules::bvn())
        .with("nin".to_owned(), rules::nin())
        .with("referral_email".to_owned(), rules::optional_email())
        .with("date_of_birth".to_owned(), rules::date())
        .with("password".to_owned(), rules::strong_password())
        .with("terms".to_owned(), rules::has_value())
}

#[rstest]
#[case("full_name", FieldValue::from("Ada"))]
#[case("full_name", FieldValue::from(" A "))]
#[case("email", FieldValue::from("ada@litefi.ng"))]
#[case("email", FieldValue::from(""))]
#[case("phone", FieldValue::from("+234 803 123 4567"))]
#[case("phone", FieldValue::from("12"))]
#[case("bvn", FieldValue::from("22212345678"))]
#[case("bvn", FieldValue::from("2221234567a"))]
#[case("nin", FieldValue::Empty)]
#[case("referral_email", FieldValue::from(""))]
#[case("referral_email", FieldValue::from("ada@"))]
#[case("date_of_birth", FieldValue::from("31/04/1990"))]
#[case("date_of_birth", FieldValue::from("30/04/1990"))]
#[case("password", FieldValue::from("Sunshine9!"))]
#[case("password", FieldValue::from("sunshine"))]
#[case("terms", FieldValue::Bool(true))]
#[case("terms", FieldValue::Bool(false))]
fn configured_rules_match_hand_built(#[case] field: &str, #[case] value: FieldValue) {
    let configured = Ruleset::from_json(ONBOARDING).unwrap();
    let expected = hand_built();
    let key = field.to_owned();

    assert_eq!(
        configured.get(&key).unwrap().test(&value),
        expected.get(&key).unwrap().test(&value),
        "{field} = {value:?}"
    );
}

#[test]
fn configured_form_reports_configured_messages() {
    let ruleset = Ruleset::from_json(ONBOARDING).unwrap();
    let fields: Vec<(String, FieldValue)> = ruleset
        .keys()
        .map(|key| (key.clone(), FieldValue::Empty))
        .collect();
    let mut form = FormValidator::new(fields, ruleset);

    form.handle_blur(&"terms".to_owned()).unwrap();
    form.handle_blur(&"nin".to_owned()).unwrap();
    let messages: Vec<_> = form
        .error_messages()
        .into_iter()
        .map(|(key, message)| (key.as_str(), message))
        .collect();
    assert_eq!(messages, vec![("terms", "Accept the terms to continue")]);
}
