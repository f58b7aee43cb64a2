//! Checks the fields of a signup form with litefi-validator.

use litefi_validator::prelude::*;

fn main() {
    let password = "Sunshine9";
    let report = validate_password(password);
    let score = PasswordScore::of(password);
    println!(
        "password: valid={} strength={} meter={} ({})",
        report.is_valid,
        report.strength.as_str(),
        score.value(),
        score.label()
    );
    for error in &report.errors {
        println!("  - {error}");
    }

    for phone in ["0803 123 4567", "+234 905 555 0101", "+44 7911 123456", "0803"] {
        let classification = validate_phone_number(phone);
        let info = phone_number_info(phone);
        println!(
            "phone {phone:?}: valid={} display={:?} verification={}",
            classification.is_valid,
            classification.formatted_number,
            info.verification_method.description()
        );
    }

    let nin_field = exact_length(0).or(eleven_digits());
    match nin_field.validate("1234") {
        Ok(()) => println!("nin: ok"),
        Err(e) => println!("nin: {e}"),
    }
}
