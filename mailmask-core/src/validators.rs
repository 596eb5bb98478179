// File: mailmask-core/src/validators.rs
//! Programmatic validation functions for specific sensitive data types.
//!
//! This module provides additional validation logic beyond regular expression
//! matching. Rules opt into it with `programmatic_validation: true`; the
//! default rule set leaves it off so detection stays purely regex-driven.
//!
//! License: MIT OR APACHE 2.0

/// Dispatches a matched string to the validator for its rule, if one exists.
///
/// Rules without a registered validator always pass.
pub fn run_programmatic_validator(rule_name: &str, matched: &str) -> bool {
    match rule_name {
        "credit_debit_no" => is_valid_card_number_programmatically(matched),
        _ => true,
    }
}

/// Validates a number using the Luhn algorithm.
///
/// The Luhn algorithm, also known as the Mod 10 algorithm, is a simple
/// checksum formula used to validate a variety of identification numbers,
/// such as credit card numbers.
pub fn is_valid_luhn(num_str: &str) -> bool {
    let mut sum = 0;
    let mut alternate = false;

    for c in num_str.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

/// Validates a card number candidate by stripping separators and applying
/// the Luhn checksum to the remaining digits.
pub fn is_valid_card_number_programmatically(card_number: &str) -> bool {
    let digits: String = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    is_valid_luhn(&digits)
}
