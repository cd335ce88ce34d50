//! Field validation for person records

use crate::error::ValidationError;
use crate::types::{MAX_AGE, Person};

/// Characters accepted in plain ASCII names
const NAME_CHAR_SET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ '-.";

/// Minimum trimmed name length
pub const MIN_NAME_LEN: usize = 1;

/// Maximum trimmed name length
pub const MAX_NAME_LEN: usize = 100;

static NAME_CHARS: [bool; 256] = build_name_chars();

const fn build_name_chars() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < NAME_CHAR_SET.len() {
        table[NAME_CHAR_SET[i] as usize] = true;
        i += 1;
    }
    table
}

/// Check that a string's trimmed length (in characters) lies in `min..=max`
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ValidationError::NameLength { min, max, len });
    }
    Ok(())
}

/// Validate a first or last name
///
/// Names made only of ASCII are limited to letters, space, apostrophe, hyphen
/// and period. Names containing any non-ASCII character skip the character
/// check so that accented and non-Latin names are accepted.
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    validate_length(value, MIN_NAME_LEN, MAX_NAME_LEN)?;

    if !value.is_ascii() {
        return Ok(());
    }

    if value.bytes().all(|b| NAME_CHARS[usize::from(b)]) {
        Ok(())
    } else {
        Err(ValidationError::NameCharacters(value.to_string()))
    }
}

/// Validate an age in years
pub fn validate_age(age: i64) -> Result<u8, ValidationError> {
    match u8::try_from(age) {
        Ok(a) if usize::from(a) <= MAX_AGE => Ok(a),
        _ => Err(ValidationError::AgeOutOfRange(age)),
    }
}

/// Build a [`Person`] from already trimmed fields
pub fn validate_person(
    first_name: &str,
    last_name: &str,
    age: i64,
) -> Result<Person, ValidationError> {
    let age = validate_age(age)?;
    validate_name(first_name)?;
    validate_name(last_name)?;

    Ok(Person {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
    })
}
