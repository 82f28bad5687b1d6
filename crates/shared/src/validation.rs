//! Form text validation utilities.

use validator::ValidationError;

/// Validates that a value still has content once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Trims a submitted form field, treating a missing field as empty.
pub fn trim_field(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// First code point of each non-ASCII decimal digit block accepted in forms:
/// Arabic-Indic, Extended Arabic-Indic (Urdu), Devanagari, Bengali, Gurmukhi,
/// Gujarati and full-width digits.
const DIGIT_ZEROS: [u32; 7] = [0x0660, 0x06F0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0xFF10];

fn decimal_digit(c: char) -> Option<u32> {
    if c.is_ascii() {
        return c.to_digit(10);
    }
    DIGIT_ZEROS
        .iter()
        .map(|zero| (c as u32).wrapping_sub(*zero))
        .find(|offset| *offset < 10)
}

/// Parses a submitted whole number, tolerating surrounding whitespace.
///
/// Accepts an optional sign, digits from the scripts in [`DIGIT_ZEROS`], and
/// single underscores between digits (`1_000`). Returns `None` for anything
/// else, including values outside `i32`.
pub fn parse_whole_number(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    let mut after_underscore = false;

    for c in digits.chars() {
        if c == '_' {
            if !seen_digit || after_underscore {
                return None;
            }
            after_underscore = true;
            continue;
        }

        let digit = decimal_digit(c)?;
        value = value.checked_mul(10)?.checked_add(i64::from(digit))?;
        seen_digit = true;
        after_underscore = false;
    }

    if !seen_digit || after_underscore {
        return None;
    }

    i32::try_from(if negative { -value } else { value }).ok()
}
