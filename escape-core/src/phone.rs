/// Longest digit run kept from the raw input.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Longest formatted value (`DDD-DDDD-DDDD`), used as the input's `maxlength`.
pub const MAX_PHONE_CHARS: usize = 13;

/// Normalise raw phone input into the grouped display form.
///
/// Every non-digit is stripped first, then the digits are grouped:
/// up to 3 digits stay as they are, 4-7 become `DDD-DDDD`, 8-10 become
/// `DDD-DDD-DDDD` and 11 or more are cut to 11 and become `DDD-DDDD-DDDD`.
#[must_use]
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        8..=10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}
