//! Phone number display formatting.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Format US numbers for display; anything else is returned unchanged.
///
/// Ten digits become `(xxx) xxx-xxxx`; eleven digits with a leading `1`
/// become `+1 (xxx) xxx-xxxx`.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..11])
        }
        _ => raw.to_owned(),
    }
}

/// `tel:` link using only the digits of `raw`.
#[must_use]
pub fn tel_href(raw: &str) -> String {
    format!("tel:{}", digits_only(raw))
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
