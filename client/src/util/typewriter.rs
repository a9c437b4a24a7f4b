//! Typewriter reveal used for the contact details.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay between revealed characters.
pub const TYPEWRITER_STEP_MS: u32 = 30;

/// First `shown` characters of `text`.
pub fn typed_prefix(text: &str, shown: usize) -> String {
    text.chars().take(shown).collect()
}

/// Whether `shown` characters already cover all of `text`.
pub fn is_complete(text: &str, shown: usize) -> bool {
    shown >= text.chars().count()
}
