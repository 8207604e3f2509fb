//! Reference codec - delimited code lists
//!
//! Converts between a record's decoded reference-code list and the single
//! human-editable string the analyst types into a link field (`"H1, H2"`).
//!
//! Parsing is deliberately tolerant: tokens are trimmed, empty tokens are
//! dropped, order is preserved, and duplicates are kept (deduplication is a
//! caller concern). Round-trip law: `split(&join(xs)) == xs` for any `xs`
//! of trimmed, non-empty, comma-free entries.

/// Join codes into the human-editable delimited form
///
/// # Example
/// ```
/// assert_eq!(resafe_record::codes::join(&["H1", "H2"]), "H1, H2");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split a delimited code string into its trimmed, non-empty tokens
///
/// # Example
/// ```
/// assert_eq!(
///     resafe_record::codes::split(" H1 ,, H2,"),
///     vec!["H1".to_string(), "H2".to_string()]
/// );
/// ```
#[must_use]
pub fn split(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
