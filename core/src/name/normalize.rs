//! Folder display name → grading sheet name.
//!
//! Classifying name parts (first/middle/last) is delegated to the
//! `human_name` parser; this module only reassembles the parts into the
//! "Last,First[ Middle]" form the grading sheet uses.

use human_name::Name;

/// Convert a raw display name into `"Last,First"` or `"Last,First Middle"`.
///
/// Best effort: when the parser declines the input (single tokens, empty
/// strings) this falls back to a plain whitespace split, so the caller
/// always gets a value back.
pub fn convert_name_for_grading(name: &str) -> String {
    let Some(parsed) = Name::parse(name) else {
        return fallback_parts(name);
    };
    let first = parsed.given_name().unwrap_or_default();
    match parsed.middle_name() {
        Some(middle) => format!("{},{} {}", parsed.surname(), first, middle),
        None => format!("{},{}", parsed.surname(), first),
    }
}

fn fallback_parts(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => ",".to_string(),
        [only] => format!(",{only}"),
        [first, middle @ .., last] => {
            if middle.is_empty() {
                format!("{last},{first}")
            } else {
                format!("{last},{first} {}", middle.join(" "))
            }
        }
    }
}
