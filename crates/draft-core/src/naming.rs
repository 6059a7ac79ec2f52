//! Identifier sanitization for generated class names and element names.

use std::sync::OnceLock;

use regex::Regex;

/// Characters that cannot appear in a class selector or JSX identifier.
fn special_letters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s=&#/]").expect("valid pattern"))
}

fn needs_index_access() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.\-_]").expect("valid pattern"))
}

/// Strip whitespace and `= & # /` from a display name.
pub fn sanitize(name: &str) -> String {
    special_letters().replace_all(name, "").into_owned()
}

/// Remove whitespace only.
pub fn strip_whitespace(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sanitized class name is not a valid JS property identifier and must be
/// accessed with `styles["..."]`.
pub fn needs_bracket_access(class_name: &str) -> bool {
    needs_index_access().is_match(class_name)
}
