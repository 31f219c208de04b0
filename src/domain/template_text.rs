use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value::SignText;

/// Matches `{0}` through `{9}`. Multi-digit markers such as `{10}` are left alone.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[0-9]\}").expect("placeholder pattern is valid"));

/// Remove every single-digit placeholder marker from template text.
pub fn strip_placeholders(text: &str) -> String {
    PLACEHOLDER.replace_all(text, "").into_owned()
}

/// Length of the delivered message in characters.
///
/// The provider renders `【sign】` in front of the template, so the sign adds
/// two bracket characters on top of its own length. Parameters are counted as
/// given, on top of the template text with its placeholders already removed.
pub fn message_length(stripped_template: &str, sign: &SignText, params: &[String]) -> usize {
    let params_len: usize = params.iter().map(|param| param.chars().count()).sum();
    stripped_template.chars().count() + sign.as_str().chars().count() + 2 + params_len
}
