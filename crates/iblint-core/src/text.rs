//! String helpers shared by rules.

use regex::Regex;

/// Returns capture group 1 of every match of `pattern` in `text`.
///
/// Matches are non-overlapping and reported in order. Matches where group 1
/// did not participate are skipped.
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid regular expression.
pub fn capture_matches(text: &str, pattern: &str) -> Result<Vec<String>, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(captures_of(&regex, text))
}

/// Like [`capture_matches`] for an already compiled expression.
#[must_use]
pub fn captures_of(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Converts a snake_case token to camelCase.
///
/// `large_button` becomes `largeButton`. Segments after an underscore are
/// capitalised with the rest lower-cased. A token without underscores only
/// has its first character lower-cased, so camelCase input is unchanged.
#[must_use]
pub fn snake_to_camel_case(token: &str) -> String {
    if !token.contains('_') {
        return lowercase_first(token);
    }

    let mut out = String::with_capacity(token.len());
    for segment in token.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    lowercase_first(&out)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
