//! # String Case Helpers
//!
//! Conversions between Go-style `CamelCase` identifiers and `snake_case` names.

use heck::{ToPascalCase, ToSnakeCase};

/// Converts `CamelCase` to `snake_case` (`HTTPServer` -> `http_server`).
pub fn camel_to_snake(s: &str) -> String {
    s.to_snake_case()
}

/// Converts `snake_case` to `CamelCase` (`user_id` -> `UserId`).
pub fn snake_to_camel(s: &str) -> String {
    s.to_pascal_case()
}

/// Upper-cases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a `CamelCase` identifier into its words.
///
/// A run of upper-case letters stays together, except that its last letter
/// opens the next word when a lower-case letter follows it.
///
/// ```
/// use gostruct_core::strcase::split_camel_case;
///
/// assert_eq!(split_camel_case("HTTPServer"), vec!["HTTP", "Server"]);
/// assert_eq!(split_camel_case("userID"), vec!["user", "ID"]);
/// ```
pub fn split_camel_case(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut words = Vec::new();

    let mut last = 0;
    let mut i = 0;
    while i < n {
        let j = find_word_end(&chars, i);
        if j > last {
            words.push(chars[last..j].iter().collect());
        }
        last = j;
        i = j + 1;
    }
    if last < n {
        words.push(chars[last..].iter().collect());
    }
    words
}

// Digits count as neither case, everything else that is not lower-case counts as upper.
fn is_upper(c: char) -> bool {
    !c.is_lowercase() && !c.is_ascii_digit()
}

fn is_lower(c: char) -> bool {
    !c.is_uppercase() && !c.is_ascii_digit()
}

fn find_word_end(chars: &[char], i: usize) -> usize {
    let j = next_matching(chars, i, is_lower);
    if j >= chars.len() {
        return j;
    }
    if j == i {
        return next_matching(chars, j + 1, is_upper);
    }
    // j - 1 is the last upper-case letter of the run and starts the next word
    j - 1
}

fn next_matching(chars: &[char], mut i: usize, pred: fn(char) -> bool) -> usize {
    while i < chars.len() && !pred(chars[i]) {
        i += 1;
    }
    i
}
