//! Shared case conversion functions for name derivation.

/// Target casing for [`underline_to_hump`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Hump {
    /// Small hump, leading lowercase (e.g. "userId").
    #[default]
    Camel,
    /// Big hump, leading uppercase (e.g. "UserId").
    Pascal,
}

impl From<bool> for Hump {
    /// `true` selects the big hump.
    fn from(big: bool) -> Self {
        if big { Hump::Pascal } else { Hump::Camel }
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Convert a separated string to camelCase or PascalCase.
///
/// Every separator (`_`, `-` or whitespace) directly followed by an ASCII word
/// character is removed and that character is uppercased. Matches never
/// overlap, so `"a__b"` becomes `"a_b"`. Afterwards the first character is
/// forced to the case requested by `hump`.
pub fn underline_to_hump(name: &str, hump: Hump) -> String {
    let mut humped = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if is_separator(c) && (next.is_ascii_alphanumeric() || next == '_') => {
                humped.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => humped.push(c),
        }
    }

    let mut chars = humped.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => match hump {
            Hump::Camel => first.to_lowercase().chain(chars).collect(),
            Hump::Pascal => first.to_uppercase().chain(chars).collect(),
        },
    }
}

/// Convert a string to camelCase (e.g., "user_profile_id" -> "userProfileId")
pub fn to_camel_case(s: &str) -> String {
    underline_to_hump(s, Hump::Camel)
}

/// Convert a string to PascalCase (e.g., "my-project" -> "MyProject")
pub fn to_pascal_case(s: &str) -> String {
    underline_to_hump(s, Hump::Pascal)
}

/// Uppercase the first character and lowercase the rest (e.g., "GET" -> "Get")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
    }
}
