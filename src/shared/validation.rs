use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating category display colors
    /// Must be a `#` followed by exactly six hex digits
    /// - Valid: "#f59e0b", "#2B7A0B"
    /// - Invalid: "f59e0b", "#fff", "#f59e0bff", "orange"
    pub static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Rejects strings that are empty once surrounding whitespace is removed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("Value is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_regex_valid() {
        assert!(HEX_COLOR_REGEX.is_match("#f59e0b"));
        assert!(HEX_COLOR_REGEX.is_match("#2B7A0B"));
        assert!(HEX_COLOR_REGEX.is_match("#000000"));
    }

    #[test]
    fn test_hex_color_regex_invalid() {
        assert!(!HEX_COLOR_REGEX.is_match("f59e0b")); // missing hash
        assert!(!HEX_COLOR_REGEX.is_match("#fff")); // short form
        assert!(!HEX_COLOR_REGEX.is_match("#f59e0bff")); // alpha channel
        assert!(!HEX_COLOR_REGEX.is_match("orange"));
        assert!(!HEX_COLOR_REGEX.is_match(""));
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Route").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \n").is_err());
    }
}
