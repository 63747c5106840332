//! Best-effort email shape check.
//!
//! This is a client-side hint, not RFC 5322 validation. It accepts common
//! addresses and rejects obviously malformed strings; the server remains the
//! authority on what a valid account email is.

use regex::Regex;
use std::sync::LazyLock;

/// `local-part@label.label.tld` with an ASCII word/hyphen/dot local part and a
/// 2-4 character final label.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("email pattern is valid")
});

/// Returns `true` if `input` looks like an email address.
///
/// The input is lowercased before matching. Surrounding whitespace is not
/// stripped here; callers trim first.
///
/// # Examples
///
/// ```
/// use login_form::domain::email::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("a@b.c"));
/// ```
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(&input.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "user@example.com",
            "first.last@example.com",
            "first-last@sub.example.org",
            "user_1@example.co.uk",
            "USER@EXAMPLE.COM",
            "a@b.io",
            "name@host.info",
        ] {
            assert!(is_valid_email(email), "expected {email} to be accepted");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "",
            "not-an-email",
            "a@b",
            "a@b.c",
            "@example.com",
            "user@",
            "user@.com",
            "user@example.museum",
            "user name@example.com",
            "user@exa mple.com",
            "user+tag@example.com",
        ] {
            assert!(!is_valid_email(email), "expected {email} to be rejected");
        }
    }

    #[test]
    fn test_word_characters_are_ascii_only() {
        assert!(!is_valid_email("jos\u{e9}@example.com"));
        assert!(!is_valid_email("user@exempl\u{e9}.com"));
    }

    #[test]
    fn test_loose_pattern_is_kept() {
        // Not RFC compliant on purpose: these pass the shape check.
        assert!(is_valid_email("..@example.com"));
        assert!(is_valid_email("user@-.com"));
        assert!(is_valid_email("user@example.c-m"));
    }

    #[test]
    fn test_surrounding_whitespace_is_not_trimmed() {
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com\n"));
    }
}
