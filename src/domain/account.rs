use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Body of the email sent after a successful signup.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Standard `local@domain.tld` address-format check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// One-time code emailed on login.
///
/// Opaque to this crate: it is generated by a [`SecurityCodes`] port and only
/// ever rendered to a string.
///
/// [`SecurityCodes`]: crate::domain::ports::SecurityCodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCode(u32);

impl SecurityCode {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl From<u32> for SecurityCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("fide@domain.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("a"));
        assert!(!is_valid_email("fide@domain"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("fide@@domain.com"));
        assert!(!is_valid_email("fide @domain.com"));
    }

    #[test]
    fn test_security_code_renders_as_number() {
        assert_eq!(SecurityCode::new(123456).to_string(), "123456");
        assert_eq!(SecurityCode::from(7).to_string(), "7");
    }
}
