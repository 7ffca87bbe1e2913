//! Pure validators for primitive user input.
//!
//! Invalid input is reported as a returned [`InvalidInput`] value, never a
//! panic. Every `InvalidInput` renders with a leading `Invalid` so callers can
//! display or pattern-match it directly.
//!
//! The typed functions cover callers that already hold Rust values. The
//! `*_value` variants accept raw `serde_json::Value`s at the external boundary,
//! where the type of a field is not yet known.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Minimum trimmed length accepted by [`validate_user_input`].
pub const MIN_INPUT_USERNAME_LEN: usize = 3;

/// Minimum age accepted by [`validate_user_input`].
pub const MIN_USER_AGE: u32 = 18;

/// Reason an input was rejected by a validator or rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("Invalid price: {0}")]
    Price(String),
    #[error("Invalid discount code: {0}")]
    DiscountCode(String),
    #[error("Invalid username: {0}")]
    Username(String),
    #[error("Invalid age: {0}")]
    Age(String),
    #[error("Invalid country code: {0}")]
    CountryCode(String),
}

/// Inclusive character-count bounds for usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernamePolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl UsernamePolicy {
    pub const fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    pub fn is_valid(&self, name: &str) -> bool {
        let len = name.chars().count();
        len >= self.min_length && len <= self.max_length
    }
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self::new(5, 15)
    }
}

/// Checks `name` against the default [`UsernamePolicy`] (5 to 15 characters).
pub fn is_valid_username(name: &str) -> bool {
    UsernamePolicy::default().is_valid(name)
}

/// True iff `min <= price <= max`.
pub fn is_price_in_range<T: PartialOrd>(price: T, min: T, max: T) -> bool {
    price >= min && price <= max
}

/// Normalized payload of a successful [`validate_user_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub username: String,
    pub age: u32,
}

impl fmt::Display for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation successful")
    }
}

pub fn validate_user_input(username: &str, age: u32) -> Result<UserInput, InvalidInput> {
    let username = username.trim();

    if username.chars().count() < MIN_INPUT_USERNAME_LEN {
        return Err(InvalidInput::Username(format!(
            "must be at least {MIN_INPUT_USERNAME_LEN} characters"
        )));
    }

    if age < MIN_USER_AGE {
        return Err(InvalidInput::Age(format!("must be {MIN_USER_AGE} or older")));
    }

    Ok(UserInput {
        username: username.to_string(),
        age,
    })
}

/// Boundary variant of [`validate_user_input`] for untyped input.
///
/// When several fields are wrong, only one of the violations is reported.
pub fn validate_user_input_value(username: &Value, age: &Value) -> Result<UserInput, InvalidInput> {
    let Some(username) = username.as_str() else {
        return Err(InvalidInput::Username("must be a string".to_string()));
    };
    let Some(age) = age.as_f64() else {
        return Err(InvalidInput::Age("must be a number".to_string()));
    };
    if age < f64::from(MIN_USER_AGE) {
        return Err(InvalidInput::Age(format!("must be {MIN_USER_AGE} or older")));
    }

    // Saturating cast: anything at or above the minimum fits the payload.
    validate_user_input(username, age as u32)
}
