use crate::domain::validation::InvalidInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Countries with a known minimum driving age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Us,
    Uk,
}

impl CountryCode {
    pub const fn minimum_driving_age(self) -> u32 {
        match self {
            CountryCode::Us => 16,
            CountryCode::Uk => 17,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Uk => "UK",
        }
    }
}

impl FromStr for CountryCode {
    type Err = InvalidInput;

    /// Case-sensitive: only `US` and `UK` are recognised.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US" => Ok(CountryCode::Us),
            "UK" => Ok(CountryCode::Uk),
            other => Err(InvalidInput::CountryCode(format!(
                "unsupported country {other:?}"
            ))),
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether someone of `age` may drive in `country_code`.
///
/// Reaching the minimum age exactly is enough.
pub fn can_drive(age: u32, country_code: &str) -> Result<bool, InvalidInput> {
    let country: CountryCode = country_code.parse()?;
    Ok(age >= country.minimum_driving_age())
}

/// Boundary variant of [`can_drive`] for untyped input.
pub fn can_drive_value(age: &Value, country_code: &Value) -> Result<bool, InvalidInput> {
    let Some(country_code) = country_code.as_str() else {
        return Err(InvalidInput::CountryCode("must be a string".to_string()));
    };
    let country: CountryCode = country_code.parse()?;
    let Some(age) = age.as_f64() else {
        return Err(InvalidInput::Age("must be a number".to_string()));
    };

    Ok(age >= f64::from(country.minimum_driving_age()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_country_code() {
        let err = can_drive(3, "FR").unwrap_err();
        assert!(err.to_string().to_lowercase().contains("invalid"));
        assert!(can_drive(30, "us").is_err());
        assert!(can_drive(30, "").is_err());
    }

    #[test]
    fn test_us_driving_age() {
        assert!(!can_drive(15, "US").unwrap());
        assert!(can_drive(16, "US").unwrap());
        assert!(can_drive(17, "US").unwrap());
    }

    #[test]
    fn test_uk_driving_age() {
        assert!(!can_drive(16, "UK").unwrap());
        assert!(can_drive(17, "UK").unwrap());
        assert!(can_drive(18, "UK").unwrap());
    }

    #[test]
    fn test_untyped_country() {
        assert!(can_drive_value(&json!(20), &json!(1)).is_err());
        assert!(can_drive_value(&json!(20), &json!(null)).is_err());
        assert!(can_drive_value(&json!("20"), &json!("US")).is_err());
        assert!(can_drive_value(&json!(16.5), &json!("UK")).map(|ok| !ok).unwrap());
        assert!(can_drive_value(&json!(16), &json!("US")).unwrap());
    }

    #[test]
    fn test_country_round_trips_through_display() {
        assert_eq!("UK".parse::<CountryCode>().unwrap().to_string(), "UK");
    }
}
