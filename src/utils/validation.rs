use crate::utils::error::{MtgError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MtgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MtgError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MtgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MtgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MtgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MtgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks shared by every configuration source that talks to the card API.
pub fn validate_api_settings(endpoint: &str, user_agent: &str, timeout_seconds: u64) -> Result<()> {
    validate_url("api.endpoint", endpoint)?;
    validate_non_empty_string("api.user_agent", user_agent)?;
    validate_positive_number("api.timeout_seconds", timeout_seconds, 1)?;
    validate_range("api.timeout_seconds", timeout_seconds, 1, 120)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.endpoint", "https://api.scryfall.com").is_ok());
        assert!(validate_url("api.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("api.endpoint", "").is_err());
        assert!(validate_url("api.endpoint", "invalid-url").is_err());
        assert!(validate_url("api.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_api_settings() {
        assert!(validate_api_settings("https://api.scryfall.com", "mtg-embed/0.1", 10).is_ok());
        assert!(validate_api_settings("https://api.scryfall.com", "   ", 10).is_err());
        assert!(validate_api_settings("https://api.scryfall.com", "mtg-embed/0.1", 0).is_err());
        assert!(validate_api_settings("https://api.scryfall.com", "mtg-embed/0.1", 300).is_err());
    }
}
