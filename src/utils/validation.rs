use crate::utils::error::{MailerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MailerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MailerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Rejects empty and whitespace-only values. `redact` keeps secrets out of the error.
pub fn validate_non_empty_string(field_name: &str, value: &str, redact: bool) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: if redact {
                "<redacted>".to_string()
            } else {
                value.to_string()
            },
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
        return Err(MailerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://api.openai.com/v1").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 60u64, 1, 600).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 600).is_err());
        assert!(validate_range("timeout_seconds", 601u64, 1, 600).is_err());
    }

    #[test]
    fn test_non_empty_string_redacts_secrets() {
        match validate_non_empty_string("api_key", "   ", true) {
            Err(MailerError::InvalidConfigValueError { value, .. }) => {
                assert_eq!(value, "<redacted>")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(validate_non_empty_string("model", "gpt-3.5-turbo", false).is_ok());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("sk-test".to_string());
        assert_eq!(validate_required_field("api_key", &present).unwrap(), "sk-test");

        let absent: Option<String> = None;
        assert!(matches!(
            validate_required_field("api_key", &absent),
            Err(MailerError::MissingConfigError { .. })
        ));
    }
}
