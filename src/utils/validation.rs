use crate::utils::error::{FetchError, Result};
use std::collections::{HashMap, HashSet};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FetchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FetchError::InvalidConfigValueError {
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
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// header 名稱與值必須能被 HTTP 接受
pub fn validate_header(field_name: &str, name: &str, value: &str) -> Result<()> {
    if reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_err() {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Invalid header name".to_string(),
        });
    }
    if reqwest::header::HeaderValue::from_str(value).is_err() {
        return Err(FetchError::InvalidConfigValueError {
            field: format!("{}.{}", field_name, name),
            value: value.to_string(),
            reason: "Invalid header value".to_string(),
        });
    }
    Ok(())
}

/// HTTP header 名稱不分大小寫，同名不同大小寫的設定視為重複
pub fn validate_unique_headers(field_name: &str, headers: &HashMap<String, String>) -> Result<()> {
    let mut seen = HashSet::new();
    let mut names: Vec<&String> = headers.keys().collect();
    names.sort();

    for name in names {
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(FetchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Duplicate header name (names are case-insensitive)".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://jsonplaceholder.typicode.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080/api").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_header() {
        assert!(validate_header("headers", "X-Trace", "abc").is_ok());
        assert!(validate_header("headers", "bad header", "abc").is_err());
        assert!(validate_header("headers", "X-Trace", "line\nbreak").is_err());
    }

    #[test]
    fn test_validate_unique_headers() {
        let mut headers = HashMap::new();
        headers.insert("X-A".to_string(), "1".to_string());
        headers.insert("X-B".to_string(), "2".to_string());
        assert!(validate_unique_headers("headers", &headers).is_ok());

        headers.insert("x-a".to_string(), "3".to_string());
        assert!(validate_unique_headers("headers", &headers).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user_agent", "user-fetch/0.1").is_ok());
        assert!(validate_non_empty_string("user_agent", "   ").is_err());
    }
}
