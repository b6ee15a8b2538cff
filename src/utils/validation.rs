use crate::utils::error::{QualifierError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QualifierError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    // 只做最基本的檢查，真正的驗證交給註冊服務
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Email must look like local@domain".to_string(),
        }),
    }
}

/// 環境變數未設定時 `${VAR}` 會原樣留下，不能當成真正的值送出
pub fn validate_no_placeholder(field_name: &str, value: &str) -> Result<()> {
    let unresolved = value
        .find("${")
        .is_some_and(|start| value[start..].contains('}'));
    if unresolved {
        return Err(QualifierError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Unresolved environment placeholder; set the referenced variable".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| QualifierError::MissingConfig {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.generate_url", "https://example.com/generate").is_ok());
        assert!(validate_url("api.generate_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api.generate_url", "").is_err());
        assert!(validate_url("api.generate_url", "invalid-url").is_err());
        assert!(validate_url("api.generate_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("candidate.name", "John Doe").is_ok());
        assert!(validate_non_empty_string("candidate.name", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("candidate.email", "john@example.com").is_ok());
        assert!(validate_email("candidate.email", "john.example.com").is_err());
        assert!(validate_email("candidate.email", "@example.com").is_err());
        assert!(validate_email("candidate.email", "").is_err());
    }

    #[test]
    fn test_validate_no_placeholder() {
        assert!(validate_no_placeholder("candidate.name", "John Doe").is_ok());
        assert!(validate_no_placeholder("candidate.name", "cost: $5 {approx}").is_ok());
        assert!(validate_no_placeholder("candidate.name", "${QUALIFIER_NAME}").is_err());
        assert!(validate_no_placeholder("api.submit_url", "https://host/${PATH}/x").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("REG12347".to_string());
        let missing: Option<String> = None;

        assert_eq!(
            validate_required_field("candidate.reg_no", &present).unwrap(),
            "REG12347"
        );
        assert!(matches!(
            validate_required_field("candidate.reg_no", &missing),
            Err(QualifierError::MissingConfig { .. })
        ));
    }
}
