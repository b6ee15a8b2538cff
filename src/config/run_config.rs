use crate::core::query;
use crate::domain::model::AuthScheme;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email, validate_no_placeholder, validate_non_empty_string, validate_url, Validate,
};

/// 單次執行使用的不可變配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub name: String,
    pub reg_no: String,
    pub email: String,
    pub generate_url: String,
    pub submit_url: String,
    pub auth_scheme: AuthScheme,
}

impl RunConfig {
    /// `--dry-run` 輸出：配置摘要與將要提交的 SQL，不會送出任何請求
    pub fn summary(&self) -> String {
        let selection = query::select_query(&self.reg_no);

        let lines = [
            "📋 Configuration Summary:".to_string(),
            format!("  Name: {}", self.name),
            format!("  Registration No: {}", self.reg_no),
            format!("  Email: {}", self.email),
            format!("  Generate URL: {}", self.generate_url),
            format!("  Submit URL: {}", self.submit_url),
            format!("  Auth Scheme: {}", self.auth_scheme),
            String::new(),
            format!(
                "🧮 Last two digits: {} ({:?})",
                selection.last_two_digits, selection.parity
            ),
            "📝 Query:".to_string(),
            selection.sql.to_string(),
        ];
        lines.join("\n")
    }
}

impl ConfigProvider for RunConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn reg_no(&self) -> &str {
        &self.reg_no
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn generate_url(&self) -> &str {
        &self.generate_url
    }

    fn submit_url(&self) -> &str {
        &self.submit_url
    }

    fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("candidate.name", &self.name),
            ("candidate.reg_no", &self.reg_no),
            ("candidate.email", &self.email),
            ("api.generate_url", &self.generate_url),
            ("api.submit_url", &self.submit_url),
        ] {
            validate_no_placeholder(field, value)?;
        }

        validate_non_empty_string("candidate.name", &self.name)?;
        validate_non_empty_string("candidate.reg_no", &self.reg_no)?;
        validate_email("candidate.email", &self.email)?;
        validate_url("api.generate_url", &self.generate_url)?;
        validate_url("api.submit_url", &self.submit_url)?;
        Ok(())
    }
}
