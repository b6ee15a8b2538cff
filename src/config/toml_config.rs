use crate::config::run_config::RunConfig;
use crate::domain::model::AuthScheme;
use crate::utils::error::{QualifierError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub candidate: CandidateConfig,
    #[serde(default)]
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateConfig {
    pub name: Option<String>,
    pub reg_no: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub generate_url: Option<String>,
    pub submit_url: Option<String>,
    pub auth_scheme: Option<AuthScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QualifierError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${QUALIFIER_EMAIL})，找不到的變數保持原樣。
    /// 佔位符位於 TOML basic string 內，所以代入的值需要跳脫。
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QualifierError::ConfigParse {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name)
                .map(|value| escape_basic_string(&value))
                .unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .map(|l| l.format.clone())
            .unwrap_or_default()
    }

    /// 檢查必填欄位並產生不可變的執行配置
    pub fn into_run_config(self) -> Result<RunConfig> {
        let config = RunConfig {
            name: validate_required_field("candidate.name", &self.candidate.name)?.clone(),
            reg_no: validate_required_field("candidate.reg_no", &self.candidate.reg_no)?.clone(),
            email: validate_required_field("candidate.email", &self.candidate.email)?.clone(),
            generate_url: validate_required_field("api.generate_url", &self.api.generate_url)?
                .clone(),
            submit_url: validate_required_field("api.submit_url", &self.api.submit_url)?.clone(),
            auth_scheme: self.api.auth_scheme.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
