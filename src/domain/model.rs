use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 註冊請求 body: `{name, regNo, email}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

/// 註冊端點的回應。`accessToken` 缺少時視為失敗，而不是解析錯誤。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[serde(default, rename = "webhook", alias = "webhookUrl")]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl WebhookResponse {
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// 提交請求 body: `{finalQuery}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRequest {
    pub final_query: String,
}

/// 提交端點回傳的內容，只記錄不解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of(value: u32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySelection {
    pub last_two_digits: u32,
    pub parity: Parity,
    pub sql: &'static str,
}

/// `Authorization` header 的格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// `Authorization: <token>`
    #[default]
    Raw,
    /// `Authorization: Bearer <token>`
    Bearer,
}

impl AuthScheme {
    pub fn header_value(&self, token: &str) -> String {
        match self {
            AuthScheme::Raw => token.to_string(),
            AuthScheme::Bearer => format!("Bearer {}", token),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Raw => write!(f, "raw"),
            AuthScheme::Bearer => write!(f, "bearer"),
        }
    }
}

impl FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(AuthScheme::Raw),
            "bearer" => Ok(AuthScheme::Bearer),
            other => Err(format!(
                "unknown auth scheme '{}', expected 'raw' or 'bearer'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted(SubmissionReceipt),
    RegistrationFailed,
    SubmissionFailed,
}
