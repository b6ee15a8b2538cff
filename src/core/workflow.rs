use crate::core::query;
use crate::domain::model::{
    QuerySelection, RegistrationRequest, SolutionRequest, SubmissionReceipt, WebhookResponse,
};
use crate::domain::ports::{ConfigProvider, Workflow};
use crate::utils::error::{QualifierError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};

pub struct HttpWorkflow<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpWorkflow<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            name: self.config.name().to_string(),
            reg_no: self.config.reg_no().to_string(),
            email: self.config.email().to_string(),
        }
    }

    async fn request_webhook(&self) -> Result<WebhookResponse> {
        let body = self.registration_request();
        tracing::debug!("Registration payload: {}", serde_json::to_string(&body)?);

        let response = self
            .client
            .post(self.config.generate_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Registration response status: {}", status);

        // 只接受 200，其他 2xx 也視為失敗
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(QualifierError::RegistrationRejected {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let webhook: WebhookResponse = serde_json::from_str(&text)?;

        if webhook.access_token().is_none() {
            return Err(QualifierError::MissingAccessToken);
        }

        Ok(webhook)
    }

    async fn post_solution(&self, access_token: &str, final_query: &str) -> Result<SubmissionReceipt> {
        let body = SolutionRequest {
            final_query: final_query.to_string(),
        };

        let response = self
            .client
            .post(self.config.submit_url())
            .header(
                AUTHORIZATION,
                self.config.auth_scheme().header_value(access_token),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(SubmissionReceipt { status, body })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Workflow for HttpWorkflow<C> {
    async fn register(&self) -> Option<WebhookResponse> {
        tracing::info!("📡 Sending registration request to {}", self.config.generate_url());

        match self.request_webhook().await {
            Ok(webhook) => Some(webhook),
            Err(e) => {
                tracing::error!(
                    "❌ Registration failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                None
            }
        }
    }

    fn select_query(&self) -> QuerySelection {
        query::select_query(self.config.reg_no())
    }

    async fn submit(&self, access_token: &str, final_query: &str) -> Option<SubmissionReceipt> {
        tracing::info!(
            "📤 Submitting solution to {} (auth: {})",
            self.config.submit_url(),
            self.config.auth_scheme()
        );

        match self.post_solution(access_token, final_query).await {
            Ok(receipt) => {
                tracing::info!(
                    "📬 Submission response - Status: {}, Body: {}",
                    receipt.status,
                    receipt.body
                );
                Some(receipt)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Submission failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                None
            }
        }
    }
}
