use crate::domain::model::{AuthScheme, QuerySelection, SubmissionReceipt, WebhookResponse};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn name(&self) -> &str;
    fn reg_no(&self) -> &str;
    fn email(&self) -> &str;
    fn generate_url(&self) -> &str;
    fn submit_url(&self) -> &str;
    fn auth_scheme(&self) -> AuthScheme;
}

/// 三個步驟依序執行，失敗在各步驟內記錄，不往上傳遞
#[async_trait]
pub trait Workflow: Send + Sync {
    async fn register(&self) -> Option<WebhookResponse>;
    fn select_query(&self) -> QuerySelection;
    async fn submit(&self, access_token: &str, final_query: &str) -> Option<SubmissionReceipt>;
}
