use crate::domain::model::RunOutcome;
use crate::domain::ports::Workflow;

pub struct Runner<W: Workflow> {
    workflow: W,
}

impl<W: Workflow> Runner<W> {
    pub fn new(workflow: W) -> Self {
        Self { workflow }
    }

    pub async fn run(&self) -> RunOutcome {
        tracing::info!("🚀 Application starting...");

        // Step 1: 註冊並取得 access token
        let webhook = match self.workflow.register().await {
            Some(webhook) => webhook,
            None => {
                tracing::error!("❌ Failed to generate webhook. Exiting.");
                return RunOutcome::RegistrationFailed;
            }
        };
        let Some(access_token) = webhook.access_token() else {
            tracing::error!("❌ Webhook response carried no access token. Exiting.");
            return RunOutcome::RegistrationFailed;
        };
        tracing::info!("✅ Successfully generated webhook. Access token received.");
        if let Some(url) = &webhook.webhook_url {
            tracing::debug!("Webhook URL: {}", url);
        }

        // Step 2: 選出要提交的 SQL
        let selection = self.workflow.select_query();
        tracing::info!("Final SQL query to be submitted:\n{}", selection.sql);

        // Step 3: 提交
        match self.workflow.submit(access_token, selection.sql).await {
            Some(receipt) => RunOutcome::Submitted(receipt),
            None => RunOutcome::SubmissionFailed,
        }
    }
}
