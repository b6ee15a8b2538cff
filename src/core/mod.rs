pub mod query;
pub mod runner;
pub mod workflow;

pub use crate::domain::model::{QuerySelection, RunOutcome, SubmissionReceipt, WebhookResponse};
pub use crate::domain::ports::{ConfigProvider, Workflow};
pub use crate::utils::error::Result;
