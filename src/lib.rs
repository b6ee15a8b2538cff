pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{RunConfig, TomlConfig};

pub use crate::core::{runner::Runner, workflow::HttpWorkflow};
pub use domain::model::{AuthScheme, RunOutcome};
pub use utils::error::{QualifierError, Result};
