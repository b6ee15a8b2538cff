#[cfg(feature = "cli")]
pub mod cli;
pub mod run_config;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use run_config::RunConfig;
pub use toml_config::TomlConfig;
