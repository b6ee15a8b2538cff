use crate::config::toml_config::TomlConfig;
use crate::domain::model::AuthScheme;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "qualifier-runner")]
#[command(about = "Register for a webhook token and submit the SQL answer")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "qualifier.toml")]
    pub config: String,

    /// Override candidate.name
    #[arg(long)]
    pub name: Option<String>,

    /// Override candidate.reg_no
    #[arg(long)]
    pub reg_no: Option<String>,

    /// Override candidate.email
    #[arg(long)]
    pub email: Option<String>,

    /// Override api.generate_url
    #[arg(long)]
    pub generate_url: Option<String>,

    /// Override api.submit_url
    #[arg(long)]
    pub submit_url: Option<String>,

    /// Override api.auth_scheme (raw | bearer)
    #[arg(long)]
    pub auth_scheme: Option<AuthScheme>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the resolved configuration and query without sending any request
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋檔案中的設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        let overrides = [
            (&self.name, &mut config.candidate.name),
            (&self.reg_no, &mut config.candidate.reg_no),
            (&self.email, &mut config.candidate.email),
            (&self.generate_url, &mut config.api.generate_url),
            (&self.submit_url, &mut config.api.submit_url),
        ];

        for (value, target) in overrides {
            if let Some(value) = value {
                *target = Some(value.clone());
            }
        }

        if let Some(scheme) = self.auth_scheme {
            config.api.auth_scheme = Some(scheme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file_values() {
        let cli = CliConfig::parse_from([
            "qualifier-runner",
            "--reg-no",
            "REG99",
            "--auth-scheme",
            "bearer",
        ]);
        let mut config = TomlConfig::from_toml_str(
            r#"
[candidate]
name = "John Doe"
reg_no = "REG12347"
"#,
        )
        .unwrap();

        cli.apply_overrides(&mut config);

        assert_eq!(cli.config, "qualifier.toml");
        assert_eq!(config.candidate.name.as_deref(), Some("John Doe"));
        assert_eq!(config.candidate.reg_no.as_deref(), Some("REG99"));
        assert_eq!(config.api.auth_scheme, Some(AuthScheme::Bearer));
    }

    #[test]
    fn test_cli_rejects_unknown_auth_scheme() {
        let result = CliConfig::try_parse_from(["qualifier-runner", "--auth-scheme", "basic"]);
        assert!(result.is_err());
    }
}
