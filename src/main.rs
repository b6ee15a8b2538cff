use clap::Parser;
use qualifier_runner::config::toml_config::LogFormat;
use qualifier_runner::utils::logger;
use qualifier_runner::{CliConfig, HttpWorkflow, RunOutcome, Runner, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliConfig::parse();

    // 載入 TOML 配置；日誌格式由檔案決定，所以先載入再初始化日誌
    let loaded = TomlConfig::from_file(&args.config);
    let log_format = loaded
        .as_ref()
        .map(TomlConfig::log_format)
        .unwrap_or_default();
    match log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("📁 Loading configuration from: {}", args.config);
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    args.apply_overrides(&mut config);

    // 驗證配置
    let config = match config.into_run_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Configuration loaded and validated successfully");
    if args.verbose {
        tracing::debug!("Run config: {:?}", config);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No request will be sent");
        println!("{}", config.summary());
        return;
    }

    let runner = Runner::new(HttpWorkflow::new(config));

    // 不論結果如何都正常結束，失敗只記錄在日誌
    match runner.run().await {
        RunOutcome::Submitted(receipt) => {
            tracing::info!("🏁 Run finished with submission status {}", receipt.status);
        }
        RunOutcome::RegistrationFailed => {
            tracing::warn!("🏁 Run ended before submission: registration failed");
        }
        RunOutcome::SubmissionFailed => {
            tracing::warn!("🏁 Run ended: submission could not be delivered");
        }
    }
}
