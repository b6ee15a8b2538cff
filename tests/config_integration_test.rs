use anyhow::Result;
use httpmock::prelude::*;
use qualifier_runner::{HttpWorkflow, QualifierError, RunOutcome, Runner, TomlConfig};
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

/// 從檔案載入配置並跑完整流程
#[tokio::test]
async fn test_run_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let config_content = format!(
        r#"
[candidate]
name = "Jane Roe"
reg_no = "${{QUALIFIER_IT_REG_NO}}"
email = "jane@example.com"

[api]
generate_url = "{}"
submit_url = "{}"
auth_scheme = "bearer"
"#,
        server.url("/generate"),
        server.url("/submit")
    );

    let config_path = temp_dir.path().join("qualifier.toml");
    tokio::fs::write(&config_path, config_content).await?;

    std::env::set_var("QUALIFIER_IT_REG_NO", "22BCE1002");
    let config = TomlConfig::from_file(&config_path)?.into_run_config()?;
    std::env::remove_var("QUALIFIER_IT_REG_NO");

    assert_eq!(config.reg_no, "22BCE1002");

    let generate_mock = server.mock(|when, then| {
        when.method(POST).path("/generate").json_body(serde_json::json!({
            "name": "Jane Roe",
            "regNo": "22BCE1002",
            "email": "jane@example.com"
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"accessToken": "file-token"}));
    });

    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/submit")
            .header("authorization", "Bearer file-token");
        then.status(200).body("accepted");
    });

    let outcome = Runner::new(HttpWorkflow::new(config)).run().await;

    generate_mock.assert();
    submit_mock.assert();
    assert!(matches!(outcome, RunOutcome::Submitted(ref r) if r.body == "accepted"));

    Ok(())
}

#[tokio::test]
async fn test_incomplete_config_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("qualifier.toml");
    tokio::fs::write(
        &config_path,
        r#"
[candidate]
name = "Jane Roe"
reg_no = "22BCE1002"
email = "jane@example.com"

[api]
generate_url = "https://api.example.com/generate"
"#,
    )
    .await?;

    let config = assert_ok!(TomlConfig::from_file(&config_path));
    let err = assert_err!(config.into_run_config());
    assert!(matches!(
        err,
        QualifierError::MissingConfig { ref field } if field == "api.submit_url"
    ));

    Ok(())
}
