use assert_cmd::Command;
use predicates::prelude::*;

const KEY_VARS: &[&str] = &[
    "AI_PROVIDER",
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "DEEPSEEK_API_KEY",
    "GEMINI_API_KEY",
];

/// 사용자 설정/환경 변수와 격리된 comando 실행
fn comando(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("comando").unwrap();
    cmd.env("COMANDO_HOME", home.path());
    for var in KEY_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help() {
    let home = tempfile::tempdir().unwrap();
    comando(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate bash commands from natural language"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let home = tempfile::tempdir().unwrap();
    comando(&home).arg("--version").assert().success();
}

#[test]
fn test_missing_prompt_prints_usage() {
    let home = tempfile::tempdir().unwrap();
    comando(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("You must provide a prompt"))
        .stdout(predicate::str::contains("--provider"));
}

#[test]
fn test_unsupported_provider() {
    let home = tempfile::tempdir().unwrap();
    comando(&home)
        .args(["--provider", "mistral", "list", "files"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported AI provider: mistral"));
}

#[test]
fn test_missing_api_key_fails_before_network() {
    let home = tempfile::tempdir().unwrap();
    comando(&home)
        .args(["-p", "OPENAI", "list", "files"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The provider OpenAI requires an API key"))
        .stderr(predicate::str::contains("comando --config"));

    assert!(!home.path().join("history").exists());
}

#[test]
fn test_default_provider_from_config_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"defaultProvider": "deepseek"}"#,
    )
    .unwrap();

    comando(&home)
        .arg("show the date")
        .assert()
        .failure()
        .stderr(predicate::str::contains("The provider DeepSeek requires an API key"));
}

#[test]
fn test_env_provider_overrides_config_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"defaultProvider": "deepseek"}"#,
    )
    .unwrap();

    comando(&home)
        .env("AI_PROVIDER", "anthropic")
        .arg("show the date")
        .assert()
        .failure()
        .stderr(predicate::str::contains("The provider Anthropic Claude requires an API key"));
}

#[test]
fn test_transport_error_is_reported_once() {
    let home = tempfile::tempdir().unwrap();
    comando(&home)
        .env("OPENAI_API_KEY", "sk-x")
        .env("OPENAI_API_BASE", "http://127.0.0.1:1")
        .args(["-y", "-p", "openai", "list", "files"])
        .assert()
        .failure()
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("error sending request").count() == 1
        }))
        .stderr(predicate::str::contains("Failed to generate the command with OpenAI"));

    assert!(!home.path().join("history").exists());
}
