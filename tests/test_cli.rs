use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// agentctl isolated from the caller's HOME, credentials and overrides
fn agentctl(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agentctl"));
    cmd.env("HOME", home.path())
        .env_remove("LYZR_API_KEY")
        .env_remove("AGENTCTL_API_KEY")
        .env_remove("AGENTCTL_BASE_URL")
        .env_remove("AGENTCTL_AGENT_ID")
        .env_remove("AGENTCTL_DEFINITION")
        .env_remove("AGENTCTL_TIMEOUT")
        .current_dir(home.path());
    cmd
}

#[test]
fn test_help_output() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create and reconcile hosted agents"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("create"));
}

#[test]
fn test_version_output() {
    let home = TempDir::new().unwrap();
    let output = agentctl(&home).arg("--version").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);

    assert!(stdout.starts_with("agentctl "));
    let version_part = stdout.strip_prefix("agentctl ").unwrap().trim();
    assert!(
        version_part.chars().next().unwrap().is_numeric(),
        "Version should start with a number: {}",
        version_part
    );
}

#[test]
fn test_version_subcommand() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("agentctl "));
}

#[test]
fn test_update_help() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .args(["update", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--agent-id"))
        .stdout(predicate::str::contains("--definition"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn test_reconcile_alias() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .args(["reconcile", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--definition"));
}

#[test]
fn test_presets_listing() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("readme-builder"));
}

#[test]
fn test_zero_timeout_rejected_by_parser() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .args(["show", "--agent-id", "abc", "--timeout", "0"])
        .assert()
        .failure();
}

#[test]
fn test_config_validate_without_files() {
    let home = TempDir::new().unwrap();
    agentctl(&home)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found (optional)"))
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_invalid_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("broken.toml");
    std::fs::write(&file, "[api\n").unwrap();

    agentctl(&home)
        .args(["config", "validate"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_config_show_hides_key_value() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".agentctl.toml"),
        "[agent]\nid = \"abc123\"\ndefinition = \"agents/builder.yaml\"\n",
    )
    .unwrap();

    agentctl(&home)
        .args(["config", "show"])
        .env("LYZR_API_KEY", "very-secret-value")
        .assert()
        .success()
        .stdout(predicate::str::contains("id: abc123"))
        .stdout(predicate::str::contains("builder.yaml (missing)"))
        .stdout(predicate::str::contains("LYZR_API_KEY (set)"))
        .stdout(predicate::str::contains("very-secret-value").not());
}
