//! System configuration through `ladder config`

use crate::common::TestProject;
use crate::ladder;
use anyhow::Result;

#[test]
fn test_config_path_uses_env_override() -> Result<()> {
    let project = TestProject::new()?;

    let result = ladder!(project.path(), "config", "path").assert_success()?;
    assert!(result.contains_stdout("ladder-config.toml"));
    assert!(!project.config_path().exists());

    ladder!(project.path(), "config", "path", "--create").assert_success()?;
    assert!(project.config_path().exists());
    Ok(())
}

#[test]
fn test_custom_environments_become_labels() -> Result<()> {
    let project = TestProject::new()?;

    ladder!(project.path(), "config", "set", "environments.custom", "qa, preview")
        .assert_success()?;
    let result = ladder!(project.path(), "config", "get", "environments.custom")
        .assert_success()?;
    assert_eq!(result.stdout.trim(), "qa,preview");

    ladder!(project.path(), "open", "--label", "qa").assert_success()?;
    assert_eq!(project.show()?["label"], "qa");
    Ok(())
}

#[test]
fn test_default_label_must_resolve() -> Result<()> {
    let project = TestProject::new()?;

    ladder!(project.path(), "config", "set", "draft.default_label", "preview")
        .assert_failure()?;

    ladder!(project.path(), "config", "set", "draft.default_label", "staging")
        .assert_success()?;
    ladder!(project.path(), "open").assert_success()?;
    assert_eq!(project.show()?["label"], "staging");
    Ok(())
}

#[test]
fn test_unknown_key_rejected() -> Result<()> {
    let project = TestProject::new()?;
    let result = ladder!(project.path(), "config", "get", "draft.label").assert_failure()?;
    assert!(result.contains_stderr("Unknown config key"));
    Ok(())
}
