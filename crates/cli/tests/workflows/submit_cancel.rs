//! Ending a session: submit writes the payload, cancel drops the draft

use crate::common::TestProject;
use crate::ladder;
use anyhow::Result;

#[test]
fn test_export_matches_draft() -> Result<()> {
    let project = TestProject::opened()?;

    let payload = ladder!(project.path(), "export").assert_success()?.json()?;
    assert_eq!(payload["label"], "development");
    assert_eq!(payload["schedule"][0]["every"], 15);
    assert_eq!(payload["schedule"][0]["unit"], "minutes");
    assert_eq!(payload["schedule"][0]["repeat"], 4);

    let public = ladder!(project.path(), "export", "--public")
        .assert_success()?
        .json()?;
    assert_eq!(public["schedule"][2]["interval"], 7);
    assert_eq!(public["schedule"][2]["unit"], "days");
    assert_eq!(public["schedule"][2]["retention"], 4);
    Ok(())
}

#[test]
fn test_submit_writes_outbox_and_clears_draft() -> Result<()> {
    let project = TestProject::opened()?;

    let receipt = ladder!(project.path(), "submit", "--json")
        .assert_success()?
        .json()?;
    assert_eq!(receipt["label"], "development");
    assert_eq!(receipt["rows"], 3);
    assert!(!project.draft_path().exists());

    let written: Vec<_> = std::fs::read_dir(project.outbox_dir())?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .collect();
    assert_eq!(written.len(), 1);

    let payload: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(written[0].path())?)?;
    assert_eq!(payload["schedule"].as_array().map(Vec::len), Some(3));

    // Nothing left to edit
    ladder!(project.path(), "show").assert_failure()?;
    Ok(())
}

#[test]
fn test_submit_to_explicit_outbox() -> Result<()> {
    let project = TestProject::opened()?;
    let outbox = project.path().join("spool");

    ladder!(project.path(), "submit", "--outbox", outbox.to_str().unwrap_or_default())
        .assert_success()?;
    assert_eq!(std::fs::read_dir(&outbox)?.count(), 1);
    Ok(())
}

#[test]
fn test_cancel_discards_draft() -> Result<()> {
    let project = TestProject::opened()?;

    let result = ladder!(project.path(), "cancel").assert_success()?;
    assert!(result.contains_stdout("Draft discarded"));
    assert!(!project.draft_path().exists());
    assert!(!project.outbox_dir().exists());

    let result = ladder!(project.path(), "cancel").assert_success()?;
    assert!(result.contains_stdout("No draft to discard"));
    Ok(())
}
