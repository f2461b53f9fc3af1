//! Open a draft, edit it row by row, and check the ladder rules hold

use crate::common::TestProject;
use crate::ladder;
use anyhow::Result;

#[test]
fn test_open_creates_default_ladder() -> Result<()> {
    let project = TestProject::opened()?;
    assert!(project.draft_path().exists());

    let rows = project.rows()?;
    assert_eq!(
        rows,
        vec![
            (15, "minutes".to_string(), 4),
            (1, "hours".to_string(), 11),
            (7, "days".to_string(), 4),
        ]
    );

    let view = project.show()?;
    assert_eq!(view["label"], "development");
    assert_eq!(view["total_repeat"], 19);
    assert_eq!(view["remaining_capacity"], 1);
    assert_eq!(view["valid"], true);
    Ok(())
}

#[test]
fn test_open_refuses_existing_draft_without_force() -> Result<()> {
    let project = TestProject::opened()?;

    let result = ladder!(project.path(), "open").assert_failure()?;
    assert!(result.contains_stderr("--force"));

    ladder!(project.path(), "open", "--force", "--label", "staging").assert_success()?;
    assert_eq!(project.show()?["label"], "staging");
    Ok(())
}

#[test]
fn test_commands_outside_project_fail() -> Result<()> {
    let project = TestProject::new()?;
    let result = ladder!(project.path(), "show").assert_failure()?;
    assert!(result.contains_stderr("ladder open"));
    Ok(())
}

#[test]
fn test_set_every_clamps_into_bounds() -> Result<()> {
    let project = TestProject::opened()?;

    ladder!(project.path(), "set-every", "1", "30").assert_success()?;
    assert_eq!(project.rows()?[0].0, 30);

    // The next row runs hourly, so the first row tops out at 59 minutes
    let result = ladder!(project.path(), "set-every", "1", "90").assert_success()?;
    assert!(result.contains_stdout("15-59"));
    assert_eq!(project.rows()?[0].0, 59);

    // Below the global minimum
    ladder!(project.path(), "set-every", "1", "5").assert_success()?;
    assert_eq!(project.rows()?[0].0, 15);
    Ok(())
}

#[test]
fn test_unit_changes_only_on_last_row() -> Result<()> {
    let project = TestProject::opened()?;

    let result = ladder!(project.path(), "set-unit", "1", "hours").assert_failure()?;
    assert!(result.contains_stderr("Cannot change unit of row 1"));

    // Finer than the row before it
    ladder!(project.path(), "set-unit", "3", "minutes").assert_failure()?;

    ladder!(project.path(), "set-unit", "3", "weeks").assert_success()?;
    let rows = project.rows()?;
    assert_eq!(rows[2], (1, "weeks".to_string(), 4));
    Ok(())
}

#[test]
fn test_repeat_respects_total_capacity() -> Result<()> {
    let project = TestProject::opened()?;

    ladder!(project.path(), "repeat", "1", "5").assert_success()?;
    assert_eq!(project.rows()?[0].2, 5);

    // At capacity further increases are no-ops
    let result = ladder!(project.path(), "repeat", "1", "1").assert_success()?;
    assert!(result.contains_stdout("unchanged"));
    assert_eq!(project.show()?["total_repeat"], 20);

    ladder!(project.path(), "repeat", "2", "-100").assert_success()?;
    assert_eq!(project.rows()?[1].2, 1);
    Ok(())
}

#[test]
fn test_add_appends_suggested_row_until_full() -> Result<()> {
    let project = TestProject::opened()?;

    let suggestion = ladder!(project.path(), "suggest", "--json")
        .assert_success()?
        .json()?;
    assert_eq!(suggestion["suggestion"]["every"], 2);
    assert_eq!(suggestion["suggestion"]["unit"], "weeks");
    assert_eq!(suggestion["can_add"], true);

    ladder!(project.path(), "add").assert_success()?;
    let rows = project.rows()?;
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3], (2, "weeks".to_string(), 1));

    let result = ladder!(project.path(), "add").assert_failure()?;
    assert!(result.contains_stderr("Cannot add a row"));
    assert_eq!(project.rows()?.len(), 4);
    Ok(())
}

#[test]
fn test_remove_keeps_one_row() -> Result<()> {
    let project = TestProject::opened()?;

    ladder!(project.path(), "remove", "2").assert_success()?;
    ladder!(project.path(), "remove", "1").assert_success()?;
    assert_eq!(project.rows()?, vec![(7, "days".to_string(), 4)]);

    ladder!(project.path(), "remove", "1").assert_failure()?;
    assert_eq!(project.rows()?.len(), 1);
    Ok(())
}

#[test]
fn test_rows_resolve_by_id_prefix() -> Result<()> {
    let project = TestProject::opened()?;
    let view = project.show()?;
    let id = view["rows"][1]["id"].as_str().unwrap_or_default().to_string();
    // Rows created together share their timestamp prefix, so use the whole id
    let reference = id.to_lowercase();

    ladder!(project.path(), "repeat", &reference, "-2").assert_success()?;
    assert_eq!(project.rows()?[1].2, 9);

    // Edits keep row ids
    assert_eq!(project.show()?["rows"][1]["id"], id.as_str());

    ladder!(project.path(), "repeat", "ZZZZZZZZ", "1").assert_failure()?;
    Ok(())
}

#[test]
fn test_validate_and_reset() -> Result<()> {
    let project = TestProject::opened()?;

    let result = ladder!(project.path(), "validate").assert_success()?;
    assert!(result.contains_stdout("Schedule is valid"));

    let report = ladder!(project.path(), "validate", "--json")
        .assert_success()?
        .json()?;
    assert_eq!(report["valid"], true);

    ladder!(project.path(), "set-every", "3", "30").assert_success()?;
    ladder!(project.path(), "reset").assert_success()?;
    assert_eq!(project.rows()?[2], (7, "days".to_string(), 4));
    Ok(())
}

#[test]
fn test_label_must_be_known_environment() -> Result<()> {
    let project = TestProject::opened()?;

    ladder!(project.path(), "label", "production").assert_success()?;
    assert_eq!(project.show()?["label"], "production");

    ladder!(project.path(), "label", "qa").assert_failure()?;
    assert_eq!(project.show()?["label"], "production");
    Ok(())
}

#[test]
fn test_add_refused_after_longest_interval() -> Result<()> {
    let project = TestProject::opened()?;

    ladder!(project.path(), "set-unit", "3", "months").assert_success()?;
    ladder!(project.path(), "set-every", "3", "4294967295").assert_success()?;
    assert_eq!(project.rows()?[2], (4294967295, "months".to_string(), 4));

    let suggestion = ladder!(project.path(), "suggest", "--json")
        .assert_success()?
        .json()?;
    assert!(suggestion["suggestion"].is_null());
    assert_eq!(suggestion["can_add"], false);

    let result = ladder!(project.path(), "add").assert_failure()?;
    assert!(result.contains_stderr("Cannot add a row"));
    assert_eq!(project.rows()?.len(), 3);
    assert_eq!(project.show()?["valid"], true);
    Ok(())
}
