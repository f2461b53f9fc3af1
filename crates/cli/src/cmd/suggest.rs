//! Preview the row `ladder add` would append

use crate::util::{self, Project};
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run(json: bool) -> Result<()> {
    let project = Project::load()?;
    let ladder = project.session.ladder();
    let suggestion = ladder.suggest_next_row();
    let can_add = ladder.can_add_row() && suggestion.is_some();

    if json {
        let report = json!({
            "suggestion": suggestion,
            "can_add": can_add,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(suggestion) = suggestion else {
        println!(
            "{}",
            "The last row is already at the longest interval; no row can follow it".yellow()
        );
        return Ok(());
    };

    println!(
        "Next row: every {} {} × {} {}",
        suggestion.every,
        suggestion.unit.label_for(u64::from(suggestion.every)),
        suggestion.repeat,
        format!(
            "(reaches back {})",
            util::format_minutes(suggestion.coverage_minutes())
        )
        .dimmed()
    );
    if !ladder.can_add_row() {
        println!(
            "{}",
            "All retained backups are allocated; lower a row's count before adding".yellow()
        );
    }
    Ok(())
}
