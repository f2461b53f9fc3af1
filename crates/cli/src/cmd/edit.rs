//! Single-field edits of the draft ladder
//!
//! Every command here loads the draft, applies one edit through the
//! session, saves, and reports what happened. Clamped edits succeed and say
//! which value was applied; rejected edits fail with the reason.

use crate::util::{self, Project};
use anyhow::{Context, Result};
use ladder_core::TimeUnit;
use owo_colors::OwoColorize;
use session::EditOutcome;

/// Print the row after an edit, or the whole ladder as JSON
fn report(project: &Project, index: usize, outcome: EditOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&project.session.to_draft())?);
        return Ok(());
    }

    let Some(row) = project.session.ladder().get(index) else {
        return Ok(());
    };
    let summary = format!("{} × {}", util::format_cadence(row), row.repeat);
    match outcome {
        EditOutcome::Changed => println!("{} Row {}: {}", "✓".green(), index + 1, summary),
        EditOutcome::Unchanged => println!(
            "Row {} unchanged: {}",
            index + 1,
            summary.dimmed()
        ),
    }
    Ok(())
}

pub async fn set_every(reference: &str, every: u32, json: bool) -> Result<()> {
    let mut project = Project::load()?;
    let index = project.row_index(reference)?;

    let outcome = project
        .session
        .set_every(index, every)
        .with_context(|| format!("Cannot change interval of row {}", index + 1))?;
    project.save()?;

    let applied = project.session.ladder().get(index).map(|row| row.every);
    report(&project, index, outcome, json)?;
    if !json && applied != Some(every) {
        if let Some(bounds) = project.session.ladder().row_bounds(index) {
            println!(
                "{}",
                format!(
                    "  requested {} is outside the allowed range {}",
                    every,
                    util::format_bounds(&bounds)
                )
                .yellow()
            );
        }
    }
    Ok(())
}

pub async fn set_unit(reference: &str, unit: TimeUnit, json: bool) -> Result<()> {
    let mut project = Project::load()?;
    let index = project.row_index(reference)?;

    let outcome = project
        .session
        .set_unit(index, unit)
        .with_context(|| format!("Cannot change unit of row {}", index + 1))?;
    project.save()?;

    report(&project, index, outcome, json)
}

pub async fn repeat(reference: &str, delta: i64, json: bool) -> Result<()> {
    let mut project = Project::load()?;
    let index = project.row_index(reference)?;

    let outcome = project
        .session
        .adjust_repeat(index, delta)
        .with_context(|| format!("Cannot change retention of row {}", index + 1))?;
    project.save()?;

    report(&project, index, outcome, json)?;
    if !json && outcome == EditOutcome::Unchanged && delta != 0 {
        let remaining = project.session.ladder().remaining_capacity();
        println!(
            "{}",
            format!("  each row keeps at least 1 backup; {} left to allocate", remaining).yellow()
        );
    }
    Ok(())
}

pub async fn add(json: bool) -> Result<()> {
    let mut project = Project::load()?;

    let added = project.session.add_row().context("Cannot add a row")?;
    project.save()?;

    let index = project.session.ladder().len() - 1;
    tracing::debug!(every = added.every, unit = %added.unit, "appended suggested row");
    report(&project, index, EditOutcome::Changed, json)
}

pub async fn remove(reference: &str, json: bool) -> Result<()> {
    let mut project = Project::load()?;
    let index = project.row_index(reference)?;
    let removed = project
        .session
        .ladder()
        .get(index)
        .map(|row| format!("{} × {}", util::format_cadence(row), row.repeat))
        .unwrap_or_default();

    project
        .session
        .remove_row(index)
        .with_context(|| format!("Cannot remove row {}", index + 1))?;
    project.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&project.session.to_draft())?);
    } else {
        println!("{} Removed row {}: {}", "✓".green(), index + 1, removed);
    }
    Ok(())
}

pub async fn label(label: &str) -> Result<()> {
    let mut project = Project::load()?;
    project.session.set_label(label)?;
    project.save()?;

    println!("{} Label set to {}", "✓".green(), project.session.label().cyan());
    Ok(())
}

pub async fn reset() -> Result<()> {
    let mut project = Project::load()?;
    project.session.reset();
    project.save()?;

    println!("{} Ladder reset to defaults", "✓".green());
    Ok(())
}
