//! Show the current draft as a table

use crate::util::{self, Project};
use anyhow::Result;
use ladder_core::{TimeUnit, MAX_REPEAT_SUM};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct RowView {
    position: usize,
    id: String,
    every: u32,
    unit: TimeUnit,
    repeat: u32,
    effective_minutes: u64,
    coverage_minutes: u64,
    min_every: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_every: Option<u32>,
    /// No `every` fits between the neighbors under the current unit
    stuck: bool,
    unit_locked: bool,
}

#[derive(Serialize)]
struct LadderView {
    label: String,
    rows: Vec<RowView>,
    total_repeat: u64,
    max_repeat: u32,
    remaining_capacity: u32,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn build_view(project: &Project) -> LadderView {
    let ladder = project.session.ladder();
    let rows = ladder
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let bounds = ladder.row_bounds(index);
            RowView {
                position: index + 1,
                id: row.id.to_string(),
                every: row.every,
                unit: row.unit,
                repeat: row.repeat,
                effective_minutes: row.effective_minutes(),
                coverage_minutes: row.coverage_minutes(),
                min_every: bounds.map_or(row.every, |b| b.min_every),
                max_every: bounds.and_then(|b| b.max_every),
                stuck: bounds.map_or(false, |b| !b.is_satisfiable()),
                unit_locked: ladder.is_unit_locked(index),
            }
        })
        .collect();

    let validation = project.session.validation();
    LadderView {
        label: project.session.label().to_string(),
        rows,
        total_repeat: ladder.total_repeat(),
        max_repeat: MAX_REPEAT_SUM,
        remaining_capacity: ladder.remaining_capacity(),
        valid: validation.is_ok(),
        error: validation.err().map(|e| e.to_string()),
    }
}

pub async fn run(json: bool) -> Result<()> {
    let project = Project::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&build_view(&project))?);
        return Ok(());
    }

    let ladder = project.session.ladder();
    println!(
        "{} {}",
        "Backup schedule".bold(),
        format!("({})", project.session.label()).cyan()
    );
    println!();
    println!(
        "  {:<3} {:<9} {:<18} {:>6}  {:<20} {:<8} {}",
        "#".dimmed(),
        "ID".dimmed(),
        "CADENCE".dimmed(),
        "KEEP".dimmed(),
        "REACHES BACK".dimmed(),
        "RANGE".dimmed(),
        "UNIT".dimmed()
    );

    for (index, row) in ladder.iter().enumerate() {
        let range = ladder
            .row_bounds(index)
            .map(|b| util::format_bounds(&b))
            .unwrap_or_default();
        let unit_state = if ladder.is_unit_locked(index) {
            "locked".dimmed().to_string()
        } else {
            "editable".green().to_string()
        };
        let range = if range == "none" {
            range.red().to_string()
        } else {
            range
        };

        println!(
            "  {:<3} {:<9} {:<18} {:>6}  {:<20} {:<8} {}",
            index + 1,
            util::short_id(row).yellow(),
            util::format_cadence(row),
            row.repeat,
            util::format_minutes(row.coverage_minutes()),
            range,
            unit_state
        );
    }

    println!();
    let remaining = ladder.remaining_capacity();
    let capacity = format!("{} / {}", ladder.total_repeat(), MAX_REPEAT_SUM);
    println!(
        "Retained backups: {} {}",
        if remaining == 0 {
            capacity.yellow().to_string()
        } else {
            capacity
        },
        format!("({} remaining)", remaining).dimmed()
    );

    match project.session.validation() {
        Ok(()) => println!("Status:           {}", "✓ valid".green()),
        Err(e) => println!("Status:           {} {}", "✗".red(), e.to_string().red()),
    }

    Ok(())
}
