//! Submit the draft and clear it

use crate::util::Project;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use session::OutboxSubmitter;
use std::path::PathBuf;

pub async fn run(outbox: Option<PathBuf>, json: bool) -> Result<()> {
    let project = Project::load()?;

    // 1. Pick the outbox: flag, then config, then .ladder/outbox
    let outbox_dir = outbox
        .or_else(|| project.config.submit.outbox_dir.clone())
        .unwrap_or_else(|| project.store.outbox_dir());
    let submitter = OutboxSubmitter::new(outbox_dir);

    // 2. Validate and hand off
    let receipt = project
        .session
        .confirm(&submitter)
        .await
        .context("Schedule was not submitted")?;

    // 3. The draft is done
    project
        .store
        .discard()
        .context("Schedule submitted but the draft could not be removed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
        return Ok(());
    }

    println!(
        "{} Submitted {} schedule ({} rows)",
        "✓".green(),
        receipt.label.cyan(),
        receipt.rows
    );
    println!("  {} {}", "Receipt:".dimmed(), receipt.id.to_string().yellow());
    if let Some(location) = &receipt.location {
        println!("  {} {}", "Written to:".dimmed(), location.display());
    }
    Ok(())
}
