//! Start a new ladder draft in the current directory

use crate::system_config;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use session::{DraftStore, Session};
use std::env;

pub async fn run(label: Option<String>, force: bool, json: bool) -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = system_config::load()?;

    // 1. Create .ladder/ if needed
    let store = DraftStore::init(&current_dir).context("Failed to initialize .ladder directory")?;

    // 2. Refuse to clobber an existing draft unless asked
    if store.has_draft() && !force {
        anyhow::bail!(
            "A draft already exists at {} (use --force to start over)",
            store.draft_path().display()
        );
    }

    // 3. Open a session from defaults and persist it
    let label = label.unwrap_or_else(|| config.draft.default_label.clone());
    let session = Session::open(config.catalog(), &label)?;
    store
        .save(&session.to_draft())
        .context("Failed to save draft")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.to_draft())?);
        return Ok(());
    }

    println!(
        "{} Opened {} ladder at {}",
        "✓".green(),
        session.label().cyan(),
        store.draft_path().display()
    );
    println!();
    for (i, row) in session.ladder().iter().enumerate() {
        println!(
            "  {}. every {} {} × {}",
            i + 1,
            row.every,
            row.unit.label_for(u64::from(row.every)),
            row.repeat
        );
    }
    println!();
    println!("Next steps:");
    println!("  - Run 'ladder show' to inspect rows and their allowed ranges");
    println!("  - Run 'ladder add' to append the next suggested row");
    println!("  - Run 'ladder submit' when the schedule is ready");

    Ok(())
}
