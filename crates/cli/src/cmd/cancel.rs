//! Discard the draft without submitting

use crate::util::{self, Project};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub async fn run() -> Result<()> {
    let store = util::find_store()?;

    // A draft that no longer parses is still discarded
    if store.has_draft() {
        match Project::load() {
            Ok(project) => project.session.cancel(),
            Err(e) => tracing::warn!(error = %e, "discarding a draft that could not be loaded"),
        }
    }

    if store.discard().context("Failed to remove draft")? {
        println!("{} Draft discarded", "✓".green());
    } else {
        println!("{}", "No draft to discard".dimmed());
    }
    Ok(())
}
