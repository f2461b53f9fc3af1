//! Check the draft against the ladder rules

use crate::util::Project;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run(json: bool) -> Result<()> {
    let project = Project::load()?;
    let validation = project.session.validation();

    if json {
        let report = json!({
            "valid": validation.is_ok(),
            "error": validation.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        if validation.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match validation {
        Ok(()) => {
            println!("{} Schedule is valid", "✓".green());
            Ok(())
        }
        Err(e) => anyhow::bail!("{}", e),
    }
}
