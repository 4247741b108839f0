//! Replay input events against a synchronized pair.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::PagerFile;
use crate::simulator::{Input, Simulator};
use crate::transcript::Entry;

/// Run the simulate command.
///
/// Inputs come from the command line, then from `script` (one per line,
/// `#` starts a comment).
pub async fn run(
    data_dir: &Path,
    inputs: &[String],
    script: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut lines: Vec<String> = inputs.to_vec();
    if let Some(path) = script {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        lines.extend(script_lines(&content));
    }
    let inputs = lines
        .iter()
        .map(|line| line.parse::<Input>())
        .collect::<Result<Vec<_>>>()?;

    let file = PagerFile::load(data_dir).await?;
    tracing::debug!(inputs = inputs.len(), pages = file.pages.len(), "replaying inputs");
    let mut sim = Simulator::new(&file)?;

    for input in inputs {
        if input == Input::Reload {
            let fresh = PagerFile::load(data_dir).await?;
            sim.replace_pages(&fresh);
        }
        sim.apply(input);
    }

    print_transcript(&sim.transcript(), json)
}

fn script_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_transcript(entries: &[Entry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{entry}");
        }
    }
    Ok(())
}
