use crate::cli::SyncArgs;
use crate::output;
use anyhow::{Context, Result};
use colored::Colorize;
use figma_mcp::{sync_design_system, Config, FileKey};
use std::fs;

pub async fn run(config: &Config, args: SyncArgs) -> Result<()> {
    let file = FileKey::parse(&args.file_key_or_url)?;
    let client = super::client(config)?;

    output::print_status(&format!("Design system sync: {}", file).bold().to_string());
    let snapshot = sync_design_system(&client, file.as_str()).await?;

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        output::print_success(&format!("Snapshot written to {}", path.display()));
    } else if output::is_json() {
        output::print_json(&snapshot)?;
    }

    output::print_status("");
    output::print_status(&"Summary:".bold().to_string());
    output::print_status(&format!(
        "  Components: {} | Variable groups: {} | Styles: {} | Component images: {}",
        snapshot.components.len(),
        snapshot.variable_groups.len(),
        snapshot.styles.len(),
        snapshot.images.len()
    ));

    Ok(())
}
