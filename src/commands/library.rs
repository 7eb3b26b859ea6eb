use crate::cli::FileArgs;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use figma_mcp::{Config, FileKey};
use tabled::Tabled;

#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    resolved_type: String,
    #[tabled(rename = "Values")]
    values: String,
}

#[derive(Tabled)]
struct StyleRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    style_type: String,
    #[tabled(rename = "Key")]
    key: String,
}

pub async fn components(config: &Config, args: FileArgs) -> Result<()> {
    let file = FileKey::parse(&args.file_key_or_url)?;
    let client = super::client(config)?;

    output::print_status(&format!("Fetching components from {}...", file).dimmed().to_string());
    let components = client.list_components(file.as_str()).await?;
    output::print_status(&format!("Found {} components:", components.len()).bold().to_string());

    let rows: Vec<ComponentRow> = components
        .iter()
        .map(|c| ComponentRow {
            name: c.name.clone(),
            key: c.key.clone(),
            description: truncate(c.description.as_deref().unwrap_or(""), 60),
        })
        .collect();
    output::print_list(&rows, &components)?;
    Ok(())
}

pub async fn variables(config: &Config, args: FileArgs) -> Result<()> {
    let file = FileKey::parse(&args.file_key_or_url)?;
    let client = super::client(config)?;

    output::print_status(&format!("Fetching design tokens from {}...", file).dimmed().to_string());
    let groups = client.list_variables(file.as_str()).await?;
    output::print_status(&format!("Found {} variable groups:", groups.len()).bold().to_string());

    let rows: Vec<VariableRow> = groups
        .iter()
        .flat_map(|group| {
            group.variables.iter().map(move |v| VariableRow {
                group: group.name.clone(),
                name: v.name.clone(),
                resolved_type: v.resolved_type.to_string(),
                values: truncate(
                    &v.values_by_mode
                        .iter()
                        .map(|(mode, value)| format!("{}={}", mode, value))
                        .collect::<Vec<_>>()
                        .join(", "),
                    60,
                ),
            })
        })
        .collect();
    output::print_list(&rows, &groups)?;
    Ok(())
}

pub async fn styles(config: &Config, args: FileArgs) -> Result<()> {
    let file = FileKey::parse(&args.file_key_or_url)?;
    let client = super::client(config)?;

    output::print_status(&format!("Fetching styles from {}...", file).dimmed().to_string());
    let styles = client.list_styles(file.as_str()).await?;
    output::print_status(&format!("Found {} styles:", styles.len()).bold().to_string());

    let rows: Vec<StyleRow> = styles
        .iter()
        .map(|s| StyleRow {
            name: s.name.clone(),
            style_type: s.style_type.to_string(),
            key: s.key.clone(),
        })
        .collect();
    output::print_list(&rows, &styles)?;
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
