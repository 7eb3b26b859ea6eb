use crate::cli::ImagesArgs;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use figma_mcp::{Config, FileKey, ImageOptions};
use tabled::Tabled;

#[derive(Tabled)]
struct ImageRow {
    #[tabled(rename = "Node")]
    node: String,
    #[tabled(rename = "URL")]
    url: String,
}

pub async fn run(config: &Config, args: ImagesArgs) -> Result<()> {
    let file = FileKey::parse(&args.file_key_or_url)?;

    let mut node_ids = args.node;
    if node_ids.is_empty() {
        if let Some(id) = file.node_id() {
            node_ids.push(id.to_string());
        }
    }
    if node_ids.is_empty() {
        output::print_warning("No node ids given (use --node); nothing will be rendered");
    }

    let client = super::client(config)?;
    let options = ImageOptions {
        format: args.format,
        scale: args.scale,
    };

    output::print_status(
        &format!("Rendering {} nodes as {} @{}x...", node_ids.len(), options.format, options.scale)
            .dimmed()
            .to_string(),
    );
    let images = client.get_component_images(file.as_str(), &node_ids, options).await?;

    for id in node_ids.iter().filter(|id| !images.contains_key(id.as_str())) {
        output::print_warning(&format!("No image returned for node {}", id));
    }

    let rows: Vec<ImageRow> = images
        .iter()
        .map(|(node, url)| ImageRow {
            node: node.clone(),
            url: url.clone(),
        })
        .collect();
    output::print_list(&rows, &images)?;
    Ok(())
}
