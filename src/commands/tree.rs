use crate::cli::TreeArgs;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use figma_mcp::api::types::Node;
use figma_mcp::{Config, FileKey};

pub async fn run(config: &Config, args: TreeArgs) -> Result<()> {
    let file = FileKey::parse(&args.file_key_or_url)?;
    let client = super::client(config)?;
    let figma_file = client.get_file(file.as_str()).await?;

    if output::is_json() {
        output::print_json(&figma_file.document)?;
        return Ok(());
    }

    output::print_raw(&format!("Node tree for: {}", figma_file.name).bold().to_string());
    print_node(&figma_file.document, 0, args.depth);
    output::print_status(
        &format!(
            "{} nodes, version {}, last modified {}",
            figma_file.document.subtree_len(),
            figma_file.version,
            figma_file.last_modified
        )
        .dimmed()
        .to_string(),
    );
    Ok(())
}

fn print_node(node: &Node, depth: u32, max_depth: u32) {
    let indent = "  ".repeat(depth as usize);
    let name = if node.is_visible() {
        node.name.normal()
    } else {
        node.name.strikethrough()
    };
    output::print_raw(&format!(
        "{}{} ({}) [{}]",
        indent,
        name,
        node.node_type.dimmed(),
        node.id.cyan()
    ));

    if depth < max_depth {
        for child in node.children() {
            print_node(child, depth + 1, max_depth);
        }
    }
}
