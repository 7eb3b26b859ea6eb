use clap::{ArgAction, Parser, Subcommand};
use figma_mcp::api::types::ImageFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figma-mcp")]
#[command(author, version, about = "Figma design-system client - components, variables, styles and images")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check configuration and transport (no network access)
    Status,

    /// List components in a file
    Components(FileArgs),

    /// List local variables (design tokens) in a file
    Variables(FileArgs),

    /// List styles in a file
    Styles(FileArgs),

    /// Render nodes and print their image URLs
    Images(ImagesArgs),

    /// Show the document node tree of a file
    Tree(TreeArgs),

    /// Fetch components, variables, styles and component images together
    Sync(SyncArgs),
}

#[derive(clap::Args)]
pub struct FileArgs {
    /// Figma file key or URL (e.g., abc123 or https://figma.com/design/abc123/...)
    pub file_key_or_url: String,
}

#[derive(clap::Args)]
pub struct ImagesArgs {
    /// Figma file key or URL. If the URL contains node-id and no --node is given, it is used.
    pub file_key_or_url: String,
    /// Node IDs to render (can be specified multiple times)
    #[arg(short, long)]
    pub node: Vec<String>,
    /// Image format
    #[arg(short, long, default_value = "svg")]
    pub format: ImageFormat,
    /// Scale factor
    #[arg(short, long, default_value = "2")]
    pub scale: f64,
}

#[derive(clap::Args)]
pub struct TreeArgs {
    /// Figma file key or URL
    pub file_key_or_url: String,
    /// Maximum depth to display
    #[arg(short, long, default_value = "3")]
    pub depth: u32,
}

#[derive(clap::Args)]
pub struct SyncArgs {
    /// Figma file key or URL
    pub file_key_or_url: String,
    /// Write the snapshot as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
