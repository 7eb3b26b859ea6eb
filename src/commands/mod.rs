pub mod images;
pub mod library;
pub mod status;
pub mod sync;
pub mod tree;

use anyhow::Result;
use figma_mcp::{Config, FigmaClient};

fn client(config: &Config) -> Result<FigmaClient> {
    Ok(FigmaClient::new(config)?)
}
