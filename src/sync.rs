//! Batch fetches across the design-system resources of one file

use crate::api::types::{Component, ImageMap, Style, VariableGroup};
use crate::api::{FigmaClient, ImageOptions};
use crate::config::ENV_FILE_KEYS;
use crate::error::{FigmaError, Result};
use serde::Serialize;
use tracing::{error, info};

/// Components, variables and styles of one file, fetched together
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignLibrary {
    pub components: Vec<Component>,
    pub variable_groups: Vec<VariableGroup>,
    pub styles: Vec<Style>,
}

/// Everything a full sync produces
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemSnapshot {
    pub file_key: String,
    pub components: Vec<Component>,
    pub variable_groups: Vec<VariableGroup>,
    pub styles: Vec<Style>,
    pub images: ImageMap,
}

/// Fetch components, variables and styles concurrently.
///
/// The first failure fails the whole batch; no partial result is returned.
pub async fn fetch_library(client: &FigmaClient, file_key: &str) -> Result<DesignLibrary> {
    let (components, variable_groups, styles) = tokio::try_join!(
        client.list_components(file_key),
        client.list_variables(file_key),
        client.list_styles(file_key),
    )?;

    Ok(DesignLibrary {
        components,
        variable_groups,
        styles,
    })
}

/// Fetch the library, then render every component (svg, 2x).
///
/// Requires the default file key setting to be present.
pub async fn sync_design_system(client: &FigmaClient, file_key: &str) -> Result<DesignSystemSnapshot> {
    if !client.config().has_file_key() {
        return Err(FigmaError::MissingConfiguration(ENV_FILE_KEYS));
    }

    info!(file_key, "Starting design system sync");
    match run_sync(client, file_key).await {
        Ok(snapshot) => {
            info!(
                components = snapshot.components.len(),
                variable_groups = snapshot.variable_groups.len(),
                styles = snapshot.styles.len(),
                images = snapshot.images.len(),
                "Design system sync completed"
            );
            Ok(snapshot)
        }
        Err(err) => {
            error!(file_key, error = %err, "Design system sync failed");
            Err(err)
        }
    }
}

async fn run_sync(client: &FigmaClient, file_key: &str) -> Result<DesignSystemSnapshot> {
    let library = fetch_library(client, file_key).await?;

    // Component keys double as node ids for the render request
    let keys: Vec<String> = library.components.iter().map(|c| c.key.clone()).collect();
    let images = client
        .get_component_images(file_key, &keys, ImageOptions::default())
        .await?;

    Ok(DesignSystemSnapshot {
        file_key: file_key.to_string(),
        components: library.components,
        variable_groups: library.variable_groups,
        styles: library.styles,
        images,
    })
}
