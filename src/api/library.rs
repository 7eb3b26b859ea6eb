use super::client::FigmaClient;
use super::envelope;
use super::types::{Component, Style, VariableGroup};
use crate::error::{Operation, Result};
use serde_json::json;

impl FigmaClient {
    /// List the components of a file (`meta.components`)
    pub async fn list_components(&self, file_key: &str) -> Result<Vec<Component>> {
        self.run(Operation::ListComponents, async {
            let key = self.preflight(Operation::ListComponents, file_key, json!({ "fileKey": file_key }))?;
            let body = self
                .get_json(&format!("/files/{}/components", key.path_segment()))
                .await?;
            envelope::collection::<Component>(body, &["meta", "components"])
        })
        .await
    }

    /// List local variables of a file, already grouped by the API (`meta.variables`)
    pub async fn list_variables(&self, file_key: &str) -> Result<Vec<VariableGroup>> {
        self.run(Operation::ListVariables, async {
            let key = self.preflight(Operation::ListVariables, file_key, json!({ "fileKey": file_key }))?;
            let body = self
                .get_json(&format!("/files/{}/variables/local", key.path_segment()))
                .await?;
            envelope::collection::<VariableGroup>(body, &["meta", "variables"])
        })
        .await
    }

    /// List the styles of a file (`meta.styles`)
    pub async fn list_styles(&self, file_key: &str) -> Result<Vec<Style>> {
        self.run(Operation::ListStyles, async {
            let key = self.preflight(Operation::ListStyles, file_key, json!({ "fileKey": file_key }))?;
            let body = self
                .get_json(&format!("/files/{}/styles", key.path_segment()))
                .await?;
            envelope::collection::<Style>(body, &["meta", "styles"])
        })
        .await
    }
}
