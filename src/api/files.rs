use super::client::FigmaClient;
use super::types::File;
use crate::error::{FigmaError, Operation, Result};
use serde_json::json;

impl FigmaClient {
    /// Get a file by key, including its document node tree
    pub async fn get_file(&self, file_key: &str) -> Result<File> {
        self.run(Operation::GetFile, async {
            let key = self.preflight(Operation::GetFile, file_key, json!({ "fileKey": file_key }))?;
            let body = self.get_json(&format!("/files/{}", key.path_segment())).await?;
            serde_json::from_value::<File>(body).map_err(FigmaError::from)
        })
        .await
    }
}
