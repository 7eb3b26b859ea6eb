//! Figma API client with transport selection and error normalization

use super::file_key::FileKey;
use super::transport::{self, HostBridge, ToolCall, TransportKind};
use super::types::{ApiErrorBody, EnvironmentStatus};
use crate::config::{Config, ENV_TOKEN};
use crate::error::{FigmaError, Operation, Result};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

/// Figma uses X-Figma-Token, not Bearer auth
const TOKEN_HEADER: &str = "X-Figma-Token";

/// Figma design-system client
///
/// REST is the only transport that performs requests. A registered
/// [`HostBridge`] is probed on every call and reported, but requests still go
/// over REST.
#[derive(Clone)]
pub struct FigmaClient {
    client: Client,
    config: Config,
    bridge: Option<Arc<dyn HostBridge>>,
}

impl FigmaClient {
    /// Create a new client from process configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("figma-mcp/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
            bridge: None,
        })
    }

    /// Attach an in-host bridge to be probed as the preferred transport
    pub fn with_bridge(mut self, bridge: Arc<dyn HostBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the base URL for the API
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    pub fn is_integrated_transport_available(&self) -> bool {
        transport::is_integrated_transport_available(self.bridge.as_deref())
    }

    /// Report configuration and transport state. Makes no network call.
    pub fn environment_status(&self) -> EnvironmentStatus {
        EnvironmentStatus {
            has_file_key: self.config.has_file_key(),
            has_token: self.config.has_token(),
            transport_available: self.is_integrated_transport_available(),
            api_base_url: self.config.api_base_url.clone(),
        }
    }

    fn token(&self) -> Result<&str> {
        self.config
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(FigmaError::MissingConfiguration(ENV_TOKEN))
    }

    /// Checks shared by every operation, done before any I/O
    pub(crate) fn preflight(&self, operation: Operation, file_key: &str, arguments: Value) -> Result<FileKey> {
        self.token()?;
        let file_key = FileKey::parse(file_key)?;

        if transport::select_transport(self.bridge.as_deref()) == TransportKind::Integrated {
            let call = ToolCall::new(operation, arguments);
            debug!(
                tool = call.name,
                arguments = %call.arguments,
                "Integrated transport detected, falling back to REST API"
            );
        }

        Ok(file_key)
    }

    /// Run an operation body, logging and labelling any failure
    pub(crate) async fn run<T, F>(&self, operation: Operation, body: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        body.await.map_err(|err| {
            error!(operation = %operation, error = %err, "Figma request failed");
            err.within(operation)
        })
    }

    /// GET `{base}{path}` and return the decoded JSON body
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url(), path);
        debug!(method = "GET", url = %url, "Figma request");
        self.send(self.client.get(&url)).await
    }

    /// POST a JSON body to `{base}{path}` and return the decoded JSON body
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!(method = "POST", url = %url, "Figma request");
        self.send(self.client.post(&url).json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let token = self.token()?;
        let response = request.header(TOKEN_HEADER, token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                debug!(status = status.as_u16(), err = %body.err, "Figma error payload");
            }
            return Err(FigmaError::RemoteApi {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
