//! Client for design-system metadata in Figma files.
//!
//! Fetches components, variables, styles and rendered component images over
//! the Figma REST API. An in-host tool bridge can be registered and is probed
//! as the preferred transport, but every request is served by REST.

pub mod api;
pub mod config;
pub mod error;
pub mod sync;

pub use api::{validate_file_key, validate_file_key_value, FigmaClient, FileKey, HostBridge, ImageOptions};
pub use config::Config;
pub use error::{FigmaError, Operation, Result};
pub use sync::{fetch_library, sync_design_system, DesignLibrary, DesignSystemSnapshot};
