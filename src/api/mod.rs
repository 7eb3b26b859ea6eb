pub mod client;
pub mod envelope;
pub mod file_key;
pub mod files;
pub mod images;
pub mod library;
pub mod transport;
pub mod types;

pub use client::FigmaClient;
pub use file_key::{validate_file_key, validate_file_key_value, FileKey};
pub use images::ImageOptions;
pub use transport::{HostBridge, ToolCall, TransportKind};
