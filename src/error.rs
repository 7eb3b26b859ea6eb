use std::fmt;
use thiserror::Error;

/// Boxed underlying cause of a failed request
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Logical client operation, used to label errors and tool calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListComponents,
    ListVariables,
    ListStyles,
    GetComponentImages,
    GetFile,
}

impl Operation {
    /// Tool name used by the integrated (in-host) transport
    pub fn tool_name(&self) -> &'static str {
        match self {
            Operation::ListComponents => "mcp_Figma_list_components",
            Operation::ListVariables => "mcp_Figma_get_variable_defs",
            Operation::ListStyles => "mcp_Figma_list_styles",
            Operation::GetComponentImages => "mcp_Figma_get_screenshot",
            Operation::GetFile => "mcp_Figma_get_file",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListComponents => write!(f, "list components"),
            Operation::ListVariables => write!(f, "list variables"),
            Operation::ListStyles => write!(f, "list styles"),
            Operation::GetComponentImages => write!(f, "get component images"),
            Operation::GetFile => write!(f, "get file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FigmaError {
    /// A required configuration value (e.g. `FIGMA_TOKEN`) is absent
    #[error("{0} is required")]
    MissingConfiguration(&'static str),

    /// The remote answered with a non-success status
    #[error("Figma API error: {status} {status_text}")]
    RemoteApi { status: u16, status_text: String },

    /// No response at all, or a response that does not have the expected shape
    #[error("{0}")]
    RequestFailed(#[source] Cause),

    /// Local precondition failure (bad file key, bad scale, bad config value)
    #[error("{0}")]
    Validation(String),

    /// Failure of a client operation, prefixed with the operation label
    #[error("Failed to {operation}: {source}")]
    Operation {
        operation: Operation,
        #[source]
        source: Box<FigmaError>,
    },
}

impl FigmaError {
    pub(crate) fn request_failed(cause: impl Into<Cause>) -> Self {
        FigmaError::RequestFailed(cause.into())
    }

    /// Wrap this error with an operation label
    pub fn within(self, operation: Operation) -> Self {
        FigmaError::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, with operation wrappers stripped
    pub fn kind(&self) -> &FigmaError {
        match self {
            FigmaError::Operation { source, .. } => source.kind(),
            other => other,
        }
    }

    /// The operation this error was raised by, if any
    pub fn operation(&self) -> Option<Operation> {
        match self {
            FigmaError::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    pub fn is_missing_configuration(&self) -> bool {
        matches!(self.kind(), FigmaError::MissingConfiguration(_))
    }

    /// HTTP status of a remote failure
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            FigmaError::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FigmaError {
    fn from(err: reqwest::Error) -> Self {
        FigmaError::request_failed(err)
    }
}

impl From<serde_json::Error> for FigmaError {
    fn from(err: serde_json::Error) -> Self {
        FigmaError::request_failed(err)
    }
}

pub type Result<T> = std::result::Result<T, FigmaError>;
