//! Transport selection: integrated host bridge vs plain REST

use crate::error::Operation;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Capability exposed by a host editor that can answer tool calls in-process
pub trait HostBridge: Send + Sync {
    /// Whether the bridge is reachable right now
    fn is_available(&self) -> bool;
}

/// Transport chosen for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Integrated,
    Rest,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Integrated => write!(f, "integrated"),
            TransportKind::Rest => write!(f, "rest"),
        }
    }
}

/// Probe a (possibly absent) host bridge. Never fails.
pub fn is_integrated_transport_available(bridge: Option<&dyn HostBridge>) -> bool {
    bridge.map(|b| b.is_available()).unwrap_or(false)
}

pub fn select_transport(bridge: Option<&dyn HostBridge>) -> TransportKind {
    if is_integrated_transport_available(bridge) {
        TransportKind::Integrated
    } else {
        TransportKind::Rest
    }
}

/// Tool invocation the integrated transport would issue for an operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCall {
    pub name: &'static str,
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(operation: Operation, arguments: Value) -> Self {
        Self {
            name: operation.tool_name(),
            arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Bridge(bool);

    impl HostBridge for Bridge {
        fn is_available(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_no_bridge_means_rest() {
        assert!(!is_integrated_transport_available(None));
        assert_eq!(select_transport(None), TransportKind::Rest);
    }

    #[test]
    fn test_bridge_availability() {
        let up = Bridge(true);
        let down = Bridge(false);
        assert_eq!(select_transport(Some(&up)), TransportKind::Integrated);
        assert_eq!(select_transport(Some(&down)), TransportKind::Rest);
    }

    #[test]
    fn test_tool_call_names() {
        let call = ToolCall::new(Operation::ListVariables, json!({"fileKey": "ABC123"}));
        assert_eq!(call.name, "mcp_Figma_get_variable_defs");
        assert_eq!(call.arguments["fileKey"], "ABC123");
        assert_eq!(
            ToolCall::new(Operation::GetComponentImages, json!({})).name,
            "mcp_Figma_get_screenshot"
        );
    }
}
