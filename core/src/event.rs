//! Telemetry events emitted around every tool invocation.
//!
//! RULE: Observers learn about invocations ONLY through these events.
//! Variants are append-only; field names are part of the wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolEvent {
    ToolStart {
        invocation_id: String,
        tool_name: String,
        section: String,
        /// Argument name → string form, truncated.
        parameters: serde_json::Map<String, Value>,
        timestamp: DateTime<Utc>,
    },
    ToolComplete {
        invocation_id: String,
        tool_name: String,
        section: String,
        duration_secs: f64,
        result: Value,
        success: bool,
        timestamp: DateTime<Utc>,
    },
    ToolError {
        invocation_id: String,
        tool_name: String,
        section: String,
        duration_secs: f64,
        error: String,
        success: bool,
        timestamp: DateTime<Utc>,
    },
}

impl ToolEvent {
    /// Stable name used in log lines.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ToolStart { .. }    => "tool_start",
            Self::ToolComplete { .. } => "tool_complete",
            Self::ToolError { .. }    => "tool_error",
        }
    }

    pub fn invocation_id(&self) -> &str {
        match self {
            Self::ToolStart { invocation_id, .. }
            | Self::ToolComplete { invocation_id, .. }
            | Self::ToolError { invocation_id, .. } => invocation_id,
        }
    }

    pub fn tool_name(&self) -> &str {
        match self {
            Self::ToolStart { tool_name, .. }
            | Self::ToolComplete { tool_name, .. }
            | Self::ToolError { tool_name, .. } => tool_name,
        }
    }
}
