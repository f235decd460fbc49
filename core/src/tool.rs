//! Tool trait and declared parameter schema.
//!
//! RULE: Every callable exposed to the agent runtime implements
//! ScenarioTool. The registry owns dispatch, RNG streams and
//! monitoring; a tool only parses its arguments and resolves.

use crate::{
    error::{ToolError, ToolResult},
    rng::ScenarioRng,
};
use serde::Serialize;
use serde_json::Value;

/// Declared schema of one tool parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    /// JSON type name. Every parameter here is a string.
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl ParameterSpec {
    pub fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: "string",
            required: true,
            default: None,
            description,
        }
    }

    pub fn optional_string(name: &'static str, description: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required_string(name, description)
        }
    }

    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// Everything the host runtime needs to register a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    /// Staff section the tool is monitored under ("S-5").
    pub section: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParameterSpec>,
}

/// The contract every registered tool must fulfill.
pub trait ScenarioTool: Send + Sync {
    fn spec(&self) -> &ToolSpec;

    /// Parse `args` (a JSON object) and produce the tool's JSON result.
    ///
    /// - `rng`: this invocation's deterministic RNG stream
    fn invoke(&self, args: &Value, rng: &mut ScenarioRng) -> ToolResult<Value>;

    fn name(&self) -> &'static str {
        self.spec().name
    }
}

/// Non-strict argument access: unknown keys are ignored and an
/// explicit `null` counts as absent.
pub struct ToolArgs<'a> {
    tool: &'static str,
    args: &'a Value,
}

impl<'a> ToolArgs<'a> {
    pub fn new(tool: &'static str, args: &'a Value) -> ToolResult<Self> {
        if !args.is_object() {
            return Err(ToolError::InvalidArgument {
                tool: tool.to_string(),
                name: "arguments".to_string(),
                expected: "JSON object",
            });
        }
        Ok(Self { tool, args })
    }

    pub fn optional_str(&self, name: &str) -> ToolResult<Option<&'a str>> {
        match self.args.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ToolError::InvalidArgument {
                tool: self.tool.to_string(),
                name: name.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn required_str(&self, name: &str) -> ToolResult<&'a str> {
        self.optional_str(name)?
            .ok_or_else(|| ToolError::MissingArgument {
                tool: self.tool.to_string(),
                name: name.to_string(),
            })
    }
}
