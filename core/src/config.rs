use crate::monitor::TruncationLimits;
use serde::{Deserialize, Serialize};

fn default_seed() -> u64 { 42 }
fn default_param_truncate_chars() -> usize { 100 }
fn default_result_truncate_chars() -> usize { 500 }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    /// Master seed for every invocation's RNG stream.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_param_truncate_chars")]
    pub param_truncate_chars: usize,
    #[serde(default = "default_result_truncate_chars")]
    pub result_truncate_chars: usize,
    /// Also register the flat lookup tool next to the sectored one.
    #[serde(default)]
    pub register_flat_tool: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            param_truncate_chars: default_param_truncate_chars(),
            result_truncate_chars: default_result_truncate_chars(),
            register_flat_tool: false,
        }
    }
}

impl ToolConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    /// In tests, use ToolConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ToolConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {path}: {e}"))?;
        log::debug!("loaded config from {path}: seed={}", config.seed);
        Ok(config)
    }

    /// Fixed seed, both tools registered.
    pub fn default_test() -> Self {
        Self {
            seed: 0xC0FF_EE00_5EED_0001,
            register_flat_tool: true,
            ..Self::default()
        }
    }

    pub fn truncation(&self) -> TruncationLimits {
        TruncationLimits {
            param_chars: self.param_truncate_chars,
            result_chars: self.result_truncate_chars,
        }
    }
}
