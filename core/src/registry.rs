//! The tool registry — the adapter between the agent runtime and
//! the scenario tools.
//!
//! RULES:
//!   - Tools are looked up by their registered name.
//!   - Every invocation gets a fresh RNG stream from the RngBank,
//!     keyed by its sequence number. No generator is shared.
//!   - Every invocation runs under the monitor, success or not.

use crate::{
    config::ToolConfig,
    contested_logistics_tool::{FlatScenarioTool, SectoredScenarioTool},
    error::{ToolError, ToolResult},
    monitor::{self, LogObserver, ToolObserver, TruncationLimits},
    rng::RngBank,
    tool::{ScenarioTool, ToolSpec},
    types::InvocationSeq,
};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct ToolRegistry {
    rng_bank:    RngBank,
    next_seq:    AtomicU64,
    limits:      TruncationLimits,
    tools:       Vec<Box<dyn ScenarioTool>>,
    observers:   Vec<Box<dyn ToolObserver>>,
}

impl ToolRegistry {
    /// An empty registry. Most callers want [`build`](Self::build).
    pub fn new(seed: u64, limits: TruncationLimits) -> Self {
        Self {
            rng_bank:  RngBank::new(seed),
            next_seq:  AtomicU64::new(0),
            limits,
            tools:     Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Registry with the canonical tool (plus the flat tool when
    /// configured) and a logging observer attached.
    pub fn build(config: &ToolConfig) -> Self {
        let mut registry = Self::new(config.seed, config.truncation());
        registry.register(Box::new(SectoredScenarioTool::new()));
        if config.register_flat_tool {
            registry.register(Box::new(FlatScenarioTool::new()));
        }
        registry.add_observer(Box::new(LogObserver));
        registry
    }

    /// Register a tool. A later registration under an existing name
    /// replaces the earlier one.
    pub fn register(&mut self, tool: Box<dyn ScenarioTool>) {
        if let Some(pos) = self.tools.iter().position(|t| t.name() == tool.name()) {
            log::warn!("replacing tool '{}'", tool.name());
            self.tools[pos] = tool;
        } else {
            self.tools.push(tool);
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn ToolObserver>) {
        self.observers.push(observer);
    }

    pub fn specs(&self) -> Vec<&ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    /// Number of invocations dispatched so far, including failed ones.
    pub fn invocation_count(&self) -> InvocationSeq {
        self.next_seq.load(Ordering::Relaxed)
    }

    /// Invoke `name` with JSON `args`. Safe to call from many threads.
    pub fn invoke(&self, name: &str, args: &Value) -> ToolResult<Value> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ToolError::ToolNotFound { name: name.to_string() })?;

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let mut rng = self.rng_bank.for_invocation(seq);
        let invocation_id = uuid::Uuid::new_v4().to_string();

        log::debug!("invocation #{seq} ({invocation_id}) -> {name}");

        monitor::monitored(
            tool.spec(),
            &invocation_id,
            args,
            self.limits,
            &self.observers,
            || tool.invoke(args, &mut rng),
        )
    }
}
