//! Shared primitive types used across the tool layer.

/// A stable, short scenario identifier ("sabotage", "counter-intel").
pub type ScenarioId = &'static str;

/// Sequence number of a tool invocation within one registry.
pub type InvocationSeq = u64;
