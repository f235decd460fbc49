//! Monitoring wrapper: emits start/complete/error events around a
//! tool call without changing its outcome.

use crate::{
    error::ToolResult,
    event::ToolEvent,
    tool::ToolSpec,
};
use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::Mutex;
use std::time::Instant;

/// Receives every telemetry event. Must tolerate concurrent calls.
pub trait ToolObserver: Send + Sync {
    fn on_event(&self, event: &ToolEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ToolObserver for LogObserver {
    fn on_event(&self, event: &ToolEvent) {
        match event {
            ToolEvent::ToolStart { tool_name, section, parameters, .. } => {
                log::info!("[{section}] {tool_name} start {}", Value::Object(parameters.clone()));
            }
            ToolEvent::ToolComplete { tool_name, section, duration_secs, .. } => {
                log::info!("[{section}] {tool_name} complete in {duration_secs:.6}s");
            }
            ToolEvent::ToolError { tool_name, section, error, .. } => {
                log::warn!("[{section}] {tool_name} failed: {error}");
            }
        }
    }
}

/// Keeps every event in memory. Used by tooling and tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ToolEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ToolEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ToolObserver for RecordingObserver {
    fn on_event(&self, event: &ToolEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TruncationLimits {
    pub param_chars: usize,
    pub result_chars: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            param_chars: 100,
            result_chars: 500,
        }
    }
}

/// Run `call` under monitoring. The call's result (or error) is
/// returned unchanged after the matching event is emitted.
pub fn monitored<F>(
    spec: &ToolSpec,
    invocation_id: &str,
    args: &Value,
    limits: TruncationLimits,
    observers: &[Box<dyn ToolObserver>],
    call: F,
) -> ToolResult<Value>
where
    F: FnOnce() -> ToolResult<Value>,
{
    emit(observers, &ToolEvent::ToolStart {
        invocation_id: invocation_id.to_string(),
        tool_name: spec.name.to_string(),
        section: spec.section.to_string(),
        parameters: record_parameters(args, limits.param_chars),
        timestamp: Utc::now(),
    });

    let started = Instant::now();
    let outcome = call();
    let duration_secs = started.elapsed().as_secs_f64();

    let event = match &outcome {
        Ok(value) => ToolEvent::ToolComplete {
            invocation_id: invocation_id.to_string(),
            tool_name: spec.name.to_string(),
            section: spec.section.to_string(),
            duration_secs,
            result: record_result(value, limits.result_chars),
            success: true,
            timestamp: Utc::now(),
        },
        Err(e) => ToolEvent::ToolError {
            invocation_id: invocation_id.to_string(),
            tool_name: spec.name.to_string(),
            section: spec.section.to_string(),
            duration_secs,
            error: e.to_string(),
            success: false,
            timestamp: Utc::now(),
        },
    };
    emit(observers, &event);

    outcome
}

fn emit(observers: &[Box<dyn ToolObserver>], event: &ToolEvent) {
    for observer in observers {
        observer.on_event(event);
    }
}

/// Each argument as its string form, cut to `max_chars`.
fn record_parameters(args: &Value, max_chars: usize) -> Map<String, Value> {
    match args {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(truncate(&display(v), max_chars))))
            .collect(),
        other => {
            let mut map = Map::new();
            map.insert("args".into(), Value::String(truncate(&display(other), max_chars)));
            map
        }
    }
}

/// Objects pass through; arrays become `{items, count}`; anything
/// else becomes `{value}` with its string form cut to `max_chars`.
fn record_result(value: &Value, max_chars: usize) -> Value {
    match value {
        Value::Object(_) => value.clone(),
        Value::Array(items) => serde_json::json!({
            "items": items,
            "count": items.len(),
        }),
        other => serde_json::json!({ "value": truncate(&display(other), max_chars) }),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
