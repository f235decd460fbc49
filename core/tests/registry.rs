//! Registry and monitoring tests.
//!
//! Tests cover: dispatch by name, telemetry on success and failure,
//! concurrent invocation.

use contested_core::{
    config::ToolConfig,
    error::{ToolError, ToolResult},
    event::ToolEvent,
    monitor::{RecordingObserver, ToolObserver},
    registry::ToolRegistry,
    rng::ScenarioRng,
    tool::{ScenarioTool, ToolSpec},
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Lets the test keep a handle on an observer owned by the registry.
struct Shared(Arc<RecordingObserver>);

impl ToolObserver for Shared {
    fn on_event(&self, event: &ToolEvent) {
        self.0.on_event(event);
    }
}

fn build_recorded(config: &ToolConfig) -> (ToolRegistry, Arc<RecordingObserver>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let recorder = Arc::new(RecordingObserver::new());
    let mut registry = ToolRegistry::build(config);
    registry.add_observer(Box::new(Shared(Arc::clone(&recorder))));
    (registry, recorder)
}

#[test]
fn build_registers_canonical_tool_only_by_default() {
    let registry = ToolRegistry::build(&ToolConfig::default());
    assert_eq!(registry.tool_names(), vec!["s5_contested_logistics"]);
}

#[test]
fn build_can_register_flat_tool() {
    let registry = ToolRegistry::build(&ToolConfig::default_test());
    assert_eq!(
        registry.tool_names(),
        vec!["s5_contested_logistics", "s5_contested_logistics_flat"]
    );
    assert_eq!(registry.specs().len(), 2);
}

#[test]
fn successful_call_emits_start_then_complete() {
    let (registry, recorder) = build_recorded(&ToolConfig::default_test());

    let out = registry
        .invoke(
            "s5_contested_logistics",
            &json!({ "unit": "Bravo-2", "sector": "intelligence", "scenario_type": "counter-intel" }),
        )
        .expect("invoke");

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type(), "tool_start");
    assert_eq!(events[1].event_type(), "tool_complete");
    assert_eq!(events[0].invocation_id(), events[1].invocation_id());
    assert!(events.iter().all(|e| e.tool_name() == "s5_contested_logistics"));

    match &events[0] {
        ToolEvent::ToolStart { section, parameters, .. } => {
            assert_eq!(section, "S-5");
            assert_eq!(parameters["unit"], "Bravo-2");
        }
        other => panic!("unexpected first event {other:?}"),
    }
    match &events[1] {
        ToolEvent::ToolComplete { result, success, duration_secs, .. } => {
            assert!(*success);
            assert!(*duration_secs >= 0.0);
            assert_eq!(result, &out);
        }
        other => panic!("unexpected second event {other:?}"),
    }
}

#[test]
fn failed_call_emits_error_and_returns_it() {
    let (registry, recorder) = build_recorded(&ToolConfig::default_test());

    let err = registry
        .invoke("s5_contested_logistics_flat", &json!({ "unit": "Y" }))
        .unwrap_err();
    assert!(matches!(err, ToolError::MissingArgument { .. }));

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    match &events[1] {
        ToolEvent::ToolError { error, success, .. } => {
            assert!(!*success);
            assert!(error.contains("scenario_type"));
        }
        other => panic!("expected tool_error, got {other:?}"),
    }
}

#[test]
fn unknown_tool_is_not_dispatched() {
    let (registry, recorder) = build_recorded(&ToolConfig::default());

    let err = registry.invoke("s4_resupply", &json!({})).unwrap_err();
    assert!(matches!(err, ToolError::ToolNotFound { ref name } if name == "s4_resupply"));
    assert!(recorder.events().is_empty());
    assert_eq!(registry.invocation_count(), 0);
}

#[test]
fn long_parameters_are_truncated_in_telemetry() {
    let config = ToolConfig {
        param_truncate_chars: 10,
        ..ToolConfig::default_test()
    };
    let (registry, recorder) = build_recorded(&config);
    let unit = "U".repeat(40);

    let out = registry
        .invoke("s5_contested_logistics", &json!({ "unit": unit }))
        .expect("invoke");
    assert_eq!(out["unit"].as_str().map(str::len), Some(40));

    match &recorder.events()[0] {
        ToolEvent::ToolStart { parameters, .. } => {
            assert_eq!(parameters["unit"].as_str().map(str::len), Some(10));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

/// Returns a bare string so the monitor has to wrap and cut it.
struct BriefingTool {
    spec: ToolSpec,
}

impl ScenarioTool for BriefingTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, _args: &Value, _rng: &mut ScenarioRng) -> ToolResult<Value> {
        Ok(Value::String("B".repeat(80)))
    }
}

#[test]
fn scalar_results_are_truncated_in_telemetry() {
    let config = ToolConfig {
        result_truncate_chars: 16,
        ..ToolConfig::default_test()
    };
    let (mut registry, recorder) = build_recorded(&config);
    registry.register(Box::new(BriefingTool {
        spec: ToolSpec {
            name: "s5_briefing",
            section: "S-5",
            description: "Plain-text briefing",
            parameters: vec![],
        },
    }));

    let out = registry.invoke("s5_briefing", &json!({})).expect("invoke");
    assert_eq!(out.as_str().map(str::len), Some(80), "caller gets the full value");

    match &recorder.events()[1] {
        ToolEvent::ToolComplete { result, .. } => {
            assert_eq!(result, &json!({ "value": "B".repeat(16) }));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn events_serialize_with_type_tag() {
    let (registry, recorder) = build_recorded(&ToolConfig::default_test());
    registry
        .invoke("s5_contested_logistics_flat", &json!({ "unit": "Y", "scenario_type": "sabotage" }))
        .expect("invoke");

    let json = serde_json::to_value(&recorder.events()[1]).expect("serialize");
    assert_eq!(json["type"], "tool_complete");
    assert_eq!(json["tool_name"], "s5_contested_logistics_flat");
    assert_eq!(json["result"]["impact"], "Critical supplies destroyed by insider threat.");
}

#[test]
fn concurrent_invocations_all_succeed() {
    let (registry, recorder) = build_recorded(&ToolConfig::default_test());
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    let out = registry
                        .invoke("s5_contested_logistics", &json!({ "unit": format!("U-{i}") }))
                        .expect("invoke");
                    assert_eq!(out["sector"], "logistics");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(registry.invocation_count(), 200);
    assert_eq!(recorder.events().len(), 400);
}
