//! scenario-runner: headless host for the contested logistics tools.
//!
//! Usage:
//!   scenario-runner --unit Bravo-2 --sector intelligence --scenario counter-intel
//!   scenario-runner --unit Y --scenario sabotage --flat
//!   scenario-runner --list
//!   scenario-runner --seed 12345 --ipc-mode

use anyhow::Result;
use contested_core::{
    config::ToolConfig,
    contested_logistics_tool::{FLAT_TOOL_NAME, SECTORED_TOOL_NAME},
    registry::ToolRegistry,
};
use serde_json::{json, Map, Value};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    ListTools,
    Invoke {
        tool: String,
        #[serde(default = "empty_args")]
        args: Value,
    },
    Quit,
}

fn empty_args() -> Value {
    Value::Object(Map::new())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = has_flag(&args, "--ipc-mode");
    let list = has_flag(&args, "--list");
    let flat = has_flag(&args, "--flat");

    let mut config = match arg_value(&args, "--config") {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    if flat {
        config.register_flat_tool = true;
    }

    let registry = ToolRegistry::build(&config);
    log::info!("seed={} tools={:?}", registry.seed(), registry.tool_names());

    if ipc_mode {
        let stdin = io::stdin();
        return run_ipc_loop(&registry, stdin.lock(), io::stdout());
    }

    if list {
        println!("{}", serde_json::to_string_pretty(&registry.specs())?);
        return Ok(());
    }

    let mut call_args = Map::new();
    for (flag, key) in [("--unit", "unit"), ("--sector", "sector"), ("--scenario", "scenario_type")] {
        if let Some(value) = arg_value(&args, flag) {
            call_args.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    let tool = if flat { FLAT_TOOL_NAME } else { SECTORED_TOOL_NAME };

    let result = registry.invoke(tool, &Value::Object(call_args))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Serve line-delimited JSON commands until `quit` or EOF.
fn run_ipc_loop(registry: &ToolRegistry, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(output, "{}", json!({ "error": e.to_string() }))?;
                output.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::ListTools => {
                writeln!(output, "{}", serde_json::to_string(&registry.specs())?)?;
            }
            IpcCommand::Invoke { tool, args } => {
                // Tool errors go back to the caller; the loop keeps serving.
                let reply = match registry.invoke(&tool, &args) {
                    Ok(result) => json!({ "tool": tool, "result": result }),
                    Err(e) => json!({ "tool": tool, "error": e.to_string() }),
                };
                writeln!(output, "{reply}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
