//! S-5 contested logistics tools: the sectored (canonical) and flat
//! adapters around the scenario resolvers.

use crate::{
    error::ToolResult,
    resolver::{FlatResolver, SectoredResolver},
    rng::ScenarioRng,
    sector::Sector,
    tool::{ParameterSpec, ScenarioTool, ToolArgs, ToolSpec},
};
use serde_json::Value;

pub const SECTORED_TOOL_NAME: &str = "s5_contested_logistics";
pub const FLAT_TOOL_NAME: &str = "s5_contested_logistics_flat";
pub const SECTION: &str = "S-5";

pub struct SectoredScenarioTool {
    spec: ToolSpec,
    resolver: SectoredResolver,
}

impl SectoredScenarioTool {
    pub fn new() -> Self {
        let spec = ToolSpec {
            name: SECTORED_TOOL_NAME,
            section: SECTION,
            description: "Simulate a contested logistics scenario for a unit. \
                          If scenario_type matches a scenario in the sector it is used, \
                          otherwise one is picked at random from the sector.",
            parameters: vec![
                ParameterSpec::required_string("unit", "Unit designation"),
                // Not an enum: unknown values fall back to the default sector.
                ParameterSpec::optional_string(
                    "sector",
                    "Sector of influence: 'intelligence', 'operations' or 'logistics' \
                     (case-insensitive; anything else means logistics)",
                )
                .with_default(Sector::DEFAULT.as_str()),
                ParameterSpec::optional_string("scenario_type", "Scenario id within the sector"),
            ],
        };
        Self {
            spec,
            resolver: SectoredResolver::new(),
        }
    }
}

impl Default for SectoredScenarioTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioTool for SectoredScenarioTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, args: &Value, rng: &mut ScenarioRng) -> ToolResult<Value> {
        let args = ToolArgs::new(SECTORED_TOOL_NAME, args)?;
        let unit = args.required_str("unit")?;
        let sector = args.optional_str("sector")?;
        let scenario_type = args.optional_str("scenario_type")?;

        let result = self.resolver.resolve(unit, sector, scenario_type, rng);
        Ok(serde_json::to_value(result)?)
    }
}

pub struct FlatScenarioTool {
    spec: ToolSpec,
    resolver: FlatResolver,
}

impl FlatScenarioTool {
    pub fn new() -> Self {
        let spec = ToolSpec {
            name: FLAT_TOOL_NAME,
            section: SECTION,
            description: "Look up a contested logistics scenario by id. \
                          Unknown ids report minimal impact.",
            parameters: vec![
                ParameterSpec::required_string("unit", "Unit designation"),
                ParameterSpec::required_string("scenario_type", "Scenario id"),
            ],
        };
        Self {
            spec,
            resolver: FlatResolver::new(),
        }
    }
}

impl Default for FlatScenarioTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioTool for FlatScenarioTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, args: &Value, _rng: &mut ScenarioRng) -> ToolResult<Value> {
        let args = ToolArgs::new(FLAT_TOOL_NAME, args)?;
        let unit = args.required_str("unit")?;
        let scenario_type = args.required_str("scenario_type")?;

        let result = self.resolver.resolve(unit, scenario_type);
        Ok(serde_json::to_value(result)?)
    }
}
