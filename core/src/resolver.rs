//! The scenario resolver: unit + optional sector/scenario in,
//! a fully populated scenario record out.
//!
//! RULE: resolution never fails. Unknown sectors normalise to the
//! default sector, unknown scenario ids fall back to a random pick
//! (sectored) or a fixed sentinel (flat).

use crate::{
    catalog::{self, UNKNOWN_SCENARIO_IMPACT},
    rng::ScenarioRng,
    sector::Sector,
};
use serde::{Deserialize, Serialize};

/// Fixed advice attached to every resolved scenario.
pub const RECOMMENDATION: &str = "Review alternate supply routes and increase convoy security.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioResult {
    pub unit: String,
    pub sector: Sector,
    pub scenario_type: String,
    pub impact: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlatScenarioResult {
    pub unit: String,
    pub scenario_type: String,
    pub impact: String,
    pub recommendation: String,
}

/// How a sectored resolution arrived at its scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Explicit,
    Random,
}

/// Resolver over the three-sector catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectoredResolver;

impl SectoredResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        unit: &str,
        sector: Option<&str>,
        scenario_type: Option<&str>,
        rng: &mut ScenarioRng,
    ) -> ScenarioResult {
        self.resolve_traced(unit, sector, scenario_type, rng).0
    }

    /// Same as [`resolve`](Self::resolve) but also reports whether the
    /// scenario was matched or drawn.
    pub fn resolve_traced(
        &self,
        unit: &str,
        sector: Option<&str>,
        scenario_type: Option<&str>,
        rng: &mut ScenarioRng,
    ) -> (ScenarioResult, Selection) {
        let sector = Sector::normalize(sector);

        // Empty ids count as "not given".
        let explicit = scenario_type
            .filter(|id| !id.is_empty())
            .and_then(|id| catalog::find_in_sector(sector, id));

        let (selection, &(id, impact)) = match explicit {
            Some(entry) => (Selection::Explicit, entry),
            None => {
                if let Some(requested) = scenario_type.filter(|id| !id.is_empty()) {
                    log::debug!("scenario {requested:?} not in {sector}, drawing at random");
                }
                (Selection::Random, rng.choose(catalog::sector_scenarios(sector)))
            }
        };

        log::debug!("unit={unit} sector={sector} scenario={id} via {selection:?}");

        let result = ScenarioResult {
            unit: unit.to_string(),
            sector,
            scenario_type: id.to_string(),
            impact: impact.to_string(),
            recommendation: RECOMMENDATION.to_string(),
        };
        (result, selection)
    }
}

/// Resolver over the flat table. Deterministic; takes no RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatResolver;

impl FlatResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, unit: &str, scenario_type: &str) -> FlatScenarioResult {
        let impact = catalog::flat_impact(scenario_type).unwrap_or_else(|| {
            log::debug!("flat scenario {scenario_type:?} unknown");
            UNKNOWN_SCENARIO_IMPACT
        });

        FlatScenarioResult {
            unit: unit.to_string(),
            scenario_type: scenario_type.to_string(),
            impact: impact.to_string(),
            recommendation: RECOMMENDATION.to_string(),
        }
    }
}
