//! Cost/efficiency trade-off over a sweep.

use crate::input::SimulationInput;
use crate::simulate::SimulationResult;
use crate::sweep::{
    DEFAULT_SWEEP_POINTS, SweepDefinition, SweepError, SweepParameter, SweepResult, SweepSpacing,
    execute_sweep,
};
use serde::Serialize;
use tracing::debug;

/// Default flow-rate range explored by [`default_flow_sweep`] [m³/s].
pub const DEFAULT_FLOW_RANGE: (f64, f64) = (0.1, 5.0);

/// Scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Objective {
    /// Efficiency [%] that scores 1.0 before the cost penalty
    pub target_efficiency: f64,
    /// Cost at which the score reaches zero
    pub max_cost: f64,
    /// Cost per unit of the swept parameter
    pub cost_per_unit: f64,
}

impl Objective {
    pub fn new(
        target_efficiency: f64,
        max_cost: f64,
        cost_per_unit: f64,
    ) -> Result<Self, SweepError> {
        if !(target_efficiency.is_finite() && target_efficiency > 0.0) {
            return Err(SweepError::InvalidObjective {
                what: "target efficiency must be positive",
            });
        }
        if !(max_cost.is_finite() && max_cost > 0.0) {
            return Err(SweepError::InvalidObjective {
                what: "max cost must be positive",
            });
        }
        if !cost_per_unit.is_finite() {
            return Err(SweepError::InvalidObjective {
                what: "cost per unit must be finite",
            });
        }
        Ok(Self {
            target_efficiency,
            max_cost,
            cost_per_unit,
        })
    }

    /// `(efficiency / target) · (1 − cost / max_cost)`.
    pub fn score(&self, efficiency: f64, cost: f64) -> f64 {
        (efficiency / self.target_efficiency) * (1.0 - cost / self.max_cost)
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self {
            target_efficiency: 85.0,
            max_cost: 1000.0,
            cost_per_unit: 200.0,
        }
    }
}

/// One successful sweep point with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredPoint {
    pub point_index: usize,
    /// Swept parameter value
    pub value: f64,
    /// `100·ε` [%]
    pub efficiency: f64,
    pub cost: f64,
    pub score: f64,
    pub result: SimulationResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    pub definition: SweepDefinition,
    pub objective: Objective,
    /// Scored points in grid order; failed points are absent
    pub points: Vec<ScoredPoint>,
    pub best: Option<ScoredPoint>,
    pub sweep: SweepResult,
}

/// Flow-rate sweep over [`DEFAULT_FLOW_RANGE`] with the default grid.
pub fn default_flow_sweep() -> SweepDefinition {
    SweepDefinition {
        parameter: SweepParameter::FlowRate,
        start: DEFAULT_FLOW_RANGE.0,
        end: DEFAULT_FLOW_RANGE.1,
        num_points: DEFAULT_SWEEP_POINTS,
        spacing: SweepSpacing::Linear,
    }
}

/// Sweep `def` from `base` and score every successful point.
///
/// The best point is the highest score; on ties the earlier grid point wins.
/// `best` is `None` only when every point failed.
pub fn optimize(
    base: &SimulationInput,
    def: &SweepDefinition,
    objective: &Objective,
) -> OptimizationReport {
    let sweep = execute_sweep(base, def);

    let points: Vec<ScoredPoint> = sweep
        .results
        .iter()
        .enumerate()
        .filter_map(|(point_index, r)| {
            let result = r.as_ref()?;
            let value = sweep.independent_values[point_index];
            let efficiency = 100.0 * result.effectiveness;
            let cost = objective.cost_per_unit * value;
            Some(ScoredPoint {
                point_index,
                value,
                efficiency,
                cost,
                score: objective.score(efficiency, cost),
                result: *result,
            })
        })
        .collect();

    let best = points
        .iter()
        .copied()
        .fold(None::<ScoredPoint>, |best, p| match best {
            Some(b) if b.score >= p.score => Some(b),
            _ => Some(p),
        });

    if let Some(b) = &best {
        debug!(value = b.value, score = b.score, "best point selected");
    }

    OptimizationReport {
        definition: def.clone(),
        objective: *objective,
        points,
        best,
        sweep,
    }
}
