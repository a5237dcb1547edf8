use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::{AgentError, RoverAgent};
use crate::direction::Direction;
use crate::grid::{GridError, ObstacleField, Position};
use crate::protocol::CommandKind;
use crate::telemetry::{MissionStats, StatusReport, StepRecord};

pub const MAX_PLAN_SIZE: usize = 4096;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("plan exceeds {MAX_PLAN_SIZE} bytes")]
    PlanTooLarge,
    #[error("invalid mission plan: {0}")]
    InvalidPlan(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Declarative mission setup: where the rover starts, what blocks the grid,
/// and the ordered command sequence to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionPlan {
    pub start: Position,
    pub heading: Direction,
    #[serde(default)]
    pub obstacles: Vec<Position>,
    pub commands: Vec<CommandKind>,
}

impl MissionPlan {
    /// Parse a plan from JSON, rejecting oversized or malformed input at
    /// construction time.
    pub fn from_json(json: &str) -> Result<Self, MissionError> {
        if json.len() > MAX_PLAN_SIZE {
            return Err(MissionError::PlanTooLarge);
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, MissionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the obstacle field this plan describes. Duplicates collapse.
    pub fn obstacle_field(&self) -> Result<ObstacleField, GridError> {
        ObstacleField::from_positions(self.obstacles.iter().copied())
    }
}

/// Everything an external reporter needs from a finished run: the final
/// pose, the status snapshot, the per-command trace, and the counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub final_position: Position,
    pub final_heading: Direction,
    pub status: StatusReport,
    pub stats: MissionStats,
    pub trace: Vec<StepRecord>,
}

/// Execute a plan start to finish: build the agent, run every command
/// strictly in plan order, and collect the report. Same plan in, same
/// report out.
pub fn run_mission(plan: &MissionPlan) -> Result<MissionReport, MissionError> {
    let mut agent = RoverAgent::from_plan(plan)?;
    agent.run(&plan.commands);
    Ok(agent.into_report())
}
