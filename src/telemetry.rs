use core::fmt::{self, Write as _};

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::grid::{ObstacleField, Position};
use crate::protocol::CommandKind;
use crate::rover::{Rover, StepOutcome};

pub const MAX_REPORT_SIZE: usize = 128;

pub type ReportBuffer = ArrayString<MAX_REPORT_SIZE>;

/// Snapshot of the rover: position, heading, and whether the occupied cell
/// coincides with a recorded obstacle. The flag is descriptive only;
/// obstacles block entry into a cell, not occupancy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub position: Position,
    pub heading: Direction,
    pub obstacle_detected: bool,
}

impl StatusReport {
    pub fn capture(rover: &Rover, field: &ObstacleField) -> Self {
        Self {
            position: rover.position(),
            heading: rover.heading(),
            obstacle_detected: field.blocked(rover.position()),
        }
    }

    /// Render into a preallocated buffer. The longest possible report fits
    /// within `MAX_REPORT_SIZE`, so truncation cannot occur.
    pub fn render(&self) -> ReportBuffer {
        let mut buf = ReportBuffer::new();
        let _ = write!(buf, "{}", self);
        buf
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rover is at {} facing {}. ", self.position, self.heading)?;
        if self.obstacle_detected {
            write!(f, "Obstacle detected.")
        } else {
            write!(f, "No obstacles detected.")
        }
    }
}

/// One executed command and the pose that resulted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub command_id: u32,
    pub kind: CommandKind,
    pub outcome: StepOutcome,
    pub position: Position,
    pub heading: Direction,
}

/// Run counters, folded as commands execute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStats {
    pub commands_executed: u32,
    pub moves_completed: u32,
    pub moves_blocked: u32,
    pub turns: u32,
}

/// Ordered record of every executed command. The record order is the
/// execution order; the log is never reordered.
#[derive(Debug, Default)]
pub struct TraceLog {
    records: Vec<StepRecord>,
    stats: MissionStats,
}

impl TraceLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            stats: MissionStats::default(),
        }
    }

    pub fn record(&mut self, record: StepRecord) {
        self.stats.commands_executed = self.stats.commands_executed.saturating_add(1);
        match (record.kind, record.outcome) {
            (CommandKind::Move, StepOutcome::Completed) => {
                self.stats.moves_completed = self.stats.moves_completed.saturating_add(1);
            }
            (CommandKind::Move, StepOutcome::Blocked { .. }) => {
                self.stats.moves_blocked = self.stats.moves_blocked.saturating_add(1);
            }
            _ => {
                self.stats.turns = self.stats.turns.saturating_add(1);
            }
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn stats(&self) -> MissionStats {
        self.stats
    }

    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }
}
