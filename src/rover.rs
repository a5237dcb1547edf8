use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::grid::{ObstacleField, Position};
use crate::telemetry::StatusReport;

/// Outcome of a single commanded step. A blocked move is nominal domain
/// behavior, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The rover state changed as commanded.
    Completed,
    /// A move was discarded because the target cell is blocked.
    Blocked { obstacle: Position },
}

impl StepOutcome {
    pub fn is_blocked(self) -> bool {
        matches!(self, StepOutcome::Blocked { .. })
    }
}

/// The rover: current position and heading. State changes only through the
/// move/turn operations below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rover {
    position: Position,
    heading: Direction,
}

impl Rover {
    /// Place a rover at an explicit start pose. The start cell is not
    /// validated against obstacles; a rover may legally begin on one.
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            position: Position::new(x, y),
            heading,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Advance one cell along the current heading. If the candidate cell is
    /// blocked the move is silently discarded: position and heading are both
    /// unchanged and no fault is raised.
    pub fn advance(&mut self, field: &ObstacleField) -> StepOutcome {
        let candidate = self.position.offset(self.heading.step());
        if field.blocked(candidate) {
            return StepOutcome::Blocked {
                obstacle: candidate,
            };
        }
        self.position = candidate;
        StepOutcome::Completed
    }

    /// Rotate the heading one step counter-clockwise. Position unchanged.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotate the heading one step clockwise. Position unchanged.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Snapshot of the current pose plus the obstacle-coincidence flag for
    /// the occupied cell.
    pub fn status_report(&self, field: &ObstacleField) -> StatusReport {
        StatusReport::capture(self, field)
    }
}
