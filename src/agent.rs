use heapless::Vec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::grid::{GridError, ObstacleField};
use crate::mission::{MissionPlan, MissionReport};
use crate::protocol::{parse_script, Command, CommandKind, ProtocolError};
use crate::rover::{Rover, StepOutcome};
use crate::telemetry::{MissionStats, StatusReport, StepRecord, TraceLog};

pub const MAX_COMMAND_QUEUE_SIZE: usize = 32;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("command queue full (capacity {MAX_COMMAND_QUEUE_SIZE})")]
    CommandQueueFull,
}

/// Orchestrator for one rover run: owns the rover, the obstacle field, a
/// bounded FIFO command queue, and the execution trace.
///
/// Execution is strictly sequential. Each command completes fully before
/// the next begins, in the order commands were queued.
#[derive(Debug)]
pub struct RoverAgent {
    rover: Rover,
    field: ObstacleField,
    command_queue: Vec<Command, MAX_COMMAND_QUEUE_SIZE>,
    log: TraceLog,
    command_counter: u32,
}

impl RoverAgent {
    pub fn new(rover: Rover, field: ObstacleField) -> Self {
        Self {
            rover,
            field,
            command_queue: Vec::new(),
            log: TraceLog::new(),
            command_counter: 0,
        }
    }

    /// Build an agent from a plan's start pose and obstacle list.
    pub fn from_plan(plan: &MissionPlan) -> Result<Self, AgentError> {
        let field = plan.obstacle_field()?;
        Ok(Self::new(
            Rover::new(plan.start.x, plan.start.y, plan.heading),
            field,
        ))
    }

    fn next_id(&mut self) -> u32 {
        self.command_counter = self.command_counter.wrapping_add(1);
        self.command_counter
    }

    /// Enqueue one command for later processing. Returns the assigned
    /// sequence id, or an error when the bounded queue is at capacity.
    pub fn queue_command(&mut self, kind: CommandKind) -> Result<u32, AgentError> {
        if self.command_queue.is_full() {
            return Err(AgentError::CommandQueueFull);
        }
        let id = self.next_id();
        let _ = self.command_queue.push(Command { id, kind });
        Ok(id)
    }

    /// Parse a letter script and enqueue every command in order.
    pub fn queue_script(&mut self, script: &str) -> Result<(), AgentError> {
        for kind in parse_script(script)? {
            self.queue_command(kind)?;
        }
        Ok(())
    }

    /// Drain the queue in FIFO order. Returns the number of commands
    /// executed. Blocked moves are recorded, not raised.
    pub fn process_commands(&mut self) -> usize {
        let mut executed = 0;
        while !self.command_queue.is_empty() {
            // Front removal, not swap_remove, to preserve queue order.
            let command = self.command_queue.remove(0);
            self.execute(command);
            executed += 1;
        }
        executed
    }

    /// Execute one command immediately, bypassing the queue.
    pub fn execute_kind(&mut self, kind: CommandKind) -> StepRecord {
        let id = self.next_id();
        self.execute(Command { id, kind })
    }

    /// Execute a command sequence strictly in slice order.
    pub fn run(&mut self, kinds: &[CommandKind]) {
        for &kind in kinds {
            self.execute_kind(kind);
        }
    }

    fn execute(&mut self, command: Command) -> StepRecord {
        let outcome = command.kind.apply(&mut self.rover, &self.field);
        let record = StepRecord {
            command_id: command.id,
            kind: command.kind,
            outcome,
            position: self.rover.position(),
            heading: self.rover.heading(),
        };

        match outcome {
            StepOutcome::Blocked { obstacle } => {
                warn!(
                    "command {} discarded: obstacle at {}",
                    command.id, obstacle
                );
            }
            StepOutcome::Completed => {
                debug!(
                    "command {} ({:?}): rover at {} facing {}",
                    command.id,
                    command.kind,
                    self.rover.position(),
                    self.rover.heading()
                );
            }
        }

        self.log.record(record);
        record
    }

    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    /// The field is mutable between runs; movement semantics are unchanged
    /// by additions.
    pub fn field_mut(&mut self) -> &mut ObstacleField {
        &mut self.field
    }

    pub fn queued_commands(&self) -> usize {
        self.command_queue.len()
    }

    pub fn status_report(&self) -> StatusReport {
        self.rover.status_report(&self.field)
    }

    pub fn trace(&self) -> &[StepRecord] {
        self.log.records()
    }

    pub fn stats(&self) -> MissionStats {
        self.log.stats()
    }

    /// Consume the agent and assemble the final mission report.
    pub fn into_report(self) -> MissionReport {
        let status = self.rover.status_report(&self.field);
        MissionReport {
            final_position: self.rover.position(),
            final_heading: self.rover.heading(),
            status,
            stats: self.log.stats(),
            trace: self.log.into_records(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn test_agent() -> RoverAgent {
        RoverAgent::new(Rover::new(0, 0, Direction::North), ObstacleField::new())
    }

    #[test]
    fn test_queue_rejects_overflow() {
        let mut agent = test_agent();
        for _ in 0..MAX_COMMAND_QUEUE_SIZE {
            agent.queue_command(CommandKind::Move).unwrap();
        }
        assert!(matches!(
            agent.queue_command(CommandKind::Move),
            Err(AgentError::CommandQueueFull)
        ));
    }

    #[test]
    fn test_commands_execute_in_queue_order() {
        let mut agent = test_agent();
        agent.queue_script("MRM").unwrap();
        let executed = agent.process_commands();
        assert_eq!(executed, 3);

        let kinds: std::vec::Vec<CommandKind> = agent.trace().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![CommandKind::Move, CommandKind::TurnRight, CommandKind::Move]
        );
        // North one cell, then East one cell.
        assert_eq!(agent.rover().position().x, 1);
        assert_eq!(agent.rover().position().y, 1);
    }

    #[test]
    fn test_sequence_ids_are_monotonic() {
        let mut agent = test_agent();
        let first = agent.queue_command(CommandKind::TurnLeft).unwrap();
        let second = agent.queue_command(CommandKind::TurnRight).unwrap();
        assert_eq!(second, first + 1);
    }
}
