//! # Grid Rover Simulator
//!
//! A command-driven rover simulation library: a single rover on an
//! unbounded 2D grid executes an ordered command sequence while static
//! obstacles gate its movement.
//!
//! ## Features
//!
//! - **Movement state machine**: position/heading transitions gated by
//!   obstacle checks; blocked moves are discarded, never raised as faults
//! - **Command processing**: letter scripts (`M`/`L`/`R`) and JSON mission
//!   plans, rejected at construction time when malformed
//! - **Sequential execution**: bounded FIFO command queue, strictly ordered,
//!   fully deterministic
//! - **Mission reporting**: per-command trace records, run counters, and a
//!   human-readable status report
//!
//! ## Quick Start
//!
//! ```rust
//! use roversim::{Direction, ObstacleField, Rover, RoverAgent};
//!
//! let mut field = ObstacleField::new();
//! field.add(2, 2).unwrap();
//!
//! let mut agent = RoverAgent::new(Rover::new(0, 0, Direction::East), field);
//! agent.queue_script("MMRM").unwrap();
//! agent.process_commands();
//!
//! println!("{}", agent.status_report());
//! ```
//!
//! ## Architecture
//!
//! - [`direction`] - Compass headings and the cyclic rotation order
//! - [`grid`] - Positions and the obstacle field
//! - [`rover`] - The rover state machine
//! - [`protocol`] - Command variants, dispatch, and script parsing
//! - [`agent`] - Orchestrator: queue, execution, trace
//! - [`mission`] - Mission plans and the end-to-end driver
//! - [`telemetry`] - Status reports, step records, run counters

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod agent;
pub mod direction;
pub mod grid;
pub mod mission;
pub mod protocol;
pub mod rover;
pub mod telemetry;

// Re-export main public types for convenience
pub use agent::{AgentError, RoverAgent};
pub use direction::Direction;
pub use grid::{GridError, ObstacleField, Position};
pub use mission::{run_mission, MissionError, MissionPlan, MissionReport};
pub use protocol::{parse_script, Command, CommandKind, ProtocolError};
pub use rover::{Rover, StepOutcome};
pub use telemetry::{MissionStats, StatusReport, StepRecord};
