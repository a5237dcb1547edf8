use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::ObstacleField;
use crate::rover::{Rover, StepOutcome};

pub const MAX_SCRIPT_SIZE: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("invalid JSON command")]
    InvalidJson,
    #[error("input exceeds {MAX_SCRIPT_SIZE} bytes")]
    MessageTooLarge,
    #[error("unknown command letter `{0}`")]
    UnknownCommandLetter(char),
    #[error("empty command script")]
    EmptyScript,
}

/// A single discrete rover action. Stateless: a kind holds no reference to
/// any rover and is reusable across rovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    Move,
    TurnLeft,
    TurnRight,
}

impl CommandKind {
    /// Dispatch the variant to exactly one rover operation. Turns always
    /// complete; a move reports whether it was blocked.
    pub fn apply(self, rover: &mut Rover, field: &ObstacleField) -> StepOutcome {
        match self {
            CommandKind::Move => rover.advance(field),
            CommandKind::TurnLeft => {
                rover.turn_left();
                StepOutcome::Completed
            }
            CommandKind::TurnRight => {
                rover.turn_right();
                StepOutcome::Completed
            }
        }
    }

    /// Script letter form: `M`, `L`, `R` (case-insensitive on parse).
    pub fn from_letter(c: char) -> Result<Self, ProtocolError> {
        match c.to_ascii_uppercase() {
            'M' => Ok(CommandKind::Move),
            'L' => Ok(CommandKind::TurnLeft),
            'R' => Ok(CommandKind::TurnRight),
            _ => Err(ProtocolError::UnknownCommandLetter(c)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            CommandKind::Move => 'M',
            CommandKind::TurnLeft => 'L',
            CommandKind::TurnRight => 'R',
        }
    }
}

/// A command as it moves through the execution queue: the action plus a
/// sequence id so per-command outcomes stay attributable in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: u32,
    pub kind: CommandKind,
}

/// Parse a letter script into an ordered command-kind list. Whitespace and
/// commas are separators; anything else must be a known letter. Malformed
/// scripts are rejected here, at construction time, never mid-run.
pub fn parse_script(script: &str) -> Result<Vec<CommandKind>, ProtocolError> {
    if script.len() > MAX_SCRIPT_SIZE {
        return Err(ProtocolError::MessageTooLarge);
    }

    let mut kinds = Vec::new();
    for c in script.chars() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        kinds.push(CommandKind::from_letter(c)?);
    }

    if kinds.is_empty() {
        return Err(ProtocolError::EmptyScript);
    }
    Ok(kinds)
}

/// Parse a single JSON command envelope.
pub fn parse_command(json: &str) -> Result<Command, ProtocolError> {
    if json.len() > MAX_SCRIPT_SIZE {
        return Err(ProtocolError::MessageTooLarge);
    }
    serde_json::from_str(json).map_err(|_| ProtocolError::InvalidJson)
}

/// Render a command-kind list back to its letter script.
pub fn render_script(kinds: &[CommandKind]) -> String {
    kinds.iter().map(|kind| kind.letter()).collect()
}
