use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Coordinate, Orientation, RobotId},
    error::CommandError,
};

/// Snapshot of one robot handed to report observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotDescription {
    pub id: RobotId,
    pub position: Coordinate,
    pub orientation: Orientation,
}

impl fmt::Display for RobotDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.position, self.orientation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Command {
    Place {
        position: Coordinate,
        orientation: Orientation,
    },
    Move,
    Left,
    Right,
    Report,
    Robot(i64),
}

impl Command {
    /// Name of the controller handle this command is dispatched to.
    pub fn handle_name(&self) -> &'static str {
        match self {
            Self::Place { .. } => "on_place",
            Self::Move => "on_move",
            Self::Left => "on_left",
            Self::Right => "on_right",
            Self::Report => "on_report",
            Self::Robot(_) => "on_robot",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (keyword, args) = match line.split_once(char::is_whitespace) {
            Some((keyword, args)) => (keyword, args.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_uppercase().as_str() {
            "PLACE" => parse_place(args),
            "ROBOT" => args
                .parse::<i64>()
                .map(Command::Robot)
                .map_err(|_| CommandError::invalid_argument(format!("ROBOT expects an id, got '{args}'"))),
            "MOVE" => no_args(Command::Move, keyword, args),
            "LEFT" => no_args(Command::Left, keyword, args),
            "RIGHT" => no_args(Command::Right, keyword, args),
            "REPORT" => no_args(Command::Report, keyword, args),
            _ => Err(CommandError::UnknownCommand(keyword.to_string())),
        }
    }
}

fn parse_place(args: &str) -> Result<Command, CommandError> {
    let (position, orientation) = args
        .rsplit_once(',')
        .ok_or_else(|| CommandError::invalid_argument(format!("PLACE expects X,Y,F, got '{args}'")))?;
    Ok(Command::Place {
        position: position.parse()?,
        orientation: orientation.parse()?,
    })
}

fn no_args(command: Command, keyword: &str, args: &str) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::invalid_argument(format!(
            "{} takes no arguments, got '{args}'",
            keyword.to_ascii_uppercase()
        )))
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
