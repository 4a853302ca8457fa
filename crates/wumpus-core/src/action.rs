use core::fmt;

use crate::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One turn's worth of intent, from either a human or the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Move(Direction),
    Shoot(Direction),
    Grab,
    Quit,
}

impl Action {
    /// Parse a single-key command.
    ///
    /// Lowercase `n/s/e/w` (and vi keys `k/j/l/h`) move, uppercase `N/S/E/W` shoot, `g` grabs
    /// and `q` quits.
    pub fn from_command(key: char) -> Option<Self> {
        let action = match key {
            'n' | 'k' => Action::Move(Direction::North),
            's' | 'j' => Action::Move(Direction::South),
            'e' | 'l' => Action::Move(Direction::East),
            'w' | 'h' => Action::Move(Direction::West),
            'N' => Action::Shoot(Direction::North),
            'S' => Action::Shoot(Direction::South),
            'E' => Action::Shoot(Direction::East),
            'W' => Action::Shoot(Direction::West),
            'g' => Action::Grab,
            'q' => Action::Quit,
            _ => return None,
        };
        Some(action)
    }

    pub fn command(self) -> char {
        match self {
            Action::Move(Direction::North) => 'n',
            Action::Move(Direction::South) => 's',
            Action::Move(Direction::East) => 'e',
            Action::Move(Direction::West) => 'w',
            Action::Shoot(Direction::North) => 'N',
            Action::Shoot(Direction::South) => 'S',
            Action::Shoot(Direction::East) => 'E',
            Action::Shoot(Direction::West) => 'W',
            Action::Grab => 'g',
            Action::Quit => 'q',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(d) => write!(f, "move {d}"),
            Action::Shoot(d) => write!(f, "shoot {d}"),
            Action::Grab => f.write_str("grab"),
            Action::Quit => f.write_str("quit"),
        }
    }
}

/// Result of a single path-planning query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NextStep {
    Go(Direction),
    /// No known-safe route exists (or the agent already stands on the goal).
    NoPath,
}
