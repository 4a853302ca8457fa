use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sensory signal, valid only for the agent's current square and the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Percept {
    /// Walked into a wall last move.
    Bump,
    /// A Wumpus is adjacent.
    Smell,
    /// A pit is adjacent.
    Breeze,
    /// The Supmuw is adjacent.
    Moo,
    /// Gold is on this square.
    Glitter,
    /// The player did not survive this square.
    Dead,
}

impl Percept {
    pub const ALL: [Percept; 6] = [
        Percept::Bump,
        Percept::Smell,
        Percept::Breeze,
        Percept::Moo,
        Percept::Glitter,
        Percept::Dead,
    ];

    const fn bit(self) -> u8 {
        match self {
            Percept::Bump => 1,
            Percept::Smell => 1 << 1,
            Percept::Breeze => 1 << 2,
            Percept::Moo => 1 << 3,
            Percept::Glitter => 1 << 4,
            Percept::Dead => 1 << 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Percept::Bump => "Bump",
            Percept::Smell => "Smell",
            Percept::Breeze => "Breeze",
            Percept::Moo => "Moo",
            Percept::Glitter => "Glitter",
            Percept::Dead => "Dead",
        }
    }
}

/// The set of percepts sensed on one square in one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Percepts(u8);

impl Percepts {
    pub const NONE: Percepts = Percepts(0);

    pub fn contains(self, percept: Percept) -> bool {
        self.0 & percept.bit() != 0
    }

    pub fn insert(&mut self, percept: Percept) {
        self.0 |= percept.bit();
    }

    pub fn with(mut self, percept: Percept) -> Self {
        self.insert(percept);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Percept> {
        Percept::ALL.into_iter().filter(move |p| self.contains(*p))
    }

    /// True when no hazard percept (Smell or Breeze) is present, i.e. every neighbour is free of
    /// pits and Wumpuses.
    pub fn is_calm(self) -> bool {
        !self.contains(Percept::Smell) && !self.contains(Percept::Breeze)
    }
}

impl FromIterator<Percept> for Percepts {
    fn from_iter<I: IntoIterator<Item = Percept>>(iter: I) -> Self {
        let mut out = Percepts::NONE;
        for p in iter {
            out.insert(p);
        }
        out
    }
}

/// Renders the fixed six-slot report, e.g. `[Bump,None,Breeze,None,None,None]`.
impl fmt::Display for Percepts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in Percept::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(if self.contains(*p) { p.name() } else { "None" })?;
        }
        f.write_str("]")
    }
}
