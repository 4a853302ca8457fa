//! Shared primitives for the Wum+ grid world: cells, percepts, knowledge-base facts, actions,
//! deterministic RNG and the world/policy seams.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod fact;
pub mod percept;
pub mod policy;
pub mod rng;
pub mod world;

pub use action::{Action, NextStep};
pub use cell::{Bounds, Cell, Direction, START};
pub use fact::{Fact, FactKind};
pub use percept::{Percept, Percepts};
pub use policy::Policy;
pub use rng::{DeterministicRng, SplitMix64};
pub use world::{Creature, TurnReport, WorldEvent, WorldMut, WorldView};
