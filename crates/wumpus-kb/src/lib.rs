//! Knowledge-base agent for Wum+.
//!
//! The agent keeps a set of `(kind, x, y)` facts about the map, grows it from the percepts of
//! each turn, deduces hazard squares with the corner rule and walks only on squares it has
//! proven safe.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod destination;
pub mod inference;
pub mod perception;
pub mod planner;
pub mod selector;
pub mod store;

pub use agent::{AgentState, KnowledgeAgent};
pub use destination::Destination;
pub use inference::{infer_corners, EVIDENCE};
pub use perception::record_percepts;
pub use planner::{PathPlanner, PlanStats};
pub use store::FactStore;
