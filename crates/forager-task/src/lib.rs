//! Self-driving collector, task level.
//!
//! States represent whole jobs (gather, haul, build) rather than low-level
//! actions; each state manages its own navigation and timing. Haul reports
//! completion through an event the controller drains, not a polled flag, so
//! job and goal completion are evaluated exactly once per haul.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod collector;
pub mod states;

pub use collector::TaskCollector;
pub use states::{BuildState, GatherState, HaulState, IdleState, BUILD, GATHER, HAUL, IDLE};
