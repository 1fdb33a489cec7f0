//! Self-driving collector, action level.
//!
//! Same low-level state set as the reactive architecture, but no external
//! input: whenever the current state reports finished, the controller picks
//! the next action by comparing carrying status and zone presence flags. The
//! move state navigates itself using the host's steering function.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod collector;
pub mod states;

pub use collector::ActionCollector;
pub use states::{IdleState, InteractState, MoveState, IDLE, INTERACT, MOVE};
