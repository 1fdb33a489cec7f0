//! Policy-driven collector architecture.
//!
//! The state machine here executes basic motion and timed interaction; it
//! does not decide anything. Transitions are driven each tick by an external
//! 2-component action vector (a trained policy's output) fed through
//! [`ReactiveCollector::on_action`], plus zone signals from the host.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod collector;
pub mod states;

pub use collector::ReactiveCollector;
pub use states::{IdleState, InteractState, MoveState, IDLE, INTERACT, MOVE};
