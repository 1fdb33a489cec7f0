//! Deterministic, engine-agnostic FSM primitives for collector agents.
//!
//! The crate defines the state lifecycle contract shared by every control
//! architecture: enter/exit hooks, per-tick dispatch, a finished flag, and the
//! split between direct-action states (driven by caller input each tick) and
//! deferred-action states (timed callbacks). The machine itself holds no
//! behavior; architectures assemble it from an explicit state configuration.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod machine;
pub mod math;
pub mod signal;
pub mod state;
pub mod tick;
pub mod world;

pub use machine::{MachineError, StateConfig, StateMachine, TransitionPolicy};
pub use math::Vec3;
pub use signal::Signal;
pub use state::{State, StateAction, StateKey};
pub use tick::TickContext;
pub use world::{AgentId, WorldMut, WorldView};
