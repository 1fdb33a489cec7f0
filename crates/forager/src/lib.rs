//! Umbrella crate that re-exports the `forager-*` building blocks.
//!
//! Three interchangeable control architectures for the gather-and-deliver
//! task, built on one state lifecycle contract: policy-driven
//! ([`reactive`]), action-level self-driving ([`action`]), and task-level
//! self-driving with event-based completion ([`task`]).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use forager_core as core;

#[cfg(feature = "world")]
#[cfg_attr(docsrs, doc(cfg(feature = "world")))]
pub use forager_world as world;

#[cfg(feature = "reactive")]
#[cfg_attr(docsrs, doc(cfg(feature = "reactive")))]
pub use forager_reactive as reactive;

#[cfg(feature = "action")]
#[cfg_attr(docsrs, doc(cfg(feature = "action")))]
pub use forager_action as action;

#[cfg(feature = "task")]
#[cfg_attr(docsrs, doc(cfg(feature = "task")))]
pub use forager_task as task;
