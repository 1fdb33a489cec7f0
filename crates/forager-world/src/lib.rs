//! Domain model for the gather-and-deliver task.
//!
//! Sources yield typed resources, structures consume them against a
//! requirement table, and agents ferry one resource at a time between the
//! two. The world owns sources and structures; agents hold non-owning ids.
//! Host integration happens through the narrow extension traits in
//! [`world`]: body physics, target lookup, steering, and episode scoring.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod assign;
pub mod motion;
pub mod resource;
pub mod source;
pub mod structure;
pub mod world;
pub mod zone;

pub use agent::{AgentBody, AgentConfig};
pub use assign::{assign_goal, assign_target};
pub use resource::{Resource, ResourceKind};
pub use source::{Source, SourceId};
pub use structure::{Structure, StructureId};
pub use world::{BodyWorld, EpisodeWorld, SteerWorld, Steering, TargetWorld};
pub use zone::Zone;
