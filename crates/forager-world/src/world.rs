use forager_core::{Vec3, WorldMut, WorldView};

use crate::source::{Source, SourceId};
use crate::structure::{Structure, StructureId};

/// Host steering/pathfinding black box.
///
/// Returns a 2-component movement instruction toward the destination; the
/// core treats the result as opaque driving input.
pub trait Steering {
    fn direction(&self, from: Vec3, to: Vec3) -> [f32; 2];
}

pub trait SteerWorld: WorldView {
    fn steering(&self) -> &dyn Steering;
}

/// Physical-body seam. The host integrates motion; the core only issues
/// forces and reads positions back.
pub trait BodyWorld: WorldMut {
    fn position(&self, agent: Self::Agent) -> Vec3;
    fn set_position(&mut self, agent: Self::Agent, position: Vec3);
    fn apply_force(&mut self, agent: Self::Agent, force: Vec3);
    fn set_facing(&mut self, agent: Self::Agent, direction: Vec3);
    fn zero_velocity(&mut self, agent: Self::Agent);
}

/// Source/structure lookup by id.
///
/// Every accessor returns `Option`: a stale id (the world retired the
/// object) degrades to a guarded no-op in the control path, never a fault.
pub trait TargetWorld: WorldMut {
    fn source(&self, id: SourceId) -> Option<&Source>;
    fn source_mut(&mut self, id: SourceId) -> Option<&mut Source>;
    fn structure(&self, id: StructureId) -> Option<&Structure>;
    fn structure_mut(&mut self, id: StructureId) -> Option<&mut Structure>;
}

/// Score and episode-termination sink.
///
/// Reward computation stays host-side; controllers only report deltas and
/// forced terminations.
pub trait EpisodeWorld: WorldMut {
    fn add_score(&mut self, agent: Self::Agent, delta: f32);
    fn end_episode(&mut self, agent: Self::Agent);
}
