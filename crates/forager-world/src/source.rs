use forager_core::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceKind};

/// Non-owning handle to a source; the world owns the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceId(pub u32);

/// A world object yielding resources of one kind, with finite stock.
#[derive(Debug, Clone)]
pub struct Source {
    kind: ResourceKind,
    count: u32,
    valid: bool,
    action_duration: u32,
    location: Vec3,
}

impl Source {
    pub const DEFAULT_ACTION_DURATION: u32 = 50;

    pub fn new(kind: ResourceKind, count: u32, location: Vec3) -> Self {
        Self {
            kind,
            count,
            valid: true,
            action_duration: Self::DEFAULT_ACTION_DURATION,
            location,
        }
    }

    /// Ticks a gather at this source takes.
    pub fn with_action_duration(mut self, ticks: u32) -> Self {
        self.action_duration = ticks;
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn action_duration(&self) -> u32 {
        self.action_duration
    }

    /// An exhausted source is never a valid gather target.
    pub fn is_valid(&self) -> bool {
        self.valid && self.count > 0
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Yield one resource, or `None` when empty or invalidated.
    ///
    /// Taking from an exhausted source is a guarded no-op, reachable under
    /// race-like orderings of zone signals.
    pub fn take_resource(&mut self) -> Option<Resource> {
        if !self.is_valid() {
            return None;
        }
        self.count -= 1;
        Some(Resource::new(self.kind))
    }
}
