use std::collections::BTreeMap;

use forager_core::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceKind};

/// Non-owning handle to a structure; the world owns the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureId(pub u32);

/// A goal structure requiring specific quantities of resource kinds.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    required: BTreeMap<ResourceKind, u32>,
    location: Vec3,
}

impl Structure {
    pub fn new(location: Vec3) -> Self {
        Self {
            required: BTreeMap::new(),
            location,
        }
    }

    pub fn with_requirement(mut self, kind: ResourceKind, quantity: u32) -> Self {
        self.required.insert(kind, quantity);
        self
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    /// Remaining requirement per kind; entries stay at zero once satisfied.
    pub fn required(&self) -> &BTreeMap<ResourceKind, u32> {
        &self.required
    }

    /// Whether `kind` is still needed (remaining quantity > 0).
    pub fn requires(&self, kind: ResourceKind) -> bool {
        self.required.get(&kind).copied().unwrap_or(0) > 0
    }

    /// All requirements satisfied.
    pub fn is_complete(&self) -> bool {
        self.required.values().all(|&quantity| quantity == 0)
    }

    /// Deposit the carried resource, decrementing the matching requirement.
    ///
    /// Takes ownership of the resource out of `carried` in a single move; the
    /// requirement clamps at zero and never goes negative. Depositing with
    /// empty hands is a guarded no-op. Returns whether a requirement was
    /// actually reduced.
    pub fn add_resource(&mut self, carried: &mut Option<Resource>) -> bool {
        let Some(resource) = carried.take() else {
            return false;
        };
        match self.required.get_mut(&resource.kind()) {
            Some(quantity) if *quantity > 0 => {
                *quantity -= 1;
                true
            }
            _ => false,
        }
    }
}
