#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::source::SourceId;
use crate::structure::StructureId;

/// A tagged spatial-overlap signal from the host.
///
/// Delivered through a controller's `on_zone_enter`/`on_zone_exit` at most
/// once per physical overlap transition; the host's trigger detection is the
/// source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zone {
    Source(SourceId),
    Goal(StructureId),
    Boundary,
}
