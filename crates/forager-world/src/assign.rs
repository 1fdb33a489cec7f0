//! Target and goal assignment.
//!
//! Pure, deterministic, first-match policies: given the same goal state and
//! the same ordered candidate sequence, the result is always the same.

use crate::source::{Source, SourceId};
use crate::structure::{Structure, StructureId};

/// Pick the first candidate source that is valid and produces a kind the
/// goal still requires.
pub fn assign_target<'a, I>(goal: &Structure, candidates: I) -> Option<SourceId>
where
    I: IntoIterator<Item = (SourceId, &'a Source)>,
{
    candidates
        .into_iter()
        .find(|(_, source)| source.is_valid() && goal.requires(source.kind()))
        .map(|(id, _)| id)
}

/// Pick the first candidate goal, or none.
///
/// Deliberately a placeholder policy (no distance or load balancing); keep
/// the first-or-none semantics.
pub fn assign_goal<I>(candidates: I) -> Option<StructureId>
where
    I: IntoIterator<Item = StructureId>,
{
    candidates.into_iter().next()
}
