use forager_core::{Signal, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::source::SourceId;
use crate::structure::StructureId;
use crate::world::{BodyWorld, TargetWorld};
use crate::{assign, Zone};

/// Physical and timing parameters, opaque to the state logic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentConfig {
    /// Driving-force multiplier.
    pub acceleration: f32,
    /// Body scale applied on top of acceleration.
    pub scale: f32,
    /// Fallback ticks for a timed interact when no source supplies one.
    pub interact_duration: u32,
    /// Reactive liveness budget: ticks without a score event before the
    /// episode is forcibly ended. Zero disables the guard.
    pub max_internal_steps: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            acceleration: 1.0,
            scale: 1.0,
            interact_duration: 50,
            max_internal_steps: 0,
        }
    }
}

/// The per-agent data every control architecture shares.
///
/// The body is owned by its controller and passed into state hooks as the
/// owner; states keep only behavior-local fields and read the world through
/// it. Target and goal are non-owning ids into the host world.
#[derive(Debug)]
pub struct AgentBody {
    pub config: AgentConfig,
    /// At most one resource is carried at a time.
    pub carried: Option<Resource>,
    pub at_source: bool,
    pub at_goal: bool,
    /// Ticks elapsed this episode (advanced once per update pass).
    pub step_count: u64,
    /// `step_count` at the last progress event (pickup started or deposit).
    pub last_progress_step: u64,
    /// Episode guard: boundary penalty and forced termination fire once.
    pub done_called: bool,
    pub target: Option<SourceId>,
    pub goal: Option<StructureId>,
    pub start_position: Vec3,
    /// Position at the previous drive, for deriving facing.
    pub last_position: Vec3,
    /// Raised when the current job requirement becomes satisfied; the host
    /// drains it and re-runs target/goal assignment.
    pub task_done: Signal,
    /// Raised by the haul state on deposit; drained by the task-based
    /// controller as its single completion-evaluation point.
    pub completed: Signal,
}

impl AgentBody {
    pub fn new(config: AgentConfig, start_position: Vec3) -> Self {
        Self {
            config,
            carried: None,
            at_source: false,
            at_goal: false,
            step_count: 0,
            last_progress_step: 0,
            done_called: false,
            target: None,
            goal: None,
            start_position,
            last_position: start_position,
            task_done: Signal::new(),
            completed: Signal::new(),
        }
    }

    pub fn has_resource(&self) -> bool {
        self.carried.is_some()
    }

    /// False while a leg of the trip remains: heading to the source when
    /// empty-handed, heading to the goal when carrying.
    pub fn is_at_destination(&self) -> bool {
        if (!self.has_resource() && !self.at_source) || (self.has_resource() && !self.at_goal) {
            return false;
        }
        true
    }

    /// Goal location when carrying, target location otherwise.
    pub fn destination<W: TargetWorld>(&self, world: &W) -> Option<Vec3> {
        if self.has_resource() {
            self.goal
                .and_then(|id| world.structure(id))
                .map(|structure| structure.location())
        } else {
            self.target
                .and_then(|id| world.source(id))
                .map(|source| source.location())
        }
    }

    pub fn mark_progress(&mut self) {
        self.last_progress_step = self.step_count;
    }

    pub fn steps_since_progress(&self) -> u64 {
        self.step_count.saturating_sub(self.last_progress_step)
    }

    /// Take one resource from the current target.
    ///
    /// Guarded on every leg: already carrying, no target, stale id, and an
    /// exhausted source all degrade to a no-op.
    pub fn take_from_target<W: TargetWorld>(&mut self, world: &mut W) {
        if self.has_resource() {
            return;
        }
        let Some(id) = self.target else {
            return;
        };
        let Some(source) = world.source_mut(id) else {
            return;
        };
        self.carried = source.take_resource();
        if self.has_resource() {
            self.mark_progress();
        }
    }

    /// Deposit the carried resource into the current goal.
    ///
    /// Returns whether a requirement was reduced; empty hands, no goal, and
    /// stale ids are guarded no-ops.
    pub fn deposit_in_goal<W: TargetWorld>(&mut self, world: &mut W) -> bool {
        if !self.has_resource() {
            return false;
        }
        let Some(id) = self.goal else {
            return false;
        };
        let Some(structure) = world.structure_mut(id) else {
            return false;
        };
        structure.add_resource(&mut self.carried)
    }

    /// Raise `task_done` when the goal no longer requires the current
    /// target's kind.
    pub fn validate_job_complete<W: TargetWorld>(&mut self, world: &W) {
        let (Some(goal_id), Some(target_id)) = (self.goal, self.target) else {
            return;
        };
        let Some(goal) = world.structure(goal_id) else {
            return;
        };
        let Some(target) = world.source(target_id) else {
            return;
        };
        if !goal.requires(target.kind()) {
            self.task_done.raise();
        }
    }

    /// Re-assign the target from an ordered candidate list.
    ///
    /// No valid candidate leaves the target absent; the controller treats an
    /// absent target as "cannot progress" and idles safely.
    pub fn update_target<W: TargetWorld>(&mut self, world: &W, candidates: &[SourceId]) {
        let Some(goal) = self.goal.and_then(|id| world.structure(id)) else {
            self.target = None;
            tracing::debug!("collector: no goal, clearing target");
            return;
        };
        self.target = assign::assign_target(
            goal,
            candidates
                .iter()
                .filter_map(|&id| world.source(id).map(|source| (id, source))),
        );
        if self.target.is_none() {
            tracing::debug!("collector: no targets");
        }
    }

    /// Re-assign the goal; an empty candidate list keeps the current goal.
    pub fn update_goal(&mut self, candidates: &[StructureId]) {
        match assign::assign_goal(candidates.iter().copied()) {
            Some(goal) => self.goal = Some(goal),
            None => tracing::debug!("collector: no new goals"),
        }
    }

    /// Flag bookkeeping for the self-driving architectures: goal zone
    /// toggles unconditionally, source zone only for the current target.
    pub fn note_zone_enter(&mut self, zone: Zone) {
        match zone {
            Zone::Goal(_) => self.at_goal = true,
            Zone::Source(id) => {
                if self.target == Some(id) {
                    self.at_source = true;
                }
            }
            Zone::Boundary => {}
        }
    }

    pub fn note_zone_exit(&mut self, zone: Zone) {
        match zone {
            Zone::Goal(_) => self.at_goal = false,
            Zone::Source(_) => self.at_source = false,
            Zone::Boundary => {}
        }
    }

    /// Episode-boundary reset: clears the carried resource, counters, and
    /// flags, zeroes the body, and returns to the start position. State
    /// instances are reused across episodes; their per-run fields reset via
    /// their enter hooks.
    pub fn reset_for_episode<W: BodyWorld>(&mut self, agent: W::Agent, world: &mut W) {
        self.carried = None;
        self.at_source = false;
        self.at_goal = false;
        self.step_count = 0;
        self.last_progress_step = 0;
        self.done_called = false;
        world.zero_velocity(agent);
        world.set_position(agent, self.start_position);
        self.last_position = self.start_position;
    }
}
