use forager_core::{State, StateKey, TickContext};
use forager_world::motion;
use forager_world::{AgentBody, BodyWorld, SteerWorld, TargetWorld};

// The idle state is shared with the action-level architecture, as in the
// rest of the self-driving family.
pub use forager_action::states::{IdleState, IDLE};

pub const GATHER: StateKey = StateKey("gather");
pub const HAUL: StateKey = StateKey("haul");
pub const BUILD: StateKey = StateKey("build");

/// Walk to the current target source, wait out its action duration, take
/// one resource, and hand control back to idle.
#[derive(Debug, Default)]
pub struct GatherState {
    finished: bool,
    counter: u32,
}

impl GatherState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> State<AgentBody, W> for GatherState
where
    W: BodyWorld + SteerWorld + TargetWorld + 'static,
{
    fn on_enter(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut AgentBody, _world: &mut W) {
        self.finished = false;
        self.counter = 0;
    }

    fn on_fixed_update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        owner: &mut AgentBody,
        world: &mut W,
    ) -> Option<StateKey> {
        if owner.is_at_destination() {
            if self.finished {
                return None;
            }
            let duration = owner
                .target
                .and_then(|id| world.source(id))
                .map(|source| source.action_duration())
                .unwrap_or(owner.config.interact_duration);
            self.counter += 1;
            if self.counter >= duration {
                owner.take_from_target(world);
                self.finished = true;
                return Some(IDLE);
            }
        } else {
            motion::steer_toward_destination(agent, owner, world);
        }
        None
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Walk the carried resource to the goal structure, deposit it on arrival,
/// and raise the completion event.
///
/// The event fires on the deposit transition, exactly once per haul; the
/// controller drains it as its single completion-evaluation point.
#[derive(Debug, Default)]
pub struct HaulState {
    finished: bool,
}

impl HaulState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> State<AgentBody, W> for HaulState
where
    W: BodyWorld + SteerWorld + TargetWorld + 'static,
{
    fn on_enter(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut AgentBody, _world: &mut W) {
        self.finished = false;
    }

    fn on_fixed_update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        owner: &mut AgentBody,
        world: &mut W,
    ) -> Option<StateKey> {
        if owner.is_at_destination() {
            if !self.finished {
                self.finished = true;
                owner.deposit_in_goal(world);
                owner.completed.raise();
                return Some(IDLE);
            }
        } else {
            motion::steer_toward_destination(agent, owner, world);
        }
        None
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Placeholder terminal state entered when the goal completes; reserved for
/// a simulated build action.
#[derive(Debug, Default)]
pub struct BuildState {
    finished: bool,
}

impl BuildState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> State<AgentBody, W> for BuildState
where
    W: BodyWorld + 'static,
{
    fn on_enter(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut AgentBody, _world: &mut W) {
        self.finished = true;
    }

    fn on_fixed_update(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _owner: &mut AgentBody,
        _world: &mut W,
    ) -> Option<StateKey> {
        None
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
