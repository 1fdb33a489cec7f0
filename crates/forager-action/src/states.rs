use forager_core::{State, StateAction, StateKey, TickContext, WorldMut};
use forager_world::motion;
use forager_world::{AgentBody, BodyWorld, SteerWorld, TargetWorld};

pub const IDLE: StateKey = StateKey("idle");
pub const MOVE: StateKey = StateKey("move");
pub const INTERACT: StateKey = StateKey("interact");

/// Terminal no-op state for the self-driving family; starts out finished.
#[derive(Debug)]
pub struct IdleState {
    finished: bool,
}

impl IdleState {
    pub fn new() -> Self {
        Self { finished: true }
    }
}

impl Default for IdleState {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> State<AgentBody, W> for IdleState
where
    W: BodyWorld + 'static,
{
    fn on_enter(&mut self, _ctx: &TickContext, agent: W::Agent, _owner: &mut AgentBody, world: &mut W) {
        self.finished = false;
        world.zero_velocity(agent);
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

/// Self-navigating move: steers toward the body's current destination every
/// fixed update until arrival, then reports finished.
#[derive(Debug, Default)]
pub struct MoveState {
    finished: bool,
}

impl MoveState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W> State<AgentBody, W> for MoveState
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
            self.finished = true;
        } else {
            motion::steer_toward_destination(agent, owner, world);
        }
        None
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Timed interaction with a caller-supplied callback and duration.
///
/// Counts its own fixed-update ticks (unlike the reactive variant, which
/// reads the episode step counter); fires the callback exactly once when the
/// counter reaches the duration, then requests idle.
pub struct InteractState<W>
where
    W: WorldMut + 'static,
{
    finished: bool,
    counter: u32,
    duration: Option<u32>,
    action: Option<StateAction<AgentBody, W>>,
}

impl<W> InteractState<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self {
            finished: false,
            counter: 0,
            duration: None,
            action: None,
        }
    }
}

impl<W> Default for InteractState<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> State<AgentBody, W> for InteractState<W>
where
    W: BodyWorld + 'static,
{
    fn on_enter(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut AgentBody, _world: &mut W) {
        self.finished = false;
        self.counter = 0;
        self.duration = None;
        self.action = None;
    }

    fn on_fixed_update(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        owner: &mut AgentBody,
        world: &mut W,
    ) -> Option<StateKey> {
        if self.finished {
            return None;
        }
        self.counter += 1;
        if self.counter >= self.duration.unwrap_or(owner.config.interact_duration) {
            if let Some(mut action) = self.action.take() {
                action(owner, world);
            }
            self.finished = true;
            return Some(IDLE);
        }
        None
    }

    fn set_action(&mut self, action: StateAction<AgentBody, W>, duration: Option<u32>) {
        self.action = Some(action);
        if duration.is_some() {
            self.duration = duration;
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
