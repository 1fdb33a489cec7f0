use forager_core::{State, StateAction, StateKey, TickContext, WorldMut};
use forager_world::motion;
use forager_world::{AgentBody, BodyWorld};

pub const IDLE: StateKey = StateKey("idle");
pub const MOVE: StateKey = StateKey("move");
pub const INTERACT: StateKey = StateKey("interact");

/// Terminal no-op state: zeroes the body on enter and reports finished.
///
/// Starts out finished: with the skip-unchanged policy the initial idle is
/// never formally entered, yet the controller must see it as done.
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

/// Direct-action state: drives the body with the caller's vector, one action
/// per tick, and reports finished after each so the policy re-decides.
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
    W: BodyWorld + 'static,
{
    fn on_enter(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut AgentBody, _world: &mut W) {
        self.finished = false;
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

    fn do_action(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        owner: &mut AgentBody,
        world: &mut W,
        input: [f32; 2],
    ) {
        motion::drive(agent, owner, world, input);
        self.finished = true;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Timed action slot: counts episode steps from enter, runs its callback
/// exactly once at the interact duration, then hands control back to idle.
pub struct InteractState<W>
where
    W: WorldMut + 'static,
{
    finished: bool,
    started_at: u64,
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
            started_at: 0,
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
    fn on_enter(&mut self, _ctx: &TickContext, _agent: W::Agent, owner: &mut AgentBody, _world: &mut W) {
        self.finished = false;
        self.started_at = owner.step_count;
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
        let duration = self.duration.unwrap_or(owner.config.interact_duration) as u64;
        if owner.step_count.saturating_sub(self.started_at) >= duration {
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
