use std::collections::BTreeMap;

use crate::{State, StateAction, StateKey, TickContext, WorldMut};

/// Per-architecture transition policy for same-key assignments.
///
/// The reactive architecture skips exit/enter when the requested key already
/// is current; the self-driving architectures re-run both hooks to get
/// guaranteed reset-on-assign semantics. The difference is deliberate and
/// must be preserved per architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    SkipUnchanged,
    AlwaysReenter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineError {
    #[error("state `{0}` registered more than once")]
    DuplicateState(StateKey),
    #[error("initial state `{0}` is not registered")]
    UnknownInitial(StateKey),
}

type StateCtor<O, W> = Box<dyn FnOnce() -> Box<dyn State<O, W>>>;

/// Explicit `{key -> constructor}` assembly table.
///
/// Passed at controller construction; replaces any notion of a machine
/// discovering its states. Construction is data-driven and happens once.
pub struct StateConfig<O, W>
where
    O: 'static,
    W: WorldMut + 'static,
{
    policy: TransitionPolicy,
    ctors: Vec<(StateKey, StateCtor<O, W>)>,
}

impl<O, W> StateConfig<O, W>
where
    O: 'static,
    W: WorldMut + 'static,
{
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            policy,
            ctors: Vec::new(),
        }
    }

    pub fn with_state(
        mut self,
        key: StateKey,
        ctor: impl FnOnce() -> Box<dyn State<O, W>> + 'static,
    ) -> Self {
        self.ctors.push((key, Box::new(ctor)));
        self
    }

    /// Instantiate every registered state and seed the machine on `initial`.
    ///
    /// The initial state is current from the start but its enter hook has not
    /// run; every state's exit hook must be safe without a prior enter, so
    /// the very first external `set_current` already has a state to leave.
    pub fn build(self, initial: StateKey) -> Result<StateMachine<O, W>, MachineError> {
        let mut states = BTreeMap::new();
        for (key, ctor) in self.ctors {
            if states.insert(key, ctor()).is_some() {
                return Err(MachineError::DuplicateState(key));
            }
        }
        if !states.contains_key(&initial) {
            return Err(MachineError::UnknownInitial(initial));
        }
        Ok(StateMachine {
            states,
            current: initial,
            policy: self.policy,
        })
    }
}

/// Owns the state map and the current key; holds no behavior of its own.
///
/// Every transition runs the outgoing state's exit hook strictly before the
/// incoming state's enter hook. Transitioning away from an unfinished state
/// is always legal (cancellation); no cleanup outlives the exit hook.
pub struct StateMachine<O, W>
where
    O: 'static,
    W: WorldMut + 'static,
{
    states: BTreeMap<StateKey, Box<dyn State<O, W>>>,
    current: StateKey,
    policy: TransitionPolicy,
}

impl<O, W> StateMachine<O, W>
where
    O: 'static,
    W: WorldMut + 'static,
{
    pub fn current_key(&self) -> StateKey {
        self.current
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn contains(&self, key: StateKey) -> bool {
        self.states.contains_key(&key)
    }

    /// Whether the current state has reported completion.
    pub fn is_finished(&self) -> bool {
        self.states
            .get(&self.current)
            .map(|s| s.is_finished())
            .unwrap_or(true)
    }

    /// Transition to `key`, honoring the machine's same-key policy.
    ///
    /// An unregistered key is a guarded no-op: per-tick control flow never
    /// faults on a bad transition request.
    pub fn set_current(
        &mut self,
        key: StateKey,
        ctx: &TickContext,
        agent: W::Agent,
        owner: &mut O,
        world: &mut W,
    ) {
        if !self.states.contains_key(&key) {
            return;
        }
        if key == self.current && self.policy == TransitionPolicy::SkipUnchanged {
            return;
        }
        if let Some(old) = self.states.get_mut(&self.current) {
            old.on_exit(ctx, agent, owner, world);
        }
        self.current = key;
        if let Some(new) = self.states.get_mut(&self.current) {
            new.on_enter(ctx, agent, owner, world);
        }
    }

    /// Hand a deferred callback to the current state.
    pub fn set_action(&mut self, action: StateAction<O, W>, duration: Option<u32>) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.set_action(action, duration);
        }
    }

    /// Hand direct input to the current state.
    pub fn do_action(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        owner: &mut O,
        world: &mut W,
        input: [f32; 2],
    ) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.do_action(ctx, agent, owner, world, input);
        }
    }

    pub fn update(&mut self, ctx: &TickContext, agent: W::Agent, owner: &mut O, world: &mut W) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.on_update(ctx, agent, owner, world);
        }
    }

    /// Fixed dispatch; applies the transition the state requests, if any.
    pub fn fixed_update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        owner: &mut O,
        world: &mut W,
    ) {
        let requested = match self.states.get_mut(&self.current) {
            Some(state) => state.on_fixed_update(ctx, agent, owner, world),
            None => None,
        };
        if let Some(next) = requested {
            self.set_current(next, ctx, agent, owner, world);
        }
    }
}
