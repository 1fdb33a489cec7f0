use crate::{TickContext, WorldMut};

/// Identifies a state within a machine's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey(pub &'static str);

impl core::fmt::Display for StateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Deferred callback executed by a timed state when its duration elapses.
///
/// The callback receives the owning agent's body and the world, the same
/// access a state hook has; it runs exactly once per `set_action`.
pub type StateAction<O, W> = Box<dyn FnMut(&mut O, &mut W)>;

/// A unit of per-tick agent behavior with an enter/exit lifecycle.
///
/// States never hold a reference to their owner; the owner's body `O` and the
/// host world `W` are passed into every hook. Two families exist:
///
/// - direct-action states act immediately on caller-supplied input via
///   [`State::do_action`] and keep the default `set_action` no-op;
/// - deferred-action states accept a callback and optional duration via
///   [`State::set_action`], count fixed-update ticks, and fire the callback
///   exactly once when the duration is reached.
///
/// Contract:
/// - `on_enter` must leave `is_finished` in a well-defined value (true for
///   terminal no-op states, false when work is outstanding) and must reset
///   any internal timers, so enter immediately followed by exit is always
///   legal and re-entering later starts from zero.
/// - only `on_fixed_update` may flip `is_finished` from false to true; once
///   true the controller transitions away within the same or next tick, so a
///   state must not assume it will be ticked again after reporting finished.
/// - the value returned from `on_fixed_update` is a requested transition the
///   machine applies after the hook returns (a state cannot reach back into
///   the machine that is dispatching it).
pub trait State<O, W>: 'static
where
    O: 'static,
    W: WorldMut + 'static,
{
    fn on_enter(&mut self, ctx: &TickContext, agent: W::Agent, owner: &mut O, world: &mut W);

    fn on_update(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut O, _world: &mut W) {
    }

    fn on_fixed_update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        owner: &mut O,
        world: &mut W,
    ) -> Option<StateKey>;

    fn on_exit(&mut self, _ctx: &TickContext, _agent: W::Agent, _owner: &mut O, _world: &mut W) {}

    fn is_finished(&self) -> bool;

    /// Deferred-action family only; the default ignores the callback.
    fn set_action(&mut self, _action: StateAction<O, W>, _duration: Option<u32>) {}

    /// Direct-action family only; the default ignores the input.
    fn do_action(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _owner: &mut O,
        _world: &mut W,
        _input: [f32; 2],
    ) {
    }
}
