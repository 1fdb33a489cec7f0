use forager_core::{
    State, StateConfig, StateKey, StateMachine, TickContext, TransitionPolicy, WorldMut, WorldView,
};

const A: StateKey = StateKey("a");
const B: StateKey = StateKey("b");

#[derive(Default)]
struct TestWorld;

impl WorldView for TestWorld {
    type Agent = u64;
}

impl WorldMut for TestWorld {}

/// Owner that records lifecycle calls.
#[derive(Default)]
struct Log {
    events: Vec<(&'static str, &'static str)>,
}

struct Recorder {
    name: &'static str,
    finished: bool,
    enters: u32,
}

impl Recorder {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            finished: false,
            enters: 0,
        }
    }
}

impl State<Log, TestWorld> for Recorder {
    fn on_enter(&mut self, _ctx: &TickContext, _agent: u64, owner: &mut Log, _world: &mut TestWorld) {
        self.enters += 1;
        self.finished = true;
        owner.events.push((self.name, "enter"));
    }

    fn on_fixed_update(
        &mut self,
        _ctx: &TickContext,
        _agent: u64,
        _owner: &mut Log,
        _world: &mut TestWorld,
    ) -> Option<StateKey> {
        None
    }

    fn on_exit(&mut self, _ctx: &TickContext, _agent: u64, owner: &mut Log, _world: &mut TestWorld) {
        owner.events.push((self.name, "exit"));
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// State with an internal timer, to check that re-entering starts from zero.
struct Countdown {
    counter: u32,
    duration: u32,
    finished: bool,
}

impl Countdown {
    fn new(duration: u32) -> Self {
        Self {
            counter: 0,
            duration,
            finished: false,
        }
    }
}

impl State<Log, TestWorld> for Countdown {
    fn on_enter(&mut self, _ctx: &TickContext, _agent: u64, _owner: &mut Log, _world: &mut TestWorld) {
        self.finished = false;
        self.counter = 0;
    }

    fn on_fixed_update(
        &mut self,
        _ctx: &TickContext,
        _agent: u64,
        _owner: &mut Log,
        _world: &mut TestWorld,
    ) -> Option<StateKey> {
        if self.finished {
            return None;
        }
        self.counter += 1;
        if self.counter >= self.duration {
            self.finished = true;
            return Some(A);
        }
        None
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

fn ctx() -> TickContext {
    TickContext {
        tick: 0,
        dt_seconds: 0.02,
    }
}

fn machine(policy: TransitionPolicy) -> StateMachine<Log, TestWorld> {
    StateConfig::new(policy)
        .with_state(A, || Box::new(Recorder::new("a")))
        .with_state(B, || Box::new(Recorder::new("b")))
        .build(A)
        .unwrap()
}

#[test]
fn first_assignment_runs_exit_before_enter() {
    let mut m = machine(TransitionPolicy::AlwaysReenter);
    let mut log = Log::default();
    let mut world = TestWorld;

    // The pre-seeded initial state has never been entered, yet leaving it
    // must still be safe and ordered exit-then-enter.
    m.set_current(B, &ctx(), 1, &mut log, &mut world);
    assert_eq!(log.events, vec![("a", "exit"), ("b", "enter")]);
    assert_eq!(m.current_key(), B);
}

#[test]
fn transition_runs_exactly_one_exit_and_one_enter() {
    let mut m = machine(TransitionPolicy::SkipUnchanged);
    let mut log = Log::default();
    let mut world = TestWorld;

    m.set_current(B, &ctx(), 1, &mut log, &mut world);
    m.set_current(A, &ctx(), 1, &mut log, &mut world);
    assert_eq!(
        log.events,
        vec![
            ("a", "exit"),
            ("b", "enter"),
            ("b", "exit"),
            ("a", "enter"),
        ]
    );
}

#[test]
fn skip_unchanged_ignores_same_key() {
    let mut m = machine(TransitionPolicy::SkipUnchanged);
    let mut log = Log::default();
    let mut world = TestWorld;

    m.set_current(A, &ctx(), 1, &mut log, &mut world);
    assert!(log.events.is_empty());
}

#[test]
fn always_reenter_reruns_hooks_for_same_key() {
    let mut m = machine(TransitionPolicy::AlwaysReenter);
    let mut log = Log::default();
    let mut world = TestWorld;

    m.set_current(A, &ctx(), 1, &mut log, &mut world);
    m.set_current(A, &ctx(), 1, &mut log, &mut world);
    assert_eq!(
        log.events,
        vec![
            ("a", "exit"),
            ("a", "enter"),
            ("a", "exit"),
            ("a", "enter"),
        ]
    );
}

#[test]
fn unknown_key_is_a_guarded_no_op() {
    let mut m = machine(TransitionPolicy::AlwaysReenter);
    let mut log = Log::default();
    let mut world = TestWorld;

    m.set_current(StateKey("missing"), &ctx(), 1, &mut log, &mut world);
    assert!(log.events.is_empty());
    assert_eq!(m.current_key(), A);
}

#[test]
fn fixed_update_applies_requested_transition() {
    let mut m: StateMachine<Log, TestWorld> = StateConfig::new(TransitionPolicy::AlwaysReenter)
        .with_state(A, || Box::new(Recorder::new("a")))
        .with_state(B, || Box::new(Countdown::new(2)))
        .build(A)
        .unwrap();
    let mut log = Log::default();
    let mut world = TestWorld;

    m.set_current(B, &ctx(), 1, &mut log, &mut world);
    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    assert_eq!(m.current_key(), B);
    assert!(!m.is_finished());

    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    assert_eq!(m.current_key(), A);
    assert_eq!(log.events.last(), Some(&("a", "enter")));
}

#[test]
fn enter_then_exit_leaves_no_dangling_timer() {
    let mut m: StateMachine<Log, TestWorld> = StateConfig::new(TransitionPolicy::AlwaysReenter)
        .with_state(A, || Box::new(Recorder::new("a")))
        .with_state(B, || Box::new(Countdown::new(3)))
        .build(A)
        .unwrap();
    let mut log = Log::default();
    let mut world = TestWorld;

    // Partially run the countdown, cancel it, then come back: the counter
    // must restart from zero.
    m.set_current(B, &ctx(), 1, &mut log, &mut world);
    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    m.set_current(A, &ctx(), 1, &mut log, &mut world);

    m.set_current(B, &ctx(), 1, &mut log, &mut world);
    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    assert_eq!(m.current_key(), B);
    assert!(!m.is_finished());
    m.fixed_update(&ctx(), 1, &mut log, &mut world);
    assert_eq!(m.current_key(), A);
}

#[test]
fn duplicate_registration_is_rejected() {
    let result: Result<StateMachine<Log, TestWorld>, _> =
        StateConfig::new(TransitionPolicy::SkipUnchanged)
            .with_state(A, || Box::new(Recorder::new("a")))
            .with_state(A, || Box::new(Recorder::new("a2")))
            .build(A);
    assert!(matches!(
        result,
        Err(forager_core::MachineError::DuplicateState(A))
    ));
}

#[test]
fn unknown_initial_is_rejected() {
    let result: Result<StateMachine<Log, TestWorld>, _> =
        StateConfig::new(TransitionPolicy::SkipUnchanged)
            .with_state(A, || Box::new(Recorder::new("a")))
            .build(B);
    assert!(matches!(
        result,
        Err(forager_core::MachineError::UnknownInitial(B))
    ));
}
