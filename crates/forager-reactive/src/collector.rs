use forager_core::{
    MachineError, StateConfig, StateMachine, TickContext, TransitionPolicy, Vec3,
};
use forager_world::{
    AgentBody, AgentConfig, BodyWorld, EpisodeWorld, SourceId, StructureId, TargetWorld, Zone,
};

use crate::states::{IdleState, InteractState, MoveState, IDLE, INTERACT, MOVE};

const DEPOSIT_SCORE: f32 = 0.5;
const GOAL_COMPLETE_SCORE: f32 = 2.0;
const PENALTY: f32 = 0.1;

/// Collector driven by an external policy's action vector.
///
/// The host feeds the per-tick vector through [`ReactiveCollector::on_action`]
/// and delivers zone signals; the controller never navigates on its own.
/// Same-key transitions are skipped (no reset-on-assign in this
/// architecture).
pub struct ReactiveCollector<W>
where
    W: BodyWorld + TargetWorld + EpisodeWorld + 'static,
{
    pub agent: W::Agent,
    pub body: AgentBody,
    machine: StateMachine<AgentBody, W>,
}

impl<W> ReactiveCollector<W>
where
    W: BodyWorld + TargetWorld + EpisodeWorld + 'static,
{
    pub fn new(
        agent: W::Agent,
        config: AgentConfig,
        start_position: Vec3,
    ) -> Result<Self, MachineError> {
        let machine = StateConfig::new(TransitionPolicy::SkipUnchanged)
            .with_state(IDLE, || Box::new(IdleState::new()))
            .with_state(MOVE, || Box::new(MoveState::new()))
            .with_state(INTERACT, || Box::new(InteractState::new()))
            .build(IDLE)?;
        Ok(Self {
            agent,
            body: AgentBody::new(config, start_position),
            machine,
        })
    }

    /// One-time setup once the host world exists: settle into idle and raise
    /// `task_done` to force the initial target/goal assignment.
    pub fn initialize(&mut self, ctx: &TickContext, world: &mut W) {
        self.machine
            .set_current(IDLE, ctx, self.agent, &mut self.body, world);
        self.body.task_done.raise();
    }

    pub fn current_state(&self) -> forager_core::StateKey {
        self.machine.current_key()
    }

    /// Drain the task-done notification; at most one delivery per logical
    /// completion.
    pub fn take_task_done(&mut self) -> bool {
        self.body.task_done.take()
    }

    pub fn update_target(&mut self, world: &W, candidates: &[SourceId]) {
        self.body.update_target(world, candidates);
    }

    pub fn update_goal(&mut self, candidates: &[StructureId]) {
        self.body.update_goal(candidates);
    }

    /// The per-tick policy input. If the current state just finished, first
    /// try a pickup (in the source zone, empty-handed), then interpret the
    /// vector: all-zero means idle, anything else drives a move.
    pub fn on_action(&mut self, ctx: &TickContext, world: &mut W, action: [f32; 2]) {
        if self.machine.is_finished() {
            self.collect_resource(ctx, world);
        }
        if self.machine.is_finished() {
            self.advance(ctx, world, action);
        }
    }

    fn collect_resource(&mut self, ctx: &TickContext, world: &mut W) {
        if self.body.at_source && !self.body.has_resource() {
            self.body.mark_progress();
            self.machine
                .set_current(INTERACT, ctx, self.agent, &mut self.body, world);
            self.machine.set_action(
                Box::new(|owner: &mut AgentBody, world: &mut W| owner.take_from_target(world)),
                None,
            );
        }
    }

    fn advance(&mut self, ctx: &TickContext, world: &mut W, action: [f32; 2]) {
        if action[0] == 0.0 && action[1] == 0.0 {
            self.machine
                .set_current(IDLE, ctx, self.agent, &mut self.body, world);
            return;
        }
        self.machine
            .set_current(MOVE, ctx, self.agent, &mut self.body, world);
        self.machine
            .do_action(ctx, self.agent, &mut self.body, world, action);
    }

    /// Update pass: state dispatch plus the liveness guard. No score event
    /// within the configured budget forcibly ends the episode with a
    /// penalty; this is an anti-stall rule, not task logic.
    pub fn update(&mut self, ctx: &TickContext, world: &mut W) {
        self.body.step_count += 1;
        self.machine
            .update(ctx, self.agent, &mut self.body, world);

        let budget = self.body.config.max_internal_steps;
        if budget > 0 && self.body.steps_since_progress() > budget && !self.body.done_called {
            self.body.done_called = true;
            world.add_score(self.agent, -PENALTY);
            tracing::info!(budget, "no score within step budget, restarting");
            world.end_episode(self.agent);
        }
    }

    pub fn fixed_update(&mut self, ctx: &TickContext, world: &mut W) {
        self.machine
            .fixed_update(ctx, self.agent, &mut self.body, world);
    }

    /// Zone side effects. Depositing happens here, on the goal-zone entry
    /// while carrying; the boundary penalty fires at most once per episode.
    pub fn on_zone_enter(&mut self, _ctx: &TickContext, world: &mut W, zone: Zone) {
        match zone {
            Zone::Goal(id) => {
                if self.body.has_resource() && self.body.goal == Some(id) {
                    world.add_score(self.agent, DEPOSIT_SCORE);
                    self.body.deposit_in_goal(world);
                    self.body.validate_job_complete(world);
                    self.validate_goal_complete(world);
                    self.body.mark_progress();
                }
            }
            Zone::Source(id) => {
                if !self.body.has_resource() && self.body.target == Some(id) {
                    self.body.at_source = true;
                }
            }
            Zone::Boundary => {
                if !self.body.done_called {
                    self.body.done_called = true;
                    world.add_score(self.agent, -PENALTY);
                    tracing::info!("collector left the play area");
                }
            }
        }
    }

    pub fn on_zone_exit(&mut self, _ctx: &TickContext, _world: &mut W, zone: Zone) {
        if let Zone::Source(_) = zone {
            self.body.at_source = false;
        }
    }

    /// Episode-boundary reset; keeps the machine and its state instances.
    pub fn on_episode_begin(&mut self, ctx: &TickContext, world: &mut W) {
        self.body.reset_for_episode(self.agent, world);
        let goal_complete = self
            .body
            .goal
            .and_then(|id| world.structure(id))
            .map(|goal| goal.is_complete())
            .unwrap_or(false);
        if !goal_complete {
            self.machine
                .set_current(IDLE, ctx, self.agent, &mut self.body, world);
        }
        self.body.carried = None;
    }

    fn validate_goal_complete(&mut self, world: &mut W) {
        let complete = self
            .body
            .goal
            .and_then(|id| world.structure(id))
            .map(|goal| goal.is_complete())
            .unwrap_or(false);
        if complete {
            world.add_score(self.agent, GOAL_COMPLETE_SCORE);
        }
    }
}
