use forager_core::{
    MachineError, StateConfig, StateMachine, TickContext, TransitionPolicy, Vec3,
};
use forager_world::{
    AgentBody, AgentConfig, BodyWorld, SourceId, SteerWorld, StructureId, TargetWorld, Zone,
};

use crate::states::{IdleState, InteractState, MoveState, IDLE, INTERACT, MOVE};

/// Self-driving collector deciding at the action level.
///
/// Each fixed update, if the current state is finished the controller picks
/// the next low-level action from carrying status and zone flags; otherwise
/// the tick is forwarded to the state unchanged. Same-key assignments re-run
/// exit/enter (guaranteed reset-on-assign in this architecture).
pub struct ActionCollector<W>
where
    W: BodyWorld + SteerWorld + TargetWorld + 'static,
{
    pub agent: W::Agent,
    pub body: AgentBody,
    machine: StateMachine<AgentBody, W>,
}

impl<W> ActionCollector<W>
where
    W: BodyWorld + SteerWorld + TargetWorld + 'static,
{
    pub fn new(
        agent: W::Agent,
        config: AgentConfig,
        start_position: Vec3,
    ) -> Result<Self, MachineError> {
        let machine = StateConfig::new(TransitionPolicy::AlwaysReenter)
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

    /// One-time setup: settle into idle (running exit on the pre-seeded
    /// default, then enter) and raise `task_done` to force the initial
    /// target/goal assignment.
    pub fn initialize(&mut self, ctx: &TickContext, world: &mut W) {
        self.machine
            .set_current(IDLE, ctx, self.agent, &mut self.body, world);
        self.body.task_done.raise();
    }

    pub fn current_state(&self) -> forager_core::StateKey {
        self.machine.current_key()
    }

    pub fn take_task_done(&mut self) -> bool {
        self.body.task_done.take()
    }

    pub fn update_target(&mut self, world: &W, candidates: &[SourceId]) {
        self.body.update_target(world, candidates);
    }

    pub fn update_goal(&mut self, candidates: &[StructureId]) {
        self.body.update_goal(candidates);
    }

    pub fn is_at_destination(&self) -> bool {
        self.body.is_at_destination()
    }

    pub fn destination(&self, world: &W) -> Option<Vec3> {
        self.body.destination(world)
    }

    pub fn update(&mut self, ctx: &TickContext, world: &mut W) {
        self.body.step_count += 1;
        self.machine.update(ctx, self.agent, &mut self.body, world);
    }

    pub fn fixed_update(&mut self, ctx: &TickContext, world: &mut W) {
        if self.machine.is_finished() {
            self.advance(ctx, world);
        } else {
            self.machine
                .fixed_update(ctx, self.agent, &mut self.body, world);
        }
    }

    /// Decision chain, in fixed priority order: haul leg, travel/idle when
    /// empty-handed, pickup at the source, deposit at the goal.
    fn advance(&mut self, ctx: &TickContext, world: &mut W) {
        let has_resource = self.body.has_resource();
        if has_resource && !self.body.at_goal {
            self.machine
                .set_current(MOVE, ctx, self.agent, &mut self.body, world);
        } else if !self.body.at_source && !has_resource {
            // With the target exhausted, go idle but keep checking whether
            // the job as a whole is already satisfied.
            if self.target_exhausted(world) {
                self.machine
                    .set_current(IDLE, ctx, self.agent, &mut self.body, world);
                self.body.validate_job_complete(world);
            } else {
                self.machine
                    .set_current(MOVE, ctx, self.agent, &mut self.body, world);
            }
        } else if self.body.at_source && !has_resource {
            self.collect_resource(ctx, world);
        } else if has_resource && self.body.at_goal {
            self.body.deposit_in_goal(world);
            self.body.validate_job_complete(world);
            self.validate_goal_complete(world);
            self.body.mark_progress();
        }
    }

    fn target_exhausted(&self, world: &W) -> bool {
        self.body
            .target
            .and_then(|id| world.source(id))
            .map(|source| source.count() == 0)
            .unwrap_or(true)
    }

    fn collect_resource(&mut self, ctx: &TickContext, world: &mut W) {
        self.body.mark_progress();
        let duration = self
            .body
            .target
            .and_then(|id| world.source(id))
            .map(|source| source.action_duration());
        self.machine
            .set_current(INTERACT, ctx, self.agent, &mut self.body, world);
        self.machine.set_action(
            Box::new(|owner: &mut AgentBody, world: &mut W| owner.take_from_target(world)),
            duration,
        );
    }

    fn validate_goal_complete(&self, world: &W) {
        let complete = self
            .body
            .goal
            .and_then(|id| world.structure(id))
            .map(|goal| goal.is_complete())
            .unwrap_or(false);
        if complete {
            tracing::info!("collector: job complete");
        }
    }

    pub fn on_zone_enter(&mut self, zone: Zone) {
        self.body.note_zone_enter(zone);
    }

    pub fn on_zone_exit(&mut self, zone: Zone) {
        self.body.note_zone_exit(zone);
    }
}
