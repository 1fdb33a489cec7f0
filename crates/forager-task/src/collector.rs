use forager_core::{
    MachineError, StateConfig, StateMachine, TickContext, TransitionPolicy, Vec3,
};
use forager_world::{
    AgentBody, AgentConfig, BodyWorld, SourceId, SteerWorld, StructureId, TargetWorld, Zone,
};

use crate::states::{
    BuildState, GatherState, HaulState, IdleState, BUILD, GATHER, HAUL, IDLE,
};

/// Self-driving collector deciding at the task level.
///
/// The decision chain only picks whole jobs (gather or haul); each job state
/// navigates and times itself. Completion is event-driven: the haul state
/// raises the body's `completed` signal on deposit, and draining that signal
/// is the single point where job and goal completion are checked. A complete
/// goal forces the build state.
pub struct TaskCollector<W>
where
    W: BodyWorld + SteerWorld + TargetWorld + 'static,
{
    pub agent: W::Agent,
    pub body: AgentBody,
    machine: StateMachine<AgentBody, W>,
}

impl<W> TaskCollector<W>
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
            .with_state(GATHER, || Box::new(GatherState::new()))
            .with_state(HAUL, || Box::new(HaulState::new()))
            .with_state(BUILD, || Box::new(BuildState::new()))
            .build(IDLE)?;
        Ok(Self {
            agent,
            body: AgentBody::new(config, start_position),
            machine,
        })
    }

    /// One-time setup: settle into idle and raise `task_done` to force the
    /// initial target/goal assignment.
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

        // Haul completion, delivered once per deposit. Checked after the
        // dispatch so the event is consumed the same tick it is raised.
        if self.body.completed.take() {
            self.body.validate_job_complete(world);
            self.validate_goal_complete(ctx, world);
            self.body.mark_progress();
        }
    }

    /// Task selection: haul when carrying away from the goal; otherwise
    /// gather, or idle once the target is exhausted (still re-checking job
    /// completion from idle).
    fn advance(&mut self, ctx: &TickContext, world: &mut W) {
        let has_resource = self.body.has_resource();
        if has_resource && !self.body.at_goal {
            self.haul_resource(ctx, world);
        } else if !self.body.at_source && !has_resource {
            if self.target_exhausted(world) {
                self.machine
                    .set_current(IDLE, ctx, self.agent, &mut self.body, world);
                self.body.validate_job_complete(world);
            } else {
                self.gather_resource(ctx, world);
            }
        }
    }

    fn target_exhausted(&self, world: &W) -> bool {
        self.body
            .target
            .and_then(|id| world.source(id))
            .map(|source| source.count() == 0)
            .unwrap_or(true)
    }

    fn gather_resource(&mut self, ctx: &TickContext, world: &mut W) {
        self.body.mark_progress();
        self.machine
            .set_current(GATHER, ctx, self.agent, &mut self.body, world);
    }

    fn haul_resource(&mut self, ctx: &TickContext, world: &mut W) {
        self.body.mark_progress();
        self.machine
            .set_current(HAUL, ctx, self.agent, &mut self.body, world);
    }

    fn validate_goal_complete(&mut self, ctx: &TickContext, world: &mut W) {
        let complete = self
            .body
            .goal
            .and_then(|id| world.structure(id))
            .map(|goal| goal.is_complete())
            .unwrap_or(false);
        if complete {
            tracing::info!("collector: job complete");
            self.machine
                .set_current(BUILD, ctx, self.agent, &mut self.body, world);
        }
    }

    pub fn on_zone_enter(&mut self, zone: Zone) {
        self.body.note_zone_enter(zone);
    }

    pub fn on_zone_exit(&mut self, zone: Zone) {
        self.body.note_zone_exit(zone);
    }
}
