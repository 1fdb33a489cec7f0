use std::collections::BTreeMap;

use forager_core::{Vec3, WorldMut, WorldView};
use forager_world::{
    AgentBody, AgentConfig, Resource, ResourceKind, Source, SourceId, Structure, StructureId,
    TargetWorld,
};

const WOOD: ResourceKind = ResourceKind("wood");
const STONE: ResourceKind = ResourceKind("stone");

#[derive(Default)]
struct TestWorld {
    sources: BTreeMap<u32, Source>,
    structures: BTreeMap<u32, Structure>,
}

impl WorldView for TestWorld {
    type Agent = u64;
}

impl WorldMut for TestWorld {}

impl TargetWorld for TestWorld {
    fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.get(&id.0)
    }

    fn source_mut(&mut self, id: SourceId) -> Option<&mut Source> {
        self.sources.get_mut(&id.0)
    }

    fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(&id.0)
    }

    fn structure_mut(&mut self, id: StructureId) -> Option<&mut Structure> {
        self.structures.get_mut(&id.0)
    }
}

#[test]
fn take_transfers_exactly_one_resource() {
    let mut source = Source::new(WOOD, 3, Vec3::ZERO);
    let taken = source.take_resource();
    assert_eq!(taken.map(|r| r.kind()), Some(WOOD));
    assert_eq!(source.count(), 2);
}

#[test]
fn empty_or_invalidated_source_yields_nothing() {
    let mut empty = Source::new(WOOD, 0, Vec3::ZERO);
    assert!(empty.take_resource().is_none());
    assert_eq!(empty.count(), 0);
    assert!(!empty.is_valid());

    let mut retired = Source::new(WOOD, 5, Vec3::ZERO);
    retired.invalidate();
    assert!(retired.take_resource().is_none());
    assert_eq!(retired.count(), 5);
}

#[test]
fn deposit_decrements_the_matching_requirement_exactly_once() {
    let mut goal = Structure::new(Vec3::ZERO).with_requirement(WOOD, 2);
    let mut carried = Some(Resource::new(WOOD));

    assert!(goal.add_resource(&mut carried));
    assert!(carried.is_none());
    assert_eq!(goal.required().get(&WOOD), Some(&1));
    assert!(!goal.is_complete());

    let mut carried = Some(Resource::new(WOOD));
    assert!(goal.add_resource(&mut carried));
    assert!(goal.is_complete());
}

#[test]
fn deposit_clamps_at_zero_and_guards_empty_hands() {
    let mut goal = Structure::new(Vec3::ZERO).with_requirement(WOOD, 0);

    // Satisfied requirement: the resource is still consumed, the count never
    // goes negative.
    let mut carried = Some(Resource::new(WOOD));
    assert!(!goal.add_resource(&mut carried));
    assert!(carried.is_none());
    assert_eq!(goal.required().get(&WOOD), Some(&0));

    // Unknown kind behaves the same.
    let mut carried = Some(Resource::new(STONE));
    assert!(!goal.add_resource(&mut carried));
    assert!(carried.is_none());

    // Empty hands are a no-op.
    let mut carried = None;
    assert!(!goal.add_resource(&mut carried));
}

#[test]
fn body_take_and_deposit_round_trip_through_the_world() {
    let mut world = TestWorld::default();
    world.sources.insert(0, Source::new(WOOD, 1, Vec3::ZERO));
    world
        .structures
        .insert(0, Structure::new(Vec3::ZERO).with_requirement(WOOD, 1));

    let mut body = AgentBody::new(AgentConfig::default(), Vec3::ZERO);
    body.target = Some(SourceId(0));
    body.goal = Some(StructureId(0));

    body.take_from_target(&mut world);
    assert!(body.has_resource());
    assert_eq!(world.sources[&0].count(), 0);

    // Carrying already: a second take is a guarded no-op.
    body.take_from_target(&mut world);
    assert!(body.has_resource());

    assert!(body.deposit_in_goal(&mut world));
    assert!(!body.has_resource());
    assert!(world.structures[&0].is_complete());

    // Empty hands: deposit is a guarded no-op.
    assert!(!body.deposit_in_goal(&mut world));
}

#[test]
fn job_completion_raises_task_done_only_when_satisfied() {
    let mut world = TestWorld::default();
    world.sources.insert(0, Source::new(WOOD, 5, Vec3::ZERO));
    world
        .structures
        .insert(0, Structure::new(Vec3::ZERO).with_requirement(WOOD, 1));

    let mut body = AgentBody::new(AgentConfig::default(), Vec3::ZERO);
    body.target = Some(SourceId(0));
    body.goal = Some(StructureId(0));

    body.validate_job_complete(&world);
    assert!(!body.task_done.take());

    body.take_from_target(&mut world);
    body.deposit_in_goal(&mut world);
    body.validate_job_complete(&world);
    assert!(body.task_done.take());
}

#[test]
fn update_target_clears_when_no_candidate_matches() {
    let mut world = TestWorld::default();
    world.sources.insert(0, Source::new(STONE, 5, Vec3::ZERO));
    world
        .structures
        .insert(0, Structure::new(Vec3::ZERO).with_requirement(WOOD, 1));

    let mut body = AgentBody::new(AgentConfig::default(), Vec3::ZERO);
    body.goal = Some(StructureId(0));
    body.target = Some(SourceId(0));

    body.update_target(&world, &[SourceId(0)]);
    assert_eq!(body.target, None);

    // An empty goal-candidate list keeps the current goal.
    body.update_goal(&[]);
    assert_eq!(body.goal, Some(StructureId(0)));
}
