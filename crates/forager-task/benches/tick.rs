use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forager_core::{TickContext, Vec3, WorldMut, WorldView};
use forager_task::TaskCollector;
use forager_world::{
    AgentConfig, BodyWorld, ResourceKind, Source, SourceId, SteerWorld, Steering, Structure,
    StructureId, TargetWorld, Zone,
};

const WOOD: ResourceKind = ResourceKind("wood");

struct DirectSteering;

impl Steering for DirectSteering {
    fn direction(&self, from: Vec3, to: Vec3) -> [f32; 2] {
        let d = (to - from).normalized();
        [d.x, d.z]
    }
}

struct World {
    positions: BTreeMap<u64, Vec3>,
    sources: BTreeMap<u32, Source>,
    structures: BTreeMap<u32, Structure>,
    steering: DirectSteering,
}

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

impl BodyWorld for World {
    fn position(&self, agent: u64) -> Vec3 {
        self.positions.get(&agent).copied().unwrap_or(Vec3::ZERO)
    }

    fn set_position(&mut self, agent: u64, position: Vec3) {
        self.positions.insert(agent, position);
    }

    fn apply_force(&mut self, agent: u64, force: Vec3) {
        let position = self.position(agent) + force * 0.01;
        self.positions.insert(agent, position);
    }

    fn set_facing(&mut self, _agent: u64, _direction: Vec3) {}

    fn zero_velocity(&mut self, _agent: u64) {}
}

impl SteerWorld for World {
    fn steering(&self) -> &dyn Steering {
        &self.steering
    }
}

impl TargetWorld for World {
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

fn bench_gather_tick(c: &mut Criterion) {
    let mut world = World {
        positions: BTreeMap::new(),
        sources: BTreeMap::new(),
        structures: BTreeMap::new(),
        steering: DirectSteering,
    };
    world.sources.insert(
        0,
        Source::new(WOOD, u32::MAX, Vec3::new(5.0, 0.0, 0.0)).with_action_duration(u32::MAX),
    );
    world.structures.insert(
        0,
        Structure::new(Vec3::new(-5.0, 0.0, 0.0)).with_requirement(WOOD, u32::MAX),
    );

    let ctx0 = TickContext {
        tick: 0,
        dt_seconds: 0.02,
    };
    let mut collector = TaskCollector::new(1u64, AgentConfig::default(), Vec3::ZERO).unwrap();
    collector.initialize(&ctx0, &mut world);
    collector.take_task_done();
    collector.update_goal(&[StructureId(0)]);
    collector.update_target(&world, &[SourceId(0)]);

    // Enter the gather task, then park the agent at the source so every
    // iteration measures the steady dispatch-and-count path.
    collector.update(&ctx0, &mut world);
    collector.fixed_update(&ctx0, &mut world);
    collector.on_zone_enter(Zone::Source(SourceId(0)));

    let mut tick: u64 = 1;
    c.bench_function("forager-task/tick(gather)", |b| {
        b.iter(|| {
            let ctx = TickContext {
                tick,
                dt_seconds: 0.02,
            };
            collector.update(&ctx, &mut world);
            collector.fixed_update(&ctx, &mut world);
            black_box(collector.current_state());
            tick = tick.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_gather_tick);
criterion_main!(benches);
