//! Low-level driving shared by every architecture's move behavior.

use forager_core::Vec3;

use crate::agent::AgentBody;
use crate::world::{BodyWorld, SteerWorld, TargetWorld};

/// Apply a 2-component driving input as a horizontal force, then update
/// facing from the actual displacement since the previous drive.
pub fn drive<W: BodyWorld>(agent: W::Agent, body: &mut AgentBody, world: &mut W, input: [f32; 2]) {
    let accel = body.config.acceleration * body.config.scale;
    world.apply_force(agent, Vec3::new(input[0] * accel, 0.0, input[1] * accel));
    turn_toward_motion(agent, body, world);
}

/// Face the direction of travel. Smoothing is presentation and stays
/// host-side with motion integration.
pub fn turn_toward_motion<W: BodyWorld>(agent: W::Agent, body: &mut AgentBody, world: &mut W) {
    let position = world.position(agent);
    let direction = (position - body.last_position).normalized();
    if direction != Vec3::ZERO {
        world.set_facing(agent, direction);
    }
    body.last_position = position;
}

/// Query the host's steering function for the current destination and drive
/// one tick toward it. With no destination (absent target or goal) the body
/// stays put.
pub fn steer_toward_destination<W>(agent: W::Agent, body: &mut AgentBody, world: &mut W)
where
    W: BodyWorld + SteerWorld + TargetWorld,
{
    let Some(destination) = body.destination(world) else {
        return;
    };
    let input = world.steering().direction(world.position(agent), destination);
    drive(agent, body, world, input);
}
