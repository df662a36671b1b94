//! Straight-line routing. The grounds are an open plaza, so routes are
//! point-to-point walks with arrival snapping rather than pathfinding.

use bevy::prelude::*;

use crate::shared::*;

/// Facing derived from a movement delta, dominant axis wins.
fn facing_toward(delta: Vec2) -> Facing {
    if delta.x.abs() >= delta.y.abs() {
        if delta.x >= 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    } else if delta.y >= 0.0 {
        Facing::Up
    } else {
        Facing::Down
    }
}

/// Starts a walk for each route order. An order naming an unknown actor
/// is recovered by spawning it directly at the target so the arrival
/// barrier never waits on a ghost.
pub fn apply_route_orders(
    mut orders: EventReader<RouteOrderEvent>,
    mut commands: Commands,
    mut index: ResMut<ActorIndex>,
    mut actors: Query<(&ActorPos, &mut ActorWalk)>,
) {
    for order in orders.read() {
        let target = order.target.world_center();

        let Some(&entity) = index.entities.get(&order.actor_id) else {
            warn!(
                "[Actors] Route for unknown actor {} — placing at target",
                order.actor_id
            );
            let entity = commands
                .spawn((
                    Actor {
                        id: order.actor_id.clone(),
                        name: order.actor_id.clone(),
                    },
                    ActorPos(target),
                    ActorWalk {
                        facing: order.arrival_facing,
                        ..default()
                    },
                ))
                .id();
            index.entities.insert(order.actor_id.clone(), entity);
            continue;
        };

        let Ok((pos, mut walk)) = actors.get_mut(entity) else {
            continue;
        };
        walk.target = target;
        walk.is_moving = true;
        walk.facing = facing_toward(target - pos.0);
        walk.arrival_facing = Some(order.arrival_facing);
        debug!(
            "[Actors] Routing {} to ({}, {})",
            order.actor_id, order.target.x, order.target.y
        );
    }
}

/// Halts an actor in place, applying its arrival facing if one was set.
pub fn apply_force_stops(
    mut stops: EventReader<ForceStopEvent>,
    index: Res<ActorIndex>,
    mut actors: Query<&mut ActorWalk>,
) {
    for stop in stops.read() {
        let Some(&entity) = index.entities.get(&stop.actor_id) else {
            continue;
        };
        let Ok(mut walk) = actors.get_mut(entity) else {
            continue;
        };
        walk.is_moving = false;
        if let Some(facing) = walk.arrival_facing.take() {
            walk.facing = facing;
        }
    }
}

/// Per-tick movement: step each walking actor toward its target, snap
/// on arrival, and turn to the arrival facing.
pub fn move_actors(mut actors: Query<(&mut ActorPos, &mut ActorWalk)>) {
    for (mut pos, mut walk) in &mut actors {
        if !walk.is_moving {
            continue;
        }

        let delta = walk.target - pos.0;
        if delta.length() <= walk.speed {
            pos.0 = walk.target;
            walk.is_moving = false;
            if let Some(facing) = walk.arrival_facing.take() {
                walk.facing = facing;
            }
        } else {
            pos.0 += delta.normalize() * walk.speed;
            walk.facing = facing_toward(delta);
        }
    }
}
