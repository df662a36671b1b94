//! Actor domain: spawns the festival roster onto the grounds and moves
//! actors along straight-line routes issued by the festival sequencer.

pub mod routing;

use bevy::prelude::*;

use crate::shared::*;

pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActorIndex>()
            .add_systems(OnEnter(GameState::Playing), spawn_roster)
            .add_systems(
                Update,
                (
                    respawn_on_day_start,
                    routing::apply_route_orders,
                    routing::apply_force_stops,
                    routing::move_actors,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn spawn_actor(commands: &mut Commands, index: &mut ActorIndex, def: &ActorDef) {
    let entity = commands
        .spawn((
            Actor {
                id: def.id.clone(),
                name: def.name.clone(),
            },
            ActorPos(def.post.world_center()),
            ActorWalk::default(),
        ))
        .id();
    index.entities.insert(def.id.clone(), entity);
}

/// Places every roster actor at its opening post.
fn spawn_roster(
    mut commands: Commands,
    roster: Res<FestivalRoster>,
    mut index: ResMut<ActorIndex>,
) {
    for def in &roster.actors {
        spawn_actor(&mut commands, &mut index, def);
    }
    info!("[Actors] Spawned {} festival actors", roster.actors.len());
}

/// A new day puts everyone back on their posts, standing still.
fn respawn_on_day_start(
    mut day_start: EventReader<DayStartEvent>,
    roster: Res<FestivalRoster>,
    index: Res<ActorIndex>,
    mut actors: Query<(&Actor, &mut ActorPos, &mut ActorWalk)>,
) {
    for _ in day_start.read() {
        for (actor, mut pos, mut walk) in &mut actors {
            let Some(def) = roster.get(&actor.id) else {
                continue;
            };
            pos.0 = def.post.world_center();
            *walk = ActorWalk::default();
        }
        debug!("[Actors] Reset {} actors to their posts", index.entities.len());
    }
}
