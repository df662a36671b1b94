//! Fireworks domain: turns launch requests into spark entities over the
//! festival sky, ages them under gravity and fade, and despawns them
//! once fully faded.

pub mod patterns;

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;
use self::patterns::{SPARK_FADE, SPARK_GRAVITY};

/// One glowing particle of a burst.
#[derive(Component, Debug, Clone)]
pub struct Spark {
    pub velocity: Vec2,
    pub alpha: f32,
    pub color: FireworkColor,
}

pub struct FireworksPlugin;

impl Plugin for FireworksPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_launches, age_sparks)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Detonates each requested burst at a random point inside the sky
/// region, with the matching screen glow and report sound.
fn handle_launches(
    mut launches: EventReader<LaunchFireworkEvent>,
    mut commands: Commands,
    grounds: Res<GroundsLayout>,
    mut glow: EventWriter<SkyGlowEvent>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    let mut rng = rand::thread_rng();
    for launch in launches.read() {
        let sky = &grounds.sky;
        let origin = Tile::new(
            rng.gen_range(sky.x_min..=sky.x_max),
            rng.gen_range(sky.y_min..=sky.y_max),
        )
        .world_center();

        let sparks = patterns::sample_burst(launch.pattern, &mut rng);
        debug!(
            "[Fireworks] {:?} burst, {} {:?} sparks at ({:.0}, {:.0})",
            launch.pattern,
            sparks.len(),
            launch.color,
            origin.x,
            origin.y
        );
        for velocity in sparks {
            commands.spawn((
                Spark {
                    velocity,
                    alpha: 1.0,
                    color: launch.color,
                },
                ActorPos(origin),
            ));
        }

        glow.send(SkyGlowEvent {
            color: launch.color,
        });
        sfx.send(PlaySfxEvent {
            sfx_id: "firework".to_string(),
        });
    }
}

/// Per-tick spark physics: drift, gravity, fade, despawn.
fn age_sparks(mut commands: Commands, mut sparks: Query<(Entity, &mut Spark, &mut ActorPos)>) {
    for (entity, mut spark, mut pos) in &mut sparks {
        pos.0 += spark.velocity;
        spark.velocity.y -= SPARK_GRAVITY;
        spark.alpha -= SPARK_FADE;
        if spark.alpha <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
