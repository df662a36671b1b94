//! Headless demo driver for Lanternfest.
//!
//! Runs the full festival evening with a scripted player: visit the
//! costume booth, browse the stall, talk the mayor through both dialogue
//! stages, accept the fireworks prompt, and watch the show. A stand-in
//! front end prints every dialogue, shop, glow, and sound request, and
//! the app exits when the festival ends.

mod actors;
mod calendar;
mod data;
mod festival;
mod fireworks;
mod shared;
mod wardrobe;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use shared::*;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            std::time::Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .insert_resource(Calendar {
            season: FESTIVAL_SEASON,
            day: FESTIVAL_DAY,
            ..default()
        })
        .init_resource::<ActionQueue>()
        .init_resource::<DemoPlayer>()
        // Events
        .add_event::<DayStartEvent>()
        .add_event::<DayEndEvent>()
        .add_event::<InteractEvent>()
        .add_event::<PlayerMovedEvent>()
        .add_event::<ChoiceResolvedEvent>()
        .add_event::<ShowDialogueEvent>()
        .add_event::<ShowChoiceEvent>()
        .add_event::<RouteOrderEvent>()
        .add_event::<ForceStopEvent>()
        .add_event::<LaunchFireworkEvent>()
        .add_event::<SkyGlowEvent>()
        .add_event::<PlaySfxEvent>()
        .add_event::<OpenShopEvent>()
        .add_event::<NudgePlayerEvent>()
        .add_event::<BeginCostumeSwapEvent>()
        .add_event::<CostumeSwapDoneEvent>()
        .add_event::<FestivalEndedEvent>()
        // Domain plugins
        .add_plugins(calendar::CalendarPlugin)
        .add_plugins(festival::FestivalPlugin)
        .add_plugins(actors::ActorPlugin)
        .add_plugins(fireworks::FireworksPlugin)
        .add_plugins(wardrobe::WardrobePlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Scripted player & stand-in front end
        .add_systems(
            Update,
            (drive_demo_player, answer_prompts, apply_nudges, narrate, exit_when_over)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .run();
}

/// The scripted player: a tile, and a frame counter driving the script.
#[derive(Resource, Debug)]
struct DemoPlayer {
    tile: Tile,
    frame: u32,
}

impl Default for DemoPlayer {
    fn default() -> Self {
        Self {
            tile: Tile::new(30, 75),
            frame: 0,
        }
    }
}

/// Walks the scripted evening. Timings leave room for the costume fade
/// before the mayor conversation begins.
fn drive_demo_player(
    mut player: ResMut<DemoPlayer>,
    grounds: Res<GroundsLayout>,
    mut moved: EventWriter<PlayerMovedEvent>,
    mut interact: EventWriter<InteractEvent>,
) {
    player.frame += 1;
    match player.frame {
        // Step onto the costume booth.
        30 => {
            player.tile = grounds.booth_tile;
            moved.send(PlayerMovedEvent { tile: player.tile });
        }
        // Swap and fade are done; browse the merchant stall.
        200 => {
            player.tile = grounds.stall_tile;
            moved.send(PlayerMovedEvent { tile: player.tile });
            interact.send(InteractEvent {
                player_tile: player.tile,
            });
        }
        // Walk over and greet the mayor.
        260 => {
            player.tile = Tile::new(grounds.mayor_post.x, grounds.mayor_post.y + 1);
            moved.send(PlayerMovedEvent { tile: player.tile });
            interact.send(InteractEvent {
                player_tile: player.tile,
            });
        }
        // Ask again: this raises the fireworks prompt.
        320 => {
            interact.send(InteractEvent {
                player_tile: player.tile,
            });
        }
        _ => {}
    }
}

/// Accepts the fireworks prompt as soon as it appears.
fn answer_prompts(
    mut prompts: EventReader<ShowChoiceEvent>,
    mut answers: EventWriter<ChoiceResolvedEvent>,
) {
    for prompt in prompts.read() {
        info!("[Demo] Prompt: {} -> {}", prompt.prompt, prompt.yes_label);
        answers.send(ChoiceResolvedEvent {
            answer: ChoiceAnswer::Yes,
        });
    }
}

/// Applies booth-exit nudges to the scripted player's tile.
fn apply_nudges(
    mut nudges: EventReader<NudgePlayerEvent>,
    mut player: ResMut<DemoPlayer>,
    mut moved: EventWriter<PlayerMovedEvent>,
) {
    for nudge in nudges.read() {
        player.tile = Tile::new(player.tile.x + nudge.dx, player.tile.y + nudge.dy);
        moved.send(PlayerMovedEvent { tile: player.tile });
    }
}

/// Stand-in front end: prints everything a real UI would render.
fn narrate(
    mut dialogue: EventReader<ShowDialogueEvent>,
    mut shops: EventReader<OpenShopEvent>,
    mut glows: EventReader<SkyGlowEvent>,
    mut sfx: EventReader<PlaySfxEvent>,
    grounds: Res<GroundsLayout>,
) {
    for event in dialogue.read() {
        for line in &event.lines {
            info!("[Demo] {}: \"{}\"", event.speaker, line);
        }
    }
    for event in shops.read() {
        info!("[Demo] Shop {} opens:", event.shop_id);
        for listing in &grounds.stall_shop.listings {
            info!("[Demo]   {} — {}g", listing.name, listing.price);
        }
    }
    for event in glows.read() {
        info!("[Demo] The sky flashes {:?}", event.color);
    }
    for event in sfx.read() {
        debug!("[Demo] sfx: {}", event.sfx_id);
    }
}

fn exit_when_over(mut ended: EventReader<FestivalEndedEvent>, mut exit: EventWriter<AppExit>) {
    for _ in ended.read() {
        info!("[Demo] Festival over — goodnight!");
        exit.send(AppExit::Success);
    }
}
