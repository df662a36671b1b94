//! Festival domain plugin for Lanternfest.
//!
//! Thin Bevy systems around the pure FestivalSequencer: they feed it
//! interactions, choice resolutions, player movement, and ticks, then
//! fan its effect descriptors out as events for the collaborator
//! domains (actors, fireworks, wardrobe) and the hosting front end.

pub mod lines;
pub mod sequencer;

use bevy::prelude::*;

use crate::shared::*;
use self::sequencer::{Effect, FestivalSequencer};

pub struct FestivalPlugin;

impl Plugin for FestivalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FestivalSequencer>().add_systems(
            Update,
            (
                reset_on_day_start,
                (
                    handle_interactions,
                    handle_choice_resolutions,
                    observe_player_movement,
                    handle_swap_done,
                    tick_sequencer,
                    run_due_actions,
                )
                    .chain()
                    .run_if(festival_day),
            )
                // Reset runs before any sequencer work in the frame a
                // DayStartEvent arrives; a stale tick never slips through.
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Day start unconditionally resets the sequencer and abandons any
/// pending scheduler entries, even mid-show or mid-barrier.
fn reset_on_day_start(
    mut day_start: EventReader<DayStartEvent>,
    mut seq: ResMut<FestivalSequencer>,
    mut queue: ResMut<ActionQueue>,
) {
    for event in day_start.read() {
        seq.reset_for_new_day();
        queue.clear();
        debug!(
            "[Festival] Sequencer reset for Day {} {:?}",
            event.day, event.season
        );
    }
}

/// Distance from the player to an actor, preferring the live entity
/// position and falling back to the roster post.
fn distance_to_actor(
    player_tile: Tile,
    actor_id: &str,
    roster: &FestivalRoster,
    actors: &Query<(&Actor, &ActorPos)>,
) -> Option<f32> {
    let live = actors.iter().find_map(|(actor, pos)| {
        (actor.id == actor_id).then(|| {
            let tile = Tile::new(
                (pos.0.x / TILE_SIZE).floor() as i32,
                (pos.0.y / TILE_SIZE).floor() as i32,
            );
            player_tile.distance_to(tile)
        })
    });
    let posted = roster.get(actor_id).map(|def| player_tile.distance_to(def.post));

    match (live, posted) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Resolves action-button presses: the mayor drives the dialogue flow,
/// the merchant opens the stall. The mayor wins when both are in range;
/// interactions outside both radii are silently ignored.
fn handle_interactions(
    mut interactions: EventReader<InteractEvent>,
    mut seq: ResMut<FestivalSequencer>,
    roster: Res<FestivalRoster>,
    grounds: Res<GroundsLayout>,
    actors: Query<(&Actor, &ActorPos)>,
    mut dialogue: EventWriter<ShowDialogueEvent>,
    mut choice: EventWriter<ShowChoiceEvent>,
    mut shop: EventWriter<OpenShopEvent>,
) {
    for event in interactions.read() {
        let near_mayor = distance_to_actor(event.player_tile, MAYOR_ID, &roster, &actors)
            .is_some_and(|d| d <= INTERACT_RADIUS_TILES);
        let near_merchant = distance_to_actor(event.player_tile, MERCHANT_ID, &roster, &actors)
            .is_some_and(|d| d <= INTERACT_RADIUS_TILES);

        if near_mayor {
            debug!("[Festival] Player is near the mayor — handling interaction");
            match seq.on_interact() {
                Some(Effect::Dialogue { speaker, lines }) => {
                    dialogue.send(ShowDialogueEvent { speaker, lines });
                }
                Some(Effect::ChoicePrompt {
                    prompt,
                    yes_label,
                    no_label,
                }) => {
                    choice.send(ShowChoiceEvent {
                        prompt,
                        yes_label,
                        no_label,
                    });
                }
                Some(other) => warn!("[Festival] Unexpected interact effect: {:?}", other),
                None => {}
            }
        } else if near_merchant {
            if seq.busy() {
                debug!("[Festival] Stall ignored while a sequence is running");
                continue;
            }
            if grounds.stall_shop.listings.is_empty() {
                // No stock registered: greet instead of opening an
                // empty menu. Logged, never an error.
                warn!("[Festival] Stall has no listings — falling back to greeting");
                dialogue.send(ShowDialogueEvent {
                    speaker: lines::MERCHANT_NAME.to_string(),
                    lines: vec![lines::STALL_GREETING.to_string()],
                });
            } else {
                debug!("[Festival] Opening stall shop {}", grounds.stall_shop.shop_id);
                shop.send(OpenShopEvent {
                    shop_id: grounds.stall_shop.shop_id.clone(),
                });
            }
        }
    }
}

/// The dialogue front end resolved the fireworks prompt. "Yes" gathers
/// the crowd and arms the arrival barrier.
fn handle_choice_resolutions(
    mut resolutions: EventReader<ChoiceResolvedEvent>,
    mut seq: ResMut<FestivalSequencer>,
    roster: Res<FestivalRoster>,
    grounds: Res<GroundsLayout>,
    mut routes: EventWriter<RouteOrderEvent>,
) {
    for event in resolutions.read() {
        if seq.resolve_choice(event.answer) != Some(Effect::BeginRepositioning) {
            continue;
        }

        let crowd = roster.crowd_ids();
        if crowd.is_empty() {
            warn!("[Festival] No crowd actors to reposition — show proceeds without them");
        }
        info!(
            "[Festival] Fireworks accepted — repositioning {} crowd actors",
            crowd.len()
        );

        for effect in seq.begin_repositioning(&crowd, &grounds.viewing_rows) {
            if let Effect::Route {
                actor_id,
                target,
                arrival_facing,
            } = effect
            {
                routes.send(RouteOrderEvent {
                    actor_id,
                    target,
                    arrival_facing,
                });
            }
        }
    }
}

/// Feeds observed player tiles to the booth edge detector.
fn observe_player_movement(
    mut moves: EventReader<PlayerMovedEvent>,
    mut seq: ResMut<FestivalSequencer>,
    grounds: Res<GroundsLayout>,
    mut swaps: EventWriter<BeginCostumeSwapEvent>,
) {
    for event in moves.read() {
        if let Some(Effect::BeginCostumeSwap) =
            seq.observe_player_tile(event.tile, grounds.booth_tile)
        {
            info!(
                "[Festival] Player entered the costume booth at ({}, {})",
                event.tile.x, event.tile.y
            );
            swaps.send(BeginCostumeSwapEvent);
        }
    }
}

/// Wardrobe finished: clear the busy flag, start the cooldown, and nudge
/// the player off the booth tile so re-entry requires a fresh edge.
fn handle_swap_done(
    mut done: EventReader<CostumeSwapDoneEvent>,
    mut seq: ResMut<FestivalSequencer>,
    grounds: Res<GroundsLayout>,
    mut nudges: EventWriter<NudgePlayerEvent>,
) {
    for _ in done.read() {
        seq.swap_finished();
        nudges.send(NudgePlayerEvent {
            dx: grounds.booth_exit.dx,
            dy: grounds.booth_exit.dy,
        });
    }
}

/// One sequencer tick per frame. Polls barrier arrival at the coarse
/// interval, fans out the tick effects, and feeds schedule requests to
/// the shared action queue.
fn tick_sequencer(
    mut seq: ResMut<FestivalSequencer>,
    mut queue: ResMut<ActionQueue>,
    actors: Query<(&Actor, &ActorWalk)>,
    mut dialogue: EventWriter<ShowDialogueEvent>,
    mut stops: EventWriter<ForceStopEvent>,
    mut launches: EventWriter<LaunchFireworkEvent>,
) {
    let poll = match (&seq.barrier, seq.barrier_poll_due()) {
        (Some(barrier), true) => {
            // An actor that never spawned counts as halted; the router
            // already teleported it into place.
            Some(barrier.members.iter().all(|id| {
                actors
                    .iter()
                    .find(|(actor, _)| &actor.id == id)
                    .map_or(true, |(_, walk)| !walk.is_moving)
            }))
        }
        _ => None,
    };

    let mut rng = rand::thread_rng();
    for effect in seq.on_tick(poll, &mut rng) {
        match effect {
            Effect::Dialogue { speaker, lines } => {
                dialogue.send(ShowDialogueEvent { speaker, lines });
            }
            Effect::ForceStop { actor_id } => {
                warn!("[Festival] Barrier timeout — force-stopping {}", actor_id);
                stops.send(ForceStopEvent { actor_id });
            }
            Effect::LaunchFirework { pattern, color } => {
                launches.send(LaunchFireworkEvent { pattern, color });
            }
            Effect::ScheduleShowStart { delay_ticks } => {
                info!("[Festival] Crowd in place — show starts in {} ticks", delay_ticks);
                queue.schedule_after(delay_ticks, DelayedAction::StartShow);
            }
            Effect::ScheduleFestivalEnd { delay_ticks } => {
                info!(
                    "[Festival] Show over — festival ends in {} ticks",
                    delay_ticks
                );
                queue.schedule_after(delay_ticks, DelayedAction::EndFestival);
            }
            other => warn!("[Festival] Unexpected tick effect: {:?}", other),
        }
    }
}

/// Ticks the shared action queue and dispatches whatever comes due.
fn run_due_actions(
    mut queue: ResMut<ActionQueue>,
    mut seq: ResMut<FestivalSequencer>,
    mut ended: EventWriter<FestivalEndedEvent>,
) {
    for action in queue.tick() {
        match action {
            DelayedAction::StartShow => {
                info!("[Festival] Fireworks show started!");
                seq.start_show();
            }
            DelayedAction::EndFestival => {
                info!("[Festival] The Lantern Festival has ended.");
                ended.send(FestivalEndedEvent);
            }
        }
    }
}
