//! Wardrobe domain: the costume-booth swap sequence. A swap fades the
//! screen out, rolls a fresh festive outfit (returning the old clothes
//! to the bag), fades back in, and confirms with a short dialogue line.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Ticks for each half of the screen fade.
pub const FADE_TICKS: u32 = 50;

const BOOTH_SPEAKER: &str = "Costume Booth";

/// Swap sequence state. The outfit itself changes at the midpoint,
/// while the screen is dark.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub enum SwapPhase {
    #[default]
    Idle,
    FadingOut {
        ticks_left: u32,
    },
    FadingIn {
        ticks_left: u32,
    },
}

pub struct WardrobePlugin;

impl Plugin for WardrobePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwapPhase>()
            .init_resource::<Outfit>()
            .init_resource::<PlayerInventory>()
            .add_systems(
                Update,
                (reset_on_day_start, begin_swaps, advance_swap)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Rolls a random festive outfit. Whatever the player was wearing goes
/// back to the bag; clothing is conserved, never destroyed.
pub fn roll_festive_outfit(
    current: &Outfit,
    bag: &mut PlayerInventory,
    catalog: &WardrobeCatalog,
    rng: &mut impl Rng,
) -> Outfit {
    if let Some(shirt) = &current.shirt {
        bag.items.push(shirt.clone());
    }
    if let Some(pants) = &current.pants {
        bag.items.push(pants.clone());
    }

    let shirt = (!catalog.shirts.is_empty())
        .then(|| catalog.shirts[rng.gen_range(0..catalog.shirts.len())].id.clone());
    let pants = (!catalog.pants.is_empty())
        .then(|| catalog.pants[rng.gen_range(0..catalog.pants.len())].id.clone());
    let pants_tint = (!catalog.palette.is_empty())
        .then(|| catalog.palette[rng.gen_range(0..catalog.palette.len())]);

    Outfit {
        shirt,
        pants,
        pants_tint,
    }
}

/// An abandoned fade does not carry into the next festival day.
fn reset_on_day_start(mut day_start: EventReader<DayStartEvent>, mut phase: ResMut<SwapPhase>) {
    for _ in day_start.read() {
        *phase = SwapPhase::Idle;
    }
}

fn begin_swaps(mut begins: EventReader<BeginCostumeSwapEvent>, mut phase: ResMut<SwapPhase>) {
    for _ in begins.read() {
        if *phase != SwapPhase::Idle {
            warn!("[Wardrobe] Swap requested while one is running — ignored");
            continue;
        }
        info!("[Wardrobe] Starting costume swap");
        *phase = SwapPhase::FadingOut {
            ticks_left: FADE_TICKS,
        };
    }
}

/// Drives the fade timeline one tick per frame.
fn advance_swap(
    mut phase: ResMut<SwapPhase>,
    mut outfit: ResMut<Outfit>,
    mut bag: ResMut<PlayerInventory>,
    catalog: Res<WardrobeCatalog>,
    mut dialogue: EventWriter<ShowDialogueEvent>,
    mut done: EventWriter<CostumeSwapDoneEvent>,
) {
    match &mut *phase {
        SwapPhase::Idle => {}
        SwapPhase::FadingOut { ticks_left } => {
            *ticks_left -= 1;
            if *ticks_left == 0 {
                let mut rng = rand::thread_rng();
                *outfit = roll_festive_outfit(&outfit, &mut bag, &catalog, &mut rng);
                info!(
                    "[Wardrobe] New outfit: shirt {:?}, pants {:?} tinted {:?}",
                    outfit.shirt, outfit.pants, outfit.pants_tint
                );
                *phase = SwapPhase::FadingIn {
                    ticks_left: FADE_TICKS,
                };
            }
        }
        SwapPhase::FadingIn { ticks_left } => {
            *ticks_left -= 1;
            if *ticks_left == 0 {
                *phase = SwapPhase::Idle;
                dialogue.send(ShowDialogueEvent {
                    speaker: BOOTH_SPEAKER.to_string(),
                    lines: vec!["Looking festive! Enjoy the evening.".to_string()],
                });
                done.send(CostumeSwapDoneEvent);
            }
        }
    }
}
