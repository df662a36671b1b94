//! Data layer — populates all registries at startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), parses the embedded
//! festival-grounds document and wardrobe catalog, fills the actor
//! roster, then transitions into GameState::Playing.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once GameState has advanced past Loading.

pub mod grounds;
pub mod roster;
pub mod wardrobe;

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FestivalRoster>()
            .add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then transitions to
/// Playing. GroundsLayout and WardrobeCatalog are inserted here rather
/// than init'd because they only exist in parsed form.
fn load_all_data(
    mut commands: Commands,
    mut roster: ResMut<FestivalRoster>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("[Data] Populating registries…");

    let grounds = grounds::load_grounds();
    info!(
        "  Grounds loaded: booth ({}, {}), mayor post ({}, {}), {} viewing slots, {} stall listings",
        grounds.booth_tile.x,
        grounds.booth_tile.y,
        grounds.mayor_post.x,
        grounds.mayor_post.y,
        grounds.viewing_rows.capacity(),
        grounds.stall_shop.listings.len(),
    );
    commands.insert_resource(grounds);

    roster::populate_roster(&mut roster);
    info!("  Actors loaded: {}", roster.actors.len());

    let catalog = wardrobe::load_wardrobe_catalog();
    info!(
        "  Wardrobe loaded: {} shirts, {} pants, {} tints",
        catalog.shirts.len(),
        catalog.pants.len(),
        catalog.palette.len(),
    );
    commands.insert_resource(catalog);

    info!("[Data] All registries populated. Transitioning to Playing.");
    next_state.set(GameState::Playing);
}
