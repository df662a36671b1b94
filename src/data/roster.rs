//! The festival actor roster: who shows up to the Lantern Festival and
//! where they stand before the show.

use crate::shared::{ActorDef, FestivalRoster, Tile, MAYOR_ID, MERCHANT_ID};

fn actor(id: &str, name: &str, x: i32, y: i32) -> ActorDef {
    ActorDef {
        id: id.to_string(),
        name: name.to_string(),
        post: Tile::new(x, y),
    }
}

pub fn populate_roster(roster: &mut FestivalRoster) {
    roster.actors = vec![
        actor(MAYOR_ID, "Mayor Tilden", 33, 66),
        actor(MERCHANT_ID, "Merchant Peng", 25, 72),
        actor("innkeeper", "Innkeeper Sora", 28, 74),
        actor("fisherman", "Old Wen", 40, 75),
        actor("blacksmith", "Brammel", 30, 70),
        actor("teacher", "Miss Abelia", 37, 69),
        actor("farmhand", "Juno", 26, 68),
        actor("carpenter", "Halvar", 42, 71),
        actor("apothecary", "Nissa", 31, 74),
        actor("musician", "Ferren", 38, 73),
    ];
}
