//! Shared components, resources, events, and states for Lanternfest.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// CALENDAR
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

pub const DAYS_PER_SEASON: u8 = 28;

/// The Lantern Festival falls on Spring 15, once per year.
pub const FESTIVAL_SEASON: Season = Season::Spring;
pub const FESTIVAL_DAY: u8 = 15;

#[derive(Resource, Debug, Clone)]
pub struct Calendar {
    pub year: u32,
    pub season: Season,
    pub day: u8, // 1-28
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            year: 1,
            season: Season::Spring,
            day: 1,
        }
    }
}

impl Calendar {
    pub fn is_festival_day(&self) -> bool {
        self.season == FESTIVAL_SEASON && self.day == FESTIVAL_DAY
    }

    /// Advance to the next day, handling season and year rollover.
    pub fn advance_day(&mut self) {
        self.day += 1;
        if self.day > DAYS_PER_SEASON {
            self.day = 1;
            self.season = self.season.next();
            if self.season == Season::Spring {
                self.year += 1;
            }
        }
    }
}

/// Run condition: today is the Lantern Festival.
pub fn festival_day(calendar: Res<Calendar>) -> bool {
    calendar.is_festival_day()
}

// ═══════════════════════════════════════════════════════════════════════
// TILES & FACING
// ═══════════════════════════════════════════════════════════════════════

/// A tile coordinate on the festival grounds map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in tile units.
    pub fn distance_to(self, other: Tile) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Center of this tile in world units.
    pub fn world_center(self) -> Vec2 {
        Vec2::new(
            self.x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            self.y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

// ═══════════════════════════════════════════════════════════════════════
// ACTORS — festival roster entities
// ═══════════════════════════════════════════════════════════════════════

pub type ActorId = String;

#[derive(Component, Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
}

/// World-unit position of an actor. Plain component; the front end owns
/// any visual transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct ActorPos(pub Vec2);

/// Straight-line walk state toward a target, with arrival snapping.
#[derive(Component, Debug, Clone)]
pub struct ActorWalk {
    pub target: Vec2,
    /// World units per tick.
    pub speed: f32,
    pub is_moving: bool,
    pub facing: Facing,
    /// Facing applied once the walk target is reached.
    pub arrival_facing: Option<Facing>,
}

impl Default for ActorWalk {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            speed: ACTOR_WALK_SPEED,
            is_moving: false,
            facing: Facing::Down,
            arrival_facing: None,
        }
    }
}

/// Resource tracking which actors are currently spawned.
#[derive(Resource, Debug, Default)]
pub struct ActorIndex {
    /// Maps actor id to entity.
    pub entities: std::collections::HashMap<ActorId, Entity>,
}

// ═══════════════════════════════════════════════════════════════════════
// REGISTRIES — populated by the data layer at Loading
// ═══════════════════════════════════════════════════════════════════════

pub const MAYOR_ID: &str = "mayor";
pub const MERCHANT_ID: &str = "merchant";

#[derive(Debug, Clone)]
pub struct ActorDef {
    pub id: ActorId,
    pub name: String,
    /// Where the actor stands when the evening opens.
    pub post: Tile,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct FestivalRoster {
    pub actors: Vec<ActorDef>,
}

impl FestivalRoster {
    pub fn get(&self, id: &str) -> Option<&ActorDef> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Everyone except the mayor and merchant — the crowd that gets
    /// repositioned to the viewing rows for the show.
    pub fn crowd_ids(&self) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|a| a.id != MAYOR_ID && a.id != MERCHANT_ID)
            .map(|a| a.id.clone())
            .collect()
    }
}

/// Festival grounds layout, parsed from the data layer's embedded JSON
/// document. Data-drives everything positional: the costume booth tile,
/// the mayor's and merchant's posts, the viewing rows with their slot
/// lists, the sky region fireworks launch from, and the stall inventory.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct GroundsLayout {
    pub booth_tile: Tile,
    pub booth_exit: TileOffset,
    pub mayor_post: Tile,
    pub stall_tile: Tile,
    pub viewing_rows: ViewingRows,
    pub sky: SkyRegion,
    pub stall_shop: StallShop,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TileOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewingRows {
    pub row_a: ViewingRow,
    pub row_b: ViewingRow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewingRow {
    pub y: i32,
    /// Tile X-coordinates of each viewing slot, left to right.
    pub slots: Vec<i32>,
}

impl ViewingRows {
    pub fn capacity(&self) -> usize {
        self.row_a.slots.len() + self.row_b.slots.len()
    }
}

/// Tile region the fireworks launch inside, inclusive on both axes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SkyRegion {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StallShop {
    pub shop_id: String,
    pub listings: Vec<StallListing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StallListing {
    pub item_id: String,
    pub name: String,
    pub price: u32,
}

/// Wardrobe catalog, parsed from the data layer's embedded RON document.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct WardrobeCatalog {
    pub shirts: Vec<ClothingDef>,
    pub pants: Vec<ClothingDef>,
    /// Festive tint palette for rolled pants, as RGB bytes.
    pub palette: Vec<(u8, u8, u8)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClothingDef {
    pub id: String,
    pub name: String,
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER — the hosting layer owns movement; we track outfit & bag
// ═══════════════════════════════════════════════════════════════════════

/// What the player is currently wearing.
#[derive(Resource, Debug, Clone, Default)]
pub struct Outfit {
    pub shirt: Option<String>,
    pub pants: Option<String>,
    pub pants_tint: Option<(u8, u8, u8)>,
}

/// Flat item bag. Swapped-out clothing lands here, never destroyed.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInventory {
    pub items: Vec<String>,
}

// ═══════════════════════════════════════════════════════════════════════
// FIREWORKS — pattern & palette variants
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BurstPattern {
    Ring,
    Heart,
    TwinRing,
    Spiral,
}

pub const ALL_BURST_PATTERNS: &[BurstPattern] = &[
    BurstPattern::Ring,
    BurstPattern::Heart,
    BurstPattern::TwinRing,
    BurstPattern::Spiral,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireworkColor {
    Red,
    Gold,
    Orange,
    White,
    Cyan,
    Magenta,
    Lime,
    Yellow,
}

pub const ALL_FIREWORK_COLORS: &[FireworkColor] = &[
    FireworkColor::Red,
    FireworkColor::Gold,
    FireworkColor::Orange,
    FireworkColor::White,
    FireworkColor::Cyan,
    FireworkColor::Magenta,
    FireworkColor::Lime,
    FireworkColor::Yellow,
];

impl FireworkColor {
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            FireworkColor::Red => (1.0, 0.1, 0.1),
            FireworkColor::Gold => (1.0, 0.84, 0.0),
            FireworkColor::Orange => (1.0, 0.55, 0.0),
            FireworkColor::White => (1.0, 1.0, 1.0),
            FireworkColor::Cyan => (0.0, 1.0, 1.0),
            FireworkColor::Magenta => (1.0, 0.0, 1.0),
            FireworkColor::Lime => (0.4, 1.0, 0.2),
            FireworkColor::Yellow => (1.0, 1.0, 0.2),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// DELAYED ACTIONS — the scheduler collaborator
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedAction {
    StartShow,
    EndFestival,
}

#[derive(Debug, Clone)]
struct PendingAction {
    ticks_left: u32,
    action: DelayedAction,
}

/// Tick-counted deferred actions. Domains schedule through this resource
/// instead of capturing state in closures; one system ticks it per frame
/// and dispatches whatever comes due.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActionQueue {
    pending: Vec<PendingAction>,
}

impl ActionQueue {
    pub fn schedule_after(&mut self, ticks: u32, action: DelayedAction) {
        self.pending.push(PendingAction {
            ticks_left: ticks,
            action,
        });
    }

    /// Advance one tick and drain every action that just came due.
    pub fn tick(&mut self) -> Vec<DelayedAction> {
        let mut due = Vec::new();
        for p in self.pending.iter_mut() {
            if p.ticks_left > 0 {
                p.ticks_left -= 1;
            }
            if p.ticks_left == 0 {
                due.push(p.action);
            }
        }
        self.pending.retain(|p| p.ticks_left > 0);
        due
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct DayStartEvent {
    pub day: u8,
    pub season: Season,
    pub year: u32,
}

#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    pub day: u8,
    pub season: Season,
    pub year: u32,
}

/// Player pressed the action button. The festival layer resolves which
/// actor (if any) is in range.
#[derive(Event, Debug, Clone)]
pub struct InteractEvent {
    pub player_tile: Tile,
}

/// Player tile changed, as reported by the hosting layer.
#[derive(Event, Debug, Clone)]
pub struct PlayerMovedEvent {
    pub tile: Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceAnswer {
    Yes,
    No,
}

/// The dialogue front end resolved a pending choice prompt.
#[derive(Event, Debug, Clone)]
pub struct ChoiceResolvedEvent {
    pub answer: ChoiceAnswer,
}

/// Request: present dialogue lines to the player.
#[derive(Event, Debug, Clone)]
pub struct ShowDialogueEvent {
    pub speaker: String,
    pub lines: Vec<String>,
}

/// Request: present a yes/no prompt. Resolves back via ChoiceResolvedEvent.
#[derive(Event, Debug, Clone)]
pub struct ShowChoiceEvent {
    pub prompt: String,
    pub yes_label: String,
    pub no_label: String,
}

/// Request: route an actor to a tile, facing a direction on arrival.
#[derive(Event, Debug, Clone)]
pub struct RouteOrderEvent {
    pub actor_id: ActorId,
    pub target: Tile,
    pub arrival_facing: Facing,
}

/// Request: halt an actor in place, abandoning its route.
#[derive(Event, Debug, Clone)]
pub struct ForceStopEvent {
    pub actor_id: ActorId,
}

/// Request: launch one firework with the given variant.
#[derive(Event, Debug, Clone)]
pub struct LaunchFireworkEvent {
    pub pattern: BurstPattern,
    pub color: FireworkColor,
}

/// Request: flash the sky in the burst color (front-end screen effect).
#[derive(Event, Debug, Clone)]
pub struct SkyGlowEvent {
    pub color: FireworkColor,
}

#[derive(Event, Debug, Clone)]
pub struct PlaySfxEvent {
    pub sfx_id: String,
}

/// Request: open the hosting layer's shop menu.
#[derive(Event, Debug, Clone)]
pub struct OpenShopEvent {
    pub shop_id: String,
}

/// Request: move the player by a tile offset (booth-exit nudge).
#[derive(Event, Debug, Clone)]
pub struct NudgePlayerEvent {
    pub dx: i32,
    pub dy: i32,
}

/// Request: run the wardrobe costume-swap sequence.
#[derive(Event, Debug, Clone)]
pub struct BeginCostumeSwapEvent;

/// The wardrobe finished its swap sequence.
#[derive(Event, Debug, Clone)]
pub struct CostumeSwapDoneEvent;

/// The festival evening is over.
#[derive(Event, Debug, Clone)]
pub struct FestivalEndedEvent;

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 64.0;

/// Euclidean interaction radius around an actor, in tiles.
pub const INTERACT_RADIUS_TILES: f32 = 2.5;

/// Actor walk speed in world units per tick.
pub const ACTOR_WALK_SPEED: f32 = 7.5;

/// Ticks between firework launches during the show.
pub const FIREWORK_INTERVAL_TICKS: u32 = 60;
/// Total fireworks launched per show.
pub const FIREWORK_TOTAL: u32 = 20;
/// The show stays active through this tail even after the last launch.
pub const SHOW_TAIL_TICKS: u32 = 1300;

/// Coarse interval for polling actor arrival while the barrier waits.
pub const BARRIER_POLL_TICKS: u32 = 15;
/// The barrier gives up and force-starts the show after this many ticks.
pub const BARRIER_TIMEOUT_TICKS: u32 = 600;

/// Delay between the mayor's opening speech and the first launch window.
pub const SHOW_START_DELAY_TICKS: u32 = 90;
/// Delay between the finale dialogue and festival teardown.
pub const FESTIVAL_END_DELAY_TICKS: u32 = 420;

/// Booth re-trigger suppression window after a costume swap.
pub const COSTUME_COOLDOWN_TICKS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_distance() {
        let a = Tile::new(0, 0);
        let b = Tile::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_action_queue_fires_exactly_once_after_n_ticks() {
        let mut queue = ActionQueue::default();
        queue.schedule_after(3, DelayedAction::StartShow);

        assert!(queue.tick().is_empty(), "tick 1: nothing due");
        assert!(queue.tick().is_empty(), "tick 2: nothing due");
        let due = queue.tick();
        assert_eq!(due, vec![DelayedAction::StartShow], "tick 3: action due");
        assert!(queue.is_empty(), "queue drains after firing");
        assert!(queue.tick().is_empty(), "nothing fires twice");
    }

    #[test]
    fn test_action_queue_independent_entries() {
        let mut queue = ActionQueue::default();
        queue.schedule_after(1, DelayedAction::StartShow);
        queue.schedule_after(2, DelayedAction::EndFestival);

        assert_eq!(queue.tick(), vec![DelayedAction::StartShow]);
        assert_eq!(queue.tick(), vec![DelayedAction::EndFestival]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_action_queue_clear_abandons_pending() {
        let mut queue = ActionQueue::default();
        queue.schedule_after(5, DelayedAction::EndFestival);
        queue.clear();
        for _ in 0..10 {
            assert!(queue.tick().is_empty());
        }
    }

    #[test]
    fn test_all_firework_colors_have_rgb() {
        for &color in ALL_FIREWORK_COLORS {
            let (r, g, b) = color.rgb();
            assert!((0.0..=1.0).contains(&r));
            assert!((0.0..=1.0).contains(&g));
            assert!((0.0..=1.0).contains(&b));
        }
    }
}
