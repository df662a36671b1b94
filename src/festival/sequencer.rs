//! The festival sequencer: a per-day state machine that turns two
//! low-frequency inputs — "player interacted near the mayor" and
//! "tick" — into an ordered stream of side-effect requests.
//!
//! The sequencer never touches actors, dialogue, or inventory itself.
//! Every operation returns Effect descriptors for the Bevy systems in
//! this domain to fan out as events. That keeps the whole gating logic
//! (two-stage mayor dialogue → crowd-arrival barrier → timed show →
//! teardown) pure and directly testable.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

use super::lines;

/// Progress through the mayor's two-stage dialogue flow.
/// Only ever advances; a new day resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TalkStage {
    #[default]
    NotStarted,
    Greeted,
    Triggered,
}

/// The fireworks show timeline.
#[derive(Debug, Clone, Default)]
pub struct ShowTimeline {
    pub active: bool,
    pub elapsed_ticks: u32,
    pub launched: u32,
}

/// Actors we are waiting on to reach their viewing slots.
#[derive(Debug, Clone)]
pub struct Barrier {
    pub members: Vec<ActorId>,
    pub waited_ticks: u32,
}

/// A side-effect request for a collaborator to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Dialogue {
        speaker: String,
        lines: Vec<String>,
    },
    ChoicePrompt {
        prompt: String,
        yes_label: String,
        no_label: String,
    },
    /// The player accepted; the caller gathers the crowd roster and
    /// calls begin_repositioning.
    BeginRepositioning,
    Route {
        actor_id: ActorId,
        target: Tile,
        arrival_facing: Facing,
    },
    ForceStop {
        actor_id: ActorId,
    },
    LaunchFirework {
        pattern: BurstPattern,
        color: FireworkColor,
    },
    BeginCostumeSwap,
    ScheduleShowStart {
        delay_ticks: u32,
    },
    ScheduleFestivalEnd {
        delay_ticks: u32,
    },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct FestivalSequencer {
    pub talk_stage: TalkStage,
    /// A yes/no prompt is on screen awaiting resolution.
    pub choice_pending: bool,
    pub show: ShowTimeline,
    /// Barrier resolved, show scheduled but not yet started.
    pub show_pending: bool,
    pub barrier: Option<Barrier>,
    pub costume_cooldown_ticks: u32,
    pub swap_in_progress: bool,
    pub last_player_tile: Option<Tile>,
}

impl FestivalSequencer {
    /// A scripted sequence is in progress. Nothing else may start while
    /// this holds; it is what keeps a costume swap and a fireworks
    /// sequence from overlapping.
    pub fn busy(&self) -> bool {
        self.swap_in_progress || self.barrier.is_some() || self.show_pending || self.show.active
    }

    /// Player interacted within range of the mayor.
    pub fn on_interact(&mut self) -> Option<Effect> {
        if self.busy() {
            return None;
        }

        match self.talk_stage {
            TalkStage::NotStarted => {
                self.talk_stage = TalkStage::Greeted;
                Some(Effect::Dialogue {
                    speaker: lines::MAYOR_NAME.to_string(),
                    lines: lines::WELCOME_LINES.iter().map(|s| s.to_string()).collect(),
                })
            }
            TalkStage::Greeted => {
                if self.choice_pending {
                    // A prompt is already on screen; ignore re-interaction.
                    return None;
                }
                self.choice_pending = true;
                Some(Effect::ChoicePrompt {
                    prompt: lines::CHOICE_PROMPT.to_string(),
                    yes_label: lines::CHOICE_YES.to_string(),
                    no_label: lines::CHOICE_NO.to_string(),
                })
            }
            // Repeatable flavor line once the show has been triggered.
            TalkStage::Triggered => Some(Effect::Dialogue {
                speaker: lines::MAYOR_NAME.to_string(),
                lines: vec![lines::FLAVOR_LINE.to_string()],
            }),
        }
    }

    /// The deferred continuation for the yes/no prompt, resolved by the
    /// dialogue front end. "Yes" commits the finale — the stage never
    /// regresses after this, so the show can trigger at most once per
    /// day. Any other answer leaves the stage at Greeted so the player
    /// may retry.
    pub fn resolve_choice(&mut self, answer: ChoiceAnswer) -> Option<Effect> {
        if !self.choice_pending {
            return None;
        }
        self.choice_pending = false;

        if self.talk_stage != TalkStage::Greeted {
            return None;
        }

        match answer {
            ChoiceAnswer::Yes => {
                self.talk_stage = TalkStage::Triggered;
                Some(Effect::BeginRepositioning)
            }
            ChoiceAnswer::No => None,
        }
    }

    /// Assign the crowd to viewing slots, alternating row A / row B in
    /// roster order until both slot lists are exhausted. Actors beyond
    /// capacity are skipped, not queued. Arms the barrier with the
    /// assigned subset and returns one route order per assignment.
    pub fn begin_repositioning(
        &mut self,
        crowd: &[ActorId],
        rows: &ViewingRows,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut assigned = Vec::new();
        let mut next_a = 0usize;
        let mut next_b = 0usize;

        for (i, actor_id) in crowd.iter().enumerate() {
            let prefer_a = i % 2 == 0;
            let target = if prefer_a && next_a < rows.row_a.slots.len() {
                let t = Tile::new(rows.row_a.slots[next_a], rows.row_a.y);
                next_a += 1;
                Some(t)
            } else if !prefer_a && next_b < rows.row_b.slots.len() {
                let t = Tile::new(rows.row_b.slots[next_b], rows.row_b.y);
                next_b += 1;
                Some(t)
            } else if next_a < rows.row_a.slots.len() {
                let t = Tile::new(rows.row_a.slots[next_a], rows.row_a.y);
                next_a += 1;
                Some(t)
            } else if next_b < rows.row_b.slots.len() {
                let t = Tile::new(rows.row_b.slots[next_b], rows.row_b.y);
                next_b += 1;
                Some(t)
            } else {
                None
            };

            let Some(target) = target else {
                continue;
            };

            assigned.push(actor_id.clone());
            effects.push(Effect::Route {
                actor_id: actor_id.clone(),
                target,
                arrival_facing: Facing::Up,
            });
        }

        self.barrier = Some(Barrier {
            members: assigned,
            waited_ticks: 0,
        });

        effects
    }

    /// Whether the next on_tick should poll actor arrival. Polling is
    /// coarse to bound per-tick overhead.
    pub fn barrier_poll_due(&self) -> bool {
        match &self.barrier {
            Some(b) => (b.waited_ticks + 1) % BARRIER_POLL_TICKS == 0,
            None => false,
        }
    }

    /// One tick of the sequencer. `barrier_all_halted` carries the
    /// arrival poll result, Some only on poll-due ticks.
    ///
    /// Effect ordering within a tick is barrier effects first, then show
    /// effects; the two timelines never interact in a single tick.
    pub fn on_tick(
        &mut self,
        barrier_all_halted: Option<bool>,
        rng: &mut impl Rng,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        // Barrier: wait for the crowd, bounded by a hard timeout so the
        // show always eventually starts.
        if let Some(barrier) = &mut self.barrier {
            barrier.waited_ticks += 1;
            let arrived = barrier_all_halted == Some(true);
            let timed_out = barrier.waited_ticks >= BARRIER_TIMEOUT_TICKS;

            if arrived || timed_out {
                let members = std::mem::take(&mut barrier.members);
                self.barrier = None;
                if timed_out && !arrived {
                    // Force-halt stragglers where they stand.
                    for actor_id in &members {
                        effects.push(Effect::ForceStop {
                            actor_id: actor_id.clone(),
                        });
                    }
                }
                effects.push(Effect::Dialogue {
                    speaker: lines::MAYOR_NAME.to_string(),
                    lines: vec![lines::OPENING_SPEECH.to_string()],
                });
                self.show_pending = true;
                effects.push(Effect::ScheduleShowStart {
                    delay_ticks: SHOW_START_DELAY_TICKS,
                });
            }
        }

        // Show timeline: launch at fixed intervals, then hold through
        // the tail so the last sparks fade before the finale.
        if self.show.active {
            self.show.elapsed_ticks += 1;

            if self.show.elapsed_ticks % FIREWORK_INTERVAL_TICKS == 0
                && self.show.launched < FIREWORK_TOTAL
            {
                let pattern = ALL_BURST_PATTERNS[rng.gen_range(0..ALL_BURST_PATTERNS.len())];
                let color = ALL_FIREWORK_COLORS[rng.gen_range(0..ALL_FIREWORK_COLORS.len())];
                effects.push(Effect::LaunchFirework { pattern, color });
                self.show.launched += 1;
            }

            if self.show.launched >= FIREWORK_TOTAL && self.show.elapsed_ticks > SHOW_TAIL_TICKS {
                self.show.active = false;
                effects.push(Effect::Dialogue {
                    speaker: lines::MAYOR_NAME.to_string(),
                    lines: vec![lines::FINALE_LINE.to_string()],
                });
                effects.push(Effect::ScheduleFestivalEnd {
                    delay_ticks: FESTIVAL_END_DELAY_TICKS,
                });
            }
        }

        if self.costume_cooldown_ticks > 0 {
            self.costume_cooldown_ticks -= 1;
        }

        effects
    }

    /// Scheduler callback: the delayed show start came due.
    pub fn start_show(&mut self) {
        if !self.show_pending {
            return;
        }
        self.show_pending = false;
        self.show = ShowTimeline {
            active: true,
            elapsed_ticks: 0,
            launched: 0,
        };
    }

    /// Edge-triggered costume-booth detector: fires only when the
    /// observed tile changes onto the booth tile, with no sequence in
    /// progress and the cooldown expired.
    pub fn observe_player_tile(&mut self, tile: Tile, booth: Tile) -> Option<Effect> {
        let entered = self.last_player_tile != Some(tile);
        self.last_player_tile = Some(tile);

        if !entered || tile != booth {
            return None;
        }
        if self.busy() || self.costume_cooldown_ticks > 0 {
            return None;
        }

        self.swap_in_progress = true;
        Some(Effect::BeginCostumeSwap)
    }

    /// Wardrobe callback: the swap sequence finished.
    pub fn swap_finished(&mut self) {
        self.swap_in_progress = false;
        self.costume_cooldown_ticks = COSTUME_COOLDOWN_TICKS;
    }

    /// Day-start reset. Abandons any in-flight barrier or show.
    pub fn reset_for_new_day(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn rows(cap: usize) -> ViewingRows {
        ViewingRows {
            row_a: ViewingRow {
                y: 68,
                slots: (0..cap as i32).map(|i| 28 + 2 * i).collect(),
            },
            row_b: ViewingRow {
                y: 70,
                slots: (0..cap as i32).map(|i| 29 + 2 * i).collect(),
            },
        }
    }

    fn crowd(n: usize) -> Vec<ActorId> {
        (0..n).map(|i| format!("actor_{i}")).collect()
    }

    /// Drives the sequencer through choice resolution and the barrier
    /// into an active show.
    fn start_show(seq: &mut FestivalSequencer) {
        assert!(seq.on_interact().is_some()); // welcome
        assert!(seq.on_interact().is_some()); // choice prompt
        assert_eq!(seq.resolve_choice(ChoiceAnswer::Yes), Some(Effect::BeginRepositioning));
        seq.begin_repositioning(&crowd(4), &rows(3));
        // Resolve the barrier by reporting everyone halted on a poll tick.
        let mut r = rng();
        loop {
            let poll = seq.barrier_poll_due().then_some(true);
            let effects = seq.on_tick(poll, &mut r);
            if effects
                .iter()
                .any(|e| matches!(e, Effect::ScheduleShowStart { .. }))
            {
                break;
            }
        }
        seq.start_show();
        assert!(seq.show.active);
    }

    // ── Dialogue staging ─────────────────────────────────────────────

    #[test]
    fn test_first_interaction_greets_and_advances() {
        let mut seq = FestivalSequencer::default();
        let effect = seq.on_interact().unwrap();
        assert!(matches!(effect, Effect::Dialogue { .. }));
        assert_eq!(seq.talk_stage, TalkStage::Greeted);
    }

    #[test]
    fn test_second_interaction_prompts_choice() {
        let mut seq = FestivalSequencer::default();
        seq.on_interact();
        let effect = seq.on_interact().unwrap();
        assert!(matches!(effect, Effect::ChoicePrompt { .. }));
        assert!(seq.choice_pending);
    }

    #[test]
    fn test_interaction_ignored_while_prompt_unresolved() {
        let mut seq = FestivalSequencer::default();
        seq.on_interact();
        seq.on_interact();
        assert_eq!(seq.on_interact(), None);
    }

    #[test]
    fn test_yes_triggers_exactly_once() {
        let mut seq = FestivalSequencer::default();
        seq.on_interact();
        seq.on_interact();
        assert_eq!(
            seq.resolve_choice(ChoiceAnswer::Yes),
            Some(Effect::BeginRepositioning)
        );
        assert_eq!(seq.talk_stage, TalkStage::Triggered);

        // A stale resolution can never re-trigger.
        assert_eq!(seq.resolve_choice(ChoiceAnswer::Yes), None);
    }

    #[test]
    fn test_no_leaves_stage_greeted_and_allows_retry() {
        let mut seq = FestivalSequencer::default();
        seq.on_interact();
        seq.on_interact();
        assert_eq!(seq.resolve_choice(ChoiceAnswer::No), None);
        assert_eq!(seq.talk_stage, TalkStage::Greeted);

        // The prompt can be re-armed.
        let effect = seq.on_interact().unwrap();
        assert!(matches!(effect, Effect::ChoicePrompt { .. }));
    }

    #[test]
    fn test_triggered_stage_repeats_flavor_forever() {
        let mut seq = FestivalSequencer::default();
        start_show(&mut seq);
        // Run the show to completion so the sequencer is idle again.
        let mut r = rng();
        while seq.show.active {
            seq.on_tick(None, &mut r);
        }

        for _ in 0..5 {
            let effect = seq.on_interact().unwrap();
            assert!(matches!(effect, Effect::Dialogue { .. }));
            assert_eq!(seq.talk_stage, TalkStage::Triggered);
        }
    }

    #[test]
    fn test_resolve_without_pending_prompt_is_ignored() {
        let mut seq = FestivalSequencer::default();
        assert_eq!(seq.resolve_choice(ChoiceAnswer::Yes), None);
        assert_eq!(seq.talk_stage, TalkStage::NotStarted);
    }

    // ── Slot assignment ──────────────────────────────────────────────

    #[test]
    fn test_repositioning_assigns_min_of_n_and_capacity() {
        for (n, cap) in [(4usize, 3usize), (6, 3), (8, 3), (2, 5), (0, 3)] {
            let mut seq = FestivalSequencer::default();
            let effects = seq.begin_repositioning(&crowd(n), &rows(cap));
            let routes = effects
                .iter()
                .filter(|e| matches!(e, Effect::Route { .. }))
                .count();
            assert_eq!(routes, n.min(2 * cap), "n={n} cap={cap}");
            assert_eq!(
                seq.barrier.as_ref().unwrap().members.len(),
                n.min(2 * cap)
            );
        }
    }

    #[test]
    fn test_repositioning_alternates_rows_in_order() {
        let mut seq = FestivalSequencer::default();
        let r = rows(3);
        let effects = seq.begin_repositioning(&crowd(6), &r);

        let targets: Vec<Tile> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Route { target, .. } => Some(*target),
                _ => None,
            })
            .collect();

        // A, B, A, B, A, B — each row's slots used left to right.
        assert_eq!(targets[0], Tile::new(r.row_a.slots[0], r.row_a.y));
        assert_eq!(targets[1], Tile::new(r.row_b.slots[0], r.row_b.y));
        assert_eq!(targets[2], Tile::new(r.row_a.slots[1], r.row_a.y));
        assert_eq!(targets[3], Tile::new(r.row_b.slots[1], r.row_b.y));
        assert_eq!(targets[4], Tile::new(r.row_a.slots[2], r.row_a.y));
        assert_eq!(targets[5], Tile::new(r.row_b.slots[2], r.row_b.y));
    }

    #[test]
    fn test_repositioning_faces_actors_up() {
        let mut seq = FestivalSequencer::default();
        let effects = seq.begin_repositioning(&crowd(4), &rows(3));
        for e in &effects {
            if let Effect::Route { arrival_facing, .. } = e {
                assert_eq!(*arrival_facing, Facing::Up);
            }
        }
    }

    // ── Barrier ──────────────────────────────────────────────────────

    #[test]
    fn test_barrier_resolves_on_arrival_poll() {
        let mut seq = FestivalSequencer::default();
        seq.begin_repositioning(&crowd(4), &rows(3));
        let mut r = rng();

        let mut scheduled = false;
        for _ in 0..BARRIER_POLL_TICKS + 1 {
            let poll = seq.barrier_poll_due().then_some(true);
            let effects = seq.on_tick(poll, &mut r);
            if effects
                .iter()
                .any(|e| matches!(e, Effect::ScheduleShowStart { .. }))
            {
                scheduled = true;
                // No force stops on the clean-arrival path.
                assert!(!effects.iter().any(|e| matches!(e, Effect::ForceStop { .. })));
                break;
            }
        }
        assert!(scheduled, "barrier should resolve on the first poll");
        assert!(seq.barrier.is_none());
        assert!(seq.show_pending);
    }

    #[test]
    fn test_barrier_times_out_when_nobody_arrives() {
        let mut seq = FestivalSequencer::default();
        seq.begin_repositioning(&crowd(4), &rows(3));
        let mut r = rng();

        let mut scheduled_at = None;
        let mut force_stops = 0;
        for tick in 1..=BARRIER_TIMEOUT_TICKS + 10 {
            // Stragglers never report halted.
            let poll = seq.barrier_poll_due().then_some(false);
            let effects = seq.on_tick(poll, &mut r);
            force_stops += effects
                .iter()
                .filter(|e| matches!(e, Effect::ForceStop { .. }))
                .count();
            if effects
                .iter()
                .any(|e| matches!(e, Effect::ScheduleShowStart { .. }))
            {
                scheduled_at = Some(tick);
                break;
            }
        }

        assert_eq!(
            scheduled_at,
            Some(BARRIER_TIMEOUT_TICKS),
            "timeout path must still schedule the show"
        );
        assert_eq!(force_stops, 4, "every straggler gets force-stopped");
        assert!(seq.barrier.is_none(), "barrier never stalls permanently");
    }

    #[test]
    fn test_interaction_refused_while_barrier_pending() {
        let mut seq = FestivalSequencer::default();
        seq.on_interact();
        seq.on_interact();
        seq.resolve_choice(ChoiceAnswer::Yes);
        seq.begin_repositioning(&crowd(4), &rows(3));
        assert!(seq.busy());
        assert_eq!(seq.on_interact(), None);
    }

    // ── Show timeline ────────────────────────────────────────────────

    #[test]
    fn test_show_launches_exact_count_on_exact_ticks() {
        let mut seq = FestivalSequencer::default();
        seq.show_pending = true;
        seq.start_show();
        let mut r = rng();

        let mut launch_ticks = Vec::new();
        let mut finale_tick = None;
        for tick in 1..=SHOW_TAIL_TICKS + 10 {
            let effects = seq.on_tick(None, &mut r);
            for e in &effects {
                match e {
                    Effect::LaunchFirework { .. } => launch_ticks.push(tick),
                    Effect::ScheduleFestivalEnd { .. } => finale_tick = Some(tick),
                    _ => {}
                }
            }
            if !seq.show.active {
                break;
            }
        }

        assert_eq!(launch_ticks.len() as u32, FIREWORK_TOTAL);
        let expected: Vec<u32> = (1..=FIREWORK_TOTAL)
            .map(|k| k * FIREWORK_INTERVAL_TICKS)
            .collect();
        assert_eq!(launch_ticks, expected, "launches at 60, 120, …, 1200");
        assert_eq!(
            finale_tick,
            Some(SHOW_TAIL_TICKS + 1),
            "deactivation on the first tick past the tail, not before"
        );
        assert!(!seq.show.active);
    }

    #[test]
    fn test_show_finale_emits_dialogue_then_schedules_end() {
        let mut seq = FestivalSequencer::default();
        seq.show_pending = true;
        seq.start_show();
        let mut r = rng();

        let mut last = Vec::new();
        while seq.show.active {
            last = seq.on_tick(None, &mut r);
        }
        assert!(matches!(last[0], Effect::Dialogue { .. }));
        assert!(matches!(last[1], Effect::ScheduleFestivalEnd { .. }));
    }

    #[test]
    fn test_start_show_requires_pending() {
        let mut seq = FestivalSequencer::default();
        seq.start_show();
        assert!(!seq.show.active, "a stale scheduler callback is ignored");
    }

    #[test]
    fn test_launch_variants_cover_the_whole_set() {
        let mut r = rng();
        let mut patterns = std::collections::HashSet::new();
        let mut colors = std::collections::HashSet::new();

        // Many independent shows; uniform selection should cover every
        // variant with overwhelming probability.
        for _ in 0..40 {
            let mut seq = FestivalSequencer::default();
            seq.show_pending = true;
            seq.start_show();
            for _ in 0..=FIREWORK_TOTAL * FIREWORK_INTERVAL_TICKS {
                for e in seq.on_tick(None, &mut r) {
                    if let Effect::LaunchFirework { pattern, color } = e {
                        patterns.insert(pattern);
                        colors.insert(color);
                    }
                }
            }
        }

        assert_eq!(patterns.len(), ALL_BURST_PATTERNS.len());
        assert_eq!(colors.len(), ALL_FIREWORK_COLORS.len());
    }

    // ── Costume booth ────────────────────────────────────────────────

    #[test]
    fn test_booth_fires_once_per_entry_edge() {
        let mut seq = FestivalSequencer::default();
        let booth = Tile::new(35, 72);

        assert_eq!(
            seq.observe_player_tile(booth, booth),
            Some(Effect::BeginCostumeSwap)
        );
        // Same tile re-reported without leaving: no duplicate.
        seq.swap_finished();
        seq.costume_cooldown_ticks = 0;
        assert_eq!(seq.observe_player_tile(booth, booth), None);

        // Leave and re-enter: a fresh edge fires again.
        seq.observe_player_tile(Tile::new(35, 73), booth);
        assert_eq!(
            seq.observe_player_tile(booth, booth),
            Some(Effect::BeginCostumeSwap)
        );
    }

    #[test]
    fn test_booth_suppressed_during_cooldown() {
        let mut seq = FestivalSequencer::default();
        let booth = Tile::new(35, 72);

        seq.observe_player_tile(booth, booth);
        seq.swap_finished();
        assert_eq!(seq.costume_cooldown_ticks, COSTUME_COOLDOWN_TICKS);

        seq.observe_player_tile(Tile::new(35, 73), booth);
        assert_eq!(seq.observe_player_tile(booth, booth), None);

        // Run the cooldown out, then a fresh edge works again.
        let mut r = rng();
        for _ in 0..COSTUME_COOLDOWN_TICKS {
            seq.on_tick(None, &mut r);
        }
        assert_eq!(seq.costume_cooldown_ticks, 0);
        seq.observe_player_tile(Tile::new(35, 73), booth);
        assert_eq!(
            seq.observe_player_tile(booth, booth),
            Some(Effect::BeginCostumeSwap)
        );
    }

    #[test]
    fn test_booth_refused_while_show_running() {
        let mut seq = FestivalSequencer::default();
        start_show(&mut seq);
        let booth = Tile::new(35, 72);
        assert_eq!(seq.observe_player_tile(booth, booth), None);
    }

    #[test]
    fn test_interaction_refused_during_swap() {
        let mut seq = FestivalSequencer::default();
        let booth = Tile::new(35, 72);
        seq.observe_player_tile(booth, booth);
        assert!(seq.swap_in_progress);
        assert_eq!(seq.on_interact(), None);
    }

    // ── Day reset ────────────────────────────────────────────────────

    #[test]
    fn test_day_reset_mid_show() {
        let mut seq = FestivalSequencer::default();
        start_show(&mut seq);
        let mut r = rng();
        for _ in 0..100 {
            seq.on_tick(None, &mut r);
        }

        seq.reset_for_new_day();
        assert_eq!(seq.talk_stage, TalkStage::NotStarted);
        assert!(!seq.show.active);
        assert!(!seq.show_pending);
        assert!(seq.barrier.is_none());
        assert_eq!(seq.costume_cooldown_ticks, 0);
        assert!(!seq.swap_in_progress);
        assert!(!seq.choice_pending);
        assert_eq!(seq.last_player_tile, None);
    }

    #[test]
    fn test_day_reset_mid_barrier() {
        let mut seq = FestivalSequencer::default();
        seq.begin_repositioning(&crowd(4), &rows(3));
        seq.reset_for_new_day();
        assert!(seq.barrier.is_none());
        assert!(!seq.busy());
    }
}
