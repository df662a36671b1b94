//! Calendar domain — the day cycle driving festival-date gating.
//!
//! Responsible for:
//! - Advancing the date when a DayEndEvent arrives
//! - Emitting DayStartEvent so every domain can reset per-day state
//!
//! The Calendar resource itself lives in `shared` so other domains can
//! gate on the festival date without importing this module.

use bevy::prelude::*;

use crate::shared::*;

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), announce_first_day)
            .add_systems(
                Update,
                process_day_end.run_if(in_state(GameState::Playing)),
            );
    }
}

/// The first DayStartEvent of the session, emitted once the data layer
/// has finished loading and we enter Playing.
fn announce_first_day(calendar: Res<Calendar>, mut day_start: EventWriter<DayStartEvent>) {
    info!(
        "[Calendar] Day {} {:?} Year {} begins{}",
        calendar.day,
        calendar.season,
        calendar.year,
        if calendar.is_festival_day() {
            " — Lantern Festival!"
        } else {
            ""
        }
    );
    day_start.send(DayStartEvent {
        day: calendar.day,
        season: calendar.season,
        year: calendar.year,
    });
}

/// Reads DayEndEvent, advances the calendar, and emits DayStartEvent for
/// the new day.
fn process_day_end(
    mut day_end: EventReader<DayEndEvent>,
    mut day_start: EventWriter<DayStartEvent>,
    mut calendar: ResMut<Calendar>,
) {
    for event in day_end.read() {
        info!(
            "[Calendar] Day ended — Day {} {:?} Year {}",
            event.day, event.season, event.year
        );

        calendar.advance_day();

        info!(
            "[Calendar] New day: Day {} {:?} Year {}",
            calendar.day, calendar.season, calendar.year
        );

        day_start.send(DayStartEvent {
            day: calendar.day,
            season: calendar.season,
            year: calendar.year,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_festival_date() {
        let mut cal = Calendar::default();
        assert!(!cal.is_festival_day());

        cal.day = 15;
        assert!(cal.is_festival_day());

        cal.season = Season::Winter;
        assert!(!cal.is_festival_day(), "festival only falls in Spring");
    }

    #[test]
    fn test_advance_day_within_season() {
        let mut cal = Calendar::default();
        cal.day = 14;
        cal.advance_day();
        assert_eq!(cal.day, 15);
        assert_eq!(cal.season, Season::Spring);
        assert!(cal.is_festival_day());
    }

    #[test]
    fn test_season_rollover_at_day_28() {
        let mut cal = Calendar::default();
        cal.day = 28;
        cal.advance_day();
        assert_eq!(cal.day, 1);
        assert_eq!(cal.season, Season::Summer);
    }

    #[test]
    fn test_year_increment_after_winter() {
        let mut cal = Calendar {
            year: 1,
            season: Season::Winter,
            day: 28,
        };
        cal.advance_day();
        assert_eq!(cal.day, 1);
        assert_eq!(cal.season, Season::Spring);
        assert_eq!(cal.year, 2);
    }
}
