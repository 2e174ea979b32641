pub mod attendance;

use std::collections::{BTreeMap, HashMap, HashSet};

use infra::models::{MatrixEntryRow, PlayerRow, PracticeSessionRow};
use uuid::Uuid;

/// Four fixed periods per opponent, six minutes of play each by convention.
pub const PERIODS: [i32; 4] = [1, 2, 3, 4];
pub const MINUTES_PER_PERIOD: i64 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerMinutes {
    pub minutes_played: i64,
    pub practice_minutes: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerTotals {
    pub games_played: i64,
    pub practices_attended: i64,
}

/// Minutes played (6 per played period) and practice minutes per player.
///
/// Every current player appears, zeros included; names that only exist in
/// historical tournament snapshots are kept too. Pure over the given rows —
/// recomputed on every call, never cached.
pub fn minutes_and_practice(
    players: &[PlayerRow],
    entries: &[MatrixEntryRow],
    sessions: &[PracticeSessionRow],
) -> BTreeMap<String, PlayerMinutes> {
    let mut data: BTreeMap<String, PlayerMinutes> = players
        .iter()
        .map(|p| (p.name.clone(), PlayerMinutes::default()))
        .collect();

    for entry in entries {
        if !entry.played {
            continue;
        }
        data.entry(entry.player_name.clone()).or_default().minutes_played += MINUTES_PER_PERIOD;
    }

    for session in sessions {
        let duration = i64::from(session.duration_minutes);
        for attendee in &session.attendees {
            data.entry(attendee.clone()).or_default().practice_minutes += duration;
        }
    }

    data
}

/// Games played and practices attended per player.
///
/// A game is a (tournament, opponent) pair with at least one played period:
/// multiple periods of the same match count once.
pub fn games_and_practices(
    players: &[PlayerRow],
    entries: &[MatrixEntryRow],
    sessions: &[PracticeSessionRow],
) -> BTreeMap<String, PlayerTotals> {
    let mut data: BTreeMap<String, PlayerTotals> = players
        .iter()
        .map(|p| (p.name.clone(), PlayerTotals::default()))
        .collect();

    let mut seen_games: HashSet<(&str, Uuid, &str)> = HashSet::new();
    for entry in entries {
        if !entry.played {
            continue;
        }
        let key = (
            entry.player_name.as_str(),
            entry.tournament_id,
            entry.opponent_name.as_str(),
        );
        if seen_games.insert(key) {
            data.entry(entry.player_name.clone()).or_default().games_played += 1;
        }
    }

    for session in sessions {
        for attendee in &session.attendees {
            data.entry(attendee.clone()).or_default().practices_attended += 1;
        }
    }

    data
}

/// Per-player minutes within a single tournament, for the sheet row labels.
pub fn sheet_minutes(entries: &[MatrixEntryRow]) -> HashMap<String, i64> {
    let mut minutes: HashMap<String, i64> = HashMap::new();
    for entry in entries {
        if entry.played {
            *minutes.entry(entry.player_name.clone()).or_insert(0) += MINUTES_PER_PERIOD;
        }
    }
    minutes
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, Utc};
    use infra::models::{MatrixEntryRow, PlayerRow, PracticeSessionRow};
    use uuid::Uuid;

    pub fn player(name: &str) -> PlayerRow {
        let now = Utc::now();
        PlayerRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            season_id: Uuid::new_v4(),
            name: name.to_string(),
            alias: None,
            age_group: "U10".to_string(),
            membership_number: "0".to_string(),
            dob: None,
            mobile_phone: None,
            email: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn entry(
        tournament_id: Uuid,
        player: &str,
        opponent: &str,
        period: i32,
        played: bool,
    ) -> MatrixEntryRow {
        let now = Utc::now();
        MatrixEntryRow {
            id: Uuid::new_v4(),
            tournament_id,
            player_name: player.to_string(),
            opponent_name: opponent.to_string(),
            period,
            played,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn session(date: NaiveDate, attendees: &[&str], duration_minutes: i32) -> PracticeSessionRow {
        let now = Utc::now();
        PracticeSessionRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            season_id: Uuid::new_v4(),
            date,
            attendees: attendees.iter().map(|s| s.to_string()).collect(),
            exercise_ids: Vec::new(),
            coach_notes: None,
            duration_minutes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{entry, player, session};
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn minutes_scenario_two_periods_for_one_player() {
        let players = vec![player("Ana"), player("Bea")];
        let tournament = Uuid::new_v4();
        let entries = vec![
            entry(tournament, "Ana", "Team X", 1, true),
            entry(tournament, "Ana", "Team X", 2, true),
        ];

        let data = minutes_and_practice(&players, &entries, &[]);

        assert_eq!(data["Ana"].minutes_played, 12);
        assert_eq!(data["Bea"].minutes_played, 0);
    }

    #[test]
    fn played_false_entries_add_nothing() {
        let players = vec![player("Ana")];
        let tournament = Uuid::new_v4();
        let entries = vec![entry(tournament, "Ana", "Team X", 1, false)];

        let data = minutes_and_practice(&players, &entries, &[]);

        assert_eq!(data["Ana"].minutes_played, 0);
    }

    #[test]
    fn practice_minutes_sum_per_attendee() {
        let players = vec![player("Ana"), player("Bea"), player("Cai")];
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let sessions = vec![
            session(date, &["Ana", "Bea"], 60),
            session(date.succ_opt().unwrap(), &["Ana"], 45),
        ];

        let data = minutes_and_practice(&players, &[], &sessions);

        assert_eq!(data["Ana"].practice_minutes, 105);
        assert_eq!(data["Bea"].practice_minutes, 60);
        assert_eq!(data["Cai"].practice_minutes, 0);
    }

    #[test]
    fn games_deduplicate_periods_of_the_same_match() {
        let players = vec![player("Ana"), player("Bea")];
        let tournament = Uuid::new_v4();
        let entries = vec![
            entry(tournament, "Ana", "Team X", 1, true),
            entry(tournament, "Ana", "Team X", 2, true),
        ];

        let data = games_and_practices(&players, &entries, &[]);

        assert_eq!(data["Ana"].games_played, 1);
        assert_eq!(data["Bea"].games_played, 0);
    }

    #[test]
    fn games_count_distinct_opponents_and_tournaments() {
        let players = vec![player("Ana")];
        let t1 = Uuid::new_v4();
        let t2 = Uuid::new_v4();
        let entries = vec![
            entry(t1, "Ana", "Team X", 1, true),
            entry(t1, "Ana", "Team Y", 3, true),
            entry(t2, "Ana", "Team X", 2, true),
        ];

        let data = games_and_practices(&players, &entries, &[]);

        assert_eq!(data["Ana"].games_played, 3);
    }

    #[test]
    fn practices_attended_counts_sessions() {
        let players = vec![player("Ana"), player("Bea")];
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let sessions = vec![
            session(date, &["Ana", "Bea"], 60),
            session(date.succ_opt().unwrap(), &["Ana"], 60),
        ];

        let data = games_and_practices(&players, &[], &sessions);

        assert_eq!(data["Ana"].practices_attended, 2);
        assert_eq!(data["Bea"].practices_attended, 1);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let players = vec![player("Ana"), player("Bea")];
        let tournament = Uuid::new_v4();
        let entries = vec![
            entry(tournament, "Ana", "Team X", 1, true),
            entry(tournament, "Bea", "Team X", 1, true),
        ];
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let sessions = vec![session(date, &["Ana"], 30)];

        let first = minutes_and_practice(&players, &entries, &sessions);
        let second = minutes_and_practice(&players, &entries, &sessions);

        assert_eq!(first, second);
    }

    #[test]
    fn historical_names_survive_without_a_player_row() {
        // Snapshot rosters can reference players deleted since.
        let tournament = Uuid::new_v4();
        let entries = vec![entry(tournament, "Old Player", "Team X", 1, true)];

        let data = minutes_and_practice(&[], &entries, &[]);

        assert_eq!(data["Old Player"].minutes_played, 6);
    }

    #[test]
    fn sheet_minutes_per_tournament() {
        let tournament = Uuid::new_v4();
        let entries = vec![
            entry(tournament, "Ana", "Team X", 1, true),
            entry(tournament, "Ana", "Team X", 2, true),
            entry(tournament, "Ana", "Team Y", 1, true),
            entry(tournament, "Bea", "Team X", 1, false),
        ];

        let minutes = sheet_minutes(&entries);

        assert_eq!(minutes.get("Ana"), Some(&18));
        assert_eq!(minutes.get("Bea"), None);
    }
}
