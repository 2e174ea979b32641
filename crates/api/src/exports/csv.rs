use std::collections::BTreeMap;

use infra::models::{MatrixEntryRow, PlayerRow};

use crate::error::AppError;
use crate::stats::{PlayerMinutes, PlayerTotals};

fn csv_err(e: impl std::fmt::Display) -> AppError {
    AppError::Internal(format!("csv encoding failed: {e}"))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, AppError> {
    writer.into_inner().map_err(csv_err)
}

/// One row per stored matrix entry: Player, Opponent, P{n}, Yes/No.
pub fn tournament_matrix(entries: &[MatrixEntryRow]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Player", "Opponent", "Period", "Played"])
        .map_err(csv_err)?;

    for entry in entries {
        let period = format!("P{}", entry.period);
        let played = if entry.played { "Yes" } else { "No" };
        writer
            .write_record([
                entry.player_name.as_str(),
                entry.opponent_name.as_str(),
                period.as_str(),
                played,
            ])
            .map_err(csv_err)?;
    }

    finish(writer)
}

/// Season minutes summary, one row per current player in roster order.
pub fn minutes_summary(
    players: &[PlayerRow],
    data: &BTreeMap<String, PlayerMinutes>,
) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Player", "Minutes Played", "Practice Minutes", "Total Minutes"])
        .map_err(csv_err)?;

    for player in players {
        let stats = data.get(&player.name).copied().unwrap_or_default();
        let played = stats.minutes_played.to_string();
        let practice = stats.practice_minutes.to_string();
        let total = (stats.minutes_played + stats.practice_minutes).to_string();
        writer
            .write_record([
                player.name.as_str(),
                played.as_str(),
                practice.as_str(),
                total.as_str(),
            ])
            .map_err(csv_err)?;
    }

    finish(writer)
}

/// Season totals summary, one row per current player in roster order.
pub fn totals_summary(
    players: &[PlayerRow],
    data: &BTreeMap<String, PlayerTotals>,
) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Player", "Games Played", "Practices Attended", "Total Activities"])
        .map_err(csv_err)?;

    for player in players {
        let totals = data.get(&player.name).copied().unwrap_or_default();
        let games = totals.games_played.to_string();
        let practices = totals.practices_attended.to_string();
        let total = (totals.games_played + totals.practices_attended).to_string();
        writer
            .write_record([
                player.name.as_str(),
                games.as_str(),
                practices.as_str(),
                total.as_str(),
            ])
            .map_err(csv_err)?;
    }

    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::{entry, player};
    use uuid::Uuid;

    fn rows(bytes: Vec<u8>) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes.as_slice());
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn matrix_csv_renders_periods_and_flags() {
        let tournament = Uuid::new_v4();
        let entries = vec![
            entry(tournament, "Ana", "Team X", 1, true),
            entry(tournament, "Bea", "Team X", 2, false),
        ];

        let rows = rows(tournament_matrix(&entries).unwrap());

        assert_eq!(rows[0], vec!["Player", "Opponent", "Period", "Played"]);
        assert_eq!(rows[1], vec!["Ana", "Team X", "P1", "Yes"]);
        assert_eq!(rows[2], vec!["Bea", "Team X", "P2", "No"]);
    }

    #[test]
    fn minutes_csv_totals_played_and_practice() {
        let players = vec![player("Ana"), player("Bea")];
        let mut data = BTreeMap::new();
        data.insert(
            "Ana".to_string(),
            PlayerMinutes {
                minutes_played: 12,
                practice_minutes: 60,
            },
        );

        let rows = rows(minutes_summary(&players, &data).unwrap());

        assert_eq!(rows[1], vec!["Ana", "12", "60", "72"]);
        // Players without any recorded activity still get a zero row.
        assert_eq!(rows[2], vec!["Bea", "0", "0", "0"]);
    }

    #[test]
    fn totals_csv_sums_activities() {
        let players = vec![player("Ana")];
        let mut data = BTreeMap::new();
        data.insert(
            "Ana".to_string(),
            PlayerTotals {
                games_played: 3,
                practices_attended: 5,
            },
        );

        let rows = rows(totals_summary(&players, &data).unwrap());

        assert_eq!(
            rows[0],
            vec!["Player", "Games Played", "Practices Attended", "Total Activities"]
        );
        assert_eq!(rows[1], vec!["Ana", "3", "5", "8"]);
    }

    #[test]
    fn names_with_commas_stay_one_field() {
        let tournament = Uuid::new_v4();
        let entries = vec![entry(tournament, "Silva, Ana", "Team X", 1, true)];

        let rows = rows(tournament_matrix(&entries).unwrap());

        assert_eq!(rows[1][0], "Silva, Ana");
    }
}
