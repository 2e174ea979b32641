use std::collections::HashMap;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use infra::models::{MatrixEntryRow, TournamentRow};

use crate::error::AppError;
use crate::stats;
use crate::stats::PERIODS;

// Landscape A4, all measurements in millimetres.
const PAGE_W: f32 = 297.0;
const PAGE_H: f32 = 210.0;
const MARGIN: f32 = 12.0;
const PLAYER_COL_W: f32 = 40.0;
const PERIOD_COL_W: f32 = 9.0;
const CELL_H: f32 = 5.5;
const BOTTOM_LIMIT: f32 = 15.0;

/// Sheet data extracted ahead of drawing: one row per roster player with the
/// minutes label and a played flag per (opponent, period) column.
#[derive(Debug, PartialEq)]
pub(crate) struct SheetRow {
    pub label: String,
    pub cells: Vec<bool>,
}

pub(crate) fn sheet_rows(tournament: &TournamentRow, entries: &[MatrixEntryRow]) -> Vec<SheetRow> {
    let lookup: HashMap<(&str, &str, i32), bool> = entries
        .iter()
        .map(|e| {
            (
                (e.player_name.as_str(), e.opponent_name.as_str(), e.period),
                e.played,
            )
        })
        .collect();
    let minutes = stats::sheet_minutes(entries);

    tournament
        .roster
        .iter()
        .map(|player| {
            let cells = tournament
                .opponents
                .iter()
                .flat_map(|opponent| {
                    PERIODS.iter().map(|period| {
                        lookup
                            .get(&(player.as_str(), opponent.as_str(), *period))
                            .copied()
                            .unwrap_or(false)
                    })
                })
                .collect();
            SheetRow {
                label: format!(
                    "{player} ({} min)",
                    minutes.get(player).copied().unwrap_or(0)
                ),
                cells,
            }
        })
        .collect()
}

fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ],
        is_closed: true,
    };
    layer.add_line(line);
}

fn column_headers(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    opponents: &[String],
    top_y: f32,
) {
    for (i, opponent) in opponents.iter().enumerate() {
        let base_x = MARGIN + PLAYER_COL_W + (i as f32 * PERIODS.len() as f32 * PERIOD_COL_W);
        layer.use_text(opponent.clone(), 8.0, Mm(base_x), Mm(top_y), bold);
        for (p, period) in PERIODS.iter().enumerate() {
            let px = base_x + p as f32 * PERIOD_COL_W;
            layer.use_text(format!("P{period}"), 7.0, Mm(px + 1.5), Mm(top_y - 4.5), bold);
        }
    }
}

/// Printable tournament sheet: header block, opponent/period columns, one
/// grid row per roster player with X marks for played cells. Starts a new
/// page when the cursor nears the bottom edge.
fn pdf_err(e: impl std::fmt::Display) -> AppError {
    AppError::Internal(format!("pdf rendering failed: {e}"))
}

pub fn tournament_sheet(
    tournament: &TournamentRow,
    entries: &[MatrixEntryRow],
) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("{} - Tournament Sheet", tournament.team_name),
        Mm(PAGE_W),
        Mm(PAGE_H),
        "sheet",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;
    let oblique = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(pdf_err)?;

    let mut current = doc.get_page(page).get_layer(layer);

    let title_y = PAGE_H - MARGIN - 5.0;
    current.use_text(
        format!("{} - Tournament Sheet", tournament.team_name),
        13.0,
        Mm(MARGIN),
        Mm(title_y),
        &bold,
    );
    current.use_text(
        format!("Date: {}     Place: {}", tournament.date, tournament.place),
        10.0,
        Mm(MARGIN),
        Mm(title_y - 7.0),
        &font,
    );
    if let Some(notes) = tournament.coach_notes.as_deref() {
        if !notes.is_empty() {
            let trimmed: String = notes.chars().take(120).collect();
            current.use_text(
                format!("Coach Notes: {trimmed}"),
                9.0,
                Mm(MARGIN),
                Mm(title_y - 13.0),
                &oblique,
            );
        }
    }

    let table_top = title_y - 20.0;
    column_headers(&current, &bold, &tournament.opponents, table_top);

    let rows = sheet_rows(tournament, entries);
    let mut y = table_top - 10.0;

    for row in rows {
        current.use_text(row.label.clone(), 7.0, Mm(MARGIN), Mm(y + 1.5), &font);
        let mut x = MARGIN + PLAYER_COL_W;
        for played in row.cells {
            stroke_rect(&current, x, y, PERIOD_COL_W, CELL_H);
            if played {
                current.use_text("X", 7.0, Mm(x + 3.5), Mm(y + 1.5), &font);
            }
            x += PERIOD_COL_W;
        }
        y -= CELL_H;

        if y < BOTTOM_LIMIT {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "sheet");
            current = doc.get_page(next_page).get_layer(next_layer);
            let continued_top = PAGE_H - MARGIN - 10.0;
            column_headers(&current, &bold, &tournament.opponents, continued_top);
            y = continued_top - 10.0;
        }
    }

    doc.save_to_bytes().map_err(pdf_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn tournament(roster: &[&str], opponents: &[&str]) -> TournamentRow {
        let now = Utc::now();
        TournamentRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            season_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            place: "Sports hall".to_string(),
            team_name: "Eagles U10".to_string(),
            roster: roster.iter().map(|s| s.to_string()).collect(),
            opponents: opponents.iter().map(|s| s.to_string()).collect(),
            coach_notes: Some("bring cones".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    fn entry(t: &TournamentRow, player: &str, opponent: &str, period: i32) -> MatrixEntryRow {
        let now = Utc::now();
        MatrixEntryRow {
            id: Uuid::new_v4(),
            tournament_id: t.id,
            player_name: player.to_string(),
            opponent_name: opponent.to_string(),
            period,
            played: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn rows_carry_minutes_labels_and_cell_flags() {
        let t = tournament(&["Ana", "Bea"], &["Team X", "Team Y"]);
        let entries = vec![
            entry(&t, "Ana", "Team X", 1),
            entry(&t, "Ana", "Team X", 2),
            entry(&t, "Ana", "Team Y", 4),
        ];

        let rows = sheet_rows(&t, &entries);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Ana (18 min)");
        // Columns are opponent-major: X P1..P4, then Y P1..P4.
        assert_eq!(
            rows[0].cells,
            vec![true, true, false, false, false, false, false, true]
        );
        assert_eq!(rows[1].label, "Bea (0 min)");
        assert!(rows[1].cells.iter().all(|c| !c));
    }

    #[test]
    fn missing_cells_default_to_not_played() {
        let t = tournament(&["Ana"], &["Team X"]);

        let rows = sheet_rows(&t, &[]);

        assert_eq!(rows[0].cells.len(), 4);
        assert!(rows[0].cells.iter().all(|c| !c));
    }

    #[test]
    fn sheet_renders_to_pdf_bytes() {
        let t = tournament(&["Ana", "Bea"], &["Team X"]);
        let entries = vec![entry(&t, "Ana", "Team X", 1)];

        let bytes = tournament_sheet(&t, &entries).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_rosters_paginate_without_panicking() {
        let names: Vec<String> = (0..60).map(|i| format!("Player {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let t = tournament(&refs, &["Team X"]);

        let bytes = tournament_sheet(&t, &[]).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
