use ::scraper::Html;
use tracing::debug;

use crate::config::TeamDirectory;
use crate::error::{Result, ScrapeError};
use crate::model::{PlayerRow, Side, Stat, StatCategory, TeamRow};
use crate::scraper::rows::{self, STARTER_ROWS};
use crate::scraper::table;

/// Extract every player row of one game, home side first.
///
/// Each side contributes its 5 starters followed by the bench in table
/// order; enumeration stops at the team-totals row. Rows with fewer
/// populated fields than the first starter (did-not-play rows) are padded
/// with empty values so every row carries the same column set.
pub(crate) fn assemble_player_boxscore(
    document: &Html,
    category: StatCategory,
) -> Result<Vec<PlayerRow>> {
    let mut assembled = Vec::new();

    for side in [Side::Home, Side::Away] {
        let table = table::locate(document, category, side)?;

        for index in 1..=STARTER_ROWS {
            let starter = rows::extract_player_row(&table, index, true)?.ok_or(
                ScrapeError::ElementNotFound {
                    context: "starter row",
                },
            )?;
            assembled.push(starter);
        }

        for index in 1.. {
            match rows::extract_player_row(&table, index, false)? {
                Some(row) => assembled.push(row),
                None => break,
            }
        }
    }

    let reference: Vec<String> = assembled
        .first()
        .map(|row| row.stats.iter().map(|s| s.key.clone()).collect())
        .unwrap_or_default();
    for row in &mut assembled {
        for key in reference.iter().skip(row.stats.len()) {
            row.stats.push(Stat::new(key.clone(), ""));
        }
    }

    debug!(players = assembled.len(), %category, "assembled player boxscore");
    Ok(assembled)
}

/// Extract both teams' aggregate rows for one game, home row first, with the
/// per-period scoring breakdown attached when the page exposes it.
pub(crate) fn assemble_team_boxscore(
    document: &Html,
    category: StatCategory,
    teams: &TeamDirectory,
) -> Result<Vec<TeamRow>> {
    let (away_line, home_line) = match rows::extract_line_score(document)? {
        Some((away, home)) => (Some(away), Some(home)),
        None => (None, None),
    };

    let home_table = table::locate(document, category, Side::Home)?;
    let mut home = rows::extract_team_row(&home_table, teams)?;
    home.line_score = home_line;

    let away_table = table::locate(document, category, Side::Away)?;
    let mut away = rows::extract_team_row(&away_table, teams)?;
    away.line_score = away_line;

    Ok(vec![home, away])
}
