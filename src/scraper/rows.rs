use ::scraper::{ElementRef, Html, Selector};
use itertools::Itertools;

use crate::config::TeamDirectory;
use crate::error::{Result, ScrapeError};
use crate::model::{LineScore, PlayerRow, Stat, TeamRow};
use crate::scraper::table::BoxscoreTable;
use crate::scraper::{element_text, repair, select_text};

/// A lineup has exactly 5 starters.
pub(crate) const STARTER_ROWS: usize = 5;
/// Starter `i` (1-based) sits at table row `i + 1`, after the header rows.
const STARTER_OFFSET: usize = 1;
/// Bench player `i` (1-based) sits at row `i + 7`: two header rows, five
/// starters, and the mid-table reserves separator come first.
const BENCH_OFFSET: usize = 7;

const TEAM_TOTALS_LABEL: &str = "Team Totals";
/// First-cell texts marking a roster row without stats.
const ABSENT_LABELS: &[&str] = &["Did Not Play", "Not With Team"];

/// Extract one player's row from a located table.
///
/// `index` is 1-based within its class (starter or bench). Returns `Ok(None)`
/// for the two benign end-of-roster conditions: the row index runs past the
/// table, or the row is the team-totals aggregate. A starter index past 5 is
/// a page-structure violation and fails instead.
pub(crate) fn extract_player_row(
    table: &BoxscoreTable,
    index: usize,
    starter: bool,
) -> Result<Option<PlayerRow>> {
    let row_index = if starter {
        if index > STARTER_ROWS {
            return Err(ScrapeError::InvalidStarterIndex { index });
        }
        index + STARTER_OFFSET
    } else {
        index + BENCH_OFFSET
    };

    let row_selector = Selector::parse("tr")?;
    let Some(row) = table.element.select(&row_selector).nth(row_index) else {
        return Ok(None);
    };

    let name_selector = Selector::parse("th")?;
    let player = select_text(&row, &name_selector);
    if player == TEAM_TOTALS_LABEL {
        return Ok(None);
    }

    let cell_selector = Selector::parse("td")?;
    let cells = row.select(&cell_selector).collect_vec();
    let first_cell = cells.first().map(element_text).unwrap_or_default();
    let played = !ABSENT_LABELS.contains(&first_cell.as_str());

    let stats = if played { harvest(table, &cells)? } else { vec![] };

    Ok(Some(PlayerRow {
        team: table.team_code.clone(),
        player,
        is_home: table.side.is_home(),
        is_starter: starter,
        played,
        stats,
    }))
}

/// Read a row's stat cells into keyed values.
///
/// Cells normally declare their stat key in a `data-stat` attribute. Rows
/// without declared keys are read as a positional token stream and aligned
/// against the header, repairing columns the source omitted.
fn harvest(table: &BoxscoreTable, cells: &[ElementRef]) -> Result<Vec<Stat>> {
    if cells.iter().all(|c| c.value().attr("data-stat").is_some()) {
        return Ok(cells
            .iter()
            .map(|c| {
                Stat::new(
                    c.value().attr("data-stat").unwrap_or_default(),
                    element_text(c),
                )
            })
            .collect());
    }

    let columns = table.stat_columns()?;
    let tokens = cells.iter().map(element_text).collect_vec();
    let tokens = repair::align_tokens(&columns, tokens);
    Ok(columns
        .into_iter()
        .zip(tokens)
        .map(|(key, value)| Stat::new(key, value))
        .collect())
}

/// Extract the aggregate team-totals row, always the last row of the table.
pub(crate) fn extract_team_row(table: &BoxscoreTable, teams: &TeamDirectory) -> Result<TeamRow> {
    let row_selector = Selector::parse("tr")?;
    let totals = table
        .element
        .select(&row_selector)
        .last()
        .ok_or(ScrapeError::ElementNotFound {
            context: "team totals row",
        })?;

    let cell_selector = Selector::parse("td")?;
    let stats = totals
        .select(&cell_selector)
        .map(|c| {
            Stat::new(
                c.value().attr("data-stat").unwrap_or_default(),
                element_text(&c),
            )
        })
        .collect();

    Ok(TeamRow {
        team: table.team_code.clone(),
        team_name: teams
            .full_name(&table.team_code)
            .unwrap_or_default()
            .to_string(),
        is_home: table.side.is_home(),
        line_score: None,
        stats,
    })
}

/// Read the per-period scoring breakdown, away team first.
///
/// The line-score table is served inside an HTML comment on some page
/// variants and is then invisible to the parser; its absence is not an
/// error, the breakdown is simply omitted.
pub(crate) fn extract_line_score(document: &Html) -> Result<Option<(LineScore, LineScore)>> {
    let table_selector = Selector::parse("table#line_score")?;
    let Some(table) = document.select(&table_selector).next() else {
        return Ok(None);
    };

    let row_selector = Selector::parse("tbody tr")?;
    let cell_selector = Selector::parse("td")?;
    let scores = table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(|c| element_text(&c)).collect_vec())
        .collect_vec();

    let Some([away, home]) = scores.last_chunk::<2>() else {
        return Ok(None);
    };
    Ok(LineScore::from_scores(away).zip(LineScore::from_scores(home)))
}
