pub(crate) mod boxscore;
pub(crate) mod repair;
pub(crate) mod rows;
pub(crate) mod schedule;
pub(crate) mod table;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Fetch a URL and parse the response body as an HTML document.
///
/// 429 maps to [`ScrapeError::RateLimited`] so the caller can pause and
/// retry; every other non-success status is [`ScrapeError::Fetch`]. No retry
/// happens at this level.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| ScrapeError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ScrapeError::RateLimited {
            url: url.to_owned(),
        });
    }
    if !status.is_success() {
        return Err(ScrapeError::Fetch {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| ScrapeError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|d| d.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
        .to_string()
}

/// Concatenated, trimmed text of an element itself.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Synthetic page fixtures shared by the parsing tests.
#[cfg(test)]
pub(crate) mod tests {
    use std::fmt::Write;

    const STAT_KEYS: &[&str] = &[
        "mp", "fg", "fga", "fg_pct", "fg3", "fg3a", "fg3_pct", "ft", "fta", "ft_pct", "orb",
        "drb", "trb", "ast", "stl", "blk", "tov", "pf", "pts", "plus_minus",
    ];

    const STANDARD_LINE: &[&str] = &[
        "30:00", "5", "10", ".500", "1", "2", ".500", "2", "2", "1.000", "1", "4", "5", "3", "1",
        "0", "2", "3", "13", "+5",
    ];

    /// A bench line without `data-stat` attributes: zero field-goal and
    /// three-point attempts, so the percentage cells are omitted entirely.
    const POSITIONAL_LINE: &[&str] = &[
        "5:01", "0", "0", "0", "0", "1", "2", ".500", "0", "2", "2", "0", "0", "0", "1", "1", "1",
        "-3",
    ];

    fn keyed_row(name: &str, values: &[&str]) -> String {
        let mut row = format!("<tr><th data-stat=\"player\">{name}</th>");
        for (key, value) in STAT_KEYS.iter().zip(values) {
            let _ = write!(row, "<td data-stat=\"{key}\">{value}</td>");
        }
        row.push_str("</tr>");
        row
    }

    fn positional_row(name: &str, values: &[&str]) -> String {
        let mut row = format!("<tr><th data-stat=\"player\">{name}</th>");
        for value in values {
            let _ = write!(row, "<td>{value}</td>");
        }
        row.push_str("</tr>");
        row
    }

    fn absent_row(name: &str, reason: &str) -> String {
        format!(
            "<tr><th data-stat=\"player\">{name}</th>\
             <td data-stat=\"reason\" colspan=\"20\">{reason}</td></tr>"
        )
    }

    fn header() -> String {
        let mut row = "<tr><th data-stat=\"player\">Starters</th>".to_string();
        for key in STAT_KEYS {
            let _ = write!(row, "<th data-stat=\"{key}\">{}</th>", key.to_uppercase());
        }
        row.push_str("</tr>");
        format!("<thead><tr><th colspan=\"21\">Basic Box Score Stats</th></tr>{row}</thead>")
    }

    fn boxscore_table(code: &str, bench: &str) -> String {
        let starters: String = (1..=5)
            .map(|i| keyed_row(&format!("{code} Starter {i}"), STANDARD_LINE))
            .collect();
        format!(
            "<table id=\"box-{code}-game-basic\">{}\
             <tbody>{starters}\
             <tr class=\"thead\"><th colspan=\"21\">Reserves</th></tr>\
             {bench}</tbody>\
             <tfoot>{}</tfoot></table>",
            header(),
            keyed_row("Team Totals", STANDARD_LINE),
        )
    }

    fn line_score_table() -> String {
        "<table id=\"line_score\">\
         <thead><tr><th></th><th>1</th><th>2</th><th>3</th><th>4</th><th>T</th></tr></thead>\
         <tbody>\
         <tr><th>MIA</th><td>20</td><td>30</td><td>24</td><td>24</td><td>98</td></tr>\
         <tr><th>BOS</th><td>25</td><td>30</td><td>28</td><td>27</td><td>110</td></tr>\
         </tbody></table>"
            .to_string()
    }

    /// One full game page: line score, away (MIA) basic table, home (BOS)
    /// basic table. Home bench: 2 played, 1 DNP, 1 not-with-team; away
    /// bench: 1 positional row, 1 keyed row.
    pub(crate) fn sample_game_document() -> String {
        let away_bench = format!(
            "{}{}",
            positional_row("MIA Bench 1", POSITIONAL_LINE),
            keyed_row("MIA Bench 2", STANDARD_LINE),
        );
        let home_bench = format!(
            "{}{}{}{}",
            keyed_row("BOS Bench 1", STANDARD_LINE),
            keyed_row("BOS Bench 2", STANDARD_LINE),
            absent_row("BOS Bench 3", "Did Not Play"),
            absent_row("BOS Bench 4", "Not With Team"),
        );
        format!(
            "<html><body>{}{}{}</body></html>",
            line_score_table(),
            boxscore_table("MIA", &away_bench),
            boxscore_table("BOS", &home_bench),
        )
    }

    /// A schedule-index page with one gamelink entry per path.
    pub(crate) fn sample_schedule_document(paths: &[&str]) -> String {
        let entries: String = paths
            .iter()
            .map(|path| {
                format!("<td class=\"right gamelink\"><a href=\"{path}\">Final</a></td>")
            })
            .collect();
        format!("<html><body><table><tr>{entries}</tr></table></body></html>")
    }
}
