use ::scraper::{Html, Selector};
use itertools::Itertools;
use tracing::warn;

use crate::error::Result;
use crate::model::GameReference;

/// Parse a schedule-index page into the day's game references.
///
/// Returns the number of schedule entries on the page alongside the parsed
/// references; an entry without a usable link is counted but skipped.
pub(crate) fn parse_schedule(document: &Html) -> Result<(usize, Vec<GameReference>)> {
    let entry_selector = Selector::parse("td.right.gamelink")?;
    let link_selector = Selector::parse("a")?;

    let entries = document.select(&entry_selector).collect_vec();
    let count = entries.len();

    let mut games = Vec::new();
    for entry in entries {
        let Some(href) = entry
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            warn!("schedule entry without a game link");
            continue;
        };
        games.push(GameReference::from_path(href)?);
    }
    Ok((count, games))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::tests::sample_schedule_document;
    use chrono::NaiveDate;

    #[test]
    fn collects_one_reference_per_gamelink() {
        let document = Html::parse_document(&sample_schedule_document(&[
            "/boxscores/202102010BOS.html",
            "/boxscores/202102010LAL.html",
        ]));

        let (count, games) = parse_schedule(&document).unwrap();
        assert_eq!(count, 2);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].home_code, "BOS");
        assert_eq!(games[1].home_code, "LAL");
        assert_eq!(
            games[0].date,
            NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()
        );
    }

    #[test]
    fn a_day_without_games_yields_an_empty_schedule() {
        let document = Html::parse_document("<html><body><table></table></body></html>");
        let (count, games) = parse_schedule(&document).unwrap();
        assert_eq!(count, 0);
        assert!(games.is_empty());
    }

    #[test]
    fn linkless_entries_are_counted_but_skipped() {
        let html = "<html><body><table><tr>\
                    <td class='right gamelink'><a href='/boxscores/202102010BOS.html'>Final</a></td>\
                    <td class='right gamelink'></td>\
                    </tr></table></body></html>";
        let document = Html::parse_document(html);
        let (count, games) = parse_schedule(&document).unwrap();
        assert_eq!(count, 2);
        assert_eq!(games.len(), 1);
    }
}
