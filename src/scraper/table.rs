use ::scraper::{ElementRef, Html, Selector};
use itertools::Itertools;

use crate::error::{Result, ScrapeError};
use crate::model::{Side, StatCategory};

/// Character offset of the 3-letter team code inside a box-score table id,
/// e.g. `box-BOS-game-basic`.
const TEAM_CODE_OFFSET: usize = 4;

/// A located box-score table for one side and one stat category.
///
/// Ephemeral: borrows the document and only lives while one game is being
/// extracted.
#[derive(Debug)]
pub(crate) struct BoxscoreTable<'a> {
    pub(crate) element: ElementRef<'a>,
    pub(crate) side: Side,
    /// 3-letter team code sliced out of the table id.
    pub(crate) team_code: String,
}

/// Find the box-score table for `side` and `category`.
///
/// The page lists the away team's table before the home team's, so `side`
/// picks the first or second id match. Fewer than 2 matches is
/// [`ScrapeError::TableNotFound`].
pub(crate) fn locate(document: &Html, category: StatCategory, side: Side) -> Result<BoxscoreTable> {
    let selector = Selector::parse(&format!("table[id$='{}']", category.id_suffix()))?;
    let tables = document.select(&selector).collect_vec();
    if tables.len() < 2 {
        return Err(ScrapeError::TableNotFound {
            category,
            found: tables.len(),
        });
    }

    let element = match side {
        Side::Away => tables[0],
        Side::Home => tables[1],
    };
    let id = element.value().id().unwrap_or_default();
    let team_code = id
        .get(TEAM_CODE_OFFSET..TEAM_CODE_OFFSET + 3)
        .unwrap_or_default()
        .to_string();

    Ok(BoxscoreTable {
        element,
        side,
        team_code,
    })
}

impl BoxscoreTable<'_> {
    /// The `data-stat` keys of the table's stat columns, in column order.
    ///
    /// Read from the last header row (the first spans the whole table); the
    /// leading player-name column is not a stat and is skipped.
    pub(crate) fn stat_columns(&self) -> Result<Vec<String>> {
        let header_row_selector = Selector::parse("thead tr")?;
        let cell_selector = Selector::parse("th")?;
        let header_row = self
            .element
            .select(&header_row_selector)
            .last()
            .ok_or(ScrapeError::ElementNotFound {
                context: "box-score table header row",
            })?;
        Ok(header_row
            .select(&cell_selector)
            .filter_map(|cell| cell.value().attr("data-stat"))
            .skip(1)
            .map(|key| key.to_string())
            .collect())
    }
}
