use chrono::NaiveDate;
use serde::Serialize;

/// One scraped stat cell: the source's `data-stat` key and its raw text.
///
/// Values keep the source formatting (shooting percentages stay decimal
/// strings, minutes stay `MM:SS`). An empty value means the source omitted
/// the column for this row, e.g. no percentage after zero attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub key: String,
    pub value: String,
}

impl Stat {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One player's line for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    /// 3-letter code of the player's team.
    pub team: String,
    pub player: String,
    pub is_home: bool,
    pub is_starter: bool,
    /// False for "Did Not Play" / "Not With Team" rows, which carry identity
    /// fields only.
    pub played: bool,
    pub stats: Vec<Stat>,
}

impl PlayerRow {
    /// Column names for this row, identity fields first, `game_date` last.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![
            "team".to_string(),
            "player_name".to_string(),
            "home_team_ind".to_string(),
            "starter_ind".to_string(),
            "played_ind".to_string(),
        ];
        columns.extend(self.stats.iter().map(|s| s.key.clone()));
        columns.push("game_date".to_string());
        columns
    }

    /// Values in the same order as [`PlayerRow::columns`].
    pub fn values(&self, game_date: NaiveDate) -> Vec<String> {
        let mut values = vec![
            self.team.clone(),
            self.player.clone(),
            self.is_home.to_string(),
            self.is_starter.to_string(),
            self.played.to_string(),
        ];
        values.extend(self.stats.iter().map(|s| s.value.clone()));
        values.push(game_date.to_string());
        values
    }
}
