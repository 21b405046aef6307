use chrono::NaiveDate;
use serde::Serialize;

use super::Stat;

/// Number of period columns in a line score: 4 quarters plus up to 5
/// overtimes. Shorter games are padded with empty values.
pub const LINE_SCORE_PERIODS: usize = 9;

/// Per-period scoring breakdown for one team, final total last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineScore {
    /// Fixed-width period scores: Q1-Q4 then OT1-OT5, empty when not played.
    pub periods: Vec<String>,
    /// Final score of the game.
    pub total: String,
}

impl LineScore {
    /// Build from the raw period scores of one line-score row, total last.
    pub fn from_scores(scores: &[String]) -> Option<Self> {
        let (total, periods) = scores.split_last()?;
        let mut periods = periods.to_vec();
        periods.resize(LINE_SCORE_PERIODS, String::new());
        Some(Self {
            periods,
            total: total.clone(),
        })
    }

    pub fn column_names() -> Vec<String> {
        let mut names: Vec<String> = (1..=4).map(|q| format!("{q}Q")).collect();
        names.extend((1..=5).map(|ot| format!("OT{ot}")));
        names.push("F".to_string());
        names
    }

    fn values(&self) -> Vec<String> {
        let mut values = self.periods.clone();
        values.push(self.total.clone());
        values
    }
}

/// One team's aggregate line for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRow {
    /// 3-letter team code from the box-score table id.
    pub team: String,
    /// Full team name, when the code is known to the team directory.
    pub team_name: String,
    pub is_home: bool,
    /// Scoring breakdown; absent when the page carries no line-score table.
    pub line_score: Option<LineScore>,
    pub stats: Vec<Stat>,
}

impl TeamRow {
    /// Column names for this row, identity fields first, `game_date` last.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![
            "team".to_string(),
            "team_name".to_string(),
            "home_team_ind".to_string(),
        ];
        columns.extend(LineScore::column_names());
        columns.extend(self.stats.iter().map(|s| s.key.clone()));
        columns.push("game_date".to_string());
        columns
    }

    /// Values in the same order as [`TeamRow::columns`].
    pub fn values(&self, game_date: NaiveDate) -> Vec<String> {
        let mut values = vec![
            self.team.clone(),
            self.team_name.clone(),
            self.is_home.to_string(),
        ];
        match &self.line_score {
            Some(line) => values.extend(line.values()),
            None => values.extend(std::iter::repeat_n(String::new(), LINE_SCORE_PERIODS + 1)),
        }
        values.extend(self.stats.iter().map(|s| s.value.clone()));
        values.push(game_date.to_string());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_score_pads_regulation_games_to_fixed_width() {
        let scores: Vec<String> = ["25", "30", "28", "27", "110"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let line = LineScore::from_scores(&scores).unwrap();
        assert_eq!(line.periods.len(), LINE_SCORE_PERIODS);
        assert_eq!(&line.periods[..4], &scores[..4]);
        assert!(line.periods[4..].iter().all(|p| p.is_empty()));
        assert_eq!(line.total, "110");
    }

    #[test]
    fn line_score_keeps_overtime_periods() {
        let scores: Vec<String> = ["25", "30", "28", "27", "12", "122"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let line = LineScore::from_scores(&scores).unwrap();
        assert_eq!(line.periods[4], "12");
        assert!(line.periods[5..].iter().all(|p| p.is_empty()));
        assert_eq!(line.total, "122");
    }
}
