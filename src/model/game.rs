use chrono::NaiveDate;
use serde::Serialize;

use crate::config::TeamDirectory;
use crate::error::{Result, ScrapeError};

/// One played game, as resolved from a day's schedule page.
///
/// The path segment (`YYYYMMDD0TTT.html`, where `TTT` is the home team's
/// code) is the source of truth for both the played date and the home team,
/// so both are parsed out eagerly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReference {
    /// Calendar date the game was played.
    pub date: NaiveDate,
    /// Site-relative path to the game page, e.g. `/boxscores/202102010BOS.html`.
    pub path: String,
    /// 3-letter code of the home team.
    pub home_code: String,
}

impl GameReference {
    /// Parse a schedule link target into a game reference.
    pub fn from_path(path: &str) -> Result<Self> {
        let malformed = || ScrapeError::MalformedGameReference {
            path: path.to_string(),
        };

        let segment = path
            .rsplit('/')
            .next()
            .and_then(|s| s.strip_suffix(".html"))
            .ok_or_else(malformed)?;
        // YYYYMMDD + '0' + 3-letter home code
        if segment.len() != 12 || segment.as_bytes()[8] != b'0' {
            return Err(malformed());
        }

        let date = NaiveDate::parse_from_str(&segment[..8], "%Y%m%d")?;
        Ok(Self {
            date,
            path: path.to_string(),
            home_code: segment[9..].to_string(),
        })
    }

    /// Build a reference from a date and the home team's display name.
    pub fn from_home_team(date: NaiveDate, home_team: &str, teams: &TeamDirectory) -> Result<Self> {
        let code = teams.code(home_team)?;
        Ok(Self {
            date,
            path: format!("/boxscores/{}0{code}.html", date.format("%Y%m%d")),
            home_code: code.to_string(),
        })
    }

    /// Absolute URL of the game page.
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_home_code_from_path() {
        let game = GameReference::from_path("/boxscores/202102010BOS.html").unwrap();
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
        assert_eq!(game.home_code, "BOS");
        assert_eq!(
            game.url("https://www.basketball-reference.com"),
            "https://www.basketball-reference.com/boxscores/202102010BOS.html"
        );
    }

    #[test]
    fn rejects_paths_without_a_game_segment() {
        for path in ["/boxscores/", "/boxscores/20210201BOS.html", "garbage"] {
            assert!(matches!(
                GameReference::from_path(path),
                Err(ScrapeError::MalformedGameReference { .. } | ScrapeError::DateParse(_))
            ));
        }
    }

    #[test]
    fn builds_path_from_home_team_name() {
        let teams = TeamDirectory::nba();
        let date = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
        let game = GameReference::from_home_team(date, "Boston Celtics", &teams).unwrap();
        assert_eq!(game.path, "/boxscores/202102010BOS.html");
        assert_eq!(GameReference::from_path(&game.path).unwrap(), game);
    }
}
