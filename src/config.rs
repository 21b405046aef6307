use std::time::Duration;

use crate::error::{Result, ScrapeError};

/// What to do when the upstream answers 429 despite the request throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateLimitPolicy {
    /// Abort the run. This is the historical behavior.
    #[default]
    Fatal,
    /// Sleep for the throttle pause, then retry the fetch once.
    /// A second 429 on the same URL is fatal.
    PauseAndRetry,
}

/// Tunable knobs for a scraping run.
///
/// Built once, handed to [`BbrefClient`](crate::BbrefClient) at construction,
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Root of the upstream site, without a trailing slash.
    pub base_url: String,
    /// Per-request network timeout.
    pub request_timeout: Duration,
    /// Number of requests allowed between throttle pauses.
    pub throttle_limit: u32,
    /// How long to sleep when the throttle limit is hit.
    pub throttle_pause: Duration,
    pub rate_limit_policy: RateLimitPolicy,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.basketball-reference.com".to_string(),
            request_timeout: Duration::from_secs(5),
            // The upstream allows roughly 20 requests per minute; pausing for
            // 70 seconds after every 20 keeps a run under that ceiling.
            throttle_limit: 20,
            throttle_pause: Duration::from_secs(70),
            rate_limit_policy: RateLimitPolicy::Fatal,
        }
    }
}

/// Full team names and the 3-letter codes used in game paths and table ids.
const TEAMS: &[(&str, &str)] = &[
    ("Atlanta Hawks", "ATL"),
    ("Boston Celtics", "BOS"),
    ("Brooklyn Nets", "BRK"),
    ("Charlotte Hornets", "CHO"),
    ("Chicago Bulls", "CHI"),
    ("Cleveland Cavaliers", "CLE"),
    ("Dallas Mavericks", "DAL"),
    ("Denver Nuggets", "DEN"),
    ("Detroit Pistons", "DET"),
    ("Golden State Warriors", "GSW"),
    ("Houston Rockets", "HOU"),
    ("Indiana Pacers", "IND"),
    ("Los Angeles Clippers", "LAC"),
    ("Los Angeles Lakers", "LAL"),
    ("Memphis Grizzlies", "MEM"),
    ("Miami Heat", "MIA"),
    ("Milwaukee Bucks", "MIL"),
    ("Minnesota Timberwolves", "MIN"),
    ("New Orleans Pelicans", "NOP"),
    ("New York Knicks", "NYK"),
    ("Oklahoma City Thunder", "OKC"),
    ("Orlando Magic", "ORL"),
    ("Philadelphia 76ers", "PHI"),
    ("Phoenix Suns", "PHO"),
    ("Portland Trail Blazers", "POR"),
    ("Sacramento Kings", "SAC"),
    ("San Antonio Spurs", "SAS"),
    ("Toronto Raptors", "TOR"),
    ("Utah Jazz", "UTA"),
    ("Washington Wizards", "WAS"),
];

/// Mapping between team display names and the codes embedded in game paths
/// and box-score table ids.
///
/// Loaded once per run and injected wherever a schedule entry's display name
/// must be resolved; never consulted as ambient global state.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    entries: Vec<(String, String)>,
}

impl TeamDirectory {
    /// Directory of the 30 current NBA franchises.
    pub fn nba() -> Self {
        Self {
            entries: TEAMS
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
        }
    }

    /// Build a directory from arbitrary `(full name, code)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Resolve a full team name to its 3-letter code.
    pub fn code(&self, full_name: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == full_name)
            .map(|(_, code)| code.as_str())
            .ok_or_else(|| ScrapeError::UnknownTeam {
                name: full_name.to_string(),
            })
    }

    /// Resolve a 3-letter code back to the full team name, if known.
    pub fn full_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, c)| c.as_str() == code)
            .map(|(name, _)| name.as_str())
    }
}

impl Default for TeamDirectory {
    fn default() -> Self {
        Self::nba()
    }
}
