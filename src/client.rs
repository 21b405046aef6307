use chrono::{Datelike, NaiveDate};
use tracing::{info, instrument, warn};

use crate::config::{RateLimitPolicy, ScraperConfig, TeamDirectory};
use crate::error::{Result, ScrapeError};
use crate::model::{BoxscoreDataset, GameReference, StatCategory};
use crate::scraper::{self, Html};
use crate::throttle::Throttle;

/// User agent the upstream accepts without challenge.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.9.0.7) Gecko/2009021910 Firefox/3.0.7";

/// The main entry point for scraping basketball-reference.com.
///
/// `BbrefClient` wraps a [`reqwest::Client`] together with the run
/// configuration and the team directory, and exposes methods to resolve a
/// date range to its games and to scrape player- and team-level box scores.
///
/// Execution is strictly sequential: days in chronological order, games in
/// schedule order within a day, home rows before away rows within a game.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> bbref_scraper::Result<()> {
/// use bbref_scraper::{BbrefClient, StatCategory};
/// use chrono::NaiveDate;
///
/// let client = BbrefClient::new()?;
/// let start = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
/// let (games, dataset) = client
///     .scrape_players(start, None, StatCategory::Basic)
///     .await?;
/// println!("{games} games, {} player rows", dataset.len());
/// # Ok(())
/// # }
/// ```
pub struct BbrefClient {
    http: reqwest::Client,
    config: ScraperConfig,
    teams: TeamDirectory,
}

impl BbrefClient {
    /// Create a client with the default configuration and NBA team directory.
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default(), TeamDirectory::nba())
    }

    /// Create a client with explicit configuration and team directory.
    ///
    /// Fails with [`ScrapeError::ClientBuild`] when the underlying HTTP
    /// client cannot be constructed; the timeout and user agent from the
    /// configuration are never silently dropped.
    pub fn with_config(config: ScraperConfig, teams: TeamDirectory) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScrapeError::ClientBuild)?;
        Ok(Self::with_client(http, config, teams))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc. beyond
    /// what [`ScraperConfig`] covers.
    pub fn with_client(http: reqwest::Client, config: ScraperConfig, teams: TeamDirectory) -> Self {
        Self {
            http,
            config,
            teams,
        }
    }

    pub fn teams(&self) -> &TeamDirectory {
        &self.teams
    }

    /// Resolve a date range to the games played in it.
    ///
    /// One schedule-index fetch per day, throttled. Returns the total number
    /// of schedule entries alongside the game references.
    #[instrument(skip(self))]
    pub async fn game_summary(
        &self,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<(usize, Vec<GameReference>)> {
        let mut throttle = self.throttle();
        self.game_summary_with(&mut throttle, start_date, end_date)
            .await
    }

    async fn game_summary_with(
        &self,
        throttle: &mut Throttle,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<(usize, Vec<GameReference>)> {
        let days = date_range(start_date, end_date)?;

        let mut num_games = 0;
        let mut games = Vec::new();
        for day in days {
            let url = format!(
                "{}/boxscores/?month={}&day={}&year={}",
                self.config.base_url,
                day.month(),
                day.day(),
                day.year()
            );
            let document = self.fetch(throttle, &url).await?;
            let (count, day_games) = scraper::schedule::parse_schedule(&document)?;
            num_games += count;
            games.extend(day_games);
        }

        info!(num_games, %start_date, ?end_date, "resolved schedule");
        Ok((num_games, games))
    }

    /// Scrape one player row per player per game over a date range.
    #[instrument(skip(self))]
    pub async fn scrape_players(
        &self,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        category: StatCategory,
    ) -> Result<(usize, BoxscoreDataset)> {
        let mut dataset = BoxscoreDataset::new();
        let num_games = self
            .scrape_players_into(&mut dataset, start_date, end_date, category)
            .await?;
        Ok((num_games, dataset))
    }

    /// Like [`BbrefClient::scrape_players`], but appends to an existing
    /// dataset (seeded from a prior run, for example). Append-only, no
    /// deduplication.
    pub async fn scrape_players_into(
        &self,
        dataset: &mut BoxscoreDataset,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        category: StatCategory,
    ) -> Result<usize> {
        // One throttle window spans the schedule and game fetches; they all
        // count against the same request limit.
        let mut throttle = self.throttle();
        let (num_games, games) = self
            .game_summary_with(&mut throttle, start_date, end_date)
            .await?;

        for game in &games {
            let document = self.fetch(&mut throttle, &game.url(&self.config.base_url)).await?;
            for row in scraper::boxscore::assemble_player_boxscore(&document, category)? {
                // The game path, not the schedule loop date, is the source
                // of truth for the played date.
                dataset.append(&row.columns(), row.values(game.date));
            }
        }
        Ok(num_games)
    }

    /// Scrape both teams' aggregate rows per game over a date range.
    #[instrument(skip(self))]
    pub async fn scrape_teams(
        &self,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        category: StatCategory,
    ) -> Result<(usize, BoxscoreDataset)> {
        let mut dataset = BoxscoreDataset::new();
        let num_games = self
            .scrape_teams_into(&mut dataset, start_date, end_date, category)
            .await?;
        Ok((num_games, dataset))
    }

    /// Like [`BbrefClient::scrape_teams`], but appends to an existing dataset.
    pub async fn scrape_teams_into(
        &self,
        dataset: &mut BoxscoreDataset,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        category: StatCategory,
    ) -> Result<usize> {
        let mut throttle = self.throttle();
        let (num_games, games) = self
            .game_summary_with(&mut throttle, start_date, end_date)
            .await?;

        for game in &games {
            let document = self.fetch(&mut throttle, &game.url(&self.config.base_url)).await?;
            for row in scraper::boxscore::assemble_team_boxscore(&document, category, &self.teams)?
            {
                dataset.append(&row.columns(), row.values(game.date));
            }
        }
        Ok(num_games)
    }

    fn throttle(&self) -> Throttle {
        Throttle::new(self.config.throttle_limit, self.config.throttle_pause)
    }

    /// Fetch one page, counting it against the throttle and applying the
    /// configured rate-limit policy.
    async fn fetch(&self, throttle: &mut Throttle, url: &str) -> Result<Html> {
        let document = match scraper::get_document(&self.http, url).await {
            Err(ScrapeError::RateLimited { .. })
                if self.config.rate_limit_policy == RateLimitPolicy::PauseAndRetry =>
            {
                warn!(url, "rate limited despite throttle, pausing for one retry");
                tokio::time::sleep(self.config.throttle_pause).await;
                scraper::get_document(&self.http, url).await?
            }
            other => other?,
        };

        if let Some(pause) = throttle.record_request() {
            info!(
                seconds = pause.as_secs(),
                "request limit reached, pausing before continuing"
            );
            tokio::time::sleep(pause).await;
        }
        Ok(document)
    }
}

/// Expand `[start, end]` into an inclusive, chronologically ordered day
/// sequence. `None` means the single day `start`; an end before the start is
/// [`ScrapeError::InvalidRange`], rejected before any network activity.
pub fn date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<Vec<NaiveDate>> {
    match end {
        None => Ok(vec![start]),
        Some(end) if end < start => Err(ScrapeError::InvalidRange { start, end }),
        Some(end) => Ok(start.iter_days().take_while(|day| *day <= end).collect()),
    }
}
