use std::path::PathBuf;

use anyhow::Context;
use bbref_scraper::{
    export, BbrefClient, BoxscoreDataset, RateLimitPolicy, ScraperConfig, StatCategory,
    TeamDirectory,
};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;

/// Scrape NBA box scores from basketball-reference.com into CSV datasets.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// First day of the scrape, ISO format (e.g. 2021-02-01).
    #[arg(long)]
    start_date: NaiveDate,

    /// Last day of the scrape, inclusive. Defaults to the start date.
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Which box-score tables to scrape.
    #[arg(long, value_enum, default_value_t = StatCategory::Basic)]
    category: StatCategory,

    /// Directory for the output files when no existing datasets are given.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Existing player dataset to extend; also becomes the output path.
    #[arg(long)]
    player_csv: Option<PathBuf>,

    /// Existing team dataset to extend; also becomes the output path.
    #[arg(long)]
    team_csv: Option<PathBuf>,

    /// Only scrape player box scores.
    #[arg(long, conflicts_with = "teams_only")]
    players_only: bool,

    /// Only scrape team box scores.
    #[arg(long)]
    teams_only: bool,

    /// Pause and retry once on a 429 instead of aborting.
    #[arg(long)]
    retry_on_rate_limit: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let end = args.end_date.unwrap_or(args.start_date);
    let range_label = format!("{}_to_{}", args.start_date, end);

    // Validate any pre-existing datasets before the first request so a typo
    // in a path does not cost a full scrape.
    let seeded = |path: &Option<PathBuf>| -> anyhow::Result<BoxscoreDataset> {
        match path {
            Some(path) => export::read_dataset(path)
                .with_context(|| format!("validating {}", path.display())),
            None => Ok(BoxscoreDataset::new()),
        }
    };
    let mut player_dataset = seeded(&args.player_csv)?;
    let mut team_dataset = seeded(&args.team_csv)?;

    let config = ScraperConfig {
        rate_limit_policy: if args.retry_on_rate_limit {
            RateLimitPolicy::PauseAndRetry
        } else {
            RateLimitPolicy::Fatal
        },
        ..ScraperConfig::default()
    };
    let client =
        BbrefClient::with_config(config, TeamDirectory::nba()).context("building http client")?;

    if !args.teams_only {
        let num_games = client
            .scrape_players_into(
                &mut player_dataset,
                args.start_date,
                args.end_date,
                args.category,
            )
            .await
            .context("scraping player box scores")?;
        let path = args
            .player_csv
            .clone()
            .unwrap_or_else(|| args.out_dir.join(format!("player_data_{range_label}.csv")));
        export::write_dataset(&path, &player_dataset).context("writing player dataset")?;
        info!(
            num_games,
            rows = player_dataset.len(),
            path = %path.display(),
            "player dataset complete"
        );
    }

    if !args.players_only {
        let num_games = client
            .scrape_teams_into(
                &mut team_dataset,
                args.start_date,
                args.end_date,
                args.category,
            )
            .await
            .context("scraping team box scores")?;
        let path = args
            .team_csv
            .clone()
            .unwrap_or_else(|| args.out_dir.join(format!("team_data_{range_label}.csv")));
        export::write_dataset(&path, &team_dataset).context("writing team dataset")?;
        info!(
            num_games,
            rows = team_dataset.len(),
            path = %path.display(),
            "team dataset complete"
        );
    }

    Ok(())
}
