//! Scrape NBA player and team box scores from basketball-reference.com over
//! a date range and accumulate them into CSV-ready datasets.

pub use client::{date_range, BbrefClient};
pub use config::{RateLimitPolicy, ScraperConfig, TeamDirectory};
pub use error::{Result, ScrapeError};
pub use model::{
    BoxscoreDataset, GameReference, LineScore, PlayerRow, Side, Stat, StatCategory, TeamRow,
};

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub(crate) mod scraper;
pub(crate) mod throttle;
