use std::path::PathBuf;

use ::scraper::error::SelectorErrorKind;
use chrono::NaiveDate;

use crate::model::StatCategory;

/// All errors that can occur while scraping box scores.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// The HTTP client itself could not be constructed (TLS backend init).
    #[error("failed to construct http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server answered 429 Too Many Requests.
    ///
    /// Kept distinct from [`ScrapeError::Fetch`] so callers can decide to
    /// pause and retry instead of aborting.
    #[error("rate limited (429) by {url}")]
    RateLimited { url: String },

    /// Server returned a non-success, non-429 HTTP status code.
    #[error("unexpected status {status} for {url}")]
    Fetch {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The page did not contain both box-score tables for a category.
    #[error("expected 2 {category} box-score tables, found {found}")]
    TableNotFound {
        category: StatCategory,
        found: usize,
    },

    /// A starter index past 5 was requested; a lineup has exactly 5 starters.
    #[error("starter index {index} out of range, a lineup has 5 starters")]
    InvalidStarterIndex { index: usize },

    /// The requested date range ends before it starts.
    #[error("end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A pre-existing dataset file could not be read or parsed.
    #[error("cannot read existing dataset {}: {source}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write a dataset file.
    #[error("cannot write dataset {}: {source}", path.display())]
    DatasetWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A schedule entry or game path did not look like a box-score reference.
    #[error("malformed game reference: {path}")]
    MalformedGameReference { path: String },

    /// A team display name has no entry in the team directory.
    #[error("unknown team name: {name}")]
    UnknownTeam { name: String },

    /// An expected HTML element was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// Failed to parse a date from scraped text.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}

impl<'a> From<SelectorErrorKind<'a>> for ScrapeError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        ScrapeError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
