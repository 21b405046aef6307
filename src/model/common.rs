use serde::Serialize;

/// Which of the two box-score tables per team to scrape.
///
/// The table ids on a game page end in `-game-basic` or `-game-advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum StatCategory {
    Basic,
    Advanced,
}

impl StatCategory {
    /// Table id suffix for this category.
    pub(crate) fn id_suffix(self) -> &'static str {
        match self {
            StatCategory::Basic => "-game-basic",
            StatCategory::Advanced => "-game-advanced",
        }
    }
}

/// Which team a table or record belongs to.
///
/// Game pages list the away team's tables before the home team's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn is_home(self) -> bool {
        matches!(self, Side::Home)
    }
}
