use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsSearchError {
    #[error("invalid feed url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to fetch feed: {0}")]
    FetchFailure(#[from] reqwest::Error),

    #[error("failed to parse feed: {0}")]
    ParseFailure(#[from] rss::Error),

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("未找到關鍵字「{keyword}」的相關新聞。")]
    NotFound { keyword: String },
}

impl NewsSearchError {
    /// The text shown to the caller in an error record.
    pub fn message(&self) -> String {
        match self {
            NewsSearchError::NotFound { .. } => self.to_string(),
            other => format!("處理 RSS Feed 時發生錯誤: {other}"),
        }
    }
}
