use std::error::Error;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use rss::{Channel, Item};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::tools::{Tool, ToolError, ToolOutput};

use super::{MatchStrategy, NewsEntry, NewsSearchError};

/// CK High School (建國高中) news feed.
pub const CK_NEWS_FEED_URL: &str = "https://www.ck.tp.edu.tw/nss/main/feeder/5abf2d62aa93092cee58ceb4/IXZld9j7619?f=normal&%240=kpenVCJ9015&vector=private&static=false";

/// Environment variable that overrides the feed URL of [`NewsSearch::default`].
pub const FEED_URL_ENV: &str = "CK_NEWS_FEED_URL";

fn default_max_results() -> i64 {
    1
}

#[derive(Debug, Deserialize, JsonSchema)]
#[schemars(description = "Keyword search over the school news feed")]
pub struct NewsSearchInput {
    #[schemars(description = "The keyword to search for (case-insensitive)")]
    pub keyword: String,
    #[serde(default = "default_max_results")]
    #[schemars(description = "Maximum number of news entries to return, defaults to 1")]
    pub max_results: i64,
}

impl NewsSearchInput {
    /// The requested limit; anything below one asks for a single entry.
    pub fn limit(&self) -> usize {
        usize::try_from(self.max_results.max(1)).unwrap_or(usize::MAX)
    }
}

/// Result record of a news search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NewsReport {
    Success { reports: Vec<NewsEntry> },
    Error { error_message: String },
}

impl NewsReport {
    pub fn is_success(&self) -> bool {
        matches!(self, NewsReport::Success { .. })
    }

    pub fn entries(&self) -> &[NewsEntry] {
        match self {
            NewsReport::Success { reports } => reports,
            NewsReport::Error { .. } => &[],
        }
    }
}

impl From<Result<Vec<NewsEntry>, NewsSearchError>> for NewsReport {
    fn from(result: Result<Vec<NewsEntry>, NewsSearchError>) -> Self {
        match result {
            Ok(reports) => NewsReport::Success { reports },
            Err(e) => NewsReport::Error {
                error_message: e.message(),
            },
        }
    }
}

impl From<NewsReport> for ToolOutput {
    fn from(report: NewsReport) -> Self {
        match serde_json::to_value(&report) {
            Ok(value) => ToolOutput::Json(value),
            Err(e) => {
                log::warn!("Failed to serialize news report: {e}");
                ToolOutput::Text(
                    report
                        .entries()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n---\n"),
                )
            }
        }
    }
}

/// Keyword search over an RSS feed. The feed is downloaded again on every search.
pub struct NewsSearch {
    feed_url: String,
    match_strategy: MatchStrategy,
    client: Client,
}

impl NewsSearch {
    pub fn new<S: Into<String>>(feed_url: S) -> Self {
        Self {
            feed_url: feed_url.into(),
            match_strategy: MatchStrategy::default(),
            client: Client::new(),
        }
    }

    pub fn with_feed_url<S: Into<String>>(mut self, feed_url: S) -> Self {
        self.feed_url = feed_url.into();
        self
    }

    pub fn with_match_strategy(mut self, match_strategy: MatchStrategy) -> Self {
        self.match_strategy = match_strategy;
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn match_strategy(&self) -> MatchStrategy {
        self.match_strategy
    }

    async fn fetch_feed(&self) -> Result<Channel, NewsSearchError> {
        let url = Url::parse(&self.feed_url)?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(Channel::read_from(&body[..])?)
    }

    /// Returns up to `max_results` entries (at least one) whose title or raw summary
    /// matches `keyword`, in feed order.
    pub async fn search(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<NewsEntry>, NewsSearchError> {
        let matcher = self.match_strategy.compile(keyword)?;
        let channel = self.fetch_feed().await?;

        let entries = select_entries(channel.items(), &matcher, max_results);
        log::debug!(
            "Feed {} has {} items, {} matched {keyword:?}",
            self.feed_url,
            channel.items().len(),
            entries.len()
        );

        if entries.is_empty() {
            return Err(NewsSearchError::NotFound {
                keyword: keyword.to_owned(),
            });
        }

        Ok(entries)
    }

    pub async fn report(&self, keyword: &str, max_results: usize) -> NewsReport {
        let result = self.search(keyword, max_results).await;
        if let Err(e) = &result {
            log::warn!("News search for {keyword:?} failed: {e}");
        }
        result.into()
    }
}

impl Default for NewsSearch {
    fn default() -> Self {
        Self::new(feed_url_from_env_value(std::env::var(FEED_URL_ENV).ok()))
    }
}

/// Feed URL for a value of [`FEED_URL_ENV`]; unset or blank falls back to [`CK_NEWS_FEED_URL`].
fn feed_url_from_env_value(value: Option<String>) -> String {
    value
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| CK_NEWS_FEED_URL.to_owned())
}

/// Scans `items` in order and stops once `max_results` matches are collected.
/// A limit of zero still yields the first match.
fn select_entries(items: &[Item], matcher: &Regex, max_results: usize) -> Vec<NewsEntry> {
    items
        .iter()
        .filter(|item| {
            let combined = format!(
                "{} {}",
                item.title().unwrap_or_default(),
                item.description().unwrap_or_default()
            );
            matcher.is_match(&combined)
        })
        .take(max_results.max(1))
        .map(NewsEntry::from)
        .collect()
}

#[async_trait]
impl Tool for NewsSearch {
    type Input = NewsSearchInput;
    type Output = NewsReport;

    fn name(&self) -> String {
        "get_ck_news".into()
    }

    fn description(&self) -> String {
        "Searches CK High School (建國高中) news from its RSS feed by keyword \
        (case-insensitive) and returns the first max_results matching entries \
        with title, link, summary and publish date."
            .into()
    }

    async fn parse_input(&self, input: Value) -> Result<Self::Input, ToolError> {
        if input.is_object() {
            return Ok(serde_json::from_value::<NewsSearchInput>(input)?);
        }

        let keyword = serde_json::from_value::<String>(input)?;
        Ok(NewsSearchInput {
            keyword,
            max_results: default_max_results(),
        })
    }

    async fn run(&self, input: Self::Input) -> Result<Self::Output, Box<dyn Error + Send + Sync>> {
        Ok(self.report(&input.keyword, input.limit()).await)
    }
}
