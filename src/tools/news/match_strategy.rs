use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::NewsSearchError;

/// How a search keyword is matched against entry text. Matching is always case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The keyword is a literal substring; regex metacharacters have no special meaning.
    #[default]
    Literal,
    /// The keyword is a regular expression.
    Pattern,
}

impl MatchStrategy {
    pub fn compile(&self, keyword: &str) -> Result<Regex, NewsSearchError> {
        let pattern = match self {
            MatchStrategy::Literal => regex::escape(keyword),
            MatchStrategy::Pattern => keyword.to_owned(),
        };

        Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
    }
}
