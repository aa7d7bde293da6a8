mod news_entry;
pub use news_entry::*;

mod news_search;
pub use news_search::*;

mod match_strategy;
pub use match_strategy::*;

mod error;
pub use error::*;
