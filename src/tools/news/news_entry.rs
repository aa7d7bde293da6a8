use std::fmt::Display;

use rss::Item;
use serde::{Deserialize, Serialize};

use crate::utils::helper::strip_html_tags;

/// One matching feed item, with its summary reduced to plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub title: String,
    pub link: String,
    pub summary: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

impl From<&Item> for NewsEntry {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title().unwrap_or_default().to_owned(),
            link: item.link().unwrap_or_default().to_owned(),
            summary: strip_html_tags(item.description().unwrap_or_default()),
            pub_date: item.pub_date().unwrap_or_default().to_owned(),
        }
    }
}

impl Display for NewsEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]({}) {}\n{}",
            self.title, self.link, self.pub_date, self.summary
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_item_strips_summary() {
        let mut item = Item::default();
        item.set_title("段考公告".to_string());
        item.set_link("https://www.ck.tp.edu.tw/news/1".to_string());
        item.set_description("<p>期中考<br>  於第 9 週舉行</p>".to_string());
        item.set_pub_date("Mon, 03 Nov 2025 08:00:00 +0800".to_string());

        let entry = NewsEntry::from(&item);

        assert_eq!(entry.summary, "期中考 於第 9 週舉行");
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "title": "段考公告",
                "link": "https://www.ck.tp.edu.tw/news/1",
                "summary": "期中考 於第 9 週舉行",
                "pubDate": "Mon, 03 Nov 2025 08:00:00 +0800"
            })
        );
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let entry = NewsEntry::from(&Item::default());

        assert_eq!(entry.title, "");
        assert_eq!(entry.link, "");
        assert_eq!(entry.summary, "");
        assert_eq!(entry.pub_date, "");
    }
}
