use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").unwrap_or_else(|e| unreachable!("Tag pattern must compile: {e}"))
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| unreachable!("Whitespace pattern must compile: {e}"))
});

/// Tool names are matched case-insensitively, with spaces and underscores treated alike.
pub fn normalize_tool_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Turns an HTML fragment into plain text.
///
/// Every `<...>` run is dropped before entities are decoded, so an escaped `&lt;` in the
/// text survives as a literal `<`.
pub fn strip_html_tags(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, "");
    let decoded = html_escape::decode_html_entities(&without_tags);
    WHITESPACE_RE
        .replace_all(&decoded, " ")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tool_name() {
        assert_eq!(normalize_tool_name("Get Current Time"), "get_current_time");
        assert_eq!(normalize_tool_name("  get_ck_news "), "get_ck_news");
    }

    #[test]
    fn test_strip_html_tags() {
        let html = "<p>建國中學<br/>   <strong>公告</strong></p>\n<div>第二段</div>";
        assert_eq!(strip_html_tags(html), "建國中學 公告 第二段");
    }

    #[test]
    fn test_strip_html_tags_decodes_entities() {
        assert_eq!(
            strip_html_tags("<b>Tom &amp; Jerry</b>&nbsp;show"),
            "Tom & Jerry show"
        );
    }

    #[test]
    fn test_strip_html_tags_keeps_escaped_angle_brackets() {
        assert_eq!(
            strip_html_tags("<p>3 &lt; 5 and 7 &gt; 2</p>"),
            "3 < 5 and 7 > 2"
        );
    }

    #[test]
    fn test_strip_html_tags_plain_text() {
        assert_eq!(strip_html_tags("  no markup here "), "no markup here");
        assert_eq!(strip_html_tags(""), "");
    }
}
