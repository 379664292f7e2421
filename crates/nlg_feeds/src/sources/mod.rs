use async_trait::async_trait;
use nlg_core::{Article, Result};

pub mod google;
pub mod naver;
pub mod sample;

pub use google::GoogleNewsSource;
pub use naver::NaverNewsSource;
pub use sample::SampleSource;

/// A keyword search against one news backend.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keywords: Vec<String>,
    pub max_articles: usize,
    pub freshness_days: Option<u32>,
}

impl SearchQuery {
    pub const DEFAULT_MAX_ARTICLES: usize = 15;

    /// Builds a query from a comma-separated keyword string, e.g.
    /// "인공지능, 기후변화, 경제".
    pub fn from_keywords(keywords: &str) -> Self {
        Self {
            keywords: keywords
                .split(',')
                .map(|keyword| keyword.trim().to_string())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
            max_articles: Self::DEFAULT_MAX_ARTICLES,
            freshness_days: None,
        }
    }

    pub fn with_max_articles(mut self, max_articles: usize) -> Self {
        self.max_articles = max_articles;
        self
    }

    pub fn with_freshness_days(mut self, freshness_days: Option<u32>) -> Self {
        self.freshness_days = freshness_days;
        self
    }
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news backend
    fn name(&self) -> &str;

    /// Fetches articles matching the query, newest first where the backend
    /// supports ordering
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>>;
}

/// Common utilities for sources
pub(crate) mod utils {
    use chrono::{DateTime, Utc};
    use scraper::Html;

    /// Strips markup from feed-supplied text (Naver embeds `<b>` around
    /// matched keywords, Google descriptions carry anchor tags) and decodes
    /// entities.
    pub fn strip_html(text: &str) -> String {
        let fragment = Html::parse_fragment(text);
        fragment
            .root_element()
            .text()
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Feed timestamps are RFC 2822 ("Tue, 05 Aug 2025 08:00:00 +0900");
    /// anything unparseable becomes None and sorts last.
    pub fn parse_pub_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
        raw.and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_keywords() {
        let query = SearchQuery::from_keywords("인공지능, 기후변화 , ,경제");
        assert_eq!(query.keywords, vec!["인공지능", "기후변화", "경제"]);
        assert_eq!(query.max_articles, SearchQuery::DEFAULT_MAX_ARTICLES);
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(utils::strip_html("<b>AI</b> 반도체 &amp; 클라우드"), "AI 반도체 & 클라우드");
        assert_eq!(utils::strip_html("plain text"), "plain text");
    }

    #[test]
    fn test_parse_pub_date() {
        let parsed = utils::parse_pub_date(Some("Mon, 26 Sep 2016 07:50:00 +0900"));
        assert!(parsed.is_some());
        assert!(utils::parse_pub_date(Some("not a date")).is_none());
        assert!(utils::parse_pub_date(None).is_none());
    }
}
