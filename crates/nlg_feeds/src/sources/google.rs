use async_trait::async_trait;
use nlg_core::{Article, Error, Result};
use serde::Deserialize;
use tracing::debug;

use super::{utils, NewsSource, SearchQuery};

/// Keyword search over the Google News RSS endpoint. No credentials needed.
pub struct GoogleNewsSource {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleNewsSource {
    const BASE_URL: &'static str = "https://news.google.com";

    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Self::BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        let terms = query
            .keywords
            .iter()
            .map(|keyword| urlencoding::encode(keyword).into_owned())
            .collect::<Vec<_>>()
            .join("+");
        format!("{}/rss/search?q={}&hl=ko&gl=KR&ceid=KR:ko", self.base_url, terms)
    }
}

impl Default for GoogleNewsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(default, rename = "item")]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    source: Option<ItemSource>,
}

#[derive(Debug, Deserialize)]
struct ItemSource {
    #[serde(rename = "$text")]
    name: Option<String>,
}

/// Deserializes a Google News RSS document into articles. Items without a
/// title or link are dropped; descriptions are stripped of markup.
pub(crate) fn parse_rss(xml: &str, source_fallback: &str) -> Result<Vec<Article>> {
    let rss: Rss = quick_xml::de::from_str(xml)
        .map_err(|e| Error::Feed(format!("Invalid RSS document: {}", e)))?;

    let articles = rss
        .channel
        .items
        .into_iter()
        .filter_map(|item| {
            let title = item.title.map(|t| utils::strip_html(&t)).unwrap_or_default();
            let link = item.link.unwrap_or_default();
            if title.is_empty() || link.is_empty() {
                return None;
            }

            let source = item
                .source
                .and_then(|s| s.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| source_fallback.to_string());

            let mut article = Article::new(title, link, source)
                .with_published_at(utils::parse_pub_date(item.pub_date.as_deref()));
            if let Some(description) = item.description {
                article = article.with_description(utils::strip_html(&description));
            }
            Some(article)
        })
        .collect();

    Ok(articles)
}

#[async_trait]
impl NewsSource for GoogleNewsSource {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>> {
        let url = self.search_url(query);
        debug!("Fetching Google News RSS: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Feed(format!(
                "Google News RSS returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let mut articles = parse_rss(&body, "Google News")?;
        articles.truncate(query.max_articles);
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>"인공지능" - Google 뉴스</title>
    <item>
      <title>인공지능 반도체 투자 확대</title>
      <link>https://example.com/news/1</link>
      <pubDate>Tue, 05 Aug 2025 08:00:00 GMT</pubDate>
      <description>&lt;a href="https://example.com/news/1"&gt;인공지능 반도체 투자 확대&lt;/a&gt;</description>
      <source url="https://example.com">예시경제</source>
    </item>
    <item>
      <title>제목만 있는 기사</title>
      <link>https://example.com/news/2</link>
    </item>
    <item>
      <title></title>
      <link>https://example.com/news/3</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss() {
        let articles = parse_rss(FIXTURE, "Google News").unwrap();
        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert_eq!(first.title, "인공지능 반도체 투자 확대");
        assert_eq!(first.link, "https://example.com/news/1");
        assert_eq!(first.source, "예시경제");
        assert_eq!(first.description, "인공지능 반도체 투자 확대");
        assert!(first.published_at.is_some());

        // No description element: placeholder applies, source falls back
        let second = &articles[1];
        assert_eq!(second.description, nlg_core::types::EMPTY_DESCRIPTION);
        assert_eq!(second.source, "Google News");
        assert!(second.published_at.is_none());
    }

    #[test]
    fn test_parse_rss_rejects_garbage() {
        assert!(parse_rss("not xml at all", "Google News").is_err());
    }

    #[test]
    fn test_search_url_encodes_keywords() {
        let source = GoogleNewsSource::new();
        let query = SearchQuery::from_keywords("인공지능, ai chips");
        let url = source.search_url(&query);
        assert!(url.starts_with("https://news.google.com/rss/search?q="));
        assert!(url.contains('+'));
        assert!(!url.contains(' '));
        assert!(url.ends_with("&hl=ko&gl=KR&ceid=KR:ko"));
    }
}
