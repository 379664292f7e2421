use async_trait::async_trait;
use nlg_core::{Article, Error, Result};
use serde::Deserialize;
use tracing::debug;

use super::{utils, NewsSource, SearchQuery};

/// Keyword search over the Naver News search API. Requires an application
/// client id/secret from the Naver developer center.
pub struct NaverNewsSource {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    base_url: String,
}

impl NaverNewsSource {
    const BASE_URL: &'static str = "https://openapi.naver.com";

    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: Self::BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for NaverNewsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaverNewsSource")
            .field("client_id", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct NaverResponse {
    #[serde(default)]
    items: Vec<NaverItem>,
}

#[derive(Debug, Deserialize)]
struct NaverItem {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

pub(crate) fn articles_from_items(items: Vec<NaverItem>) -> Vec<Article> {
    items
        .into_iter()
        .filter_map(|item| {
            let title = item.title.map(|t| utils::strip_html(&t)).unwrap_or_default();
            let link = item.link.unwrap_or_default();
            if title.is_empty() || link.is_empty() {
                return None;
            }

            let mut article = Article::new(title, link, "Naver News")
                .with_published_at(utils::parse_pub_date(item.pub_date.as_deref()));
            if let Some(description) = item.description {
                article = article.with_description(utils::strip_html(&description));
            }
            Some(article)
        })
        .collect()
}

#[async_trait]
impl NewsSource for NaverNewsSource {
    fn name(&self) -> &str {
        "naver"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>> {
        let url = format!("{}/v1/search/news.json", self.base_url);
        let search_query = query.keywords.join(" ");
        let display = query.max_articles.to_string();
        debug!("Querying Naver news API: {}", search_query);

        let response = self
            .client
            .get(&url)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .query(&[
                ("query", search_query.as_str()),
                ("display", display.as_str()),
                ("sort", "date"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Feed(format!(
                "Naver API returned status {}",
                response.status()
            )));
        }

        let parsed = response.json::<NaverResponse>().await?;
        let mut articles = articles_from_items(parsed.items);
        articles.truncate(query.max_articles);
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "lastBuildDate": "Tue, 05 Aug 2025 17:00:00 +0900",
        "total": 2,
        "items": [
            {
                "title": "<b>인공지능</b> 규제 법안 통과",
                "originallink": "https://example.com/orig/1",
                "link": "https://news.example.com/1",
                "description": "<b>인공지능</b> 규제에 관한 상세 기사",
                "pubDate": "Tue, 05 Aug 2025 16:30:00 +0900"
            },
            {
                "title": "링크 없는 기사",
                "description": "버려져야 하는 항목"
            }
        ]
    }"#;

    #[test]
    fn test_parse_naver_response() {
        let parsed: NaverResponse = serde_json::from_str(FIXTURE).unwrap();
        let articles = articles_from_items(parsed.items);
        assert_eq!(articles.len(), 1);

        let article = &articles[0];
        assert_eq!(article.title, "인공지능 규제 법안 통과");
        assert_eq!(article.link, "https://news.example.com/1");
        assert_eq!(article.description, "인공지능 규제에 관한 상세 기사");
        assert_eq!(article.source, "Naver News");
        assert!(article.published_at.is_some());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let source = NaverNewsSource::new("id-value", "s3cr3t-value");
        let debug = format!("{:?}", source);
        assert!(!debug.contains("s3cr3t-value"));
        assert!(debug.contains("<redacted>"));
    }
}
