use async_trait::async_trait;
use chrono::{Duration, Utc};
use nlg_core::{Article, Error, Result};

use super::{NewsSource, SearchQuery};

/// Offline source producing keyword-derived demo articles, for running the
/// pipeline without feed credentials or network access.
#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    const ARTICLE_COUNT: usize = 10;

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NewsSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>> {
        if query.keywords.is_empty() {
            return Err(Error::Feed("Sample source needs at least one keyword".to_string()));
        }

        let now = Utc::now();
        let mut articles = Vec::with_capacity(Self::ARTICLE_COUNT);
        for i in 0..Self::ARTICLE_COUNT {
            let keyword = &query.keywords[i % query.keywords.len()];
            let article = Article::new(
                format!("{}에 관한 최신 뉴스 {}", keyword, i + 1),
                format!("https://example.com/news/{}", i),
                "sample",
            )
            .with_description(format!(
                "{}에 관한 최신 동향과 분석을 담은 뉴스 기사입니다. 이것은 데모용 샘플 데이터입니다.",
                keyword
            ))
            .with_published_at(Some(now - Duration::hours(i as i64)));
            articles.push(article);
        }

        articles.truncate(query.max_articles);
        Ok(articles)
    }
}
