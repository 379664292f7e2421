use nlg_core::{Article, ChatMessage, ChatModel, Error, Reference, Result, SectionContent};
use tracing::debug;

use crate::{parser, prompts, SAMPLING_TEMPERATURE};

/// The result substituted when content-generation output cannot be parsed:
/// a generic sentence about the subtopic citing the first supplied article.
pub fn fallback_section(subtopic: &str, first_article: &Article) -> SectionContent {
    SectionContent {
        text: format!(
            "{}에 관한 최신 동향과 분석입니다. 이 주제와 관련된 중요한 뉴스와 인사이트를 제공합니다.",
            subtopic
        ),
        references: vec![Reference {
            title: first_article.title.clone(),
            link: first_article.link.clone(),
        }],
    }
}

/// Content-generation stage: asks the model for body text and citations for
/// one subtopic against the full article set.
///
/// Reference links in well-formed output are trusted as-is; only the
/// fallback path guarantees a citation drawn from the supplied articles.
/// Transport errors from the model propagate unchanged.
pub async fn generate_content(
    model: &dyn ChatModel,
    articles: &[Article],
    subtopic: &str,
) -> Result<SectionContent> {
    let first_article = articles.first().ok_or(Error::NoArticles)?;

    let messages = [
        ChatMessage::system(prompts::CONTENT_GENERATION_SYSTEM),
        ChatMessage::user(prompts::content_generation_user(subtopic, articles)?),
    ];

    let raw = model.complete(&messages, SAMPLING_TEMPERATURE).await?;
    debug!("Content generation raw response for {}: {} bytes", subtopic, raw.len());

    Ok(parser::extract_json(&raw, fallback_section(subtopic, first_article)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticModel(&'static str);

    #[async_trait]
    impl ChatModel for StaticModel {
        fn name(&self) -> &str {
            "static"
        }

        async fn complete(&self, _messages: &[ChatMessage], _temperature: f32) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn one_article() -> Vec<Article> {
        vec![Article::new("A", "http://x", "test")]
    }

    #[tokio::test]
    async fn test_valid_response_parses() {
        let model = StaticModel(
            r#"{"text":"반도체 시장 요약","references":[{"title":"A","link":"http://x"}]}"#,
        );
        let section = generate_content(&model, &one_article(), "반도체").await.unwrap();
        assert_eq!(section.text, "반도체 시장 요약");
        assert_eq!(section.references.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_cites_first_article() {
        let model = StaticModel("이번 주 반도체 동향은 다음과 같습니다 (JSON 아님)");
        let section = generate_content(&model, &one_article(), "반도체").await.unwrap();
        assert!(section.text.contains("반도체"));
        assert_eq!(
            section.references,
            vec![Reference {
                title: "A".to_string(),
                link: "http://x".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_articles_is_explicit_error() {
        let model = StaticModel("{}");
        let result = generate_content(&model, &[], "반도체").await;
        assert!(matches!(result, Err(Error::NoArticles)));
    }
}
