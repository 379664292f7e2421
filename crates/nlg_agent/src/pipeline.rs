use futures::future::join_all;
use nlg_core::{Article, ChatModel, Newsletter, NewsletterSection, Result};
use tracing::{info, warn};

use crate::{content, topics};

/// Runs the full two-stage workflow: one topic-selection call, then one
/// content-generation call per subtopic, fanned out concurrently. Section
/// order equals the subtopic order the model returned. A section whose call
/// fails is skipped rather than failing the whole newsletter.
pub async fn generate_newsletter(model: &dyn ChatModel, articles: &[Article]) -> Result<Newsletter> {
    let selection = topics::select_topics(model, articles).await?;
    info!(
        "📌 Selected {} subtopics for newsletter \"{}\"",
        selection.subtopics.len(),
        selection.title
    );

    let section_futures: Vec<_> = selection
        .subtopics
        .iter()
        .map(|subtopic| async move {
            let result = content::generate_content(model, articles, subtopic).await;
            (subtopic.clone(), result)
        })
        .collect();

    let mut sections = Vec::with_capacity(selection.subtopics.len());
    for (subtopic, result) in join_all(section_futures).await {
        match result {
            Ok(content) => {
                info!("✨ Generated section for \"{}\"", subtopic);
                sections.push(NewsletterSection { subtopic, content });
            }
            Err(e) => warn!("Skipping subtopic \"{}\": {}", subtopic, e),
        }
    }

    Ok(Newsletter {
        title: selection.title,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nlg_core::{ChatMessage, Error};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a scripted response per call, in order.
    struct ScriptedModel {
        responses: Mutex<VecDeque<String>>,
    }

    impl ScriptedModel {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, _messages: &[ChatMessage], _temperature: f32) -> Result<String> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::Model("script exhausted".to_string()))
        }
    }

    fn articles() -> Vec<Article> {
        vec![
            Article::new("기사 A", "https://example.com/a", "test"),
            Article::new("기사 B", "https://example.com/b", "test"),
        ]
    }

    #[tokio::test]
    async fn test_end_to_end_order_and_references() {
        // Topic selection names two subtopics; each section cites one of the
        // two supplied articles.
        let model = ScriptedModel::new(&[
            r#"{"title":"오늘의 뉴스","subtopics":["첫 번째 주제","두 번째 주제"]}"#,
            r#"{"text":"첫 섹션","references":[{"title":"기사 A","link":"https://example.com/a"}]}"#,
            r#"{"text":"둘째 섹션","references":[{"title":"기사 B","link":"https://example.com/b"}]}"#,
        ]);

        let articles = articles();
        let newsletter = generate_newsletter(&model, &articles).await.unwrap();

        assert_eq!(newsletter.title, "오늘의 뉴스");
        let subtopics: Vec<&str> = newsletter
            .sections
            .iter()
            .map(|section| section.subtopic.as_str())
            .collect();
        assert_eq!(subtopics, vec!["첫 번째 주제", "두 번째 주제"]);

        // Every reference comes from the supplied article set
        let links: Vec<&str> = articles.iter().map(|a| a.link.as_str()).collect();
        for section in &newsletter.sections {
            for reference in &section.content.references {
                assert!(links.contains(&reference.link.as_str()));
            }
        }
    }

    #[tokio::test]
    async fn test_failed_section_is_skipped() {
        // Two subtopics but only one content response: the second call fails
        // and its section is dropped, not the newsletter.
        let model = ScriptedModel::new(&[
            r#"{"title":"오늘의 뉴스","subtopics":["성공 주제","실패 주제"]}"#,
            r#"{"text":"본문","references":[]}"#,
        ]);

        let newsletter = generate_newsletter(&model, &articles()).await.unwrap();
        assert_eq!(newsletter.sections.len(), 1);
        assert_eq!(newsletter.sections[0].subtopic, "성공 주제");
    }

    #[tokio::test]
    async fn test_topic_failure_aborts() {
        let model = ScriptedModel::new(&[]);
        assert!(generate_newsletter(&model, &articles()).await.is_err());
    }
}
