use async_trait::async_trait;
use nlg_core::{ChatMessage, ChatModel, Result, Role};
use serde_json::json;

/// Deterministic offline model for keyless runs and tests. Emits valid JSON
/// for both workflow stages, keyed off the shape of the data message.
#[derive(Debug, Default)]
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }

    fn subtopic_from(data_message: &str) -> String {
        data_message
            .lines()
            .find_map(|line| line.trim().strip_prefix("주제:"))
            .map(|subtopic| subtopic.trim().to_string())
            .unwrap_or_else(|| "주요 이슈".to_string())
    }
}

#[async_trait]
impl ChatModel for DummyModel {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn complete(&self, messages: &[ChatMessage], _temperature: f32) -> Result<String> {
        let data_message = messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
            .unwrap_or_default();

        let response = if data_message.contains("참고할 뉴스 기사 목록") {
            let subtopic = Self::subtopic_from(data_message);
            json!({
                "text": format!(
                    "{}에 대한 데모 요약입니다. 실제 모델 없이 파이프라인을 검증하기 위한 내용입니다.",
                    subtopic
                ),
                "references": [],
            })
        } else {
            json!({
                "title": "데모 뉴스레터",
                "subtopics": ["주요 이슈", "산업 동향", "기술 혁신"],
            })
        };

        Ok(response.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlg_core::{Article, TopicSelection};

    #[tokio::test]
    async fn test_dummy_drives_both_stages() {
        let model = DummyModel::new();
        let articles = vec![Article::new("기사", "https://example.com/1", "test")];

        let selection = crate::topics::select_topics(&model, &articles).await.unwrap();
        assert_eq!(selection.title, "데모 뉴스레터");
        assert_eq!(selection.subtopics.len(), 3);

        let section = crate::content::generate_content(&model, &articles, &selection.subtopics[0])
            .await
            .unwrap();
        assert!(section.text.contains("주요 이슈"));
    }

    #[tokio::test]
    async fn test_topics_response_is_valid_json() {
        let model = DummyModel::new();
        let messages = [ChatMessage::user("하위 주제를 선정해주세요")];
        let raw = model.complete(&messages, 0.7).await.unwrap();
        let parsed: TopicSelection = serde_json::from_str(&raw).unwrap();
        assert!((3..=7).contains(&parsed.subtopics.len()));
    }
}
