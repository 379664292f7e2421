use nlg_core::{Article, Result};
use serde::Serialize;

/// Instruction message for the topic-selection stage: selection criteria and
/// the JSON-only output contract.
pub const TOPIC_SELECTION_SYSTEM: &str = r#"당신은 뉴스레터 주제 선정 AI 어시스턴트입니다. 제공된 뉴스 기사 목록을 면밀히 분석하여, 사용자의 관심사에 부합하고 사실에 기반한 최신 주요 내용으로 뉴스레터의 전체 제목과 3-5개의 핵심 하위 주제를 선정해주세요.

주제 선정 시 다음 기준을 종합적으로 고려하여 우선순위를 정해주세요:
1. **사실 기반**: 각 주제는 제공된 뉴스 기사의 명확한 사실과 데이터에 근거해야 합니다. 추측이나 검증되지 않은 정보는 피해주세요.
2. **최신 주요 동향**: 가장 최근에 발생했거나 현재 가장 중요하게 다뤄지는 사건, 발전, 또는 발견을 반영하는 주제를 우선적으로 선택합니다.
3. **높은 사용자 관심도**: 명시된 키워드에 관심을 가진 사용자들이 가장 궁금해하고 유용하다고 생각할 만한 주제를 선정해야 합니다.
4. **뉴스 기사 뒷받침**: 가능하다면, 여러 뉴스 기사에서 공통적으로 다루거나 중요하게 언급되는 주제를 선택하세요.
5. **키워드 관련성 및 포괄성**: 모든 주제는 사용자가 제공한 핵심 키워드와 직접적인 관련이 있어야 하며, 제공된 뉴스 기사들의 주요 내용을 효과적으로 포괄해야 합니다.
6. **독창성 및 다양성**: 각 하위 주제는 서로 명확히 구분되어야 하며, 가능하다면 다양한 관점이나 측면을 보여줄 수 있도록 구성합니다.
7. **흥미 및 중요도**: 독자들의 호기심을 자극하고, 꼭 알아야 할 중요하거나 흥미로운 정보를 담고 있는 주제를 선정합니다.

결과는 다음 JSON 형식으로만 반환해주세요. 다른 설명이나 추가 텍스트 없이 JSON 객체만 응답해야 합니다:
{
    "title": "뉴스레터 전체 제목 (선정된 하위 주제들을 아우르는 매력적인 제목)",
    "subtopics": ["하위 주제 1", "하위 주제 2", "하위 주제 3", "하위 주제 4", "하위 주제 5 (선택 사항)"]
}"#;

/// Instruction message for the content-generation stage: content rules and
/// the JSON-only output contract.
pub const CONTENT_GENERATION_SYSTEM: &str = r#"당신은 뉴스레터 작성 AI 전문가입니다. 제공된 뉴스 기사 목록과 특정 주제를 바탕으로, 해당 주제에 대한 상세하고 유익한 뉴스레터 본문을 작성해주세요.

뉴스레터 본문 작성 시 다음 지침을 반드시 준수해주세요:
1. **사실 기반 요약 및 분석**: 주제와 직접적으로 관련된 뉴스 기사의 핵심 내용을 매우 정확하고 사실에 기반하여 요약하고 분석해야 합니다. 개인적인 의견이나 추측은 배제해주세요.
2. **최신 개발 사항 강조**: 해당 주제와 관련하여 가장 최신의 정보나 중요한 업데이트, 발전된 내용을 명확하게 식별하고 강조하여 독자에게 전달해야 합니다.
3. **간결한 배경 정보 제공**: 만약 주제가 현재 진행 중인 복잡한 사건이나 이슈의 일부일 경우, 독자의 이해를 돕기 위해 필수적인 배경 정보나 맥락을 1-2 문장으로 간결하게 제공해주세요.
4. **다양한 관점 포함 (해당되는 경우)**: 제공된 뉴스 기사들에서 해당 주제에 대한 여러 가지 중요하거나 대립하는 관점들이 제시된다면, 이러한 다양한 시각들을 간략하고 균형 있게 포함시켜야 합니다.
5. **명확하고 가독성 높은 문체**: 독자들이 내용을 쉽게 이해하고 따라갈 수 있도록 명확하고 간결하며 전문적인 문체를 사용해주세요.
6. **정확한 출처 명시**: 본문 내용 작성에 참고한 모든 뉴스 기사의 제목과 링크를 'references' 항목에 정확하게 포함시켜야 합니다.

결과는 다음 JSON 형식으로만 반환해주세요. 다른 설명이나 추가 텍스트 없이 JSON 객체만 응답해야 합니다:
{
    "text": "여기에 해당 주제에 대한 뉴스레터 본문 내용을 작성합니다.",
    "references": [
        {"title": "참고한 기사 제목 1", "link": "해당 기사 링크 1"},
        {"title": "참고한 기사 제목 2", "link": "해당 기사 링크 2"}
    ]
}"#;

#[derive(Serialize)]
struct TopicDigest<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ContentDigest<'a> {
    title: &'a str,
    link: &'a str,
    description: &'a str,
}

/// Data message for topic selection: (title, description) pairs serialized
/// as pretty-printed JSON.
pub fn topic_selection_user(articles: &[Article]) -> Result<String> {
    let digests: Vec<TopicDigest<'_>> = articles
        .iter()
        .map(|article| TopicDigest {
            title: &article.title,
            description: &article.description,
        })
        .collect();
    let serialized = serde_json::to_string_pretty(&digests)?;

    Ok(format!(
        "다음 뉴스 기사 목록을 분석하여 뉴스레터의 전체 제목과 3-5개의 하위 주제를 선정해주세요:\n\n{}\n\nJSON 형식으로만 응답해주세요.",
        serialized
    ))
}

/// Data message for content generation: the subtopic plus (title, link,
/// description) triples.
pub fn content_generation_user(subtopic: &str, articles: &[Article]) -> Result<String> {
    let digests: Vec<ContentDigest<'_>> = articles
        .iter()
        .map(|article| ContentDigest {
            title: &article.title,
            link: &article.link,
            description: &article.description,
        })
        .collect();
    let serialized = serde_json::to_string_pretty(&digests)?;

    Ok(format!(
        "다음 주제에 맞는 뉴스레터 내용을 작성해주세요:\n\n주제: {}\n\n참고할 뉴스 기사 목록:\n{}\n\nJSON 형식으로만 응답해주세요.",
        subtopic, serialized
    ))
}
