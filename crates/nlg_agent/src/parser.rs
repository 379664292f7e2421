use serde::de::DeserializeOwned;

/// Best-effort extraction of a JSON object from model output.
///
/// The model is instructed to answer with a bare JSON object but is not
/// guaranteed to comply. Attempt a strict parse first; if that fails, retry
/// on the substring between the first `{` and the last `}`; if that fails
/// too (or no such pair exists), hand back `fallback` unchanged. Parse
/// failures never escape this function.
pub fn extract_json<T: DeserializeOwned>(raw: &str, fallback: T) -> T {
    if let Ok(parsed) = serde_json::from_str(raw) {
        return parsed;
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(parsed) = serde_json::from_str(&raw[start..=end]) {
                return parsed;
            }
        }
    }

    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlg_core::TopicSelection;

    fn fallback() -> TopicSelection {
        TopicSelection {
            title: "대체 제목".to_string(),
            subtopics: vec!["대체 주제".to_string()],
        }
    }

    #[test]
    fn test_strict_json_roundtrip() {
        let raw = r#"{"title":"X","subtopics":["a","b","c"]}"#;
        let parsed: TopicSelection = extract_json(raw, fallback());
        assert_eq!(parsed.title, "X");
        assert_eq!(parsed.subtopics, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_braceless_text_yields_fallback() {
        let parsed: TopicSelection = extract_json("no json here at all", fallback());
        assert_eq!(parsed, fallback());
    }

    #[test]
    fn test_substring_extraction() {
        let raw = "garbage{\"title\":\"X\",\"subtopics\":[\"a\"]}trailing";
        let parsed: TopicSelection = extract_json(raw, fallback());
        assert_eq!(parsed.title, "X");
        assert_eq!(parsed.subtopics, vec!["a"]);
    }

    #[test]
    fn test_unparseable_braces_yield_fallback() {
        let parsed: TopicSelection = extract_json("{not valid json}", fallback());
        assert_eq!(parsed, fallback());
    }

    #[test]
    fn test_reversed_braces_yield_fallback() {
        let parsed: TopicSelection = extract_json("}{", fallback());
        assert_eq!(parsed, fallback());
    }

    #[test]
    fn test_wrong_shape_yields_fallback() {
        // Valid JSON, wrong shape: absorbed into the fallback as well
        let parsed: TopicSelection = extract_json(r#"{"unexpected": 1}"#, fallback());
        assert_eq!(parsed, fallback());
    }
}
