//! Response Decoder
//!
//! Normalizes raw model output into text or typed JSON. Models routinely wrap
//! payloads in a markdown code fence even when asked not to, and one specific
//! stray character has been observed spliced into otherwise valid JSON; both
//! tolerances live here. Decoding is pure; logging the raw/cleaned payloads
//! on failure is the caller's concern.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Matches a whole response wrapped in a triple-backtick fence, capturing the
/// optional language tag and the inner content.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").unwrap());

/// Stray artifact character occasionally emitted by the model mid-JSON.
///
/// Only this exact character is removed. The strip must not be widened to
/// other non-ASCII content: answers legitimately contain Vietnamese and CJK
/// text that has to survive decoding intact.
const ARTIFACT: char = '儂';

/// Errors from decoding a structured model response.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("response parsed but contained no usable items")]
    EmptyResult,
}

/// Strip a surrounding code fence, if the whole (trimmed) response is one.
fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match FENCE_RE.captures(trimmed) {
        Some(caps) => caps.get(2).map(|m| m.as_str().trim()).unwrap_or(""),
        None => trimmed,
    }
}

/// Decode a free-text response: unwrap a fence if present, trim, and return.
///
/// Always succeeds; an empty result is a valid (if uninteresting) value and
/// the caller decides whether it means "nothing was generated".
pub fn decode_text(raw: &str) -> String {
    strip_fence(raw).to_string()
}

/// The fence-stripped, artifact-stripped form of a response, as handed to the
/// JSON parser. Exposed so callers can log it next to the raw payload when a
/// decode fails.
pub fn clean_json_source(raw: &str) -> String {
    let mut source = strip_fence(raw).to_string();
    source.retain(|c| c != ARTIFACT);
    source
}

/// Decode a structured response into a JSON value.
pub fn decode_json(raw: &str) -> Result<serde_json::Value, DecodeError> {
    Ok(serde_json::from_str(&clean_json_source(raw))?)
}

/// Decode a structured response expected to be a non-empty JSON array of `T`.
///
/// A payload that is not an array, is an empty array, or whose elements lack
/// the expected shape fails with [`DecodeError::EmptyResult`]; the parse
/// never silently returns partial data.
pub fn decode_array<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, DecodeError> {
    let items = match decode_json(raw)? {
        serde_json::Value::Array(items) if !items.is_empty() => items,
        _ => return Err(DecodeError::EmptyResult),
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|_| DecodeError::EmptyResult))
        .collect()
}

/// Decode a structured response expected to be a single JSON object of shape
/// `T`. A `null` payload or one missing a required key fails with
/// [`DecodeError::EmptyResult`].
pub fn decode_object<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let value = decode_json(raw)?;
    if value.is_null() {
        return Err(DecodeError::EmptyResult);
    }
    serde_json::from_value(value).map_err(|_| DecodeError::EmptyResult)
}

/// Best-effort fallback for list endpoints: split the raw response on line
/// breaks, strip a leading `- ` marker, and drop blanks.
///
/// This may accept non-JSON noise as valid items; it is a documented
/// tolerance for responses that come back as a plain dashed list, not a
/// guaranteed-correct parse path.
pub fn split_lines_fallback(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.strip_prefix("- ").unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Card {
        question: String,
        answer: String,
    }

    #[test]
    fn test_text_passthrough() {
        assert_eq!(decode_text("  plain answer \n"), "plain answer");
    }

    #[test]
    fn test_text_unwraps_fence() {
        assert_eq!(decode_text("```\nhello world\n```"), "hello world");
        assert_eq!(decode_text("```markdown\n# Title\n\nBody\n```"), "# Title\n\nBody");
    }

    #[test]
    fn test_empty_text_is_valid() {
        assert_eq!(decode_text("   "), "");
    }

    #[test]
    fn test_json_with_fence_and_artifact() {
        let clean = r#"[{"question": "What is a closure?", "answer": "A function plus its environment."}]"#;
        let noisy =
            "```json\n[{\"question\": \"What is a closure?\", 儂\"answer\": \"A function plus its environment.\"}]\n```";
        let from_noisy: Vec<Card> = decode_array(noisy).unwrap();
        let from_clean: Vec<Card> = decode_array(clean).unwrap();
        assert_eq!(from_noisy, from_clean);
    }

    #[test]
    fn test_vietnamese_text_survives() {
        let raw = r#"{"question": "Vòng lặp là gì?", "answer": "Cấu trúc lặp lại một khối lệnh."}"#;
        let card: Card = decode_object(raw).unwrap();
        assert_eq!(card.question, "Vòng lặp là gì?");
    }

    #[test]
    fn test_empty_array_is_empty_result() {
        let err = decode_array::<Card>("[]").unwrap_err();
        assert!(matches!(err, DecodeError::EmptyResult));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = decode_array::<Card>("not json").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson(_)));
    }

    #[test]
    fn test_missing_key_is_empty_result() {
        let err = decode_object::<Card>(r#"{"question": "only half"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyResult));
        let err = decode_object::<Card>("null").unwrap_err();
        assert!(matches!(err, DecodeError::EmptyResult));
    }

    #[test]
    fn test_object_inside_array_shape_mismatch() {
        let err = decode_array::<Card>(r#"[{"question": "q"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyResult));
    }

    #[test]
    fn test_line_fallback() {
        let lines = split_lines_fallback("- Add OAuth sign-in\n- Ship a dark mode\n\nOffline support\n");
        assert_eq!(lines, vec!["Add OAuth sign-in", "Ship a dark mode", "Offline support"]);
    }
}
