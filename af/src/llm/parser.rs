//! Provider reply parsing and code extraction
//!
//! Whatever the provider returns - text, an error, or nothing - callers
//! always get a `ProviderReply`. Errors never cross this boundary as
//! panics or `Err`s: they surface in the `error` field with `text`
//! empty, and absence of extractable code is not an error at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LlmError;

/// Fallback message when the provider gives no usable detail
const GENERIC_FAILURE: &str = "Failed to generate content";

/// Parsed provider reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderReply {
    /// Full reply text (empty on failure)
    pub text: String,

    /// Concatenated fenced code regions; absent when the reply contained
    /// none (absent and empty are distinct states)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Provider-level failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderReply {
    /// Build a reply from successful provider text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let code = extract_code(&text);
        debug!(text_len = text.len(), has_code = code.is_some(), "ProviderReply::from_text");
        Self {
            text,
            code,
            error: None,
        }
    }

    /// Build a failure reply from a provider error message
    pub fn from_error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        Self {
            text: String::new(),
            code: None,
            error: Some(message),
        }
    }

    /// Build a reply from a provider call result
    pub fn from_result(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => Self::from_text(text),
            Err(e) => Self::from_error(e.to_string()),
        }
    }

    /// Whether the provider call failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Extract fenced code regions from reply text
///
/// Regions are delimited by triple-backtick fences, optionally tagged
/// with a language hint on the opening fence line. Fences and tags are
/// stripped; regions are concatenated in order of appearance, separated
/// by a blank line. Returns `None` when no region is found or every
/// region is empty.
pub fn extract_code(text: &str) -> Option<String> {
    let mut regions = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("```") {
        let after_open = &rest[open + 3..];
        let Some(close) = after_open.find("```") else {
            break;
        };

        let region = &after_open[..close];
        regions.push(strip_language_tag(region).trim_end_matches('\n').to_string());

        rest = &after_open[close + 3..];
    }

    if regions.is_empty() {
        debug!("extract_code: no fenced regions");
        return None;
    }

    let code = regions.join("\n\n");
    if code.is_empty() { None } else { Some(code) }
}

/// Drop the language hint line from the start of a fenced region
///
/// The hint is a single bare token on the opening fence line (`html`,
/// `tsx`, ...). A region without a newline has no room for a hint line
/// and is returned untouched.
fn strip_language_tag(region: &str) -> &str {
    let Some(newline) = region.find('\n') else {
        return region;
    };

    let first_line = region[..newline].trim();
    let is_tag = !first_line.is_empty()
        && first_line
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '#' | '.'));

    if is_tag || first_line.is_empty() {
        &region[newline + 1..]
    } else {
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_tagged_region() {
        let code = extract_code("Here:\n```html\n<div></div>\n```\n").unwrap();
        assert_eq!(code, "<div></div>");
    }

    #[test]
    fn test_extract_untagged_region() {
        let code = extract_code("```\nbody { color: red; }\n```").unwrap();
        assert_eq!(code, "body { color: red; }");
    }

    #[test]
    fn test_extract_multiple_regions_in_order() {
        let text = "First:\n```html\n<p>one</p>\n```\nSecond:\n```js\nalert(2);\n```\n";
        let code = extract_code(text).unwrap();
        assert_eq!(code, "<p>one</p>\n\nalert(2);");
    }

    #[test]
    fn test_no_regions_is_absent() {
        assert_eq!(extract_code("Just prose, no code."), None);
    }

    #[test]
    fn test_empty_region_is_absent_not_empty() {
        assert_eq!(extract_code("```\n```"), None);
    }

    #[test]
    fn test_unclosed_fence_is_ignored() {
        assert_eq!(extract_code("```html\n<div>"), None);
    }

    #[test]
    fn test_multiline_content_preserved() {
        let text = "```html\n<html>\n<body>\n  <p>hi</p>\n</body>\n</html>\n```";
        let code = extract_code(text).unwrap();
        assert_eq!(code, "<html>\n<body>\n  <p>hi</p>\n</body>\n</html>");
    }

    #[test]
    fn test_unknown_language_tag_also_stripped() {
        let code = extract_code("```python\nprint('hi')\n```").unwrap();
        assert_eq!(code, "print('hi')");
    }

    #[test]
    fn test_first_line_of_code_not_mistaken_for_tag() {
        // A first line with spaces or punctuation is content, not a hint.
        let code = extract_code("```\n<div class=\"a\"></div>\nmore\n```").unwrap();
        assert_eq!(code, "<div class=\"a\"></div>\nmore");
    }

    #[test]
    fn test_from_text_populates_code() {
        let reply = ProviderReply::from_text("Sure!\n```html\n<p>x</p>\n```\n");
        assert!(reply.text.starts_with("Sure!"));
        assert_eq!(reply.code.as_deref(), Some("<p>x</p>"));
        assert!(reply.error.is_none());
        assert!(!reply.is_error());
    }

    #[test]
    fn test_from_text_without_code() {
        let reply = ProviderReply::from_text("No code here");
        assert_eq!(reply.text, "No code here");
        assert!(reply.code.is_none());
    }

    #[test]
    fn test_from_error_has_empty_text() {
        let reply = ProviderReply::from_error("API key not valid");
        assert_eq!(reply.text, "");
        assert!(reply.code.is_none());
        assert_eq!(reply.error.as_deref(), Some("API key not valid"));
        assert!(reply.is_error());
    }

    #[test]
    fn test_from_error_empty_message_falls_back() {
        let reply = ProviderReply::from_error("");
        assert_eq!(reply.error.as_deref(), Some("Failed to generate content"));
    }

    #[test]
    fn test_from_result() {
        let ok = ProviderReply::from_result(Ok("text".to_string()));
        assert_eq!(ok.text, "text");

        let err = ProviderReply::from_result(Err(LlmError::InvalidResponse("boom".to_string())));
        assert_eq!(err.text, "");
        assert!(err.error.as_deref().unwrap().contains("boom"));
    }

    #[test]
    fn test_serde_omits_absent_fields() {
        let reply = ProviderReply::from_text("plain");
        let json = serde_json::to_string(&reply).unwrap();
        assert!(!json.contains("code"));
        assert!(!json.contains("error"));
    }
}
