//! Fence stripping for the backend's semi-structured reply.
//!
//! Stage one of the two-stage parse: isolate the JSON substring before
//! strict parsing. The closing marker search uses the *last* occurrence
//! so fence-like substrings inside the JSON body do not truncate it.

const OPENING_FENCE: &str = "```json";
const CLOSING_FENCE: &str = "```";

/// Returns the candidate JSON substring of `raw`, trimmed.
///
/// If an opening fence and a closing fence after it are both present,
/// only the content between them is returned. An opening fence with no
/// closing counterpart yields an empty string, which the strict parse
/// stage rejects. Without fences the whole input is returned trimmed,
/// making the operation idempotent on already-unwrapped text.
pub fn strip_fences(raw: &str) -> &str {
    if let Some(open) = raw.find(OPENING_FENCE) {
        let content_start = open + OPENING_FENCE.len();
        if let Some(close) = raw.rfind(CLOSING_FENCE) {
            if close >= content_start {
                return raw[content_start..close].trim();
            }
        }
        return "";
    }
    raw.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_between_fences() {
        let raw = "Here is the result:\n```json\n{\"a\": 1}\n```\nDone.";
        assert_eq!(strip_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn unfenced_input_is_returned_trimmed() {
        assert_eq!(strip_fences("  {\"a\": 1}  \n"), "{\"a\": 1}");
    }

    #[test]
    fn idempotent_on_unwrapped_text() {
        let raw = "{\"a\": 1}";
        let once = strip_fences(raw);
        assert_eq!(once, raw);
        assert_eq!(strip_fences(once), once);
    }

    #[test]
    fn uses_last_closing_fence() {
        // a fence-like run inside the JSON must not truncate extraction
        let raw = "```json\n{\"claim\": \"uses ``` in text\", \"n\": 2}\n```";
        assert_eq!(
            strip_fences(raw),
            "{\"claim\": \"uses ``` in text\", \"n\": 2}"
        );
    }

    #[test]
    fn opening_fence_without_closing_yields_nothing() {
        assert_eq!(strip_fences("```json\n{\"a\": 1}"), "");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_fences(""), "");
    }
}
