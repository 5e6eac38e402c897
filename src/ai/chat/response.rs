use serde_json::Value;

/// Prefix that marks payload lines in the pseudo-stream response body.
const DATA_LINE_PREFIX: &str = "data: ";

/// Scans a newline-delimited pseudo-stream body for the first assistant turn.
///
/// The Anura completion endpoint answers non-streaming requests with a body
/// formatted as if it were streamed: one JSON object per line, each prefixed
/// with `data: `. Only lines carrying that exact prefix are considered; a
/// line whose payload fails to parse, or whose shape is not an assistant
/// message with string content, is skipped silently. The first match wins —
/// later assistant lines are ignored.
///
/// # Arguments
/// * `body` - The full response body text
///
/// # Returns
/// The assistant's reply with leading/trailing whitespace trimmed, or `None`
/// when no line matches.
pub fn first_assistant_reply(body: &str) -> Option<String> {
    for line in body.split('\n') {
        if !line.starts_with(DATA_LINE_PREFIX) {
            continue;
        }
        let payload = &line[DATA_LINE_PREFIX.len()..];
        let parsed: Value = match serde_json::from_str(payload) {
            Ok(value) => value,
            // Malformed lines are discarded, only total absence of a valid
            // line is an error for the caller.
            Err(_) => continue,
        };

        if parsed.pointer("/message/role").and_then(Value::as_str) != Some("assistant") {
            continue;
        }
        if let Some(content) = parsed.pointer("/message/content").and_then(Value::as_str) {
            return Some(content.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_assistant_match_wins() {
        let body = concat!(
            "data: {\"message\":{\"role\":\"system\",\"content\":\"setup\"}}\n",
            "data: {\"message\":{\"role\":\"user\",\"content\":\"question\"}}\n",
            "data: {\"message\":{\"role\":\"assistant\",\"content\":\"first answer\"}}\n",
            "data: {\"message\":{\"role\":\"assistant\",\"content\":\"second answer\"}}\n",
        );
        assert_eq!(first_assistant_reply(body).as_deref(), Some("first answer"));
    }

    #[test]
    fn test_content_is_trimmed() {
        let body = "data: {\"message\":{\"role\":\"assistant\",\"content\":\"  answer\\n\"}}";
        assert_eq!(first_assistant_reply(body).as_deref(), Some("answer"));
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let body =
            "data: {\"message\":{\"role\":\"assistant\",\"content\":\" line one\\nline  two \"}}";
        assert_eq!(
            first_assistant_reply(body).as_deref(),
            Some("line one\nline  two")
        );
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let body = concat!(
            "data: {not valid json}\n",
            "data: [1, 2\n",
            "data: {\"message\":{\"role\":\"assistant\",\"content\":\"ok\"}}\n",
        );
        assert_eq!(first_assistant_reply(body).as_deref(), Some("ok"));
    }

    #[test]
    fn test_all_lines_malformed_yields_none() {
        let body = "data: {oops\ndata: also broken\n";
        assert_eq!(first_assistant_reply(body), None);
    }

    #[test]
    fn test_no_data_lines_yields_none() {
        let body = "{\"message\":{\"role\":\"assistant\",\"content\":\"unprefixed\"}}\n";
        assert_eq!(first_assistant_reply(body), None);
    }

    #[test]
    fn test_prefix_must_match_exactly() {
        // "data:" without the trailing space is not a payload line.
        let body = "data:{\"message\":{\"role\":\"assistant\",\"content\":\"no space\"}}";
        assert_eq!(first_assistant_reply(body), None);
    }

    #[test]
    fn test_non_assistant_roles_are_ignored() {
        let body = "data: {\"message\":{\"role\":\"user\",\"content\":\"not me\"}}";
        assert_eq!(first_assistant_reply(body), None);
    }

    #[test]
    fn test_non_string_content_is_skipped() {
        let body = concat!(
            "data: {\"message\":{\"role\":\"assistant\",\"content\":42}}\n",
            "data: {\"message\":{\"role\":\"assistant\",\"content\":\"fallback\"}}\n",
        );
        assert_eq!(first_assistant_reply(body).as_deref(), Some("fallback"));
    }

    #[test]
    fn test_crlf_bodies_parse() {
        let body = "data: {\"message\":{\"role\":\"assistant\",\"content\":\"windows\"}}\r\n";
        assert_eq!(first_assistant_reply(body).as_deref(), Some("windows"));
    }
}
