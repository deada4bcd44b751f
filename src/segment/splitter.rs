use super::types::ArgumentFragment;
use crate::error::ProbeError;
use crate::lexer::{lex, Token, TokenKind};

/// Result of segmenting one call expression: the fragments recovered so
/// far, plus the failure (if any) that stopped the scan early. Callers pad
/// missing arguments with placeholder labels instead of failing.
#[derive(Debug)]
pub struct SplitOutcome {
    pub fragments: Vec<ArgumentFragment>,
    pub error: Option<ProbeError>,
}

/// Split the source of a `callee(...)` call into per-argument fragments.
///
/// Walks the token stream past the callee name and its opening
/// parenthesis, then closes a fragment at every comma or closing
/// parenthesis seen at bracket depth 0. Nested calls, literals and
/// parenthesized expressions raise the depth and never split a fragment.
pub fn split_call(source: &str, callee: &str) -> SplitOutcome {
    let tokens = lex(source);

    let mut i = match tokens
        .iter()
        .position(|t| t.kind == TokenKind::Name && t.text == callee)
    {
        // Skip exactly one token: the call's opening parenthesis.
        Some(pos) => pos + 2,
        None => {
            return SplitOutcome {
                fragments: Vec::new(),
                error: Some(ProbeError::SourceNotFound(callee.to_string())),
            }
        }
    };

    let mut fragments = Vec::new();
    let mut buf: Vec<&Token> = Vec::new();
    let mut depth: u32 = 0;

    while i < tokens.len() {
        let t = &tokens[i];
        i += 1;

        if depth == 0 && is_comma(t) {
            fragments.push(close_fragment(source, &buf));
            buf.clear();
            continue;
        }
        if depth == 0 && t.kind == TokenKind::CloseDelim {
            if t.text != ")" {
                // A stray `]` or `}` before the call's own closer: the
                // captured window is malformed. Keep what is complete.
                return SplitOutcome {
                    fragments,
                    error: Some(ProbeError::UnbalancedDelimiters),
                };
            }
            if !buf.is_empty() {
                fragments.push(close_fragment(source, &buf));
            }
            return SplitOutcome {
                fragments,
                error: None,
            };
        }

        buf.push(t);
        match t.kind {
            TokenKind::OpenDelim => depth += 1,
            TokenKind::CloseDelim => depth -= 1,
            _ => {}
        }
    }

    // Ran out of tokens before the closing parenthesis; the buffered
    // tail is suspect and is dropped rather than reported half-lexed.
    SplitOutcome {
        fragments,
        error: Some(ProbeError::UnbalancedDelimiters),
    }
}

fn is_comma(t: &Token) -> bool {
    t.kind == TokenKind::Op && t.text == ","
}

fn close_fragment(source: &str, buf: &[&Token]) -> ArgumentFragment {
    let source_text = match (buf.first(), buf.last()) {
        (Some(first), Some(last)) => normalize_whitespace(&source[first.start..last.end]),
        _ => String::new(),
    };

    let interesting = buf
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Name | TokenKind::FStr));

    ArgumentFragment {
        source_text,
        interesting,
        keyword: keyword_target(buf),
    }
}

/// Flatten a possibly multi-line slice to single-spaced text.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `name=value` keyword arguments label by the target identifier. A second
/// `=` right after the first means comparison, not assignment.
fn keyword_target(buf: &[&Token]) -> Option<String> {
    match buf {
        [name, eq, value, ..]
            if name.kind == TokenKind::Name
                && eq.kind == TokenKind::Op
                && eq.text == "="
                && !(value.kind == TokenKind::Op && value.text == "=") =>
        {
            Some(name.text.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(outcome: &SplitOutcome) -> Vec<&str> {
        outcome
            .fragments
            .iter()
            .map(|f| f.source_text.as_str())
            .collect()
    }

    #[test]
    fn splits_flat_arguments() {
        let out = split_call("probe(a, b, c)", "probe");
        assert_eq!(texts(&out), vec!["a", "b", "c"]);
        assert!(out.error.is_none());
    }

    #[test]
    fn nested_call_commas_do_not_split() {
        let out = split_call("probe(f(x, y), z)", "probe");
        assert_eq!(texts(&out), vec!["f(x, y)", "z"]);
    }

    #[test]
    fn nested_literals_keep_depth() {
        let out = split_call("probe([1, 2], {3: 4}, (5, 6))", "probe");
        assert_eq!(texts(&out), vec!["[1, 2]", "{3: 4}", "(5, 6)"]);
    }

    #[test]
    fn multi_line_call_flattens_to_one_line() {
        let out = split_call("probe(\n    total,\n    items + extra,\n)", "probe");
        assert_eq!(texts(&out), vec!["total", "items + extra"]);
    }

    #[test]
    fn literals_are_boring_names_are_interesting() {
        let out = split_call(r#"probe(1, "lit", x)"#, "probe");
        let flags: Vec<bool> = out.fragments.iter().map(|f| f.interesting).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn interpolated_strings_are_interesting() {
        let out = split_call(r#"probe(f"n={n}", "plain")"#, "probe");
        assert!(out.fragments[0].interesting);
        assert!(!out.fragments[1].interesting);
    }

    #[test]
    fn keyword_argument_reports_target_identifier() {
        let out = split_call("probe(count=10, x == y)", "probe");
        assert_eq!(out.fragments[0].keyword.as_deref(), Some("count"));
        assert_eq!(out.fragments[1].keyword, None);
    }

    #[test]
    fn missing_callee_yields_no_fragments() {
        let out = split_call("something_else(a, b)", "probe");
        assert!(out.fragments.is_empty());
        assert!(matches!(out.error, Some(ProbeError::SourceNotFound(_))));
    }

    #[test]
    fn truncated_source_keeps_completed_fragments() {
        let out = split_call("probe(a, b, f(c", "probe");
        assert_eq!(texts(&out), vec!["a", "b"]);
        assert!(matches!(out.error, Some(ProbeError::UnbalancedDelimiters)));
    }

    #[test]
    fn empty_argument_list() {
        let out = split_call("probe()", "probe");
        assert!(out.fragments.is_empty());
        assert!(out.error.is_none());
    }
}
