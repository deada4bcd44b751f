mod token;

pub use token::{Token, TokenKind};

use logos::Logos;
use token::RawToken;

/// Lex call-site source into a flat token stream.
///
/// Never fails: slices the lexer cannot classify come back as
/// [`TokenKind::Other`] so the stream always covers the source.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    // Incremental line/column tracking: spans arrive in source order.
    let mut line: u32 = 1;
    let mut col: u32 = 1;
    let mut scanned = 0usize;

    for (raw, span) in RawToken::lexer(source).spanned() {
        for ch in source[scanned..span.start].chars() {
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        scanned = span.start;

        let kind = match raw {
            Ok(RawToken::Name) => TokenKind::Name,
            Ok(RawToken::Str) => TokenKind::Str,
            Ok(RawToken::FStr) => TokenKind::FStr,
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::Op) => TokenKind::Op,
            Ok(RawToken::Open) => TokenKind::OpenDelim,
            Ok(RawToken::Close) => TokenKind::CloseDelim,
            Err(()) => TokenKind::Other,
        };

        out.push(Token {
            kind,
            text: &source[span.start..span.end],
            start: span.start,
            end: span.end,
            line,
            col,
        });
    }

    out
}
