use logos::Logos;

/// Raw token from logos, before spans are resolved into line/column
/// positions. Whitespace is skipped; string literals may span newlines.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    // Template/format string: a prefix letter marks the literal as
    // interpolated text. Must outrank the plain Name rule by length,
    // which logos' longest-match does on its own.
    #[regex(r#"[fF][rR]?"([^"\\]|\\.)*""#)]
    #[regex(r#"[fF][rR]?'([^'\\]|\\.)*'"#)]
    FStr,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r#"'([^'\\]|\\.)*'"#)]
    Str,

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("(")]
    #[token("[")]
    #[token("{")]
    Open,

    #[token(")")]
    #[token("]")]
    #[token("}")]
    Close,

    // Single-character operators; multi-character operators arrive as
    // runs of these, which is enough to slice argument text faithfully.
    #[regex(r"[-+*/%<>=!&|^~.,:;@#?$]")]
    Op,
}

/// Lexical class of one token, as consumed by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Name,
    /// Plain string literal.
    Str,
    /// Interpolated/format string literal (prefix-marked).
    FStr,
    Number,
    Op,
    OpenDelim,
    CloseDelim,
    /// Anything the lexer could not classify.
    Other,
}

/// One lexed token, borrowing its text from the call-site source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte range in the lexed source.
    pub start: usize,
    pub end: usize,
    /// 1-based position of the token's first character.
    pub line: u32,
    pub col: u32,
}
