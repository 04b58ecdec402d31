use logos::{FilterResult, Logos};

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token kind in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language, including the
/// keywords and operators that are reserved but not yet given a grammar rule.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `%`
    #[token("%")]
    Percent,
    /// A lone `_`, reserved as the wildcard for `match`.
    #[token("_", priority = 3)]
    Underscore,

    /// `+`
    #[token("+")]
    Plus,
    /// `+=`
    #[token("+=")]
    PlusEqual,
    /// `-`
    #[token("-")]
    Minus,
    /// `-=`
    #[token("-=")]
    MinusEqual,
    /// `->`
    #[token("->")]
    MinusGreater,
    /// `/`
    #[token("/")]
    Slash,
    /// `/=`
    #[token("/=")]
    SlashEqual,
    /// `*`
    #[token("*")]
    Star,
    /// `*=`
    #[token("*=")]
    StarEqual,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `**=`
    #[token("**=")]
    DoubleStarEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `&=`
    #[token("&=")]
    AmpersandEqual,
    /// `|`
    #[token("|")]
    Pipe,
    /// `|=`
    #[token("|=")]
    PipeEqual,
    /// `~`
    #[token("~")]
    Tilde,
    /// `~=`
    #[token("~=")]
    TildeEqual,
    /// `^`
    #[token("^")]
    Caret,
    /// `^=`
    #[token("^=")]
    CaretEqual,

    /// Identifier tokens; variable or type names such as `x` or `int`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// String literal tokens, such as `"hello"`. The bytes between the
    /// quotes become the value verbatim; there is no escape processing.
    /// An opening quote that never closes is an error.
    #[regex(r#""[^"]*""#)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    Str,
    /// Character literal tokens, such as `'c'`. Exactly one character must
    /// appear between the quotes; empty, multi-character and unterminated
    /// literals are errors.
    #[regex(r"'[^']'")]
    #[regex(r"''", empty_char)]
    #[regex(r"'[^']{2,}'", malformed_char)]
    #[regex(r"'[^']*", unterminated_char)]
    Char,
    /// Integer literal tokens, such as `42`.
    ///
    /// The second pattern reproduces the scanner contract for malformed
    /// numeric runs: a letter inside the run, or a second decimal point,
    /// marks the whole run illegal but keeps consuming it, so `1991we723`
    /// and `123.4.5` each become a single illegal token.
    #[regex(r"[0-9]+", priority = 3)]
    #[regex(r"[0-9][0-9a-zA-Z]*(\.[0-9][0-9a-zA-Z]*)*", invalid_number, priority = 2)]
    Integer,
    /// Real (floating point) literal tokens, such as `3.14`. The decimal
    /// point belongs to the literal only when a digit follows it.
    #[regex(r"[0-9]+\.[0-9]+", priority = 3)]
    Real,

    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `true`
    #[token("true")]
    True,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `while`
    #[token("while")]
    While,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `return`
    #[token("return")]
    Return,
    /// `val`
    #[token("val")]
    Val,
    /// `var`
    #[token("var")]
    Var,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `fall`
    #[token("fall")]
    Fall,
    /// `match`
    #[token("match")]
    Match,

    /// Block comments run to the first `*/`; they do not nest.
    #[token("/*", block_comment)]
    BlockComment,

    /// End of input. Appended once by [`Lexer::tokenize`].
    Eof,
    /// A lexeme the scanner recognized as malformed. Emitted alongside a
    /// [`LexError`] so downstream passes can still report a position.
    Illegal,
}

/// Consumes a block comment, including the terminating `*/`.
///
/// Scanning stops at the first terminator; block comments do not nest.
/// Reaching the end of input first consumes the rest of the source and
/// reports the comment as unterminated.
fn block_comment(lex: &mut logos::Lexer<TokenKind>) -> FilterResult<(), LexErrorKind> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        },
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(LexErrorKind::UnterminatedBlockComment)
        },
    }
}

/// Rejects a numeric run containing letters or a second decimal point.
fn invalid_number(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::InvalidNumber)
}

fn unterminated_string(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn empty_char(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::EmptyChar)
}

fn malformed_char(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::MalformedChar)
}

fn unterminated_char(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedChar)
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Percent => "'%'",
            Self::Underscore => "'_'",
            Self::Plus => "'+'",
            Self::PlusEqual => "'+='",
            Self::Minus => "'-'",
            Self::MinusEqual => "'-='",
            Self::MinusGreater => "'->'",
            Self::Slash => "'/'",
            Self::SlashEqual => "'/='",
            Self::Star => "'*'",
            Self::StarEqual => "'*='",
            Self::DoubleStar => "'**'",
            Self::DoubleStarEqual => "'**='",
            Self::Bang => "'!'",
            Self::BangEqual => "'!='",
            Self::Equal => "'='",
            Self::EqualEqual => "'=='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::DoubleAmpersand => "'&&'",
            Self::DoublePipe => "'||'",
            Self::Ampersand => "'&'",
            Self::AmpersandEqual => "'&='",
            Self::Pipe => "'|'",
            Self::PipeEqual => "'|='",
            Self::Tilde => "'~'",
            Self::TildeEqual => "'~='",
            Self::Caret => "'^'",
            Self::CaretEqual => "'^='",
            Self::Ident => "identifier",
            Self::Str => "string",
            Self::Char => "char",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::False => "'false'",
            Self::True => "'true'",
            Self::For => "'for'",
            Self::In => "'in'",
            Self::While => "'while'",
            Self::Fun => "'fun'",
            Self::Return => "'return'",
            Self::Val => "'val'",
            Self::Var => "'var'",
            Self::Continue => "'continue'",
            Self::Fall => "'fall'",
            Self::Match => "'match'",
            Self::BlockComment => "comment",
            Self::Eof => "''",
            Self::Illegal => "illegal token",
        };
        write!(f, "{s}")
    }
}

/// A location in the source text, with 1-based row and column.
/// The column points at the first character of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The 1-based source row.
    pub row: usize,
    /// The 1-based source column.
    pub col: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A single lexed token: its kind, the exact source text matched, and the
/// position of the lexeme's first character. Tokens are immutable after
/// creation; the EOF token carries an empty lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The exact source text of the lexeme.
    pub text: String,
    /// Where the lexeme starts.
    pub pos:  Position,
}

/// Scans source text into tokens.
///
/// The lexer performs a single pass over the input, accumulating errors
/// instead of aborting: malformed lexemes are reported and still emitted as
/// [`TokenKind::Illegal`] tokens so later passes can point at them. The
/// token sequence always ends with exactly one EOF token.
///
/// # Example
/// ```
/// use runa::interpreter::lexer::{Lexer, TokenKind};
///
/// let (tokens, errors) = Lexer::new("val x = 1;").tokenize();
///
/// assert!(errors.is_empty());
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Val,
///                 TokenKind::Ident,
///                 TokenKind::Equal,
///                 TokenKind::Integer,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source:      &'src str,
    line_starts: Vec<usize>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over `source`.
    ///
    /// Builds the table of line start offsets used to convert byte spans
    /// into row/column positions, so multi-line strings and comments keep
    /// every later token's position exact.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.bytes()
                                 .enumerate()
                                 .filter_map(|(i, b)| (b == b'\n').then_some(i + 1)));
        Self { source, line_starts }
    }

    /// Scans the entire input and returns the tokens and the errors found.
    ///
    /// Lexing never aborts; the error list covers the whole input and the
    /// token list is terminated by a single EOF token.
    #[must_use]
    pub fn tokenize(&self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        let mut lexer = TokenKind::lexer(self.source);

        while let Some(scanned) = lexer.next() {
            let pos = self.position(lexer.span().start);
            match scanned {
                Ok(kind) => {
                    tokens.push(Token { kind,
                                        text: lexer.slice().to_string(),
                                        pos });
                },
                Err(kind) => {
                    errors.push(LexError { kind,
                                           text: lexer.slice().to_string(),
                                           pos });
                    tokens.push(Token { kind: TokenKind::Illegal,
                                        text: lexer.slice().to_string(),
                                        pos });
                },
            }
        }

        tokens.push(Token { kind: TokenKind::Eof,
                            text: String::new(),
                            pos:  self.position(self.source.len()), });

        (tokens, errors)
    }

    /// Converts a byte offset into a 1-based row/column position.
    fn position(&self, offset: usize) -> Position {
        let row = self.line_starts.partition_point(|start| *start <= offset);
        Position { row,
                   col: offset - self.line_starts[row - 1] + 1 }
    }
}
