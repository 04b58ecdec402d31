use crate::interpreter::lexer::Position;

/// Classifies a malformed lexeme.
///
/// Doubles as the error type of the generated scanner, so every rejected
/// pattern carries its reason out of the scanning loop. The default kind
/// covers input no pattern matches at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no recognized lexeme.
    #[default]
    UnexpectedCharacter,
    /// A string literal whose closing quote is missing.
    UnterminatedString,
    /// A character literal whose closing quote is missing.
    UnterminatedChar,
    /// A character literal with nothing between the quotes.
    EmptyChar,
    /// A character literal with more than one character between the quotes.
    MalformedChar,
    /// A block comment that is still open at the end of input.
    UnterminatedBlockComment,
    /// A numeric run containing letters or a second decimal point.
    InvalidNumber,
}

/// Represents a single error found while scanning.
///
/// The lexer keeps scanning after an error; it emits an illegal token for
/// the offending lexeme and records one of these alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// What was wrong with the lexeme.
    pub kind: LexErrorKind,
    /// The offending source text.
    pub text: String,
    /// Where the lexeme starts.
    pub pos:  Position,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - ", self.pos)?;
        match self.kind {
            LexErrorKind::UnexpectedCharacter => {
                write!(f, "Unexpected character '{}'", self.text)
            },
            LexErrorKind::UnterminatedString => write!(f, "Unterminated string"),
            LexErrorKind::UnterminatedChar => write!(f, "Unterminated character literal"),
            LexErrorKind::EmptyChar => write!(f, "Empty character literal"),
            LexErrorKind::MalformedChar => write!(f,
                                                  "Character literal {} must contain exactly one character",
                                                  self.text),
            LexErrorKind::UnterminatedBlockComment => write!(f, "Unterminated block comment"),
            LexErrorKind::InvalidNumber => write!(f, "Invalid numeric literal '{}'", self.text),
        }
    }
}

impl std::error::Error for LexError {}
