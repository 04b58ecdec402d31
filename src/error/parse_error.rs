use crate::interpreter::lexer::{Position, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// The token kind the parser required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source position of the found token.
        pos:      Position,
    },
    /// An expression was required but the next token cannot start one.
    ExpectedExpression {
        /// The token kind actually found.
        found: TokenKind,
        /// The source position of the found token.
        pos:   Position,
    },
    /// The left-hand side of `=` was not a plain identifier.
    InvalidAssignmentTarget {
        /// The source position of the `=` token.
        pos: Position,
    },
    /// A declaration supplied neither a type annotation nor an initializer.
    MissingTypeOrInitializer {
        /// The declared variable name.
        name: String,
        /// The source position of the variable name.
        pos:  Position,
    },
}

impl ParseError {
    /// Gets the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { pos, .. }
            | Self::ExpectedExpression { pos, .. }
            | Self::InvalidAssignmentTarget { pos }
            | Self::MissingTypeOrInitializer { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, pos } => {
                write!(f, "{pos} - Unexpected token. Expected {expected}, found {found}")
            },
            Self::ExpectedExpression { found, pos } => {
                write!(f, "{pos} - Expected expression, found {found}")
            },
            Self::InvalidAssignmentTarget { pos } => {
                write!(f, "{pos} - Invalid assignment target")
            },
            Self::MissingTypeOrInitializer { name, pos } => {
                write!(f, "{pos} - Variable '{name}' needs either a type or an initial value")
            },
        }
    }
}

impl std::error::Error for ParseError {}
