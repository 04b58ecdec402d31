use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

/// Result type used by all parser productions.
pub type ParseResult<T> = Result<T, ParseError>;

/// Token kinds that can begin a statement; `synchronize` stops skipping
/// when it sees one of these.
const STATEMENT_START: &[TokenKind] = &[TokenKind::For,
                                        TokenKind::Fun,
                                        TokenKind::If,
                                        TokenKind::Return,
                                        TokenKind::Var,
                                        TokenKind::Val,
                                        TokenKind::While];

/// A recursive descent parser over a lexed token sequence.
///
/// The parser produces a list of top-level statements and accumulates
/// every error it finds instead of stopping at the first one. After an
/// error it synchronizes to the next statement boundary and keeps going,
/// so one malformed statement does not hide the rest of the input.
///
/// # Example
/// ```
/// use runa::interpreter::{lexer::Lexer, parser::Parser};
///
/// let (tokens, _) = Lexer::new("val x = 1 + 2;").tokenize();
/// let (statements, errors) = Parser::new(tokens).parse();
///
/// assert!(errors.is_empty());
/// assert_eq!(statements.len(), 1);
/// ```
pub struct Parser {
    tokens:  Vec<Token>,
    current: usize,
    errors:  Vec<ParseError>,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// The token sequence must be terminated by an EOF token, as produced
    /// by [`Lexer::tokenize`](crate::interpreter::lexer::Lexer::tokenize).
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens,
               current: 0,
               errors: Vec::new() }
    }

    /// Parses the entire input.
    ///
    /// Returns the list of top-level statements together with every error
    /// found. Each returned statement is well formed on its own; the
    /// statements a reported error belongs to are dropped during
    /// synchronization.
    #[must_use]
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.statement() {
                Ok(statement) => statements.push(statement),
                Err(_) => self.synchronize(),
            }
        }

        (statements, self.errors)
    }

    /// Checks if the next token is one of `kinds`, advancing when it is.
    pub(in crate::interpreter::parser) fn expect(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.contains(&self.peek().kind) {
            self.advance();
            return true;
        }

        false
    }

    /// Checks if the next token is of `kind` without advancing.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    /// Advances past the next token when it is of `kind`; otherwise
    /// records and returns an error without advancing.
    pub(in crate::interpreter::parser) fn consume(&mut self, kind: TokenKind)
                                                  -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let found = self.peek().clone();
        Err(self.report(ParseError::UnexpectedToken { expected: kind,
                                                      found: found.kind,
                                                      pos: found.pos }))
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Records an error in the parser's list and hands it back so callers
    /// can propagate it with `?`.
    pub(in crate::interpreter::parser) fn report(&mut self, error: ParseError) -> ParseError {
        self.errors.push(error.clone());
        error
    }

    /// Advances one token and returns the token that was passed over.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Peeks at the next token without advancing. At the end of input this
    /// is the EOF token.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the most recently consumed token.
    pub(in crate::interpreter::parser) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Skips tokens until the next statement boundary.
    ///
    /// Called after a parse error: advances one token, then keeps skipping
    /// until the previous token was a `;` or the next token can begin a
    /// statement.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if STATEMENT_START.contains(&self.peek().kind) {
                return;
            }

            self.advance();
        }
    }
}
