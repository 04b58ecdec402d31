use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. An `if` here begins
    /// an if expression; everything else descends through the precedence
    /// hierarchy starting at logical OR.
    ///
    /// Grammar: `expression := ifExpr | logicalOr`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        if self.expect(&[TokenKind::If]) {
            return self.if_expression();
        }

        self.logical_or()
    }

    /// Parses an if expression. The `if` keyword has already been
    /// consumed.
    ///
    /// Grammar: `ifExpr := "if" expression blockExpr "else" blockExpr`
    ///
    /// Both branches are block expressions and the `else` branch is
    /// mandatory; an if expression always has a value position on each
    /// side.
    fn if_expression(&mut self) -> ParseResult<Expr> {
        let keyword = self.previous().clone();
        let condition = self.expression()?;

        let open = self.consume(TokenKind::LeftBrace)?;
        let then_statements = self.block()?;

        self.consume(TokenKind::Else)?;

        let else_open = self.consume(TokenKind::LeftBrace)?;
        let else_statements = self.block()?;

        Ok(Expr::If { condition:   Box::new(condition),
                      then_branch: Box::new(Expr::Block { statements: then_statements,
                                                          pos:        open.pos, }),
                      else_branch: Box::new(Expr::Block { statements: else_statements,
                                                          pos:        else_open.pos, }),
                      pos:         keyword.pos, })
    }

    /// Parses expressions at logical OR precedence.
    ///
    /// Grammar: `logicalOr := logicalAnd ("||" logicalAnd)*`
    fn logical_or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.logical_and()?;

        while self.expect(&[TokenKind::DoublePipe]) {
            let op = self.previous().clone();
            let right = self.logical_and()?;

            expr = Expr::Logical { left:  Box::new(expr),
                                   op:    LogicalOperator::Or,
                                   right: Box::new(right),
                                   pos:   op.pos, };
        }

        Ok(expr)
    }

    /// Parses expressions at logical AND precedence.
    ///
    /// Grammar: `logicalAnd := equality ("&&" equality)*`
    fn logical_and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.expect(&[TokenKind::DoubleAmpersand]) {
            let op = self.previous().clone();
            let right = self.equality()?;

            expr = Expr::Logical { left:  Box::new(expr),
                                   op:    LogicalOperator::And,
                                   right: Box::new(right),
                                   pos:   op.pos, };
        }

        Ok(expr)
    }

    /// Parses expressions with the same precedence as equality.
    ///
    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.expect(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let op = self.previous().clone();
            let right = self.comparison()?;

            expr = Expr::Binary { left:  Box::new(expr),
                                  op:    binary_operator(op.kind),
                                  right: Box::new(right),
                                  pos:   op.pos, };
        }

        Ok(expr)
    }

    /// Parses expressions with the same precedence as comparisons.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while self.expect(&[TokenKind::Greater,
                            TokenKind::GreaterEqual,
                            TokenKind::LessEqual,
                            TokenKind::Less])
        {
            let op = self.previous().clone();
            let right = self.term()?;

            expr = Expr::Binary { left:  Box::new(expr),
                                  op:    binary_operator(op.kind),
                                  right: Box::new(right),
                                  pos:   op.pos, };
        }

        Ok(expr)
    }

    /// Parses binary addition and subtraction.
    ///
    /// Grammar: `term := factor (("+" | "-") factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while self.expect(&[TokenKind::Minus, TokenKind::Plus]) {
            let op = self.previous().clone();
            let right = self.factor()?;

            expr = Expr::Binary { left:  Box::new(expr),
                                  op:    binary_operator(op.kind),
                                  right: Box::new(right),
                                  pos:   op.pos, };
        }

        Ok(expr)
    }

    /// Parses binary division, multiplication and modulo.
    ///
    /// Grammar: `factor := unary (("*" | "/" | "%") unary)*`
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.expect(&[TokenKind::Slash, TokenKind::Star, TokenKind::Percent]) {
            let op = self.previous().clone();
            let right = self.unary()?;

            expr = Expr::Binary { left:  Box::new(expr),
                                  op:    binary_operator(op.kind),
                                  right: Box::new(right),
                                  pos:   op.pos, };
        }

        Ok(expr)
    }
}

/// Maps an operator token to its binary operator.
///
/// Callers only reach this after matching one of the operator tokens, so
/// the fallthrough is unreachable.
fn binary_operator(kind: TokenKind) -> BinaryOperator {
    match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::DoubleStar => BinaryOperator::Pow,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::Ampersand => BinaryOperator::BitAnd,
        TokenKind::Pipe => BinaryOperator::BitOr,
        TokenKind::Caret => BinaryOperator::BitXor,
        _ => unreachable!("not a binary operator: {kind:?}"),
    }
}
