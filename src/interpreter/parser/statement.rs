use crate::{
    ast::{DeclKind, Expr, Stmt, TypeName},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable declaration (`val` or `var`),
    /// - a block statement,
    /// - an `if` statement or statement-position `if` expression,
    /// - an assignment,
    /// - an expression used as a statement.
    ///
    /// The first matching construct wins; anything else is parsed as an
    /// expression statement.
    pub(in crate::interpreter::parser) fn statement(&mut self) -> ParseResult<Stmt> {
        if self.expect(&[TokenKind::Val, TokenKind::Var]) {
            return self.variable_declaration();
        }

        if self.expect(&[TokenKind::LeftBrace]) {
            let brace = self.previous().clone();
            let statements = self.block()?;

            return Ok(Stmt::Block { statements,
                                    pos: brace.pos });
        }

        if self.expect(&[TokenKind::If]) {
            return self.if_statement();
        }

        self.expression_statement()
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `varDecl := ("val" | "var") IDENT (":" IDENT)? ("=" expression)? ";"`
    ///
    /// At least one of the type annotation and the initializer must be
    /// present; a declaration with neither is rejected here rather than
    /// left for the type checker.
    fn variable_declaration(&mut self) -> ParseResult<Stmt> {
        let decl = self.previous().clone();
        let name = self.consume(TokenKind::Ident)?;

        let mut ty = None;
        if self.expect(&[TokenKind::Colon]) {
            let annotated = self.consume(TokenKind::Ident)?;
            ty = Some(TypeName { name: annotated.text,
                                 pos:  annotated.pos, });
        }

        let mut value = None;
        if self.expect(&[TokenKind::Equal]) {
            value = Some(self.expression()?);
        }

        if ty.is_none() && value.is_none() {
            return Err(self.report(ParseError::MissingTypeOrInitializer { name: name.text,
                                                                          pos:  name.pos, }));
        }

        self.consume(TokenKind::Semicolon)?;

        let kind = if decl.kind == TokenKind::Var { DeclKind::Var } else { DeclKind::Val };
        Ok(Stmt::VarDeclaration { kind,
                                  name: name.text,
                                  ty,
                                  value,
                                  pos: decl.pos })
    }

    /// Parses the statements of a braced block. The opening `{` has
    /// already been consumed.
    ///
    /// A missing `}` is reported but the block keeps the statements parsed
    /// so far; end of input inside a block is reported exactly once.
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !(self.check(TokenKind::RightBrace) || self.is_at_end()) {
            statements.push(self.statement()?);
        }

        self.consume(TokenKind::RightBrace).ok();
        Ok(statements)
    }

    /// Parses a statement-position `if`. The `if` keyword has already been
    /// consumed.
    ///
    /// Without an `else` this is an if statement whose branch is a block
    /// statement. With an `else` the construct is an if expression in an
    /// expression statement: the else branch makes both branches value
    /// positions, and the branch types must agree. The trailing `;` is
    /// optional in that case.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        let condition = self.expression()?;

        let open = self.consume(TokenKind::LeftBrace)?;
        let then_statements = self.block()?;

        if self.expect(&[TokenKind::Else]) {
            let else_open = self.consume(TokenKind::LeftBrace)?;
            let else_statements = self.block()?;

            let expr = Expr::If { condition:   Box::new(condition),
                                  then_branch: Box::new(Expr::Block { statements: then_statements,
                                                                      pos:        open.pos, }),
                                  else_branch: Box::new(Expr::Block { statements: else_statements,
                                                                      pos:        else_open.pos, }),
                                  pos:         keyword.pos, };
            self.expect(&[TokenKind::Semicolon]);

            return Ok(Stmt::Expression { expr,
                                         pos: keyword.pos });
        }

        Ok(Stmt::If { condition,
                      then_branch: Box::new(Stmt::Block { statements: then_statements,
                                                          pos:        open.pos, }),
                      else_branch: None,
                      pos: keyword.pos })
    }

    /// Parses an expression statement or an assignment.
    ///
    /// After the expression, an `=` turns the statement into an
    /// assignment; the parsed expression must then be a bare identifier.
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;

        if self.check(TokenKind::Equal) {
            let equals = self.advance();
            let value = self.expression()?;

            if let Expr::Ident { name, pos } = expr {
                self.consume(TokenKind::Semicolon)?;

                return Ok(Stmt::Assignment { name, value, pos });
            }

            return Err(self.report(ParseError::InvalidAssignmentTarget { pos: equals.pos }));
        }

        let pos = expr.position();
        self.terminate_expression(&expr)?;

        Ok(Stmt::Expression { expr, pos })
    }

    /// Consumes the `;` after an expression statement.
    ///
    /// The terminator is optional when the expression is an if expression,
    /// and may be omitted in tail position directly before a closing `}`.
    fn terminate_expression(&mut self, expr: &Expr) -> ParseResult<()> {
        if matches!(expr, Expr::If { .. }) {
            self.expect(&[TokenKind::Semicolon]);
            return Ok(());
        }

        if self.check(TokenKind::RightBrace) {
            return Ok(());
        }

        self.consume(TokenKind::Semicolon)?;
        Ok(())
    }
}
