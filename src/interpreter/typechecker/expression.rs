use crate::{
    ast::{BinaryOperator, Expr, LiteralKind, LogicalOperator, Stmt, UnaryOperator},
    error::TypeError,
    interpreter::{
        lexer::Position,
        typechecker::{core::Checker, primitives::Primitive, symbol::Symbol},
    },
};

impl Checker {
    /// Checks an expression and returns its type.
    ///
    /// `None` means the expression has no type: either a check inside it
    /// already failed, or the expression legitimately produces no value
    /// (a block whose last statement is not an expression statement).
    pub(in crate::interpreter::typechecker) fn check_expr(&mut self, expr: &Expr)
                                                          -> Option<Primitive> {
        match expr {
            Expr::Ident { name, pos } => self.check_ident(name, *pos),
            Expr::Literal { kind, value, pos } => self.check_literal(*kind, value, *pos),
            Expr::Grouping { expr, .. } => self.check_expr(expr),
            Expr::Unary { op, expr: operand, pos } => self.check_unary(expr, *op, operand, *pos),
            Expr::Binary { left, op, right, pos } => {
                self.check_binary(expr, *op, left, right, *pos)
            },
            Expr::Logical { left, op, right, pos } => {
                self.check_logical(expr, *op, left, right, *pos)
            },
            Expr::Block { statements, .. } => self.check_block_expr(statements),
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       pos, } => {
                self.check_if_expr(condition, then_branch, else_branch, *pos)
            },
        }
    }

    /// Checks an identifier use.
    ///
    /// The name must resolve through the lexical chain, and a variable
    /// must have been initialized before it is read.
    fn check_ident(&mut self, name: &str, pos: Position) -> Option<Primitive> {
        let Some(symbol) = self.lookup(name) else {
            self.error(TypeError::UndefinedIdentifier { name: name.to_string(),
                                                        pos });
            return None;
        };

        let (ty, initialized) = match symbol {
            Symbol::Variable(variable) => (variable.ty, variable.initialized),
            Symbol::Function(function) => (function.ty, true),
        };

        if !initialized {
            self.error(TypeError::UsedBeforeInitialized { name: name.to_string(),
                                                          pos });
            return None;
        }

        Some(ty)
    }

    /// Checks a literal expression.
    ///
    /// Integer literals are validated against the signed 32-bit range here
    /// so the evaluator can rely on every checked literal converting.
    fn check_literal(&mut self, kind: LiteralKind, value: &str, pos: Position)
                     -> Option<Primitive> {
        match kind {
            LiteralKind::Integer => {
                if value.parse::<i32>().is_err() {
                    self.error(TypeError::IntegerOutOfRange { value: value.to_string(),
                                                              pos });
                    return None;
                }
                Some(Primitive::Int)
            },
            LiteralKind::Real => Some(Primitive::Real),
            LiteralKind::String => Some(Primitive::String),
            LiteralKind::Char => Some(Primitive::Char),
            LiteralKind::True | LiteralKind::False => Some(Primitive::Boolean),
        }
    }

    /// Checks a unary operation against its accepted operand kinds.
    ///
    /// `!` takes a boolean, `-` takes `int` or `real` and keeps the
    /// operand kind, `~` takes `int`.
    fn check_unary(&mut self,
                   whole: &Expr,
                   op: UnaryOperator,
                   operand: &Expr,
                   pos: Position)
                   -> Option<Primitive> {
        let operand_type = self.checked_operand(operand)?;

        let result = match op {
            UnaryOperator::Not => (operand_type == Primitive::Boolean).then_some(Primitive::Boolean),
            UnaryOperator::Negate => {
                matches!(operand_type, Primitive::Int | Primitive::Real).then_some(operand_type)
            },
            UnaryOperator::BitNot => (operand_type == Primitive::Int).then_some(Primitive::Int),
        };

        if result.is_none() {
            self.error(TypeError::InvalidUnaryOperation { expr: whole.to_string(),
                                                          operand: operand_type,
                                                          pos });
        }
        result
    }

    /// Checks a binary operation against the operator's accepted operand
    /// kinds.
    ///
    /// Both operands must be primitives of the same kind. `+` accepts
    /// `int`, `real` and `string`; `- * / **` accept `int` and `real` and
    /// keep the operand kind; `%` and the bitwise operators accept `int`;
    /// `==` and `!=` accept any primitive; the orderings accept `int`,
    /// `real`, `char` and `string` and produce `boolean`.
    fn check_binary(&mut self,
                    whole: &Expr,
                    op: BinaryOperator,
                    left: &Expr,
                    right: &Expr,
                    pos: Position)
                    -> Option<Primitive> {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod,
            Mul, NotEqual, Pow, Sub,
        };

        let left_type = self.checked_operand(left)?;
        let right_type = self.checked_operand(right)?;

        let same = left_type == right_type;
        let result = match op {
            Add => {
                (same && matches!(left_type, Primitive::Int | Primitive::Real | Primitive::String))
                    .then_some(left_type)
            },
            Sub | Mul | Div | Pow => {
                (same && matches!(left_type, Primitive::Int | Primitive::Real))
                    .then_some(left_type)
            },
            Mod | BitAnd | BitOr | BitXor => {
                (same && left_type == Primitive::Int).then_some(Primitive::Int)
            },
            Equal | NotEqual => same.then_some(Primitive::Boolean),
            Less | LessEqual | Greater | GreaterEqual => {
                (same
                 && matches!(left_type,
                             Primitive::Int | Primitive::Real | Primitive::Char | Primitive::String))
                    .then_some(Primitive::Boolean)
            },
        };

        if result.is_none() {
            self.error(TypeError::InvalidBinaryOperation { expr: whole.to_string(),
                                                           left: left_type,
                                                           right: right_type,
                                                           pos });
        }
        result
    }

    /// Checks a short-circuiting logical operation; both operands must be
    /// boolean.
    fn check_logical(&mut self,
                     whole: &Expr,
                     _op: LogicalOperator,
                     left: &Expr,
                     right: &Expr,
                     pos: Position)
                     -> Option<Primitive> {
        let left_type = self.checked_operand(left)?;
        let right_type = self.checked_operand(right)?;

        if left_type == Primitive::Boolean && right_type == Primitive::Boolean {
            return Some(Primitive::Boolean);
        }

        self.error(TypeError::InvalidBinaryOperation { expr: whole.to_string(),
                                                       left: left_type,
                                                       right: right_type,
                                                       pos });
        None
    }

    /// Checks a block expression.
    ///
    /// Statements are checked in order inside a child context. The block's
    /// type is the type of its last statement when that statement is an
    /// expression statement, and undefined otherwise.
    fn check_block_expr(&mut self, statements: &[Stmt]) -> Option<Primitive> {
        self.push_context();

        let mut last = None;
        for (i, statement) in statements.iter().enumerate() {
            match statement {
                Stmt::Expression { expr, .. } if i + 1 == statements.len() => {
                    last = self.check_expr(expr);
                },
                _ => self.check_statement(statement),
            }
        }

        self.pop_context();
        last
    }

    /// Checks an if expression.
    ///
    /// The condition must be boolean and both branches must have the same
    /// type, which becomes the type of the whole expression. A branch
    /// mismatch is only reported when neither branch already failed.
    fn check_if_expr(&mut self,
                     condition: &Expr,
                     then_branch: &Expr,
                     else_branch: &Expr,
                     pos: Position)
                     -> Option<Primitive> {
        self.check_condition(condition);

        let mark = self.mark();
        let then_type = self.check_expr(then_branch);
        let else_type = self.check_expr(else_branch);

        if self.clean_since(mark) && then_type != else_type {
            self.error(TypeError::BranchMismatch { pos });
            return None;
        }

        then_type
    }

    /// Checks an `if` condition, which must type to boolean.
    pub(in crate::interpreter::typechecker) fn check_condition(&mut self, condition: &Expr) {
        let mark = self.mark();
        match self.check_expr(condition) {
            Some(Primitive::Boolean) => {},
            Some(found) => {
                self.error(TypeError::ExpectedBooleanCondition { found,
                                                                 pos: condition.position() });
            },
            None => {
                if self.clean_since(mark) {
                    self.error(TypeError::MissingValue { expr: condition.to_string(),
                                                         pos:  condition.position(), });
                }
            },
        }
    }

    /// Checks an expression that must produce a value.
    ///
    /// A `None` type with no recorded error means the expression checked
    /// fine but has no value, which is itself an error in operand
    /// position.
    pub(in crate::interpreter::typechecker) fn checked_operand(&mut self, operand: &Expr)
                                                               -> Option<Primitive> {
        let mark = self.mark();
        let ty = self.check_expr(operand);

        if ty.is_none() && self.clean_since(mark) {
            self.error(TypeError::MissingValue { expr: operand.to_string(),
                                                 pos:  operand.position(), });
        }
        ty
    }
}
