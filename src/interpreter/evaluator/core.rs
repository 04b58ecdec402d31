use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, LiteralKind, LogicalOperator, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        lexer::Position,
        typechecker::primitives::{Primitive, primitives},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a type-checked program by walking its syntax tree.
///
/// The interpreter keeps a stack of environment frames mirroring the
/// checker's context chain, plus the root-only type registry used to
/// build zero values for declarations without initializers. Expression
/// statements print their value to the output sink, one value per line.
///
/// Running requires that the type check succeeded; evaluating an
/// unchecked tree surfaces lookup and operand errors instead of
/// panicking, but produces no meaningful program.
///
/// # Example
/// ```
/// use runa::interpreter::{evaluator::Interpreter, lexer::Lexer, parser::Parser};
///
/// let (tokens, _) = Lexer::new("val x = 2; x * 21;").tokenize();
/// let (statements, _) = Parser::new(tokens).parse();
///
/// let mut out = Vec::new();
/// Interpreter::new(&mut out).run(&statements).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
/// ```
pub struct Interpreter<W> {
    scopes: Vec<HashMap<String, Value>>,
    types:  HashMap<String, Primitive>,
    out:    W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty root environment, writing
    /// evaluator output to `out`.
    pub fn new(out: W) -> Self {
        Self { scopes: vec![HashMap::new()],
               types: primitives(),
               out }
    }

    /// Executes a whole program in order.
    ///
    /// # Errors
    /// Returns the first runtime error raised; execution stops there.
    pub fn run(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr, .. } => {
                if let Some(value) = self.eval(expr)? {
                    writeln!(self.out, "{value}").map_err(|e| {
                                                     RuntimeError::Io { message: e.to_string() }
                                                 })?;
                }
                Ok(())
            },
            Stmt::VarDeclaration { name, ty, value, pos, .. } => {
                let value = match value {
                    Some(initializer) => self.eval_value(initializer)?,
                    None => {
                        let Some(annotation) = ty else {
                            return Err(RuntimeError::MissingValue { pos: *pos });
                        };
                        let primitive =
                            self.types.get(&annotation.name).copied().ok_or_else(|| {
                                RuntimeError::UnknownType { name: annotation.name.clone(),
                                                            pos:  annotation.pos, }
                            })?;
                        Value::zero(primitive)
                    },
                };

                self.define_local(name, value);
                Ok(())
            },
            Stmt::Block { statements, .. } => {
                self.push_scope();
                let result = self.run(statements);
                self.pop_scope();
                result
            },
            Stmt::Assignment { name, value, pos } => {
                let value = self.eval_value(value)?;
                self.assign_nearest(name, value, *pos)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                let condition = self.eval_value(condition)?;
                if matches!(condition, Value::Boolean(true)) {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
        }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// `None` is reserved for expressions with no value: a block whose
    /// last statement is not an expression statement, or an if expression
    /// over such blocks.
    fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { kind, value, pos } => Ok(Some(eval_literal(*kind, value, *pos)?)),
            Expr::Ident { name, pos } => {
                let value = self.get_variable(name).cloned().ok_or_else(|| {
                                RuntimeError::UnknownVariable { name: name.to_string(),
                                                                pos:  *pos, }
                            })?;
                Ok(Some(value))
            },
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Unary { op, expr: operand, pos } => {
                let value = self.eval_value(operand)?;
                Ok(Some(eval_unary(*op, &value, *pos)?))
            },
            Expr::Binary { left, op, right, pos } => {
                let left = self.eval_value(left)?;
                let right = self.eval_value(right)?;
                Ok(Some(eval_binary(*op, &left, &right, *pos)?))
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(*op, left, right),
            Expr::Block { statements, .. } => {
                self.push_scope();
                let result = self.eval_block(statements);
                self.pop_scope();
                result
            },
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                let condition = self.eval_value(condition)?;
                if matches!(condition, Value::Boolean(true)) {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
        }
    }

    /// Evaluates an expression that must produce a value.
    fn eval_value(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { pos: expr.position() })
    }

    /// Evaluates a short-circuiting logical operation.
    ///
    /// `||` returns the left value without touching the right operand when
    /// the left is true; `&&` does the same when the left is false. In
    /// every other case the result is the right operand's value.
    fn eval_logical(&mut self,
                    op: LogicalOperator,
                    left: &Expr,
                    right: &Expr)
                    -> EvalResult<Option<Value>> {
        let left = self.eval_value(left)?;

        match op {
            LogicalOperator::Or if matches!(left, Value::Boolean(true)) => Ok(Some(left)),
            LogicalOperator::And if matches!(left, Value::Boolean(false)) => Ok(Some(left)),
            _ => Ok(Some(self.eval_value(right)?)),
        }
    }

    /// Runs the statements of a block expression in the current scope.
    ///
    /// The last statement, when it is an expression statement, supplies
    /// the block's value instead of printing it; every other statement
    /// executes with full statement semantics.
    fn eval_block(&mut self, statements: &[Stmt]) -> EvalResult<Option<Value>> {
        let mut value = None;

        for (i, statement) in statements.iter().enumerate() {
            match statement {
                Stmt::Expression { expr, .. } if i + 1 == statements.len() => {
                    value = self.eval(expr)?;
                },
                _ => self.execute(statement)?,
            }
        }

        Ok(value)
    }

    /// Enters a child environment frame.
    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exits the innermost environment frame, restoring its parent. The
    /// root frame is never popped.
    fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Binds a name in the innermost frame, shadowing any outer binding.
    fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Looks up a name through the environment chain, innermost first.
    fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Replaces the binding in the nearest enclosing frame that defines
    /// `name`.
    fn assign_nearest(&mut self, name: &str, value: Value, pos: Position) -> EvalResult<()> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }

        Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                            pos })
    }
}

/// Converts a literal's stored text into a runtime value.
///
/// Checked literals always convert; the error paths only fire when an
/// unchecked tree is evaluated.
fn eval_literal(kind: LiteralKind, value: &str, pos: Position) -> EvalResult<Value> {
    match kind {
        LiteralKind::Integer => {
            value.parse::<i32>()
                 .map(Value::Integer)
                 .map_err(|_| RuntimeError::MalformedLiteral { value: value.to_string(),
                                                               pos })
        },
        LiteralKind::Real => {
            value.parse::<f64>()
                 .map(Value::Real)
                 .map_err(|_| RuntimeError::MalformedLiteral { value: value.to_string(),
                                                               pos })
        },
        LiteralKind::String => Ok(Value::String(value.to_string())),
        LiteralKind::Char => {
            value.chars()
                 .next()
                 .map(Value::Char)
                 .ok_or(RuntimeError::MalformedLiteral { value: value.to_string(),
                                                         pos })
        },
        LiteralKind::True => Ok(Value::Boolean(true)),
        LiteralKind::False => Ok(Value::Boolean(false)),
    }
}
