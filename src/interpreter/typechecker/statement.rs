use crate::{
    ast::{DeclKind, Expr, Stmt, TypeName},
    error::TypeError,
    interpreter::{
        lexer::Position,
        typechecker::{
            core::Checker,
            symbol::{Symbol, Variable},
        },
    },
};

impl Checker {
    /// Checks a single statement.
    pub(in crate::interpreter::typechecker) fn check_statement(&mut self, statement: &Stmt) {
        match statement {
            Stmt::VarDeclaration { kind,
                                   name,
                                   ty,
                                   value,
                                   pos, } => {
                self.check_declaration(*kind, name, ty.as_ref(), value.as_ref(), *pos);
            },
            Stmt::Expression { expr, .. } => {
                self.check_expr(expr);
            },
            Stmt::Block { statements, .. } => {
                self.push_context();
                for statement in statements {
                    self.check_statement(statement);
                }
                self.pop_context();
            },
            Stmt::Assignment { name, value, pos } => self.check_assignment(name, value, *pos),
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                self.check_condition(condition);
                self.check_statement(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_statement(else_branch);
                }
            },
        }
    }

    /// Checks a variable declaration and defines its symbol.
    ///
    /// The declared type must resolve against the root registry, and when
    /// both an annotation and an initializer are present their types must
    /// be identical. The symbol records mutability and whether an
    /// initializer was supplied; an annotated declaration keeps its
    /// annotated type even when the initializer disagrees, so later uses
    /// are checked against the declared intent.
    fn check_declaration(&mut self,
                         kind: DeclKind,
                         name: &str,
                         ty: Option<&TypeName>,
                         value: Option<&Expr>,
                         pos: Position) {
        let declared = ty.and_then(|annotation| {
                             let found = self.lookup_type(&annotation.name);
                             if found.is_none() {
                                 self.error(TypeError::UndefinedType { name: annotation.name
                                                                                       .clone(),
                                                                       pos:  annotation.pos, });
                             }
                             found
                         });

        let inferred = value.and_then(|initializer| self.checked_operand(initializer));

        if let (Some(declared), Some(inferred)) = (declared, inferred)
           && declared != inferred
        {
            self.error(TypeError::DeclarationMismatch { declared,
                                                        found: inferred,
                                                        pos });
        }

        let Some(ty) = declared.or(inferred) else {
            return;
        };

        self.define(Variable { name: name.to_string(),
                               ty,
                               mutable: kind == DeclKind::Var,
                               initialized: value.is_some(), },
                    pos);
    }

    /// Checks an assignment statement.
    ///
    /// The target must resolve through the lexical chain, the value's type
    /// must equal the symbol's type, and an initialized immutable binding
    /// rejects the assignment. On success the symbol is marked
    /// initialized, which is how a `val` declared without an initializer
    /// receives its one permitted assignment.
    fn check_assignment(&mut self, name: &str, value: &Expr, pos: Position) {
        let value_type = self.checked_operand(value);

        let Some(symbol) = self.lookup(name) else {
            self.error(TypeError::UndefinedIdentifier { name: name.to_string(),
                                                        pos });
            return;
        };

        let (expected, mutable, initialized) = match symbol {
            Symbol::Variable(variable) => (variable.ty, variable.mutable, variable.initialized),
            Symbol::Function(function) => (function.ty, false, true),
        };

        if !mutable && initialized {
            self.error(TypeError::ImmutableAssignment { name: name.to_string(),
                                                        pos });
            return;
        }

        if let Some(found) = value_type
           && found != expected
        {
            self.error(TypeError::IncompatibleAssignment { expected,
                                                           found,
                                                           pos });
            return;
        }

        if let Some(Symbol::Variable(variable)) = self.lookup_mut(name) {
            variable.initialized = true;
        }
    }
}
