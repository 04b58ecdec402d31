use runa::{
    ast::{BinaryOperator, DeclKind, Expr, LiteralKind, LogicalOperator, Stmt, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Lexer, parser::Parser},
};

fn parse(source: &str) -> (Vec<Stmt>, Vec<ParseError>) {
    let (tokens, errors) = Lexer::new(source).tokenize();
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    Parser::new(tokens).parse()
}

fn parse_expression(source: &str) -> Expr {
    let (statements, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    assert_eq!(statements.len(), 1, "expected one statement for {source:?}");

    match statements.into_iter().next() {
        Some(Stmt::Expression { expr, .. }) => expr,
        other => panic!("expected an expression statement, found {other:?}"),
    }
}

fn assert_integer(expr: &Expr, expected: &str) {
    match expr {
        Expr::Literal { kind: LiteralKind::Integer, value, .. } => assert_eq!(value, expected),
        other => panic!("expected integer literal {expected}, found {other:?}"),
    }
}

#[test]
fn unary_expression() {
    let expr = parse_expression("-5;");

    match expr {
        Expr::Unary { op: UnaryOperator::Negate, expr: operand, .. } => {
            assert_integer(&operand, "5");
        },
        other => panic!("expected a negation, found {other:?}"),
    }
}

#[test]
fn binary_expression() {
    let expr = parse_expression("10 * 25;");

    match expr {
        Expr::Binary { left, op: BinaryOperator::Mul, right, .. } => {
            assert_integer(&left, "10");
            assert_integer(&right, "25");
        },
        other => panic!("expected a multiplication, found {other:?}"),
    }
}

#[test]
fn addition_is_left_associative() {
    let expr = parse_expression("1 + 2 + 3;");

    match expr {
        Expr::Binary { left, op: BinaryOperator::Add, right, .. } => {
            assert_integer(&right, "3");
            match &*left {
                Expr::Binary { left: inner_left,
                               op: BinaryOperator::Add,
                               right: inner_right,
                               .. } => {
                    assert_integer(inner_left, "1");
                    assert_integer(inner_right, "2");
                },
                other => panic!("expected a nested addition, found {other:?}"),
            }
        },
        other => panic!("expected an addition, found {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = parse_expression("1 + 2 * 3;");

    match expr {
        Expr::Binary { left, op: BinaryOperator::Add, right, .. } => {
            assert_integer(&left, "1");
            assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Mul, .. }));
        },
        other => panic!("expected an addition, found {other:?}"),
    }
}

#[test]
fn logical_operators_build_logical_nodes() {
    let expr = parse_expression("true && false || true;");

    match expr {
        Expr::Logical { left, op: LogicalOperator::Or, right, .. } => {
            assert!(matches!(*right, Expr::Literal { kind: LiteralKind::True, .. }));
            match &*left {
                Expr::Logical { left: inner_left,
                                op: LogicalOperator::And,
                                right: inner_right,
                                .. } => {
                    assert!(matches!(&**inner_left,
                                     Expr::Literal { kind: LiteralKind::True, .. }));
                    assert!(matches!(&**inner_right,
                                     Expr::Literal { kind: LiteralKind::False, .. }));
                },
                other => panic!("expected a logical and, found {other:?}"),
            }
        },
        other => panic!("expected a logical or, found {other:?}"),
    }
}

#[test]
fn grouping_wraps_the_inner_expression() {
    let expr = parse_expression("(1 + 2) * 3;");

    match expr {
        Expr::Binary { left, op: BinaryOperator::Mul, .. } => {
            assert!(matches!(*left, Expr::Grouping { .. }));
        },
        other => panic!("expected a multiplication, found {other:?}"),
    }
}

#[test]
fn string_literals_drop_their_quotes() {
    let expr = parse_expression("\"hello\";");

    match expr {
        Expr::Literal { kind: LiteralKind::String, value, .. } => assert_eq!(value, "hello"),
        other => panic!("expected a string literal, found {other:?}"),
    }
}

#[test]
fn exponent_applies_once() {
    let expr = parse_expression("2 ** 3;");
    assert!(matches!(expr, Expr::Binary { op: BinaryOperator::Pow, .. }));

    let (_, errors) = parse("2 ** 3 ** 2;");
    assert!(!errors.is_empty(), "chained exponent must not parse");
}

#[test]
fn exponent_right_operand_is_a_primary() {
    let (_, errors) = parse("2 ** -3;");
    assert!(matches!(errors[0], ParseError::ExpectedExpression { .. }));
}

#[test]
fn declaration_forms() {
    let (statements, errors) = parse("val x: int = 5; var y = 2; val z: int;");
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");

    match &statements[0] {
        Stmt::VarDeclaration { kind: DeclKind::Val, name, ty, value, .. } => {
            assert_eq!(name, "x");
            assert_eq!(ty.as_ref().map(|t| t.name.as_str()), Some("int"));
            assert!(value.is_some());
        },
        other => panic!("expected a declaration, found {other:?}"),
    }

    match &statements[1] {
        Stmt::VarDeclaration { kind: DeclKind::Var, ty, value, .. } => {
            assert!(ty.is_none());
            assert!(value.is_some());
        },
        other => panic!("expected a declaration, found {other:?}"),
    }

    match &statements[2] {
        Stmt::VarDeclaration { kind: DeclKind::Val, ty, value, .. } => {
            assert!(ty.is_some());
            assert!(value.is_none());
        },
        other => panic!("expected a declaration, found {other:?}"),
    }
}

#[test]
fn declarations_need_a_type_or_a_value() {
    let (_, errors) = parse("val x;");
    assert!(matches!(errors[0], ParseError::MissingTypeOrInitializer { .. }));
}

#[test]
fn assignment_target_must_be_an_identifier() {
    let (statements, errors) = parse("x = 1 + 2;");
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    assert!(matches!(&statements[0], Stmt::Assignment { name, .. } if name == "x"));

    let (_, errors) = parse("1 = 2;");
    assert!(matches!(errors[0], ParseError::InvalidAssignmentTarget { .. }));
}

#[test]
fn statement_if_without_else_is_an_if_statement() {
    let (statements, errors) = parse("if true { 1; }");
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");

    match &statements[0] {
        Stmt::If { then_branch, else_branch, .. } => {
            assert!(matches!(&**then_branch, Stmt::Block { .. }));
            assert!(else_branch.is_none());
        },
        other => panic!("expected an if statement, found {other:?}"),
    }
}

#[test]
fn statement_if_with_else_is_an_if_expression() {
    let (statements, errors) = parse("if true { 1 } else { 2 };");
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");

    match &statements[0] {
        Stmt::Expression { expr: Expr::If { then_branch, else_branch, .. }, .. } => {
            assert!(matches!(&**then_branch, Expr::Block { .. }));
            assert!(matches!(&**else_branch, Expr::Block { .. }));
        },
        other => panic!("expected an if expression statement, found {other:?}"),
    }
}

#[test]
fn if_expression_requires_an_else_branch() {
    let (_, errors) = parse("val x = if true { 1 };");
    assert!(!errors.is_empty(), "an if expression without else must not parse");
}

#[test]
fn tail_expression_may_omit_its_terminator() {
    let (statements, errors) = parse("{ 42 }");
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");

    match &statements[0] {
        Stmt::Block { statements: inner, .. } => {
            assert!(matches!(inner[0], Stmt::Expression { .. }));
        },
        other => panic!("expected a block, found {other:?}"),
    }
}

#[test]
fn missing_semicolon_is_reported() {
    let (_, errors) = parse("1 + 2");
    assert!(matches!(errors[0], ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_closing_brace_is_reported_once() {
    let (statements, errors) = parse("{ 1;");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&statements[0], Stmt::Block { statements, .. } if statements.len() == 1));
}

#[test]
fn parser_synchronizes_after_an_error() {
    let (statements, errors) = parse("val = 5; 1 + 2;");

    assert_eq!(errors.len(), 1);
    assert_eq!(statements.len(), 1);
    assert!(matches!(&statements[0], Stmt::Expression { .. }));
}

#[test]
fn each_recovered_statement_is_well_formed() {
    let (statements, errors) = parse("val = 1; var ok = 2; val := 3; ok;");

    assert_eq!(errors.len(), 2);
    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[0], Stmt::VarDeclaration { name, .. } if name == "ok"));
    assert!(matches!(&statements[1], Stmt::Expression { .. }));
}
