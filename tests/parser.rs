use ember::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};

fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(source).unwrap();
    parse_program(&tokens).map(|program| program.body)
}

fn parse_expr(source: &str) -> Expr {
    match parse(source).unwrap().as_slice() {
        [Statement::Expression { expr, .. }] => expr.clone(),
        other => panic!("expected a single expression statement, got {other:?}"),
    }
}

fn num(value: i64) -> Expr {
    Expr::NumericLiteral { value, line: 1 }
}

fn ident(name: &str) -> Expr {
    Expr::Identifier { name: name.to_string(),
                       line: 1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryExpr { left: Box::new(left),
                       op,
                       right: Box::new(right),
                       line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_expr("1 + 2 * 3"),
               binary(num(1), BinaryOperator::Add, binary(num(2), BinaryOperator::Mul, num(3))));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(parse_expr("1 - 2 - 3"),
               binary(binary(num(1), BinaryOperator::Sub, num(2)), BinaryOperator::Sub, num(3)));
}

#[test]
fn comparison_binds_loosest_of_binary_operators() {
    assert_eq!(parse_expr("a + 1 < b"),
               binary(binary(ident("a"), BinaryOperator::Add, num(1)),
                      BinaryOperator::Less,
                      ident("b")));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(parse_expr("(1 + 2) * 3"),
               binary(binary(num(1), BinaryOperator::Add, num(2)), BinaryOperator::Mul, num(3)));
}

#[test]
fn prefix_minus_is_negation() {
    assert_eq!(parse_expr("-x * 2"),
               binary(Expr::UnaryExpr { op:      UnaryOperator::Negate,
                                        operand: Box::new(ident("x")),
                                        line:    1, },
                      BinaryOperator::Mul,
                      num(2)));
}

#[test]
fn unary_operators_nest() {
    let Expr::UnaryExpr { op, operand, .. } = parse_expr("!~x") else {
        panic!("expected a unary expression");
    };
    assert_eq!(op, UnaryOperator::Not);
    assert!(matches!(*operand, Expr::UnaryExpr { op: UnaryOperator::BitNot, .. }));
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(parse_expr("a = b = 1"),
               Expr::AssignmentExpr { target: Box::new(ident("a")),
                                      value:  Box::new(Expr::AssignmentExpr { target:
                                                                                  Box::new(ident("b")),
                                                                              value:
                                                                                  Box::new(num(1)),
                                                                              line:   1, }),
                                      line:   1, });
}

#[test]
fn declarations() {
    assert_eq!(parse("let x = 5").unwrap(),
               [Statement::VariableDeclaration { name:     "x".to_string(),
                                                 value:    Some(num(5)),
                                                 is_const: false,
                                                 line:     1, }]);
    assert_eq!(parse("let y").unwrap(),
               [Statement::VariableDeclaration { name:     "y".to_string(),
                                                 value:    None,
                                                 is_const: false,
                                                 line:     1, }]);
    assert!(matches!(parse("const z = 1").unwrap().as_slice(),
                     [Statement::VariableDeclaration { is_const: true, .. }]));
}

#[test]
fn semicolons_separate_statements() {
    assert_eq!(parse(";let a = 1;; a;").unwrap().len(), 2);
    assert!(parse(";;;").unwrap().is_empty());
}

#[test]
fn string_literals_keep_their_contents() {
    assert_eq!(parse_expr("\"hi there\""),
               Expr::StringLiteral { value: "hi there".to_string(),
                                     line:  1, });
}

#[test]
fn parse_errors() {
    assert_eq!(parse("const c"),
               Err(ParseError::ConstWithoutInitializer { name: "c".to_string(),
                                                         line: 1, }));
    assert_eq!(parse("(1"), Err(ParseError::ExpectedClosingParen { line: 1 }));
    assert_eq!(parse("let x =\n"), Err(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(parse(")"),
               Err(ParseError::UnexpectedToken { token: "')'".to_string(),
                                                 line:  1, }));
    assert_eq!(parse("let \"s\" = 1"),
               Err(ParseError::ExpectedIdentifier { found: "string \"s\"".to_string(),
                                                    line:  1, }));
    assert_eq!(parse("let let"),
               Err(ParseError::ExpectedIdentifier { found: "'let'".to_string(),
                                                    line:  1, }));
}

#[test]
fn parse_error_messages_name_the_token() {
    let err = parse("1 + ;").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Unexpected token: ';'.");
}
