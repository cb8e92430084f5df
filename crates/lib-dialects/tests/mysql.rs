//! MySQL-specific syntax: backtick quoting, `DIV`, `XOR`, backslash escapes,
//! numeric-prefixed identifiers, and the upsert/table-option extensions.

use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::test_functions::*;
use squall_lib_core::tokenize;
use squall_lib_dialects::MySqlDialect;

fn mysql() -> TestedDialects {
    TestedDialects::one_dialect(MySqlDialect)
}

#[test]
fn parse_div_through_the_dialect_hook() {
    let expr = mysql().verified_expr("a DIV b");
    assert_eq!(
        expr,
        Expr::BinaryOp {
            left: Box::new(Expr::Identifier(Ident::new("a"))),
            op: BinaryOperator::MyIntegerDivide,
            right: Box::new(Expr::Identifier(Ident::new("b"))),
        }
    );

    // DIV binds like `/`: tighter than `+`
    let expr = mysql().verified_expr("a + b DIV c");
    match expr {
        Expr::BinaryOp {
            op: BinaryOperator::Plus,
            ref right,
            ..
        } => match **right {
            Expr::BinaryOp {
                op: BinaryOperator::MyIntegerDivide,
                ..
            } => {}
            ref right => panic!("expected DIV on the right, got {right:?}"),
        },
        expr => panic!("expected + at the root, got {expr:?}"),
    }
}

#[test]
fn parse_xor() {
    mysql().verified_expr("a XOR b");
}

#[test]
fn parse_spaceship() {
    mysql().verified_only_select("SELECT * FROM t WHERE a <=> b");
}

#[test]
fn parse_backtick_identifiers() {
    mysql().verified_only_select("SELECT `col` FROM `my table`");
}

#[test]
fn identifiers_may_start_with_digits() {
    mysql().verified_only_select("SELECT * FROM 123_table");
}

#[test]
fn backslash_escapes_collapse_when_unescaping() {
    mysql().one_statement_parses_to("SELECT 'a\\'b'", "SELECT 'a''b'");
    let stmt = mysql().one_statement_parses_to("SELECT 'a\\nb'", "");
    match stmt {
        Statement::Query(query) => match *query.body {
            SetExpr::Select(select) => assert_eq!(
                select.projection[0],
                SelectItem::UnnamedExpr(Expr::Value(Value::SingleQuotedString("a\nb".into())))
            ),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}

#[test]
fn hash_starts_a_comment() {
    let tokens = tokenize(&MySqlDialect, "1 # rest of the line").unwrap();
    assert!(tokens.iter().any(|t| matches!(
        &t.token,
        squall_lib_core::lexer::Token::Whitespace(
            squall_lib_core::lexer::Whitespace::SingleLineComment { prefix, .. }
        ) if prefix == "#"
    )));
    mysql().verified_stmt("SELECT 1");
}

#[test]
fn parse_on_duplicate_key_update() {
    mysql().verified_stmt(
        "INSERT INTO t (a, b) VALUES (1, 2) ON DUPLICATE KEY UPDATE b = VALUES(b)",
    );
}

#[test]
fn parse_table_options() {
    mysql().verified_stmt(
        "CREATE TABLE t (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(100) CHARACTER SET utf8mb4) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4 COLLATE = utf8mb4_bin",
    );
}

#[test]
fn parse_on_update_column_option() {
    mysql().verified_stmt(
        "CREATE TABLE t (ts TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP() ON UPDATE CURRENT_TIMESTAMP())",
    );
}

#[test]
fn parse_set_names() {
    mysql().verified_stmt("SET NAMES utf8mb4");
    mysql().verified_stmt("SET NAMES utf8mb4 COLLATE utf8mb4_unicode_ci");
    mysql().verified_stmt("SET NAMES DEFAULT");
}

#[test]
fn parse_kill() {
    mysql().verified_stmt("KILL CONNECTION 42");
    mysql().verified_stmt("KILL QUERY 42");
    mysql().verified_stmt("KILL 42");
}

#[test]
fn parse_delete_multi_table() {
    mysql().verified_stmt("DELETE t1, t2 FROM t1 JOIN t2 ON t1.id = t2.id WHERE t1.x = 1");
}

#[test]
fn parse_enum_and_set_types() {
    mysql().verified_stmt("CREATE TABLE t (c ENUM('a', 'b'), s SET('x', 'y'))");
    mysql().verified_stmt("CREATE TABLE t (u INT UNSIGNED, b BIGINT(20) UNSIGNED)");
}
