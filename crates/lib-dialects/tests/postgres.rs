//! PostgreSQL-specific syntax: JSON operators, dollar quoting, `DISTINCT
//! ON`, aggregate filters, and the operator set Postgres reserves.

use expect_test::expect;
use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::test_functions::*;
use squall_lib_core::{parse, parse_expression};
use squall_lib_dialects::PostgresDialect;

fn pg() -> TestedDialects {
    TestedDialects::one_dialect(PostgresDialect)
}

#[test]
fn parse_json_operators() {
    let expr = pg().verified_expr("info -> 'items' ->> 0");
    match expr {
        Expr::JsonAccess {
            operator: JsonOperator::LongArrow,
            ref left,
            ..
        } => match **left {
            Expr::JsonAccess {
                operator: JsonOperator::Arrow,
                ..
            } => {}
            ref left => panic!("expected ->, got {left:?}"),
        },
        expr => panic!("expected ->>, got {expr:?}"),
    }

    pg().verified_expr("info #> '{a,b}'");
    pg().verified_expr("info #>> '{a,b}'");
    pg().verified_expr("tags @> '[\"x\"]'");
    pg().verified_expr("'[\"x\"]' <@ tags");
    pg().verified_expr("info #- '{a}'");
    pg().verified_expr("info @? '$.a'");
    pg().verified_expr("doc @@ 'query'");
}

#[test]
fn json_operators_bind_tighter_than_concat() {
    // level 60 (json) vs level 61 (concat): `a ->> 'k' || b` must attach the
    // concat at the top
    let expr = pg().verified_expr("a ->> 'k' || b");
    match expr {
        Expr::BinaryOp {
            op: BinaryOperator::StringConcat,
            ref left,
            ..
        } => match **left {
            Expr::JsonAccess { .. } => {}
            ref left => panic!("expected json access on the left, got {left:?}"),
        },
        expr => panic!("expected || at the root, got {expr:?}"),
    }
}

#[test]
fn caret_is_reserved() {
    let err = parse(&PostgresDialect, "SELECT a ^ b").unwrap_err();
    expect![[r#"sql parser error: Expected end of statement, found: ^, Line: 1, Col: 10"#]]
        .assert_eq(&err.to_string());

    // `#` is the Postgres spelling of bitwise xor
    pg().verified_expr("a # b");
    pg().verified_expr("a << 2");
    pg().verified_expr("a >> 2");
}

#[test]
fn parse_regex_match_operators() {
    pg().verified_expr("name ~ '^foo'");
    pg().verified_expr("name ~* '^foo'");
    pg().verified_expr("name !~ '^foo'");
    pg().verified_expr("name !~* '^foo'");
}

#[test]
fn parse_dollar_quoted_strings() {
    let expr = pg().verified_expr("$tag$in the body$tag$");
    assert_eq!(
        expr,
        Expr::Value(Value::DollarQuotedString(DollarQuotedString {
            value: "in the body".into(),
            tag: Some("tag".into()),
        }))
    );
    pg().verified_expr("$$untagged$$");
}

#[test]
fn parse_dollar_placeholders() {
    let select = pg().verified_only_select("SELECT * FROM t WHERE id = $1 AND name = $2");
    assert!(select.selection.is_some());
}

#[test]
fn parse_distinct_on() {
    let select = pg().verified_only_select("SELECT DISTINCT ON (a, b) a, b, c FROM t");
    assert_eq!(
        select.distinct,
        Some(Distinct::On(vec![
            Expr::Identifier(Ident::new("a")),
            Expr::Identifier(Ident::new("b")),
        ]))
    );
}

#[test]
fn parse_aggregate_filter() {
    pg().verified_only_select("SELECT COUNT(*) FILTER (WHERE x > 0) FROM t");
}

#[test]
fn double_colon_casts_normalize() {
    pg().one_statement_parses_to(
        "SELECT id::BIGINT FROM t",
        "SELECT CAST(id AS BIGINT) FROM t",
    );
    pg().one_statement_parses_to(
        "SELECT '2020-01-01'::TIMESTAMPTZ",
        "SELECT CAST('2020-01-01' AS TIMESTAMPTZ)",
    );
}

#[test]
fn parse_at_time_zone() {
    pg().verified_expr("ts AT TIME ZONE 'America/New_York'");
    // binds at the cast level: tighter than comparison
    let expr = pg().verified_expr("ts AT TIME ZONE 'UTC' > '2020-01-01'");
    match expr {
        Expr::BinaryOp {
            op: BinaryOperator::Gt,
            ref left,
            ..
        } => match **left {
            Expr::AtTimeZone { .. } => {}
            ref left => panic!("expected AT TIME ZONE on the left, got {left:?}"),
        },
        expr => panic!("expected > at the root, got {expr:?}"),
    }
}

#[test]
fn postgres_array_types_normalize() {
    pg().one_statement_parses_to(
        "CREATE TABLE t (xs INT[], ys TEXT[][])",
        "CREATE TABLE t (xs ARRAY<INT>, ys ARRAY<ARRAY<TEXT>>)",
    );
}

#[test]
fn parse_insert_on_conflict() {
    pg().verified_stmt(
        "INSERT INTO t (a) VALUES (1) ON CONFLICT(a) DO UPDATE SET a = 2 RETURNING a",
    );
    pg().verified_stmt("INSERT INTO t (a) VALUES (1) ON CONFLICT DO NOTHING");
}

#[test]
fn within_group_is_available() {
    pg().verified_expr("PERCENTILE_DISC(0.5) WITHIN GROUP (ORDER BY income)");
}

#[test]
fn colon_placeholders_are_not_postgres() {
    let err = parse_expression(&PostgresDialect, "a = :name").unwrap_err();
    expect![[r#"sql parser error: Expected an expression, found: :, Line: 1, Col: 5"#]]
        .assert_eq(&err.to_string());
}
