//! ClickHouse specifics: `ON CLUSTER` DDL, `KILL MUTATION`, and its string
//! escape behavior.

use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::test_functions::*;
use squall_lib_dialects::ClickHouseDialect;

fn clickhouse() -> TestedDialects {
    TestedDialects::one_dialect(ClickHouseDialect)
}

#[test]
fn parse_create_table_on_cluster() {
    clickhouse().verified_stmt(
        "CREATE TABLE t ON CLUSTER 'production' (a INT, b DATETIME) ENGINE = MergeTree",
    );
}

#[test]
fn parse_kill_mutation() {
    clickhouse().verified_stmt("KILL MUTATION 5");
}

#[test]
fn backslash_escapes_are_processed() {
    let stmt = clickhouse().one_statement_parses_to("SELECT 'a\\tb'", "");
    match stmt {
        Statement::Query(query) => match *query.body {
            SetExpr::Select(select) => assert_eq!(
                select.projection[0],
                SelectItem::UnnamedExpr(Expr::Value(Value::SingleQuotedString("a\tb".into())))
            ),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}

#[test]
fn parse_array_indexing() {
    clickhouse().verified_expr("m['k'][1]");
}

#[test]
fn parse_quoted_identifiers() {
    clickhouse().verified_only_select("SELECT `a`, \"b\" FROM t");
}
