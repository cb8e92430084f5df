//! BigQuery specifics: backtick-quoted project paths, `UNNEST`, `QUALIFY`,
//! and aggregate `ORDER BY`/`LIMIT` inside `ARRAY_AGG`.

use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::test_functions::*;
use squall_lib_dialects::BigQueryDialect;

fn bigquery() -> TestedDialects {
    TestedDialects::one_dialect(BigQueryDialect)
}

#[test]
fn parse_backtick_quoted_path() {
    let select = bigquery().verified_only_select("SELECT * FROM `my-project.dataset.table`");
    match &select.from[0].relation {
        TableFactor::Table { name, .. } => {
            assert_eq!(
                name.0,
                vec![Ident::with_quote('`', "my-project.dataset.table")]
            );
        }
        relation => panic!("expected table, got {relation:?}"),
    }
}

#[test]
fn parse_unnest_table_factor() {
    bigquery().verified_only_select("SELECT * FROM UNNEST(arr) AS a");
    bigquery().verified_only_select("SELECT * FROM UNNEST(arr) AS a WITH OFFSET AS off");
}

#[test]
fn parse_in_unnest() {
    let select = bigquery().verified_only_select("SELECT * FROM t WHERE x NOT IN UNNEST(arr)");
    assert_eq!(
        select.selection,
        Some(Expr::InUnnest {
            expr: Box::new(Expr::Identifier(Ident::new("x"))),
            array_expr: Box::new(Expr::Identifier(Ident::new("arr"))),
            negated: true,
        })
    );
}

#[test]
fn parse_qualify() {
    bigquery().verified_only_select(
        "SELECT a FROM t QUALIFY ROW_NUMBER() OVER (PARTITION BY a ORDER BY b) = 1",
    );
}

#[test]
fn parse_array_agg_with_inline_order_by() {
    bigquery().verified_expr("ARRAY_AGG(x ORDER BY y DESC LIMIT 10)");
    bigquery().verified_expr("ARRAY_AGG(DISTINCT x)");
}

#[test]
fn parse_typed_string_literals() {
    bigquery().verified_expr("BIGNUMERIC '123456.789'");
    bigquery().verified_expr("JSON '{\"k\": \"v\"}'");
}

#[test]
fn parse_assert() {
    bigquery().verified_stmt("ASSERT (SELECT COUNT(*) FROM t) > 0 AS 'table must not be empty'");
}
