//! T-SQL specifics: bracket identifiers, `TOP`, `APPLY`, table hints, and
//! the comma-only SUBSTRING calling convention.

use expect_test::expect;
use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::parse;
use squall_lib_core::test_functions::*;
use squall_lib_dialects::MsSqlDialect;

fn ms() -> TestedDialects {
    TestedDialects::one_dialect(MsSqlDialect)
}

#[test]
fn parse_bracket_identifiers() {
    let select = ms().verified_only_select("SELECT [my col] FROM [my table]");
    assert_eq!(
        select.projection[0],
        SelectItem::UnnamedExpr(Expr::Identifier(Ident::with_quote('[', "my col")))
    );
}

#[test]
fn parse_top() {
    let select = ms().verified_only_select("SELECT TOP (5) * FROM t");
    assert_eq!(
        select.top,
        Some(Top {
            with_ties: false,
            percent: false,
            quantity: Some(Expr::Value(number("5"))),
        })
    );
    ms().verified_only_select("SELECT TOP (10) PERCENT * FROM t");
    ms().verified_only_select("SELECT TOP (10) WITH TIES * FROM t");
    ms().one_statement_parses_to("SELECT TOP 5 * FROM t", "SELECT TOP (5) * FROM t");
}

#[test]
fn substring_uses_the_comma_form() {
    ms().verified_expr("SUBSTRING(x, 1, 3)");

    let err = parse(&MsSqlDialect, "SELECT SUBSTRING(x FROM 1 FOR 3)").unwrap_err();
    expect![[r#"sql parser error: Expected ), found: FROM, Line: 1, Col: 20"#]]
        .assert_eq(&err.to_string());
}

#[test]
fn parse_at_variables() {
    ms().verified_only_select("SELECT @foo FROM t");
    ms().verified_only_select("SELECT #temp.x FROM #temp");
}

#[test]
fn parse_apply_joins() {
    ms().verified_only_select("SELECT * FROM t CROSS APPLY fn(t.id)");
    ms().verified_only_select("SELECT * FROM t OUTER APPLY fn(t.id)");
}

#[test]
fn parse_table_hints() {
    ms().verified_only_select("SELECT * FROM t WITH (NOLOCK)");
}

#[test]
fn parse_within_group() {
    ms().verified_expr("PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY x)");
}
