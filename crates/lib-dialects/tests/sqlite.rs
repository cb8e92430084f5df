//! SQLite specifics: `REPLACE INTO` (via the statement hook), conflict
//! resolution on INSERT, `AUTOINCREMENT`, and its permissive quoting.

use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::test_functions::*;
use squall_lib_dialects::SQLiteDialect;

fn sqlite() -> TestedDialects {
    TestedDialects::one_dialect(SQLiteDialect)
}

#[test]
fn replace_into_normalizes_to_insert_or_replace() {
    let stmt = sqlite().one_statement_parses_to(
        "REPLACE INTO t VALUES (1, 2)",
        "INSERT OR REPLACE INTO t VALUES (1, 2)",
    );
    match stmt {
        Statement::Insert { or, .. } => assert_eq!(or, Some(SqliteOnConflict::Replace)),
        stmt => panic!("expected INSERT, got {stmt:?}"),
    }
}

#[test]
fn parse_insert_or_variants() {
    sqlite().verified_stmt("INSERT OR ROLLBACK INTO t VALUES (1)");
    sqlite().verified_stmt("INSERT OR ABORT INTO t VALUES (1)");
    sqlite().verified_stmt("INSERT OR FAIL INTO t VALUES (1)");
    sqlite().verified_stmt("INSERT OR IGNORE INTO t VALUES (1)");
}

#[test]
fn parse_autoincrement() {
    sqlite().verified_stmt("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, x TEXT)");
}

#[test]
fn parse_placeholders() {
    sqlite().verified_only_select("SELECT * FROM t WHERE a = ?1 AND b = :named AND c = @v");
}

#[test]
fn parse_quoting_styles() {
    sqlite().verified_only_select("SELECT \"a\", `b`, [c] FROM t");
}

#[test]
fn parse_aggregate_filter() {
    sqlite().verified_expr("COUNT(*) FILTER (WHERE x > 0)");
}

#[test]
fn parse_json_operators() {
    sqlite().verified_expr("data -> '$.a' ->> '$.b'");
}
