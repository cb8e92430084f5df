//! Behavior shared by every dialect, exercised through the permissive
//! generic dialect and strict ANSI where the two agree.

use pretty_assertions::assert_eq;
use squall_lib_core::ast::*;
use squall_lib_core::errors::ParserError;
use squall_lib_core::test_functions::*;
use squall_lib_core::{parse, parse_expression};
use squall_lib_dialects::{AnsiDialect, GenericDialect};

fn all_dialects() -> TestedDialects {
    TestedDialects {
        dialects: vec![Box::new(GenericDialect), Box::new(AnsiDialect)],
    }
}

fn generic() -> TestedDialects {
    TestedDialects::one_dialect(GenericDialect)
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident::new(name))
}

fn binop(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

#[test]
fn parse_empty_and_repeated_semicolons() {
    assert_eq!(all_dialects().parse_sql_statements("").unwrap(), vec![]);
    assert_eq!(all_dialects().parse_sql_statements(";;  ;").unwrap(), vec![]);
    let stmts = all_dialects()
        .parse_sql_statements(";SELECT 1;; SELECT 2;")
        .unwrap();
    assert_eq!(stmts.len(), 2);
}

#[test]
fn parse_is_deterministic() {
    let sql = "SELECT a, b FROM t WHERE a = 1 GROUP BY b HAVING COUNT(a) > 2";
    let first = parse(&GenericDialect, sql).unwrap();
    let second = parse(&GenericDialect, sql).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parse_insert_values() {
    let sql = "INSERT INTO customer VALUES (1, 2, 3), (1, 2, 3)";
    match all_dialects().verified_stmt(sql) {
        Statement::Insert {
            table_name,
            columns,
            source,
            ..
        } => {
            assert_eq!(table_name.to_string(), "customer");
            assert!(columns.is_empty());
            match *source.expect("insert has a source").body {
                SetExpr::Values(Values(rows)) => {
                    assert_eq!(rows.len(), 2);
                    for row in rows {
                        assert_eq!(
                            row,
                            vec![
                                Expr::Value(number("1")),
                                Expr::Value(number("2")),
                                Expr::Value(number("3")),
                            ]
                        );
                    }
                }
                body => panic!("expected VALUES, got {body:?}"),
            }
        }
        stmt => panic!("expected INSERT, got {stmt:?}"),
    }
}

#[test]
fn parse_insert_default_values() {
    all_dialects().verified_stmt("INSERT INTO t DEFAULT VALUES");
}

#[test]
fn parse_update_with_multiple_assignments() {
    let sql = "UPDATE t SET a = 1, b = 2, c = 3 WHERE d";
    match all_dialects().verified_stmt(sql) {
        Statement::Update {
            table,
            assignments,
            selection,
            ..
        } => {
            assert_eq!(table.to_string(), "t");
            assert_eq!(
                assignments,
                vec![
                    Assignment {
                        id: vec![Ident::new("a")],
                        value: Expr::Value(number("1")),
                    },
                    Assignment {
                        id: vec![Ident::new("b")],
                        value: Expr::Value(number("2")),
                    },
                    Assignment {
                        id: vec![Ident::new("c")],
                        value: Expr::Value(number("3")),
                    },
                ]
            );
            assert_eq!(selection, Some(ident("d")));
        }
        stmt => panic!("expected UPDATE, got {stmt:?}"),
    }
}

#[test]
fn parse_delete_with_using_and_returning() {
    all_dialects().verified_stmt("DELETE FROM t WHERE a = 1");
    all_dialects().verified_stmt("DELETE FROM t1 USING t2 WHERE t1.a = t2.a RETURNING t1.a");
    all_dialects().verified_stmt("DELETE t1, t2 FROM t1 JOIN t2 ON t1.a = t2.a WHERE t2.b = 1");
}

#[test]
fn parse_select_distinct_tuple() {
    let select = all_dialects().verified_only_select("SELECT DISTINCT (name, id) FROM customer");
    assert_eq!(select.distinct, Some(Distinct::Distinct));
    assert_eq!(
        select.projection,
        vec![SelectItem::UnnamedExpr(Expr::Tuple(vec![
            ident("name"),
            ident("id"),
        ]))]
    );
}

#[test]
fn parse_natural_join_with_alias() {
    let select = all_dialects().verified_only_select("SELECT * FROM t1 NATURAL JOIN t2 AS t3");
    assert_eq!(select.from.len(), 1);
    let from = &select.from[0];
    assert_eq!(from.joins.len(), 1);
    assert_eq!(
        from.joins[0].join_operator,
        JoinOperator::Inner(JoinConstraint::Natural)
    );
    match &from.joins[0].relation {
        TableFactor::Table { name, alias, .. } => {
            assert_eq!(name.to_string(), "t2");
            assert_eq!(alias, &table_alias("t3"));
        }
        relation => panic!("expected table, got {relation:?}"),
    }
}

#[test]
fn parse_not_between() {
    let sql = "SELECT * FROM customers WHERE age NOT BETWEEN 25 AND 32";
    let select = all_dialects().verified_only_select(sql);
    assert_eq!(
        select.selection,
        Some(Expr::Between {
            expr: Box::new(ident("age")),
            negated: true,
            low: Box::new(Expr::Value(number("25"))),
            high: Box::new(Expr::Value(number("32"))),
        })
    );
}

#[test]
fn parse_create_unique_index() {
    let sql = "CREATE UNIQUE INDEX IF NOT EXISTS idx_name ON test(name, age DESC)";
    match all_dialects().verified_stmt(sql) {
        Statement::CreateIndex {
            name,
            table_name,
            columns,
            unique,
            if_not_exists,
            using,
        } => {
            assert_eq!(name.to_string(), "idx_name");
            assert_eq!(table_name.to_string(), "test");
            assert!(unique);
            assert!(if_not_exists);
            assert_eq!(using, None);
            assert_eq!(columns.len(), 2);
            assert_eq!(columns[0].expr, ident("name"));
            assert_eq!(columns[0].asc, None);
            assert_eq!(columns[1].expr, ident("age"));
            assert_eq!(columns[1].asc, Some(false));
        }
        stmt => panic!("expected CREATE INDEX, got {stmt:?}"),
    }
}

#[test]
fn rejects_all_and_distinct_together() {
    let err = all_dialects()
        .parse_sql_statements("SELECT ALL DISTINCT name FROM customer")
        .unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Cannot specify both ALL and DISTINCT".into())
    );
    let err = all_dialects()
        .parse_sql_statements("SELECT COUNT(ALL DISTINCT x) FROM t")
        .unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Cannot specify both ALL and DISTINCT".into())
    );
}

#[test]
fn rejects_duplicate_referential_actions() {
    for sql in [
        "CREATE TABLE t (a INT REFERENCES other (id) ON DELETE CASCADE ON DELETE CASCADE)",
        "CREATE TABLE t (a INT REFERENCES other (id) ON UPDATE CASCADE ON DELETE RESTRICT ON UPDATE SET NULL)",
    ] {
        assert!(all_dialects().parse_sql_statements(sql).is_err(), "{sql}");
    }
}

// ============================================================================
// Operator precedence
// ============================================================================

#[test]
fn and_binds_tighter_than_or() {
    let expr = generic().verified_expr("a OR b AND c");
    assert_eq!(
        expr,
        binop(
            ident("a"),
            BinaryOperator::Or,
            binop(ident("b"), BinaryOperator::And, ident("c")),
        )
    );
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = generic().verified_expr("a + b * c");
    assert_eq!(
        expr,
        binop(
            ident("a"),
            BinaryOperator::Plus,
            binop(ident("b"), BinaryOperator::Multiply, ident("c")),
        )
    );
}

#[test]
fn concat_binds_tighter_than_addition() {
    let expr = generic().verified_expr("a || b + c");
    assert_eq!(
        expr,
        binop(
            binop(ident("a"), BinaryOperator::StringConcat, ident("b")),
            BinaryOperator::Plus,
            ident("c"),
        )
    );
}

#[test]
fn bitwise_levels_are_ordered() {
    // `|` < `&` < `+`
    let expr = generic().verified_expr("a | b & c + d");
    assert_eq!(
        expr,
        binop(
            ident("a"),
            BinaryOperator::BitwiseOr,
            binop(
                ident("b"),
                BinaryOperator::BitwiseAnd,
                binop(ident("c"), BinaryOperator::Plus, ident("d")),
            ),
        )
    );
}

#[test]
fn comparison_binds_tighter_than_not() {
    // NOT is a low-binding prefix: NOT a IS NULL parses as NOT (a IS NULL)
    let expr = generic().verified_expr("NOT a IS NULL");
    assert_eq!(
        expr,
        Expr::UnaryOp {
            op: UnaryOperator::Not,
            expr: Box::new(Expr::IsNull(Box::new(ident("a")))),
        }
    );
}

#[test]
fn cast_binds_tighter_than_multiplication() {
    let expr = generic().verified_expr("a * CAST(b AS INT)");
    assert_eq!(
        expr,
        binop(
            ident("a"),
            BinaryOperator::Multiply,
            Expr::Cast {
                expr: Box::new(ident("b")),
                data_type: DataType::Int(None),
            },
        )
    );
    // `::` normalizes to CAST
    let stmt = generic().one_statement_parses_to(
        "SELECT a * b::INT",
        "SELECT a * CAST(b AS INT)",
    );
    let _ = stmt;
}

#[test]
fn array_index_binds_tightest() {
    let expr = generic().verified_expr("a[1] + b[2]");
    assert_eq!(
        expr,
        binop(
            Expr::ArrayIndex {
                obj: Box::new(ident("a")),
                indexes: vec![Expr::Value(number("1"))],
            },
            BinaryOperator::Plus,
            Expr::ArrayIndex {
                obj: Box::new(ident("b")),
                indexes: vec![Expr::Value(number("2"))],
            },
        )
    );
}

#[test]
fn xor_sits_between_or_and_and() {
    let expr = generic().verified_expr("a OR b XOR c AND d");
    assert_eq!(
        expr,
        binop(
            ident("a"),
            BinaryOperator::Or,
            binop(
                ident("b"),
                BinaryOperator::Xor,
                binop(ident("c"), BinaryOperator::And, ident("d")),
            ),
        )
    );
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn parse_literal_values() {
    generic().verified_expr("1");
    generic().verified_expr("1.5e10");
    generic().verified_expr("'hello'");
    generic().verified_expr("N'national'");
    generic().verified_expr("X'deadbeef'");
    generic().verified_expr("TRUE");
    generic().verified_expr("NULL");
    assert_eq!(
        generic().verified_expr("12L"),
        Expr::Value(Value::Number("12".into(), true))
    );
}

#[test]
fn parse_unary_operators() {
    generic().verified_expr("-a");
    generic().verified_expr("NOT a");
    assert_eq!(
        generic().verified_expr("-a * b"),
        Expr::UnaryOp {
            op: UnaryOperator::Minus,
            expr: Box::new(binop(ident("a"), BinaryOperator::Multiply, ident("b"))),
        }
    );
}

#[test]
fn parse_case_expressions() {
    generic().verified_expr("CASE WHEN a THEN 1 WHEN b THEN 2 ELSE 0 END");
    generic().verified_expr("CASE x WHEN 1 THEN 'one' ELSE 'many' END");
}

#[test]
fn parse_cast_family() {
    generic().verified_expr("CAST(a AS BIGINT)");
    generic().verified_expr("TRY_CAST(a AS VARCHAR(50))");
    generic().verified_expr("CAST(a AS NUMERIC(10,2))");
    generic().verified_expr("CAST(a AS TIMESTAMP WITH TIME ZONE)");
}

#[test]
fn parse_extract_ceil_floor() {
    generic().verified_expr("EXTRACT(YEAR FROM d)");
    generic().verified_expr("EXTRACT(TIMEZONE_HOUR FROM d)");
    generic().verified_expr("CEIL(x)");
    generic().verified_expr("CEIL(d TO DAY)");
    generic().verified_expr("FLOOR(d TO SECOND)");

    let err = parse_expression(&GenericDialect, "EXTRACT(JIFFY FROM d)").unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError(
            "Expected date/time field, found: JIFFY, Line: 1, Col: 9".into()
        )
    );
}

#[test]
fn parse_position() {
    assert_eq!(
        generic().verified_expr("POSITION('@' IN email)"),
        Expr::Position {
            expr: Box::new(Expr::Value(Value::SingleQuotedString("@".into()))),
            r#in: Box::new(ident("email")),
        }
    );
    let err = parse_expression(&GenericDialect, "POSITION('@', email)").unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Position function must include IN keyword".into())
    );
}

#[test]
fn parse_substring_trim_overlay() {
    generic().verified_expr("SUBSTRING(x FROM 1 FOR 3)");
    generic().verified_expr("SUBSTRING(x FROM 1)");
    generic().verified_expr("TRIM(BOTH 'x' FROM y)");
    generic().verified_expr("TRIM(LEADING 'x' FROM y)");
    generic().verified_expr("TRIM(y)");
    generic().verified_expr("OVERLAY(x PLACING y FROM 3 FOR 2)");
}

#[test]
fn parse_exists_and_subqueries() {
    generic().verified_expr("EXISTS (SELECT 1)");
    generic().verified_expr("NOT EXISTS (SELECT 1)");
    generic().verified_only_select("SELECT (SELECT MAX(a) FROM t) AS m FROM u");
    generic().verified_only_select("SELECT a FROM t WHERE b IN (SELECT b FROM u)");
    generic().verified_only_select("SELECT a FROM t WHERE b NOT IN (1, 2, 3)");
    generic().verified_only_select("SELECT a FROM t WHERE b IN UNNEST(arr)");
}

#[test]
fn parse_like_family() {
    generic().verified_expr("name LIKE '%foo%'");
    generic().verified_expr("name NOT LIKE '%foo%'");
    generic().verified_expr("name ILIKE 'foo' ESCAPE '\\'");
    generic().verified_expr("name NOT SIMILAR TO 'f_o'");
}

#[test]
fn parse_is_family() {
    generic().verified_expr("a IS NULL");
    generic().verified_expr("a IS NOT NULL");
    generic().verified_expr("a IS TRUE");
    generic().verified_expr("a IS NOT FALSE");
    generic().verified_expr("a IS UNKNOWN");
    generic().verified_expr("a IS DISTINCT FROM b");
    generic().verified_expr("a IS NOT DISTINCT FROM b");
}

#[test]
fn parse_any_all() {
    generic().verified_expr("a = ANY(b)");
    generic().verified_expr("a > ALL(b)");
}

#[test]
fn parse_intervals() {
    generic().verified_expr("INTERVAL '1' DAY");
    generic().verified_expr("INTERVAL '1-1' YEAR TO MONTH");
    generic().verified_expr("INTERVAL '1 23:45' DAY TO MINUTE");
    generic().verified_expr("INTERVAL '10' HOUR (1)");
    generic().verified_expr("INTERVAL '1.1' SECOND (2, 2)");
    generic().verified_expr("INTERVAL '1 day'");

    for bad in [
        "INTERVAL '1' SECOND TO SECOND",
        "INTERVAL '1' YEAR TO DAY",
        "INTERVAL '1' HOUR TO YEAR",
    ] {
        assert!(parse_expression(&GenericDialect, bad).is_err(), "{bad}");
    }
}

#[test]
fn parse_typed_strings() {
    generic().verified_expr("DATE '2020-01-01'");
    generic().verified_expr("TIME '01:23:34'");
    generic().verified_expr("TIMESTAMP '2020-01-01 01:23:34'");
    generic().verified_expr("TIMESTAMPTZ '2020-01-01 01:23:34Z'");
    generic().verified_expr("JSON '{\"a\": 1}'");
    generic().verified_expr("BIGNUMERIC '12'");
}

#[test]
fn parse_function_calls() {
    generic().verified_expr("COUNT(*)");
    generic().verified_expr("COUNT(t.*)");
    generic().verified_expr("COUNT(DISTINCT x)");
    generic().verified_expr("my_func(a, b => 1)");
    generic().verified_expr("SUM(x) FILTER (WHERE x > 0)");
    generic().verified_expr("PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY x)");
    generic().verified_expr("ROW_NUMBER() OVER (PARTITION BY a ORDER BY b DESC)");
    generic().verified_expr("SUM(x) OVER (ORDER BY a ROWS BETWEEN 2 PRECEDING AND CURRENT ROW)");
    generic().verified_expr("SUM(x) OVER (RANGE UNBOUNDED PRECEDING)");
    generic().verified_expr("SUM(x) OVER w");
}

#[test]
fn parse_listagg() {
    generic().verified_expr(
        "LISTAGG(DISTINCT dateid, ', ' ON OVERFLOW TRUNCATE '%' WITHOUT COUNT) WITHIN GROUP (ORDER BY id, username)",
    );
    generic().verified_expr("LISTAGG(sellerid)");
}

#[test]
fn parse_array_literals() {
    generic().verified_expr("ARRAY[1, 2, 3]");
    generic().verified_expr("[1, 2]");
    generic().verified_expr("m['k1']['k2']");
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn parse_select_with_all_clauses() {
    all_dialects().verified_only_select(
        "SELECT a, b AS x FROM t WHERE c GROUP BY a HAVING COUNT(*) > 1",
    );
    generic().verified_only_select(
        "SELECT a FROM t GROUP BY a QUALIFY ROW_NUMBER() OVER (PARTITION BY a) = 1",
    );
    all_dialects()
        .verified_only_select("SELECT a FROM t WINDOW w AS (PARTITION BY b ORDER BY c)");
}

#[test]
fn parse_select_into() {
    all_dialects().verified_only_select("SELECT a INTO newtable FROM t");
    all_dialects().verified_only_select("SELECT a INTO TEMPORARY TABLE newtable FROM t");
}

#[test]
fn parse_group_by_modifiers() {
    all_dialects().verified_only_select("SELECT a, b FROM t GROUP BY ROLLUP (a, (a, b))");
    all_dialects().verified_only_select("SELECT a, b FROM t GROUP BY CUBE (a, b)");
    all_dialects()
        .verified_only_select("SELECT a, b FROM t GROUP BY GROUPING SETS ((a), (a, b), ())");
}

#[test]
fn parse_joins() {
    all_dialects().verified_only_select("SELECT * FROM a JOIN b ON a.id = b.id");
    all_dialects().verified_only_select("SELECT * FROM a LEFT JOIN b USING(id)");
    all_dialects().verified_only_select("SELECT * FROM a RIGHT JOIN b ON a.x = b.x");
    all_dialects().verified_only_select("SELECT * FROM a FULL JOIN b ON a.x = b.x");
    all_dialects().verified_only_select("SELECT * FROM a CROSS JOIN b");
    all_dialects().one_statement_parses_to(
        "SELECT * FROM a INNER JOIN b ON a.id = b.id",
        "SELECT * FROM a JOIN b ON a.id = b.id",
    );
    all_dialects().one_statement_parses_to(
        "SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id",
        "SELECT * FROM a LEFT JOIN b ON a.id = b.id",
    );
    all_dialects().verified_only_select("SELECT * FROM (a JOIN b ON a.x = b.x) AS j");
}

#[test]
fn parse_derived_tables_and_lateral() {
    all_dialects().verified_only_select("SELECT * FROM (SELECT 1 AS x) AS d");
    all_dialects().verified_only_select(
        "SELECT * FROM t, LATERAL (SELECT * FROM u WHERE u.a = t.a) AS l",
    );
}

#[test]
fn parse_set_operations_precedence() {
    // INTERSECT binds tighter than UNION/EXCEPT
    let query = all_dialects().verified_query("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3");
    match *query.body {
        SetExpr::SetOperation {
            op: SetOperator::Union,
            ref right,
            ..
        } => match **right {
            SetExpr::SetOperation {
                op: SetOperator::Intersect,
                ..
            } => {}
            ref right => panic!("expected INTERSECT on the right, got {right:?}"),
        },
        ref body => panic!("expected UNION at the root, got {body:?}"),
    }

    all_dialects().verified_query("SELECT 1 UNION ALL SELECT 2");
    all_dialects().verified_query("SELECT 1 EXCEPT DISTINCT SELECT 2");
    all_dialects().verified_query("(SELECT 1) UNION (SELECT 2)");
}

#[test]
fn parse_table_statement() {
    all_dialects().verified_stmt("TABLE t");
    all_dialects().verified_stmt("SELECT 1 UNION TABLE t");
}

#[test]
fn parse_ctes() {
    all_dialects().verified_query("WITH cte AS (SELECT 1 AS x) SELECT x FROM cte");
    all_dialects().verified_query(
        "WITH RECURSIVE r (n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM r) SELECT n FROM r",
    );
    // CTEs within CTEs
    all_dialects().verified_query(
        "WITH outer_cte AS (WITH inner_cte AS (SELECT 1) SELECT * FROM inner_cte) SELECT * FROM outer_cte",
    );
}

#[test]
fn parse_limit_offset_fetch() {
    all_dialects().verified_query("SELECT a FROM t LIMIT 5");
    all_dialects().verified_query("SELECT a FROM t LIMIT 5 OFFSET 2");
    all_dialects().verified_query("SELECT a FROM t OFFSET 2 ROWS");
    all_dialects().one_statement_parses_to("SELECT a FROM t LIMIT ALL", "SELECT a FROM t");
    all_dialects().verified_query("SELECT a FROM t FETCH FIRST 5 ROWS ONLY");
    all_dialects().verified_query("SELECT a FROM t FETCH FIRST 50 PERCENT ROWS ONLY");
    all_dialects().one_statement_parses_to(
        "SELECT a FROM t FETCH NEXT 5 ROWS WITH TIES",
        "SELECT a FROM t FETCH FIRST 5 ROWS WITH TIES",
    );
}

#[test]
fn parse_locking_clauses() {
    all_dialects().verified_query("SELECT a FROM t FOR UPDATE");
    all_dialects().verified_query("SELECT a FROM t FOR SHARE NOWAIT");
    all_dialects().verified_query("SELECT a FROM t FOR UPDATE OF t SKIP LOCKED");
    all_dialects().verified_query("SELECT a FROM t FOR SHARE OF t1, t2 FOR UPDATE OF t3");
}

#[test]
fn parse_order_by_nulls() {
    all_dialects().verified_query("SELECT a FROM t ORDER BY a ASC NULLS FIRST, b DESC NULLS LAST");
}

// ============================================================================
// DDL
// ============================================================================

#[test]
fn parse_create_table_with_constraints() {
    all_dialects().verified_stmt(
        "CREATE TABLE orders (\
         id INT PRIMARY KEY, \
         customer_id INT NOT NULL REFERENCES customers (id) ON DELETE CASCADE ON UPDATE NO ACTION, \
         amount NUMERIC(10,2) DEFAULT 0, \
         note VARCHAR(100) NULL, \
         CONSTRAINT positive_amount CHECK (amount >= 0), \
         UNIQUE (customer_id, id), \
         FOREIGN KEY (customer_id) REFERENCES customers(id))",
    );
}

#[test]
fn parse_create_table_accepts_trailing_comma() {
    all_dialects().one_statement_parses_to(
        "CREATE TABLE t (a INT, b TEXT,)",
        "CREATE TABLE t (a INT, b TEXT)",
    );
}

#[test]
fn parse_create_table_variants() {
    all_dialects().verified_stmt("CREATE TABLE IF NOT EXISTS t (a INT)");
    all_dialects().verified_stmt("CREATE OR REPLACE TABLE t (a INT)");
    all_dialects().verified_stmt("CREATE TEMPORARY TABLE t (a INT)");
    all_dialects().verified_stmt("CREATE TABLE t (a INT) AS SELECT a FROM u");
    all_dialects().verified_stmt("CREATE TABLE t CLONE src");
    all_dialects().verified_stmt("CREATE TABLE t (a INT) WITH (fillfactor = 70)");
}

#[test]
fn parse_create_view_and_alter_view() {
    all_dialects().verified_stmt("CREATE VIEW v AS SELECT 1");
    all_dialects().verified_stmt("CREATE OR REPLACE VIEW v (a, b) AS SELECT 1, 2");
    all_dialects().verified_stmt("CREATE MATERIALIZED VIEW v AS SELECT a FROM t");
    all_dialects().verified_stmt("ALTER VIEW v AS SELECT 2");
}

#[test]
fn parse_create_schema_database_role_type() {
    all_dialects().verified_stmt("CREATE SCHEMA sales");
    all_dialects().verified_stmt("CREATE SCHEMA IF NOT EXISTS sales AUTHORIZATION bob");
    all_dialects().verified_stmt("CREATE SCHEMA AUTHORIZATION bob");
    all_dialects().verified_stmt("CREATE DATABASE IF NOT EXISTS db LOCATION 'hdfs://x'");
    all_dialects().verified_stmt("CREATE ROLE IF NOT EXISTS r1, r2");
    all_dialects().verified_stmt("CREATE TYPE pair AS (x INT, y INT)");
}

#[test]
fn parse_alter_table_operations() {
    all_dialects().verified_stmt("ALTER TABLE t ADD COLUMN c INT");
    all_dialects().verified_stmt("ALTER TABLE t ADD COLUMN IF NOT EXISTS c INT");
    all_dialects().verified_stmt("ALTER TABLE t ADD CONSTRAINT uq UNIQUE (a)");
    all_dialects().verified_stmt("ALTER TABLE t DROP COLUMN IF EXISTS c CASCADE");
    all_dialects().verified_stmt("ALTER TABLE t DROP CONSTRAINT IF EXISTS uq CASCADE");
    all_dialects().verified_stmt("ALTER TABLE t RENAME COLUMN a TO b");
    all_dialects().verified_stmt("ALTER TABLE t RENAME TO u");
    all_dialects().verified_stmt("ALTER TABLE t ALTER COLUMN a SET NOT NULL");
    all_dialects().verified_stmt("ALTER TABLE t ALTER COLUMN a DROP DEFAULT");
    all_dialects().verified_stmt("ALTER TABLE t ALTER COLUMN a SET DEFAULT 0");
    all_dialects().verified_stmt("ALTER TABLE t ALTER COLUMN a SET DATA TYPE BIGINT");
    all_dialects().verified_stmt("ALTER INDEX i RENAME TO j");
    all_dialects().one_statement_parses_to(
        "ALTER TABLE t ADD c INT",
        "ALTER TABLE t ADD COLUMN c INT",
    );
}

#[test]
fn parse_drop() {
    all_dialects().verified_stmt("DROP TABLE IF EXISTS t1, t2 CASCADE");
    all_dialects().verified_stmt("DROP VIEW v");
    all_dialects().verified_stmt("DROP INDEX i");
    all_dialects().verified_stmt("DROP SCHEMA s RESTRICT");
    all_dialects().verified_stmt("DROP ROLE r");
    assert!(
        all_dialects()
            .parse_sql_statements("DROP TABLE t CASCADE RESTRICT")
            .is_err()
    );
}

#[test]
fn parse_merge() {
    all_dialects().verified_stmt(
        "MERGE INTO target AS t USING source AS s ON t.id = s.id \
         WHEN MATCHED AND s.flag = 1 THEN UPDATE SET a = s.a, b = s.b \
         WHEN MATCHED THEN DELETE \
         WHEN NOT MATCHED THEN INSERT (id, a) VALUES (s.id, s.a)",
    );
}

// ============================================================================
// Transactions & session statements
// ============================================================================

#[test]
fn parse_transactions() {
    all_dialects().verified_stmt("START TRANSACTION");
    all_dialects().verified_stmt("START TRANSACTION READ ONLY, ISOLATION LEVEL SERIALIZABLE");
    // Whitespace-separated modes are tolerated and normalize to commas
    all_dialects().one_statement_parses_to(
        "START TRANSACTION READ WRITE ISOLATION LEVEL REPEATABLE READ",
        "START TRANSACTION READ WRITE, ISOLATION LEVEL REPEATABLE READ",
    );
    all_dialects().one_statement_parses_to("BEGIN", "START TRANSACTION");
    all_dialects().one_statement_parses_to("BEGIN WORK", "START TRANSACTION");
    all_dialects().one_statement_parses_to("BEGIN TRANSACTION", "START TRANSACTION");
    all_dialects().verified_stmt("SET TRANSACTION ISOLATION LEVEL READ COMMITTED");
    all_dialects().verified_stmt("COMMIT");
    all_dialects().verified_stmt("COMMIT AND CHAIN");
    all_dialects().one_statement_parses_to("COMMIT WORK AND NO CHAIN", "COMMIT");
    all_dialects().verified_stmt("ROLLBACK AND CHAIN");
    all_dialects().one_statement_parses_to("ROLLBACK TRANSACTION", "ROLLBACK");
}

#[test]
fn parse_set_statements() {
    all_dialects().verified_stmt("SET var = 1");
    all_dialects().one_statement_parses_to("SET var TO 'x'", "SET var = 'x'");
    all_dialects().verified_stmt("SET LOCAL var = 2, 3");
    all_dialects().verified_stmt("SET TIME ZONE 'UTC'");
    all_dialects().verified_stmt("SET LOCAL TIME ZONE 'UTC'");
}

#[test]
fn parse_show_statements() {
    all_dialects().verified_stmt("SHOW FUNCTIONS LIKE 'pattern'");
    all_dialects().verified_stmt("SHOW VARIABLES LIKE 'max%'");
    all_dialects().verified_stmt("SHOW COLLATION WHERE Charset = 'utf8'");
    all_dialects().verified_stmt("SHOW COLUMNS FROM mytable");
    all_dialects().one_statement_parses_to(
        "SHOW COLUMNS FROM mytable FROM mydb",
        "SHOW COLUMNS FROM mydb.mytable",
    );
    all_dialects().verified_stmt("SHOW EXTENDED FULL COLUMNS FROM t");
    all_dialects().verified_stmt("SHOW TABLES FROM db LIKE 't%'");
    all_dialects().verified_stmt("SHOW CREATE TABLE t");
    all_dialects().verified_stmt("SHOW autocommit");
}

#[test]
fn parse_explain_and_describe() {
    all_dialects().verified_stmt("EXPLAIN SELECT 1");
    all_dialects().verified_stmt("EXPLAIN ANALYZE VERBOSE SELECT 1");
    all_dialects().verified_stmt("EXPLAIN FORMAT JSON SELECT 1");
    all_dialects().verified_stmt("DESCRIBE mytable");

    let err = all_dialects()
        .parse_sql_statements("EXPLAIN EXPLAIN SELECT 1")
        .unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Explain must be root of the plan".into())
    );
}

#[test]
fn parse_grant_revoke() {
    all_dialects().verified_stmt(
        "GRANT SELECT (a, b), INSERT ON t1, t2 TO alice, bob WITH GRANT OPTION",
    );
    all_dialects().verified_stmt("GRANT ALL PRIVILEGES ON SCHEMA s TO carol GRANTED BY dave");
    all_dialects().verified_stmt("GRANT USAGE ON ALL SEQUENCES IN SCHEMA s TO role1");
    all_dialects().verified_stmt("REVOKE SELECT ON t FROM alice CASCADE");
    all_dialects().verified_stmt("REVOKE ALL ON ALL TABLES IN SCHEMA s FROM bob");
}

#[test]
fn parse_misc_statements() {
    all_dialects().verified_stmt("DISCARD ALL");
    all_dialects().verified_stmt("DISCARD PLANS");
    all_dialects().verified_stmt("CLOSE my_cursor");
    all_dialects().verified_stmt("CLOSE ALL");
    all_dialects().verified_stmt("ASSERT x = 1 AS 'x must be one'");
    all_dialects().verified_stmt("USE mydb");
    all_dialects().verified_stmt("KILL QUERY 42");
    all_dialects().verified_stmt("TRUNCATE TABLE t");
    all_dialects().verified_stmt("CACHE TABLE t");
    all_dialects().verified_stmt("CACHE TABLE t AS SELECT * FROM u");
    all_dialects().verified_stmt("UNCACHE TABLE IF EXISTS t");
}

// ============================================================================
// Errors & options
// ============================================================================

#[test]
fn expectation_errors_carry_locations() {
    let err = parse(&GenericDialect, "SELECT * FROM").unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Expected identifier, found: EOF".into())
    );

    let err = parse(&GenericDialect, "SELECT 1 1").unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Expected end of statement, found: 1, Line: 1, Col: 10".into())
    );
}

#[test]
fn recursion_limit_is_enforced_and_configurable() {
    use squall_lib_core::parser::Parser;

    let shallow = "SELECT ((((1))))";
    assert!(parse(&GenericDialect, shallow).is_ok());

    let deep = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(
        parse(&GenericDialect, &deep).unwrap_err(),
        ParserError::RecursionLimitExceeded
    );

    // A raised limit accepts the same input
    let statements = Parser::new(&GenericDialect)
        .with_recursion_limit(300)
        .try_with_sql(&deep)
        .unwrap()
        .parse_statements()
        .unwrap();
    assert_eq!(statements.len(), 1);
}

#[test]
fn unescape_option_controls_string_literals() {
    use squall_lib_core::parser::{Parser, ParserOptions};

    let sql = "SELECT 'a''b'";
    match all_dialects().verified_stmt(sql) {
        Statement::Query(query) => match *query.body {
            SetExpr::Select(select) => assert_eq!(
                select.projection[0],
                SelectItem::UnnamedExpr(Expr::Value(Value::SingleQuotedString("a'b".into())))
            ),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }

    // With unescape off the doubled quote is preserved, and printing does
    // not double it again
    let statements = Parser::new(&GenericDialect)
        .with_options(ParserOptions {
            unescape: false,
            recursion_limit: 50,
        })
        .try_with_sql(sql)
        .unwrap()
        .parse_statements()
        .unwrap();
    assert_eq!(statements[0].to_string(), sql);
}

#[test]
fn parse_placeholders() {
    generic().verified_expr("?");
    generic().verified_only_select("SELECT * FROM t WHERE id = ?3");
    generic().verified_only_select("SELECT * FROM t WHERE id = :name");
}

#[test]
fn parse_compound_and_quoted_identifiers() {
    all_dialects().verified_expr("a.b.c");
    all_dialects().verified_only_select("SELECT \"quoted id\" FROM \"schema\".\"table\"");
    let err = parse(&GenericDialect, "SELECT a FROM db..t").unwrap_err();
    assert_eq!(
        err,
        ParserError::ParserError("Expected identifier, found: ., Line: 1, Col: 18".into())
    );
}

#[test]
fn parse_wildcards() {
    all_dialects().verified_only_select("SELECT * FROM t");
    all_dialects().verified_only_select("SELECT t.* FROM t");
    all_dialects().verified_only_select("SELECT db.t.* FROM db.t");
}

#[test]
fn parse_insert_on_conflict_and_returning() {
    generic().verified_stmt(
        "INSERT INTO t (a, b) VALUES (1, 2) ON CONFLICT(a) DO UPDATE SET b = 2 RETURNING a",
    );
    generic().verified_stmt("INSERT INTO t VALUES (1) ON CONFLICT DO NOTHING");
    generic().verified_stmt("INSERT INTO t VALUES (1) ON DUPLICATE KEY UPDATE b = 2");
    generic().verified_stmt("INSERT INTO t (SELECT a FROM u)");
}
