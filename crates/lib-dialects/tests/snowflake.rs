//! Snowflake specifics: `QUALIFY`, zero-copy `CLONE`, `PIVOT`, and
//! `WITHIN GROUP` aggregates.

use squall_lib_core::test_functions::*;
use squall_lib_dialects::SnowflakeDialect;

fn snowflake() -> TestedDialects {
    TestedDialects::one_dialect(SnowflakeDialect)
}

#[test]
fn parse_create_table_clone() {
    snowflake().verified_stmt("CREATE TABLE t CLONE src");
    snowflake().verified_stmt("CREATE OR REPLACE TABLE t CLONE db.schema.src");
}

#[test]
fn parse_qualify() {
    snowflake().verified_only_select(
        "SELECT a, b FROM t QUALIFY ROW_NUMBER() OVER (PARTITION BY a ORDER BY b) = 1",
    );
}

#[test]
fn parse_pivot() {
    snowflake().verified_only_select(
        "SELECT * FROM monthly_sales PIVOT(SUM(amount) FOR month IN ('JAN', 'FEB', 'MAR')) AS p",
    );
    snowflake().verified_only_select(
        "SELECT * FROM sales AS s PIVOT(COUNT(x) FOR c IN (1, 2)) AS p (a, b) ORDER BY a",
    );
}

#[test]
fn parse_within_group_array_agg() {
    snowflake().verified_expr("ARRAY_AGG(DISTINCT x) WITHIN GROUP (ORDER BY x)");
    snowflake().verified_expr("LISTAGG(x, '|') WITHIN GROUP (ORDER BY y)");
}

#[test]
fn parse_top() {
    snowflake().verified_only_select("SELECT TOP (4) * FROM t");
}

#[test]
fn parse_merge() {
    snowflake().verified_stmt(
        "MERGE INTO t USING (SELECT * FROM s) AS src ON t.id = src.id \
         WHEN MATCHED THEN UPDATE SET v = src.v \
         WHEN NOT MATCHED THEN INSERT (id, v) VALUES (src.id, src.v)",
    );
}
