//! Hive specifics: digit-led identifiers, `INSERT OVERWRITE`, partition
//! clauses, `ANALYZE TABLE`, external tables, and semi/anti joins.

use pretty_assertions::assert_eq;
use squall_lib_core::lexer::Token;
use squall_lib_core::test_functions::*;
use squall_lib_core::tokenize;
use squall_lib_dialects::HiveDialect;

fn hive() -> TestedDialects {
    TestedDialects::one_dialect(HiveDialect)
}

#[test]
fn digit_led_identifiers_lex_as_words() {
    let tokens: Vec<Token> = tokenize(&HiveDialect, "1e2 1.5e2 123col")
        .unwrap()
        .into_iter()
        .map(|t| t.token)
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect();
    // `1e2` is an identifier in Hive; the exponent scanner must not claim
    // it. `1.5e2` is still a number.
    assert_eq!(
        tokens,
        vec![
            Token::make_word("1e2", None),
            Token::Number("1.5e2".into(), false),
            Token::make_word("123col", None),
        ]
    );

    hive().verified_only_select("SELECT * FROM db.1table");
}

#[test]
fn parse_insert_overwrite_with_partition() {
    hive().verified_stmt(
        "INSERT OVERWRITE TABLE db.new_table PARTITION (a = '1', b) SELECT a, b, c FROM db.table",
    );
}

#[test]
fn parse_analyze_table() {
    hive().verified_stmt(
        "ANALYZE TABLE db.table_name PARTITION (a = '1234', b) COMPUTE STATISTICS NOSCAN CACHE METADATA",
    );
    hive().verified_stmt("ANALYZE TABLE t COMPUTE STATISTICS FOR COLUMNS a, b");
}

#[test]
fn parse_truncate_partition() {
    hive().verified_stmt("TRUNCATE TABLE db.t PARTITION (a = 1, b = 2)");
}

#[test]
fn parse_external_table() {
    hive().verified_stmt(
        "CREATE EXTERNAL TABLE IF NOT EXISTS db.table (a BIGINT, b STRING, c TIMESTAMP) STORED AS ORC LOCATION 's3://path'",
    );
}

#[test]
fn parse_semi_and_anti_joins() {
    hive().verified_only_select("SELECT * FROM a LEFT SEMI JOIN b ON a.x = b.x");
    hive().verified_only_select("SELECT * FROM a RIGHT ANTI JOIN b ON a.x = b.x");
}

#[test]
fn parse_set_hivevar() {
    hive().verified_stmt("SET HIVEVAR:name = a, b, c_d");
}

#[test]
fn parse_spaceship_operator() {
    hive().verified_only_select("SELECT * FROM db.table WHERE a <=> b");
}
