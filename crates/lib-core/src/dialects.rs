//! The dialect capability surface.
//!
//! A dialect is a bundle of lexical rules, operator availability bits, and
//! parsing hooks. The lexer and parser only ever see `&dyn Dialect`; concrete
//! implementations live in the `squall-lib-dialects` crate and are looked up
//! through [`DialectKind`].

use core::fmt::Debug;

use strum::IntoEnumIterator;

use crate::ast::{Expr, Statement};
use crate::errors::ParserError;
use crate::parser::Parser;

/// The capability set consulted by the lexer and parser.
///
/// Every `supports_*` method is a per-dialect boolean guard; the defaults
/// describe ANSI behavior. The four `parse_*`/`get_next_precedence` hooks let
/// a dialect intercept parsing: returning `None` falls through to the
/// generic implementation.
pub trait Dialect: Debug {
    /// Whether `ch` can start an unquoted identifier.
    fn is_identifier_start(&self, ch: char) -> bool;

    /// Whether `ch` can continue an unquoted identifier.
    fn is_identifier_part(&self, ch: char) -> bool;

    /// Whether `ch` opens a delimited (quoted) identifier.
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// `agg(x) FILTER (WHERE ...)`
    fn supports_filter_during_aggregation(&self) -> bool {
        false
    }

    /// `agg(x) WITHIN GROUP (ORDER BY ...)`
    fn supports_within_group(&self) -> bool {
        false
    }

    /// `SUBSTRING(x FROM 1 FOR 2)`; when false only the comma form parses.
    fn supports_substring_from_for_expr(&self) -> bool {
        true
    }

    /// The `XOR` logical operator.
    fn supports_xor(&self) -> bool {
        false
    }

    /// `^` as bitwise xor. Postgres reserves `^`, so it is off there.
    fn supports_caret_bitwise_xor(&self) -> bool {
        true
    }

    /// The `->`/`->>`/`#>`/... JSON operator family.
    fn supports_json_operators(&self) -> bool {
        false
    }

    /// `$tag$ ... $tag$` string literals.
    fn supports_dollar_quoted_strings(&self) -> bool {
        false
    }

    /// Identifiers that begin with a digit, like Hive's `123_bucket`.
    fn supports_numeric_prefix(&self) -> bool {
        false
    }

    /// Backslash escape sequences inside single-quoted strings.
    fn supports_string_literal_backslash_escape(&self) -> bool {
        false
    }

    /// `# ...` single-line comments.
    fn supports_hash_line_comment(&self) -> bool {
        false
    }

    /// `:name` parameter markers. Off by default: `:` has other meanings in
    /// several dialects (Hive variable prefixes for one).
    fn supports_named_colon_placeholder(&self) -> bool {
        false
    }

    /// `LEFT SEMI JOIN` / `RIGHT ANTI JOIN` and friends.
    fn supports_semi_anti_join(&self) -> bool {
        false
    }

    /// The `QUALIFY` clause after `HAVING`.
    fn supports_qualify(&self) -> bool {
        false
    }

    /// `SELECT DISTINCT ON (...)`.
    fn supports_distinct_on(&self) -> bool {
        false
    }

    /// `SELECT TOP (n)` projection prefix.
    fn supports_select_top(&self) -> bool {
        false
    }

    /// Statement-level hook, consulted before generic dispatch.
    fn parse_statement(&self, _parser: &mut Parser<'_>) -> Option<Result<Statement, ParserError>> {
        None
    }

    /// Prefix-expression hook, consulted before the generic Pratt prefix.
    fn parse_prefix(&self, _parser: &mut Parser<'_>) -> Option<Result<Expr, ParserError>> {
        None
    }

    /// Infix-expression hook, consulted before the generic Pratt infix.
    fn parse_infix(
        &self,
        _parser: &mut Parser<'_>,
        _expr: &Expr,
        _precedence: u8,
    ) -> Option<Result<Expr, ParserError>> {
        None
    }

    /// Precedence-table hook; `None` uses the built-in table.
    fn get_next_precedence(&self, _parser: &Parser<'_>) -> Option<Result<u8, ParserError>> {
        None
    }
}

#[derive(
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
    Debug,
    Clone,
    Copy,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum DialectKind {
    Ansi,
    Bigquery,
    Clickhouse,
    Databricks,
    Duckdb,
    #[default]
    Generic,
    Hive,
    Mssql,
    Mysql,
    Oracle,
    Postgres,
    Redshift,
    Snowflake,
    Sqlite,
}

impl DialectKind {
    /// Returns the human-readable name of the dialect.
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Ansi => "ansi",
            DialectKind::Bigquery => "bigquery",
            DialectKind::Clickhouse => "clickhouse",
            DialectKind::Databricks => "databricks",
            DialectKind::Duckdb => "duckdb",
            DialectKind::Generic => "generic",
            DialectKind::Hive => "hive",
            DialectKind::Mssql => "mssql",
            DialectKind::Mysql => "mysql",
            DialectKind::Oracle => "oracle",
            DialectKind::Postgres => "postgres",
            DialectKind::Redshift => "redshift",
            DialectKind::Snowflake => "snowflake",
            DialectKind::Sqlite => "sqlite",
        }
    }
}

/// Generate a readout of available dialects.
pub fn dialect_readout() -> Vec<String> {
    DialectKind::iter()
        .map(|x| x.as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    #[test]
    fn dialect_readout_is_alphabetically_sorted() {
        let readout = super::dialect_readout();

        let mut sorted = readout.clone();
        sorted.sort();

        assert_eq!(readout, sorted);
    }
}
