use squall_lib_core::dialects::Dialect;

/// A [`Dialect`] for [PostgreSQL](https://www.postgresql.org/).
#[derive(Debug, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // See https://www.postgresql.org/docs/current/sql-syntax-lexical.html#SQL-SYNTAX-IDENTIFIERS
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '$' || ch == '_'
    }

    /// `^` is exponentiation in Postgres; bitwise xor is spelled `#`.
    fn supports_caret_bitwise_xor(&self) -> bool {
        false
    }

    fn supports_json_operators(&self) -> bool {
        true
    }

    fn supports_dollar_quoted_strings(&self) -> bool {
        true
    }

    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }

    fn supports_within_group(&self) -> bool {
        true
    }

    fn supports_distinct_on(&self) -> bool {
        true
    }
}
