use squall_lib_core::dialects::Dialect;

/// A [`Dialect`] for [DuckDB](https://duckdb.org/).
#[derive(Debug, Default)]
pub struct DuckDbDialect;

impl Dialect for DuckDbDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '$' || ch == '_'
    }

    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }

    fn supports_json_operators(&self) -> bool {
        true
    }

    fn supports_dollar_quoted_strings(&self) -> bool {
        true
    }

    fn supports_distinct_on(&self) -> bool {
        true
    }

    fn supports_qualify(&self) -> bool {
        true
    }
}
