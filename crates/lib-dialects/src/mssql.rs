use squall_lib_core::dialects::Dialect;

/// A [`Dialect`] for [Microsoft SQL Server](https://www.microsoft.com/en-us/sql-server/).
#[derive(Debug, Default)]
pub struct MsSqlDialect;

impl Dialect for MsSqlDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // See https://docs.microsoft.com/en-us/sql/relational-databases/databases/database-identifiers
        // `@` (local variables) and `#` (temporary objects) are legal.
        ch.is_alphabetic() || ch == '_' || ch == '#' || ch == '@'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '@' || ch == '$' || ch == '#' || ch == '_'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '['
    }

    /// T-SQL only knows `SUBSTRING(expr, start, length)`.
    fn supports_substring_from_for_expr(&self) -> bool {
        false
    }

    fn supports_select_top(&self) -> bool {
        true
    }

    fn supports_within_group(&self) -> bool {
        true
    }
}
