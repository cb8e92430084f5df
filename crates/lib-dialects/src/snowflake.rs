use squall_lib_core::dialects::Dialect;

/// A [`Dialect`] for [Snowflake](https://www.snowflake.com/).
#[derive(Debug, Default)]
pub struct SnowflakeDialect;

impl Dialect for SnowflakeDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '$' || ch == '_'
    }

    fn supports_within_group(&self) -> bool {
        true
    }

    fn supports_qualify(&self) -> bool {
        true
    }

    fn supports_select_top(&self) -> bool {
        true
    }
}
