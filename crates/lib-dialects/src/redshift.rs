use squall_lib_core::dialects::Dialect;

/// A [`Dialect`] for [Amazon Redshift](https://aws.amazon.com/redshift/).
/// Close to Postgres, minus dollar quoting, plus `#`-prefixed temp tables.
#[derive(Debug, Default)]
pub struct RedshiftDialect;

impl Dialect for RedshiftDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // `#` for temporary tables
        ch.is_alphabetic() || ch == '_' || ch == '#'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '$' || ch == '_' || ch == '#'
    }

    fn supports_caret_bitwise_xor(&self) -> bool {
        false
    }

    fn supports_json_operators(&self) -> bool {
        true
    }

    fn supports_within_group(&self) -> bool {
        true
    }
}
