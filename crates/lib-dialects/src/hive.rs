use squall_lib_core::dialects::Dialect;

/// A [`Dialect`] for [Apache Hive](https://hive.apache.org/).
#[derive(Debug, Default)]
pub struct HiveDialect;

impl Dialect for HiveDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // Identifiers may begin with a digit; those are claimed while
        // tokenizing numbers (`supports_numeric_prefix`), which keeps the
        // exponent scanner out of identifier territory.
        ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ch == '{' || ch == '}'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn supports_numeric_prefix(&self) -> bool {
        true
    }

    fn supports_hash_line_comment(&self) -> bool {
        true
    }

    fn supports_semi_anti_join(&self) -> bool {
        true
    }

    fn supports_string_literal_backslash_escape(&self) -> bool {
        true
    }
}
