use squall_lib_core::dialects::Dialect;

/// Strict ANSI SQL:2011. The baseline every other dialect diverges from.
#[derive(Debug, Default)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }
}
