use squall_lib_core::dialects::Dialect;

/// The most permissive dialect: accepts the union of the constructs the
/// engine-specific dialects gate individually. The default when the caller
/// doesn't care which engine the query targets.
#[derive(Debug, Default)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '#' || ch == '@'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '@' || ch == '$' || ch == '#' || ch == '_'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '`'
    }

    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }

    fn supports_within_group(&self) -> bool {
        true
    }

    fn supports_xor(&self) -> bool {
        true
    }

    fn supports_json_operators(&self) -> bool {
        true
    }

    fn supports_dollar_quoted_strings(&self) -> bool {
        true
    }

    fn supports_semi_anti_join(&self) -> bool {
        true
    }

    fn supports_qualify(&self) -> bool {
        true
    }

    fn supports_distinct_on(&self) -> bool {
        true
    }

    fn supports_select_top(&self) -> bool {
        true
    }

    fn supports_named_colon_placeholder(&self) -> bool {
        true
    }
}
