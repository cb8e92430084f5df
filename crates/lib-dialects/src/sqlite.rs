use squall_lib_core::ast::{SqliteOnConflict, Statement};
use squall_lib_core::dialects::Dialect;
use squall_lib_core::errors::ParserError;
use squall_lib_core::keywords::Keyword;
use squall_lib_core::parser::Parser;

/// A [`Dialect`] for [SQLite](https://www.sqlite.org).
#[derive(Debug, Default)]
pub struct SQLiteDialect;

impl Dialect for SQLiteDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // See https://www.sqlite.org/draft/tokenreq.html
        ch.is_ascii_alphabetic()
            || ch == '_'
            || ch == '$'
            || ch == '@'
            || ('\u{007f}'..='\u{ffff}').contains(&ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || ch.is_ascii_digit()
    }

    // SQLite accepts double quotes, backticks and brackets alike.
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '`' || ch == '['
    }

    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }

    fn supports_json_operators(&self) -> bool {
        true
    }

    fn supports_named_colon_placeholder(&self) -> bool {
        true
    }

    /// `REPLACE INTO ...` is shorthand for `INSERT OR REPLACE INTO ...`.
    fn parse_statement(&self, parser: &mut Parser<'_>) -> Option<Result<Statement, ParserError>> {
        if !parser.parse_keyword(Keyword::REPLACE) {
            return None;
        }
        Some(parser.parse_insert().map(|mut statement| {
            if let Statement::Insert { ref mut or, .. } = statement {
                *or = Some(SqliteOnConflict::Replace);
            }
            statement
        }))
    }
}
