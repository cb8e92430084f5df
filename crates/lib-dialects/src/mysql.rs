use squall_lib_core::ast::{BinaryOperator, Expr};
use squall_lib_core::dialects::Dialect;
use squall_lib_core::errors::ParserError;
use squall_lib_core::keywords::Keyword;
use squall_lib_core::lexer::Token;
use squall_lib_core::parser::Parser;

/// A [`Dialect`] for [MySQL](https://www.mysql.com/).
#[derive(Debug, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        // See https://dev.mysql.com/doc/refman/8.0/en/identifiers.html.
        // Identifiers which begin with a digit are recognized while
        // tokenizing numbers, so they can be distinguished from exponent
        // numeric literals.
        ch.is_alphabetic()
            || ch == '_'
            || ch == '$'
            || ch == '@'
            || ('\u{0080}'..='\u{ffff}').contains(&ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || ch.is_ascii_digit()
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn supports_xor(&self) -> bool {
        true
    }

    fn supports_numeric_prefix(&self) -> bool {
        true
    }

    fn supports_string_literal_backslash_escape(&self) -> bool {
        true
    }

    fn supports_hash_line_comment(&self) -> bool {
        true
    }

    fn supports_json_operators(&self) -> bool {
        true
    }

    /// `DIV` integer division binds like `/`.
    fn get_next_precedence(&self, parser: &Parser<'_>) -> Option<Result<u8, ParserError>> {
        match parser.peek_token().token {
            Token::Word(w) if w.keyword == Keyword::DIV => Some(Ok(Parser::MUL_DIV_MOD_PREC)),
            _ => None,
        }
    }

    fn parse_infix(
        &self,
        parser: &mut Parser<'_>,
        expr: &Expr,
        _precedence: u8,
    ) -> Option<Result<Expr, ParserError>> {
        if !parser.parse_keyword(Keyword::DIV) {
            return None;
        }
        Some(
            parser
                .parse_subexpr(Parser::MUL_DIV_MOD_PREC)
                .map(|right| Expr::BinaryOp {
                    left: Box::new(expr.clone()),
                    op: BinaryOperator::MyIntegerDivide,
                    right: Box::new(right),
                }),
        )
    }
}
