//! The dialect-independent core of the squall SQL front-end: a hand-written
//! lexer, a recursive-descent statement parser combined with a Pratt
//! expression parser, the AST families with their canonical printer, and the
//! [`dialects::Dialect`] capability trait that the concrete engine dialects
//! (in `squall-lib-dialects`) implement.
//!
//! The parser is syntax-only: it builds a faithful tree of the input query
//! and performs no name resolution or type checking.

pub mod ast;
pub mod dialects;
pub mod errors;
pub mod keywords;
pub mod lexer;
pub mod parser;
pub mod test_functions;

use crate::ast::{Expr, Statement};
use crate::dialects::Dialect;
use crate::errors::ParserError;
use crate::lexer::{Lexer, Token, TokenWithLocation};
use crate::parser::Parser;

/// Parse zero or more semicolon-separated statements.
pub fn parse(dialect: &dyn Dialect, sql: &str) -> Result<Vec<Statement>, ParserError> {
    Parser::parse_sql(dialect, sql)
}

/// Parse exactly one expression; trailing input is an error.
pub fn parse_expression(dialect: &dyn Dialect, sql: &str) -> Result<Expr, ParserError> {
    let mut parser = Parser::new(dialect).try_with_sql(sql)?;
    let expr = parser.parse_expr()?;
    if parser.peek_token() != Token::EOF {
        return parser.expected("end of expression", parser.peek_token());
    }
    Ok(expr)
}

/// Expose the lexer: produce the located token stream for `sql`.
pub fn tokenize(dialect: &dyn Dialect, sql: &str) -> Result<Vec<TokenWithLocation>, ParserError> {
    Lexer::new(dialect, sql).tokenize_with_location()
}
