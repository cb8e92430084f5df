use thiserror::Error;

/// The single error type surfaced by the lexer and the parser.
///
/// Messages fall into a few families: lexical ("Parser unable to read
/// character at index ..."), expectation ("Expected ..., found: ..."), and
/// structural ("Recursion limit exceeded").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("sql lexer error: {0}")]
    TokenizerError(String),
    #[error("sql parser error: {0}")]
    ParserError(String),
    #[error("Recursion limit exceeded")]
    RecursionLimitExceeded,
}
