//! The statement parser.
//!
//! This module owns the token cursor, keyword/symbol matchers, the recursion
//! guard and statement dispatch. The Pratt expression parser lives in
//! [`mod@self::expr`], query expressions in [`mod@self::query`], and the
//! individual statement grammars in [`mod@self::statement`]; all of them are
//! `impl Parser` blocks over the same cursor.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::ast::*;
use crate::dialects::Dialect;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::lexer::{Lexer, Token, TokenWithLocation};

macro_rules! parser_err {
    ($MSG:expr) => {
        Err(ParserError::ParserError($MSG.to_string()))
    };
}

// Textual scoping: submodules declared below may use `parser_err!`.
pub mod expr;
pub mod query;
pub mod statement;

/// The default number of nested expressions/queries the parser will descend
/// into before refusing the input.
pub const DEFAULT_RECURSION_LIMIT: usize = 50;

/// Options that tweak parsing behavior without changing the grammar.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Collapse `''` (and dialect-permitted backslash escapes) inside string
    /// literals. When false, literal bodies are preserved byte-for-byte.
    pub unescape: bool,
    /// The nesting depth at which parsing aborts with
    /// [`ParserError::RecursionLimitExceeded`].
    pub recursion_limit: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            unescape: true,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// A scope-released counter guarding against stack exhaustion.
///
/// Each recursive entry point calls [`RecursionCounter::try_decrease`] and
/// holds the returned guard for the duration of the call; the guard restores
/// the budget on drop, on both success and error paths.
#[derive(Debug)]
pub(crate) struct RecursionCounter {
    remaining_depth: Rc<Cell<usize>>,
}

impl RecursionCounter {
    fn new(remaining_depth: usize) -> Self {
        Self {
            remaining_depth: Rc::new(Cell::new(remaining_depth)),
        }
    }

    pub(crate) fn try_decrease(&self) -> Result<DepthGuard, ParserError> {
        let old_value = self.remaining_depth.get();
        if old_value == 0 {
            Err(ParserError::RecursionLimitExceeded)
        } else {
            self.remaining_depth.set(old_value - 1);
            Ok(DepthGuard {
                remaining_depth: self.remaining_depth.clone(),
            })
        }
    }
}

pub(crate) struct DepthGuard {
    remaining_depth: Rc<Cell<usize>>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let old_value = self.remaining_depth.get();
        self.remaining_depth.set(old_value + 1);
    }
}

/// Whether a parenthesized list may be omitted entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsOptional {
    Optional,
    Mandatory,
}

pub struct Parser<'a> {
    tokens: Vec<TokenWithLocation>,
    /// The index of the first unprocessed token in `self.tokens`.
    index: usize,
    dialect: &'a dyn Dialect,
    options: ParserOptions,
    pub(crate) recursion_counter: RecursionCounter,
}

impl<'a> Parser<'a> {
    /// Create a parser for a [`Dialect`]; feed it tokens with
    /// [`Self::with_tokens`] or source text with [`Self::try_with_sql`].
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            tokens: vec![],
            index: 0,
            dialect,
            options: ParserOptions::default(),
            recursion_counter: RecursionCounter::new(DEFAULT_RECURSION_LIMIT),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.recursion_counter = RecursionCounter::new(options.recursion_limit);
        self.options = options;
        self
    }

    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.options.recursion_limit = recursion_limit;
        self.recursion_counter = RecursionCounter::new(recursion_limit);
        self
    }

    pub fn with_tokens_with_locations(mut self, tokens: Vec<TokenWithLocation>) -> Self {
        self.tokens = tokens;
        self.index = 0;
        self
    }

    pub fn with_tokens(self, tokens: Vec<Token>) -> Self {
        let tokens_with_locations = tokens.into_iter().map(TokenWithLocation::wrap).collect();
        self.with_tokens_with_locations(tokens_with_locations)
    }

    /// Tokenize `sql` and prime the cursor.
    pub fn try_with_sql(self, sql: &str) -> Result<Self, ParserError> {
        debug!("Parsing sql '{sql}'...");
        let tokens = Lexer::new(self.dialect, sql)
            .with_unescape(self.options.unescape)
            .tokenize_with_location()?;
        Ok(self.with_tokens_with_locations(tokens))
    }

    /// Parse a semicolon-separated statement sequence.
    pub fn parse_sql(dialect: &dyn Dialect, sql: &str) -> Result<Vec<Statement>, ParserError> {
        Parser::new(dialect).try_with_sql(sql)?.parse_statements()
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse statements until EOF. Empty input yields an empty list; leading
    /// and repeated semicolons are tolerated.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut stmts = Vec::new();
        let mut expecting_statement_delimiter = false;
        loop {
            while self.consume_token(&Token::SemiColon) {
                expecting_statement_delimiter = false;
            }

            if self.peek_token() == Token::EOF {
                break;
            }
            if expecting_statement_delimiter {
                return self.expected("end of statement", self.peek_token());
            }

            let statement = self.parse_statement()?;
            stmts.push(statement);
            expecting_statement_delimiter = true;
        }
        Ok(stmts)
    }

    /// Parse a single top-level statement, stopping before the statement
    /// separator if any. The dialect gets the first chance to own it.
    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let dialect = self.dialect;
        if let Some(statement) = dialect.parse_statement(self) {
            return statement;
        }

        let next_token = self.next_token();
        debug!("parsing statement starting with {:?}", next_token.token);
        match &next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::KILL => self.parse_kill(),
                Keyword::DESCRIBE => self.parse_explain(true),
                Keyword::EXPLAIN => self.parse_explain(false),
                Keyword::ANALYZE => self.parse_analyze(),
                Keyword::SELECT | Keyword::WITH | Keyword::VALUES | Keyword::TABLE => {
                    self.prev_token();
                    Ok(Statement::Query(Box::new(self.parse_query()?)))
                }
                Keyword::TRUNCATE => self.parse_truncate(),
                Keyword::CREATE => self.parse_create(),
                Keyword::CACHE => self.parse_cache_table(),
                Keyword::DROP => self.parse_drop(),
                Keyword::DISCARD => self.parse_discard(),
                Keyword::DELETE => self.parse_delete(),
                Keyword::INSERT => self.parse_insert(),
                Keyword::UNCACHE => self.parse_uncache_table(),
                Keyword::UPDATE => self.parse_update(),
                Keyword::ALTER => self.parse_alter(),
                Keyword::CLOSE => self.parse_close(),
                Keyword::SET => self.parse_set(),
                Keyword::SHOW => self.parse_show(),
                Keyword::USE => self.parse_use(),
                Keyword::GRANT => self.parse_grant(),
                Keyword::REVOKE => self.parse_revoke(),
                Keyword::START => self.parse_start_transaction(),
                Keyword::BEGIN => self.parse_begin(),
                Keyword::COMMIT => self.parse_commit(),
                Keyword::ROLLBACK => self.parse_rollback(),
                Keyword::ASSERT => self.parse_assert(),
                Keyword::MERGE => self.parse_merge(),
                _ => self.expected("an SQL statement", next_token),
            },
            Token::LParen => {
                self.prev_token();
                Ok(Statement::Query(Box::new(self.parse_query()?)))
            }
            _ => self.expected("an SQL statement", next_token),
        }
    }

    // ========================================================================
    // Token cursor
    // ========================================================================

    /// Return the first non-whitespace token that has not yet been processed,
    /// without advancing the cursor.
    pub fn peek_token(&self) -> TokenWithLocation {
        self.peek_nth_token(0)
    }

    /// Return the nth non-whitespace token that has not yet been processed.
    pub fn peek_nth_token(&self, mut n: usize) -> TokenWithLocation {
        let mut index = self.index;
        loop {
            index += 1;
            match self.tokens.get(index - 1) {
                Some(TokenWithLocation {
                    token: Token::Whitespace(_),
                    ..
                }) => continue,
                non_whitespace => {
                    if n == 0 {
                        return non_whitespace
                            .cloned()
                            .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF));
                    }
                    n -= 1;
                }
            }
        }
    }

    /// Return the first non-whitespace token that has not yet been processed
    /// and mark it as processed. `Token::EOF` once the stream is exhausted.
    pub fn next_token(&mut self) -> TokenWithLocation {
        loop {
            self.index += 1;
            match self.tokens.get(self.index - 1) {
                Some(TokenWithLocation {
                    token: Token::Whitespace(_),
                    ..
                }) => continue,
                token => {
                    return token
                        .cloned()
                        .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF));
                }
            }
        }
    }

    /// Push the last processed non-whitespace token back onto the stream.
    /// Must not be called after `next_token()` has reached EOF more than
    /// once, as that position is not tracked.
    pub fn prev_token(&mut self) {
        loop {
            assert!(self.index > 0);
            self.index -= 1;
            if let Some(TokenWithLocation {
                token: Token::Whitespace(_),
                ..
            }) = self.tokens.get(self.index)
            {
                continue;
            }
            return;
        }
    }

    /// Report that the current token was unexpected.
    pub fn expected<T>(&self, expected: &str, found: TokenWithLocation) -> Result<T, ParserError> {
        parser_err!(format!("Expected {expected}, found: {found}"))
    }

    /// Consume the next token if it matches; return whether it did.
    #[must_use]
    pub fn consume_token(&mut self, expected: &Token) -> bool {
        if self.peek_token() == *expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Bail out if the current token is not `expected`.
    pub fn expect_token(&mut self, expected: &Token) -> Result<(), ParserError> {
        if self.consume_token(expected) {
            Ok(())
        } else {
            self.expected(&expected.to_string(), self.peek_token())
        }
    }

    /// If the current token is the `expected` keyword, consume it; return
    /// whether it was.
    #[must_use]
    pub fn parse_keyword(&mut self, expected: Keyword) -> bool {
        match self.peek_token().token {
            Token::Word(w) if expected == w.keyword => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    /// If the current and subsequent tokens exactly match the `keywords`
    /// sequence, consume them all; otherwise consume nothing.
    #[must_use]
    pub fn parse_keywords(&mut self, keywords: &[Keyword]) -> bool {
        let index = self.index;
        for &keyword in keywords {
            if !self.parse_keyword(keyword) {
                // Roll back byte-for-byte on a partial match
                self.index = index;
                return false;
            }
        }
        true
    }

    /// If the current token is one of the given keywords, consume it and
    /// return which one it was.
    #[must_use]
    pub fn parse_one_of_keywords(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        match self.peek_token().token {
            Token::Word(w) => keywords.iter().find(|&&keyword| keyword == w.keyword).map(
                |&keyword| {
                    self.next_token();
                    keyword
                },
            ),
            _ => None,
        }
    }

    /// Bail out if the current token is not one of the given keywords.
    pub fn expect_one_of_keywords(&mut self, keywords: &[Keyword]) -> Result<Keyword, ParserError> {
        if let Some(keyword) = self.parse_one_of_keywords(keywords) {
            Ok(keyword)
        } else {
            let keywords: Vec<String> = keywords.iter().map(|x| format!("{x:?}")).collect();
            self.expected(
                &format!("one of {}", keywords.join(" or ")),
                self.peek_token(),
            )
        }
    }

    /// Bail out if the current token is not the `expected` keyword.
    pub fn expect_keyword(&mut self, expected: Keyword) -> Result<(), ParserError> {
        if self.parse_keyword(expected) {
            Ok(())
        } else {
            self.expected(&format!("{expected:?}"), self.peek_token())
        }
    }

    /// Bail out if the following tokens are not the `expected` keyword
    /// sequence.
    pub fn expect_keywords(&mut self, expected: &[Keyword]) -> Result<(), ParserError> {
        for &kw in expected {
            self.expect_keyword(kw)?;
        }
        Ok(())
    }

    /// Run a parser method, reverting the cursor if it fails. The recursion
    /// budget is restored by the depth guards unwinding with the error.
    pub fn maybe_parse<T, F>(&mut self, mut f: F) -> Option<T>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T, ParserError>,
    {
        let index = self.index;
        match f(self) {
            Ok(t) => Some(t),
            Err(_) => {
                self.index = index;
                None
            }
        }
    }

    /// Parse a comma-separated list of one or more items accepted by `f`.
    pub fn parse_comma_separated<T, F>(&mut self, mut f: F) -> Result<Vec<T>, ParserError>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T, ParserError>,
    {
        let mut values = vec![];
        loop {
            values.push(f(self)?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }
        Ok(values)
    }

    // ========================================================================
    // Names, values and data types
    // ========================================================================

    /// Parse a simple one-word identifier (possibly quoted, maybe a keyword).
    pub fn parse_identifier(&mut self) -> Result<Ident, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(ref w) => Ok(w.to_ident()),
            Token::SingleQuotedString(ref s) => Ok(Ident::with_quote('\'', s.clone())),
            _ => self.expected("identifier", next_token),
        }
    }

    /// Parse a possibly-qualified, possibly-quoted object name, rejecting
    /// empty components such as the middle of `a..b`.
    pub fn parse_object_name(&mut self) -> Result<ObjectName, ParserError> {
        let mut idents = vec![];
        loop {
            idents.push(self.parse_identifier()?);
            if !self.consume_token(&Token::Period) {
                break;
            }
        }
        Ok(ObjectName(idents))
    }

    /// Parse identifiers, consuming words until a non-word token.
    pub fn parse_identifiers(&mut self) -> Result<Vec<Ident>, ParserError> {
        let mut idents = vec![];
        while let Token::Word(w) = self.peek_token().token {
            idents.push(w.to_ident());
            self.next_token();
        }
        Ok(idents)
    }

    /// Parse `AS identifier` (or simply `identifier` if it's not a reserved
    /// keyword in this context).
    pub fn parse_optional_alias(
        &mut self,
        reserved_kwds: &[Keyword],
    ) -> Result<Option<Ident>, ParserError> {
        let after_as = self.parse_keyword(Keyword::AS);
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(ref w) if after_as || !reserved_kwds.contains(&w.keyword) => {
                Ok(Some(w.to_ident()))
            }
            Token::SingleQuotedString(ref s) => Ok(Some(Ident::with_quote('\'', s.clone()))),
            _ => {
                if after_as {
                    return self.expected("an identifier after AS", next_token);
                }
                self.prev_token();
                Ok(None)
            }
        }
    }

    /// Parse `AS identifier [(col, ..)]` as used after a table factor.
    pub fn parse_optional_table_alias(&mut self) -> Result<Option<TableAlias>, ParserError> {
        match self.parse_optional_alias(crate::keywords::RESERVED_FOR_TABLE_ALIAS)? {
            Some(name) => {
                let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                Ok(Some(TableAlias { name, columns }))
            }
            None => Ok(None),
        }
    }

    /// Parse `(column, ..)`; brackets may be omitted when `optional`.
    pub fn parse_parenthesized_column_list(
        &mut self,
        optional: IsOptional,
        allow_empty: bool,
    ) -> Result<Vec<Ident>, ParserError> {
        if self.consume_token(&Token::LParen) {
            if allow_empty && self.peek_token() == Token::RParen {
                self.next_token();
                Ok(vec![])
            } else {
                let cols = self.parse_comma_separated(Parser::parse_identifier)?;
                self.expect_token(&Token::RParen)?;
                Ok(cols)
            }
        } else if optional == IsOptional::Optional {
            Ok(vec![])
        } else {
            self.expected("a list of columns in parentheses", self.peek_token())
        }
    }

    /// Parse a literal value (number, string, boolean, NULL, placeholder).
    pub fn parse_value(&mut self) -> Result<Value, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(ref w) => match w.keyword {
                Keyword::TRUE => Ok(Value::Boolean(true)),
                Keyword::FALSE => Ok(Value::Boolean(false)),
                Keyword::NULL => Ok(Value::Null),
                _ => self.expected("a concrete value", next_token),
            },
            Token::Number(ref n, l) => Ok(Value::Number(n.clone(), l)),
            Token::SingleQuotedString(ref s) => Ok(Value::SingleQuotedString(s.clone())),
            Token::DollarQuotedString(ref s) => Ok(Value::DollarQuotedString(s.clone())),
            Token::NationalStringLiteral(ref s) => Ok(Value::NationalStringLiteral(s.clone())),
            Token::HexStringLiteral(ref s) => Ok(Value::HexStringLiteral(s.clone())),
            Token::Placeholder(ref s) => Ok(Value::Placeholder(s.clone())),
            _ => self.expected("a value", next_token),
        }
    }

    pub fn parse_number_value(&mut self) -> Result<Value, ParserError> {
        match self.parse_value()? {
            v @ Value::Number(_, _) => Ok(v),
            v @ Value::Placeholder(_) => Ok(v),
            _ => {
                self.prev_token();
                self.expected("literal number", self.peek_token())
            }
        }
    }

    /// Parse an unsigned literal integer.
    pub fn parse_literal_uint(&mut self) -> Result<u64, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Number(ref s, _) => s.parse::<u64>().map_err(|e| {
                ParserError::ParserError(format!("Could not parse '{s}' as u64: {e}"))
            }),
            _ => self.expected("literal int", next_token),
        }
    }

    /// Parse a literal string; an unquoted non-keyword word also qualifies
    /// (charset names and the like).
    pub fn parse_literal_string(&mut self) -> Result<String, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(ref w) if w.keyword == Keyword::NoKeyword && w.quote_style.is_none() => {
                Ok(w.value.clone())
            }
            Token::SingleQuotedString(ref s) => Ok(s.clone()),
            _ => self.expected("literal string", next_token),
        }
    }

    /// Parse a one-character literal string, as in `LIKE .. ESCAPE 'c'`.
    pub fn parse_literal_char(&mut self) -> Result<char, ParserError> {
        let s = self.parse_literal_string()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => parser_err!(format!("Expect a char, found {s:?}")),
        }
    }

    /// Parse a SQL data type.
    pub fn parse_data_type(&mut self) -> Result<DataType, ParserError> {
        let next_token = self.next_token();
        let mut data = match next_token.token {
            Token::Word(ref w) => match w.keyword {
                Keyword::BOOLEAN => DataType::Boolean,
                Keyword::FLOAT => DataType::Float(self.parse_optional_precision()?),
                Keyword::REAL => DataType::Real,
                Keyword::DOUBLE => {
                    if self.parse_keyword(Keyword::PRECISION) {
                        DataType::DoublePrecision
                    } else {
                        DataType::Double
                    }
                }
                Keyword::TINYINT => {
                    let optional_precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::UNSIGNED) {
                        DataType::UnsignedTinyInt(optional_precision)
                    } else {
                        DataType::TinyInt(optional_precision)
                    }
                }
                Keyword::SMALLINT => {
                    let optional_precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::UNSIGNED) {
                        DataType::UnsignedSmallInt(optional_precision)
                    } else {
                        DataType::SmallInt(optional_precision)
                    }
                }
                Keyword::INT => {
                    let optional_precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::UNSIGNED) {
                        DataType::UnsignedInt(optional_precision)
                    } else {
                        DataType::Int(optional_precision)
                    }
                }
                Keyword::INTEGER => {
                    let optional_precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::UNSIGNED) {
                        DataType::UnsignedInteger(optional_precision)
                    } else {
                        DataType::Integer(optional_precision)
                    }
                }
                Keyword::BIGINT => {
                    let optional_precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::UNSIGNED) {
                        DataType::UnsignedBigInt(optional_precision)
                    } else {
                        DataType::BigInt(optional_precision)
                    }
                }
                Keyword::VARCHAR => DataType::Varchar(self.parse_optional_precision()?),
                Keyword::NVARCHAR | Keyword::NCHAR => {
                    DataType::Nvarchar(self.parse_optional_precision()?)
                }
                Keyword::CHAR | Keyword::CHARACTER => {
                    if self.parse_keyword(Keyword::VARYING) {
                        DataType::Varchar(self.parse_optional_precision()?)
                    } else {
                        DataType::Char(self.parse_optional_precision()?)
                    }
                }
                Keyword::CLOB => DataType::Clob(self.parse_optional_precision()?),
                Keyword::BINARY => {
                    if self.parse_keyword(Keyword::VARYING) {
                        DataType::Varbinary(self.parse_optional_precision()?)
                    } else {
                        DataType::Binary(self.parse_optional_precision()?)
                    }
                }
                Keyword::VARBINARY => DataType::Varbinary(self.parse_optional_precision()?),
                Keyword::BLOB => DataType::Blob(self.parse_optional_precision()?),
                Keyword::UUID => DataType::Uuid,
                Keyword::DATE => DataType::Date,
                Keyword::DATETIME => DataType::Datetime,
                Keyword::TIMESTAMP => DataType::Timestamp(self.parse_timezone_info()?),
                Keyword::TIMESTAMPTZ => DataType::Timestamp(TimezoneInfo::Tz),
                Keyword::TIME => DataType::Time(self.parse_timezone_info()?),
                Keyword::INTERVAL => DataType::Interval,
                Keyword::JSON => DataType::Json,
                Keyword::TEXT => DataType::Text,
                Keyword::STRING => DataType::String,
                Keyword::BYTEA => DataType::Bytea,
                Keyword::NUMERIC => {
                    DataType::Numeric(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::DECIMAL => {
                    DataType::Decimal(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::DEC => {
                    DataType::Dec(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::BIGNUMERIC => {
                    DataType::BigNumeric(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::ENUM => DataType::Enum(self.parse_string_values()?),
                Keyword::SET => DataType::Set(self.parse_string_values()?),
                Keyword::ARRAY => {
                    // BigQuery-style ARRAY<type>
                    self.expect_token(&Token::Lt)?;
                    let inside_type = self.parse_data_type()?;
                    self.expect_token(&Token::Gt)?;
                    DataType::Array(Box::new(inside_type))
                }
                _ => {
                    self.prev_token();
                    let type_name = self.parse_object_name()?;
                    let modifiers = self.parse_optional_type_modifiers()?;
                    DataType::Custom(type_name, modifiers)
                }
            },
            _ => return self.expected("a data type name", next_token),
        };

        // Postgres array syntax: `INT[]`, `TEXT[][]`, ..
        while self.consume_token(&Token::LBracket) {
            self.expect_token(&Token::RBracket)?;
            data = DataType::Array(Box::new(data));
        }
        Ok(data)
    }

    fn parse_timezone_info(&mut self) -> Result<TimezoneInfo, ParserError> {
        if self.parse_keywords(&[Keyword::WITH, Keyword::TIME, Keyword::ZONE]) {
            Ok(TimezoneInfo::WithTimeZone)
        } else if self.parse_keywords(&[Keyword::WITHOUT, Keyword::TIME, Keyword::ZONE]) {
            Ok(TimezoneInfo::WithoutTimeZone)
        } else {
            Ok(TimezoneInfo::None)
        }
    }

    fn parse_string_values(&mut self) -> Result<Vec<String>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let mut values = Vec::new();
        loop {
            let next_token = self.next_token();
            match next_token.token {
                Token::SingleQuotedString(ref value) => values.push(value.clone()),
                _ => return self.expected("a string", next_token),
            }
            let next_token = self.next_token();
            match next_token.token {
                Token::Comma => (),
                Token::RParen => break,
                _ => return self.expected(", or }", next_token),
            }
        }
        Ok(values)
    }

    pub fn parse_optional_precision(&mut self) -> Result<Option<u64>, ParserError> {
        if self.consume_token(&Token::LParen) {
            let n = self.parse_literal_uint()?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    pub fn parse_optional_precision_scale(
        &mut self,
    ) -> Result<(Option<u64>, Option<u64>), ParserError> {
        if self.consume_token(&Token::LParen) {
            let n = self.parse_literal_uint()?;
            let scale = if self.consume_token(&Token::Comma) {
                Some(self.parse_literal_uint()?)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            Ok((Some(n), scale))
        } else {
            Ok((None, None))
        }
    }

    pub fn parse_exact_number_optional_precision_scale(
        &mut self,
    ) -> Result<ExactNumberInfo, ParserError> {
        if self.consume_token(&Token::LParen) {
            let precision = self.parse_literal_uint()?;
            let scale = if self.consume_token(&Token::Comma) {
                Some(self.parse_literal_uint()?)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            match scale {
                None => Ok(ExactNumberInfo::Precision(precision)),
                Some(scale) => Ok(ExactNumberInfo::PrecisionAndScale(precision, scale)),
            }
        } else {
            Ok(ExactNumberInfo::None)
        }
    }

    fn parse_optional_type_modifiers(&mut self) -> Result<Vec<String>, ParserError> {
        if !self.consume_token(&Token::LParen) {
            return Ok(vec![]);
        }
        let mut modifiers = Vec::new();
        loop {
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(ref w) => modifiers.push(w.value.clone()),
                Token::Number(ref n, _) => modifiers.push(n.clone()),
                Token::SingleQuotedString(ref s) => modifiers.push(s.clone()),
                Token::Comma => continue,
                Token::RParen => break,
                _ => return self.expected("type modifiers", next_token),
            }
        }
        Ok(modifiers)
    }

    /// Parse `ALL`/`DISTINCT`, rejecting the contradictory combination.
    pub fn parse_all_or_distinct(&mut self) -> Result<bool, ParserError> {
        let all = self.parse_keyword(Keyword::ALL);
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        if all && distinct {
            parser_err!("Cannot specify both ALL and DISTINCT".to_string())
        } else {
            Ok(distinct)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialects::Dialect;

    #[derive(Debug)]
    struct PermissiveDialect;

    impl Dialect for PermissiveDialect {
        fn is_identifier_start(&self, ch: char) -> bool {
            ch.is_ascii_alphabetic() || ch == '_'
        }

        fn is_identifier_part(&self, ch: char) -> bool {
            ch.is_ascii_alphanumeric() || ch == '_'
        }
    }

    #[test]
    fn recursion_guard_releases_on_exit() {
        let counter = RecursionCounter::new(1);
        {
            let _guard = counter.try_decrease().unwrap();
            assert!(matches!(
                counter.try_decrease(),
                Err(ParserError::RecursionLimitExceeded)
            ));
        }
        // The budget is restored once the guard goes out of scope
        assert!(counter.try_decrease().is_ok());
    }

    #[test]
    fn parse_keywords_rolls_back_partial_matches() {
        let dialect = PermissiveDialect;
        let mut parser = Parser::new(&dialect)
            .try_with_sql("ORDER items")
            .unwrap();
        assert!(!parser.parse_keywords(&[Keyword::ORDER, Keyword::BY]));
        // Nothing was consumed
        assert!(parser.parse_keyword(Keyword::ORDER));
    }

    #[test]
    fn object_name_rejects_empty_components() {
        let dialect = PermissiveDialect;
        let err = Parser::new(&dialect)
            .try_with_sql("a..b")
            .unwrap()
            .parse_object_name()
            .unwrap_err();
        assert_eq!(
            err,
            ParserError::ParserError("Expected identifier, found: ., Line: 1, Col: 3".into())
        );
    }

    #[test]
    fn deeply_nested_parens_hit_the_recursion_limit() {
        let dialect = PermissiveDialect;
        let sql = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
        let err = Parser::parse_sql(&dialect, &sql).unwrap_err();
        assert_eq!(err, ParserError::RecursionLimitExceeded);
    }
}
