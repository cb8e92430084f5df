//! The Pratt (top-down operator-precedence) expression parser.
//!
//! `parse_subexpr` drives the loop: a prefix production followed by infix
//! productions for as long as the next token binds tighter than the caller's
//! minimum precedence. The dialect is consulted first at every step.

use log::debug;

use super::Parser;
use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::lexer::Token;

/// An expression that may also be an unqualified or qualified `*`, used for
/// projection items and function arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildcardExpr {
    Expr(Expr),
    QualifiedWildcard(ObjectName),
    Wildcard,
}

impl From<WildcardExpr> for FunctionArgExpr {
    fn from(wildcard_expr: WildcardExpr) -> Self {
        match wildcard_expr {
            WildcardExpr::Expr(expr) => Self::Expr(expr),
            WildcardExpr::QualifiedWildcard(prefix) => Self::QualifiedWildcard(prefix),
            WildcardExpr::Wildcard => Self::Wildcard,
        }
    }
}

fn keyword_to_date_time_field(keyword: Keyword) -> Option<DateTimeField> {
    Some(match keyword {
        Keyword::YEAR => DateTimeField::Year,
        Keyword::MONTH => DateTimeField::Month,
        Keyword::WEEK => DateTimeField::Week,
        Keyword::DAY => DateTimeField::Day,
        Keyword::HOUR => DateTimeField::Hour,
        Keyword::MINUTE => DateTimeField::Minute,
        Keyword::SECOND => DateTimeField::Second,
        Keyword::CENTURY => DateTimeField::Century,
        Keyword::DECADE => DateTimeField::Decade,
        Keyword::DOW => DateTimeField::Dow,
        Keyword::DOY => DateTimeField::Doy,
        Keyword::EPOCH => DateTimeField::Epoch,
        Keyword::ISODOW => DateTimeField::Isodow,
        Keyword::ISOYEAR => DateTimeField::Isoyear,
        Keyword::JULIAN => DateTimeField::Julian,
        Keyword::MICROSECOND => DateTimeField::Microsecond,
        Keyword::MICROSECONDS => DateTimeField::Microseconds,
        Keyword::MILLENIUM => DateTimeField::Millenium,
        Keyword::MILLENNIUM => DateTimeField::Millennium,
        Keyword::MILLISECOND => DateTimeField::Millisecond,
        Keyword::MILLISECONDS => DateTimeField::Milliseconds,
        Keyword::NANOSECOND => DateTimeField::Nanosecond,
        Keyword::NANOSECONDS => DateTimeField::Nanoseconds,
        Keyword::QUARTER => DateTimeField::Quarter,
        Keyword::TIMEZONE => DateTimeField::Timezone,
        Keyword::TIMEZONE_HOUR => DateTimeField::TimezoneHour,
        Keyword::TIMEZONE_MINUTE => DateTimeField::TimezoneMinute,
        _ => return None,
    })
}

impl<'a> Parser<'a> {
    // Operator precedence levels, higher binds tighter.
    pub const OR_PREC: u8 = 50;
    pub const XOR_PREC: u8 = 51;
    pub const AND_PREC: u8 = 52;
    pub const UNARY_NOT_PREC: u8 = 53;
    pub const IS_PREC: u8 = 54;
    /// Comparisons, `LIKE`/`ILIKE`, `BETWEEN`, `IN` all share one level.
    pub const BETWEEN_PREC: u8 = 55;
    pub const PIPE_PREC: u8 = 56;
    /// `&`, `^`, and the shift operators.
    pub const CARET_PREC: u8 = 57;
    pub const PLUS_MINUS_PREC: u8 = 58;
    pub const MUL_DIV_MOD_PREC: u8 = 59;
    pub const JSON_PREC: u8 = 60;
    pub const CONCAT_PREC: u8 = 61;
    /// `::`, `COLLATE`, `AT TIME ZONE`.
    pub const CAST_PREC: u8 = 62;
    /// Postfix `[index]` and `.member`.
    pub const ARRAY_INDEX_PREC: u8 = 63;

    /// Parse a new expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        self.parse_subexpr(0)
    }

    /// Parse a subexpression, stopping before any operator binding no
    /// tighter than `precedence`.
    pub fn parse_subexpr(&mut self, precedence: u8) -> Result<Expr, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        debug!("parsing expr, min precedence {precedence}");

        let mut expr = self.parse_prefix()?;
        loop {
            let next_precedence = self.get_next_precedence()?;
            debug!("next precedence: {next_precedence}");
            if next_precedence <= precedence {
                break;
            }
            expr = self.parse_infix(expr, next_precedence)?;
        }
        Ok(expr)
    }

    /// An expression that may also be `*` or `qualifier.*`.
    pub fn parse_wildcard_expr(&mut self) -> Result<WildcardExpr, ParserError> {
        let index = self.index;

        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) if self.peek_token() == Token::Period => {
                let mut id_parts: Vec<Ident> = vec![w.to_ident()];
                while self.consume_token(&Token::Period) {
                    let next_token = self.next_token();
                    match next_token.token {
                        Token::Word(w) => id_parts.push(w.to_ident()),
                        Token::Mul => {
                            return Ok(WildcardExpr::QualifiedWildcard(ObjectName(id_parts)));
                        }
                        _ => {
                            return self.expected("an identifier or a '*' after '.'", next_token);
                        }
                    }
                }
            }
            Token::Mul => {
                return Ok(WildcardExpr::Wildcard);
            }
            _ => (),
        }

        self.index = index;
        self.parse_expr().map(WildcardExpr::Expr)
    }

    /// Parse an expression prefix.
    pub fn parse_prefix(&mut self) -> Result<Expr, ParserError> {
        let dialect = self.dialect;
        if let Some(prefix) = dialect.parse_prefix(self) {
            return prefix;
        }

        // Typed string literals like `DATE '2020-01-01'`: attempt a data
        // type followed by a string literal, rolling back if either is
        // absent. A plain identifier parses as a custom type and must fall
        // through to the generic word handling below instead.
        if let Some(expr) = self.maybe_parse(|parser| match parser.parse_data_type()? {
            DataType::Interval => parser.parse_interval(),
            DataType::Custom(..) => parser_err!("not a typed string"),
            data_type => {
                let next_token = parser.next_token();
                match next_token.token {
                    Token::SingleQuotedString(ref s) => Ok(Expr::TypedString {
                        data_type,
                        value: s.clone(),
                    }),
                    _ => parser.expected("literal string", next_token),
                }
            }
        }) {
            return Ok(expr);
        }

        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::TRUE | Keyword::FALSE | Keyword::NULL => {
                    self.prev_token();
                    Ok(Expr::Value(self.parse_value()?))
                }
                Keyword::CASE => self.parse_case_expr(),
                Keyword::CAST => self.parse_cast_expr(false),
                Keyword::TRY_CAST => self.parse_cast_expr(true),
                Keyword::EXISTS => self.parse_exists_expr(false),
                Keyword::EXTRACT => self.parse_extract_expr(),
                Keyword::CEIL => self.parse_ceil_floor_expr(true),
                Keyword::FLOOR => self.parse_ceil_floor_expr(false),
                Keyword::POSITION if self.peek_token() == Token::LParen => {
                    self.parse_position_expr()
                }
                Keyword::SUBSTRING => self.parse_substring_expr(),
                Keyword::OVERLAY => self.parse_overlay_expr(),
                Keyword::TRIM => self.parse_trim_expr(),
                Keyword::INTERVAL => self.parse_interval(),
                Keyword::LISTAGG => self.parse_listagg_expr(),
                Keyword::ARRAY_AGG => self.parse_array_agg_expr(),
                Keyword::ARRAY if self.peek_token() == Token::LBracket => {
                    self.expect_token(&Token::LBracket)?;
                    self.parse_array_expr(true)
                }
                Keyword::NOT => self.parse_not(),
                // Here `w` is a word, check if it's a part of a multi-part
                // identifier, a function call, or a simple identifier
                _ => match self.peek_token().token {
                    Token::LParen | Token::Period => {
                        let mut id_parts: Vec<Ident> = vec![w.to_ident()];
                        while self.consume_token(&Token::Period) {
                            let next_token = self.next_token();
                            match next_token.token {
                                Token::Word(w) => id_parts.push(w.to_ident()),
                                _ => {
                                    return self.expected("an identifier after '.'", next_token);
                                }
                            }
                        }
                        if self.peek_token() == Token::LParen {
                            self.parse_function(ObjectName(id_parts))
                        } else if id_parts.len() > 1 {
                            Ok(Expr::CompoundIdentifier(id_parts))
                        } else {
                            Ok(Expr::Identifier(id_parts.into_iter().next().expect("one part")))
                        }
                    }
                    _ => Ok(Expr::Identifier(w.to_ident())),
                },
            },
            tok @ (Token::Minus | Token::Plus) => {
                let op = if tok == Token::Plus {
                    UnaryOperator::Plus
                } else {
                    UnaryOperator::Minus
                };
                Ok(Expr::UnaryOp {
                    op,
                    expr: Box::new(self.parse_subexpr(Self::PLUS_MINUS_PREC)?),
                })
            }
            tok @ (Token::DoubleExclamationMark
            | Token::PGSquareRoot
            | Token::PGCubeRoot
            | Token::AtSign
            | Token::Tilde) => {
                let op = match tok {
                    Token::DoubleExclamationMark => UnaryOperator::PGPrefixFactorial,
                    Token::PGSquareRoot => UnaryOperator::PGSquareRoot,
                    Token::PGCubeRoot => UnaryOperator::PGCubeRoot,
                    Token::AtSign => UnaryOperator::PGAbs,
                    Token::Tilde => UnaryOperator::PGBitwiseNot,
                    _ => unreachable!(),
                };
                Ok(Expr::UnaryOp {
                    op,
                    expr: Box::new(self.parse_subexpr(Self::PLUS_MINUS_PREC)?),
                })
            }
            Token::Number(_, _)
            | Token::SingleQuotedString(_)
            | Token::DollarQuotedString(_)
            | Token::NationalStringLiteral(_)
            | Token::HexStringLiteral(_)
            | Token::Placeholder(_) => {
                self.prev_token();
                Ok(Expr::Value(self.parse_value()?))
            }
            Token::LParen => {
                let expr = if matches!(self.peek_token().token, Token::Word(ref w)
                    if w.keyword == Keyword::SELECT || w.keyword == Keyword::WITH)
                {
                    Expr::Subquery(Box::new(self.parse_query()?))
                } else {
                    let exprs = self.parse_comma_separated(Parser::parse_expr)?;
                    match exprs.len() {
                        1 => Expr::Nested(Box::new(exprs.into_iter().next().expect("one expr"))),
                        _ => Expr::Tuple(exprs),
                    }
                };
                self.expect_token(&Token::RParen)?;
                Ok(expr)
            }
            Token::LBracket => self.parse_array_expr(false),
            _ => self.expected("an expression", next_token),
        }
    }

    fn parse_not(&mut self) -> Result<Expr, ParserError> {
        match self.peek_token().token {
            Token::Word(w) if w.keyword == Keyword::EXISTS => {
                self.next_token();
                self.parse_exists_expr(true)
            }
            _ => Ok(Expr::UnaryOp {
                op: UnaryOperator::Not,
                expr: Box::new(self.parse_subexpr(Self::UNARY_NOT_PREC)?),
            }),
        }
    }

    /// Get the precedence of the next token, consulting the dialect first.
    pub fn get_next_precedence(&self) -> Result<u8, ParserError> {
        let dialect = self.dialect;
        if let Some(precedence) = dialect.get_next_precedence(self) {
            return precedence;
        }

        let token = self.peek_token();
        match token.token {
            Token::Word(w) if w.keyword == Keyword::OR => Ok(Self::OR_PREC),
            Token::Word(w) if w.keyword == Keyword::XOR && self.dialect.supports_xor() => {
                Ok(Self::XOR_PREC)
            }
            Token::Word(w) if w.keyword == Keyword::AND => Ok(Self::AND_PREC),
            Token::Word(w) if w.keyword == Keyword::AT => {
                match (self.peek_nth_token(1).token, self.peek_nth_token(2).token) {
                    (Token::Word(w1), Token::Word(w2))
                        if w1.keyword == Keyword::TIME && w2.keyword == Keyword::ZONE =>
                    {
                        Ok(Self::CAST_PREC)
                    }
                    _ => Ok(0),
                }
            }
            // The precedence of NOT varies depending on keyword that follows:
            // `NOT BETWEEN`/`NOT LIKE`/`NOT IN` negate an infix predicate,
            // while a bare NOT is a low-binding prefix.
            Token::Word(w) if w.keyword == Keyword::NOT => match self.peek_nth_token(1).token {
                Token::Word(w) if w.keyword == Keyword::IN => Ok(Self::BETWEEN_PREC),
                Token::Word(w) if w.keyword == Keyword::BETWEEN => Ok(Self::BETWEEN_PREC),
                Token::Word(w) if w.keyword == Keyword::LIKE => Ok(Self::BETWEEN_PREC),
                Token::Word(w) if w.keyword == Keyword::ILIKE => Ok(Self::BETWEEN_PREC),
                Token::Word(w) if w.keyword == Keyword::SIMILAR => Ok(Self::BETWEEN_PREC),
                _ => Ok(0),
            },
            Token::Word(w) if w.keyword == Keyword::IS => Ok(Self::IS_PREC),
            Token::Word(w)
                if matches!(
                    w.keyword,
                    Keyword::IN | Keyword::BETWEEN | Keyword::LIKE | Keyword::ILIKE
                        | Keyword::SIMILAR
                ) =>
            {
                Ok(Self::BETWEEN_PREC)
            }
            Token::Word(w) if w.keyword == Keyword::COLLATE => Ok(Self::CAST_PREC),
            Token::Eq
            | Token::Lt
            | Token::LtEq
            | Token::Neq
            | Token::Gt
            | Token::GtEq
            | Token::DoubleEq
            | Token::Spaceship
            | Token::Tilde
            | Token::TildeAsterisk
            | Token::ExclamationMarkTilde
            | Token::ExclamationMarkTildeAsterisk => Ok(Self::BETWEEN_PREC),
            Token::Pipe => Ok(Self::PIPE_PREC),
            Token::Caret if self.dialect.supports_caret_bitwise_xor() => Ok(Self::CARET_PREC),
            Token::Sharp | Token::ShiftLeft | Token::ShiftRight | Token::Ampersand => {
                Ok(Self::CARET_PREC)
            }
            Token::Plus | Token::Minus => Ok(Self::PLUS_MINUS_PREC),
            Token::Mul | Token::Div | Token::Mod => Ok(Self::MUL_DIV_MOD_PREC),
            Token::Arrow
            | Token::LongArrow
            | Token::HashArrow
            | Token::HashLongArrow
            | Token::AtArrow
            | Token::ArrowAt
            | Token::HashMinus
            | Token::AtQuestion
            | Token::AtAt
                if self.dialect.supports_json_operators() =>
            {
                Ok(Self::JSON_PREC)
            }
            Token::StringConcat => Ok(Self::CONCAT_PREC),
            Token::DoubleColon => Ok(Self::CAST_PREC),
            Token::LBracket | Token::Period | Token::ExclamationMark => {
                Ok(Self::ARRAY_INDEX_PREC)
            }
            _ => Ok(0),
        }
    }

    /// Parse an operator following an expression.
    pub fn parse_infix(&mut self, expr: Expr, precedence: u8) -> Result<Expr, ParserError> {
        let dialect = self.dialect;
        if let Some(infix) = dialect.parse_infix(self, &expr, precedence) {
            return infix;
        }

        let token = self.next_token();
        let regular_binary_operator = match &token.token {
            Token::Spaceship => Some(BinaryOperator::Spaceship),
            Token::DoubleEq => Some(BinaryOperator::Eq),
            Token::Eq => Some(BinaryOperator::Eq),
            Token::Neq => Some(BinaryOperator::NotEq),
            Token::Gt => Some(BinaryOperator::Gt),
            Token::GtEq => Some(BinaryOperator::GtEq),
            Token::Lt => Some(BinaryOperator::Lt),
            Token::LtEq => Some(BinaryOperator::LtEq),
            Token::Plus => Some(BinaryOperator::Plus),
            Token::Minus => Some(BinaryOperator::Minus),
            Token::Mul => Some(BinaryOperator::Multiply),
            Token::Mod => Some(BinaryOperator::Modulo),
            Token::Div => Some(BinaryOperator::Divide),
            Token::StringConcat => Some(BinaryOperator::StringConcat),
            Token::Pipe => Some(BinaryOperator::BitwiseOr),
            Token::Caret => Some(BinaryOperator::BitwiseXor),
            Token::Ampersand => Some(BinaryOperator::BitwiseAnd),
            Token::Sharp => Some(BinaryOperator::PGBitwiseXor),
            Token::ShiftLeft => Some(BinaryOperator::PGBitwiseShiftLeft),
            Token::ShiftRight => Some(BinaryOperator::PGBitwiseShiftRight),
            Token::Tilde => Some(BinaryOperator::PGRegexMatch),
            Token::TildeAsterisk => Some(BinaryOperator::PGRegexIMatch),
            Token::ExclamationMarkTilde => Some(BinaryOperator::PGRegexNotMatch),
            Token::ExclamationMarkTildeAsterisk => Some(BinaryOperator::PGRegexNotIMatch),
            Token::Word(w) => match w.keyword {
                Keyword::AND => Some(BinaryOperator::And),
                Keyword::OR => Some(BinaryOperator::Or),
                Keyword::XOR => Some(BinaryOperator::Xor),
                _ => None,
            },
            _ => None,
        };

        if let Some(op) = regular_binary_operator {
            if let Some(keyword) = self.parse_one_of_keywords(&[Keyword::ANY, Keyword::ALL]) {
                self.expect_token(&Token::LParen)?;
                let right = self.parse_subexpr(precedence)?;
                self.expect_token(&Token::RParen)?;
                let right = match keyword {
                    Keyword::ALL => Box::new(Expr::AllOp(Box::new(right))),
                    Keyword::ANY => Box::new(Expr::AnyOp(Box::new(right))),
                    _ => unreachable!(),
                };
                Ok(Expr::BinaryOp {
                    left: Box::new(expr),
                    op,
                    right,
                })
            } else {
                Ok(Expr::BinaryOp {
                    left: Box::new(expr),
                    op,
                    right: Box::new(self.parse_subexpr(precedence)?),
                })
            }
        } else if let Token::Word(w) = &token.token {
            match w.keyword {
                Keyword::IS => {
                    if self.parse_keyword(Keyword::NULL) {
                        Ok(Expr::IsNull(Box::new(expr)))
                    } else if self.parse_keywords(&[Keyword::NOT, Keyword::NULL]) {
                        Ok(Expr::IsNotNull(Box::new(expr)))
                    } else if self.parse_keyword(Keyword::TRUE) {
                        Ok(Expr::IsTrue(Box::new(expr)))
                    } else if self.parse_keywords(&[Keyword::NOT, Keyword::TRUE]) {
                        Ok(Expr::IsNotTrue(Box::new(expr)))
                    } else if self.parse_keyword(Keyword::FALSE) {
                        Ok(Expr::IsFalse(Box::new(expr)))
                    } else if self.parse_keywords(&[Keyword::NOT, Keyword::FALSE]) {
                        Ok(Expr::IsNotFalse(Box::new(expr)))
                    } else if self.parse_keyword(Keyword::UNKNOWN) {
                        Ok(Expr::IsUnknown(Box::new(expr)))
                    } else if self.parse_keywords(&[Keyword::NOT, Keyword::UNKNOWN]) {
                        Ok(Expr::IsNotUnknown(Box::new(expr)))
                    } else if self.parse_keywords(&[Keyword::DISTINCT, Keyword::FROM]) {
                        let expr2 = self.parse_subexpr(Self::IS_PREC)?;
                        Ok(Expr::IsDistinctFrom(Box::new(expr), Box::new(expr2)))
                    } else if self.parse_keywords(&[Keyword::NOT, Keyword::DISTINCT, Keyword::FROM])
                    {
                        let expr2 = self.parse_subexpr(Self::IS_PREC)?;
                        Ok(Expr::IsNotDistinctFrom(Box::new(expr), Box::new(expr2)))
                    } else {
                        self.expected(
                            "[NOT] NULL or TRUE|FALSE|UNKNOWN or [NOT] DISTINCT FROM after IS",
                            self.peek_token(),
                        )
                    }
                }
                Keyword::AT => {
                    self.expect_keywords(&[Keyword::TIME, Keyword::ZONE])?;
                    let next_token = self.next_token();
                    match next_token.token {
                        Token::SingleQuotedString(ref time_zone) => Ok(Expr::AtTimeZone {
                            timestamp: Box::new(expr),
                            time_zone: time_zone.clone(),
                        }),
                        _ => self.expected("a time zone string after AT TIME ZONE", next_token),
                    }
                }
                Keyword::NOT
                | Keyword::IN
                | Keyword::BETWEEN
                | Keyword::LIKE
                | Keyword::ILIKE
                | Keyword::SIMILAR => {
                    self.prev_token();
                    let negated = self.parse_keyword(Keyword::NOT);
                    if self.parse_keyword(Keyword::IN) {
                        self.parse_in(expr, negated)
                    } else if self.parse_keyword(Keyword::BETWEEN) {
                        self.parse_between(expr, negated)
                    } else if self.parse_keyword(Keyword::LIKE) {
                        Ok(Expr::Like {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_subexpr(Self::BETWEEN_PREC)?),
                            escape_char: self.parse_optional_escape_char()?,
                        })
                    } else if self.parse_keyword(Keyword::ILIKE) {
                        Ok(Expr::ILike {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_subexpr(Self::BETWEEN_PREC)?),
                            escape_char: self.parse_optional_escape_char()?,
                        })
                    } else if self.parse_keyword(Keyword::SIMILAR) {
                        self.expect_keyword(Keyword::TO)?;
                        Ok(Expr::SimilarTo {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_subexpr(Self::BETWEEN_PREC)?),
                            escape_char: self.parse_optional_escape_char()?,
                        })
                    } else {
                        self.expected("IN or BETWEEN after NOT", self.peek_token())
                    }
                }
                Keyword::COLLATE => Ok(Expr::Collate {
                    expr: Box::new(expr),
                    collation: self.parse_object_name()?,
                }),
                // Can only happen if `get_next_precedence` got out of sync
                // with this function
                _ => parser_err!(format!("No infix parser for token {:?}", token.token)),
            }
        } else if Token::DoubleColon == token.token {
            Ok(Expr::Cast {
                expr: Box::new(expr),
                data_type: self.parse_data_type()?,
            })
        } else if Token::ExclamationMark == token.token {
            Ok(Expr::UnaryOp {
                op: UnaryOperator::PGPostfixFactorial,
                expr: Box::new(expr),
            })
        } else if Token::LBracket == token.token {
            self.parse_array_index(expr)
        } else if Token::Period == token.token {
            Ok(Expr::CompositeAccess {
                expr: Box::new(expr),
                key: self.parse_identifier()?,
            })
        } else if let Some(operator) = match &token.token {
            Token::Arrow => Some(JsonOperator::Arrow),
            Token::LongArrow => Some(JsonOperator::LongArrow),
            Token::HashArrow => Some(JsonOperator::HashArrow),
            Token::HashLongArrow => Some(JsonOperator::HashLongArrow),
            Token::AtArrow => Some(JsonOperator::AtArrow),
            Token::ArrowAt => Some(JsonOperator::ArrowAt),
            Token::HashMinus => Some(JsonOperator::HashMinus),
            Token::AtQuestion => Some(JsonOperator::AtQuestion),
            Token::AtAt => Some(JsonOperator::AtAt),
            _ => None,
        } {
            Ok(Expr::JsonAccess {
                left: Box::new(expr),
                operator,
                right: Box::new(self.parse_subexpr(Self::JSON_PREC)?),
            })
        } else {
            // Can only happen if `get_next_precedence` got out of sync with
            // this function
            parser_err!(format!("No infix parser for token {:?}", token.token))
        }
    }

    /// Parses the parens following the `[ NOT ] IN` keyword.
    pub fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        // BigQuery allows `IN UNNEST(array_expression)`
        if self.parse_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let array_expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::InUnnest {
                expr: Box::new(expr),
                array_expr: Box::new(array_expr),
                negated,
            });
        }
        self.expect_token(&Token::LParen)?;
        let in_op = if matches!(self.peek_token().token, Token::Word(ref w)
            if w.keyword == Keyword::SELECT || w.keyword == Keyword::WITH)
        {
            Expr::InSubquery {
                expr: Box::new(expr),
                subquery: Box::new(self.parse_query()?),
                negated,
            }
        } else {
            Expr::InList {
                expr: Box::new(expr),
                list: self.parse_comma_separated(Parser::parse_expr)?,
                negated,
            }
        };
        self.expect_token(&Token::RParen)?;
        Ok(in_op)
    }

    /// Parses `BETWEEN <low> AND <high>`, assuming the `BETWEEN` keyword was
    /// already consumed.
    pub fn parse_between(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        let low = self.parse_subexpr(Self::BETWEEN_PREC)?;
        self.expect_keyword(Keyword::AND)?;
        let high = self.parse_subexpr(Self::BETWEEN_PREC)?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            negated,
            low: Box::new(low),
            high: Box::new(high),
        })
    }

    pub fn parse_optional_escape_char(&mut self) -> Result<Option<char>, ParserError> {
        if self.parse_keyword(Keyword::ESCAPE) {
            Ok(Some(self.parse_literal_char()?))
        } else {
            Ok(None)
        }
    }

    fn parse_array_index(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        let index = self.parse_expr()?;
        self.expect_token(&Token::RBracket)?;
        let mut indexes: Vec<Expr> = vec![index];
        while self.consume_token(&Token::LBracket) {
            let index = self.parse_expr()?;
            self.expect_token(&Token::RBracket)?;
            indexes.push(index);
        }
        Ok(Expr::ArrayIndex {
            obj: Box::new(expr),
            indexes,
        })
    }

    /// Parses an array expression `[ex1, ex2, ..]`; `named` is true for the
    /// `ARRAY[..]` spelling.
    pub fn parse_array_expr(&mut self, named: bool) -> Result<Expr, ParserError> {
        if self.peek_token() == Token::RBracket {
            let _ = self.next_token();
            return Ok(Expr::Array(Array {
                elem: vec![],
                named,
            }));
        }
        let exprs = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RBracket)?;
        Ok(Expr::Array(Array { elem: exprs, named }))
    }

    fn parse_case_expr(&mut self) -> Result<Expr, ParserError> {
        let mut operand = None;
        if !self.parse_keyword(Keyword::WHEN) {
            operand = Some(Box::new(self.parse_expr()?));
            self.expect_keyword(Keyword::WHEN)?;
        }
        let mut conditions = vec![];
        let mut results = vec![];
        loop {
            conditions.push(self.parse_expr()?);
            self.expect_keyword(Keyword::THEN)?;
            results.push(self.parse_expr()?);
            if !self.parse_keyword(Keyword::WHEN) {
                break;
            }
        }
        let else_result = if self.parse_keyword(Keyword::ELSE) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::END)?;
        Ok(Expr::Case {
            operand,
            conditions,
            results,
            else_result,
        })
    }

    /// Parse a SQL CAST function e.g. `CAST(expr AS FLOAT)`.
    fn parse_cast_expr(&mut self, try_cast: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::AS)?;
        let data_type = self.parse_data_type()?;
        self.expect_token(&Token::RParen)?;
        if try_cast {
            Ok(Expr::TryCast {
                expr: Box::new(expr),
                data_type,
            })
        } else {
            Ok(Expr::Cast {
                expr: Box::new(expr),
                data_type,
            })
        }
    }

    /// Parse a SQL EXISTS expression e.g. `WHERE EXISTS(SELECT ...)`.
    fn parse_exists_expr(&mut self, negated: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let exists_node = Expr::Exists {
            negated,
            subquery: Box::new(self.parse_query()?),
        };
        self.expect_token(&Token::RParen)?;
        Ok(exists_node)
    }

    fn parse_extract_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let field = self.parse_date_time_field()?;
        self.expect_keyword(Keyword::FROM)?;
        let expr = self.parse_expr()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Extract {
            field,
            expr: Box::new(expr),
        })
    }

    fn parse_ceil_floor_expr(&mut self, is_ceil: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        // Parse `CEIL/FLOOR(expr TO DateTimeField)`
        let field = if self.parse_keyword(Keyword::TO) {
            self.parse_date_time_field()?
        } else {
            DateTimeField::NoDateTime
        };
        self.expect_token(&Token::RParen)?;
        if is_ceil {
            Ok(Expr::Ceil {
                expr: Box::new(expr),
                field,
            })
        } else {
            Ok(Expr::Floor {
                expr: Box::new(expr),
                field,
            })
        }
    }

    fn parse_position_expr(&mut self) -> Result<Expr, ParserError> {
        // PARSE SELECT POSITION('@' in field)
        self.expect_token(&Token::LParen)?;

        // Parse the subexpr till the IN keyword
        let expr = self.parse_subexpr(Self::BETWEEN_PREC)?;
        if self.parse_keyword(Keyword::IN) {
            let from = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Position {
                expr: Box::new(expr),
                r#in: Box::new(from),
            })
        } else {
            parser_err!("Position function must include IN keyword".to_string())
        }
    }

    fn parse_substring_expr(&mut self) -> Result<Expr, ParserError> {
        // PARSE SUBSTRING(ch FROM 0 FOR 3) or SUBSTRING(ch, 0, 3)
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        let mut from_expr = None;
        let mut to_expr = None;
        let mut special = false;
        if self.consume_token(&Token::Comma) {
            special = true;
            from_expr = Some(self.parse_expr()?);
            if self.consume_token(&Token::Comma) {
                to_expr = Some(self.parse_expr()?);
            }
        } else if self.dialect.supports_substring_from_for_expr() {
            if self.parse_keyword(Keyword::FROM) {
                from_expr = Some(self.parse_expr()?);
            }
            if self.parse_keyword(Keyword::FOR) {
                to_expr = Some(self.parse_expr()?);
            }
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Substring {
            expr: Box::new(expr),
            substring_from: from_expr.map(Box::new),
            substring_for: to_expr.map(Box::new),
            special,
        })
    }

    fn parse_overlay_expr(&mut self) -> Result<Expr, ParserError> {
        // PARSE OVERLAY (EXPR PLACING EXPR FROM 1 [FOR 3])
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::PLACING)?;
        let what_expr = self.parse_expr()?;
        self.expect_keyword(Keyword::FROM)?;
        let from_expr = self.parse_expr()?;
        let mut for_expr = None;
        if self.parse_keyword(Keyword::FOR) {
            for_expr = Some(self.parse_expr()?);
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expr::Overlay {
            expr: Box::new(expr),
            overlay_what: Box::new(what_expr),
            overlay_from: Box::new(from_expr),
            overlay_for: for_expr.map(Box::new),
        })
    }

    fn parse_trim_expr(&mut self) -> Result<Expr, ParserError> {
        // TRIM ([WHERE] ['text' FROM] 'text')
        self.expect_token(&Token::LParen)?;
        let mut trim_where = None;
        if let Token::Word(word) = self.peek_token().token {
            if matches!(
                word.keyword,
                Keyword::BOTH | Keyword::LEADING | Keyword::TRAILING
            ) {
                trim_where = Some(self.parse_trim_where()?);
            }
        }
        let expr = self.parse_expr()?;
        if self.parse_keyword(Keyword::FROM) {
            let trim_what = Box::new(expr);
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Trim {
                expr: Box::new(expr),
                trim_where,
                trim_what: Some(trim_what),
            })
        } else {
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Trim {
                expr: Box::new(expr),
                trim_where,
                trim_what: None,
            })
        }
    }

    fn parse_trim_where(&mut self) -> Result<TrimWhereField, ParserError> {
        let next_token = self.next_token();
        match &next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::BOTH => Ok(TrimWhereField::Both),
                Keyword::LEADING => Ok(TrimWhereField::Leading),
                Keyword::TRAILING => Ok(TrimWhereField::Trailing),
                _ => self.expected("trim_where field", next_token),
            },
            _ => self.expected("trim_where field", next_token),
        }
    }

    pub fn parse_date_time_field(&mut self) -> Result<DateTimeField, ParserError> {
        let next_token = self.next_token();
        match &next_token.token {
            Token::Word(w) => match keyword_to_date_time_field(w.keyword) {
                Some(field) => Ok(field),
                None => self.expected("date/time field", next_token),
            },
            _ => self.expected("date/time field", next_token),
        }
    }

    fn peek_is_date_time_field(&self) -> bool {
        match self.peek_token().token {
            Token::Word(w) => keyword_to_date_time_field(w.keyword).is_some(),
            _ => false,
        }
    }

    /// Parse an INTERVAL literal.
    ///
    /// Some syntactically valid intervals:
    ///
    ///   1. `INTERVAL '1' DAY`
    ///   2. `INTERVAL '1-1' YEAR TO MONTH`
    ///   3. `INTERVAL '1' SECOND`
    ///   4. `INTERVAL '1:1:1.1' HOUR (5) TO SECOND (5)`
    ///   5. `INTERVAL '1.1' SECOND (2, 2)`
    ///   6. `INTERVAL '1:1' HOUR (5) TO MINUTE (5)`
    ///   7. `INTERVAL '1 DAY'`
    ///
    /// Note that we do not currently attempt to parse the quoted value.
    pub fn parse_interval(&mut self) -> Result<Expr, ParserError> {
        // The first token in an interval is a string literal or a number
        let value = self.parse_subexpr(Self::PLUS_MINUS_PREC)?;

        // Following the string literal is a qualifier which indicates the
        // units of the duration specified in the string literal. When the
        // value is an unqualified string, the fields default to absent.
        let leading_field = if self.peek_is_date_time_field() {
            Some(self.parse_date_time_field()?)
        } else {
            None
        };

        let (leading_precision, last_field, fsec_precision) =
            if leading_field == Some(DateTimeField::Second) {
                // SQL mandates special bounds-checking rules for SECOND
                // (the fractional seconds precision is part of the same
                // parenthesized list); no `TO` clause may follow.
                let (leading_precision, fsec_precision) = self.parse_optional_precision_scale()?;
                if self.parse_keyword(Keyword::TO) {
                    let last = self.parse_date_time_field()?;
                    return parser_err!(format!("Invalid INTERVAL qualifier: SECOND TO {last}"));
                }
                (leading_precision, None, fsec_precision)
            } else {
                let leading_precision = self.parse_optional_precision()?;
                if self.parse_keyword(Keyword::TO) {
                    let last_field = Some(self.parse_date_time_field()?);
                    let fsec_precision = if last_field == Some(DateTimeField::Second) {
                        self.parse_optional_precision()?
                    } else {
                        None
                    };
                    (leading_precision, last_field, fsec_precision)
                } else {
                    (leading_precision, None, None)
                }
            };

        // `YEAR TO MONTH`, `DAY TO {HOUR,MINUTE,SECOND}`, `HOUR TO
        // {MINUTE,SECOND}` and `MINUTE TO SECOND` are the only legal
        // pairings; repeating a field is an error.
        if let (Some(leading), Some(last)) = (leading_field, last_field) {
            let valid = matches!(
                (leading, last),
                (DateTimeField::Year, DateTimeField::Month)
                    | (
                        DateTimeField::Day,
                        DateTimeField::Hour | DateTimeField::Minute | DateTimeField::Second
                    )
                    | (
                        DateTimeField::Hour,
                        DateTimeField::Minute | DateTimeField::Second
                    )
                    | (DateTimeField::Minute, DateTimeField::Second)
            );
            if !valid {
                return parser_err!(format!("Invalid INTERVAL qualifier: {leading} TO {last}"));
            }
        }

        Ok(Expr::Interval {
            value: Box::new(value),
            leading_field,
            leading_precision,
            last_field,
            fractional_seconds_precision: fsec_precision,
        })
    }

    /// Parse a function call following an already-parsed function name.
    pub fn parse_function(&mut self, name: ObjectName) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let distinct = self.parse_all_or_distinct()?;
        let args = self.parse_optional_args()?;
        let filter = if self.dialect.supports_filter_during_aggregation()
            && self.parse_keyword(Keyword::FILTER)
        {
            self.expect_token(&Token::LParen)?;
            self.expect_keyword(Keyword::WHERE)?;
            let filter = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(Box::new(filter))
        } else {
            None
        };
        let within_group = if self.dialect.supports_within_group()
            && self.parse_keywords(&[Keyword::WITHIN, Keyword::GROUP])
        {
            self.expect_token(&Token::LParen)?;
            self.expect_keywords(&[Keyword::ORDER, Keyword::BY])?;
            let order_by = self.parse_comma_separated(Parser::parse_order_by_expr)?;
            self.expect_token(&Token::RParen)?;
            order_by
        } else {
            vec![]
        };
        let over = if self.parse_keyword(Keyword::OVER) {
            if self.consume_token(&Token::LParen) {
                let window_spec = self.parse_window_spec()?;
                Some(WindowType::WindowSpec(window_spec))
            } else {
                Some(WindowType::NamedWindow(self.parse_identifier()?))
            }
        } else {
            None
        };
        Ok(Expr::Function(Function {
            name,
            args,
            over,
            distinct,
            special: false,
            filter,
            within_group,
        }))
    }

    pub fn parse_optional_args(&mut self) -> Result<Vec<FunctionArg>, ParserError> {
        if self.consume_token(&Token::RParen) {
            Ok(vec![])
        } else {
            let args = self.parse_comma_separated(Parser::parse_function_args)?;
            self.expect_token(&Token::RParen)?;
            Ok(args)
        }
    }

    fn parse_function_args(&mut self) -> Result<FunctionArg, ParserError> {
        if self.peek_nth_token(1) == Token::RArrow {
            let name = self.parse_identifier()?;
            self.expect_token(&Token::RArrow)?;
            let arg = self.parse_wildcard_expr()?.into();
            Ok(FunctionArg::Named { name, arg })
        } else {
            Ok(FunctionArg::Unnamed(self.parse_wildcard_expr()?.into()))
        }
    }

    /// Parse the window specification between the parens of `OVER (..)`;
    /// consumes the closing paren.
    pub fn parse_window_spec(&mut self) -> Result<WindowSpec, ParserError> {
        let partition_by = if self.parse_keywords(&[Keyword::PARTITION, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            vec![]
        };
        let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_order_by_expr)?
        } else {
            vec![]
        };
        let window_frame = if !self.consume_token(&Token::RParen) {
            let window_frame = self.parse_window_frame()?;
            self.expect_token(&Token::RParen)?;
            Some(window_frame)
        } else {
            None
        };
        Ok(WindowSpec {
            partition_by,
            order_by,
            window_frame,
        })
    }

    pub fn parse_window_frame(&mut self) -> Result<WindowFrame, ParserError> {
        let units = {
            let next_token = self.next_token();
            match &next_token.token {
                Token::Word(w) => match w.keyword {
                    Keyword::ROWS => WindowFrameUnits::Rows,
                    Keyword::RANGE => WindowFrameUnits::Range,
                    Keyword::GROUPS => WindowFrameUnits::Groups,
                    _ => return self.expected("ROWS, RANGE, GROUPS", next_token),
                },
                _ => return self.expected("ROWS, RANGE, GROUPS", next_token),
            }
        };
        let (start_bound, end_bound) = if self.parse_keyword(Keyword::BETWEEN) {
            let start_bound = self.parse_window_frame_bound()?;
            self.expect_keyword(Keyword::AND)?;
            let end_bound = Some(self.parse_window_frame_bound()?);
            (start_bound, end_bound)
        } else {
            (self.parse_window_frame_bound()?, None)
        };
        Ok(WindowFrame {
            units,
            start_bound,
            end_bound,
        })
    }

    /// Parse `CURRENT ROW` or `{ <positive number> | UNBOUNDED } { PRECEDING | FOLLOWING }`.
    pub fn parse_window_frame_bound(&mut self) -> Result<WindowFrameBound, ParserError> {
        if self.parse_keywords(&[Keyword::CURRENT, Keyword::ROW]) {
            Ok(WindowFrameBound::CurrentRow)
        } else {
            let rows = if self.parse_keyword(Keyword::UNBOUNDED) {
                None
            } else {
                Some(Box::new(self.parse_expr()?))
            };
            if self.parse_keyword(Keyword::PRECEDING) {
                Ok(WindowFrameBound::Preceding(rows))
            } else if self.parse_keyword(Keyword::FOLLOWING) {
                Ok(WindowFrameBound::Following(rows))
            } else {
                self.expected("PRECEDING or FOLLOWING", self.peek_token())
            }
        }
    }

    /// Parse a `GROUP BY` item: an expression, or one of the grouping-set
    /// constructs.
    pub fn parse_group_by_expr(&mut self) -> Result<Expr, ParserError> {
        if self.parse_keywords(&[Keyword::GROUPING, Keyword::SETS]) {
            self.expect_token(&Token::LParen)?;
            let result = self.parse_comma_separated(|p| p.parse_tuple(false, true))?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::GroupingSets(result))
        } else if self.parse_keyword(Keyword::CUBE) {
            self.expect_token(&Token::LParen)?;
            let result = self.parse_comma_separated(|p| p.parse_tuple(true, true))?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Cube(result))
        } else if self.parse_keyword(Keyword::ROLLUP) {
            self.expect_token(&Token::LParen)?;
            let result = self.parse_comma_separated(|p| p.parse_tuple(true, true))?;
            self.expect_token(&Token::RParen)?;
            Ok(Expr::Rollup(result))
        } else {
            self.parse_expr()
        }
    }

    /// Parse a tuple with `(` and `)`. If `lift_singleton` is true, then a
    /// bare expression counts as a singleton tuple; if `allow_empty` is
    /// true, then an empty tuple is allowed.
    fn parse_tuple(
        &mut self,
        lift_singleton: bool,
        allow_empty: bool,
    ) -> Result<Vec<Expr>, ParserError> {
        if lift_singleton {
            if self.consume_token(&Token::LParen) {
                let result = if allow_empty && self.consume_token(&Token::RParen) {
                    vec![]
                } else {
                    let result = self.parse_comma_separated(Parser::parse_expr)?;
                    self.expect_token(&Token::RParen)?;
                    result
                };
                Ok(result)
            } else {
                Ok(vec![self.parse_expr()?])
            }
        } else {
            self.expect_token(&Token::LParen)?;
            let result = if allow_empty && self.consume_token(&Token::RParen) {
                vec![]
            } else {
                let result = self.parse_comma_separated(Parser::parse_expr)?;
                self.expect_token(&Token::RParen)?;
                result
            };
            Ok(result)
        }
    }

    fn parse_listagg_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let distinct = self.parse_all_or_distinct()?;
        let expr = Box::new(self.parse_expr()?);
        // While ANSI SQL would require the separator to be a string literal,
        // the grammar stays syntax-only and takes any expression here.
        let separator = if self.consume_token(&Token::Comma) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        let on_overflow = if self.parse_keywords(&[Keyword::ON, Keyword::OVERFLOW]) {
            if self.parse_keyword(Keyword::ERROR) {
                Some(ListAggOnOverflow::Error)
            } else {
                self.expect_keyword(Keyword::TRUNCATE)?;
                let filler = match self.peek_token().token {
                    Token::Word(w)
                        if w.keyword == Keyword::WITH || w.keyword == Keyword::WITHOUT =>
                    {
                        None
                    }
                    Token::SingleQuotedString(_)
                    | Token::NationalStringLiteral(_)
                    | Token::HexStringLiteral(_) => Some(Box::new(self.parse_expr()?)),
                    _ => {
                        return self.expected(
                            "either filler, WITH, or WITHOUT in LISTAGG",
                            self.peek_token(),
                        );
                    }
                };
                let with_count = self.parse_keyword(Keyword::WITH);
                if !with_count && !self.parse_keyword(Keyword::WITHOUT) {
                    return self.expected("either WITH or WITHOUT in LISTAGG", self.peek_token());
                }
                self.expect_keyword(Keyword::COUNT)?;
                Some(ListAggOnOverflow::Truncate { filler, with_count })
            }
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        // Once again ANSI SQL requires WITHIN GROUP, but Redshift does not
        let within_group = if self.parse_keywords(&[Keyword::WITHIN, Keyword::GROUP]) {
            self.expect_token(&Token::LParen)?;
            self.expect_keywords(&[Keyword::ORDER, Keyword::BY])?;
            let order_by = self.parse_comma_separated(Parser::parse_order_by_expr)?;
            self.expect_token(&Token::RParen)?;
            order_by
        } else {
            vec![]
        };
        Ok(Expr::ListAgg(ListAgg {
            distinct,
            expr,
            separator,
            on_overflow,
            within_group,
        }))
    }

    fn parse_array_agg_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        let expr = Box::new(self.parse_expr()?);
        // ANSI SQL and BigQuery define ORDER BY inside the function.
        if !self.dialect.supports_within_group() {
            let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
                Some(self.parse_comma_separated(Parser::parse_order_by_expr)?)
            } else {
                None
            };
            let limit = if self.parse_keyword(Keyword::LIMIT) {
                self.parse_limit()?.map(Box::new)
            } else {
                None
            };
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::ArrayAgg(ArrayAgg {
                distinct,
                expr,
                order_by,
                limit,
                within_group: false,
            }));
        }
        // Snowflake and Postgres define `ORDER BY` in `WITHIN GROUP`.
        self.expect_token(&Token::RParen)?;
        let order_by = if self.parse_keywords(&[Keyword::WITHIN, Keyword::GROUP]) {
            self.expect_token(&Token::LParen)?;
            self.expect_keywords(&[Keyword::ORDER, Keyword::BY])?;
            let order_by = self.parse_comma_separated(Parser::parse_order_by_expr)?;
            self.expect_token(&Token::RParen)?;
            Some(order_by)
        } else {
            None
        };
        Ok(Expr::ArrayAgg(ArrayAgg {
            distinct,
            expr,
            order_by,
            limit: None,
            within_group: true,
        }))
    }
}
