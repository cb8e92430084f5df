//! Query-expression parsing: `WITH`, set operations, `SELECT` bodies, table
//! factors and joins, and the trailing `ORDER BY`/`LIMIT`/locking clauses.

use super::{IsOptional, Parser};
use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::{self, Keyword};
use crate::lexer::Token;

use super::expr::WildcardExpr;

impl<'a> Parser<'a> {
    /// Parse a query expression, i.e. a `SELECT` statement optionally
    /// preceded with some `WITH` CTE declarations and optionally followed
    /// by `ORDER BY`. Unlike some other `parse_` methods, this one doesn't
    /// expect the initial keyword to be already consumed.
    pub fn parse_query(&mut self) -> Result<Query, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        let with = if self.parse_keyword(Keyword::WITH) {
            Some(With {
                recursive: self.parse_keyword(Keyword::RECURSIVE),
                cte_tables: self.parse_comma_separated(Parser::parse_cte)?,
            })
        } else {
            None
        };

        let body = Box::new(self.parse_query_body(0)?);

        let order_by = if self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_order_by_expr)?
        } else {
            vec![]
        };

        let mut limit = None;
        let mut offset = None;
        // LIMIT and OFFSET are accepted in either order
        for _x in 0..2 {
            if limit.is_none() && self.parse_keyword(Keyword::LIMIT) {
                limit = self.parse_limit()?;
            }
            if offset.is_none() && self.parse_keyword(Keyword::OFFSET) {
                offset = Some(self.parse_offset()?);
            }
        }

        let fetch = if self.parse_keyword(Keyword::FETCH) {
            Some(self.parse_fetch()?)
        } else {
            None
        };

        let mut locks = Vec::new();
        while self.parse_keyword(Keyword::FOR) {
            locks.push(self.parse_lock()?);
        }

        Ok(Query {
            with,
            body,
            order_by,
            limit,
            offset,
            fetch,
            locks,
        })
    }

    /// Parse a CTE (`alias [( col1, col2, ... )] AS (subquery)`).
    pub fn parse_cte(&mut self) -> Result<Cte, ParserError> {
        let name = self.parse_identifier()?;
        let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
        self.expect_keyword(Keyword::AS)?;
        self.expect_token(&Token::LParen)?;
        let query = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        Ok(Cte {
            alias: TableAlias { name, columns },
            query,
        })
    }

    /// Parse a "query body", which is an expression with roughly the
    /// following grammar, with `UNION`/`EXCEPT` binding looser than
    /// `INTERSECT`:
    ///
    /// ```text
    ///   query_body ::= restricted_select | '(' subquery ')' | set_operation
    ///   set_operation ::= query_body { 'UNION' | 'EXCEPT' | 'INTERSECT' } [ 'ALL' | 'DISTINCT' ] query_body
    /// ```
    pub fn parse_query_body(&mut self, precedence: u8) -> Result<SetExpr, ParserError> {
        // We parse the expression using a Pratt parser, as in `parse_expr()`.
        // Start by parsing a restricted SELECT or a `(subquery)`:
        let mut expr = if self.parse_keyword(Keyword::SELECT) {
            SetExpr::Select(Box::new(self.parse_select()?))
        } else if self.consume_token(&Token::LParen) {
            // CTEs are not allowed here, but the parser currently accepts
            // them
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            SetExpr::Query(Box::new(subquery))
        } else if self.parse_keyword(Keyword::VALUES) {
            SetExpr::Values(self.parse_values()?)
        } else if self.parse_keyword(Keyword::TABLE) {
            SetExpr::Table(self.parse_object_name()?)
        } else {
            return self.expected(
                "SELECT, VALUES, or a subquery in the query body",
                self.peek_token(),
            );
        };

        loop {
            // The query can be optionally followed by a set operator:
            let op = self.parse_set_operator(&self.peek_token().token);
            let next_precedence = match op {
                // UNION and EXCEPT have the same binding power and evaluate
                // left-to-right
                Some(SetOperator::Union) | Some(SetOperator::Except) => 10,
                // INTERSECT has a higher precedence
                Some(SetOperator::Intersect) => 20,
                // Unexpected token or EOF => stop parsing the query body
                None => break,
            };
            if precedence >= next_precedence {
                break;
            }
            self.next_token(); // skip past the set operator
            let set_quantifier = self.parse_set_quantifier()?;
            expr = SetExpr::SetOperation {
                left: Box::new(expr),
                op: op.expect("op to be Some"),
                set_quantifier,
                right: Box::new(self.parse_query_body(next_precedence)?),
            };
        }

        Ok(expr)
    }

    fn parse_set_operator(&self, token: &Token) -> Option<SetOperator> {
        match token {
            Token::Word(w) if w.keyword == Keyword::UNION => Some(SetOperator::Union),
            Token::Word(w) if w.keyword == Keyword::EXCEPT => Some(SetOperator::Except),
            Token::Word(w) if w.keyword == Keyword::INTERSECT => Some(SetOperator::Intersect),
            _ => None,
        }
    }

    fn parse_set_quantifier(&mut self) -> Result<SetQuantifier, ParserError> {
        if self.parse_keyword(Keyword::ALL) {
            Ok(SetQuantifier::All)
        } else if self.parse_keyword(Keyword::DISTINCT) {
            Ok(SetQuantifier::Distinct)
        } else {
            Ok(SetQuantifier::None)
        }
    }

    /// Parse a restricted `SELECT` statement (no CTEs / `UNION` / `ORDER
    /// BY`), assuming the initial `SELECT` was already consumed.
    pub fn parse_select(&mut self) -> Result<Select, ParserError> {
        let distinct = self.parse_optional_distinct()?;

        let top = if self.dialect.supports_select_top() && self.parse_keyword(Keyword::TOP) {
            Some(self.parse_top()?)
        } else {
            None
        };

        let projection = self.parse_comma_separated(Parser::parse_select_item)?;

        let into = if self.parse_keyword(Keyword::INTO) {
            let temporary = self
                .parse_one_of_keywords(&[Keyword::TEMP, Keyword::TEMPORARY])
                .is_some();
            let unlogged = self.parse_keyword(Keyword::UNLOGGED);
            let table = self.parse_keyword(Keyword::TABLE);
            let name = self.parse_object_name()?;
            Some(SelectInto {
                temporary,
                unlogged,
                table,
                name,
            })
        } else {
            None
        };

        // Note that for keywords to be properly handled here, they need to be
        // added to `RESERVED_FOR_COLUMN_ALIAS`, otherwise they may be parsed
        // as an alias as part of the `projection` or `from`.

        let from = if self.parse_keyword(Keyword::FROM) {
            self.parse_comma_separated(Parser::parse_table_and_joins)?
        } else {
            vec![]
        };

        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = if self.parse_keywords(&[Keyword::GROUP, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_group_by_expr)?
        } else {
            vec![]
        };

        let having = if self.parse_keyword(Keyword::HAVING) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let named_window = if self.parse_keyword(Keyword::WINDOW) {
            self.parse_comma_separated(Parser::parse_named_window)?
        } else {
            vec![]
        };

        let qualify = if self.dialect.supports_qualify() && self.parse_keyword(Keyword::QUALIFY) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Select {
            distinct,
            top,
            projection,
            into,
            from,
            selection,
            group_by,
            having,
            named_window,
            qualify,
        })
    }

    fn parse_optional_distinct(&mut self) -> Result<Option<Distinct>, ParserError> {
        let all = self.parse_keyword(Keyword::ALL);
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        if all && distinct {
            return parser_err!("Cannot specify both ALL and DISTINCT".to_string());
        }
        if !distinct {
            return Ok(None);
        }
        if self.dialect.supports_distinct_on() && self.parse_keyword(Keyword::ON) {
            self.expect_token(&Token::LParen)?;
            let col_names = if self.consume_token(&Token::RParen) {
                vec![]
            } else {
                let col_names = self.parse_comma_separated(Parser::parse_expr)?;
                self.expect_token(&Token::RParen)?;
                col_names
            };
            return Ok(Some(Distinct::On(col_names)));
        }
        Ok(Some(Distinct::Distinct))
    }

    fn parse_named_window(&mut self) -> Result<NamedWindowDefinition, ParserError> {
        let ident = self.parse_identifier()?;
        self.expect_keyword(Keyword::AS)?;
        self.expect_token(&Token::LParen)?;
        let window_spec = self.parse_window_spec()?;
        Ok(NamedWindowDefinition(ident, window_spec))
    }

    /// Parse one item of the comma-separated projection list.
    pub fn parse_select_item(&mut self) -> Result<SelectItem, ParserError> {
        match self.parse_wildcard_expr()? {
            WildcardExpr::Expr(expr) => self
                .parse_optional_alias(keywords::RESERVED_FOR_COLUMN_ALIAS)
                .map(|alias| match alias {
                    Some(alias) => SelectItem::ExprWithAlias { expr, alias },
                    None => SelectItem::UnnamedExpr(expr),
                }),
            WildcardExpr::QualifiedWildcard(prefix) => Ok(SelectItem::QualifiedWildcard(prefix)),
            WildcardExpr::Wildcard => Ok(SelectItem::Wildcard),
        }
    }

    /// Parse a table factor with any number of joins attached.
    pub fn parse_table_and_joins(&mut self) -> Result<TableWithJoins, ParserError> {
        let relation = self.parse_table_factor()?;
        // Note that for keywords to be properly handled here, they need to be
        // added to `RESERVED_FOR_TABLE_ALIAS`, otherwise they may be parsed
        // as an alias as part of the `relation`.
        let mut joins = vec![];
        loop {
            let join = if self.parse_keyword(Keyword::CROSS) {
                let join_operator = if self.parse_keyword(Keyword::JOIN) {
                    JoinOperator::CrossJoin
                } else if self.parse_keyword(Keyword::APPLY) {
                    // MSSQL extension, similar to CROSS JOIN LATERAL
                    JoinOperator::CrossApply
                } else {
                    return self.expected("JOIN or APPLY after CROSS", self.peek_token());
                };
                Join {
                    relation: self.parse_table_factor()?,
                    join_operator,
                }
            } else if self.parse_keyword(Keyword::OUTER) {
                // MSSQL extension, similar to LEFT JOIN LATERAL .. ON 1=1
                self.expect_keyword(Keyword::APPLY)?;
                Join {
                    relation: self.parse_table_factor()?,
                    join_operator: JoinOperator::OuterApply,
                }
            } else {
                let natural = self.parse_keyword(Keyword::NATURAL);
                let peek_keyword = if let Token::Word(w) = self.peek_token().token {
                    w.keyword
                } else {
                    Keyword::NoKeyword
                };

                let join_operator_type = match peek_keyword {
                    Keyword::INNER | Keyword::JOIN => {
                        let _ = self.parse_keyword(Keyword::INNER);
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::Inner
                    }
                    kw @ (Keyword::LEFT | Keyword::RIGHT) => {
                        let _ = self.next_token();
                        let is_left = kw == Keyword::LEFT;
                        let join_type = self.parse_one_of_keywords(&[
                            Keyword::OUTER,
                            Keyword::SEMI,
                            Keyword::ANTI,
                            Keyword::JOIN,
                        ]);
                        match join_type {
                            Some(Keyword::OUTER) => {
                                self.expect_keyword(Keyword::JOIN)?;
                                if is_left {
                                    JoinOperator::LeftOuter
                                } else {
                                    JoinOperator::RightOuter
                                }
                            }
                            Some(Keyword::SEMI) if self.dialect.supports_semi_anti_join() => {
                                self.expect_keyword(Keyword::JOIN)?;
                                if is_left {
                                    JoinOperator::LeftSemi
                                } else {
                                    JoinOperator::RightSemi
                                }
                            }
                            Some(Keyword::ANTI) if self.dialect.supports_semi_anti_join() => {
                                self.expect_keyword(Keyword::JOIN)?;
                                if is_left {
                                    JoinOperator::LeftAnti
                                } else {
                                    JoinOperator::RightAnti
                                }
                            }
                            Some(Keyword::JOIN) => {
                                if is_left {
                                    JoinOperator::LeftOuter
                                } else {
                                    JoinOperator::RightOuter
                                }
                            }
                            _ => {
                                return self.expected(
                                    "OUTER or JOIN after LEFT/RIGHT",
                                    self.peek_token(),
                                );
                            }
                        }
                    }
                    Keyword::FULL => {
                        let _ = self.next_token();
                        let _ = self.parse_keyword(Keyword::OUTER);
                        self.expect_keyword(Keyword::JOIN)?;
                        JoinOperator::FullOuter
                    }
                    _ if natural => {
                        return self.expected("a join type after NATURAL", self.peek_token());
                    }
                    _ => break,
                };
                let relation = self.parse_table_factor()?;
                let join_constraint = self.parse_join_constraint(natural)?;
                Join {
                    relation,
                    join_operator: join_operator_type(join_constraint),
                }
            };
            joins.push(join);
        }
        Ok(TableWithJoins { relation, joins })
    }

    /// A table name or a parenthesized subquery, followed by an optional
    /// alias.
    pub fn parse_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        if self.parse_keyword(Keyword::LATERAL) {
            // LATERAL must always be followed by a subquery.
            if !self.consume_token(&Token::LParen) {
                return self.expected("subquery after LATERAL", self.peek_token());
            }
            self.parse_derived_table_factor(true)
        } else if self.parse_keyword(Keyword::TABLE) {
            // `TABLE(<expr>)`
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            Ok(TableFactor::TableFunction { expr, alias })
        } else if self.parse_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;

            let alias = self.parse_optional_table_alias()?;

            let with_offset = self.parse_keywords(&[Keyword::WITH, Keyword::OFFSET]);
            let with_offset_alias = if with_offset {
                self.parse_optional_alias(keywords::RESERVED_FOR_COLUMN_ALIAS)?
            } else {
                None
            };

            Ok(TableFactor::UnNest {
                alias,
                array_expr: Box::new(expr),
                with_offset,
                with_offset_alias,
            })
        } else if self.consume_token(&Token::LParen) {
            // A left paren introduces either a derived table (i.e., a
            // subquery) or a nested join.
            if let Some(derived) = self.maybe_parse(|p| p.parse_derived_table_factor(false)) {
                return Ok(derived);
            }
            let table_and_joins = self.parse_table_and_joins()?;
            self.expect_token(&Token::RParen)?;
            if table_and_joins.joins.is_empty() {
                // Degenerate case: `(mytable)` with no join. Flatten it,
                // attaching a trailing alias to the inner factor if one
                // follows the parens and the factor carries none yet.
                let mut relation = table_and_joins.relation;
                if let Some(outer_alias) = self.parse_optional_table_alias()? {
                    match &mut relation {
                        TableFactor::Table { alias, .. }
                        | TableFactor::Derived { alias, .. }
                        | TableFactor::TableFunction { alias, .. }
                        | TableFactor::UnNest { alias, .. }
                        | TableFactor::NestedJoin { alias, .. } => match alias {
                            Some(inner_alias) => {
                                return parser_err!(format!(
                                    "duplicate alias {inner_alias}"
                                ));
                            }
                            None => *alias = Some(outer_alias),
                        },
                        TableFactor::Pivot { pivot_alias, .. } => match pivot_alias {
                            Some(inner_alias) => {
                                return parser_err!(format!(
                                    "duplicate alias {inner_alias}"
                                ));
                            }
                            None => *pivot_alias = Some(outer_alias),
                        },
                    }
                }
                Ok(relation)
            } else {
                let alias = self.parse_optional_table_alias()?;
                Ok(TableFactor::NestedJoin {
                    table_with_joins: Box::new(table_and_joins),
                    alias,
                })
            }
        } else {
            let name = self.parse_object_name()?;
            // Postgres and MSSQL: table-valued functions
            let args = if self.consume_token(&Token::LParen) {
                Some(self.parse_optional_args()?)
            } else {
                None
            };

            if self.peek_pivot() {
                return self.parse_pivot_table_factor(name, None);
            }
            let alias = self.parse_optional_table_alias()?;
            if self.peek_pivot() {
                return self.parse_pivot_table_factor(name, alias);
            }

            // MSSQL-specific table hints, e.g. `WITH (NOLOCK)`
            let mut with_hints = vec![];
            if self.parse_keyword(Keyword::WITH) {
                if self.consume_token(&Token::LParen) {
                    with_hints = self.parse_comma_separated(Parser::parse_expr)?;
                    self.expect_token(&Token::RParen)?;
                } else {
                    // `WITH` belongs to the next statement or clause
                    self.prev_token();
                }
            }
            Ok(TableFactor::Table {
                name,
                alias,
                args,
                with_hints,
            })
        }
    }

    fn peek_pivot(&self) -> bool {
        matches!(self.peek_token().token, Token::Word(ref w) if w.keyword == Keyword::PIVOT)
            && self.peek_nth_token(1) == Token::LParen
    }

    fn parse_pivot_table_factor(
        &mut self,
        name: ObjectName,
        table_alias: Option<TableAlias>,
    ) -> Result<TableFactor, ParserError> {
        self.expect_keyword(Keyword::PIVOT)?;
        self.expect_token(&Token::LParen)?;
        let function_name = match self.next_token().token {
            Token::Word(w) => Ok(w.value),
            _ => self.expected("an aggregate function name", self.peek_token()),
        }?;
        let function = self.parse_function(ObjectName(vec![Ident::new(function_name)]))?;
        self.expect_keyword(Keyword::FOR)?;
        let value_column = self.parse_object_name()?.0;
        self.expect_keyword(Keyword::IN)?;
        self.expect_token(&Token::LParen)?;
        let pivot_values = self.parse_comma_separated(Parser::parse_value)?;
        self.expect_token(&Token::RParen)?;
        self.expect_token(&Token::RParen)?;
        let pivot_alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::Pivot {
            name,
            table_alias,
            aggregate_function: function,
            value_column,
            pivot_values,
            pivot_alias,
        })
    }

    pub fn parse_derived_table_factor(&mut self, lateral: bool) -> Result<TableFactor, ParserError> {
        let subquery = Box::new(self.parse_query()?);
        self.expect_token(&Token::RParen)?;
        let alias = self.parse_optional_table_alias()?;
        Ok(TableFactor::Derived {
            lateral,
            subquery,
            alias,
        })
    }

    fn parse_join_constraint(&mut self, natural: bool) -> Result<JoinConstraint, ParserError> {
        if natural {
            Ok(JoinConstraint::Natural)
        } else if self.parse_keyword(Keyword::ON) {
            let constraint = self.parse_expr()?;
            Ok(JoinConstraint::On(constraint))
        } else if self.parse_keyword(Keyword::USING) {
            let columns = self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
            Ok(JoinConstraint::Using(columns))
        } else {
            Ok(JoinConstraint::None)
        }
    }

    /// Parse an `ORDER BY` item with its direction and nulls placement.
    pub fn parse_order_by_expr(&mut self) -> Result<OrderByExpr, ParserError> {
        let expr = self.parse_expr()?;

        let asc = if self.parse_keyword(Keyword::ASC) {
            Some(true)
        } else if self.parse_keyword(Keyword::DESC) {
            Some(false)
        } else {
            None
        };

        let nulls_first = if self.parse_keywords(&[Keyword::NULLS, Keyword::FIRST]) {
            Some(true)
        } else if self.parse_keywords(&[Keyword::NULLS, Keyword::LAST]) {
            Some(false)
        } else {
            None
        };

        Ok(OrderByExpr {
            expr,
            asc,
            nulls_first,
        })
    }

    /// Parse a `TOP` clause, MSSQL equivalent of LIMIT, assuming the `TOP`
    /// keyword was already consumed.
    pub fn parse_top(&mut self) -> Result<Top, ParserError> {
        let quantity = if self.consume_token(&Token::LParen) {
            let quantity = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(quantity)
        } else {
            Some(Expr::Value(self.parse_number_value()?))
        };

        let percent = self.parse_keyword(Keyword::PERCENT);
        let with_ties = self.parse_keywords(&[Keyword::WITH, Keyword::TIES]);

        Ok(Top {
            with_ties,
            percent,
            quantity,
        })
    }

    /// Parse a `LIMIT` argument; `LIMIT ALL` normalizes away to `None`.
    pub fn parse_limit(&mut self) -> Result<Option<Expr>, ParserError> {
        if self.parse_keyword(Keyword::ALL) {
            Ok(None)
        } else {
            Ok(Some(self.parse_expr()?))
        }
    }

    /// Parse an `OFFSET <n> [ROW | ROWS]` clause.
    pub fn parse_offset(&mut self) -> Result<Offset, ParserError> {
        let value = self.parse_expr()?;
        let rows = if self.parse_keyword(Keyword::ROW) {
            OffsetRows::Row
        } else if self.parse_keyword(Keyword::ROWS) {
            OffsetRows::Rows
        } else {
            OffsetRows::None
        };
        Ok(Offset { value, rows })
    }

    /// Parse a `FETCH {FIRST | NEXT} ...` clause.
    pub fn parse_fetch(&mut self) -> Result<Fetch, ParserError> {
        self.expect_one_of_keywords(&[Keyword::FIRST, Keyword::NEXT])?;
        let (quantity, percent) = if self
            .parse_one_of_keywords(&[Keyword::ROW, Keyword::ROWS])
            .is_some()
        {
            (None, false)
        } else {
            let quantity = Expr::Value(self.parse_value()?);
            let percent = self.parse_keyword(Keyword::PERCENT);
            self.expect_one_of_keywords(&[Keyword::ROW, Keyword::ROWS])?;
            (Some(quantity), percent)
        };
        let with_ties = if self.parse_keyword(Keyword::ONLY) {
            false
        } else if self.parse_keywords(&[Keyword::WITH, Keyword::TIES]) {
            true
        } else {
            return self.expected("one of ONLY or WITH TIES", self.peek_token());
        };
        Ok(Fetch {
            with_ties,
            percent,
            quantity,
        })
    }

    /// Parse one `FOR {UPDATE | SHARE} ...` locking clause, assuming the
    /// `FOR` keyword was already consumed.
    pub fn parse_lock(&mut self) -> Result<LockClause, ParserError> {
        let lock_type = match self.expect_one_of_keywords(&[Keyword::UPDATE, Keyword::SHARE])? {
            Keyword::UPDATE => LockType::Update,
            Keyword::SHARE => LockType::Share,
            _ => unreachable!(),
        };
        let of = if self.parse_keyword(Keyword::OF) {
            self.parse_comma_separated(Parser::parse_object_name)?
        } else {
            vec![]
        };
        let nonblock = if self.parse_keyword(Keyword::NOWAIT) {
            Some(NonBlock::Nowait)
        } else if self.parse_keywords(&[Keyword::SKIP, Keyword::LOCKED]) {
            Some(NonBlock::SkipLocked)
        } else {
            None
        };
        Ok(LockClause {
            lock_type,
            of,
            nonblock,
        })
    }

    /// Parse a comma-delimited list of parenthesized row values.
    pub fn parse_values(&mut self) -> Result<Values, ParserError> {
        let rows = self.parse_comma_separated(|parser| {
            parser.expect_token(&Token::LParen)?;
            let exprs = parser.parse_comma_separated(Parser::parse_expr)?;
            parser.expect_token(&Token::RParen)?;
            Ok(exprs)
        })?;
        Ok(Values(rows))
    }
}
