//! Statement grammars: DDL, DML, transactions, session statements, and the
//! statement-shaped utilities (`EXPLAIN`, `SHOW`, `CACHE`, ...). Each
//! `parse_*` here assumes its leading keyword was consumed by the dispatcher
//! in the parent module.

use std::str::FromStr;

use super::{IsOptional, Parser};
use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::lexer::Token;

impl<'a> Parser<'a> {
    // ========================================================================
    // DML
    // ========================================================================

    pub fn parse_insert(&mut self) -> Result<Statement, ParserError> {
        let or = if self.parse_keyword(Keyword::OR) {
            match self.expect_one_of_keywords(&[
                Keyword::REPLACE,
                Keyword::ROLLBACK,
                Keyword::ABORT,
                Keyword::FAIL,
                Keyword::IGNORE,
            ])? {
                Keyword::REPLACE => Some(SqliteOnConflict::Replace),
                Keyword::ROLLBACK => Some(SqliteOnConflict::Rollback),
                Keyword::ABORT => Some(SqliteOnConflict::Abort),
                Keyword::FAIL => Some(SqliteOnConflict::Fail),
                Keyword::IGNORE => Some(SqliteOnConflict::Ignore),
                _ => unreachable!(),
            }
        } else {
            None
        };

        let overwrite = self.parse_keyword(Keyword::OVERWRITE);
        let into = self.parse_keyword(Keyword::INTO);
        let table = self.parse_keyword(Keyword::TABLE);
        let table_name = self.parse_object_name()?;

        let (columns, partitioned, after_columns, source) =
            if self.parse_keywords(&[Keyword::DEFAULT, Keyword::VALUES]) {
                (vec![], None, vec![], None)
            } else {
                // A parenthesized subquery directly after the table name is a
                // source, not a column list.
                let columns = if self.peek_subquery_start() {
                    vec![]
                } else {
                    self.parse_parenthesized_column_list(IsOptional::Optional, false)?
                };
                let partitioned = if self.parse_keyword(Keyword::PARTITION) {
                    self.expect_token(&Token::LParen)?;
                    let partition_cols = self.parse_comma_separated(Parser::parse_expr)?;
                    self.expect_token(&Token::RParen)?;
                    Some(partition_cols)
                } else {
                    None
                };
                // Hive allows a second column list after the partition spec
                let after_columns = if self.peek_subquery_start() {
                    vec![]
                } else {
                    self.parse_parenthesized_column_list(IsOptional::Optional, false)?
                };
                let source = Some(Box::new(self.parse_query()?));
                (columns, partitioned, after_columns, source)
            };

        let on = if self.parse_keyword(Keyword::ON) {
            if self.parse_keyword(Keyword::CONFLICT) {
                let conflict_target =
                    self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                self.expect_keyword(Keyword::DO)?;
                let action = if self.parse_keyword(Keyword::NOTHING) {
                    OnConflictAction::DoNothing
                } else {
                    self.expect_keyword(Keyword::UPDATE)?;
                    self.expect_keyword(Keyword::SET)?;
                    let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
                    OnConflictAction::DoUpdate(assignments)
                };
                Some(OnInsert::OnConflict(OnConflict {
                    conflict_target,
                    action,
                }))
            } else {
                self.expect_keyword(Keyword::DUPLICATE)?;
                self.expect_keyword(Keyword::KEY)?;
                self.expect_keyword(Keyword::UPDATE)?;
                Some(OnInsert::DuplicateKeyUpdate(
                    self.parse_comma_separated(Parser::parse_assignment)?,
                ))
            }
        } else {
            None
        };

        let returning = if self.parse_keyword(Keyword::RETURNING) {
            Some(self.parse_comma_separated(Parser::parse_select_item)?)
        } else {
            None
        };

        Ok(Statement::Insert {
            or,
            into,
            table_name,
            columns,
            overwrite,
            table,
            source,
            partitioned,
            after_columns,
            on,
            returning,
        })
    }

    fn peek_subquery_start(&self) -> bool {
        self.peek_token() == Token::LParen
            && matches!(self.peek_nth_token(1).token, Token::Word(ref w)
                if w.keyword == Keyword::SELECT || w.keyword == Keyword::WITH)
    }

    pub fn parse_update(&mut self) -> Result<Statement, ParserError> {
        let table = self.parse_table_and_joins()?;
        self.expect_keyword(Keyword::SET)?;
        let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
        let from = if self.parse_keyword(Keyword::FROM) {
            Some(self.parse_table_and_joins()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::RETURNING) {
            Some(self.parse_comma_separated(Parser::parse_select_item)?)
        } else {
            None
        };
        Ok(Statement::Update {
            table,
            assignments,
            from,
            selection,
            returning,
        })
    }

    /// Parse a `var = expr` assignment, used in an UPDATE statement.
    pub fn parse_assignment(&mut self) -> Result<Assignment, ParserError> {
        let id = self.parse_object_name()?.0;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { id, value })
    }

    pub fn parse_delete(&mut self) -> Result<Statement, ParserError> {
        // MySQL multi-table delete names tables before FROM
        let tables = if !self.parse_keyword(Keyword::FROM) {
            let tables = self.parse_comma_separated(Parser::parse_object_name)?;
            self.expect_keyword(Keyword::FROM)?;
            tables
        } else {
            vec![]
        };
        let from = self.parse_comma_separated(Parser::parse_table_and_joins)?;
        let using = if self.parse_keyword(Keyword::USING) {
            Some(self.parse_comma_separated(Parser::parse_table_and_joins)?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::RETURNING) {
            Some(self.parse_comma_separated(Parser::parse_select_item)?)
        } else {
            None
        };
        Ok(Statement::Delete {
            tables,
            from,
            using,
            selection,
            returning,
        })
    }

    pub fn parse_merge(&mut self) -> Result<Statement, ParserError> {
        let into = self.parse_keyword(Keyword::INTO);
        let table = self.parse_table_factor()?;
        self.expect_keyword(Keyword::USING)?;
        let source = self.parse_table_factor()?;
        self.expect_keyword(Keyword::ON)?;
        let on = self.parse_expr()?;
        let clauses = self.parse_merge_clauses()?;
        Ok(Statement::Merge {
            into,
            table,
            source,
            on: Box::new(on),
            clauses,
        })
    }

    fn parse_merge_clauses(&mut self) -> Result<Vec<MergeClause>, ParserError> {
        let mut clauses: Vec<MergeClause> = vec![];
        loop {
            if self.peek_token() == Token::EOF || self.peek_token() == Token::SemiColon {
                break;
            }
            self.expect_keyword(Keyword::WHEN)?;

            let is_not_matched = self.parse_keyword(Keyword::NOT);
            self.expect_keyword(Keyword::MATCHED)?;

            let predicate = if self.parse_keyword(Keyword::AND) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            self.expect_keyword(Keyword::THEN)?;

            clauses.push(
                match self.parse_one_of_keywords(&[
                    Keyword::UPDATE,
                    Keyword::DELETE,
                    Keyword::INSERT,
                ]) {
                    Some(Keyword::UPDATE) => {
                        if is_not_matched {
                            return parser_err!(
                                "UPDATE is not allowed in a NOT MATCHED merge clause".to_string()
                            );
                        }
                        self.expect_keyword(Keyword::SET)?;
                        let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
                        MergeClause::MatchedUpdate {
                            predicate,
                            assignments,
                        }
                    }
                    Some(Keyword::DELETE) => {
                        if is_not_matched {
                            return parser_err!(
                                "DELETE is not allowed in a NOT MATCHED merge clause".to_string()
                            );
                        }
                        MergeClause::MatchedDelete(predicate)
                    }
                    Some(Keyword::INSERT) => {
                        if !is_not_matched {
                            return parser_err!(
                                "INSERT is not allowed in a MATCHED merge clause".to_string()
                            );
                        }
                        let columns =
                            self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                        self.expect_keyword(Keyword::VALUES)?;
                        let values = self.parse_values()?;
                        MergeClause::NotMatched {
                            predicate,
                            columns,
                            values,
                        }
                    }
                    _ => {
                        return self.expected(
                            "UPDATE, DELETE or INSERT in merge clause",
                            self.peek_token(),
                        );
                    }
                },
            );
        }
        Ok(clauses)
    }

    // ========================================================================
    // DDL
    // ========================================================================

    pub fn parse_create(&mut self) -> Result<Statement, ParserError> {
        let or_replace = self.parse_keywords(&[Keyword::OR, Keyword::REPLACE]);
        let temporary = self
            .parse_one_of_keywords(&[Keyword::TEMP, Keyword::TEMPORARY])
            .is_some();
        if self.parse_keyword(Keyword::EXTERNAL) {
            self.expect_keyword(Keyword::TABLE)?;
            return self.parse_create_table(or_replace, temporary, true);
        }
        if self.parse_keyword(Keyword::MATERIALIZED) {
            self.expect_keyword(Keyword::VIEW)?;
            return self.parse_create_view(or_replace, true);
        }
        if self.parse_keyword(Keyword::TABLE) {
            return self.parse_create_table(or_replace, temporary, false);
        }
        if self.parse_keyword(Keyword::VIEW) {
            return self.parse_create_view(or_replace, false);
        }
        let unique = self.parse_keyword(Keyword::UNIQUE);
        if self.parse_keyword(Keyword::INDEX) {
            return self.parse_create_index(unique);
        }
        if unique {
            return self.expected("INDEX after UNIQUE", self.peek_token());
        }
        if self.parse_keyword(Keyword::SCHEMA) {
            return self.parse_create_schema();
        }
        if self.parse_keyword(Keyword::DATABASE) {
            return self.parse_create_database();
        }
        if self.parse_keyword(Keyword::ROLE) {
            return self.parse_create_role();
        }
        if self.parse_keyword(Keyword::TYPE) {
            return self.parse_create_type();
        }
        self.expected("an object type after CREATE", self.peek_token())
    }

    pub fn parse_create_table(
        &mut self,
        or_replace: bool,
        temporary: bool,
        external: bool,
    ) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;

        let on_cluster = if self.parse_keywords(&[Keyword::ON, Keyword::CLUSTER]) {
            let next_token = self.next_token();
            match next_token.token {
                Token::SingleQuotedString(ref s) => Some(s.clone()),
                Token::Word(ref w) => Some(w.value.clone()),
                _ => return self.expected("a cluster name", next_token),
            }
        } else {
            None
        };

        let (columns, constraints) = self.parse_columns()?;

        let file_format = if self.parse_keywords(&[Keyword::STORED, Keyword::AS]) {
            Some(self.parse_file_format()?)
        } else {
            None
        };
        let location = if self.parse_keyword(Keyword::LOCATION) {
            Some(self.parse_literal_string()?)
        } else {
            None
        };
        let with_options = self.parse_options(Keyword::WITH)?;

        let engine = if self.parse_keyword(Keyword::ENGINE) {
            self.expect_token(&Token::Eq)?;
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(ref w) => Some(w.value.clone()),
                _ => return self.expected("an engine name", next_token),
            }
        } else {
            None
        };
        let default_charset = if self.parse_keywords(&[Keyword::DEFAULT, Keyword::CHARSET]) {
            self.expect_token(&Token::Eq)?;
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(ref w) => Some(w.value.clone()),
                _ => return self.expected("a character set name", next_token),
            }
        } else {
            None
        };
        let collation = if self.parse_keyword(Keyword::COLLATE) {
            self.expect_token(&Token::Eq)?;
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(ref w) => Some(w.value.clone()),
                _ => return self.expected("a collation name", next_token),
            }
        } else {
            None
        };

        let clone = if self.parse_keyword(Keyword::CLONE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };

        let query = if self.parse_keyword(Keyword::AS) {
            Some(Box::new(self.parse_query()?))
        } else {
            None
        };

        Ok(Statement::CreateTable {
            or_replace,
            temporary,
            external,
            if_not_exists,
            name,
            columns,
            constraints,
            on_cluster,
            file_format,
            location,
            with_options,
            engine,
            default_charset,
            collation,
            clone,
            query,
        })
    }

    fn parse_file_format(&mut self) -> Result<FileFormat, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(ref w) => FileFormat::from_str(&w.value.to_uppercase())
                .or_else(|_| self.expected("fileformat", next_token.clone())),
            _ => self.expected("fileformat", next_token),
        }
    }

    /// Parse the column and constraint list of `CREATE TABLE`; a trailing
    /// comma before the closing paren is accepted.
    pub fn parse_columns(&mut self) -> Result<(Vec<ColumnDef>, Vec<TableConstraint>), ParserError> {
        let mut columns = vec![];
        let mut constraints = vec![];
        if !self.consume_token(&Token::LParen) || self.consume_token(&Token::RParen) {
            return Ok((columns, constraints));
        }

        loop {
            if let Some(constraint) = self.parse_optional_table_constraint()? {
                constraints.push(constraint);
            } else if let Token::Word(_) = self.peek_token().token {
                columns.push(self.parse_column_def()?);
            } else {
                return self.expected("column name or constraint definition", self.peek_token());
            }
            let comma = self.consume_token(&Token::Comma);
            if self.consume_token(&Token::RParen) {
                // allow a trailing comma, even though it's not in standard
                break;
            } else if !comma {
                return self.expected("',' or ')' after column definition", self.peek_token());
            }
        }

        Ok((columns, constraints))
    }

    pub fn parse_column_def(&mut self) -> Result<ColumnDef, ParserError> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let collation = if self.parse_keyword(Keyword::COLLATE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let mut options = vec![];
        loop {
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let name = Some(self.parse_identifier()?);
                if let Some(option) = self.parse_optional_column_option()? {
                    options.push(ColumnOptionDef { name, option });
                } else {
                    return self.expected(
                        "constraint details after CONSTRAINT <name>",
                        self.peek_token(),
                    );
                }
            } else if let Some(option) = self.parse_optional_column_option()? {
                options.push(ColumnOptionDef { name: None, option });
            } else {
                break;
            }
        }
        Ok(ColumnDef {
            name,
            data_type,
            collation,
            options,
        })
    }

    pub fn parse_optional_column_option(&mut self) -> Result<Option<ColumnOption>, ParserError> {
        if self.parse_keywords(&[Keyword::NOT, Keyword::NULL]) {
            Ok(Some(ColumnOption::NotNull))
        } else if self.parse_keyword(Keyword::NULL) {
            Ok(Some(ColumnOption::Null))
        } else if self.parse_keyword(Keyword::DEFAULT) {
            Ok(Some(ColumnOption::Default(self.parse_expr()?)))
        } else if self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
            Ok(Some(ColumnOption::Unique { is_primary: true }))
        } else if self.parse_keyword(Keyword::UNIQUE) {
            Ok(Some(ColumnOption::Unique { is_primary: false }))
        } else if self.parse_keyword(Keyword::REFERENCES) {
            let foreign_table = self.parse_object_name()?;
            // PostgreSQL allows omitting the column list and defaults to the
            // primary key of the referenced table
            let referred_columns =
                self.parse_parenthesized_column_list(IsOptional::Optional, true)?;
            let (on_delete, on_update) = self.parse_referential_actions()?;
            Ok(Some(ColumnOption::ForeignKey {
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            }))
        } else if self.parse_keyword(Keyword::CHECK) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(ColumnOption::Check(expr)))
        } else if self.parse_keywords(&[Keyword::CHARACTER, Keyword::SET]) {
            Ok(Some(ColumnOption::CharacterSet(self.parse_object_name()?)))
        } else if self.parse_keyword(Keyword::COMMENT) {
            let next_token = self.next_token();
            match next_token.token {
                Token::SingleQuotedString(ref value) => {
                    Ok(Some(ColumnOption::Comment(value.clone())))
                }
                _ => self.expected("string", next_token),
            }
        } else if self.parse_keywords(&[Keyword::ON, Keyword::UPDATE]) {
            Ok(Some(ColumnOption::OnUpdate(self.parse_expr()?)))
        } else if self.parse_keyword(Keyword::AUTO_INCREMENT) {
            // MySQL; carried through as-is
            Ok(Some(ColumnOption::DialectSpecific(vec![
                Token::make_keyword("AUTO_INCREMENT"),
            ])))
        } else if self.parse_keyword(Keyword::AUTOINCREMENT) {
            // SQLite
            Ok(Some(ColumnOption::DialectSpecific(vec![
                Token::make_keyword("AUTOINCREMENT"),
            ])))
        } else {
            Ok(None)
        }
    }

    /// Parse the `ON DELETE`/`ON UPDATE` tail of a reference specification.
    /// Each action may appear at most once.
    fn parse_referential_actions(
        &mut self,
    ) -> Result<(Option<ReferentialAction>, Option<ReferentialAction>), ParserError> {
        let mut on_delete = None;
        let mut on_update = None;
        loop {
            if self.parse_keywords(&[Keyword::ON, Keyword::DELETE]) {
                let action = self.parse_referential_action()?;
                if on_delete.replace(action).is_some() {
                    return parser_err!(
                        "Expected at most one ON DELETE action per reference".to_string()
                    );
                }
            } else if self.parse_keywords(&[Keyword::ON, Keyword::UPDATE]) {
                let action = self.parse_referential_action()?;
                if on_update.replace(action).is_some() {
                    return parser_err!(
                        "Expected at most one ON UPDATE action per reference".to_string()
                    );
                }
            } else {
                break;
            }
        }
        Ok((on_delete, on_update))
    }

    pub fn parse_referential_action(&mut self) -> Result<ReferentialAction, ParserError> {
        if self.parse_keyword(Keyword::RESTRICT) {
            Ok(ReferentialAction::Restrict)
        } else if self.parse_keyword(Keyword::CASCADE) {
            Ok(ReferentialAction::Cascade)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::NULL]) {
            Ok(ReferentialAction::SetNull)
        } else if self.parse_keywords(&[Keyword::NO, Keyword::ACTION]) {
            Ok(ReferentialAction::NoAction)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
            Ok(ReferentialAction::SetDefault)
        } else {
            self.expected(
                "one of RESTRICT, CASCADE, SET NULL, NO ACTION or SET DEFAULT",
                self.peek_token(),
            )
        }
    }

    pub fn parse_optional_table_constraint(
        &mut self,
    ) -> Result<Option<TableConstraint>, ParserError> {
        let name = if self.parse_keyword(Keyword::CONSTRAINT) {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let next_token = self.next_token();
        match next_token.token {
            Token::Word(ref w) if w.keyword == Keyword::PRIMARY || w.keyword == Keyword::UNIQUE => {
                let is_primary = w.keyword == Keyword::PRIMARY;
                if is_primary {
                    self.expect_keyword(Keyword::KEY)?;
                }
                let columns = self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                Ok(Some(TableConstraint::Unique {
                    name,
                    columns,
                    is_primary,
                }))
            }
            Token::Word(ref w) if w.keyword == Keyword::FOREIGN => {
                self.expect_keyword(Keyword::KEY)?;
                let columns = self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                self.expect_keyword(Keyword::REFERENCES)?;
                let foreign_table = self.parse_object_name()?;
                let referred_columns =
                    self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                let (on_delete, on_update) = self.parse_referential_actions()?;
                Ok(Some(TableConstraint::ForeignKey {
                    name,
                    columns,
                    foreign_table,
                    referred_columns,
                    on_delete,
                    on_update,
                }))
            }
            Token::Word(ref w) if w.keyword == Keyword::CHECK => {
                self.expect_token(&Token::LParen)?;
                let expr = Box::new(self.parse_expr()?);
                self.expect_token(&Token::RParen)?;
                Ok(Some(TableConstraint::Check { name, expr }))
            }
            _ => {
                if name.is_some() {
                    self.expected("PRIMARY, UNIQUE, FOREIGN, or CHECK", next_token)
                } else {
                    self.prev_token();
                    Ok(None)
                }
            }
        }
    }

    /// Parse `<keyword> (<option> = <value>, ...)`, returning an empty list
    /// if the keyword is absent.
    pub fn parse_options(&mut self, keyword: Keyword) -> Result<Vec<SqlOption>, ParserError> {
        if self.parse_keyword(keyword) {
            self.expect_token(&Token::LParen)?;
            let options = self.parse_comma_separated(Parser::parse_sql_option)?;
            self.expect_token(&Token::RParen)?;
            Ok(options)
        } else {
            Ok(vec![])
        }
    }

    pub fn parse_sql_option(&mut self) -> Result<SqlOption, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_value()?;
        Ok(SqlOption { name, value })
    }

    pub fn parse_create_view(
        &mut self,
        or_replace: bool,
        materialized: bool,
    ) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
        self.expect_keyword(Keyword::AS)?;
        let query = Box::new(self.parse_query()?);
        Ok(Statement::CreateView {
            or_replace,
            materialized,
            name,
            columns,
            query,
        })
    }

    pub fn parse_create_index(&mut self, unique: bool) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let index_name = self.parse_object_name()?;
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let using = if self.parse_keyword(Keyword::USING) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect_token(&Token::LParen)?;
        let columns = self.parse_comma_separated(Parser::parse_order_by_expr)?;
        self.expect_token(&Token::RParen)?;
        Ok(Statement::CreateIndex {
            name: index_name,
            table_name,
            using,
            columns,
            unique,
            if_not_exists,
        })
    }

    pub fn parse_create_schema(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let schema_name = self.parse_schema_name()?;
        Ok(Statement::CreateSchema {
            schema_name,
            if_not_exists,
        })
    }

    fn parse_schema_name(&mut self) -> Result<SchemaName, ParserError> {
        if self.parse_keyword(Keyword::AUTHORIZATION) {
            Ok(SchemaName::UnnamedAuthorization(self.parse_identifier()?))
        } else {
            let name = self.parse_object_name()?;
            if self.parse_keyword(Keyword::AUTHORIZATION) {
                Ok(SchemaName::NamedAuthorization(
                    name,
                    self.parse_identifier()?,
                ))
            } else {
                Ok(SchemaName::Simple(name))
            }
        }
    }

    pub fn parse_create_database(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let db_name = self.parse_object_name()?;
        let mut location = None;
        let mut managed_location = None;
        loop {
            match self.parse_one_of_keywords(&[Keyword::LOCATION, Keyword::MANAGEDLOCATION]) {
                Some(Keyword::LOCATION) => location = Some(self.parse_literal_string()?),
                Some(Keyword::MANAGEDLOCATION) => {
                    managed_location = Some(self.parse_literal_string()?)
                }
                _ => break,
            }
        }
        Ok(Statement::CreateDatabase {
            db_name,
            if_not_exists,
            location,
            managed_location,
        })
    }

    pub fn parse_create_role(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Parser::parse_object_name)?;
        Ok(Statement::CreateRole {
            names,
            if_not_exists,
        })
    }

    pub fn parse_create_type(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::AS)?;
        self.expect_token(&Token::LParen)?;
        let attributes = self.parse_comma_separated(|parser| {
            let name = parser.parse_identifier()?;
            let data_type = parser.parse_data_type()?;
            Ok(ColumnDef {
                name,
                data_type,
                collation: None,
                options: vec![],
            })
        })?;
        self.expect_token(&Token::RParen)?;
        Ok(Statement::CreateType { name, attributes })
    }

    pub fn parse_drop(&mut self) -> Result<Statement, ParserError> {
        let object_type = if self.parse_keyword(Keyword::TABLE) {
            ObjectType::Table
        } else if self.parse_keyword(Keyword::VIEW) {
            ObjectType::View
        } else if self.parse_keyword(Keyword::INDEX) {
            ObjectType::Index
        } else if self.parse_keyword(Keyword::SCHEMA) {
            ObjectType::Schema
        } else if self.parse_keyword(Keyword::DATABASE) {
            ObjectType::Database
        } else if self.parse_keyword(Keyword::ROLE) {
            ObjectType::Role
        } else {
            return self.expected(
                "TABLE, VIEW, INDEX, SCHEMA, DATABASE or ROLE after DROP",
                self.peek_token(),
            );
        };
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Parser::parse_object_name)?;
        let cascade = self.parse_keyword(Keyword::CASCADE);
        let restrict = self.parse_keyword(Keyword::RESTRICT);
        let purge = self.parse_keyword(Keyword::PURGE);
        if cascade && restrict {
            return parser_err!("Cannot specify both CASCADE and RESTRICT in DROP".to_string());
        }
        Ok(Statement::Drop {
            object_type,
            if_exists,
            names,
            cascade,
            restrict,
            purge,
        })
    }

    pub fn parse_alter(&mut self) -> Result<Statement, ParserError> {
        match self.expect_one_of_keywords(&[Keyword::TABLE, Keyword::INDEX, Keyword::VIEW])? {
            Keyword::TABLE => {
                let name = self.parse_object_name()?;
                let operation = self.parse_alter_table_operation()?;
                Ok(Statement::AlterTable { name, operation })
            }
            Keyword::INDEX => {
                let name = self.parse_object_name()?;
                self.expect_keywords(&[Keyword::RENAME, Keyword::TO])?;
                let index_name = self.parse_object_name()?;
                Ok(Statement::AlterIndex {
                    name,
                    operation: AlterIndexOperation::RenameIndex { index_name },
                })
            }
            Keyword::VIEW => {
                let name = self.parse_object_name()?;
                let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                self.expect_keyword(Keyword::AS)?;
                let query = Box::new(self.parse_query()?);
                Ok(Statement::AlterView {
                    name,
                    columns,
                    query,
                })
            }
            _ => unreachable!(),
        }
    }

    fn parse_alter_table_operation(&mut self) -> Result<AlterTableOperation, ParserError> {
        if self.parse_keyword(Keyword::ADD) {
            if let Some(constraint) = self.parse_optional_table_constraint()? {
                Ok(AlterTableOperation::AddConstraint(constraint))
            } else {
                let _ = self.parse_keyword(Keyword::COLUMN);
                let if_not_exists =
                    self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
                let column_def = self.parse_column_def()?;
                Ok(AlterTableOperation::AddColumn {
                    if_not_exists,
                    column_def,
                })
            }
        } else if self.parse_keyword(Keyword::RENAME) {
            if self.parse_keyword(Keyword::TO) {
                let table_name = self.parse_object_name()?;
                Ok(AlterTableOperation::RenameTable { table_name })
            } else {
                let _ = self.parse_keyword(Keyword::COLUMN);
                let old_column_name = self.parse_identifier()?;
                self.expect_keyword(Keyword::TO)?;
                let new_column_name = self.parse_identifier()?;
                Ok(AlterTableOperation::RenameColumn {
                    old_column_name,
                    new_column_name,
                })
            }
        } else if self.parse_keyword(Keyword::DROP) {
            if self.parse_keyword(Keyword::CONSTRAINT) {
                let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
                let name = self.parse_identifier()?;
                let cascade = self.parse_keyword(Keyword::CASCADE);
                Ok(AlterTableOperation::DropConstraint {
                    if_exists,
                    name,
                    cascade,
                })
            } else {
                let _ = self.parse_keyword(Keyword::COLUMN);
                let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
                let column_name = self.parse_identifier()?;
                let cascade = self.parse_keyword(Keyword::CASCADE);
                Ok(AlterTableOperation::DropColumn {
                    column_name,
                    if_exists,
                    cascade,
                })
            }
        } else if self.parse_keyword(Keyword::ALTER) {
            let _ = self.parse_keyword(Keyword::COLUMN);
            let column_name = self.parse_identifier()?;
            let op = if self.parse_keywords(&[Keyword::SET, Keyword::NOT, Keyword::NULL]) {
                AlterColumnOperation::SetNotNull
            } else if self.parse_keywords(&[Keyword::DROP, Keyword::NOT, Keyword::NULL]) {
                AlterColumnOperation::DropNotNull
            } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
                AlterColumnOperation::SetDefault {
                    value: self.parse_expr()?,
                }
            } else if self.parse_keywords(&[Keyword::DROP, Keyword::DEFAULT]) {
                AlterColumnOperation::DropDefault
            } else if self.parse_keywords(&[Keyword::SET, Keyword::DATA, Keyword::TYPE]) {
                AlterColumnOperation::SetDataType {
                    data_type: self.parse_data_type()?,
                }
            } else {
                return self.expected(
                    "SET/DROP NOT NULL, SET DEFAULT, or SET DATA TYPE after ALTER COLUMN",
                    self.peek_token(),
                );
            };
            Ok(AlterTableOperation::AlterColumn { column_name, op })
        } else {
            self.expected("ADD, RENAME, DROP, or ALTER after ALTER TABLE", self.peek_token())
        }
    }

    pub fn parse_truncate(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let table_name = self.parse_object_name()?;
        let mut partitions = None;
        if self.parse_keyword(Keyword::PARTITION) {
            self.expect_token(&Token::LParen)?;
            partitions = Some(self.parse_comma_separated(Parser::parse_expr)?);
            self.expect_token(&Token::RParen)?;
        }
        Ok(Statement::Truncate {
            table_name,
            partitions,
        })
    }

    pub fn parse_analyze(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let table_name = self.parse_object_name()?;
        let mut for_columns = false;
        let mut cache_metadata = false;
        let mut noscan = false;
        let mut partitions = None;
        let mut compute_statistics = false;
        let mut columns = vec![];
        loop {
            if self.parse_keyword(Keyword::PARTITION) {
                self.expect_token(&Token::LParen)?;
                partitions = Some(self.parse_comma_separated(Parser::parse_expr)?);
                self.expect_token(&Token::RParen)?;
            } else if self.parse_keyword(Keyword::NOSCAN) {
                noscan = true;
            } else if self.parse_keywords(&[Keyword::CACHE, Keyword::METADATA]) {
                cache_metadata = true;
            } else if self.parse_keywords(&[Keyword::COMPUTE, Keyword::STATISTICS]) {
                compute_statistics = true;
            } else if self.parse_keywords(&[Keyword::FOR, Keyword::COLUMNS]) {
                for_columns = true;
                columns = self
                    .maybe_parse(|parser| {
                        parser.parse_comma_separated(Parser::parse_identifier)
                    })
                    .unwrap_or_default();
            } else {
                break;
            }
        }
        Ok(Statement::Analyze {
            table_name,
            partitions,
            for_columns,
            columns,
            cache_metadata,
            noscan,
            compute_statistics,
        })
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    pub fn parse_start_transaction(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TRANSACTION)?;
        Ok(Statement::StartTransaction {
            modes: self.parse_transaction_modes()?,
        })
    }

    /// `BEGIN [WORK | TRANSACTION]` normalizes to `START TRANSACTION`.
    pub fn parse_begin(&mut self) -> Result<Statement, ParserError> {
        let _ = self.parse_one_of_keywords(&[Keyword::TRANSACTION, Keyword::WORK]);
        Ok(Statement::StartTransaction {
            modes: self.parse_transaction_modes()?,
        })
    }

    /// Transaction modes may be separated by commas or just whitespace.
    pub fn parse_transaction_modes(&mut self) -> Result<Vec<TransactionMode>, ParserError> {
        let mut modes = vec![];
        let mut required = false;
        loop {
            let mode = if self.parse_keywords(&[Keyword::ISOLATION, Keyword::LEVEL]) {
                let iso_level = if self.parse_keywords(&[Keyword::READ, Keyword::UNCOMMITTED]) {
                    TransactionIsolationLevel::ReadUncommitted
                } else if self.parse_keywords(&[Keyword::READ, Keyword::COMMITTED]) {
                    TransactionIsolationLevel::ReadCommitted
                } else if self.parse_keywords(&[Keyword::REPEATABLE, Keyword::READ]) {
                    TransactionIsolationLevel::RepeatableRead
                } else if self.parse_keyword(Keyword::SERIALIZABLE) {
                    TransactionIsolationLevel::Serializable
                } else {
                    return self.expected("isolation level", self.peek_token());
                };
                TransactionMode::IsolationLevel(iso_level)
            } else if self.parse_keywords(&[Keyword::READ, Keyword::ONLY]) {
                TransactionMode::AccessMode(TransactionAccessMode::ReadOnly)
            } else if self.parse_keywords(&[Keyword::READ, Keyword::WRITE]) {
                TransactionMode::AccessMode(TransactionAccessMode::ReadWrite)
            } else if required {
                return self.expected("transaction mode", self.peek_token());
            } else {
                break;
            };
            modes.push(mode);
            // ANSI requires a comma after each transaction mode, but
            // PostgreSQL, for historical reasons, does not. We follow the
            // PostgreSQL in making the comma optional, since that is strictly
            // more general.
            required = self.consume_token(&Token::Comma);
        }
        Ok(modes)
    }

    pub fn parse_commit(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Commit {
            chain: self.parse_commit_rollback_chain()?,
        })
    }

    pub fn parse_rollback(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Rollback {
            chain: self.parse_commit_rollback_chain()?,
        })
    }

    fn parse_commit_rollback_chain(&mut self) -> Result<bool, ParserError> {
        let _ = self.parse_one_of_keywords(&[Keyword::TRANSACTION, Keyword::WORK]);
        if self.parse_keyword(Keyword::AND) {
            let chain = !self.parse_keyword(Keyword::NO);
            self.expect_keyword(Keyword::CHAIN)?;
            Ok(chain)
        } else {
            Ok(false)
        }
    }

    // ========================================================================
    // Session statements
    // ========================================================================

    pub fn parse_set(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::TRANSACTION) {
            return Ok(Statement::SetTransaction {
                modes: self.parse_transaction_modes()?,
            });
        }

        let modifier =
            self.parse_one_of_keywords(&[Keyword::SESSION, Keyword::LOCAL, Keyword::HIVEVAR]);
        let local = modifier == Some(Keyword::LOCAL);
        let hivevar = modifier == Some(Keyword::HIVEVAR);
        if hivevar {
            self.expect_token(&Token::Colon)?;
        }

        if !local && !hivevar && self.parse_keyword(Keyword::NAMES) {
            if self.parse_keyword(Keyword::DEFAULT) {
                return Ok(Statement::SetNamesDefault {});
            }
            let charset_name = self.parse_literal_string()?;
            let collation_name = if self.parse_keyword(Keyword::COLLATE) {
                Some(self.parse_literal_string()?)
            } else {
                None
            };
            return Ok(Statement::SetNames {
                charset_name,
                collation_name,
            });
        }

        if !hivevar && self.parse_keywords(&[Keyword::TIME, Keyword::ZONE]) {
            let value = self.parse_expr()?;
            return Ok(Statement::SetTimeZone { local, value });
        }

        let variable = self.parse_object_name()?;
        if self.consume_token(&Token::Eq) || self.parse_keyword(Keyword::TO) {
            let mut values = vec![];
            loop {
                values.push(self.parse_expr()?);
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
            Ok(Statement::SetVariable {
                local,
                hivevar,
                variable,
                value: values,
            })
        } else {
            self.expected("equals sign or TO", self.peek_token())
        }
    }

    pub fn parse_show(&mut self) -> Result<Statement, ParserError> {
        let extended = self.parse_keyword(Keyword::EXTENDED);
        let full = self.parse_keyword(Keyword::FULL);
        if self.parse_keyword(Keyword::COLUMNS) {
            return self.parse_show_columns(extended, full);
        }
        if self.parse_keyword(Keyword::TABLES) {
            return self.parse_show_tables(extended, full);
        }
        if extended || full {
            return self.expected("COLUMNS or TABLES after EXTENDED/FULL", self.peek_token());
        }
        if self.parse_keyword(Keyword::FUNCTIONS) {
            return Ok(Statement::ShowFunctions {
                filter: self.parse_show_statement_filter()?,
            });
        }
        if self.parse_keyword(Keyword::COLLATION) {
            return Ok(Statement::ShowCollation {
                filter: self.parse_show_statement_filter()?,
            });
        }
        if self.parse_keyword(Keyword::VARIABLES) {
            return Ok(Statement::ShowVariables {
                filter: self.parse_show_statement_filter()?,
            });
        }
        if self.parse_keyword(Keyword::CREATE) {
            return self.parse_show_create();
        }
        Ok(Statement::ShowVariable {
            variable: self.parse_identifiers()?,
        })
    }

    fn parse_show_create(&mut self) -> Result<Statement, ParserError> {
        let obj_type = match self.expect_one_of_keywords(&[Keyword::TABLE, Keyword::VIEW])? {
            Keyword::TABLE => ShowCreateObject::Table,
            Keyword::VIEW => ShowCreateObject::View,
            _ => unreachable!(),
        };
        let obj_name = self.parse_object_name()?;
        Ok(Statement::ShowCreate { obj_type, obj_name })
    }

    fn parse_show_columns(
        &mut self,
        extended: bool,
        full: bool,
    ) -> Result<Statement, ParserError> {
        self.expect_one_of_keywords(&[Keyword::FROM, Keyword::IN])?;
        let object_name = self.parse_object_name()?;
        let table_name = match self.parse_one_of_keywords(&[Keyword::FROM, Keyword::IN]) {
            Some(_) => {
                // A second FROM/IN names the database: `db.table`
                let db_name = vec![self.parse_identifier()?];
                let tbl = object_name.0;
                ObjectName(db_name.into_iter().chain(tbl).collect())
            }
            None => object_name,
        };
        let filter = self.parse_show_statement_filter()?;
        Ok(Statement::ShowColumns {
            extended,
            full,
            table_name,
            filter,
        })
    }

    fn parse_show_tables(&mut self, extended: bool, full: bool) -> Result<Statement, ParserError> {
        let db_name = match self.parse_one_of_keywords(&[Keyword::FROM, Keyword::IN]) {
            Some(_) => Some(self.parse_identifier()?),
            None => None,
        };
        let filter = self.parse_show_statement_filter()?;
        Ok(Statement::ShowTables {
            extended,
            full,
            db_name,
            filter,
        })
    }

    fn parse_show_statement_filter(
        &mut self,
    ) -> Result<Option<ShowStatementFilter>, ParserError> {
        if self.parse_keyword(Keyword::LIKE) {
            Ok(Some(ShowStatementFilter::Like(
                self.parse_literal_string()?,
            )))
        } else if self.parse_keyword(Keyword::ILIKE) {
            Ok(Some(ShowStatementFilter::ILike(
                self.parse_literal_string()?,
            )))
        } else if self.parse_keyword(Keyword::WHERE) {
            Ok(Some(ShowStatementFilter::Where(self.parse_expr()?)))
        } else {
            Ok(None)
        }
    }

    pub fn parse_use(&mut self) -> Result<Statement, ParserError> {
        let db_name = self.parse_identifier()?;
        Ok(Statement::Use { db_name })
    }

    // ========================================================================
    // Access control
    // ========================================================================

    pub fn parse_grant(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;

        self.expect_keyword(Keyword::TO)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;

        let with_grant_option =
            self.parse_keywords(&[Keyword::WITH, Keyword::GRANT, Keyword::OPTION]);

        let granted_by = if self.parse_keywords(&[Keyword::GRANTED, Keyword::BY]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        Ok(Statement::Grant {
            privileges,
            objects,
            grantees,
            with_grant_option,
            granted_by,
        })
    }

    pub fn parse_revoke(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;

        self.expect_keyword(Keyword::FROM)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;

        let granted_by = if self.parse_keywords(&[Keyword::GRANTED, Keyword::BY]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let cascade = if self.parse_keyword(Keyword::CASCADE) {
            Some(true)
        } else if self.parse_keyword(Keyword::RESTRICT) {
            Some(false)
        } else {
            None
        };

        Ok(Statement::Revoke {
            privileges,
            objects,
            grantees,
            granted_by,
            cascade,
        })
    }

    fn parse_grant_revoke_privileges_objects(
        &mut self,
    ) -> Result<(Privileges, GrantObjects), ParserError> {
        let privileges = if self.parse_keyword(Keyword::ALL) {
            Privileges::All {
                with_privileges_keyword: self.parse_keyword(Keyword::PRIVILEGES),
            }
        } else {
            let actions = self.parse_comma_separated(Parser::parse_grant_permission)?;
            Privileges::Actions(actions)
        };

        self.expect_keyword(Keyword::ON)?;

        let objects = if self.parse_keywords(&[
            Keyword::ALL,
            Keyword::TABLES,
            Keyword::IN,
            Keyword::SCHEMA,
        ]) {
            GrantObjects::AllTablesInSchema {
                schemas: self.parse_comma_separated(Parser::parse_object_name)?,
            }
        } else if self.parse_keywords(&[
            Keyword::ALL,
            Keyword::SEQUENCES,
            Keyword::IN,
            Keyword::SCHEMA,
        ]) {
            GrantObjects::AllSequencesInSchema {
                schemas: self.parse_comma_separated(Parser::parse_object_name)?,
            }
        } else {
            let object_type =
                self.parse_one_of_keywords(&[Keyword::SEQUENCE, Keyword::SCHEMA, Keyword::TABLE]);
            let objects = self.parse_comma_separated(Parser::parse_object_name)?;
            match object_type {
                Some(Keyword::SCHEMA) => GrantObjects::Schemas(objects),
                Some(Keyword::SEQUENCE) => GrantObjects::Sequences(objects),
                Some(Keyword::TABLE) | None => GrantObjects::Tables(objects),
                _ => unreachable!(),
            }
        };

        Ok((privileges, objects))
    }

    fn parse_grant_permission(&mut self) -> Result<Action, ParserError> {
        let keyword = self.expect_one_of_keywords(&[
            Keyword::CONNECT,
            Keyword::CREATE,
            Keyword::DELETE,
            Keyword::EXECUTE,
            Keyword::INSERT,
            Keyword::REFERENCES,
            Keyword::SELECT,
            Keyword::TEMP,
            Keyword::TEMPORARY,
            Keyword::TRIGGER,
            Keyword::TRUNCATE,
            Keyword::UPDATE,
            Keyword::USAGE,
        ])?;
        let columns = match keyword {
            Keyword::INSERT | Keyword::REFERENCES | Keyword::SELECT | Keyword::UPDATE => {
                let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                if columns.is_empty() { None } else { Some(columns) }
            }
            _ => None,
        };
        Ok(match keyword {
            Keyword::CONNECT => Action::Connect,
            Keyword::CREATE => Action::Create,
            Keyword::DELETE => Action::Delete,
            Keyword::EXECUTE => Action::Execute,
            Keyword::INSERT => Action::Insert { columns },
            Keyword::REFERENCES => Action::References { columns },
            Keyword::SELECT => Action::Select { columns },
            Keyword::TEMP | Keyword::TEMPORARY => Action::Temporary,
            Keyword::TRIGGER => Action::Trigger,
            Keyword::TRUNCATE => Action::Truncate,
            Keyword::UPDATE => Action::Update { columns },
            Keyword::USAGE => Action::Usage,
            _ => unreachable!(),
        })
    }

    // ========================================================================
    // Utility statements
    // ========================================================================

    pub fn parse_explain(&mut self, describe_alias: bool) -> Result<Statement, ParserError> {
        let analyze = self.parse_keyword(Keyword::ANALYZE);
        let verbose = self.parse_keyword(Keyword::VERBOSE);
        let format = if self.parse_keyword(Keyword::FORMAT) {
            Some(self.parse_analyze_format()?)
        } else {
            None
        };

        match self.maybe_parse(|parser| parser.parse_statement()) {
            Some(Statement::Explain { .. }) | Some(Statement::ExplainTable { .. }) => {
                parser_err!("Explain must be root of the plan".to_string())
            }
            Some(statement) => Ok(Statement::Explain {
                describe_alias,
                analyze,
                verbose,
                statement: Box::new(statement),
                format,
            }),
            None => Ok(Statement::ExplainTable {
                describe_alias,
                table_name: self.parse_object_name()?,
            }),
        }
    }

    fn parse_analyze_format(&mut self) -> Result<AnalyzeFormat, ParserError> {
        let next_token = self.next_token();
        match &next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::TEXT => Ok(AnalyzeFormat::Text),
                Keyword::GRAPHVIZ => Ok(AnalyzeFormat::Graphviz),
                Keyword::JSON => Ok(AnalyzeFormat::Json),
                _ => self.expected("fileformat", next_token),
            },
            _ => self.expected("fileformat", next_token),
        }
    }

    pub fn parse_cache_table(&mut self) -> Result<Statement, ParserError> {
        let table_flag = if !self.parse_keyword(Keyword::TABLE) {
            let flag = self.parse_object_name()?;
            self.expect_keyword(Keyword::TABLE)?;
            Some(flag)
        } else {
            None
        };
        let table_name = self.parse_object_name()?;

        let options = if self.parse_keyword(Keyword::OPTIONS) {
            self.expect_token(&Token::LParen)?;
            let options = self.parse_comma_separated(Parser::parse_sql_option)?;
            self.expect_token(&Token::RParen)?;
            options
        } else {
            vec![]
        };

        let mut has_as = false;
        let query = if self.peek_token() != Token::EOF && self.peek_token() != Token::SemiColon {
            has_as = self.parse_keyword(Keyword::AS);
            Some(Box::new(self.parse_query()?))
        } else {
            None
        };

        Ok(Statement::Cache {
            table_flag,
            table_name,
            has_as,
            options,
            query,
        })
    }

    pub fn parse_uncache_table(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let table_name = self.parse_object_name()?;
        Ok(Statement::UNCache {
            table_name,
            if_exists,
        })
    }

    pub fn parse_discard(&mut self) -> Result<Statement, ParserError> {
        let object_type = if self.parse_keyword(Keyword::ALL) {
            DiscardObject::All
        } else if self.parse_keyword(Keyword::PLANS) {
            DiscardObject::Plans
        } else if self.parse_keyword(Keyword::SEQUENCES) {
            DiscardObject::Sequences
        } else if self.parse_one_of_keywords(&[Keyword::TEMP, Keyword::TEMPORARY]).is_some() {
            DiscardObject::Temp
        } else {
            return self.expected(
                "ALL, PLANS, SEQUENCES, TEMP or TEMPORARY after DISCARD",
                self.peek_token(),
            );
        };
        Ok(Statement::Discard { object_type })
    }

    pub fn parse_close(&mut self) -> Result<Statement, ParserError> {
        let cursor = if self.parse_keyword(Keyword::ALL) {
            CloseCursor::All
        } else {
            let name = self.parse_identifier()?;
            CloseCursor::Specific { name }
        };
        Ok(Statement::Close { cursor })
    }

    pub fn parse_assert(&mut self) -> Result<Statement, ParserError> {
        let condition = self.parse_expr()?;
        let message = if self.parse_keyword(Keyword::AS) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Assert { condition, message })
    }

    pub fn parse_kill(&mut self) -> Result<Statement, ParserError> {
        let modifier_keyword =
            self.parse_one_of_keywords(&[Keyword::CONNECTION, Keyword::QUERY, Keyword::MUTATION]);
        let modifier = match modifier_keyword {
            Some(Keyword::CONNECTION) => Some(KillType::Connection),
            Some(Keyword::QUERY) => Some(KillType::Query),
            Some(Keyword::MUTATION) => Some(KillType::Mutation),
            _ => None,
        };
        let id = self.parse_literal_uint()?;
        Ok(Statement::Kill { modifier, id })
    }
}
