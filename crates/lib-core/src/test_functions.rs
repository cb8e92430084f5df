//! Helpers for writing parser tests, shared with the dialect crate's
//! integration suites. Everything here asserts the round-trip contract: a
//! parsed statement printed canonically must re-parse to an equal tree.

use core::fmt::Debug;

use crate::ast::*;
use crate::dialects::Dialect;
use crate::errors::ParserError;
use crate::parser::Parser;

/// A set of dialects expected to parse the given inputs identically.
pub struct TestedDialects {
    pub dialects: Vec<Box<dyn Dialect>>,
}

impl TestedDialects {
    pub fn one_dialect(dialect: impl Dialect + 'static) -> Self {
        Self {
            dialects: vec![Box::new(dialect)],
        }
    }

    /// Run `f` against every dialect, asserting that they all produce the
    /// same result, and return that result.
    pub fn run_parser_method<F, T>(&self, f: F) -> T
    where
        F: Fn(&dyn Dialect) -> T,
        T: Debug + PartialEq,
    {
        let mut results = self.dialects.iter().map(|dialect| {
            let result = f(&**dialect);
            (dialect, result)
        });
        let (first_dialect, first_result) = results.next().expect("at least one dialect");
        for (dialect, result) in results {
            assert_eq!(
                first_result, result,
                "{first_dialect:?} and {dialect:?} disagree"
            );
        }
        first_result
    }

    pub fn parse_sql_statements(&self, sql: &str) -> Result<Vec<Statement>, ParserError> {
        self.run_parser_method(|dialect| Parser::parse_sql(dialect, sql))
    }

    /// Ensures that `sql` parses as a single statement and returns it.
    /// If non-empty `canonical` SQL representation is provided, also asserts
    /// that the statement prints as `canonical` and re-parses to the same
    /// tree.
    pub fn one_statement_parses_to(&self, sql: &str, canonical: &str) -> Statement {
        let mut statements = self.parse_sql_statements(sql).expect(sql);
        assert_eq!(statements.len(), 1);

        let only_statement = statements.pop().expect("one statement");
        if !canonical.is_empty() {
            assert_eq!(canonical, only_statement.to_string());
            let reparsed = self
                .parse_sql_statements(canonical)
                .expect(canonical)
                .pop()
                .expect("one statement");
            assert_eq!(reparsed, only_statement, "canonical form is not parse-stable");
        }
        only_statement
    }

    /// Ensures that `sql` parses as a single statement and prints back to
    /// exactly the same string.
    pub fn verified_stmt(&self, sql: &str) -> Statement {
        self.one_statement_parses_to(sql, sql)
    }

    /// Ensures that `sql` parses as a single `Query` and prints back
    /// unchanged.
    pub fn verified_query(&self, sql: &str) -> Query {
        match self.verified_stmt(sql) {
            Statement::Query(query) => *query,
            _ => panic!("Expected Query"),
        }
    }

    /// Ensures that `sql` parses as a single `SELECT` and prints back
    /// unchanged.
    pub fn verified_only_select(&self, query: &str) -> Select {
        match *self.verified_query(query).body {
            SetExpr::Select(s) => *s,
            _ => panic!("Expected SetExpr::Select"),
        }
    }

    /// Ensures that `sql` parses as an expression and prints back unchanged.
    pub fn verified_expr(&self, sql: &str) -> Expr {
        let ast = self
            .run_parser_method(|dialect| crate::parse_expression(dialect, sql))
            .expect(sql);
        assert_eq!(sql, &ast.to_string(), "round-tripping sql was not successful");
        ast
    }
}

/// An unsuffixed numeric literal.
pub fn number(n: &str) -> Value {
    Value::Number(n.to_string(), false)
}

pub fn table_alias(name: impl Into<String>) -> Option<TableAlias> {
    Some(TableAlias {
        name: Ident::new(name),
        columns: vec![],
    })
}

pub fn table(name: impl Into<String>) -> TableFactor {
    TableFactor::Table {
        name: ObjectName(vec![Ident::new(name.into())]),
        alias: None,
        args: None,
        with_hints: vec![],
    }
}

pub fn join(relation: TableFactor) -> Join {
    Join {
        relation,
        join_operator: JoinOperator::Inner(JoinConstraint::Natural),
    }
}

pub fn expr_from_projection(item: &SelectItem) -> &Expr {
    match item {
        SelectItem::UnnamedExpr(expr) => expr,
        _ => panic!("Expected UnnamedExpr"),
    }
}
