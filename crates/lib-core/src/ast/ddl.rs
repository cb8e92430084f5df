//! AST types for `CREATE`/`ALTER` object definitions: column definitions,
//! column and table constraints, and `ALTER` sub-operations.

use core::fmt;

use itertools::Itertools;

use super::{DataType, Expr, Ident, ObjectName, display_comma_separated};
use crate::lexer::Token;

/// An `ALTER TABLE` sub-operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterTableOperation {
    /// `ADD <table_constraint>`
    AddConstraint(TableConstraint),
    /// `ADD [COLUMN] [IF NOT EXISTS] <column_def>`
    AddColumn {
        if_not_exists: bool,
        column_def: ColumnDef,
    },
    /// `DROP CONSTRAINT [IF EXISTS] <name> [CASCADE]`
    DropConstraint {
        if_exists: bool,
        name: Ident,
        cascade: bool,
    },
    /// `DROP [COLUMN] [IF EXISTS] <name> [CASCADE]`
    DropColumn {
        column_name: Ident,
        if_exists: bool,
        cascade: bool,
    },
    /// `RENAME [COLUMN] <old> TO <new>`
    RenameColumn {
        old_column_name: Ident,
        new_column_name: Ident,
    },
    /// `RENAME TO <name>`
    RenameTable { table_name: ObjectName },
    /// `ALTER [COLUMN] <name> <operation>`
    AlterColumn {
        column_name: Ident,
        op: AlterColumnOperation,
    },
}

impl fmt::Display for AlterTableOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlterTableOperation::AddConstraint(c) => write!(f, "ADD {c}"),
            AlterTableOperation::AddColumn {
                if_not_exists,
                column_def,
            } => {
                write!(f, "ADD COLUMN")?;
                if *if_not_exists {
                    write!(f, " IF NOT EXISTS")?;
                }
                write!(f, " {column_def}")
            }
            AlterTableOperation::DropConstraint {
                if_exists,
                name,
                cascade,
            } => {
                write!(
                    f,
                    "DROP CONSTRAINT {}{}{}",
                    if *if_exists { "IF EXISTS " } else { "" },
                    name,
                    if *cascade { " CASCADE" } else { "" },
                )
            }
            AlterTableOperation::DropColumn {
                column_name,
                if_exists,
                cascade,
            } => write!(
                f,
                "DROP COLUMN {}{}{}",
                if *if_exists { "IF EXISTS " } else { "" },
                column_name,
                if *cascade { " CASCADE" } else { "" },
            ),
            AlterTableOperation::RenameColumn {
                old_column_name,
                new_column_name,
            } => write!(f, "RENAME COLUMN {old_column_name} TO {new_column_name}"),
            AlterTableOperation::RenameTable { table_name } => {
                write!(f, "RENAME TO {table_name}")
            }
            AlterTableOperation::AlterColumn { column_name, op } => {
                write!(f, "ALTER COLUMN {column_name} {op}")
            }
        }
    }
}

/// An `ALTER COLUMN` sub-operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterColumnOperation {
    SetNotNull,
    DropNotNull,
    SetDefault { value: Expr },
    DropDefault,
    SetDataType { data_type: DataType },
}

impl fmt::Display for AlterColumnOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlterColumnOperation::SetNotNull => f.write_str("SET NOT NULL"),
            AlterColumnOperation::DropNotNull => f.write_str("DROP NOT NULL"),
            AlterColumnOperation::SetDefault { value } => write!(f, "SET DEFAULT {value}"),
            AlterColumnOperation::DropDefault => f.write_str("DROP DEFAULT"),
            AlterColumnOperation::SetDataType { data_type } => {
                write!(f, "SET DATA TYPE {data_type}")
            }
        }
    }
}

/// An `ALTER INDEX` sub-operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterIndexOperation {
    RenameIndex { index_name: ObjectName },
}

impl fmt::Display for AlterIndexOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlterIndexOperation::RenameIndex { index_name } => {
                write!(f, "RENAME TO {index_name}")
            }
        }
    }
}

/// A table-level constraint inside `CREATE TABLE` or `ALTER TABLE ADD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    /// `[CONSTRAINT <name>] {UNIQUE | PRIMARY KEY} (<columns>)`
    Unique {
        name: Option<Ident>,
        columns: Vec<Ident>,
        is_primary: bool,
    },
    /// `[CONSTRAINT <name>] FOREIGN KEY (<columns>) REFERENCES <table>
    /// [(<columns>)] [ON DELETE <action>] [ON UPDATE <action>]`
    ForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    },
    /// `[CONSTRAINT <name>] CHECK (<expr>)`
    Check {
        name: Option<Ident>,
        expr: Box<Expr>,
    },
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableConstraint::Unique {
                name,
                columns,
                is_primary,
            } => write!(
                f,
                "{}{} ({})",
                display_constraint_name(name),
                if *is_primary { "PRIMARY KEY" } else { "UNIQUE" },
                display_comma_separated(columns),
            ),
            TableConstraint::ForeignKey {
                name,
                columns,
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            } => {
                write!(
                    f,
                    "{}FOREIGN KEY ({}) REFERENCES {}",
                    display_constraint_name(name),
                    display_comma_separated(columns),
                    foreign_table,
                )?;
                if !referred_columns.is_empty() {
                    write!(f, "({})", display_comma_separated(referred_columns))?;
                }
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE {action}")?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE {action}")?;
                }
                Ok(())
            }
            TableConstraint::Check { name, expr } => {
                write!(f, "{}CHECK ({expr})", display_constraint_name(name))
            }
        }
    }
}

fn display_constraint_name(name: &Option<Ident>) -> impl fmt::Display + '_ {
    struct ConstraintName<'a>(&'a Option<Ident>);
    impl fmt::Display for ConstraintName<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if let Some(name) = self.0 {
                write!(f, "CONSTRAINT {name} ")?;
            }
            Ok(())
        }
    }
    ConstraintName(name)
}

/// A column definition in `CREATE TABLE` / `ALTER TABLE ADD COLUMN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub collation: Option<ObjectName>,
    pub options: Vec<ColumnOptionDef>,
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        if let Some(collation) = &self.collation {
            write!(f, " COLLATE {collation}")?;
        }
        for option in &self.options {
            write!(f, " {option}")?;
        }
        Ok(())
    }
}

/// An optionally-named column option: `[CONSTRAINT <name>] <option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOptionDef {
    pub name: Option<Ident>,
    pub option: ColumnOption,
}

impl fmt::Display for ColumnOptionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", display_constraint_name(&self.name), self.option)
    }
}

/// A single column option following the data type in a column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOption {
    Null,
    NotNull,
    Default(Expr),
    Unique {
        is_primary: bool,
    },
    /// `REFERENCES <table> [(<columns>)] [ON DELETE <action>]
    /// [ON UPDATE <action>]`; each action may appear at most once.
    ForeignKey {
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    },
    Check(Expr),
    /// MySQL `CHARACTER SET <name>`
    CharacterSet(ObjectName),
    Comment(String),
    /// MySQL `ON UPDATE <expr>` for timestamp columns
    OnUpdate(Expr),
    /// Raw options the generic grammar carries through untouched, like
    /// `AUTO_INCREMENT` or SQLite's `AUTOINCREMENT`
    DialectSpecific(Vec<Token>),
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnOption::Null => f.write_str("NULL"),
            ColumnOption::NotNull => f.write_str("NOT NULL"),
            ColumnOption::Default(expr) => write!(f, "DEFAULT {expr}"),
            ColumnOption::Unique { is_primary } => {
                f.write_str(if *is_primary { "PRIMARY KEY" } else { "UNIQUE" })
            }
            ColumnOption::ForeignKey {
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            } => {
                write!(f, "REFERENCES {foreign_table}")?;
                if !referred_columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(referred_columns))?;
                }
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE {action}")?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE {action}")?;
                }
                Ok(())
            }
            ColumnOption::Check(expr) => write!(f, "CHECK ({expr})"),
            ColumnOption::CharacterSet(name) => write!(f, "CHARACTER SET {name}"),
            ColumnOption::Comment(comment) => {
                write!(
                    f,
                    "COMMENT '{}'",
                    crate::ast::value::escape_single_quote_string(comment)
                )
            }
            ColumnOption::OnUpdate(expr) => write!(f, "ON UPDATE {expr}"),
            ColumnOption::DialectSpecific(tokens) => {
                write!(f, "{}", tokens.iter().format(" "))
            }
        }
    }
}

/// `{RESTRICT | CASCADE | SET NULL | NO ACTION | SET DEFAULT}` in a foreign
/// key reference specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ReferentialAction {
    #[strum(serialize = "RESTRICT")]
    Restrict,
    #[strum(serialize = "CASCADE")]
    Cascade,
    #[strum(serialize = "SET NULL")]
    SetNull,
    #[strum(serialize = "NO ACTION")]
    NoAction,
    #[strum(serialize = "SET DEFAULT")]
    SetDefault,
}
