//! The abstract syntax tree.
//!
//! Every node is a plain value; trees own their children and carry no
//! back-references. Each node's `Display` impl is the canonical printer: it
//! emits upper-case keywords, normalized whitespace, and the recorded quote
//! styles, such that re-parsing the output yields an equal tree.

use core::fmt;

use itertools::Itertools;

pub mod data_type;
pub mod ddl;
pub mod operator;
pub mod query;
pub mod value;

pub use self::data_type::{DataType, ExactNumberInfo, TimezoneInfo};
pub use self::ddl::{
    AlterColumnOperation, AlterIndexOperation, AlterTableOperation, ColumnDef, ColumnOption,
    ColumnOptionDef, ReferentialAction, TableConstraint,
};
pub use self::operator::{BinaryOperator, JsonOperator, UnaryOperator};
pub use self::query::*;
pub use self::value::{
    DateTimeField, DollarQuotedString, TrimWhereField, Value, escape_single_quote_string,
};

pub(crate) fn display_comma_separated<T: fmt::Display>(slice: &[T]) -> impl fmt::Display + '_ {
    slice.iter().format(", ")
}

pub(crate) fn display_separated<'a, T: fmt::Display>(
    slice: &'a [T],
    sep: &'static str,
) -> impl fmt::Display + 'a {
    slice.iter().format(sep)
}

/// An identifier, decomposed into its value or character data and the quote
/// style it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    /// The value of the identifier without quotes.
    pub value: String,
    /// The starting quote if the identifier is quoted.
    pub quote_style: Option<char>,
}

impl Ident {
    /// Creates a new identifier with no quotes.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Ident {
            value: value.into(),
            quote_style: None,
        }
    }

    /// Creates a new quoted identifier with the given quote. Panics if the
    /// given quote is not a valid starting quote.
    pub fn with_quote<S: Into<String>>(quote: char, value: S) -> Self {
        assert!(quote == '\'' || quote == '"' || quote == '`' || quote == '[');
        Ident {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::new(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(q) if q == '"' || q == '\'' || q == '`' => {
                write!(f, "{q}")?;
                for ch in self.value.chars() {
                    if ch == q {
                        write!(f, "{q}")?;
                    }
                    write!(f, "{ch}")?;
                }
                write!(f, "{q}")
            }
            Some('[') => write!(f, "[{}]", self.value),
            None => f.write_str(&self.value),
            _ => panic!("unexpected quote style"),
        }
    }
}

/// A possibly-qualified name of a table, view, custom type, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(pub Vec<Ident>);

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_separated(&self.0, "."))
    }
}

/// An SQL expression of any type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Identifier e.g. table name or column name
    Identifier(Ident),
    /// Multi-part identifier, e.g. `table_alias.column` or `schema.table.col`
    CompoundIdentifier(Vec<Ident>),
    /// JSON access (postgres)  e.g. `data->'tags'`
    JsonAccess {
        left: Box<Expr>,
        operator: JsonOperator,
        right: Box<Expr>,
    },
    /// Access a field of a composite-typed expression, e.g. `(SELECT foo).bar`
    CompositeAccess { expr: Box<Expr>, key: Ident },
    /// `IS FALSE` operator
    IsFalse(Box<Expr>),
    /// `IS NOT FALSE` operator
    IsNotFalse(Box<Expr>),
    /// `IS TRUE` operator
    IsTrue(Box<Expr>),
    /// `IS NOT TRUE` operator
    IsNotTrue(Box<Expr>),
    /// `IS NULL` operator
    IsNull(Box<Expr>),
    /// `IS NOT NULL` operator
    IsNotNull(Box<Expr>),
    /// `IS UNKNOWN` operator
    IsUnknown(Box<Expr>),
    /// `IS NOT UNKNOWN` operator
    IsNotUnknown(Box<Expr>),
    /// `IS DISTINCT FROM` operator
    IsDistinctFrom(Box<Expr>, Box<Expr>),
    /// `IS NOT DISTINCT FROM` operator
    IsNotDistinctFrom(Box<Expr>, Box<Expr>),
    /// `[ NOT ] IN (val1, val2, ...)`
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    /// `[ NOT ] IN (SELECT ...)`
    InSubquery {
        expr: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },
    /// `[ NOT ] IN UNNEST(array_expression)`
    InUnnest {
        expr: Box<Expr>,
        array_expr: Box<Expr>,
        negated: bool,
    },
    /// `<expr> [ NOT ] BETWEEN <low> AND <high>`
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    /// Binary operation e.g. `1 + 1` or `foo > bar`
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    /// `[NOT] LIKE <pattern> [ESCAPE <escape_character>]`
    Like {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<char>,
    },
    /// `ILIKE` (case-insensitive `LIKE`)
    ILike {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<char>,
    },
    /// `[NOT] SIMILAR TO <pattern> [ESCAPE <escape_character>]`
    SimilarTo {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<char>,
    },
    /// `ANY` operation, e.g. `foo > ANY(bar)`
    AnyOp(Box<Expr>),
    /// `ALL` operation, e.g. `foo > ALL(bar)`
    AllOp(Box<Expr>),
    /// Unary operation e.g. `NOT foo`
    UnaryOp { op: UnaryOperator, expr: Box<Expr> },
    /// `CAST(<expr> AS <data_type>)`
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    /// `TRY_CAST`: like `CAST`, but returns NULL on failure
    TryCast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    /// `<timestamp> AT TIME ZONE <time zone>`
    AtTimeZone {
        timestamp: Box<Expr>,
        time_zone: String,
    },
    /// `EXTRACT(DateTimeField FROM <expr>)`
    Extract {
        field: DateTimeField,
        expr: Box<Expr>,
    },
    /// `CEIL(<expr> [TO DateTimeField])`
    Ceil {
        expr: Box<Expr>,
        field: DateTimeField,
    },
    /// `FLOOR(<expr> [TO DateTimeField])`
    Floor {
        expr: Box<Expr>,
        field: DateTimeField,
    },
    /// `POSITION(<expr> IN <expr>)`
    Position { expr: Box<Expr>, r#in: Box<Expr> },
    /// `SUBSTRING(<expr> [FROM <expr>] [FOR <expr>])`; `special` records the
    /// comma-separated calling convention so it round-trips under dialects
    /// that reject the `FROM`/`FOR` form.
    Substring {
        expr: Box<Expr>,
        substring_from: Option<Box<Expr>>,
        substring_for: Option<Box<Expr>>,
        special: bool,
    },
    /// `TRIM([BOTH | LEADING | TRAILING] [<expr>] FROM <expr>)`
    Trim {
        expr: Box<Expr>,
        trim_where: Option<TrimWhereField>,
        trim_what: Option<Box<Expr>>,
    },
    /// `OVERLAY(<expr> PLACING <expr> FROM <expr> [FOR <expr>])`
    Overlay {
        expr: Box<Expr>,
        overlay_what: Box<Expr>,
        overlay_from: Box<Expr>,
        overlay_for: Option<Box<Expr>>,
    },
    /// `<expr> COLLATE <collation>`
    Collate {
        expr: Box<Expr>,
        collation: ObjectName,
    },
    /// A parenthesized expression such as `(foo > bar)`
    Nested(Box<Expr>),
    /// A literal value, such as string, number or NULL
    Value(Value),
    /// A constant of form `<data_type> 'value'`, e.g. `DATE '2020-01-01'`
    TypedString { data_type: DataType, value: String },
    /// A function call
    Function(Function),
    /// `CASE [<operand>] WHEN <condition> THEN <result> ... [ELSE <result>] END`
    Case {
        operand: Option<Box<Expr>>,
        conditions: Vec<Expr>,
        results: Vec<Expr>,
        else_result: Option<Box<Expr>>,
    },
    /// `[NOT] EXISTS(<subquery>)`
    Exists {
        subquery: Box<Query>,
        negated: bool,
    },
    /// A parenthesized subquery `(SELECT ...)` used in an expression
    Subquery(Box<Query>),
    /// `LISTAGG(...)`
    ListAgg(ListAgg),
    /// `ARRAY_AGG(...)`
    ArrayAgg(ArrayAgg),
    /// `GROUPING SETS` in a GROUP BY
    GroupingSets(Vec<Vec<Expr>>),
    /// `CUBE` in a GROUP BY
    Cube(Vec<Vec<Expr>>),
    /// `ROLLUP` in a GROUP BY
    Rollup(Vec<Vec<Expr>>),
    /// A row value constructor: `(1, 2, 3)`
    Tuple(Vec<Expr>),
    /// An array or map subscript: `arr[1]`, also chained `m['a']['b']`
    ArrayIndex { obj: Box<Expr>, indexes: Vec<Expr> },
    /// An array literal: `ARRAY[1, 2]` or `[1, 2]`
    Array(Array),
    /// `INTERVAL <value> [<leading_field> [(<leading_precision>)]
    /// [TO <last_field> [(<fractional_seconds_precision>)]]]`
    Interval {
        value: Box<Expr>,
        leading_field: Option<DateTimeField>,
        leading_precision: Option<u64>,
        last_field: Option<DateTimeField>,
        /// The seconds precision can be specified in SQL source as
        /// `INTERVAL '..' SECOND(_, x)` or as `.. TO SECOND(x)`.
        fractional_seconds_precision: Option<u64>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{ident}"),
            Expr::CompoundIdentifier(parts) => write!(f, "{}", display_separated(parts, ".")),
            Expr::JsonAccess {
                left,
                operator,
                right,
            } => write!(f, "{left} {operator} {right}"),
            Expr::CompositeAccess { expr, key } => write!(f, "{expr}.{key}"),
            Expr::IsFalse(expr) => write!(f, "{expr} IS FALSE"),
            Expr::IsNotFalse(expr) => write!(f, "{expr} IS NOT FALSE"),
            Expr::IsTrue(expr) => write!(f, "{expr} IS TRUE"),
            Expr::IsNotTrue(expr) => write!(f, "{expr} IS NOT TRUE"),
            Expr::IsNull(expr) => write!(f, "{expr} IS NULL"),
            Expr::IsNotNull(expr) => write!(f, "{expr} IS NOT NULL"),
            Expr::IsUnknown(expr) => write!(f, "{expr} IS UNKNOWN"),
            Expr::IsNotUnknown(expr) => write!(f, "{expr} IS NOT UNKNOWN"),
            Expr::IsDistinctFrom(a, b) => write!(f, "{a} IS DISTINCT FROM {b}"),
            Expr::IsNotDistinctFrom(a, b) => write!(f, "{a} IS NOT DISTINCT FROM {b}"),
            Expr::InList {
                expr,
                list,
                negated,
            } => write!(
                f,
                "{} {}IN ({})",
                expr,
                if *negated { "NOT " } else { "" },
                display_comma_separated(list)
            ),
            Expr::InSubquery {
                expr,
                subquery,
                negated,
            } => write!(
                f,
                "{} {}IN ({})",
                expr,
                if *negated { "NOT " } else { "" },
                subquery
            ),
            Expr::InUnnest {
                expr,
                array_expr,
                negated,
            } => write!(
                f,
                "{} {}IN UNNEST({})",
                expr,
                if *negated { "NOT " } else { "" },
                array_expr
            ),
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => write!(
                f,
                "{} {}BETWEEN {} AND {}",
                expr,
                if *negated { "NOT " } else { "" },
                low,
                high
            ),
            Expr::BinaryOp { left, op, right } => write!(f, "{left} {op} {right}"),
            Expr::Like {
                negated,
                expr,
                pattern,
                escape_char,
            } => match escape_char {
                Some(ch) => write!(
                    f,
                    "{} {}LIKE {} ESCAPE '{}'",
                    expr,
                    if *negated { "NOT " } else { "" },
                    pattern,
                    ch
                ),
                _ => write!(
                    f,
                    "{} {}LIKE {}",
                    expr,
                    if *negated { "NOT " } else { "" },
                    pattern
                ),
            },
            Expr::ILike {
                negated,
                expr,
                pattern,
                escape_char,
            } => match escape_char {
                Some(ch) => write!(
                    f,
                    "{} {}ILIKE {} ESCAPE '{}'",
                    expr,
                    if *negated { "NOT " } else { "" },
                    pattern,
                    ch
                ),
                _ => write!(
                    f,
                    "{} {}ILIKE {}",
                    expr,
                    if *negated { "NOT " } else { "" },
                    pattern
                ),
            },
            Expr::SimilarTo {
                negated,
                expr,
                pattern,
                escape_char,
            } => match escape_char {
                Some(ch) => write!(
                    f,
                    "{} {}SIMILAR TO {} ESCAPE '{}'",
                    expr,
                    if *negated { "NOT " } else { "" },
                    pattern,
                    ch
                ),
                _ => write!(
                    f,
                    "{} {}SIMILAR TO {}",
                    expr,
                    if *negated { "NOT " } else { "" },
                    pattern
                ),
            },
            Expr::AnyOp(expr) => write!(f, "ANY({expr})"),
            Expr::AllOp(expr) => write!(f, "ALL({expr})"),
            Expr::UnaryOp { op, expr } => {
                if op == &UnaryOperator::PGPostfixFactorial {
                    write!(f, "{expr}{op}")
                } else if op == &UnaryOperator::Not {
                    write!(f, "NOT {expr}")
                } else {
                    write!(f, "{op}{expr}")
                }
            }
            Expr::Cast { expr, data_type } => write!(f, "CAST({expr} AS {data_type})"),
            Expr::TryCast { expr, data_type } => write!(f, "TRY_CAST({expr} AS {data_type})"),
            Expr::AtTimeZone {
                timestamp,
                time_zone,
            } => write!(f, "{timestamp} AT TIME ZONE '{time_zone}'"),
            Expr::Extract { field, expr } => write!(f, "EXTRACT({field} FROM {expr})"),
            Expr::Ceil { expr, field } => {
                if field == &DateTimeField::NoDateTime {
                    write!(f, "CEIL({expr})")
                } else {
                    write!(f, "CEIL({expr} TO {field})")
                }
            }
            Expr::Floor { expr, field } => {
                if field == &DateTimeField::NoDateTime {
                    write!(f, "FLOOR({expr})")
                } else {
                    write!(f, "FLOOR({expr} TO {field})")
                }
            }
            Expr::Position { expr, r#in } => write!(f, "POSITION({} IN {})", expr, r#in),
            Expr::Substring {
                expr,
                substring_from,
                substring_for,
                special,
            } => {
                write!(f, "SUBSTRING({expr}")?;
                if let Some(from_part) = substring_from {
                    if *special {
                        write!(f, ", {from_part}")?;
                    } else {
                        write!(f, " FROM {from_part}")?;
                    }
                }
                if let Some(for_part) = substring_for {
                    if *special {
                        write!(f, ", {for_part}")?;
                    } else {
                        write!(f, " FOR {for_part}")?;
                    }
                }
                f.write_str(")")
            }
            Expr::Trim {
                expr,
                trim_where,
                trim_what,
            } => {
                f.write_str("TRIM(")?;
                if let Some(ident) = trim_where {
                    write!(f, "{ident} ")?;
                }
                if let Some(trim_char) = trim_what {
                    write!(f, "{trim_char} FROM {expr}")?;
                } else {
                    write!(f, "{expr}")?;
                }
                f.write_str(")")
            }
            Expr::Overlay {
                expr,
                overlay_what,
                overlay_from,
                overlay_for,
            } => {
                write!(f, "OVERLAY({expr} PLACING {overlay_what} FROM {overlay_from}")?;
                if let Some(for_part) = overlay_for {
                    write!(f, " FOR {for_part}")?;
                }
                f.write_str(")")
            }
            Expr::Collate { expr, collation } => write!(f, "{expr} COLLATE {collation}"),
            Expr::Nested(ast) => write!(f, "({ast})"),
            Expr::Value(v) => write!(f, "{v}"),
            Expr::TypedString { data_type, value } => {
                write!(f, "{data_type} '{}'", escape_single_quote_string(value))
            }
            Expr::Function(fun) => write!(f, "{fun}"),
            Expr::Case {
                operand,
                conditions,
                results,
                else_result,
            } => {
                f.write_str("CASE")?;
                if let Some(operand) = operand {
                    write!(f, " {operand}")?;
                }
                for (c, r) in conditions.iter().zip(results) {
                    write!(f, " WHEN {c} THEN {r}")?;
                }
                if let Some(else_result) = else_result {
                    write!(f, " ELSE {else_result}")?;
                }
                f.write_str(" END")
            }
            Expr::Exists { subquery, negated } => write!(
                f,
                "{}EXISTS ({})",
                if *negated { "NOT " } else { "" },
                subquery
            ),
            Expr::Subquery(s) => write!(f, "({s})"),
            Expr::ListAgg(listagg) => write!(f, "{listagg}"),
            Expr::ArrayAgg(arrayagg) => write!(f, "{arrayagg}"),
            Expr::GroupingSets(sets) => {
                f.write_str("GROUPING SETS (")?;
                let mut sep = "";
                for set in sets {
                    f.write_str(sep)?;
                    sep = ", ";
                    write!(f, "({})", display_comma_separated(set))?;
                }
                f.write_str(")")
            }
            Expr::Cube(sets) => {
                f.write_str("CUBE (")?;
                let mut sep = "";
                for set in sets {
                    f.write_str(sep)?;
                    sep = ", ";
                    if set.len() == 1 {
                        write!(f, "{}", set[0])?;
                    } else {
                        write!(f, "({})", display_comma_separated(set))?;
                    }
                }
                f.write_str(")")
            }
            Expr::Rollup(sets) => {
                f.write_str("ROLLUP (")?;
                let mut sep = "";
                for set in sets {
                    f.write_str(sep)?;
                    sep = ", ";
                    if set.len() == 1 {
                        write!(f, "{}", set[0])?;
                    } else {
                        write!(f, "({})", display_comma_separated(set))?;
                    }
                }
                f.write_str(")")
            }
            Expr::Tuple(exprs) => write!(f, "({})", display_comma_separated(exprs)),
            Expr::ArrayIndex { obj, indexes } => {
                write!(f, "{obj}")?;
                for i in indexes {
                    write!(f, "[{i}]")?;
                }
                Ok(())
            }
            Expr::Array(set) => write!(f, "{set}"),
            Expr::Interval {
                value,
                leading_field: Some(DateTimeField::Second),
                leading_precision: Some(leading_precision),
                last_field,
                fractional_seconds_precision: Some(fractional_seconds_precision),
            } => {
                // When the leading field is SECOND, the parser guarantees
                // that the last field is None.
                assert!(last_field.is_none());
                write!(
                    f,
                    "INTERVAL {value} SECOND ({leading_precision}, {fractional_seconds_precision})"
                )
            }
            Expr::Interval {
                value,
                leading_field,
                leading_precision,
                last_field,
                fractional_seconds_precision,
            } => {
                write!(f, "INTERVAL {value}")?;
                if let Some(leading_field) = leading_field {
                    write!(f, " {leading_field}")?;
                }
                if let Some(leading_precision) = leading_precision {
                    write!(f, " ({leading_precision})")?;
                }
                if let Some(last_field) = last_field {
                    write!(f, " TO {last_field}")?;
                }
                if let Some(fractional_seconds_precision) = fractional_seconds_precision {
                    write!(f, " ({fractional_seconds_precision})")?;
                }
                Ok(())
            }
        }
    }
}

/// A function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: ObjectName,
    pub args: Vec<FunctionArg>,
    /// `OVER (<window spec>)` or `OVER <named window>`
    pub over: Option<WindowType>,
    /// Aggregate `DISTINCT`, e.g. `COUNT(DISTINCT x)`
    pub distinct: bool,
    /// Some functions must be called without trailing parentheses, for
    /// example Postgres does it for `CURRENT_CATALOG`
    pub special: bool,
    /// `FILTER (WHERE <expr>)`
    pub filter: Option<Box<Expr>>,
    /// `WITHIN GROUP (ORDER BY ...)`
    pub within_group: Vec<OrderByExpr>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.special {
            return write!(f, "{}", self.name);
        }
        write!(
            f,
            "{}({}{})",
            self.name,
            if self.distinct { "DISTINCT " } else { "" },
            display_comma_separated(&self.args),
        )?;
        if let Some(filter) = &self.filter {
            write!(f, " FILTER (WHERE {filter})")?;
        }
        if !self.within_group.is_empty() {
            write!(
                f,
                " WITHIN GROUP (ORDER BY {})",
                display_comma_separated(&self.within_group)
            )?;
        }
        if let Some(o) = &self.over {
            write!(f, " OVER {o}")?;
        }
        Ok(())
    }
}

/// The window attached to a function call with `OVER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowType {
    WindowSpec(WindowSpec),
    NamedWindow(Ident),
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowType::WindowSpec(spec) => write!(f, "({spec})"),
            WindowType::NamedWindow(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionArg {
    Named { name: Ident, arg: FunctionArgExpr },
    Unnamed(FunctionArgExpr),
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArg::Named { name, arg } => write!(f, "{name} => {arg}"),
            FunctionArg::Unnamed(unnamed_arg) => write!(f, "{unnamed_arg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionArgExpr {
    Expr(Expr),
    /// Qualified wildcard, e.g. `alias.*` in `COUNT(alias.*)`
    QualifiedWildcard(ObjectName),
    /// An unqualified `*`
    Wildcard,
}

impl fmt::Display for FunctionArgExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArgExpr::Expr(expr) => write!(f, "{expr}"),
            FunctionArgExpr::QualifiedWildcard(prefix) => write!(f, "{prefix}.*"),
            FunctionArgExpr::Wildcard => f.write_str("*"),
        }
    }
}

/// `LISTAGG([DISTINCT] <expr> [, <separator>] [ON OVERFLOW <on_overflow>])
/// [WITHIN GROUP (ORDER BY ...)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAgg {
    pub distinct: bool,
    pub expr: Box<Expr>,
    pub separator: Option<Box<Expr>>,
    pub on_overflow: Option<ListAggOnOverflow>,
    pub within_group: Vec<OrderByExpr>,
}

impl fmt::Display for ListAgg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LISTAGG({}{}",
            if self.distinct { "DISTINCT " } else { "" },
            self.expr
        )?;
        if let Some(separator) = &self.separator {
            write!(f, ", {separator}")?;
        }
        if let Some(on_overflow) = &self.on_overflow {
            write!(f, "{on_overflow}")?;
        }
        f.write_str(")")?;
        if !self.within_group.is_empty() {
            write!(
                f,
                " WITHIN GROUP (ORDER BY {})",
                display_comma_separated(&self.within_group)
            )?;
        }
        Ok(())
    }
}

/// The `ON OVERFLOW` clause of a LISTAGG invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAggOnOverflow {
    Error,
    Truncate {
        filler: Option<Box<Expr>>,
        with_count: bool,
    },
}

impl fmt::Display for ListAggOnOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ON OVERFLOW")?;
        match self {
            ListAggOnOverflow::Error => f.write_str(" ERROR"),
            ListAggOnOverflow::Truncate { filler, with_count } => {
                f.write_str(" TRUNCATE")?;
                if let Some(filler) = filler {
                    write!(f, " {filler}")?;
                }
                f.write_str(if *with_count { " WITH" } else { " WITHOUT" })?;
                f.write_str(" COUNT")
            }
        }
    }
}

/// `ARRAY_AGG([DISTINCT] <expr> [ORDER BY ...] [LIMIT <n>])` or the
/// `WITHIN GROUP (ORDER BY ...)` spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayAgg {
    pub distinct: bool,
    pub expr: Box<Expr>,
    pub order_by: Option<Vec<OrderByExpr>>,
    pub limit: Option<Box<Expr>>,
    /// Whether the `ORDER BY` was written inside `WITHIN GROUP (..)`
    pub within_group: bool,
}

impl fmt::Display for ArrayAgg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ARRAY_AGG({}{}",
            if self.distinct { "DISTINCT " } else { "" },
            self.expr
        )?;
        if !self.within_group {
            if let Some(order_by) = &self.order_by {
                write!(f, " ORDER BY {}", display_comma_separated(order_by))?;
            }
            if let Some(limit) = &self.limit {
                write!(f, " LIMIT {limit}")?;
            }
        }
        f.write_str(")")?;
        if self.within_group {
            if let Some(order_by) = &self.order_by {
                write!(
                    f,
                    " WITHIN GROUP (ORDER BY {})",
                    display_comma_separated(order_by)
                )?;
            }
        }
        Ok(())
    }
}

/// An array literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array {
    pub elem: Vec<Expr>,
    /// `true` for `ARRAY[..]`, `false` for `[..]`
    pub named: bool,
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]",
            if self.named { "ARRAY" } else { "" },
            display_comma_separated(&self.elem)
        )
    }
}

/// A top-level statement (SELECT, INSERT, CREATE, etc.).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::large_enum_variant)]
pub enum Statement {
    /// A plain query, or `VALUES`, or `TABLE <name>`
    Query(Box<Query>),
    Insert {
        /// SQLite `INSERT OR {REPLACE | ROLLBACK | ...}`
        or: Option<SqliteOnConflict>,
        /// Whether the `INTO` noise word was written
        into: bool,
        table_name: ObjectName,
        columns: Vec<Ident>,
        /// Hive `INSERT OVERWRITE [TABLE]`
        overwrite: bool,
        table: bool,
        /// The inserted rows; `None` for `DEFAULT VALUES`
        source: Option<Box<Query>>,
        /// Hive `PARTITION (...)`
        partitioned: Option<Vec<Expr>>,
        /// Hive columns listed after `PARTITION (...)`
        after_columns: Vec<Ident>,
        /// `ON DUPLICATE KEY UPDATE ...` / `ON CONFLICT ...`
        on: Option<OnInsert>,
        returning: Option<Vec<SelectItem>>,
    },
    Update {
        table: TableWithJoins,
        assignments: Vec<Assignment>,
        from: Option<TableWithJoins>,
        selection: Option<Expr>,
        returning: Option<Vec<SelectItem>>,
    },
    Delete {
        /// MySQL multi-table syntax: the tables named between `DELETE` and
        /// `FROM`
        tables: Vec<ObjectName>,
        from: Vec<TableWithJoins>,
        using: Option<Vec<TableWithJoins>>,
        selection: Option<Expr>,
        returning: Option<Vec<SelectItem>>,
    },
    CreateTable {
        or_replace: bool,
        temporary: bool,
        external: bool,
        if_not_exists: bool,
        name: ObjectName,
        columns: Vec<ColumnDef>,
        constraints: Vec<TableConstraint>,
        /// ClickHouse `ON CLUSTER '<cluster>'`
        on_cluster: Option<String>,
        /// Hive `STORED AS <format>`
        file_format: Option<FileFormat>,
        /// Hive `LOCATION '<path>'`
        location: Option<String>,
        with_options: Vec<SqlOption>,
        /// MySQL `ENGINE = <name>`
        engine: Option<String>,
        /// MySQL `DEFAULT CHARSET = <name>`
        default_charset: Option<String>,
        /// MySQL `COLLATE = <name>`
        collation: Option<String>,
        /// Snowflake `CLONE <source>`
        clone: Option<ObjectName>,
        query: Option<Box<Query>>,
    },
    CreateView {
        or_replace: bool,
        materialized: bool,
        name: ObjectName,
        columns: Vec<Ident>,
        query: Box<Query>,
    },
    CreateIndex {
        name: ObjectName,
        table_name: ObjectName,
        using: Option<Ident>,
        columns: Vec<OrderByExpr>,
        unique: bool,
        if_not_exists: bool,
    },
    CreateSchema {
        schema_name: SchemaName,
        if_not_exists: bool,
    },
    CreateDatabase {
        db_name: ObjectName,
        if_not_exists: bool,
        location: Option<String>,
        managed_location: Option<String>,
    },
    CreateRole {
        names: Vec<ObjectName>,
        if_not_exists: bool,
    },
    /// `CREATE TYPE <name> AS (<attribute> <type>, ..)`
    CreateType {
        name: ObjectName,
        attributes: Vec<ColumnDef>,
    },
    AlterTable {
        name: ObjectName,
        operation: AlterTableOperation,
    },
    AlterIndex {
        name: ObjectName,
        operation: AlterIndexOperation,
    },
    AlterView {
        name: ObjectName,
        columns: Vec<Ident>,
        query: Box<Query>,
    },
    Drop {
        object_type: ObjectType,
        if_exists: bool,
        names: Vec<ObjectName>,
        cascade: bool,
        restrict: bool,
        /// Hive-specific `PURGE`
        purge: bool,
    },
    Truncate {
        table_name: ObjectName,
        partitions: Option<Vec<Expr>>,
    },
    /// Hive `ANALYZE TABLE`
    Analyze {
        table_name: ObjectName,
        partitions: Option<Vec<Expr>>,
        for_columns: bool,
        columns: Vec<Ident>,
        cache_metadata: bool,
        noscan: bool,
        compute_statistics: bool,
    },
    StartTransaction {
        modes: Vec<TransactionMode>,
    },
    SetTransaction {
        modes: Vec<TransactionMode>,
    },
    Commit {
        chain: bool,
    },
    Rollback {
        chain: bool,
    },
    SetVariable {
        local: bool,
        hivevar: bool,
        variable: ObjectName,
        value: Vec<Expr>,
    },
    SetTimeZone {
        local: bool,
        value: Expr,
    },
    /// MySQL `SET NAMES <charset> [COLLATE <collation>]`
    SetNames {
        charset_name: String,
        collation_name: Option<String>,
    },
    SetNamesDefault {},
    ShowVariable {
        variable: Vec<Ident>,
    },
    ShowVariables {
        filter: Option<ShowStatementFilter>,
    },
    ShowCreate {
        obj_type: ShowCreateObject,
        obj_name: ObjectName,
    },
    ShowColumns {
        extended: bool,
        full: bool,
        table_name: ObjectName,
        filter: Option<ShowStatementFilter>,
    },
    ShowTables {
        extended: bool,
        full: bool,
        db_name: Option<Ident>,
        filter: Option<ShowStatementFilter>,
    },
    ShowCollation {
        filter: Option<ShowStatementFilter>,
    },
    ShowFunctions {
        filter: Option<ShowStatementFilter>,
    },
    Use {
        db_name: Ident,
    },
    Grant {
        privileges: Privileges,
        objects: GrantObjects,
        grantees: Vec<Ident>,
        with_grant_option: bool,
        granted_by: Option<Ident>,
    },
    Revoke {
        privileges: Privileges,
        objects: GrantObjects,
        grantees: Vec<Ident>,
        granted_by: Option<Ident>,
        /// `Some(true)` CASCADE, `Some(false)` RESTRICT
        cascade: Option<bool>,
    },
    /// `EXPLAIN <statement>` (must be the root of the plan)
    Explain {
        /// Spelled `DESCRIBE` rather than `EXPLAIN`
        describe_alias: bool,
        analyze: bool,
        verbose: bool,
        statement: Box<Statement>,
        format: Option<AnalyzeFormat>,
    },
    /// `EXPLAIN <table_name>` / `DESCRIBE <table_name>`
    ExplainTable {
        describe_alias: bool,
        table_name: ObjectName,
    },
    Merge {
        into: bool,
        table: TableFactor,
        source: TableFactor,
        on: Box<Expr>,
        clauses: Vec<MergeClause>,
    },
    /// Spark `CACHE [<flag>] TABLE <name> [OPTIONS(...)] [[AS] <query>]`
    Cache {
        table_flag: Option<ObjectName>,
        table_name: ObjectName,
        has_as: bool,
        options: Vec<SqlOption>,
        query: Option<Box<Query>>,
    },
    /// Spark `UNCACHE TABLE [IF EXISTS] <name>`
    UNCache {
        table_name: ObjectName,
        if_exists: bool,
    },
    Discard {
        object_type: DiscardObject,
    },
    Close {
        cursor: CloseCursor,
    },
    /// BigQuery `ASSERT <condition> [AS <message>]`
    Assert {
        condition: Expr,
        message: Option<Expr>,
    },
    Kill {
        modifier: Option<KillType>,
        id: u64,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Query(s) => write!(f, "{s}"),
            Statement::Insert {
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
            } => {
                f.write_str("INSERT")?;
                if let Some(action) = or {
                    write!(f, " OR {action}")?;
                }
                if *overwrite {
                    f.write_str(" OVERWRITE")?;
                }
                if *into {
                    f.write_str(" INTO")?;
                }
                if *table {
                    f.write_str(" TABLE")?;
                }
                write!(f, " {table_name}")?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
                if let Some(partitioned) = partitioned {
                    if !partitioned.is_empty() {
                        write!(f, " PARTITION ({})", display_comma_separated(partitioned))?;
                    }
                }
                if !after_columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(after_columns))?;
                }
                match source {
                    Some(source) => write!(f, " {source}")?,
                    None => f.write_str(" DEFAULT VALUES")?,
                }
                if let Some(on) = on {
                    write!(f, "{on}")?;
                }
                if let Some(returning) = returning {
                    write!(f, " RETURNING {}", display_comma_separated(returning))?;
                }
                Ok(())
            }
            Statement::Update {
                table,
                assignments,
                from,
                selection,
                returning,
            } => {
                write!(f, "UPDATE {table}")?;
                if !assignments.is_empty() {
                    write!(f, " SET {}", display_comma_separated(assignments))?;
                }
                if let Some(from) = from {
                    write!(f, " FROM {from}")?;
                }
                if let Some(selection) = selection {
                    write!(f, " WHERE {selection}")?;
                }
                if let Some(returning) = returning {
                    write!(f, " RETURNING {}", display_comma_separated(returning))?;
                }
                Ok(())
            }
            Statement::Delete {
                tables,
                from,
                using,
                selection,
                returning,
            } => {
                f.write_str("DELETE ")?;
                if !tables.is_empty() {
                    write!(f, "{} ", display_comma_separated(tables))?;
                }
                write!(f, "FROM {}", display_comma_separated(from))?;
                if let Some(using) = using {
                    write!(f, " USING {}", display_comma_separated(using))?;
                }
                if let Some(selection) = selection {
                    write!(f, " WHERE {selection}")?;
                }
                if let Some(returning) = returning {
                    write!(f, " RETURNING {}", display_comma_separated(returning))?;
                }
                Ok(())
            }
            Statement::CreateTable {
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
            } => {
                write!(
                    f,
                    "CREATE {or_replace}{external}{temporary}TABLE {if_not_exists}{name}",
                    or_replace = if *or_replace { "OR REPLACE " } else { "" },
                    external = if *external { "EXTERNAL " } else { "" },
                    temporary = if *temporary { "TEMPORARY " } else { "" },
                    if_not_exists = if *if_not_exists { "IF NOT EXISTS " } else { "" },
                )?;
                if let Some(on_cluster) = on_cluster {
                    write!(f, " ON CLUSTER '{on_cluster}'")?;
                }
                if !columns.is_empty() || !constraints.is_empty() {
                    write!(f, " ({}", display_comma_separated(columns))?;
                    if !columns.is_empty() && !constraints.is_empty() {
                        f.write_str(", ")?;
                    }
                    write!(f, "{})", display_comma_separated(constraints))?;
                }
                if let Some(file_format) = file_format {
                    write!(f, " STORED AS {file_format}")?;
                }
                if let Some(location) = location {
                    write!(f, " LOCATION '{location}'")?;
                }
                if !with_options.is_empty() {
                    write!(f, " WITH ({})", display_comma_separated(with_options))?;
                }
                if let Some(engine) = engine {
                    write!(f, " ENGINE = {engine}")?;
                }
                if let Some(default_charset) = default_charset {
                    write!(f, " DEFAULT CHARSET = {default_charset}")?;
                }
                if let Some(collation) = collation {
                    write!(f, " COLLATE = {collation}")?;
                }
                if let Some(clone) = clone {
                    write!(f, " CLONE {clone}")?;
                }
                if let Some(query) = query {
                    write!(f, " AS {query}")?;
                }
                Ok(())
            }
            Statement::CreateView {
                or_replace,
                materialized,
                name,
                columns,
                query,
            } => {
                write!(
                    f,
                    "CREATE {or_replace}{materialized}VIEW {name}",
                    or_replace = if *or_replace { "OR REPLACE " } else { "" },
                    materialized = if *materialized { "MATERIALIZED " } else { "" },
                )?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
                write!(f, " AS {query}")
            }
            Statement::CreateIndex {
                name,
                table_name,
                using,
                columns,
                unique,
                if_not_exists,
            } => {
                write!(
                    f,
                    "CREATE {unique}INDEX {if_not_exists}{name} ON {table_name}",
                    unique = if *unique { "UNIQUE " } else { "" },
                    if_not_exists = if *if_not_exists { "IF NOT EXISTS " } else { "" },
                )?;
                if let Some(using) = using {
                    write!(f, " USING {using}")?;
                }
                write!(f, "({})", display_comma_separated(columns))
            }
            Statement::CreateSchema {
                schema_name,
                if_not_exists,
            } => write!(
                f,
                "CREATE SCHEMA {}{}",
                if *if_not_exists { "IF NOT EXISTS " } else { "" },
                schema_name
            ),
            Statement::CreateDatabase {
                db_name,
                if_not_exists,
                location,
                managed_location,
            } => {
                write!(f, "CREATE DATABASE")?;
                if *if_not_exists {
                    f.write_str(" IF NOT EXISTS")?;
                }
                write!(f, " {db_name}")?;
                if let Some(l) = location {
                    write!(f, " LOCATION '{l}'")?;
                }
                if let Some(ml) = managed_location {
                    write!(f, " MANAGEDLOCATION '{ml}'")?;
                }
                Ok(())
            }
            Statement::CreateRole {
                names,
                if_not_exists,
            } => write!(
                f,
                "CREATE ROLE {}{}",
                if *if_not_exists { "IF NOT EXISTS " } else { "" },
                display_comma_separated(names),
            ),
            Statement::CreateType { name, attributes } => {
                write!(
                    f,
                    "CREATE TYPE {name} AS ({})",
                    display_comma_separated(attributes)
                )
            }
            Statement::AlterTable { name, operation } => {
                write!(f, "ALTER TABLE {name} {operation}")
            }
            Statement::AlterIndex { name, operation } => {
                write!(f, "ALTER INDEX {name} {operation}")
            }
            Statement::AlterView {
                name,
                columns,
                query,
            } => {
                write!(f, "ALTER VIEW {name}")?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
                write!(f, " AS {query}")
            }
            Statement::Drop {
                object_type,
                if_exists,
                names,
                cascade,
                restrict,
                purge,
            } => write!(
                f,
                "DROP {}{} {}{}{}{}",
                object_type,
                if *if_exists { " IF EXISTS" } else { "" },
                display_comma_separated(names),
                if *cascade { " CASCADE" } else { "" },
                if *restrict { " RESTRICT" } else { "" },
                if *purge { " PURGE" } else { "" },
            ),
            Statement::Truncate {
                table_name,
                partitions,
            } => {
                write!(f, "TRUNCATE TABLE {table_name}")?;
                if let Some(parts) = partitions {
                    if !parts.is_empty() {
                        write!(f, " PARTITION ({})", display_comma_separated(parts))?;
                    }
                }
                Ok(())
            }
            Statement::Analyze {
                table_name,
                partitions,
                for_columns,
                columns,
                cache_metadata,
                noscan,
                compute_statistics,
            } => {
                write!(f, "ANALYZE TABLE {table_name}")?;
                if let Some(parts) = partitions {
                    if !parts.is_empty() {
                        write!(f, " PARTITION ({})", display_comma_separated(parts))?;
                    }
                }
                if *compute_statistics {
                    f.write_str(" COMPUTE STATISTICS")?;
                }
                if *noscan {
                    f.write_str(" NOSCAN")?;
                }
                if *cache_metadata {
                    f.write_str(" CACHE METADATA")?;
                }
                if *for_columns {
                    f.write_str(" FOR COLUMNS")?;
                    if !columns.is_empty() {
                        write!(f, " {}", display_comma_separated(columns))?;
                    }
                }
                Ok(())
            }
            Statement::StartTransaction { modes } => {
                f.write_str("START TRANSACTION")?;
                if !modes.is_empty() {
                    write!(f, " {}", display_comma_separated(modes))?;
                }
                Ok(())
            }
            Statement::SetTransaction { modes } => {
                f.write_str("SET TRANSACTION")?;
                if !modes.is_empty() {
                    write!(f, " {}", display_comma_separated(modes))?;
                }
                Ok(())
            }
            Statement::Commit { chain } => {
                write!(f, "COMMIT{}", if *chain { " AND CHAIN" } else { "" })
            }
            Statement::Rollback { chain } => {
                write!(f, "ROLLBACK{}", if *chain { " AND CHAIN" } else { "" })
            }
            Statement::SetVariable {
                local,
                hivevar,
                variable,
                value,
            } => {
                f.write_str("SET ")?;
                if *local {
                    f.write_str("LOCAL ")?;
                }
                write!(
                    f,
                    "{hivevar}{name} = {value}",
                    hivevar = if *hivevar { "HIVEVAR:" } else { "" },
                    name = variable,
                    value = display_comma_separated(value),
                )
            }
            Statement::SetTimeZone { local, value } => {
                f.write_str("SET ")?;
                if *local {
                    f.write_str("LOCAL ")?;
                }
                write!(f, "TIME ZONE {value}")
            }
            Statement::SetNames {
                charset_name,
                collation_name,
            } => {
                write!(f, "SET NAMES {charset_name}")?;
                if let Some(collation) = collation_name {
                    write!(f, " COLLATE {collation}")?;
                }
                Ok(())
            }
            Statement::SetNamesDefault {} => f.write_str("SET NAMES DEFAULT"),
            Statement::ShowVariable { variable } => {
                f.write_str("SHOW")?;
                if !variable.is_empty() {
                    write!(f, " {}", display_separated(variable, " "))?;
                }
                Ok(())
            }
            Statement::ShowVariables { filter } => {
                f.write_str("SHOW VARIABLES")?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Statement::ShowCreate { obj_type, obj_name } => {
                write!(f, "SHOW CREATE {obj_type} {obj_name}")
            }
            Statement::ShowColumns {
                extended,
                full,
                table_name,
                filter,
            } => {
                write!(
                    f,
                    "SHOW {extended}{full}COLUMNS FROM {table_name}",
                    extended = if *extended { "EXTENDED " } else { "" },
                    full = if *full { "FULL " } else { "" },
                )?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Statement::ShowTables {
                extended,
                full,
                db_name,
                filter,
            } => {
                write!(
                    f,
                    "SHOW {extended}{full}TABLES",
                    extended = if *extended { "EXTENDED " } else { "" },
                    full = if *full { "FULL " } else { "" },
                )?;
                if let Some(db_name) = db_name {
                    write!(f, " FROM {db_name}")?;
                }
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Statement::ShowCollation { filter } => {
                f.write_str("SHOW COLLATION")?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Statement::ShowFunctions { filter } => {
                f.write_str("SHOW FUNCTIONS")?;
                if let Some(filter) = filter {
                    write!(f, " {filter}")?;
                }
                Ok(())
            }
            Statement::Use { db_name } => write!(f, "USE {db_name}"),
            Statement::Grant {
                privileges,
                objects,
                grantees,
                with_grant_option,
                granted_by,
            } => {
                write!(f, "GRANT {privileges} ")?;
                write!(f, "ON {objects} ")?;
                write!(f, "TO {}", display_comma_separated(grantees))?;
                if *with_grant_option {
                    f.write_str(" WITH GRANT OPTION")?;
                }
                if let Some(grantor) = granted_by {
                    write!(f, " GRANTED BY {grantor}")?;
                }
                Ok(())
            }
            Statement::Revoke {
                privileges,
                objects,
                grantees,
                granted_by,
                cascade,
            } => {
                write!(f, "REVOKE {privileges} ")?;
                write!(f, "ON {objects} ")?;
                write!(f, "FROM {}", display_comma_separated(grantees))?;
                if let Some(grantor) = granted_by {
                    write!(f, " GRANTED BY {grantor}")?;
                }
                match cascade {
                    Some(true) => f.write_str(" CASCADE")?,
                    Some(false) => f.write_str(" RESTRICT")?,
                    None => {}
                }
                Ok(())
            }
            Statement::Explain {
                describe_alias,
                analyze,
                verbose,
                statement,
                format,
            } => {
                f.write_str(if *describe_alias { "DESCRIBE " } else { "EXPLAIN " })?;
                if *analyze {
                    f.write_str("ANALYZE ")?;
                }
                if *verbose {
                    f.write_str("VERBOSE ")?;
                }
                if let Some(format) = format {
                    write!(f, "FORMAT {format} ")?;
                }
                write!(f, "{statement}")
            }
            Statement::ExplainTable {
                describe_alias,
                table_name,
            } => {
                f.write_str(if *describe_alias { "DESCRIBE " } else { "EXPLAIN " })?;
                write!(f, "{table_name}")
            }
            Statement::Merge {
                into,
                table,
                source,
                on,
                clauses,
            } => {
                write!(
                    f,
                    "MERGE{int} {table} USING {source} ON {on}",
                    int = if *into { " INTO" } else { "" },
                )?;
                for clause in clauses {
                    write!(f, "{clause}")?;
                }
                Ok(())
            }
            Statement::Cache {
                table_flag,
                table_name,
                has_as,
                options,
                query,
            } => {
                match table_flag {
                    Some(flag) => write!(f, "CACHE {flag} TABLE {table_name}")?,
                    None => write!(f, "CACHE TABLE {table_name}")?,
                }
                if !options.is_empty() {
                    write!(f, " OPTIONS({})", display_comma_separated(options))?;
                }
                match (*has_as, query) {
                    (true, Some(query)) => write!(f, " AS {query}"),
                    (false, Some(query)) => write!(f, " {query}"),
                    (_, None) => Ok(()),
                }
            }
            Statement::UNCache {
                table_name,
                if_exists,
            } => {
                if *if_exists {
                    write!(f, "UNCACHE TABLE IF EXISTS {table_name}")
                } else {
                    write!(f, "UNCACHE TABLE {table_name}")
                }
            }
            Statement::Discard { object_type } => write!(f, "DISCARD {object_type}"),
            Statement::Close { cursor } => write!(f, "CLOSE {cursor}"),
            Statement::Assert { condition, message } => {
                write!(f, "ASSERT {condition}")?;
                if let Some(m) = message {
                    write!(f, " AS {m}")?;
                }
                Ok(())
            }
            Statement::Kill { modifier, id } => {
                f.write_str("KILL ")?;
                if let Some(m) = modifier {
                    write!(f, "{m} ")?;
                }
                write!(f, "{id}")
            }
        }
    }
}

/// An `UPDATE`/`SET` assignment: `foo = <expr>` or `a.b = <expr>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: Vec<Ident>,
    pub value: Expr,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", display_separated(&self.id, "."), self.value)
    }
}

/// A `<name> = <value>` option, as in `WITH (...)` or `OPTIONS(...)` lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlOption {
    pub name: Ident,
    pub value: Value,
}

impl fmt::Display for SqlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// The object kind of a `DROP` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ObjectType {
    Table,
    View,
    Index,
    Schema,
    Database,
    Role,
}

/// Hive file formats for `STORED AS`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum FileFormat {
    Avro,
    Jsonfile,
    Orc,
    Parquet,
    Rcfile,
    Sequencefile,
    Textfile,
}

/// The name of a schema in a `CREATE SCHEMA` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaName {
    /// Only a schema name
    Simple(ObjectName),
    /// Only an authorization identifier
    UnnamedAuthorization(Ident),
    /// Both a schema name and an authorization identifier
    NamedAuthorization(ObjectName, Ident),
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaName::Simple(name) => write!(f, "{name}"),
            SchemaName::UnnamedAuthorization(authorization) => {
                write!(f, "AUTHORIZATION {authorization}")
            }
            SchemaName::NamedAuthorization(name, authorization) => {
                write!(f, "{name} AUTHORIZATION {authorization}")
            }
        }
    }
}

/// A transaction mode in `START TRANSACTION` / `SET TRANSACTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
    AccessMode(TransactionAccessMode),
    IsolationLevel(TransactionIsolationLevel),
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionMode::AccessMode(access_mode) => write!(f, "{access_mode}"),
            TransactionMode::IsolationLevel(iso_level) => {
                write!(f, "ISOLATION LEVEL {iso_level}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TransactionAccessMode {
    #[strum(serialize = "READ ONLY")]
    ReadOnly,
    #[strum(serialize = "READ WRITE")]
    ReadWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TransactionIsolationLevel {
    #[strum(serialize = "READ UNCOMMITTED")]
    ReadUncommitted,
    #[strum(serialize = "READ COMMITTED")]
    ReadCommitted,
    #[strum(serialize = "REPEATABLE READ")]
    RepeatableRead,
    #[strum(serialize = "SERIALIZABLE")]
    Serializable,
}

/// The `LIKE`/`ILIKE`/`WHERE` tail of a `SHOW` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowStatementFilter {
    Like(String),
    ILike(String),
    Where(Expr),
}

impl fmt::Display for ShowStatementFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowStatementFilter::Like(pattern) => {
                write!(f, "LIKE '{}'", escape_single_quote_string(pattern))
            }
            ShowStatementFilter::ILike(pattern) => {
                write!(f, "ILIKE '{}'", escape_single_quote_string(pattern))
            }
            ShowStatementFilter::Where(expr) => write!(f, "WHERE {expr}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ShowCreateObject {
    Table,
    View,
}

/// SQLite `INSERT OR <conflict resolution>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SqliteOnConflict {
    Rollback,
    Abort,
    Fail,
    Ignore,
    Replace,
}

/// The conflict clause of an `INSERT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnInsert {
    /// `ON DUPLICATE KEY UPDATE` (MySQL)
    DuplicateKeyUpdate(Vec<Assignment>),
    /// `ON CONFLICT` (Postgres, SQLite)
    OnConflict(OnConflict),
}

impl fmt::Display for OnInsert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnInsert::DuplicateKeyUpdate(expr) => write!(
                f,
                " ON DUPLICATE KEY UPDATE {}",
                display_comma_separated(expr)
            ),
            OnInsert::OnConflict(o) => write!(f, "{o}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnConflict {
    pub conflict_target: Vec<Ident>,
    pub action: OnConflictAction,
}

impl fmt::Display for OnConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ON CONFLICT")?;
        if !self.conflict_target.is_empty() {
            write!(f, "({})", display_comma_separated(&self.conflict_target))?;
        }
        write!(f, " {}", self.action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnConflictAction {
    DoNothing,
    DoUpdate(Vec<Assignment>),
}

impl fmt::Display for OnConflictAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnConflictAction::DoNothing => f.write_str("DO NOTHING"),
            OnConflictAction::DoUpdate(assignments) => {
                f.write_str("DO UPDATE")?;
                if !assignments.is_empty() {
                    write!(f, " SET {}", display_comma_separated(assignments))?;
                }
                Ok(())
            }
        }
    }
}

/// A privilege set in `GRANT`/`REVOKE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Privileges {
    /// All privileges applicable to the object type
    All {
        /// Whether the `PRIVILEGES` keyword was written
        with_privileges_keyword: bool,
    },
    /// A list of specific privileges
    Actions(Vec<Action>),
}

impl fmt::Display for Privileges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privileges::All {
                with_privileges_keyword,
            } => {
                write!(
                    f,
                    "ALL{}",
                    if *with_privileges_keyword {
                        " PRIVILEGES"
                    } else {
                        ""
                    }
                )
            }
            Privileges::Actions(actions) => {
                write!(f, "{}", display_comma_separated(actions))
            }
        }
    }
}

/// A privilege on a database object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Connect,
    Create,
    Delete,
    Execute,
    Insert { columns: Option<Vec<Ident>> },
    References { columns: Option<Vec<Ident>> },
    Select { columns: Option<Vec<Ident>> },
    Temporary,
    Trigger,
    Truncate,
    Update { columns: Option<Vec<Ident>> },
    Usage,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Connect => f.write_str("CONNECT")?,
            Action::Create => f.write_str("CREATE")?,
            Action::Delete => f.write_str("DELETE")?,
            Action::Execute => f.write_str("EXECUTE")?,
            Action::Insert { .. } => f.write_str("INSERT")?,
            Action::References { .. } => f.write_str("REFERENCES")?,
            Action::Select { .. } => f.write_str("SELECT")?,
            Action::Temporary => f.write_str("TEMPORARY")?,
            Action::Trigger => f.write_str("TRIGGER")?,
            Action::Truncate => f.write_str("TRUNCATE")?,
            Action::Update { .. } => f.write_str("UPDATE")?,
            Action::Usage => f.write_str("USAGE")?,
        };
        match self {
            Action::Insert { columns }
            | Action::References { columns }
            | Action::Select { columns }
            | Action::Update { columns } => {
                if let Some(columns) = columns {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
            }
            _ => (),
        };
        Ok(())
    }
}

/// The objects a `GRANT`/`REVOKE` applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantObjects {
    /// `ALL SEQUENCES IN SCHEMA <schema_name> [, ...]`
    AllSequencesInSchema { schemas: Vec<ObjectName> },
    /// `ALL TABLES IN SCHEMA <schema_name> [, ...]`
    AllTablesInSchema { schemas: Vec<ObjectName> },
    /// `SCHEMA <schema_name> [, ...]`
    Schemas(Vec<ObjectName>),
    /// `SEQUENCE <sequence_name> [, ...]`
    Sequences(Vec<ObjectName>),
    /// `[TABLE] <table_name> [, ...]`
    Tables(Vec<ObjectName>),
}

impl fmt::Display for GrantObjects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantObjects::Sequences(sequences) => {
                write!(f, "SEQUENCE {}", display_comma_separated(sequences))
            }
            GrantObjects::Schemas(schemas) => {
                write!(f, "SCHEMA {}", display_comma_separated(schemas))
            }
            GrantObjects::Tables(tables) => {
                write!(f, "{}", display_comma_separated(tables))
            }
            GrantObjects::AllSequencesInSchema { schemas } => {
                write!(
                    f,
                    "ALL SEQUENCES IN SCHEMA {}",
                    display_comma_separated(schemas)
                )
            }
            GrantObjects::AllTablesInSchema { schemas } => {
                write!(
                    f,
                    "ALL TABLES IN SCHEMA {}",
                    display_comma_separated(schemas)
                )
            }
        }
    }
}

/// A `WHEN ...` arm of a `MERGE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeClause {
    MatchedUpdate {
        predicate: Option<Expr>,
        assignments: Vec<Assignment>,
    },
    MatchedDelete(Option<Expr>),
    NotMatched {
        predicate: Option<Expr>,
        columns: Vec<Ident>,
        values: Values,
    },
}

impl fmt::Display for MergeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" WHEN")?;
        match self {
            MergeClause::MatchedUpdate {
                predicate,
                assignments,
            } => {
                f.write_str(" MATCHED")?;
                if let Some(pred) = predicate {
                    write!(f, " AND {pred}")?;
                }
                write!(
                    f,
                    " THEN UPDATE SET {}",
                    display_comma_separated(assignments)
                )
            }
            MergeClause::MatchedDelete(predicate) => {
                f.write_str(" MATCHED")?;
                if let Some(pred) = predicate {
                    write!(f, " AND {pred}")?;
                }
                f.write_str(" THEN DELETE")
            }
            MergeClause::NotMatched {
                predicate,
                columns,
                values,
            } => {
                f.write_str(" NOT MATCHED")?;
                if let Some(pred) = predicate {
                    write!(f, " AND {pred}")?;
                }
                write!(
                    f,
                    " THEN INSERT ({}) {}",
                    display_comma_separated(columns),
                    values
                )
            }
        }
    }
}

/// What a `DISCARD` statement discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DiscardObject {
    All,
    Plans,
    Sequences,
    Temp,
}

/// The target of a `CLOSE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseCursor {
    All,
    Specific { name: Ident },
}

impl fmt::Display for CloseCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseCursor::All => f.write_str("ALL"),
            CloseCursor::Specific { name } => write!(f, "{name}"),
        }
    }
}

/// The modifier of a `KILL` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum KillType {
    Connection,
    Query,
    Mutation,
}

/// The output format of `EXPLAIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum AnalyzeFormat {
    Text,
    Graphviz,
    Json,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn idents_print_with_their_recorded_quotes() {
        assert_eq!(Ident::new("foo").to_string(), "foo");
        assert_eq!(Ident::with_quote('"', "foo").to_string(), "\"foo\"");
        assert_eq!(Ident::with_quote('`', "foo").to_string(), "`foo`");
        assert_eq!(Ident::with_quote('[', "foo").to_string(), "[foo]");
        assert_eq!(
            Ident::with_quote('"', "quo\"ted").to_string(),
            "\"quo\"\"ted\""
        );
    }

    #[test]
    fn grouping_set_printing_keeps_singletons_unparenthesized() {
        let rollup = Expr::Rollup(vec![
            vec![Expr::Identifier(Ident::new("a"))],
            vec![
                Expr::Identifier(Ident::new("b")),
                Expr::Identifier(Ident::new("c")),
            ],
        ]);
        assert_eq!(rollup.to_string(), "ROLLUP (a, (b, c))");
    }

    #[test]
    fn interval_second_precision_prints_compact_form() {
        let interval = Expr::Interval {
            value: Box::new(Expr::Value(Value::SingleQuotedString("5".into()))),
            leading_field: Some(DateTimeField::Second),
            leading_precision: Some(1),
            last_field: None,
            fractional_seconds_precision: Some(3),
        };
        assert_eq!(interval.to_string(), "INTERVAL '5' SECOND (1, 3)");
    }
}
