//! SQL data types as they appear in casts and column definitions.

use core::fmt;

use itertools::Itertools;

use super::ObjectName;

/// A SQL data type. Multi-word ANSI spellings normalize to a canonical
/// variant (`CHARACTER VARYING` parses as [`DataType::Varchar`]); the
/// canonical printer emits one spelling per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// Fixed-length character type, e.g. CHAR(10)
    Char(Option<u64>),
    /// Variable-length character type, e.g. VARCHAR(10)
    Varchar(Option<u64>),
    /// Variable-length national character type, e.g. NVARCHAR(10)
    Nvarchar(Option<u64>),
    /// Large character object, e.g. CLOB(1000)
    Clob(Option<u64>),
    Text,
    /// Hive STRING
    String,
    /// Fixed-length binary type, e.g. BINARY(10)
    Binary(Option<u64>),
    /// Variable-length binary type, e.g. VARBINARY(10)
    Varbinary(Option<u64>),
    /// Large binary object, e.g. BLOB(1000)
    Blob(Option<u64>),
    Numeric(ExactNumberInfo),
    Decimal(ExactNumberInfo),
    Dec(ExactNumberInfo),
    /// BigQuery arbitrary-precision numeric
    BigNumeric(ExactNumberInfo),
    Float(Option<u64>),
    Real,
    Double,
    DoublePrecision,
    TinyInt(Option<u64>),
    UnsignedTinyInt(Option<u64>),
    SmallInt(Option<u64>),
    UnsignedSmallInt(Option<u64>),
    Int(Option<u64>),
    Integer(Option<u64>),
    UnsignedInt(Option<u64>),
    UnsignedInteger(Option<u64>),
    BigInt(Option<u64>),
    UnsignedBigInt(Option<u64>),
    Boolean,
    Date,
    Time(TimezoneInfo),
    Datetime,
    Timestamp(TimezoneInfo),
    Interval,
    Json,
    Uuid,
    /// Postgres binary string
    Bytea,
    /// ARRAY&lt;T&gt; / T[]
    Array(Box<DataType>),
    /// MySQL ENUM('a', 'b')
    Enum(Vec<String>),
    /// MySQL SET('a', 'b')
    Set(Vec<String>),
    /// Any type not covered above, e.g. a user-defined type
    Custom(ObjectName, Vec<String>),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Char(size) => format_type_with_optional_length(f, "CHAR", size, false),
            DataType::Varchar(size) => format_type_with_optional_length(f, "VARCHAR", size, false),
            DataType::Nvarchar(size) => {
                format_type_with_optional_length(f, "NVARCHAR", size, false)
            }
            DataType::Clob(size) => format_type_with_optional_length(f, "CLOB", size, false),
            DataType::Text => f.write_str("TEXT"),
            DataType::String => f.write_str("STRING"),
            DataType::Binary(size) => format_type_with_optional_length(f, "BINARY", size, false),
            DataType::Varbinary(size) => {
                format_type_with_optional_length(f, "VARBINARY", size, false)
            }
            DataType::Blob(size) => format_type_with_optional_length(f, "BLOB", size, false),
            DataType::Numeric(info) => write!(f, "NUMERIC{info}"),
            DataType::Decimal(info) => write!(f, "DECIMAL{info}"),
            DataType::Dec(info) => write!(f, "DEC{info}"),
            DataType::BigNumeric(info) => write!(f, "BIGNUMERIC{info}"),
            DataType::Float(size) => format_type_with_optional_length(f, "FLOAT", size, false),
            DataType::Real => f.write_str("REAL"),
            DataType::Double => f.write_str("DOUBLE"),
            DataType::DoublePrecision => f.write_str("DOUBLE PRECISION"),
            DataType::TinyInt(size) => format_type_with_optional_length(f, "TINYINT", size, false),
            DataType::UnsignedTinyInt(size) => {
                format_type_with_optional_length(f, "TINYINT", size, true)
            }
            DataType::SmallInt(size) => {
                format_type_with_optional_length(f, "SMALLINT", size, false)
            }
            DataType::UnsignedSmallInt(size) => {
                format_type_with_optional_length(f, "SMALLINT", size, true)
            }
            DataType::Int(size) => format_type_with_optional_length(f, "INT", size, false),
            DataType::Integer(size) => format_type_with_optional_length(f, "INTEGER", size, false),
            DataType::UnsignedInt(size) => format_type_with_optional_length(f, "INT", size, true),
            DataType::UnsignedInteger(size) => {
                format_type_with_optional_length(f, "INTEGER", size, true)
            }
            DataType::BigInt(size) => format_type_with_optional_length(f, "BIGINT", size, false),
            DataType::UnsignedBigInt(size) => {
                format_type_with_optional_length(f, "BIGINT", size, true)
            }
            DataType::Boolean => f.write_str("BOOLEAN"),
            DataType::Date => f.write_str("DATE"),
            DataType::Time(tz) => write!(f, "TIME{tz}"),
            DataType::Datetime => f.write_str("DATETIME"),
            DataType::Timestamp(TimezoneInfo::Tz) => f.write_str("TIMESTAMPTZ"),
            DataType::Timestamp(tz) => write!(f, "TIMESTAMP{tz}"),
            DataType::Interval => f.write_str("INTERVAL"),
            DataType::Json => f.write_str("JSON"),
            DataType::Uuid => f.write_str("UUID"),
            DataType::Bytea => f.write_str("BYTEA"),
            DataType::Array(elem) => write!(f, "ARRAY<{elem}>"),
            DataType::Enum(values) => {
                write!(
                    f,
                    "ENUM({})",
                    values.iter().map(|v| format!("'{v}'")).format(", ")
                )
            }
            DataType::Set(values) => {
                write!(
                    f,
                    "SET({})",
                    values.iter().map(|v| format!("'{v}'")).format(", ")
                )
            }
            DataType::Custom(name, modifiers) => {
                if modifiers.is_empty() {
                    write!(f, "{name}")
                } else {
                    write!(f, "{name}({})", modifiers.iter().format(", "))
                }
            }
        }
    }
}

fn format_type_with_optional_length(
    f: &mut fmt::Formatter<'_>,
    sql_type: &'static str,
    len: &Option<u64>,
    unsigned: bool,
) -> fmt::Result {
    write!(f, "{sql_type}")?;
    if let Some(len) = len {
        write!(f, "({len})")?;
    }
    if unsigned {
        write!(f, " UNSIGNED")?;
    }
    Ok(())
}

/// The precision/scale annotation of an exact-numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactNumberInfo {
    None,
    Precision(u64),
    PrecisionAndScale(u64, u64),
}

impl fmt::Display for ExactNumberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExactNumberInfo::None => Ok(()),
            ExactNumberInfo::Precision(p) => write!(f, "({p})"),
            ExactNumberInfo::PrecisionAndScale(p, s) => write!(f, "({p},{s})"),
        }
    }
}

/// The time-zone annotation of TIME/TIMESTAMP types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezoneInfo {
    None,
    WithTimeZone,
    WithoutTimeZone,
    /// The `TIMESTAMPTZ` contraction
    Tz,
}

impl fmt::Display for TimezoneInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneInfo::None | TimezoneInfo::Tz => Ok(()),
            TimezoneInfo::WithTimeZone => f.write_str(" WITH TIME ZONE"),
            TimezoneInfo::WithoutTimeZone => f.write_str(" WITHOUT TIME ZONE"),
        }
    }
}
