//! Concrete [`Dialect`] implementations for the engines squall understands,
//! plus the registry mapping a [`DialectKind`] to a boxed instance.

use squall_lib_core::dialects::{Dialect, DialectKind};

pub mod ansi;
pub mod bigquery;
pub mod clickhouse;
pub mod databricks;
pub mod duckdb;
pub mod generic;
pub mod hive;
pub mod mssql;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod redshift;
pub mod snowflake;
pub mod sqlite;

pub use ansi::AnsiDialect;
pub use bigquery::BigQueryDialect;
pub use clickhouse::ClickHouseDialect;
pub use databricks::DatabricksDialect;
pub use duckdb::DuckDbDialect;
pub use generic::GenericDialect;
pub use hive::HiveDialect;
pub use mssql::MsSqlDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use redshift::RedshiftDialect;
pub use snowflake::SnowflakeDialect;
pub use sqlite::SQLiteDialect;

/// Instantiate the dialect for a [`DialectKind`].
pub fn kind_to_dialect(kind: DialectKind) -> Box<dyn Dialect> {
    match kind {
        DialectKind::Ansi => Box::new(AnsiDialect),
        DialectKind::Bigquery => Box::new(BigQueryDialect),
        DialectKind::Clickhouse => Box::new(ClickHouseDialect),
        DialectKind::Databricks => Box::new(DatabricksDialect),
        DialectKind::Duckdb => Box::new(DuckDbDialect),
        DialectKind::Generic => Box::new(GenericDialect),
        DialectKind::Hive => Box::new(HiveDialect),
        DialectKind::Mssql => Box::new(MsSqlDialect),
        DialectKind::Mysql => Box::new(MySqlDialect),
        DialectKind::Oracle => Box::new(OracleDialect),
        DialectKind::Postgres => Box::new(PostgresDialect),
        DialectKind::Redshift => Box::new(RedshiftDialect),
        DialectKind::Snowflake => Box::new(SnowflakeDialect),
        DialectKind::Sqlite => Box::new(SQLiteDialect),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_kind_resolves_to_a_dialect() {
        for kind in DialectKind::iter() {
            let _ = kind_to_dialect(kind);
        }
    }

    #[test]
    fn kinds_parse_from_their_snake_case_names() {
        assert_eq!(
            DialectKind::from_str("postgres").unwrap(),
            DialectKind::Postgres
        );
        assert_eq!(DialectKind::from_str("mssql").unwrap(), DialectKind::Mssql);
        assert!(DialectKind::from_str("not_a_dialect").is_err());
    }
}
