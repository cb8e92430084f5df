//! The keyword table consulted by the lexer.
//!
//! Every word the parser may ever dispatch on is listed here; words not in
//! the table lex as plain identifiers with `Keyword::NoKeyword`. Listing a
//! word does not reserve it: most keywords can still be parsed as
//! identifiers when the grammar allows it, so the table can grow without
//! changing parse results. Context-sensitive reservation happens through the
//! `RESERVED_FOR_*` slices at the bottom.

/// Expands to the `Keyword` enum, a sorted `ALL_KEYWORDS` array of the
/// corresponding strings, and a parallel `ALL_KEYWORDS_INDEX` used to map a
/// binary-search hit back to the enum.
macro_rules! define_keywords {
    ($($ident:ident),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            NoKeyword,
            $($ident),*
        }

        pub const ALL_KEYWORDS_INDEX: &[Keyword] = &[
            $(Keyword::$ident),*
        ];

        pub const ALL_KEYWORDS: &[&str] = &[
            $(stringify!($ident)),*
        ];
    };
}

// Sorted so the lexer can match with a binary search.
define_keywords!(
    ABORT,
    ACTION,
    ADD,
    ALL,
    ALTER,
    ANALYZE,
    AND,
    ANTI,
    ANY,
    APPLY,
    ARRAY,
    ARRAY_AGG,
    AS,
    ASC,
    ASSERT,
    AT,
    AUTHORIZATION,
    AUTOINCREMENT,
    AUTO_INCREMENT,
    BEGIN,
    BETWEEN,
    BIGINT,
    BIGNUMERIC,
    BINARY,
    BLOB,
    BOOLEAN,
    BOTH,
    BY,
    BYTEA,
    CACHE,
    CASCADE,
    CASE,
    CAST,
    CEIL,
    CENTURY,
    CHAIN,
    CHAR,
    CHARACTER,
    CHARSET,
    CHECK,
    CLOB,
    CLONE,
    CLOSE,
    CLUSTER,
    COLLATE,
    COLLATION,
    COLUMN,
    COLUMNS,
    COMMENT,
    COMMIT,
    COMMITTED,
    COMPUTE,
    CONFLICT,
    CONNECT,
    CONNECTION,
    CONSTRAINT,
    COUNT,
    CREATE,
    CROSS,
    CUBE,
    CURRENT,
    DATA,
    DATABASE,
    DATE,
    DATETIME,
    DAY,
    DEC,
    DECADE,
    DECIMAL,
    DEFAULT,
    DELETE,
    DESC,
    DESCRIBE,
    DISCARD,
    DISTINCT,
    DIV,
    DO,
    DOUBLE,
    DOW,
    DOY,
    DROP,
    DUPLICATE,
    ELSE,
    END,
    ENGINE,
    ENUM,
    EPOCH,
    ERROR,
    ESCAPE,
    EXCEPT,
    EXECUTE,
    EXISTS,
    EXPLAIN,
    EXTENDED,
    EXTERNAL,
    EXTRACT,
    FAIL,
    FALSE,
    FETCH,
    FILTER,
    FIRST,
    FLOAT,
    FLOOR,
    FOLLOWING,
    FOR,
    FOREIGN,
    FORMAT,
    FROM,
    FULL,
    FUNCTIONS,
    GRANT,
    GRANTED,
    GRAPHVIZ,
    GROUP,
    GROUPING,
    GROUPS,
    HAVING,
    HIVEVAR,
    HOUR,
    IF,
    IGNORE,
    ILIKE,
    IN,
    INDEX,
    INNER,
    INSERT,
    INT,
    INTEGER,
    INTERSECT,
    INTERVAL,
    INTO,
    IS,
    ISODOW,
    ISOLATION,
    ISOYEAR,
    JOIN,
    JSON,
    JULIAN,
    KEY,
    KILL,
    LAST,
    LATERAL,
    LEADING,
    LEFT,
    LEVEL,
    LIKE,
    LIMIT,
    LISTAGG,
    LOCAL,
    LOCATION,
    LOCKED,
    MANAGEDLOCATION,
    MATCHED,
    MATERIALIZED,
    MERGE,
    METADATA,
    MICROSECOND,
    MICROSECONDS,
    MILLENIUM,
    MILLENNIUM,
    MILLISECOND,
    MILLISECONDS,
    MINUTE,
    MONTH,
    MUTATION,
    NAMES,
    NANOSECOND,
    NANOSECONDS,
    NATIONAL,
    NATURAL,
    NCHAR,
    NEXT,
    NO,
    NOSCAN,
    NOT,
    NOTHING,
    NOWAIT,
    NULL,
    NULLS,
    NUMERIC,
    NVARCHAR,
    OF,
    OFFSET,
    ON,
    ONLY,
    OPTION,
    OPTIONS,
    OR,
    ORDER,
    OUTER,
    OVER,
    OVERFLOW,
    OVERLAY,
    OVERWRITE,
    PARTITION,
    PERCENT,
    PIVOT,
    PLACING,
    PLANS,
    POSITION,
    PRECEDING,
    PRECISION,
    PRIMARY,
    PRIVILEGES,
    PURGE,
    QUALIFY,
    QUARTER,
    QUERY,
    RANGE,
    READ,
    REAL,
    RECURSIVE,
    REFERENCES,
    RENAME,
    REPEATABLE,
    REPLACE,
    RESTRICT,
    RETURNING,
    REVOKE,
    RIGHT,
    ROLE,
    ROLLBACK,
    ROLLUP,
    ROW,
    ROWS,
    SCHEMA,
    SECOND,
    SELECT,
    SEMI,
    SEQUENCE,
    SEQUENCES,
    SERIALIZABLE,
    SESSION,
    SET,
    SETS,
    SHARE,
    SHOW,
    SIMILAR,
    SKIP,
    SMALLINT,
    START,
    STATISTICS,
    STORED,
    STRING,
    SUBSTRING,
    TABLE,
    TABLES,
    TEMP,
    TEMPORARY,
    TEXT,
    THEN,
    TIES,
    TIME,
    TIMESTAMP,
    TIMESTAMPTZ,
    TIMEZONE,
    TIMEZONE_HOUR,
    TIMEZONE_MINUTE,
    TINYINT,
    TO,
    TOP,
    TRAILING,
    TRANSACTION,
    TRIGGER,
    TRIM,
    TRUE,
    TRUNCATE,
    TRY_CAST,
    TYPE,
    UNBOUNDED,
    UNCACHE,
    UNCOMMITTED,
    UNION,
    UNIQUE,
    UNKNOWN,
    UNLOGGED,
    UNNEST,
    UNSIGNED,
    UPDATE,
    USAGE,
    USE,
    USING,
    UUID,
    VALUES,
    VARBINARY,
    VARCHAR,
    VARIABLES,
    VARYING,
    VERBOSE,
    VIEW,
    WEEK,
    WHEN,
    WHERE,
    WINDOW,
    WITH,
    WITHIN,
    WITHOUT,
    WORK,
    WRITE,
    XOR,
    YEAR,
    ZONE,
);

/// Words that cannot be used as a table alias, so that `FROM table_name alias`
/// can be parsed unambiguously without lookahead.
pub const RESERVED_FOR_TABLE_ALIAS: &[Keyword] = &[
    // Reserved as both a table and a column alias:
    Keyword::WITH,
    Keyword::SELECT,
    Keyword::WHERE,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::ORDER,
    Keyword::LIMIT,
    Keyword::OFFSET,
    Keyword::FETCH,
    Keyword::UNION,
    Keyword::EXCEPT,
    Keyword::INTERSECT,
    Keyword::FOR,
    Keyword::RETURNING,
    // Reserved only as a table alias in the `FROM`/`JOIN` clauses:
    Keyword::ON,
    Keyword::JOIN,
    Keyword::INNER,
    Keyword::CROSS,
    Keyword::FULL,
    Keyword::LEFT,
    Keyword::RIGHT,
    Keyword::NATURAL,
    Keyword::USING,
    Keyword::OUTER,
    Keyword::SET,
    Keyword::QUALIFY,
    Keyword::WINDOW,
];

/// Words that cannot be used as a column alias, so that `SELECT <expr> alias`
/// can be parsed unambiguously without lookahead.
pub const RESERVED_FOR_COLUMN_ALIAS: &[Keyword] = &[
    Keyword::WITH,
    Keyword::SELECT,
    Keyword::WHERE,
    Keyword::GROUP,
    Keyword::HAVING,
    Keyword::ORDER,
    Keyword::LIMIT,
    Keyword::OFFSET,
    Keyword::FETCH,
    Keyword::UNION,
    Keyword::EXCEPT,
    Keyword::INTERSECT,
    Keyword::FOR,
    Keyword::RETURNING,
    // Reserved only as a column alias in the `SELECT` clause:
    Keyword::FROM,
    Keyword::INTO,
];

#[cfg(test)]
mod tests {
    use super::ALL_KEYWORDS;

    #[test]
    fn keyword_table_is_sorted_for_binary_search() {
        let mut sorted = ALL_KEYWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ALL_KEYWORDS, sorted);
    }
}
