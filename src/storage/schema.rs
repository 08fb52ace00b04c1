/// Initial schema: one key/value table holding whole-budget snapshots, plus
/// the version bookkeeping table.
pub(crate) const SCHEMA_V1: &str = "
CREATE TABLE IF NOT EXISTS snapshots (
    key        TEXT PRIMARY KEY,
    format     INTEGER NOT NULL,
    data       TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS schema_version (
    version    INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);
";

pub(crate) const CURRENT_VERSION: i32 = 1;

/// (from_version, sql) pairs applied in order to databases at or below
/// from_version.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
