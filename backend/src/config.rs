//! Server-wide constants.

/// SQLite database file, created next to the executable on first run.
pub const DB_FILE: &str = "rfplens.sqlite";

/// Directory where uploaded RFP documents are stored.
pub const STORAGE_DIR: &str = "storage";

pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 8080;
