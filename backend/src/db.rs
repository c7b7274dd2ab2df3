//! SQLite access and schema bootstrap.
//!
//! Services open a fresh connection per request; the schema is created once
//! at startup. The `position` column of `files` is what gives an RFP's file
//! list its stable order: ordinal citations (`doc_N`) in the analysis text
//! resolve against the list as sorted by it.

use crate::config;
use rusqlite::Connection;

pub fn open() -> rusqlite::Result<Connection> {
    Connection::open(config::DB_FILE)
}

/// Opens the database and makes sure the schema exists.
pub fn init() -> rusqlite::Result<()> {
    let conn = open()?;
    create_schema(&conn)
}

pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS rfps (
            id       TEXT PRIMARY KEY,
            title    TEXT,
            status   TEXT,
            analysis TEXT
        );
        CREATE TABLE IF NOT EXISTS files (
            id           TEXT PRIMARY KEY,
            rfp_id       TEXT NOT NULL,
            name         TEXT,
            content_type TEXT,
            path         TEXT NOT NULL,
            position     INTEGER NOT NULL
        );",
    )
}
