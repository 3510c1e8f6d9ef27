// src/db/sessions.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Inserts a session row for `email`. `token_hash` is the SHA-256 of the
/// raw cookie token; the raw token itself never reaches the database.
pub fn insert_session(
    conn: &Connection,
    email: &str,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into sessions (email, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![email, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert session failed: {e}")))?;
    Ok(())
}

/// Email for a live (unexpired, unrevoked) session hash.
pub fn find_session_email(
    conn: &Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<String>, ServerError> {
    conn.query_row(
        r#"
        select email
        from sessions
        where token_hash = ?
          and expires_at > ?
          and revoked_at is null
        "#,
        params![token_hash, now],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Marks the session revoked; unknown or already-revoked hashes are a no-op.
pub fn revoke_session(conn: &Connection, token_hash: &[u8], now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, token_hash],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
