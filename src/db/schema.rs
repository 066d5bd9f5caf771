//! Database schema definitions.
//!
//! DDL for all tables and indexes, executed statement by statement so
//! initialization stays idempotent. Enumerated columns are plain TEXT with
//! no CHECK constraint; the documented value sets are enforced by the
//! application layer, not the storage engine.

use sqlx::sqlite::SqlitePool;

use crate::Result;

/// One statement per element; `initialize_schema` runs them in order.
///
/// Ownership is declared at the database level: deleting a user removes
/// their concerns, votes, comments, and feedback; deleting a concern
/// removes its votes and comments. `chat_sessions.user_id` and
/// `feedback.chat_session_id` deliberately carry no foreign-key clause:
/// chat history survives user deletion, and feedback survives session
/// deletion.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS concerns (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        location TEXT,
        priority TEXT NOT NULL DEFAULT 'medium',
        status TEXT NOT NULL DEFAULT 'open',
        upvotes INTEGER NOT NULL DEFAULT 0,
        downvotes INTEGER NOT NULL DEFAULT 0,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS votes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        concern_id INTEGER NOT NULL REFERENCES concerns(id) ON DELETE CASCADE,
        vote_type TEXT NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE(user_id, concern_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        concern_id INTEGER NOT NULL REFERENCES concerns(id) ON DELETE CASCADE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS chat_sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        question TEXT NOT NULL,
        response TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS feedback (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        chat_session_id INTEGER,
        question TEXT NOT NULL,
        feedback_text TEXT NOT NULL,
        sentiment TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_concerns_user ON concerns(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_concerns_status ON concerns(status)",
    "CREATE INDEX IF NOT EXISTS idx_votes_concern ON votes(concern_id)",
    "CREATE INDEX IF NOT EXISTS idx_comments_concern ON comments(concern_id)",
    "CREATE INDEX IF NOT EXISTS idx_chat_sessions_user ON chat_sessions(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_user ON feedback(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_session ON feedback(chat_session_id)",
];

/// Create all tables and indexes. Safe to call on every startup.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("database schema initialized");
    Ok(())
}
