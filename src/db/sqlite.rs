//! SQLite repository implementations.
//!
//! All queries use runtime-bound parameters against a shared pool.
//! Multi-row mutations that must stay consistent (vote casting, counter
//! reconciliation, session deletion with feedback detach) run inside a
//! single transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::db::repository::{
    ChatSessionRepository, CommentRepository, ConcernRepository, FeedbackRepository,
    UserRepository, VoteRepository,
};
use crate::models::{
    ChatSession, Comment, Concern, ConcernStatus, Feedback, User, Vote, VoteTally, VoteType,
};
use crate::{AppError, Result};

fn map_user(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        full_name: row.try_get("full_name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn map_concern(row: &SqliteRow) -> Result<Concern> {
    Ok(Concern {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        priority: row.try_get::<String, _>("priority")?.parse()?,
        status: row.try_get::<String, _>("status")?.parse()?,
        upvotes: row.try_get("upvotes")?,
        downvotes: row.try_get("downvotes")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn map_vote(row: &SqliteRow) -> Result<Vote> {
    Ok(Vote {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        concern_id: row.try_get("concern_id")?,
        vote_type: row.try_get::<String, _>("vote_type")?.parse()?,
        created_at: row.try_get("created_at")?,
    })
}

fn map_comment(row: &SqliteRow) -> Result<Comment> {
    Ok(Comment {
        id: row.try_get("id")?,
        content: row.try_get("content")?,
        user_id: row.try_get("user_id")?,
        concern_id: row.try_get("concern_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn map_session(row: &SqliteRow) -> Result<ChatSession> {
    Ok(ChatSession {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        question: row.try_get("question")?,
        response: row.try_get("response")?,
        created_at: row.try_get("created_at")?,
    })
}

fn map_feedback(row: &SqliteRow) -> Result<Feedback> {
    Ok(Feedback {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        chat_session_id: row.try_get("chat_session_id")?,
        question: row.try_get("question")?,
        feedback_text: row.try_get("feedback_text")?,
        sentiment: row.try_get::<String, _>("sentiment")?.parse()?,
        created_at: row.try_get("created_at")?,
    })
}

// SQLite User Repository
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, user: &User) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (full_name, email, password_hash, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&*self.pool)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            ..user.clone()
        })
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, full_name, email, password_hash, created_at, updated_at FROM users WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, full_name, email, password_hash, created_at, updated_at FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_user(&r)).transpose()
    }

    async fn update_user(&self, user: &User) -> Result<User> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE users
            SET full_name = ?2, email = ?3, password_hash = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("user {} does not exist", user.id)));
        }

        Ok(User {
            updated_at: now,
            ..user.clone()
        })
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        // Cascades to concerns, votes, comments, and feedback via the
        // schema's ON DELETE CASCADE clauses. chat_sessions carries no
        // foreign key and is untouched.
        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        Ok(())
    }
}

// SQLite Concern Repository
pub struct SqliteConcernRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteConcernRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConcernRepository for SqliteConcernRepository {
    async fn create_concern(&self, concern: &Concern) -> Result<Concern> {
        let result = sqlx::query(
            r#"
            INSERT INTO concerns (title, description, location, priority, status,
                                  upvotes, downvotes, user_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&concern.title)
        .bind(&concern.description)
        .bind(&concern.location)
        .bind(concern.priority.to_string())
        .bind(concern.status.to_string())
        .bind(concern.upvotes)
        .bind(concern.downvotes)
        .bind(concern.user_id)
        .bind(concern.created_at)
        .bind(concern.updated_at)
        .execute(&*self.pool)
        .await?;

        Ok(Concern {
            id: result.last_insert_rowid(),
            ..concern.clone()
        })
    }

    async fn get_concern_by_id(&self, id: i64) -> Result<Option<Concern>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, location, priority, status,
                   upvotes, downvotes, user_id, created_at, updated_at
            FROM concerns WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_concern(&r)).transpose()
    }

    async fn list_concerns(&self, limit: u32, offset: u32) -> Result<Vec<Concern>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, location, priority, status,
                   upvotes, downvotes, user_id, created_at, updated_at
            FROM concerns
            ORDER BY created_at DESC, id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_concern).collect()
    }

    async fn list_concerns_by_user(&self, user_id: i64) -> Result<Vec<Concern>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, location, priority, status,
                   upvotes, downvotes, user_id, created_at, updated_at
            FROM concerns
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_concern).collect()
    }

    async fn list_concerns_by_status(&self, status: ConcernStatus) -> Result<Vec<Concern>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, location, priority, status,
                   upvotes, downvotes, user_id, created_at, updated_at
            FROM concerns
            WHERE status = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(status.to_string())
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_concern).collect()
    }

    async fn update_concern(&self, concern: &Concern) -> Result<Concern> {
        // Counters are owned by the vote operations and deliberately not
        // written here.
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE concerns
            SET title = ?2, description = ?3, location = ?4, priority = ?5,
                status = ?6, updated_at = ?7
            WHERE id = ?1
            "#,
        )
        .bind(concern.id)
        .bind(&concern.title)
        .bind(&concern.description)
        .bind(&concern.location)
        .bind(concern.priority.to_string())
        .bind(concern.status.to_string())
        .bind(now)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "concern {} does not exist",
                concern.id
            )));
        }

        Ok(Concern {
            updated_at: now,
            ..concern.clone()
        })
    }

    async fn update_status(&self, id: i64, status: ConcernStatus) -> Result<()> {
        let result = sqlx::query(
            "UPDATE concerns SET status = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(id)
        .bind(status.to_string())
        .bind(Utc::now())
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("concern {} does not exist", id)));
        }

        Ok(())
    }

    async fn delete_concern(&self, id: i64) -> Result<()> {
        // Cascades to the concern's votes and comments.
        sqlx::query("DELETE FROM concerns WHERE id = ?1")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        Ok(())
    }
}

// SQLite Vote Repository
pub struct SqliteVoteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteVoteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

async fn adjust_counter(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    concern_id: i64,
    vote_type: VoteType,
    delta: i64,
    now: DateTime<Utc>,
) -> Result<()> {
    let sql = match vote_type {
        VoteType::Upvote => {
            "UPDATE concerns SET upvotes = MAX(upvotes + ?2, 0), updated_at = ?3 WHERE id = ?1"
        }
        VoteType::Downvote => {
            "UPDATE concerns SET downvotes = MAX(downvotes + ?2, 0), updated_at = ?3 WHERE id = ?1"
        }
    };
    sqlx::query(sql)
        .bind(concern_id)
        .bind(delta)
        .bind(now)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn tally_rows(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    concern_id: i64,
) -> Result<VoteTally> {
    let row = sqlx::query(
        r#"
        SELECT
            COALESCE(SUM(CASE WHEN vote_type = 'upvote' THEN 1 ELSE 0 END), 0) AS upvotes,
            COALESCE(SUM(CASE WHEN vote_type = 'downvote' THEN 1 ELSE 0 END), 0) AS downvotes
        FROM votes
        WHERE concern_id = ?1
        "#,
    )
    .bind(concern_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(VoteTally {
        upvotes: row.try_get("upvotes")?,
        downvotes: row.try_get("downvotes")?,
    })
}

#[async_trait]
impl VoteRepository for SqliteVoteRepository {
    async fn create_vote(&self, vote: &Vote) -> Result<Vote> {
        // UNIQUE(user_id, concern_id) turns a duplicate into Conflict.
        let result = sqlx::query(
            "INSERT INTO votes (user_id, concern_id, vote_type, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(vote.user_id)
        .bind(vote.concern_id)
        .bind(vote.vote_type.to_string())
        .bind(vote.created_at)
        .execute(&*self.pool)
        .await?;

        Ok(Vote {
            id: result.last_insert_rowid(),
            ..vote.clone()
        })
    }

    async fn get_vote(&self, user_id: i64, concern_id: i64) -> Result<Option<Vote>> {
        let row = sqlx::query(
            "SELECT id, user_id, concern_id, vote_type, created_at FROM votes WHERE user_id = ?1 AND concern_id = ?2",
        )
        .bind(user_id)
        .bind(concern_id)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_vote(&r)).transpose()
    }

    async fn cast_vote(&self, user_id: i64, concern_id: i64, vote_type: VoteType) -> Result<Vote> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let existing = sqlx::query(
            "SELECT id, vote_type, created_at FROM votes WHERE user_id = ?1 AND concern_id = ?2",
        )
        .bind(user_id)
        .bind(concern_id)
        .fetch_optional(&mut *tx)
        .await?;

        let vote = match existing {
            None => {
                // If two casts race past the SELECT, the uniqueness
                // constraint rejects the losing INSERT and the whole
                // transaction rolls back with Conflict.
                let result = sqlx::query(
                    "INSERT INTO votes (user_id, concern_id, vote_type, created_at) VALUES (?1, ?2, ?3, ?4)",
                )
                .bind(user_id)
                .bind(concern_id)
                .bind(vote_type.to_string())
                .bind(now)
                .execute(&mut *tx)
                .await?;

                adjust_counter(&mut tx, concern_id, vote_type, 1, now).await?;

                Vote {
                    id: result.last_insert_rowid(),
                    user_id,
                    concern_id,
                    vote_type,
                    created_at: now,
                }
            }
            Some(row) => {
                let id: i64 = row.try_get("id")?;
                let created_at: DateTime<Utc> = row.try_get("created_at")?;
                let current: VoteType = row.try_get::<String, _>("vote_type")?.parse()?;

                if current != vote_type {
                    sqlx::query("UPDATE votes SET vote_type = ?2 WHERE id = ?1")
                        .bind(id)
                        .bind(vote_type.to_string())
                        .execute(&mut *tx)
                        .await?;

                    adjust_counter(&mut tx, concern_id, current, -1, now).await?;
                    adjust_counter(&mut tx, concern_id, vote_type, 1, now).await?;
                }

                Vote {
                    id,
                    user_id,
                    concern_id,
                    vote_type,
                    created_at,
                }
            }
        };

        tx.commit().await?;
        tracing::debug!(
            "user {} cast {} on concern {}",
            user_id,
            vote.vote_type,
            concern_id
        );
        Ok(vote)
    }

    async fn retract_vote(&self, user_id: i64, concern_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let row = sqlx::query(
            "SELECT id, vote_type FROM votes WHERE user_id = ?1 AND concern_id = ?2",
        )
        .bind(user_id)
        .bind(concern_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "no vote by user {} on concern {}",
                user_id, concern_id
            ))
        })?;

        let id: i64 = row.try_get("id")?;
        let vote_type: VoteType = row.try_get::<String, _>("vote_type")?.parse()?;

        sqlx::query("DELETE FROM votes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        adjust_counter(&mut tx, concern_id, vote_type, -1, now).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn count_votes(&self, concern_id: i64) -> Result<VoteTally> {
        let row = sqlx::query(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN vote_type = 'upvote' THEN 1 ELSE 0 END), 0) AS upvotes,
                COALESCE(SUM(CASE WHEN vote_type = 'downvote' THEN 1 ELSE 0 END), 0) AS downvotes
            FROM votes
            WHERE concern_id = ?1
            "#,
        )
        .bind(concern_id)
        .fetch_one(&*self.pool)
        .await?;

        Ok(VoteTally {
            upvotes: row.try_get("upvotes")?,
            downvotes: row.try_get("downvotes")?,
        })
    }

    async fn sync_vote_counts(&self, concern_id: i64) -> Result<VoteTally> {
        let mut tx = self.pool.begin().await?;

        let tally = tally_rows(&mut tx, concern_id).await?;
        let result = sqlx::query(
            "UPDATE concerns SET upvotes = ?2, downvotes = ?3, updated_at = ?4 WHERE id = ?1",
        )
        .bind(concern_id)
        .bind(tally.upvotes)
        .bind(tally.downvotes)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "concern {} does not exist",
                concern_id
            )));
        }

        tx.commit().await?;
        Ok(tally)
    }
}

// SQLite Comment Repository
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create_comment(&self, comment: &Comment) -> Result<Comment> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (content, user_id, concern_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&comment.content)
        .bind(comment.user_id)
        .bind(comment.concern_id)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&*self.pool)
        .await?;

        Ok(Comment {
            id: result.last_insert_rowid(),
            ..comment.clone()
        })
    }

    async fn get_comment_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let row = sqlx::query(
            "SELECT id, content, user_id, concern_id, created_at, updated_at FROM comments WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_comment(&r)).transpose()
    }

    async fn list_comments_by_concern(&self, concern_id: i64) -> Result<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, content, user_id, concern_id, created_at, updated_at
            FROM comments
            WHERE concern_id = ?1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(concern_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_comment).collect()
    }

    async fn update_comment(&self, comment: &Comment) -> Result<Comment> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE comments SET content = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(now)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "comment {} does not exist",
                comment.id
            )));
        }

        Ok(Comment {
            updated_at: now,
            ..comment.clone()
        })
    }

    async fn delete_comment(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?1")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        Ok(())
    }
}

// SQLite Chat Session Repository
pub struct SqliteChatSessionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteChatSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatSessionRepository for SqliteChatSessionRepository {
    async fn create_session(&self, session: &ChatSession) -> Result<ChatSession> {
        let result = sqlx::query(
            "INSERT INTO chat_sessions (user_id, question, response, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(session.user_id)
        .bind(&session.question)
        .bind(&session.response)
        .bind(session.created_at)
        .execute(&*self.pool)
        .await?;

        Ok(ChatSession {
            id: result.last_insert_rowid(),
            ..session.clone()
        })
    }

    async fn get_session_by_id(&self, id: i64) -> Result<Option<ChatSession>> {
        let row = sqlx::query(
            "SELECT id, user_id, question, response, created_at FROM chat_sessions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_session(&r)).transpose()
    }

    async fn list_sessions_by_user(&self, user_id: i64) -> Result<Vec<ChatSession>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, question, response, created_at
            FROM chat_sessions
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_session).collect()
    }

    async fn delete_session(&self, id: i64) -> Result<()> {
        // Feedback outlives the session: detach it before deleting.
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE feedback SET chat_session_id = NULL WHERE chat_session_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM chat_sessions WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

// SQLite Feedback Repository
pub struct SqliteFeedbackRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteFeedbackRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for SqliteFeedbackRepository {
    async fn create_feedback(&self, feedback: &Feedback) -> Result<Feedback> {
        let result = sqlx::query(
            r#"
            INSERT INTO feedback (user_id, chat_session_id, question, feedback_text, sentiment, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(feedback.user_id)
        .bind(feedback.chat_session_id)
        .bind(&feedback.question)
        .bind(&feedback.feedback_text)
        .bind(feedback.sentiment.to_string())
        .bind(feedback.created_at)
        .execute(&*self.pool)
        .await?;

        Ok(Feedback {
            id: result.last_insert_rowid(),
            ..feedback.clone()
        })
    }

    async fn get_feedback_by_id(&self, id: i64) -> Result<Option<Feedback>> {
        let row = sqlx::query(
            "SELECT id, user_id, chat_session_id, question, feedback_text, sentiment, created_at FROM feedback WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        row.map(|r| map_feedback(&r)).transpose()
    }

    async fn list_feedback_by_user(&self, user_id: i64) -> Result<Vec<Feedback>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, chat_session_id, question, feedback_text, sentiment, created_at
            FROM feedback
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_feedback).collect()
    }

    async fn list_feedback_by_session(&self, chat_session_id: i64) -> Result<Vec<Feedback>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, chat_session_id, question, feedback_text, sentiment, created_at
            FROM feedback
            WHERE chat_session_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(chat_session_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(map_feedback).collect()
    }

    async fn delete_feedback(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM feedback WHERE id = ?1")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        Ok(())
    }
}
