use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::qa::repo_types::{Answer, NewAnswer, NewQuestion, Question};

impl Question {
    pub async fn create(db: &SqlitePool, new: &NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (title, body, created_at, user_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, body, created_at, user_id
            "#,
        )
        .bind(&new.title)
        .bind(&new.body)
        .bind(OffsetDateTime::now_utc())
        .bind(new.user_id)
        .fetch_one(db)
        .await
    }

    /// All questions authored by `user_id`, oldest first.
    pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, body, created_at, user_id
            FROM questions
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}

impl Answer {
    pub async fn create(db: &SqlitePool, new: &NewAnswer) -> Result<Answer, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (body, created_at, question_id, user_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, body, created_at, question_id, user_id
            "#,
        )
        .bind(&new.body)
        .bind(OffsetDateTime::now_utc())
        .bind(new.question_id)
        .bind(new.user_id)
        .fetch_one(db)
        .await
    }

    /// All answers authored by `user_id`, oldest first.
    pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Answer>, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, body, created_at, question_id, user_id
            FROM answers
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
