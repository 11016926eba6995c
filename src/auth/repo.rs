use crate::auth::repo_types::{NewUser, User};
use sqlx::SqlitePool;

impl User {
    /// Find a user whose username or email matches.
    pub async fn find_by_username_or_email(
        db: &SqlitePool,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, is_admin, profile_photo
            FROM users
            WHERE username = ?1 OR email = ?2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by exact email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, is_admin, profile_photo
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, is_admin, profile_photo
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user; the unique indexes on username and email reject duplicates.
    pub async fn create(db: &SqlitePool, new: &NewUser) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password, is_admin, profile_photo)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, username, email, password, is_admin, profile_photo
            "#,
        )
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.is_admin)
        .bind(&new.profile_photo)
        .fetch_one(db)
        .await
    }

    pub async fn count(db: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;
        Ok(count)
    }

    pub async fn list_all(db: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, is_admin, profile_photo
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }
}
