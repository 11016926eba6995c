use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::auth::repo_types::{NewUser, User};
use crate::qa::repo_types::{Answer, NewAnswer, NewQuestion, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index (username, email) would have been duplicated.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::ConstraintViolation(db_err.message().to_string())
            }
            _ => StoreError::Database(e),
        }
    }
}

/// Persistent access to users, questions and answers, handed to every handler.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError>;
    async fn insert_user(&self, new: &NewUser) -> Result<User, StoreError>;
    async fn count_users(&self) -> Result<i64, StoreError>;
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, StoreError>;
    async fn questions_by_user(&self, user_id: i64) -> Result<Vec<Question>, StoreError>;
    async fn insert_answer(&self, new: &NewAnswer) -> Result<Answer, StoreError>;
    async fn answers_by_user(&self, user_id: i64) -> Result<Vec<Answer>, StoreError>;
}

#[derive(Clone)]
pub struct SqliteStore {
    db: SqlitePool,
}

impl SqliteStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(User::find_by_username_or_email(&self.db, username, email).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(User::find_by_email(&self.db, email).await?)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(User::find_by_id(&self.db, id).await?)
    }

    async fn insert_user(&self, new: &NewUser) -> Result<User, StoreError> {
        Ok(User::create(&self.db, new).await?)
    }

    async fn count_users(&self) -> Result<i64, StoreError> {
        Ok(User::count(&self.db).await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(User::list_all(&self.db).await?)
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        Ok(Question::create(&self.db, new).await?)
    }

    async fn questions_by_user(&self, user_id: i64) -> Result<Vec<Question>, StoreError> {
        Ok(Question::list_by_user(&self.db, user_id).await?)
    }

    async fn insert_answer(&self, new: &NewAnswer) -> Result<Answer, StoreError> {
        Ok(Answer::create(&self.db, new).await?)
    }

    async fn answers_by_user(&self, user_id: i64) -> Result<Vec<Answer>, StoreError> {
        Ok(Answer::list_by_user(&self.db, user_id).await?)
    }
}
