use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub body: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub question_id: Option<i64>, // not a foreign key
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub body: Option<String>,
    pub question_id: Option<i64>,
    pub user_id: i64,
}
