use serde::Serialize;
use time::OffsetDateTime;

use crate::auth::dto::PublicUser;
use crate::qa::repo_types::{Answer, Question};

#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Question> for QuestionItem {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            title: q.title,
            body: q.body,
            created_at: q.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerItem {
    pub id: i64,
    pub body: Option<String>,
    pub question_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Answer> for AnswerItem {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            body: a.body,
            question_id: a.question_id,
            created_at: a.created_at,
        }
    }
}

/// A user's public fields together with everything they authored.
#[derive(Debug, Serialize)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: PublicUser,
    pub questions: Vec<QuestionItem>,
    pub answers: Vec<AnswerItem>,
}
