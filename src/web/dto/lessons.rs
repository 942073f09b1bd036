use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::LessonDetailRow;

/// `answer` is exposed as seeded; the client scores quizzes locally.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFull {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    pub answer: i32,
    pub quiz_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizWithQuestions {
    pub id: Uuid,
    pub title: String,
    pub lesson_id: Uuid,
    pub questions: Vec<QuestionFull>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonDetail {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub subtopic_id: Uuid,
    pub quizzes: Vec<QuizWithQuestions>,
}

impl TryFrom<LessonDetailRow> for LessonDetail {
    type Error = serde_json::Error;

    fn try_from(row: LessonDetailRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            title: row.title,
            content: row.content,
            subtopic_id: row.subtopic_id,
            quizzes: serde_json::from_value(row.quizzes)?,
        })
    }
}
