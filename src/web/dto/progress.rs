use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{DatabaseResult, entity::ProgressWithContextRow};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectBrief {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicContext {
    pub id: Uuid,
    pub name: String,
    pub subject_id: Uuid,
    pub subject: SubjectBrief,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonContext {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub subtopic_id: Uuid,
    pub subtopic: SubtopicContext,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressWithContext {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub score: i32,
    pub updated_at: DateTime<Utc>,
    pub lesson: LessonContext,
}

impl TryFrom<ProgressWithContextRow> for ProgressWithContext {
    type Error = serde_json::Error;

    fn try_from(row: ProgressWithContextRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            lesson_id: row.lesson_id,
            completed: row.completed,
            score: row.score,
            updated_at: row.updated_at,
            lesson: serde_json::from_value(row.lesson)?,
        })
    }
}

impl ProgressWithContext {
    pub fn from_rows(rows: Vec<ProgressWithContextRow>) -> DatabaseResult<Vec<Self>> {
        Ok(rows
            .into_iter()
            .map(ProgressWithContext::try_from)
            .collect::<Result<_, _>>()?)
    }
}
