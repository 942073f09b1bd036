use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::{SubjectDetailRow, SubjectWithCountRow};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub subtopic_count: i64,
}

impl From<SubjectWithCountRow> for SubjectSummary {
    fn from(row: SubjectWithCountRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            icon: row.icon,
            color: row.color,
            subtopic_count: row.subtopic_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonInSubject {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub subtopic_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicWithLessons {
    pub id: Uuid,
    pub name: String,
    pub subject_id: Uuid,
    pub lessons: Vec<LessonInSubject>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub subtopics: Vec<SubtopicWithLessons>,
}

impl TryFrom<SubjectDetailRow> for SubjectDetail {
    type Error = serde_json::Error;

    fn try_from(row: SubjectDetailRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            icon: row.icon,
            color: row.color,
            subtopics: serde_json::from_value(row.subtopics)?,
        })
    }
}
