use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use uuid::Uuid;

use crate::model::{ModelManager, ResourceTyped, error::DatabaseResult};

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Lesson {
    id: Uuid,
    title: String,
    content: String,
    subtopic_id: Uuid,
    position: i32,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LessonCreate {
    pub title: String,
    pub content: String,
    pub subtopic_id: Uuid,
    pub position: i32,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Lesson
    }
}

impl Lesson {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtopic_id(&self) -> Uuid {
        self.subtopic_id
    }

    pub async fn create(mm: &ModelManager, data: LessonCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO lessons (id, title, content, subtopic_id, position) VALUES ($1,$2,$3,$4,$5) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.subtopic_id)
        .bind(data.position)
        .fetch_one(mm.executor())
        .await?;

        let id = result.try_get("id")?;
        Ok(Lesson {
            id,
            title: data.title,
            content: data.content,
            subtopic_id: data.subtopic_id,
            position: data.position,
        })
    }
}

// Utils

/// Lesson with its quizzes (and their questions) as one JSON column.
/// A lesson without quizzes comes back with an empty array.
#[derive(Debug, FromRow)]
pub struct LessonDetailRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub subtopic_id: Uuid,
    pub quizzes: serde_json::Value,
}

impl LessonDetailRow {
    pub async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let row = sqlx::query_as(
            r#"
            SELECT
                l.id,
                l.title,
                l.content,
                l.subtopic_id,
                COALESCE((
                    SELECT json_agg(json_build_object(
                        'id', q.id,
                        'title', q.title,
                        'lessonId', q.lesson_id,
                        'questions', COALESCE((
                            SELECT json_agg(json_build_object(
                                'id', qs.id,
                                'text', qs.text,
                                'options', qs.options,
                                'answer', qs.answer,
                                'quizId', qs.quiz_id
                            ))
                            FROM questions qs
                            WHERE qs.quiz_id = q.id
                        ), '[]'::json)
                    ))
                    FROM quizzes q
                    WHERE q.lesson_id = l.id
                ), '[]'::json) AS quizzes
            FROM lessons l
            WHERE l.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(mm.executor())
        .await?;

        Ok(row)
    }
}
