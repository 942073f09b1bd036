use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::model::{ModelManager, ResourceTyped, error::DatabaseResult};

/// At most one row exists per (user, lesson); the unique constraint plus
/// the upsert below enforce it without any read-then-write window.
#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    id: Uuid,
    user_id: Uuid,
    lesson_id: Uuid,
    completed: bool,
    score: i32,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ProgressUpsert {
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub score: i32,
}

impl ResourceTyped for Progress {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Progress
    }
}

impl Progress {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn lesson_id(&self) -> Uuid {
        self.lesson_id
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    /// Insert-or-update in one statement, keyed on (user_id, lesson_id).
    /// Two concurrent submissions for the same pair race on the constraint,
    /// not on application code, so one row always survives.
    pub async fn upsert(mm: &ModelManager, data: ProgressUpsert) -> DatabaseResult<Self> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO progress (id, user_id, lesson_id, completed, score, updated_at)
            VALUES ($1, $2, $3, $4, $5, now())
            ON CONFLICT (user_id, lesson_id) DO UPDATE
                SET completed = EXCLUDED.completed,
                    score = EXCLUDED.score,
                    updated_at = now()
            RETURNING id, user_id, lesson_id, completed, score, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.lesson_id)
        .bind(data.completed)
        .bind(data.score)
        .fetch_one(mm.executor())
        .await?;

        Ok(row)
    }
}

// Utils

/// Progress row joined with its lesson, subtopic and subject, the context
/// the client needs to render the history list. Most recently updated
/// first.
#[derive(Debug, FromRow)]
pub struct ProgressWithContextRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub score: i32,
    pub updated_at: DateTime<Utc>,
    pub lesson: serde_json::Value,
}

impl ProgressWithContextRow {
    pub async fn fetch_all_for_user(mm: &ModelManager, user_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query_as(
            r#"
            SELECT
                p.id,
                p.user_id,
                p.lesson_id,
                p.completed,
                p.score,
                p.updated_at,
                json_build_object(
                    'id', l.id,
                    'title', l.title,
                    'content', l.content,
                    'subtopicId', l.subtopic_id,
                    'subtopic', json_build_object(
                        'id', st.id,
                        'name', st.name,
                        'subjectId', st.subject_id,
                        'subject', json_build_object(
                            'id', s.id,
                            'name', s.name,
                            'description', s.description,
                            'icon', s.icon,
                            'color', s.color
                        )
                    )
                ) AS lesson
            FROM progress p
            JOIN lessons l ON l.id = p.lesson_id
            JOIN subtopics st ON st.id = l.subtopic_id
            JOIN subjects s ON s.id = st.subject_id
            WHERE p.user_id = $1
            ORDER BY p.updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(mm.executor())
        .await?;

        Ok(rows)
    }
}
