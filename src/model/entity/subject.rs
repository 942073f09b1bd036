use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use uuid::Uuid;

use crate::model::{ModelManager, ResourceTyped, error::DatabaseResult};

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Subject {
    id: Uuid,
    name: String,
    description: String,
    icon: String,
    color: String,
    position: i32,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SubjectCreate {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub position: i32,
}

impl ResourceTyped for Subject {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Subject
    }
}

impl Subject {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn create(mm: &ModelManager, data: SubjectCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO subjects (id, name, description, icon, color, position) VALUES ($1,$2,$3,$4,$5,$6) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.icon)
        .bind(&data.color)
        .bind(data.position)
        .fetch_one(mm.executor())
        .await?;

        let id = result.try_get("id")?;
        Ok(Subject {
            id,
            name: data.name,
            description: data.description,
            icon: data.icon,
            color: data.color,
            position: data.position,
        })
    }

    pub async fn find_by_name(mm: &ModelManager, name: &str) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM subjects WHERE name = $1")
            .bind(name)
            .fetch_one(mm.executor())
            .await;
        if let Err(sqlx::Error::RowNotFound) = result {
            return Ok(None);
        }
        Ok(Some(result?))
    }
}

// Utils

/// One row per subject annotated with how many subtopics hang off it.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SubjectWithCountRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub subtopic_count: i64,
}

impl SubjectWithCountRow {
    pub async fn fetch_all(mm: &ModelManager) -> DatabaseResult<Vec<Self>> {
        let rows = sqlx::query_as(
            r#"
            SELECT
                s.id,
                s.name,
                s.description,
                s.icon,
                s.color,
                COUNT(st.id) AS subtopic_count
            FROM subjects s
            LEFT JOIN subtopics st ON st.subject_id = s.id
            GROUP BY s.id
            ORDER BY s.position, s.name
            "#,
        )
        .fetch_all(mm.executor())
        .await?;

        Ok(rows)
    }
}

/// Subject with its subtopics and their lessons collected into one JSON
/// column, so the whole tree comes back in a single round trip.
#[derive(Debug, FromRow)]
pub struct SubjectDetailRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub subtopics: serde_json::Value,
}

impl SubjectDetailRow {
    pub async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let row = sqlx::query_as(
            r#"
            SELECT
                s.id,
                s.name,
                s.description,
                s.icon,
                s.color,
                COALESCE((
                    SELECT json_agg(json_build_object(
                        'id', st.id,
                        'name', st.name,
                        'subjectId', st.subject_id,
                        'lessons', COALESCE((
                            SELECT json_agg(json_build_object(
                                'id', l.id,
                                'title', l.title,
                                'content', l.content,
                                'subtopicId', l.subtopic_id
                            ) ORDER BY l.position, l.title)
                            FROM lessons l
                            WHERE l.subtopic_id = st.id
                        ), '[]'::json)
                    ) ORDER BY st.position, st.name)
                    FROM subtopics st
                    WHERE st.subject_id = s.id
                ), '[]'::json) AS subtopics
            FROM subjects s
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(mm.executor())
        .await?;

        Ok(row)
    }
}
