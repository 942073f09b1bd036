use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use uuid::Uuid;

use crate::model::{ModelManager, ResourceTyped, error::DatabaseResult};

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Subtopic {
    id: Uuid,
    name: String,
    subject_id: Uuid,
    position: i32,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SubtopicCreate {
    pub name: String,
    pub subject_id: Uuid,
    pub position: i32,
}

impl ResourceTyped for Subtopic {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Subtopic
    }
}

impl Subtopic {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub async fn create(mm: &ModelManager, data: SubtopicCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO subtopics (id, name, subject_id, position) VALUES ($1,$2,$3,$4) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(data.subject_id)
        .bind(data.position)
        .fetch_one(mm.executor())
        .await?;

        let id = result.try_get("id")?;
        Ok(Subtopic {
            id,
            name: data.name,
            subject_id: data.subject_id,
            position: data.position,
        })
    }
}
