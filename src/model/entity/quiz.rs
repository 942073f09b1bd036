use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use uuid::Uuid;

use crate::model::{ModelManager, ResourceTyped, error::DatabaseResult};

#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Quiz {
    id: Uuid,
    title: String,
    lesson_id: Uuid,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct QuizCreate {
    pub title: String,
    pub lesson_id: Uuid,
}

impl ResourceTyped for Quiz {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Quiz
    }
}

impl Quiz {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn lesson_id(&self) -> Uuid {
        self.lesson_id
    }

    pub async fn create(mm: &ModelManager, data: QuizCreate) -> DatabaseResult<Self> {
        let result =
            sqlx::query("INSERT INTO quizzes (id, title, lesson_id) VALUES ($1,$2,$3) RETURNING id")
                .bind(Uuid::new_v4())
                .bind(&data.title)
                .bind(data.lesson_id)
                .fetch_one(mm.executor())
                .await?;

        let id = result.try_get("id")?;
        Ok(Quiz {
            id,
            title: data.title,
            lesson_id: data.lesson_id,
        })
    }
}
