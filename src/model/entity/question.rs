use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use uuid::Uuid;

use crate::model::{ModelManager, ResourceTyped, error::DatabaseResult};

/// `answer` is a zero-based index into `options`. The range is not checked
/// anywhere; an out-of-range value makes the question unscorable on the
/// client.
#[derive(Debug, Serialize, Deserialize, FromRow, utoipa::ToSchema)]
pub struct Question {
    id: Uuid,
    text: String,
    options: Vec<String>,
    answer: i32,
    quiz_id: Uuid,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct QuestionCreate {
    pub text: String,
    pub options: Vec<String>,
    pub answer: i32,
    pub quiz_id: Uuid,
}

impl ResourceTyped for Question {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Question
    }
}

impl Question {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn create(mm: &ModelManager, data: QuestionCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            "INSERT INTO questions (id, text, options, answer, quiz_id) VALUES ($1,$2,$3,$4,$5) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(&data.text)
        .bind(&data.options)
        .bind(data.answer)
        .bind(data.quiz_id)
        .fetch_one(mm.executor())
        .await?;

        let id = result.try_get("id")?;
        Ok(Question {
            id,
            text: data.text,
            options: data.options,
            answer: data.answer,
            quiz_id: data.quiz_id,
        })
    }
}
