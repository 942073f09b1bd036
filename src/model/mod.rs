mod database;
pub use database::DbConnection;

pub mod entity;

mod error;
pub use error::{DatabaseError, DatabaseResult};

pub mod seed;

use sqlx::PgPool;

/// Labels the table a failed query was touching, for error reporting.
#[derive(Debug, Clone)]
pub enum ResourceType {
    User,
    Subject,
    Subtopic,
    Lesson,
    Quiz,
    Question,
    Progress,
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

#[derive(Debug, Clone)]
pub struct ModelManager {
    database: DbConnection,
}

impl ModelManager {
    pub fn new(conn: DbConnection) -> Self {
        Self { database: conn }
    }

    pub fn executor(&self) -> &PgPool {
        self.database.pool()
    }
}
