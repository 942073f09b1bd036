use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::UserEntity;

/// The public slice of a user record. The password hash never crosses the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&UserEntity> for UserPublic {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id(),
            email: user.email().to_string(),
            name: user.name().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserPublic,
}
