use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            avatar_url: user.avatar_url,
        }
    }
}
