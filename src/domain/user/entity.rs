// src/domain/user/entity.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
