use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `users` table. Never serialized: the password hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    /// Argon2id PHC string
    pub user_password: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
