use db::models::user::Model as UserModel;
use serde::Serialize;

/// User shape returned by the admin surface. Never carries the password hash.
#[derive(Debug, Serialize, Default)]
pub struct UserItem {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserModel> for UserItem {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            admin: user.admin,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}
