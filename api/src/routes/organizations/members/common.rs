use db::models::organization_member::{MemberStatus, Model as MemberModel, Role};
use db::models::user::Model as UserModel;
use serde::Serialize;

/// Membership shape returned by this route group. Username and email come
/// from the joined user row when it is still present.
#[derive(Debug, Serialize)]
pub struct MemberItem {
    pub user_id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub status: MemberStatus,
    pub joined_at: String,
    pub updated_at: String,
}

impl MemberItem {
    pub fn from_parts(member: MemberModel, user: Option<UserModel>) -> Self {
        let (username, email) = match user {
            Some(u) => (Some(u.username), Some(u.email)),
            None => (None, None),
        };
        Self {
            user_id: member.user_id,
            username,
            email,
            role: member.role,
            status: member.status,
            joined_at: member.created_at.to_rfc3339(),
            updated_at: member.updated_at.to_rfc3339(),
        }
    }
}

impl From<MemberModel> for MemberItem {
    fn from(member: MemberModel) -> Self {
        Self::from_parts(member, None)
    }
}

impl Default for MemberItem {
    fn default() -> Self {
        Self {
            user_id: 0,
            username: None,
            email: None,
            role: Role::Member,
            status: MemberStatus::Pending,
            joined_at: String::new(),
            updated_at: String::new(),
        }
    }
}
