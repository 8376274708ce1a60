use db::models::organization::Model as OrganizationModel;
use serde::Serialize;

/// Organization shape returned by this route group.
#[derive(Debug, Serialize, Default)]
pub struct OrganizationItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrganizationModel> for OrganizationItem {
    fn from(org: OrganizationModel) -> Self {
        Self {
            id: org.id,
            name: org.name,
            description: org.description,
            logo: org.logo,
            created_at: org.created_at.to_rfc3339(),
            updated_at: org.updated_at.to_rfc3339(),
        }
    }
}
