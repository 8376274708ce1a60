use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, SqlErr};
use serde::Serialize;

use crate::error::DomainError;
use crate::models::organization_member::{self, MemberStatus, Role};

/// A tenant organization. Events, members and subscriptions hang off this.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique display name.
    pub name: String,
    pub description: Option<String>,
    /// Logo URL, if any.
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organization_member::Entity")]
    Members,
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscriptions,
}

impl Related<super::organization_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates an organization and makes the creator an active admin member.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        description: Option<&str>,
        logo: Option<&str>,
        created_by: i64,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let org = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            logo: Set(logo.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let org = match org.insert(db).await {
            Ok(org) => org,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(DomainError::Conflict(format!(
                    "An organization named '{name}' already exists"
                )));
            }
            Err(e) => return Err(e.into()),
        };

        organization_member::Model::add(db, org.id, created_by, Role::Admin, MemberStatus::Active)
            .await?;

        Ok(org)
    }

    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        description: Option<&str>,
        logo: Option<&str>,
    ) -> Result<Self, DomainError> {
        let Some(org) = Entity::find_by_id(id).one(db).await? else {
            return Err(DomainError::NotFound("Organization"));
        };

        let mut org: ActiveModel = org.into();
        org.name = Set(name.to_owned());
        org.description = Set(description.map(str::to_owned));
        org.logo = Set(logo.map(str::to_owned));
        org.updated_at = Set(Utc::now());

        match org.update(db).await {
            Ok(org) => Ok(org),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
                DomainError::Conflict(format!("An organization named '{name}' already exists")),
            ),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user;
    use crate::test_utils::setup_test_db;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_create_makes_creator_admin() {
        let db = setup_test_db().await;
        let user = user::Model::create(&db, "founder", "founder@example.com", "password1", false)
            .await
            .unwrap();

        let org = Model::create(&db, "Chess Club", Some("We play chess"), None, user.id)
            .await
            .unwrap();

        let membership = organization_member::Model::find(&db, org.id, user.id)
            .await
            .unwrap()
            .expect("creator should have a membership row");
        assert_eq!(membership.role, Role::Admin);
        assert_eq!(membership.status, MemberStatus::Active);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let db = setup_test_db().await;
        let user = user::Model::create(&db, "founder", "founder@example.com", "password1", false)
            .await
            .unwrap();

        Model::create(&db, "Chess Club", None, None, user.id)
            .await
            .unwrap();
        let dup = Model::create(&db, "Chess Club", None, None, user.id).await;
        assert!(matches!(dup, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_cascades_members() {
        let db = setup_test_db().await;
        let user = user::Model::create(&db, "founder", "founder@example.com", "password1", false)
            .await
            .unwrap();
        let org = Model::create(&db, "Chess Club", None, None, user.id)
            .await
            .unwrap();

        Entity::delete_by_id(org.id).exec(&db).await.unwrap();

        let membership = organization_member::Model::find(&db, org.id, user.id)
            .await
            .unwrap();
        assert!(membership.is_none());
    }
}
