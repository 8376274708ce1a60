use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::DomainError;

/// Membership of a user in an organization. One row per (organization, user).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "organization_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub organization_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    pub role: Role,
    pub status: MemberStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role of a member within an organization.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "organization_role")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,

    #[sea_orm(string_value = "officer")]
    Officer,

    #[sea_orm(string_value = "member")]
    Member,
}

/// Lifecycle state of a membership. Only `active` members hold their role's
/// permissions.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "organization_member_status"
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MemberStatus {
    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "inactive")]
    Inactive,

    #[sea_orm(string_value = "pending")]
    Pending,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn add(
        db: &DatabaseConnection,
        organization_id: i64,
        user_id: i64,
        role: Role,
        status: MemberStatus,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let member = ActiveModel {
            organization_id: Set(organization_id),
            user_id: Set(user_id),
            role: Set(role),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match member.insert(db).await {
            Ok(member) => Ok(member),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
                DomainError::Conflict("User is already a member of this organization".to_owned()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find(
        db: &DatabaseConnection,
        organization_id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id((organization_id, user_id)).one(db).await
    }

    /// The caller's effective membership: the row, only while `active`.
    pub async fn find_active(
        db: &DatabaseConnection,
        organization_id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id((organization_id, user_id))
            .filter(Column::Status.eq(MemberStatus::Active))
            .one(db)
            .await
    }

    pub async fn list_for_organization(
        db: &DatabaseConnection,
        organization_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn list_for_user(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn set_role(
        db: &DatabaseConnection,
        organization_id: i64,
        user_id: i64,
        role: Role,
    ) -> Result<Self, DomainError> {
        let Some(member) = Self::find(db, organization_id, user_id).await? else {
            return Err(DomainError::NotFound("Membership"));
        };
        let mut member: ActiveModel = member.into();
        member.role = Set(role);
        member.updated_at = Set(Utc::now());
        Ok(member.update(db).await?)
    }

    pub async fn set_status(
        db: &DatabaseConnection,
        organization_id: i64,
        user_id: i64,
        status: MemberStatus,
    ) -> Result<Self, DomainError> {
        let Some(member) = Self::find(db, organization_id, user_id).await? else {
            return Err(DomainError::NotFound("Membership"));
        };
        let mut member: ActiveModel = member.into();
        member.status = Set(status);
        member.updated_at = Set(Utc::now());
        Ok(member.update(db).await?)
    }

    pub async fn remove(
        db: &DatabaseConnection,
        organization_id: i64,
        user_id: i64,
    ) -> Result<(), DomainError> {
        let Some(member) = Self::find(db, organization_id, user_id).await? else {
            return Err(DomainError::NotFound("Membership"));
        };
        let member: ActiveModel = member.into();
        member.delete(db).await?;
        Ok(())
    }
}
