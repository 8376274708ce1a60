use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::DomainError;

/// A paid membership period for an organization.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub organization_id: i64,
    pub duration_months: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub payment_amount: f64,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "subscription_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SubscriptionStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "expired")]
    Expired,

    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        organization_id: i64,
        duration_months: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        payment_amount: f64,
    ) -> Result<Self, DomainError> {
        if end_date <= start_date {
            return Err(DomainError::InvalidDateRange);
        }

        let now = Utc::now();
        let sub = ActiveModel {
            organization_id: Set(organization_id),
            duration_months: Set(duration_months),
            start_date: Set(start_date),
            end_date: Set(end_date),
            payment_amount: Set(payment_amount),
            status: Set(SubscriptionStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(sub.insert(db).await?)
    }

    pub async fn set_status(
        db: &DatabaseConnection,
        id: i64,
        status: SubscriptionStatus,
    ) -> Result<Self, DomainError> {
        let Some(sub) = Entity::find_by_id(id).one(db).await? else {
            return Err(DomainError::NotFound("Subscription"));
        };
        let mut sub: ActiveModel = sub.into();
        sub.status = Set(status);
        sub.updated_at = Set(Utc::now());
        Ok(sub.update(db).await?)
    }

    pub async fn list_for_organization(
        db: &DatabaseConnection,
        organization_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .order_by_desc(Column::StartDate)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{organization, user};
    use crate::test_utils::setup_test_db;
    use chrono::Duration;

    async fn seed_org(db: &DatabaseConnection) -> organization::Model {
        let founder = user::Model::create(db, "founder", "founder@example.com", "password1", false)
            .await
            .unwrap();
        organization::Model::create(db, "Hiking Club", None, None, founder.id)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_activate() {
        let db = setup_test_db().await;
        let org = seed_org(&db).await;
        let start = Utc::now();

        let sub = Model::create(&db, org.id, 6, start, start + Duration::days(182), 150.0)
            .await
            .unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Pending);

        let sub = Model::set_status(&db, sub.id, SubscriptionStatus::Active)
            .await
            .unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn test_end_date_must_follow_start_date() {
        let db = setup_test_db().await;
        let org = seed_org(&db).await;
        let start = Utc::now();

        let result = Model::create(&db, org.id, 1, start, start, 50.0).await;
        assert!(matches!(result, Err(DomainError::InvalidDateRange)));

        let result = Model::create(&db, org.id, 1, start, start - Duration::days(30), 50.0).await;
        assert!(matches!(result, Err(DomainError::InvalidDateRange)));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let db = setup_test_db().await;
        let org = seed_org(&db).await;
        let start = Utc::now();

        Model::create(
            &db,
            org.id,
            1,
            start - Duration::days(60),
            start - Duration::days(30),
            50.0,
        )
        .await
        .unwrap();
        Model::create(&db, org.id, 1, start, start + Duration::days(30), 50.0)
            .await
            .unwrap();

        let subs = Model::list_for_organization(&db, org.id).await.unwrap();
        assert_eq!(subs.len(), 2);
        assert!(subs[0].start_date > subs[1].start_date);
    }
}
