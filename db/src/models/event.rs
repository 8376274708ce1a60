use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::DomainError;

/// An organization's event. Attendance is recorded against these rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: EventStatus,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub location: Option<String>,
    /// Banner image URL, if any.
    pub banner: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle of an event. Only `active` events accept check-ins.
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EventStatus {
    #[sea_orm(string_value = "draft")]
    Draft,

    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "completed")]
    Completed,

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

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    Creator,

    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[allow(clippy::too_many_arguments)]
impl Model {
    /// Whether check-ins against this event are currently allowed.
    pub fn accepts_checkins(&self) -> bool {
        self.status == EventStatus::Active
    }

    pub async fn create(
        db: &DatabaseConnection,
        organization_id: i64,
        name: &str,
        description: Option<&str>,
        start_datetime: DateTime<Utc>,
        end_datetime: DateTime<Utc>,
        location: Option<&str>,
        banner: Option<&str>,
        created_by: i64,
    ) -> Result<Self, DomainError> {
        if end_datetime <= start_datetime {
            return Err(DomainError::InvalidDateRange);
        }

        let now = Utc::now();
        let event = ActiveModel {
            organization_id: Set(organization_id),
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            status: Set(EventStatus::Draft),
            start_datetime: Set(start_datetime),
            end_datetime: Set(end_datetime),
            location: Set(location.map(str::to_owned)),
            banner: Set(banner.map(str::to_owned)),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(event.insert(db).await?)
    }

    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        description: Option<&str>,
        status: EventStatus,
        start_datetime: DateTime<Utc>,
        end_datetime: DateTime<Utc>,
        location: Option<&str>,
        banner: Option<&str>,
    ) -> Result<Self, DomainError> {
        if end_datetime <= start_datetime {
            return Err(DomainError::InvalidDateRange);
        }

        let Some(event) = Entity::find_by_id(id).one(db).await? else {
            return Err(DomainError::NotFound("Event"));
        };

        let mut event: ActiveModel = event.into();
        event.name = Set(name.to_owned());
        event.description = Set(description.map(str::to_owned));
        event.status = Set(status);
        event.start_datetime = Set(start_datetime);
        event.end_datetime = Set(end_datetime);
        event.location = Set(location.map(str::to_owned));
        event.banner = Set(banner.map(str::to_owned));
        event.updated_at = Set(Utc::now());
        Ok(event.update(db).await?)
    }

    pub async fn set_status(
        db: &DatabaseConnection,
        id: i64,
        status: EventStatus,
    ) -> Result<Self, DomainError> {
        let Some(event) = Entity::find_by_id(id).one(db).await? else {
            return Err(DomainError::NotFound("Event"));
        };
        let mut event: ActiveModel = event.into();
        event.status = Set(status);
        event.updated_at = Set(Utc::now());
        Ok(event.update(db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{organization, user};
    use crate::test_utils::setup_test_db;
    use chrono::Duration;

    async fn seed_org(db: &DatabaseConnection) -> (organization::Model, user::Model) {
        let founder = user::Model::create(db, "founder", "founder@example.com", "password1", false)
            .await
            .unwrap();
        let org = organization::Model::create(db, "Debate Union", None, None, founder.id)
            .await
            .unwrap();
        (org, founder)
    }

    #[tokio::test]
    async fn test_create_defaults_to_draft() {
        let db = setup_test_db().await;
        let (org, founder) = seed_org(&db).await;
        let start = Utc::now();

        let event = Model::create(
            &db,
            org.id,
            "Opening Social",
            Some("Semester kickoff"),
            start,
            start + Duration::hours(2),
            Some("Great Hall"),
            None,
            founder.id,
        )
        .await
        .unwrap();

        assert_eq!(event.status, EventStatus::Draft);
        assert!(!event.accepts_checkins());
    }

    #[tokio::test]
    async fn test_rejects_backwards_date_range() {
        let db = setup_test_db().await;
        let (org, founder) = seed_org(&db).await;
        let start = Utc::now();

        let result = Model::create(
            &db,
            org.id,
            "Backwards",
            None,
            start,
            start - Duration::minutes(1),
            None,
            None,
            founder.id,
        )
        .await;
        assert!(matches!(result, Err(DomainError::InvalidDateRange)));
    }

    #[tokio::test]
    async fn test_only_active_accepts_checkins() {
        let db = setup_test_db().await;
        let (org, founder) = seed_org(&db).await;
        let start = Utc::now();

        let event = Model::create(
            &db,
            org.id,
            "AGM",
            None,
            start,
            start + Duration::hours(1),
            None,
            None,
            founder.id,
        )
        .await
        .unwrap();

        let active = Model::set_status(&db, event.id, EventStatus::Active)
            .await
            .unwrap();
        assert!(active.accepts_checkins());

        for status in [
            EventStatus::Draft,
            EventStatus::Completed,
            EventStatus::Cancelled,
        ] {
            let updated = Model::set_status(&db, event.id, status).await.unwrap();
            assert!(!updated.accepts_checkins());
        }
    }
}
