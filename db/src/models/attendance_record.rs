use chrono::{DateTime, Utc};
use common::qr::StudentIdentity;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::event;

/// One attendance row per (event, student). The pair moves through
/// not-present -> timed-in -> timed-out and never goes back.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub event_id: i64,
    pub student_id: String,
    /// Name snapshot taken from the scanned payload at check-in time.
    pub first_name: String,
    pub last_name: String,
    pub time_in: Option<DateTime<Utc>>,
    pub time_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Business outcomes of the check-in/check-out flow. Everything except `Db`
/// is an expected condition the API reports back to the scanner.
#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Event is not accepting check-ins")]
    EventNotAcceptingCheckins,

    #[error("Student is already checked in")]
    DuplicateCheckIn,

    #[error("Attendance for this student is already completed")]
    AlreadyCompleted,

    #[error("Student has not checked in")]
    NotCheckedIn,

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Live tallies for an event's attendance listing.
#[derive(Debug, Default, Serialize)]
pub struct AttendanceCounts {
    pub checked_in_count: u64,
    pub checked_out_count: u64,
    pub total: u64,
}

impl Model {
    /// Records a check-in for the scanned identity against an event.
    ///
    /// The (event_id, student_id) pair is guarded by a unique index, so two
    /// concurrent scans of the same badge produce exactly one row; the loser
    /// of the race gets `DuplicateCheckIn`.
    pub async fn check_in(
        db: &DatabaseConnection,
        event_id: i64,
        identity: &StudentIdentity,
        now: DateTime<Utc>,
    ) -> Result<Self, AttendanceError> {
        let Some(event) = event::Entity::find_by_id(event_id).one(db).await? else {
            return Err(AttendanceError::EventNotFound);
        };
        if !event.accepts_checkins() {
            return Err(AttendanceError::EventNotAcceptingCheckins);
        }

        if let Some(existing) = Self::find_record(db, event_id, &identity.student_id).await? {
            return Err(if existing.time_out.is_some() {
                AttendanceError::AlreadyCompleted
            } else {
                AttendanceError::DuplicateCheckIn
            });
        }

        let record = ActiveModel {
            event_id: Set(event_id),
            student_id: Set(identity.student_id.clone()),
            first_name: Set(identity.first_name.clone()),
            last_name: Set(identity.last_name.clone()),
            time_in: Set(Some(now)),
            time_out: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match record.insert(db).await {
            Ok(record) => Ok(record),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AttendanceError::DuplicateCheckIn)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Completes the pair's record by stamping `time_out`. Terminal: further
    /// check-ins and check-outs for the pair report `AlreadyCompleted`.
    pub async fn check_out(
        db: &DatabaseConnection,
        event_id: i64,
        student_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, AttendanceError> {
        let Some(record) = Self::find_record(db, event_id, student_id).await? else {
            return Err(AttendanceError::NotCheckedIn);
        };
        if record.time_out.is_some() {
            return Err(AttendanceError::AlreadyCompleted);
        }

        let mut record: ActiveModel = record.into();
        record.time_out = Set(Some(now));
        record.updated_at = Set(now);
        Ok(record.update(db).await?)
    }

    pub async fn find_record(
        db: &DatabaseConnection,
        event_id: i64,
        student_id: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    /// All records for an event, most recently updated first. Stateless; each
    /// call is a fresh query.
    pub async fn list_for_event(
        db: &DatabaseConnection,
        event_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .order_by_desc(Column::UpdatedAt)
            .all(db)
            .await
    }

    pub async fn counts_for_event(
        db: &DatabaseConnection,
        event_id: i64,
    ) -> Result<AttendanceCounts, DbErr> {
        let total = Entity::find()
            .filter(Column::EventId.eq(event_id))
            .count(db)
            .await?;
        let checked_out_count = Entity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::TimeOut.is_not_null())
            .count(db)
            .await?;

        Ok(AttendanceCounts {
            checked_in_count: total - checked_out_count,
            checked_out_count,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventStatus;
    use crate::models::{organization, user};
    use crate::test_utils::setup_test_db;
    use chrono::Duration;

    fn identity(student_id: &str) -> StudentIdentity {
        StudentIdentity {
            student_id: student_id.to_owned(),
            first_name: "Thabo".to_owned(),
            last_name: "Nkosi".to_owned(),
            course_id: 7,
            year_level: 2,
            avatar: None,
        }
    }

    async fn seed_event(db: &DatabaseConnection, status: EventStatus) -> event::Model {
        let founder = user::Model::create(db, "founder", "founder@example.com", "password1", false)
            .await
            .unwrap();
        let org = organization::Model::create(db, "Science Society", None, None, founder.id)
            .await
            .unwrap();
        let start = Utc::now();
        let event = event::Model::create(
            db,
            org.id,
            "Guest Lecture",
            None,
            start,
            start + Duration::hours(2),
            None,
            None,
            founder.id,
        )
        .await
        .unwrap();
        event::Model::set_status(db, event.id, status).await.unwrap()
    }

    #[tokio::test]
    async fn test_check_in_creates_record() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;
        let now = Utc::now();

        let record = Model::check_in(&db, event.id, &identity("s1001"), now)
            .await
            .unwrap();
        assert_eq!(record.event_id, event.id);
        assert_eq!(record.student_id, "s1001");
        assert_eq!(record.first_name, "Thabo");
        assert_eq!(record.time_in, Some(now));
        assert!(record.time_out.is_none());
    }

    #[tokio::test]
    async fn test_check_in_unknown_event() {
        let db = setup_test_db().await;
        let result = Model::check_in(&db, 9999, &identity("s1001"), Utc::now()).await;
        assert!(matches!(result, Err(AttendanceError::EventNotFound)));
    }

    #[tokio::test]
    async fn test_only_active_events_accept_checkins() {
        let db = setup_test_db().await;
        for status in [
            EventStatus::Draft,
            EventStatus::Completed,
            EventStatus::Cancelled,
        ] {
            let db = &db;
            let event = {
                // Separate org per status to avoid name clashes.
                let founder_name = format!("founder_{status}");
                let founder = user::Model::create(
                    db,
                    &founder_name,
                    &format!("{founder_name}@example.com"),
                    "password1",
                    false,
                )
                .await
                .unwrap();
                let org = organization::Model::create(
                    db,
                    &format!("Org {status}"),
                    None,
                    None,
                    founder.id,
                )
                .await
                .unwrap();
                let start = Utc::now();
                let event = event::Model::create(
                    db,
                    org.id,
                    "Event",
                    None,
                    start,
                    start + Duration::hours(1),
                    None,
                    None,
                    founder.id,
                )
                .await
                .unwrap();
                event::Model::set_status(db, event.id, status).await.unwrap()
            };

            let result = Model::check_in(db, event.id, &identity("s1001"), Utc::now()).await;
            assert!(
                matches!(result, Err(AttendanceError::EventNotAcceptingCheckins)),
                "status {status} should reject check-ins"
            );
        }
    }

    #[tokio::test]
    async fn test_double_check_in_leaves_one_row() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;
        let now = Utc::now();

        Model::check_in(&db, event.id, &identity("s1001"), now)
            .await
            .unwrap();
        let second = Model::check_in(&db, event.id, &identity("s1001"), now).await;
        assert!(matches!(second, Err(AttendanceError::DuplicateCheckIn)));

        let records = Model::list_for_event(&db, event.id).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_check_ins_yield_one_success() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;
        let now = Utc::now();

        let id = identity("s1001");
        let (a, b) = tokio::join!(
            Model::check_in(&db, event.id, &id, now),
            Model::check_in(&db, event.id, &id, now),
        );

        let successes = [a.is_ok(), b.is_ok()].into_iter().filter(|ok| *ok).count();
        assert_eq!(successes, 1);

        let records = Model::list_for_event(&db, event.id).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_check_out_before_check_in() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;

        let result = Model::check_out(&db, event.id, "s1001", Utc::now()).await;
        assert!(matches!(result, Err(AttendanceError::NotCheckedIn)));
    }

    #[tokio::test]
    async fn test_pair_state_is_terminal_after_check_out() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;
        let t0 = Utc::now();

        // check-in at t0 succeeds
        Model::check_in(&db, event.id, &identity("s1001"), t0)
            .await
            .unwrap();

        // duplicate at t1 is rejected
        let t1 = t0 + Duration::minutes(5);
        let dup = Model::check_in(&db, event.id, &identity("s1001"), t1).await;
        assert!(matches!(dup, Err(AttendanceError::DuplicateCheckIn)));

        // check-out at t2 succeeds
        let t2 = t0 + Duration::minutes(50);
        let record = Model::check_out(&db, event.id, "s1001", t2).await.unwrap();
        assert_eq!(record.time_out, Some(t2));

        // everything after t2 reports the terminal state
        let t3 = t0 + Duration::minutes(55);
        let late_out = Model::check_out(&db, event.id, "s1001", t3).await;
        assert!(matches!(late_out, Err(AttendanceError::AlreadyCompleted)));
        let late_in = Model::check_in(&db, event.id, &identity("s1001"), t3).await;
        assert!(matches!(late_in, Err(AttendanceError::AlreadyCompleted)));
    }

    #[tokio::test]
    async fn test_counts_track_pair_states() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;
        let now = Utc::now();

        Model::check_in(&db, event.id, &identity("s1001"), now)
            .await
            .unwrap();
        Model::check_in(&db, event.id, &identity("s1002"), now)
            .await
            .unwrap();
        Model::check_out(&db, event.id, "s1002", now + Duration::minutes(30))
            .await
            .unwrap();

        let counts = Model::counts_for_event(&db, event.id).await.unwrap();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.checked_in_count, 1);
        assert_eq!(counts.checked_out_count, 1);
    }

    #[tokio::test]
    async fn test_listing_orders_by_most_recent_update() {
        let db = setup_test_db().await;
        let event = seed_event(&db, EventStatus::Active).await;
        let t0 = Utc::now();

        Model::check_in(&db, event.id, &identity("s1001"), t0)
            .await
            .unwrap();
        Model::check_in(&db, event.id, &identity("s1002"), t0 + Duration::minutes(1))
            .await
            .unwrap();
        // s1001 checked out last, so it becomes the most recently updated
        Model::check_out(&db, event.id, "s1001", t0 + Duration::minutes(10))
            .await
            .unwrap();

        let records = Model::list_for_event(&db, event.id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student_id, "s1001");
        assert_eq!(records[1].student_id, "s1002");
    }
}
