use crate::seed::Seeder;
use chrono::{Duration, Utc};
use common::qr::StudentIdentity;
use db::models::attendance_record::Model as AttendanceRecordModel;
use db::models::event::{self, EventStatus};
use fake::{
    Fake,
    faker::name::en::{FirstName, LastName},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct AttendanceSeeder;

#[async_trait::async_trait]
impl Seeder for AttendanceSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let events = event::Entity::find()
            .filter(event::Column::Status.eq(EventStatus::Active))
            .all(db)
            .await
            .unwrap_or_default();

        for event in events {
            let scanned_at = Utc::now() - Duration::minutes(45);

            for _ in 0..8 {
                let identity = StudentIdentity {
                    student_id: format!("s{:07}", fastrand::u32(..10_000_000)),
                    first_name: FirstName().fake(),
                    last_name: LastName().fake(),
                    course_id: i64::from(fastrand::u8(1..30)),
                    year_level: i32::from(fastrand::u8(1..5)),
                    avatar: None,
                };

                let Ok(record) =
                    AttendanceRecordModel::check_in(db, event.id, &identity, scanned_at).await
                else {
                    continue;
                };

                // Roughly half the room has already left.
                if fastrand::bool() {
                    let _ = AttendanceRecordModel::check_out(
                        db,
                        event.id,
                        &record.student_id,
                        scanned_at + Duration::minutes(40),
                    )
                    .await;
                }
            }
        }
    }
}
