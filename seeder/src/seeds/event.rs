use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::event::{EventStatus, Model as EventModel};
use db::models::organization;
use db::models::user;
use sea_orm::{DatabaseConnection, EntityTrait};

const EVENT_NAMES: &[&str] = &[
    "Opening Social",
    "Annual General Meeting",
    "Guest Lecture",
    "Training Session",
];

pub struct EventSeeder;

#[async_trait::async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let orgs = organization::Entity::find().all(db).await.unwrap_or_default();

        let users = user::Entity::find().all(db).await.unwrap_or_default();
        let Some(founder) = users.iter().find(|u| u.username == "admin") else {
            return;
        };

        for org in orgs {
            for (i, name) in EVENT_NAMES.iter().enumerate() {
                let start = Utc::now() + Duration::days(7 * i as i64 - 7);
                let Ok(event) = EventModel::create(
                    db,
                    org.id,
                    name,
                    Some("Seeded event"),
                    start,
                    start + Duration::hours(2),
                    Some("Student Centre"),
                    None,
                    founder.id,
                )
                .await
                else {
                    continue;
                };

                // The first event of every org is live and accepting check-ins.
                let status = if i == 0 {
                    EventStatus::Active
                } else if fastrand::bool() {
                    EventStatus::Draft
                } else {
                    EventStatus::Completed
                };
                let _ = EventModel::set_status(db, event.id, status).await;
            }
        }
    }
}
