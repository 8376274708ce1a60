use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::organization;
use db::models::subscription::{Model as SubscriptionModel, SubscriptionStatus};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct SubscriptionSeeder;

#[async_trait::async_trait]
impl Seeder for SubscriptionSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let orgs = organization::Entity::find().all(db).await.unwrap_or_default();

        for org in orgs {
            // An expired period from last year.
            let start = Utc::now() - Duration::days(420);
            if let Ok(sub) =
                SubscriptionModel::create(db, org.id, 12, start, start + Duration::days(365), 600.0)
                    .await
            {
                let _ = SubscriptionModel::set_status(db, sub.id, SubscriptionStatus::Expired).await;
            }

            // The current period.
            let start = Utc::now() - Duration::days(30);
            let months = 6 + i64::from(fastrand::u8(..7));
            if let Ok(sub) = SubscriptionModel::create(
                db,
                org.id,
                months as i32,
                start,
                start + Duration::days(30 * months),
                100.0 * months as f64,
            )
            .await
            {
                let _ = SubscriptionModel::set_status(db, sub.id, SubscriptionStatus::Active).await;
            }
        }
    }
}
