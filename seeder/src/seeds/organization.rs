use crate::seed::Seeder;
use db::models::organization::Model as OrganizationModel;
use db::models::organization_member::{MemberStatus, Model as MemberModel, Role};
use db::models::user;
use sea_orm::{DatabaseConnection, EntityTrait};

const ORG_NAMES: &[(&str, &str)] = &[
    ("Chess Club", "Weekly blitz nights and inter-res tournaments"),
    ("Robotics Society", "Build season runs all semester"),
    ("Hiking Club", "Day trips most weekends, gear library on campus"),
];

pub struct OrganizationSeeder;

#[async_trait::async_trait]
impl Seeder for OrganizationSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let users = user::Entity::find().all(db).await.unwrap_or_default();
        let Some(founder) = users.iter().find(|u| u.username == "admin") else {
            return;
        };

        for (name, description) in ORG_NAMES {
            let Ok(org) = OrganizationModel::create(db, name, Some(description), None, founder.id)
                .await
            else {
                continue;
            };

            // Everyone else joins with a random role and status.
            for user in users.iter().filter(|u| u.id != founder.id) {
                if fastrand::u8(..4) == 0 {
                    continue;
                }
                let role = match fastrand::u8(..6) {
                    0 => Role::Officer,
                    _ => Role::Member,
                };
                let status = match fastrand::u8(..5) {
                    0 => MemberStatus::Pending,
                    1 => MemberStatus::Inactive,
                    _ => MemberStatus::Active,
                };
                let _ = MemberModel::add(db, org.id, user.id, role, status).await;
            }
        }
    }
}
