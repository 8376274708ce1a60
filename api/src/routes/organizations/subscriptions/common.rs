use db::models::subscription::{Model as SubscriptionModel, SubscriptionStatus};
use serde::Serialize;

/// Subscription shape returned by this route group.
#[derive(Debug, Serialize)]
pub struct SubscriptionItem {
    pub id: i64,
    pub organization_id: i64,
    pub duration_months: i32,
    pub start_date: String,
    pub end_date: String,
    pub payment_amount: f64,
    pub status: SubscriptionStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SubscriptionModel> for SubscriptionItem {
    fn from(sub: SubscriptionModel) -> Self {
        Self {
            id: sub.id,
            organization_id: sub.organization_id,
            duration_months: sub.duration_months,
            start_date: sub.start_date.to_rfc3339(),
            end_date: sub.end_date.to_rfc3339(),
            payment_amount: sub.payment_amount,
            status: sub.status,
            created_at: sub.created_at.to_rfc3339(),
            updated_at: sub.updated_at.to_rfc3339(),
        }
    }
}

impl Default for SubscriptionItem {
    fn default() -> Self {
        Self {
            id: 0,
            organization_id: 0,
            duration_months: 0,
            start_date: String::new(),
            end_date: String::new(),
            payment_amount: 0.0,
            status: SubscriptionStatus::Pending,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}
