use db::models::event::{EventStatus, Model as EventModel};
use serde::Serialize;

/// Event shape returned by the event route groups.
#[derive(Debug, Serialize)]
pub struct EventItem {
    pub id: i64,
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: EventStatus,
    pub start_datetime: String,
    pub end_datetime: String,
    pub location: Option<String>,
    pub banner: Option<String>,
    pub created_by: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<EventModel> for EventItem {
    fn from(event: EventModel) -> Self {
        Self {
            id: event.id,
            organization_id: event.organization_id,
            name: event.name,
            description: event.description,
            status: event.status,
            start_datetime: event.start_datetime.to_rfc3339(),
            end_datetime: event.end_datetime.to_rfc3339(),
            location: event.location,
            banner: event.banner,
            created_by: event.created_by,
            created_at: event.created_at.to_rfc3339(),
            updated_at: event.updated_at.to_rfc3339(),
        }
    }
}

impl Default for EventItem {
    fn default() -> Self {
        Self {
            id: 0,
            organization_id: 0,
            name: String::new(),
            description: None,
            status: EventStatus::Draft,
            start_datetime: String::new(),
            end_datetime: String::new(),
            location: None,
            banner: None,
            created_by: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}
