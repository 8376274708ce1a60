use db::models::attendance_record::Model as AttendanceRecordModel;
use serde::Serialize;

/// Attendance record shape returned by this route group.
#[derive(Debug, Serialize, Default)]
pub struct AttendanceRecordItem {
    pub id: i64,
    pub event_id: i64,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AttendanceRecordModel> for AttendanceRecordItem {
    fn from(record: AttendanceRecordModel) -> Self {
        Self {
            id: record.id,
            event_id: record.event_id,
            student_id: record.student_id,
            first_name: record.first_name,
            last_name: record.last_name,
            time_in: record.time_in.map(|t| t.to_rfc3339()),
            time_out: record.time_out.map(|t| t.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}
