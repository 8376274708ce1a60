//! Codec for the identity payload carried inside a student's QR code.
//!
//! The payload is a compact JSON snapshot of the student at print time. It is
//! versioned so that old badges can be rejected cleanly when the schema moves
//! on, and it never carries credentials or other secrets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const PAYLOAD_VERSION: u64 = 1;

/// Identity snapshot embedded in a QR code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub course_id: i64,
    pub year_level: i32,
    pub avatar: Option<String>,
}

/// Why a scanned payload was rejected. Scanner input is attacker-controlled,
/// so every branch is an error value, never a panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("payload is not valid JSON")]
    Malformed,

    #[error("unsupported payload version")]
    UnsupportedVersion,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("student_id must not be blank")]
    BlankStudentId,
}

#[derive(Serialize)]
struct Wire<'a> {
    v: u64,
    student_id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    course_id: i64,
    year_level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<&'a str>,
}

/// Serializes an identity into the QR payload text.
pub fn encode(identity: &StudentIdentity) -> String {
    let wire = Wire {
        v: PAYLOAD_VERSION,
        student_id: &identity.student_id,
        first_name: &identity.first_name,
        last_name: &identity.last_name,
        course_id: identity.course_id,
        year_level: identity.year_level,
        avatar: identity.avatar.as_deref(),
    };
    serde_json::to_string(&wire).expect("identity payload serialization cannot fail")
}

/// Parses scanned QR text back into an identity.
pub fn decode(text: &str) -> Result<StudentIdentity, ParseError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ParseError::Malformed)?;
    let obj = value.as_object().ok_or(ParseError::Malformed)?;

    match obj.get("v").and_then(Value::as_u64) {
        Some(PAYLOAD_VERSION) => {}
        _ => return Err(ParseError::UnsupportedVersion),
    }

    let student_id = required_str(obj, "student_id")?;
    if student_id.trim().is_empty() {
        return Err(ParseError::BlankStudentId);
    }
    let first_name = required_str(obj, "first_name")?;
    let last_name = required_str(obj, "last_name")?;

    Ok(StudentIdentity {
        student_id: student_id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        course_id: obj.get("course_id").and_then(Value::as_i64).unwrap_or(0),
        year_level: obj
            .get("year_level")
            .and_then(Value::as_i64)
            .unwrap_or(0) as i32,
        avatar: obj
            .get("avatar")
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}

fn required_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField(field))
}
