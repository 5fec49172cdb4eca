use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Visitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum LogType {
    #[serde(rename = "Time In")]
    #[sqlx(rename = "Time In")]
    TimeIn,
    #[serde(rename = "Time Out")]
    #[sqlx(rename = "Time Out")]
    TimeOut,
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogType::TimeIn => write!(f, "Time In"),
            LogType::TimeOut => write!(f, "Time Out"),
        }
    }
}

/// One check-in or check-out event. The visitor fields are an independent
/// copy taken at log time, not a reference; the row id is the database's
/// own and is not carried here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub uid: i64,
    pub name: String,
    pub position: String,
    pub student_id: Option<String>,
    pub program: Option<String>,
    pub college: Option<String>,
    pub year_level: Option<String>,
    pub address: String,
    pub purpose: String,
    pub log_time: String,
    pub log_type: LogType,
}

impl LogEntry {
    /// Snapshot a visitor row at the current server time.
    pub fn snapshot(visitor: &Visitor, log_type: LogType) -> Self {
        Self {
            uid: visitor.uid,
            name: visitor.name.clone(),
            position: visitor.log_position(),
            student_id: visitor.student_id.clone(),
            program: visitor.program.clone(),
            college: visitor.college.clone(),
            year_level: visitor.year_level.clone(),
            address: visitor.address.clone(),
            purpose: visitor.purpose.clone(),
            log_time: Utc::now().to_rfc3339(),
            log_type,
        }
    }
}
