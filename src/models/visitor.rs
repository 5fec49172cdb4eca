use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered person: either an ad-hoc visitor created through the
/// registration endpoint, or a student row pre-provisioned from the
/// registrar's export. Rows are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Visitor {
    pub uid: i64,
    pub name: String,
    pub position: Option<String>,
    pub student_id: Option<String>,
    pub program: Option<String>,
    pub college: Option<String>,
    pub year_level: Option<String>,
    pub address: String,
    pub purpose: String,
}

impl Visitor {
    /// Position recorded on a log row: the stored value when present,
    /// otherwise "Student". Pre-provisioned student rows carry no
    /// position. The substitution is never written back to this row.
    pub fn log_position(&self) -> String {
        match &self.position {
            Some(p) if !p.is_empty() => p.clone(),
            _ => "Student".to_string(),
        }
    }
}
