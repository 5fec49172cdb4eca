use serde::Deserialize;
use sqlx::SqlitePool;
use std::fs;

/// One school record as exported by the registrar's office.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentRecord {
    name: String,
    #[serde(rename = "id")]
    student_id: Option<String>,
    program: Option<String>,
    college: Option<String>,
    year_level: Option<String>,
    address: String,
    purpose: Option<String>,
}

/// Pre-provision student rows from a JSON export.
///
/// Position is left NULL on purpose: check-in resolves a missing position
/// to "Student" on the log row.
pub async fn import_students(
    pool: &SqlitePool,
    file_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file_path)?;
    let records: Vec<StudentRecord> = serde_json::from_str(&content)?;

    let mut tx = pool.begin().await?;
    let mut imported = 0;

    for record in records {
        sqlx::query(
            r#"
            INSERT INTO visitors (name, position, student_id, program, college, year_level, address, purpose)
            VALUES (?, NULL, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.student_id)
        .bind(&record.program)
        .bind(&record.college)
        .bind(&record.year_level)
        .bind(&record.address)
        .bind(record.purpose.as_deref().unwrap_or_default())
        .execute(&mut *tx)
        .await?;

        imported += 1;
    }

    tx.commit().await?;
    println!("Imported {} students", imported);
    Ok(())
}
