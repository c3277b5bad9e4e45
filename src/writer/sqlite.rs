use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::{params, Connection};
use std::path::Path;

use super::schema_gen::{generate_create_table, generate_indexes, generate_insert, COURSES_TABLE};
use crate::schema::Course;

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    pub fn new(db_path: &Path) -> Result<Self> {
        // Remove existing database if present
        if db_path.exists() {
            std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("Failed to create database")?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        Ok(Self { conn })
    }

    pub fn create_table(&self) -> Result<()> {
        self.conn
            .execute(&generate_create_table(&COURSES_TABLE), [])
            .with_context(|| format!("Failed to create table: {}", COURSES_TABLE.name))?;

        for index_sql in generate_indexes(&COURSES_TABLE) {
            self.conn
                .execute(&index_sql, [])
                .with_context(|| format!("Failed to create index for: {}", COURSES_TABLE.name))?;
        }

        Ok(())
    }

    /// Insert all courses in one transaction
    pub fn insert_courses(&mut self, courses: &[Course], progress: &ProgressBar) -> Result<u64> {
        let sql = generate_insert(&COURSES_TABLE);
        let tx = self.conn.transaction()?;
        let mut count: u64 = 0;

        {
            let mut stmt = tx.prepare_cached(&sql)?;
            for course in courses {
                let extra = if course.extra.is_empty() {
                    None
                } else {
                    Some(serde_json::to_string(&course.extra)?)
                };

                stmt.execute(params![
                    course.id,
                    course.name,
                    course.region.label(),
                    course.city,
                    course.address,
                    course.holes,
                    enum_label(&course.course_type)?,
                    enum_label(&course.difficulty)?,
                    course.latitude,
                    course.longitude,
                    extra,
                ])
                .with_context(|| format!("Failed to insert course {}: {}", course.id, course.name))?;

                count += 1;
                progress.set_position(count);
            }
        }

        tx.commit()?;
        progress.finish_with_message(format!("{}: {} records", COURSES_TABLE.name, count));

        Ok(count)
    }

    pub fn finalize(self) -> Result<()> {
        self.conn.execute_batch("PRAGMA optimize;")?;
        Ok(())
    }
}

/// Serialized label of a unit enum (`"퍼블릭"`, `"중"`, ...)
fn enum_label<T: serde::Serialize>(value: &T) -> Result<String> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(s) => Ok(s),
        other => anyhow::bail!("Expected a string label, got {}", other),
    }
}

/// Write the catalog into a fresh SQLite database with a progress bar
pub fn export_to_sqlite(courses: &[Course], output_db: &Path) -> Result<u64> {
    let mut writer = SqliteWriter::new(output_db)?;
    writer.create_table()?;

    let pb = ProgressBar::new(courses.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40.cyan/blue}] {pos}/{len}")
            .context("Invalid progress template")?
            .progress_chars("=>-"),
    );
    pb.set_message(COURSES_TABLE.name);

    let count = writer.insert_courses(courses, &pb)?;
    writer.finalize()?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::baseline_catalog;
    use tempfile::TempDir;

    #[test]
    fn test_export_round_trip_counts() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("courses.db");
        let mut courses = baseline_catalog();
        courses[0]
            .extra
            .insert("phone".into(), serde_json::Value::String("031-000".into()));

        let count = export_to_sqlite(&courses, &db).unwrap();
        assert_eq!(count, courses.len() as u64);

        let conn = Connection::open(&db).unwrap();
        let jeju: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM golf_courses WHERE region = '제주'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let expected = courses.iter().filter(|c| c.region.label() == "제주").count();
        assert_eq!(jeju as usize, expected);

        let (kind, extra): (String, Option<String>) = conn
            .query_row(
                "SELECT type, extra_json FROM golf_courses WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(kind, "회원제");
        assert_eq!(extra.as_deref(), Some("{\"phone\":\"031-000\"}"));
    }

    #[test]
    fn test_export_replaces_existing_database() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("courses.db");
        std::fs::write(&db, b"not a database").unwrap();

        let courses = baseline_catalog();
        assert_eq!(export_to_sqlite(&courses[..3], &db).unwrap(), 3);
    }
}
