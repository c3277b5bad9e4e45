use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::Course;

/// Load a catalog (or pending-additions) file
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read: {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse courses in {:?}", path))
}

/// Write courses as indented UTF-8 JSON, replacing the file wholesale.
///
/// Content goes to a sibling `.tmp` file first and is renamed over the
/// target, so a crash leaves either the old or the new file.
pub fn save_courses(path: &Path, courses: &[Course]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(courses).context("Failed to serialize courses")?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json).with_context(|| format!("Failed to write: {:?}", tmp))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to replace: {:?}", path))?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Copy the current file byte for byte to `backup`
pub fn backup_file(path: &Path, backup: &Path) -> Result<u64> {
    if let Some(parent) = backup.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    fs::copy(path, backup).with_context(|| format!("Failed to back up {:?} to {:?}", path, backup))
}

/// Assign ids `1..=n` in list order, discarding previous ids
pub fn renumber(courses: &mut [Course]) {
    for (course, id) in courses.iter_mut().zip(1u32..) {
        course.id = id;
    }
}

/// Concatenate and renumber
pub fn merge_courses(existing: Vec<Course>, additions: Vec<Course>) -> Vec<Course> {
    let mut merged = existing;
    merged.extend(additions);
    renumber(&mut merged);
    merged
}

/// Counts from a merge run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub existing: usize,
    pub added: usize,
    pub total: usize,
}

/// Append pending additions to the canonical catalog on disk.
///
/// The previous catalog is copied to `backup` before it is overwritten.
pub fn merge_catalog(
    catalog: &Path,
    additions: &Path,
    backup: &Path,
) -> Result<(Vec<Course>, MergeSummary)> {
    let existing = load_courses(catalog)?;
    let pending = load_courses(additions)?;

    let summary = MergeSummary {
        existing: existing.len(),
        added: pending.len(),
        total: existing.len() + pending.len(),
    };

    backup_file(catalog, backup)?;

    let merged = merge_courses(existing, pending);
    save_courses(catalog, &merged)?;

    Ok((merged, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::baseline_catalog;
    use tempfile::TempDir;

    #[test]
    fn test_merge_renumbers_densely() {
        let mut existing = baseline_catalog();
        existing.truncate(3);
        existing[0].id = 40;
        existing[1].id = 7;
        existing[2].id = 7;
        let mut additions = baseline_catalog().split_off(95);
        additions[0].id = 900;

        let merged = merge_courses(existing, additions);

        assert_eq!(merged.len(), 8);
        let ids: Vec<u32> = merged.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(merged[3].name, "해비치CC");
    }

    #[test]
    fn test_save_writes_readable_korean_and_indentation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("courses.json");
        let courses = baseline_catalog();

        save_courses(&path, &courses).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("레이크사이드CC"));
        assert!(text.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(!tmp_path(&path).exists());
        assert_eq!(load_courses(&path).unwrap(), courses);
    }

    #[test]
    fn test_merge_catalog_keeps_verbatim_backup() {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("golfCourses.json");
        let additions = dir.path().join("missing.json");
        let backup = dir.path().join("golfCourses.backup.json");

        // Hand-formatted on purpose: the backup must not be re-serialized
        let original = "[{\"id\": 5, \"name\": \"오라CC\", \"region\": \"제주\"}]";
        fs::write(&catalog, original).unwrap();
        save_courses(&additions, &baseline_catalog()[..2]).unwrap();

        let (merged, summary) = merge_catalog(&catalog, &additions, &backup).unwrap();

        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        assert_eq!(
            summary,
            MergeSummary {
                existing: 1,
                added: 2,
                total: 3
            }
        );
        assert_eq!(merged[0].name, "오라CC");
        assert_eq!(load_courses(&catalog).unwrap().len(), 3);
    }

    #[test]
    fn test_load_rejects_malformed_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"id\": 1}").unwrap();
        assert!(load_courses(&path).is_err());
    }
}
