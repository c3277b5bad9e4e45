//! End-to-end catalog maintenance: decode the public facility export,
//! reconcile it against the catalog, write the missing courses, merge them
//! back and export the result to SQLite.

use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use golf_catalog::parser::read_facilities;
use golf_catalog::reconcile::{max_id, reconcile, synthesize_missing};
use golf_catalog::schema::{baseline_catalog, CourseType, Difficulty, Region};
use golf_catalog::writer::{export_to_sqlite, load_courses, merge_catalog, save_courses};

// =============================================================================
// Fixtures
// =============================================================================

const CSV_TEXT: &str = "\
번호,개방서비스명,사업장명,영업상태명,소재지지번주소,소재지도로명주소,WGS84위도,WGS84경도
1,골프장,남서울 컨트리클럽,영업중,,경기도 성남시 분당구 백현동,37.39,127.10
2,골프장,테스트 C.C,영업중,,강원도 춘천시 남산면,,
3,골프장,폐업골프장,폐업,,경기도 이천시 모가면,,
4,골프장,테스트CC,영업중,,경기도 가평군 설악면,37.8,127.5
5,골프장,뉴코스CC,영업중,제주특별자치도 서귀포시 안덕면,,33.3,abc
";

/// The export as the portal ships it: EUC-KR bytes
static CSV_BYTES: Lazy<Vec<u8>> = Lazy::new(|| {
    let (bytes, _, unmappable) = encoding_rs::EUC_KR.encode(CSV_TEXT);
    assert!(!unmappable, "fixture must be representable in EUC-KR");
    bytes.into_owned()
});

struct Workspace {
    _dir: TempDir,
    csv: PathBuf,
    catalog: PathBuf,
    missing: PathBuf,
    backup: PathBuf,
}

fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();

    let csv = root.join("facilities.csv");
    fs::write(&csv, CSV_BYTES.as_slice()).unwrap();

    let catalog = root.join("src/data/golfCourses.json");
    save_courses(&catalog, &baseline_catalog()).unwrap();

    Workspace {
        _dir: dir,
        csv,
        catalog,
        missing: root.join("scripts/missing_courses.json"),
        backup: root.join("src/data/golfCourses.backup.json"),
    }
}

/// Run the analyze step and write the missing courses, returning how many
fn analyze(ws: &Workspace) -> usize {
    let facilities = read_facilities(&ws.csv, "euc-kr").unwrap();
    let courses = load_courses(&ws.catalog).unwrap();
    let result = reconcile(&facilities, &courses);
    let additions = synthesize_missing(&result.unique_missing(), max_id(&courses));
    save_courses(&ws.missing, &additions).unwrap();
    additions.len()
}

fn count_rows(db: &Path, sql: &str) -> i64 {
    let conn = Connection::open(db).unwrap();
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_reconcile_partitions_operating_rows() {
    let ws = workspace();
    let facilities = read_facilities(&ws.csv, "euc-kr").unwrap();
    let courses = load_courses(&ws.catalog).unwrap();

    assert_eq!(facilities.len(), 4, "closed facility is dropped");

    let result = reconcile(&facilities, &courses);
    assert_eq!(result.matched.len() + result.missing.len(), facilities.len());
    assert_eq!(result.matched.len(), 1);
    assert_eq!(result.matched[0].name, "남서울 컨트리클럽");
    assert_eq!(result.extra.len(), courses.len() - 1);
    assert!(result.extra.iter().all(|c| c.name != "남서울CC"));

    assert_eq!(result.source_collisions.len(), 1);
    assert_eq!(result.source_collisions[0].key, "테스트");
    assert!(result.catalog_collisions.is_empty());
}

#[test]
fn test_missing_courses_get_defaults_and_fresh_ids() {
    let ws = workspace();
    let previous_max = max_id(&load_courses(&ws.catalog).unwrap());

    assert_eq!(analyze(&ws), 2);
    let missing = load_courses(&ws.missing).unwrap();

    // The later 테스트CC row supersedes 테스트 C.C but keeps its slot
    let test_cc = &missing[0];
    assert_eq!(test_cc.name, "테스트CC");
    assert_eq!(test_cc.id, previous_max + 1);
    assert_eq!(test_cc.region, Region::Gyeonggi);
    assert_eq!(test_cc.city, "가평군");
    assert_eq!(test_cc.holes, 18);
    assert_eq!(test_cc.course_type, CourseType::Public);
    assert_eq!(test_cc.difficulty, Difficulty::Medium);
    assert_eq!(test_cc.latitude, Some(37.8));
    assert_eq!(test_cc.longitude, Some(127.5));

    let new_course = &missing[1];
    assert_eq!(new_course.id, previous_max + 2);
    assert_eq!(new_course.region, Region::Jeju);
    assert_eq!(new_course.city, "서귀포시");
    assert_eq!(new_course.latitude, Some(33.3));
    assert_eq!(new_course.longitude, None);

    let raw = fs::read_to_string(&ws.missing).unwrap();
    assert!(raw.contains("\"type\": \"퍼블릭\""));
    assert!(raw.contains("\"difficulty\": \"중\""));
}

#[test]
fn test_merge_renumbers_and_backs_up() {
    let ws = workspace();
    let original = fs::read(&ws.catalog).unwrap();
    let before = load_courses(&ws.catalog).unwrap().len();
    let added = analyze(&ws);

    let (merged, summary) = merge_catalog(&ws.catalog, &ws.missing, &ws.backup).unwrap();

    assert_eq!(summary.existing, before);
    assert_eq!(summary.added, added);
    assert_eq!(summary.total, before + added);
    assert_eq!(fs::read(&ws.backup).unwrap(), original);

    let ids: Vec<u32> = merged.iter().map(|c| c.id).collect();
    let expected: Vec<u32> = (1..=merged.len() as u32).collect();
    assert_eq!(ids, expected);

    let reloaded = load_courses(&ws.catalog).unwrap();
    assert_eq!(reloaded.len(), before + added);
    assert_eq!(reloaded[before].name, "테스트CC");
    assert_eq!(reloaded[before].id, before as u32 + 1);

    // A second analysis finds nothing left to add
    assert_eq!(analyze(&ws), 0);
}

#[test]
fn test_export_after_merge() {
    let ws = workspace();
    analyze(&ws);
    let (merged, _) = merge_catalog(&ws.catalog, &ws.missing, &ws.backup).unwrap();

    let db = ws.catalog.with_file_name("courses.db");
    let count = export_to_sqlite(&merged, &db).unwrap();

    assert_eq!(count as usize, merged.len());
    assert_eq!(
        count_rows(&db, "SELECT COUNT(*) FROM golf_courses") as usize,
        merged.len()
    );
    assert_eq!(
        count_rows(
            &db,
            "SELECT COUNT(*) FROM golf_courses WHERE name = '테스트CC' AND region = '경기' AND type = '퍼블릭'"
        ),
        1
    );
}
