//! Set differences between the authoritative export and the catalog,
//! keyed by normalized facility name.

use serde_json::Map;
use std::collections::{HashMap, HashSet};

use crate::parser::{normalize_name, Facility};
use crate::schema::{Course, CourseType, Difficulty, Region, DEFAULT_HOLES};

/// Anything that carries a facility name
pub trait Named {
    fn name(&self) -> &str;

    fn key(&self) -> String {
        normalize_name(self.name())
    }
}

impl Named for Course {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Facility {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Distinct names that normalize to the same key
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCollision {
    pub key: String,
    pub names: Vec<String>,
}

/// Outcome of comparing a source collection against the catalog
#[derive(Debug)]
pub struct Reconciliation<'a, A, B> {
    /// Source records whose key exists in the catalog
    pub matched: Vec<&'a A>,
    /// Source records whose key is absent from the catalog
    pub missing: Vec<&'a A>,
    /// Catalog records whose key is absent from the source
    pub extra: Vec<&'a B>,
    pub source_collisions: Vec<KeyCollision>,
    pub catalog_collisions: Vec<KeyCollision>,
}

/// Partition `source` and `catalog` by normalized name.
///
/// Every source record lands in exactly one of `matched`/`missing` and every
/// catalog record not matched lands in `extra`. Input order is preserved.
pub fn reconcile<'a, A: Named, B: Named>(
    source: &'a [A],
    catalog: &'a [B],
) -> Reconciliation<'a, A, B> {
    let source_keys: Vec<String> = source.iter().map(Named::key).collect();
    let catalog_keys: Vec<String> = catalog.iter().map(Named::key).collect();

    let source_set: HashSet<&str> = source_keys.iter().map(String::as_str).collect();
    let catalog_set: HashSet<&str> = catalog_keys.iter().map(String::as_str).collect();

    let (matched, missing): (Vec<_>, Vec<_>) = source
        .iter()
        .zip(&source_keys)
        .partition(|(_, key)| catalog_set.contains(key.as_str()));

    let extra = catalog
        .iter()
        .zip(&catalog_keys)
        .filter(|(_, key)| !source_set.contains(key.as_str()))
        .map(|(record, _)| record)
        .collect();

    let source_collisions = find_collisions(source);
    let catalog_collisions = find_collisions(catalog);
    for collision in source_collisions.iter().chain(&catalog_collisions) {
        tracing::warn!(
            key = %collision.key,
            names = ?collision.names,
            "distinct names share one matching key"
        );
    }

    Reconciliation {
        matched: matched.into_iter().map(|(record, _)| record).collect(),
        missing: missing.into_iter().map(|(record, _)| record).collect(),
        extra,
        source_collisions,
        catalog_collisions,
    }
}

impl<'a, A: Named, B> Reconciliation<'a, A, B> {
    /// Missing records with one entry per key.
    ///
    /// A key keeps the position of its first occurrence but the record of
    /// its last one.
    pub fn unique_missing(&self) -> Vec<&'a A> {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut unique: Vec<&'a A> = Vec::new();
        for &record in &self.missing {
            match slots.get(&record.key()) {
                Some(&slot) => unique[slot] = record,
                None => {
                    slots.insert(record.key(), unique.len());
                    unique.push(record);
                }
            }
        }
        unique
    }
}

/// Keys shared by more than one distinct name, in first-seen order
pub fn find_collisions<T: Named>(records: &[T]) -> Vec<KeyCollision> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();

    for record in records {
        let key = record.key();
        let names = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        if !names.iter().any(|n| n == record.name()) {
            names.push(record.name().to_string());
        }
    }

    order
        .into_iter()
        .filter_map(|key| {
            let names = groups.remove(&key)?;
            (names.len() > 1).then_some(KeyCollision { key, names })
        })
        .collect()
}

/// Highest id in the catalog, 0 when empty
pub fn max_id(catalog: &[Course]) -> u32 {
    catalog.iter().map(|c| c.id).max().unwrap_or(0)
}

/// Turn a facility into a catalog entry with default attributes
pub fn new_course(facility: &Facility, id: u32) -> Course {
    Course {
        id,
        name: facility.name.clone(),
        region: facility.region.unwrap_or(Region::Other),
        city: facility.city.clone().unwrap_or_default(),
        address: facility.address.clone(),
        holes: DEFAULT_HOLES,
        course_type: CourseType::Public,
        difficulty: Difficulty::Medium,
        latitude: facility.latitude,
        longitude: facility.longitude,
        extra: Map::new(),
    }
}

/// Catalog entries for missing facilities, numbered after `max_id`
pub fn synthesize_missing(missing: &[&Facility], max_id: u32) -> Vec<Course> {
    missing
        .iter()
        .zip(1u32..)
        .map(|(facility, offset)| new_course(facility, max_id + offset))
        .collect()
}
