use anyhow::{bail, Result};

use crate::schema::{Course, Region};

/// Region selector meaning "no region filter"
pub const ALL_REGIONS: &str = "전체";

/// Catalog search as the course pickers do it
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub region: Option<Region>,
    pub query: Option<String>,
}

impl CourseFilter {
    pub fn new(region: Option<String>, query: Option<String>) -> Result<Self> {
        let region = match region.as_deref().map(str::trim) {
            None | Some("") | Some(ALL_REGIONS) => None,
            Some(label) => match Region::from_label(label) {
                Some(region) => Some(region),
                None => bail!("Unknown region: {} (see `regions`)", label),
            },
        };

        let query = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        Ok(Self { region, query })
    }

    /// Exact region match, then case-insensitive substring on name, city or address
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(region) = self.region {
            if course.region != region {
                return false;
            }
        }

        match &self.query {
            Some(query) => [&course.name, &course.city, &course.address]
                .iter()
                .any(|field| field.to_lowercase().contains(query.as_str())),
            None => true,
        }
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::baseline_catalog;

    #[test]
    fn test_region_and_query() {
        let catalog = baseline_catalog();
        let filter = CourseFilter::new(Some("경기".into()), Some("용인".into())).unwrap();
        let found = filter.apply(&catalog);

        assert!(!found.is_empty());
        assert!(found.iter().all(|c| c.region == Region::Gyeonggi));
        assert!(found.iter().any(|c| c.name == "레이크사이드CC"));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = baseline_catalog();
        let upper = CourseFilter::new(None, Some("CC".into())).unwrap().apply(&catalog).len();
        let lower = CourseFilter::new(None, Some("cc".into())).unwrap().apply(&catalog).len();
        assert_eq!(upper, lower);
        assert!(upper > 0);
    }

    #[test]
    fn test_all_regions_and_blank_query_match_everything() {
        let catalog = baseline_catalog();
        let filter = CourseFilter::new(Some(ALL_REGIONS.into()), Some("  ".into())).unwrap();
        assert_eq!(filter.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        assert!(CourseFilter::new(Some("평양".into()), None).is_err());
    }
}
