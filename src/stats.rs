use std::collections::HashMap;

use crate::schema::Region;

/// Per-region record counts
#[derive(Debug, Clone, Default)]
pub struct RegionCounts {
    counts: HashMap<Region, usize>,
}

impl RegionCounts {
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        let mut counts = HashMap::new();
        for region in regions {
            *counts.entry(region).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count only the records that resolved to a region
    pub fn from_resolved(regions: impl IntoIterator<Item = Option<Region>>) -> Self {
        Self::from_regions(regions.into_iter().flatten())
    }

    pub fn get(&self, region: Region) -> usize {
        self.counts.get(&region).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Largest first; ties by label
    pub fn by_count(&self) -> Vec<(Region, usize)> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
        rows
    }

    /// Ordered by label
    pub fn by_label(&self) -> Vec<(Region, usize)> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| a.0.label().cmp(b.0.label()));
        rows
    }

    fn rows(&self) -> Vec<(Region, usize)> {
        self.counts.iter().map(|(r, c)| (*r, *c)).collect()
    }
}

/// Print a distribution block the way every command reports it
pub fn print_distribution(rows: &[(Region, usize)]) {
    println!("Region distribution:");
    for (region, count) in rows {
        println!("  {}: {}", region, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::baseline_catalog;

    #[test]
    fn test_counts_and_orderings() {
        let counts = RegionCounts::from_regions([
            Region::Jeju,
            Region::Gyeonggi,
            Region::Gyeonggi,
            Region::Busan,
        ]);

        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(Region::Gyeonggi), 2);
        assert_eq!(counts.get(Region::Seoul), 0);
        assert_eq!(counts.by_count()[0], (Region::Gyeonggi, 2));
        let labels: Vec<&str> = counts.by_label().iter().map(|(r, _)| r.label()).collect();
        assert_eq!(labels, vec!["경기", "부산", "제주"]);
    }

    #[test]
    fn test_unresolved_regions_are_not_counted() {
        let counts = RegionCounts::from_resolved([Some(Region::Jeju), None, Some(Region::Jeju), None]);

        assert_eq!(counts.total(), 2);
        assert_eq!(counts.get(Region::Other), 0);
        assert_eq!(counts.by_count(), vec![(Region::Jeju, 2)]);
    }

    #[test]
    fn test_baseline_total() {
        let catalog = baseline_catalog();
        let counts = RegionCounts::from_regions(catalog.iter().map(|c| c.region));
        assert_eq!(counts.total(), catalog.len());
    }
}
