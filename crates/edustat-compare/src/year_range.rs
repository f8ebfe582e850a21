//! Year-range resolution.

use edustat_model::Dataset;

/// A fixed inclusive integer interval mapped to exactly one backing
/// census dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub label: &'static str,
    pub lower: i32,
    pub upper: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        self.lower <= year && year <= self.upper
    }
}

pub const RANGE_1990_2000: YearRange = YearRange {
    label: "1990-2000",
    lower: 1990,
    upper: 2000,
};
pub const RANGE_2001_2010: YearRange = YearRange {
    label: "2001-2010",
    lower: 2001,
    upper: 2010,
};
pub const RANGE_2011_2025: YearRange = YearRange {
    label: "2011-2025",
    lower: 2011,
    upper: 2025,
};

/// The three disjoint ranges and their backing datasets.
///
/// Years outside [1990, 2025] have no backing dataset and resolve to
/// `None`; callers must treat that as "data not available", not as an
/// empty dataset.
#[derive(Debug, Clone)]
pub struct CensusSeries<'a> {
    ranges: [(YearRange, &'a Dataset); 3],
}

impl<'a> CensusSeries<'a> {
    pub fn new(
        census_1991: &'a Dataset,
        census_2001: &'a Dataset,
        census_2011: &'a Dataset,
    ) -> Self {
        Self {
            ranges: [
                (RANGE_1990_2000, census_1991),
                (RANGE_2001_2010, census_2001),
                (RANGE_2011_2025, census_2011),
            ],
        }
    }

    /// Dataset backing `year`, if any range covers it.
    pub fn resolve(&self, year: i32) -> Option<&'a Dataset> {
        self.ranges
            .iter()
            .find(|(range, _)| range.contains(year))
            .map(|(_, dataset)| *dataset)
    }

    /// The range covering `year`, if any.
    pub fn range_for(&self, year: i32) -> Option<YearRange> {
        self.ranges
            .iter()
            .find(|(range, _)| range.contains(year))
            .map(|(range, _)| *range)
    }
}
