//! Coverage summary schema shared by report parsing, baseline files, and
//! comparison output.
//!
//! Percentages are whole points: the floor of `covered / total * 100`,
//! defined as 0 when `total` is 0. Integer division keeps the floor exact
//! without any float round-trip.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Counts and whole-point percentage for one coverage category.
pub struct CategoryCoverage {
    pub total: u64,
    pub covered: u64,
    pub percentage: u64,
}

impl CategoryCoverage {
    /// Build a category from raw counts, deriving the percentage.
    pub fn from_counts(covered: u64, total: u64) -> Self {
        let percentage = if total > 0 { covered * 100 / total } else { 0 };
        CategoryCoverage {
            total,
            covered,
            percentage,
        }
    }

    /// The empty category: no data, 0%.
    pub fn zero() -> Self {
        CategoryCoverage::from_counts(0, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Per-run coverage totals across the four report categories.
pub struct CoverageSummary {
    pub lines: CategoryCoverage,
    pub functions: CategoryCoverage,
    pub branches: CategoryCoverage,
    pub statements: CategoryCoverage,
}

impl CoverageSummary {
    /// Summary with all categories empty. Used when a report yields no data.
    pub fn zero() -> Self {
        CoverageSummary {
            lines: CategoryCoverage::zero(),
            functions: CategoryCoverage::zero(),
            branches: CategoryCoverage::zero(),
            statements: CategoryCoverage::zero(),
        }
    }
}
