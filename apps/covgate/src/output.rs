//! Output rendering for the coverage comparison.
//!
//! Supports `json` (default; the full comparison document, 2-space
//! indented, suitable for CI consumption) and `human` (a per-category
//! table plus a one-line verdict). Description rendering is shared with
//! the save-baseline summary line.

use crate::models::{CategoryCoverage, CoverageComparison};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// One-line status string for a comparison.
///
/// On failure this is the stored reason verbatim; on success it is
/// `Coverage: {lines}%` with a signed delta suffix when a baseline was
/// present, e.g. `Coverage: 84% (+4% from baseline)`.
pub fn coverage_description(cmp: &CoverageComparison) -> String {
    if !cmp.passed {
        return cmp
            .reason
            .clone()
            .unwrap_or_else(|| "Coverage check failed".to_string());
    }
    let baseline_info = if cmp.baseline.is_some() {
        let sign = if cmp.diff.lines >= 0 { "+" } else { "" };
        format!(" ({}{}% from baseline)", sign, cmp.diff.lines)
    } else {
        String::new()
    };
    format!("Coverage: {}%{}", cmp.current.lines.percentage, baseline_info)
}

/// Compose the comparison JSON document (pure) for printing and tests.
pub fn compose_comparison_json(cmp: &CoverageComparison) -> JsonVal {
    serde_json::to_value(cmp).unwrap()
}

/// Print the comparison in the requested format.
pub fn print_comparison(cmp: &CoverageComparison, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_comparison_json(cmp)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let categories: [(&str, &CategoryCoverage, i64); 4] = [
                ("lines", &cmp.current.lines, cmp.diff.lines),
                ("functions", &cmp.current.functions, cmp.diff.functions),
                ("branches", &cmp.current.branches, cmp.diff.branches),
                ("statements", &cmp.current.statements, cmp.diff.statements),
            ];
            for (name, cat, delta) in categories {
                let counts = format!("({}/{})", cat.covered, cat.total);
                let line = if cmp.baseline.is_some() {
                    format!(
                        "{:<10} {:>3}% {} {:+}",
                        name, cat.percentage, counts, delta
                    )
                } else {
                    format!("{:<10} {:>3}% {}", name, cat.percentage, counts)
                };
                println!("{}", line);
            }
            let verdict = coverage_description(cmp);
            if color {
                if cmp.passed {
                    println!("{} {}", "✔".green(), verdict.green().bold());
                } else {
                    println!("{} {}", "✖".red(), verdict.red().bold());
                }
            } else if cmp.passed {
                println!("✔ {}", verdict);
            } else {
                println!("✖ {}", verdict);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::models::{CategoryCoverage, CoverageSummary};

    fn summary_with_lines(covered: u64, total: u64) -> CoverageSummary {
        let mut s = CoverageSummary::zero();
        s.lines = CategoryCoverage::from_counts(covered, total);
        s
    }

    #[test]
    fn test_description_pass_with_positive_delta() {
        let cmp = compare(
            Some(summary_with_lines(84, 100)),
            Some(summary_with_lines(80, 100)),
        );
        assert_eq!(coverage_description(&cmp), "Coverage: 84% (+4% from baseline)");
    }

    #[test]
    fn test_description_pass_with_negative_delta() {
        let cmp = compare(
            Some(summary_with_lines(80, 100)),
            Some(summary_with_lines(83, 100)),
        );
        assert_eq!(coverage_description(&cmp), "Coverage: 80% (-3% from baseline)");
    }

    #[test]
    fn test_description_pass_with_zero_delta_keeps_plus_sign() {
        let cmp = compare(
            Some(summary_with_lines(84, 100)),
            Some(summary_with_lines(84, 100)),
        );
        assert_eq!(coverage_description(&cmp), "Coverage: 84% (+0% from baseline)");
    }

    #[test]
    fn test_description_pass_without_baseline() {
        let cmp = compare(Some(summary_with_lines(84, 100)), None);
        assert_eq!(coverage_description(&cmp), "Coverage: 84%");
    }

    #[test]
    fn test_description_fail_uses_reason_verbatim() {
        let cmp = compare(Some(summary_with_lines(60, 100)), None);
        assert_eq!(
            coverage_description(&cmp),
            "Line coverage 60% is below minimum 75%"
        );
    }

    #[test]
    fn test_compose_comparison_json_shape() {
        let cmp = compare(
            Some(summary_with_lines(80, 100)),
            Some(summary_with_lines(90, 100)),
        );
        let v = compose_comparison_json(&cmp);
        assert_eq!(v["passed"], false);
        assert_eq!(v["current"]["lines"]["percentage"], 80);
        assert_eq!(v["baseline"]["lines"]["percentage"], 90);
        assert_eq!(v["diff"]["lines"], -10);
        assert_eq!(
            v["reason"],
            "Line coverage dropped by 10% (max allowed: 5%)"
        );
    }

    #[test]
    fn test_compose_comparison_json_null_baseline() {
        let cmp = compare(Some(summary_with_lines(84, 100)), None);
        let v = compose_comparison_json(&cmp);
        assert!(v["baseline"].is_null());
        assert_eq!(v["diff"]["functions"], 0);
        assert!(v.get("reason").is_none());
    }
}
