//! Quantile Summary Aggregator
//! Five-number summaries of final grade per study-time level.

use std::collections::BTreeMap;

use crate::data::StudentRecord;

/// Box-plot statistics for one study-time level.
///
/// Invariant: `min <= q1 <= median <= q3 <= max`.
#[derive(Debug, Clone, PartialEq)]
pub struct FiveNumberSummary {
    pub level: u8,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Group records by study-time level and compute the five-number summary
/// of the final grade for each level.
///
/// Records missing either field are skipped, so a level with no usable
/// grades produces no entry at all. Output is sorted ascending by level.
pub fn summarize_by_study_time(records: &[StudentRecord]) -> Vec<FiveNumberSummary> {
    let mut groups: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for rec in records {
        if let (Some(level), Some(grade)) = (rec.study_time, rec.final_grade) {
            groups.entry(level).or_default().push(grade as f64);
        }
    }

    groups
        .into_iter()
        .map(|(level, mut values)| {
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            FiveNumberSummary {
                level,
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
            }
        })
        .collect()
}

/// Quantile of a sorted slice by linear interpolation between order
/// statistics at rank `p * (n - 1)`.
///
/// This is the R-7 method, the default of both d3.quantile and NumPy.
fn quantile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = p * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}
