//! Pair Count Aggregator
//! Counts students per observed (G1, G3) grade combination for the heatmap.

use std::collections::BTreeMap;

use crate::data::StudentRecord;

/// Count of students with one specific (first-period, final) grade pair.
///
/// Only observed pairs are materialized, so `count >= 1` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatCell {
    pub first_period: u8,
    pub final_grade: u8,
    pub count: usize,
}

/// Group records by the (G1, G3) pair and count occurrences.
///
/// Records missing either grade are skipped. Output order is ascending by
/// (G1, G3), which makes repeated runs on the same input identical.
pub fn count_grade_pairs(records: &[StudentRecord]) -> Vec<HeatCell> {
    let mut counts: BTreeMap<(u8, u8), usize> = BTreeMap::new();
    for rec in records {
        if let (Some(g1), Some(g3)) = (rec.first_period, rec.final_grade) {
            *counts.entry((g1, g3)).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|((first_period, final_grade), count)| HeatCell {
            first_period,
            final_grade,
            count,
        })
        .collect()
}

/// Distinct first-period grades present in the cells, ascending numerically.
/// These are the x-axis categories; numeric order matters since the labels
/// would sort wrong lexicographically ("10" before "2").
pub fn first_period_axis(cells: &[HeatCell]) -> Vec<u8> {
    let mut grades: Vec<u8> = cells.iter().map(|c| c.first_period).collect();
    grades.sort_unstable();
    grades.dedup();
    grades
}

/// Distinct final grades present in the cells, ascending numerically.
pub fn final_grade_axis(cells: &[HeatCell]) -> Vec<u8> {
    let mut grades: Vec<u8> = cells.iter().map(|c| c.final_grade).collect();
    grades.sort_unstable();
    grades.dedup();
    grades
}

/// Largest cell count, used to scale color intensity.
pub fn max_count(cells: &[HeatCell]) -> usize {
    cells.iter().map(|c| c.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(first_period: Option<u8>, final_grade: Option<u8>) -> StudentRecord {
        StudentRecord {
            first_period,
            final_grade,
            ..Default::default()
        }
    }

    #[test]
    fn counts_observed_pairs_only() {
        let records = [
            rec(Some(10), Some(10)),
            rec(Some(10), Some(12)),
            rec(Some(10), Some(10)),
        ];
        let cells = count_grade_pairs(&records);

        assert_eq!(
            cells,
            vec![
                HeatCell {
                    first_period: 10,
                    final_grade: 10,
                    count: 2
                },
                HeatCell {
                    first_period: 10,
                    final_grade: 12,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn total_count_equals_records_with_both_grades() {
        let records = [
            rec(Some(10), Some(10)),
            rec(Some(11), None),
            rec(None, Some(12)),
            rec(Some(3), Some(4)),
            rec(Some(3), Some(4)),
        ];
        let cells = count_grade_pairs(&records);

        let total: usize = cells.iter().map(|c| c.count).sum();
        let defined = records
            .iter()
            .filter(|r| r.first_period.is_some() && r.final_grade.is_some())
            .count();
        assert_eq!(total, defined);
        assert!(cells.iter().all(|c| c.count >= 1));
    }

    #[test]
    fn axes_sort_numerically_ascending() {
        let records = [
            rec(Some(10), Some(2)),
            rec(Some(2), Some(10)),
            rec(Some(7), Some(7)),
        ];
        let cells = count_grade_pairs(&records);

        assert_eq!(first_period_axis(&cells), vec![2, 7, 10]);
        assert_eq!(final_grade_axis(&cells), vec![2, 7, 10]);
        assert_eq!(max_count(&cells), 1);
    }

    #[test]
    fn rerun_is_idempotent() {
        let records = [
            rec(Some(10), Some(10)),
            rec(Some(4), Some(9)),
            rec(Some(10), Some(10)),
        ];
        assert_eq!(count_grade_pairs(&records), count_grade_pairs(&records));
    }

    #[test]
    fn no_cells_for_empty_input() {
        assert!(count_grade_pairs(&[]).is_empty());
        assert_eq!(max_count(&[]), 0);
    }
}
