//! Grouped Series Aggregator
//! Partitions records by sex for the per-group line chart.

use crate::data::{Sex, StudentRecord};

/// All (study-time, final-grade) points of one sex, in original record
/// order. No reduction happens here; every usable record contributes one
/// point. The line-chart presenter sorts points by study time when it
/// connects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SexSeries {
    pub sex: Sex,
    pub points: Vec<(u8, u8)>,
}

/// Partition records by sex, keeping first-seen group order.
///
/// With `filter` set, only records of that sex pass through; a group left
/// empty by the filter produces no entry. Records missing any of the three
/// fields are skipped.
pub fn series_by_sex(records: &[StudentRecord], filter: Option<Sex>) -> Vec<SexSeries> {
    let mut groups: Vec<SexSeries> = Vec::new();

    for rec in records {
        let (Some(sex), Some(study_time), Some(grade)) =
            (rec.sex, rec.study_time, rec.final_grade)
        else {
            continue;
        };
        if filter.is_some_and(|f| f != sex) {
            continue;
        }

        match groups.iter_mut().find(|g| g.sex == sex) {
            Some(group) => group.points.push((study_time, grade)),
            None => groups.push(SexSeries {
                sex,
                points: vec![(study_time, grade)],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(sex: Option<Sex>, study_time: u8, grade: u8) -> StudentRecord {
        StudentRecord {
            sex,
            study_time: Some(study_time),
            final_grade: Some(grade),
            ..Default::default()
        }
    }

    #[test]
    fn partitions_in_first_seen_order() {
        let records = [
            rec(Some(Sex::Female), 2, 12),
            rec(Some(Sex::Male), 1, 8),
            rec(Some(Sex::Female), 4, 17),
        ];
        let series = series_by_sex(&records, None);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].sex, Sex::Female);
        assert_eq!(series[0].points, vec![(2, 12), (4, 17)]);
        assert_eq!(series[1].sex, Sex::Male);
        assert_eq!(series[1].points, vec![(1, 8)]);
    }

    #[test]
    fn filter_keeps_only_target_sex() {
        let records = [
            rec(Some(Sex::Male), 1, 8),
            rec(Some(Sex::Female), 2, 12),
            rec(Some(Sex::Male), 3, 10),
        ];
        let series = series_by_sex(&records, Some(Sex::Female));

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].sex, Sex::Female);
        assert_eq!(series[0].points, vec![(2, 12)]);
    }

    #[test]
    fn filter_with_no_matches_yields_no_groups() {
        let records = [rec(Some(Sex::Male), 1, 8), rec(Some(Sex::Male), 2, 9)];
        assert!(series_by_sex(&records, Some(Sex::Female)).is_empty());
    }

    #[test]
    fn no_filter_passes_all_records_unchanged() {
        let records = [
            rec(Some(Sex::Male), 3, 10),
            rec(Some(Sex::Male), 1, 8),
            rec(Some(Sex::Male), 2, 15),
        ];
        let series = series_by_sex(&records, None);

        // Original record order is preserved, not sorted by study time.
        assert_eq!(series[0].points, vec![(3, 10), (1, 8), (2, 15)]);
    }

    #[test]
    fn records_with_missing_fields_are_skipped() {
        let records = [
            rec(None, 1, 8),
            StudentRecord {
                sex: Some(Sex::Female),
                study_time: None,
                final_grade: Some(10),
                ..Default::default()
            },
            rec(Some(Sex::Female), 2, 12),
        ];
        let series = series_by_sex(&records, None);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points, vec![(2, 12)]);
    }

    #[test]
    fn rerun_is_idempotent() {
        let records = [
            rec(Some(Sex::Female), 2, 12),
            rec(Some(Sex::Male), 1, 8),
        ];
        assert_eq!(
            series_by_sex(&records, None),
            series_by_sex(&records, None)
        );
    }
}
