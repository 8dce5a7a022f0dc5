//! CSV Data Loader Module
//! Reads the student CSV with Polars and projects rows into typed records.

use polars::prelude::*;

use super::record::{Sex, StudentRecord};

/// Required column names in the source CSV.
pub const STUDY_TIME_COL: &str = "studytime";
pub const FIRST_PERIOD_COL: &str = "G1";
pub const FINAL_GRADE_COL: &str = "G3";
pub const SEX_COL: &str = "sex";

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("CSV contains no rows")]
    Empty,
}

/// Load the student CSV and project it into [`StudentRecord`]s.
///
/// The file must have a header row with the required columns. Numeric
/// fields that fail coercion become `None` on the record (the row is
/// kept); an unreadable file or a missing column is a hard [`LoadError`].
pub fn load_records(path: &str) -> Result<Vec<StudentRecord>, LoadError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    if df.height() == 0 {
        return Err(LoadError::Empty);
    }

    let first_period = grade_column(&df, FIRST_PERIOD_COL)?;
    let final_grade = grade_column(&df, FINAL_GRADE_COL)?;
    let study_time = grade_column(&df, STUDY_TIME_COL)?;
    let sex = sex_column(&df)?;

    let records = (0..df.height())
        .map(|i| StudentRecord {
            first_period: first_period[i],
            final_grade: final_grade[i],
            study_time: study_time[i],
            sex: sex[i],
        })
        .collect();

    log::info!("Loaded {} student records from {path}", df.height());
    Ok(records)
}

/// Extract a numeric column as `Option<u8>` per row.
///
/// The column is cast to Float64 non-strictly, so text that does not
/// parse as a number comes back as null rather than an error.
fn grade_column(df: &DataFrame, name: &str) -> Result<Vec<Option<u8>>, LoadError> {
    let column = df
        .column(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?;
    let values = column.cast(&DataType::Float64)?;
    let ca = values.f64()?;

    Ok(ca
        .into_iter()
        .map(|v| match v {
            Some(v) if v.is_finite() => Some(v as u8),
            _ => None,
        })
        .collect())
}

fn sex_column(df: &DataFrame) -> Result<Vec<Option<Sex>>, LoadError> {
    let column = df
        .column(SEX_COL)
        .map_err(|_| LoadError::MissingColumn(SEX_COL.to_string()))?;
    let values = column.cast(&DataType::String)?;
    let ca = values.str()?;

    Ok(ca.into_iter().map(|v| v.and_then(Sex::parse)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "gradeboard_{}_{}.csv",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_rows() {
        let path = write_temp_csv(
            "well_formed",
            "school,sex,studytime,G1,G3\nGP,F,2,10,11\nGP,M,1,5,6\n",
        );
        let records = load_records(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sex, Some(Sex::Female));
        assert_eq!(records[0].study_time, Some(2));
        assert_eq!(records[0].first_period, Some(10));
        assert_eq!(records[0].final_grade, Some(11));
        assert_eq!(records[1].sex, Some(Sex::Male));
    }

    #[test]
    fn non_numeric_grade_is_retained_as_none() {
        let path = write_temp_csv("coercion_gap", "sex,studytime,G1,G3\nF,2,abc,11\nM,1,5,6\n");
        let records = load_records(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_period, None);
        assert_eq!(records[0].final_grade, Some(11));
        assert_eq!(records[1].first_period, Some(5));
    }

    #[test]
    fn unknown_sex_code_is_none() {
        let path = write_temp_csv("bad_sex", "sex,studytime,G1,G3\nX,2,10,11\n");
        let records = load_records(path.to_str().unwrap()).unwrap();
        assert_eq!(records[0].sex, None);
        assert_eq!(records[0].final_grade, Some(11));
    }

    #[test]
    fn missing_column_is_reported() {
        let path = write_temp_csv("missing_col", "sex,studytime,G1\nF,2,10\n");
        let err = load_records(path.to_str().unwrap()).unwrap_err();
        match err {
            LoadError::MissingColumn(col) => assert_eq!(col, FINAL_GRADE_COL),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(load_records("/nonexistent/student-mat.csv").is_err());
    }
}
