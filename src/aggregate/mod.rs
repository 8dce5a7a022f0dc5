//! Aggregation module - shared by all three chart presenters
//!
//! Every function here takes the loaded records and returns a fresh derived
//! value; nothing is mutated incrementally. Records with a `None` field
//! needed by an aggregation are skipped, and empty groups never appear in
//! the output.

mod heat;
mod series;
mod summary;

pub use heat::{count_grade_pairs, final_grade_axis, first_period_axis, max_count, HeatCell};
pub use series::{series_by_sex, SexSeries};
pub use summary::{summarize_by_study_time, FiveNumberSummary};
