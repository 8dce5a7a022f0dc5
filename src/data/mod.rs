//! Data module - CSV loading and the typed record model

mod loader;
mod record;

pub use loader::{load_records, LoadError};
pub use record::{Sex, StudentRecord};
