//! GUI module - application shell

mod app;
mod dashboard;

pub use app::GradeboardApp;
