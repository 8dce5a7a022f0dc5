//! Charts module - presenter adapters for the aggregated records

mod heatmap;
mod plotter;

pub use heatmap::draw_heatmap;
pub use plotter::{draw_box_plot, draw_line_chart};
