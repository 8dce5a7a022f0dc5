//! Chart Plotter Module
//! Box plot and grouped line chart built on egui_plot.

use egui::Color32;
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints};

use crate::aggregate::{FiveNumberSummary, SexSeries};
use crate::data::Sex;

const MALE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
const FEMALE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
const BOX_COLOR: Color32 = Color32::from_rgb(70, 130, 180); // Steel blue

/// Color used for a sex's line and legend entry.
fn sex_color(sex: Sex) -> Color32 {
    match sex {
        Sex::Male => MALE_COLOR,
        Sex::Female => FEMALE_COLOR,
    }
}

/// Draw one box per study-time level.
/// X-axis: study-time level, Y-axis: final grade. Whiskers sit at the
/// group min/max; hovering a box shows its five numbers.
pub fn draw_box_plot(ui: &mut egui::Ui, summaries: &[FiveNumberSummary], height: f32) {
    let levels: Vec<u8> = summaries.iter().map(|s| s.level).collect();

    Plot::new("study_time_box_plot")
        .height(height)
        .allow_scroll(false)
        .x_axis_label("Study Time Level")
        .y_axis_label("Final Grade")
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let level = mark.value.round();
            if (mark.value - level).abs() < 1e-6 && levels.contains(&(level as u8)) {
                format!("{level:.0}")
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for summary in summaries {
                let box_elem = BoxElem::new(
                    summary.level as f64,
                    BoxSpread::new(
                        summary.min,
                        summary.q1,
                        summary.median,
                        summary.q3,
                        summary.max,
                    ),
                )
                .box_width(0.5)
                .fill(BOX_COLOR.gamma_multiply(0.3))
                .stroke(egui::Stroke::new(1.5, BOX_COLOR));

                plot_ui.box_plot(
                    BoxPlot::new(vec![box_elem]).name(format!("Level {}", summary.level)),
                );
            }
        });
}

/// Draw one connecting line per sex.
/// Points are connected in ascending study-time order; the stable sort
/// keeps same-level points in original record order.
pub fn draw_line_chart(ui: &mut egui::Ui, series: &[SexSeries], height: f32) {
    Plot::new("sex_line_chart")
        .height(height)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_label("Study Time Level")
        .y_axis_label("Final Grade")
        .include_x(1.0)
        .include_x(4.0)
        .include_y(0.0)
        .include_y(20.0)
        .show(ui, |plot_ui| {
            for group in series {
                let mut points = group.points.clone();
                points.sort_by_key(|&(study_time, _)| study_time);

                let line_points: PlotPoints = points
                    .iter()
                    .map(|&(study_time, grade)| [study_time as f64, grade as f64])
                    .collect();

                plot_ui.line(
                    Line::new(line_points)
                        .color(sex_color(group.sex))
                        .width(2.0)
                        .name(group.sex.label()),
                );
            }
        });
}
