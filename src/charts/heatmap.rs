//! Heatmap Widget
//! Custom-painted G1 x G3 grid with a hover tooltip. egui_plot has no
//! heatmap primitive, so cells are drawn straight through the painter.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::aggregate::{self, HeatCell};

const LEFT_MARGIN: f32 = 34.0;
const RIGHT_MARGIN: f32 = 6.0;
const TOP_MARGIN: f32 = 16.0;
const BOTTOM_MARGIN: f32 = 32.0;

/// Draw the grade-pair heatmap. Axes cover the observed grades only,
/// ascending numerically; color intensity encodes the student count.
pub fn draw_heatmap(ui: &mut egui::Ui, cells: &[HeatCell], height: f32) {
    if cells.is_empty() {
        ui.label("No data");
        return;
    }

    let x_axis = aggregate::first_period_axis(cells);
    let y_axis = aggregate::final_grade_axis(cells);
    let max = aggregate::max_count(cells) as f32;
    let text_color = ui.visuals().text_color();

    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let frame = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(frame.left() + LEFT_MARGIN, frame.top() + TOP_MARGIN),
        Pos2::new(frame.right() - RIGHT_MARGIN, frame.bottom() - BOTTOM_MARGIN),
    );
    let cell_size = Vec2::new(
        plot.width() / x_axis.len() as f32,
        plot.height() / y_axis.len() as f32,
    );

    // Cells; y axis grows upward like the source chart
    let hover_pos = response.hover_pos();
    let mut hovered: Option<(Rect, &HeatCell)> = None;

    for cell in cells {
        let (Some(xi), Some(yi)) = (
            x_axis.iter().position(|&g| g == cell.first_period),
            y_axis.iter().position(|&g| g == cell.final_grade),
        ) else {
            continue;
        };

        let min = Pos2::new(
            plot.left() + xi as f32 * cell_size.x,
            plot.bottom() - (yi + 1) as f32 * cell_size.y,
        );
        let cell_rect = Rect::from_min_size(min, cell_size).shrink(0.5);
        let t = (cell.count as f32 / max).clamp(0.0, 1.0);
        painter.rect(cell_rect, 0.0, intensity_color(t), Stroke::new(1.0, Color32::WHITE));

        if hover_pos.is_some_and(|p| cell_rect.contains(p)) {
            hovered = Some((cell_rect, cell));
        }
    }

    if let Some((cell_rect, cell)) = hovered {
        painter.rect_stroke(cell_rect, 0.0, Stroke::new(1.5, Color32::BLACK));
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            ui.layer_id(),
            response.id.with("heat_cell"),
            |ui| {
                ui.label(format!("Number of students: {}", cell.count));
                ui.label(format!(
                    "G1 {} / G3 {}",
                    cell.first_period, cell.final_grade
                ));
            },
        );
    }

    // Tick labels and axis titles
    let tick_font = FontId::proportional(10.0);
    for (xi, grade) in x_axis.iter().enumerate() {
        painter.text(
            Pos2::new(plot.left() + (xi as f32 + 0.5) * cell_size.x, plot.bottom() + 3.0),
            Align2::CENTER_TOP,
            grade.to_string(),
            tick_font.clone(),
            text_color,
        );
    }
    for (yi, grade) in y_axis.iter().enumerate() {
        painter.text(
            Pos2::new(plot.left() - 4.0, plot.bottom() - (yi as f32 + 0.5) * cell_size.y),
            Align2::RIGHT_CENTER,
            grade.to_string(),
            tick_font.clone(),
            text_color,
        );
    }
    painter.text(
        Pos2::new(plot.center().x, frame.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        "G1 (first-period grade)",
        FontId::proportional(11.0),
        text_color,
    );
    painter.text(
        Pos2::new(frame.left() + 2.0, frame.top() + 1.0),
        Align2::LEFT_TOP,
        "G3",
        FontId::proportional(11.0),
        text_color,
    );
}

/// White-to-blue ramp with the same endpoints as d3's Blues scheme.
fn intensity_color(t: f32) -> Color32 {
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(lerp(247, 8), lerp(251, 48), lerp(255, 107))
}
