//! Dashboard Widget
//! Scrollable column of the three linked chart cards.

use egui::{Color32, ComboBox, RichText, ScrollArea};

use crate::aggregate::{FiveNumberSummary, HeatCell, SexSeries};
use crate::charts;
use crate::data::Sex;

const CARD_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 320.0;
const CARD_BORDER: Color32 = Color32::from_rgb(100, 149, 237);

/// Actions triggered from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    FilterChanged(Option<Sex>),
}

/// Draw the three chart cards. Returns the action to apply, if any.
pub fn show_dashboard(
    ui: &mut egui::Ui,
    summaries: &[FiveNumberSummary],
    heat_cells: &[HeatCell],
    series: &[SexSeries],
    sex_filter: Option<Sex>,
) -> DashboardAction {
    let mut action = DashboardAction::None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            chart_card(ui, "Overview: Score Distribution", |ui| {
                charts::draw_heatmap(ui, heat_cells, CHART_HEIGHT);
                ui.label(
                    RichText::new(
                        "Cell color shows how many students received each \
                         combination of first-period (G1) and final (G3) scores.",
                    )
                    .size(11.0)
                    .color(Color32::GRAY),
                );
            });
            ui.add_space(CARD_SPACING);

            chart_card(ui, "Focus: Final Grade by Study Time", |ui| {
                charts::draw_box_plot(ui, summaries, CHART_HEIGHT);
                ui.label(
                    RichText::new(
                        "One box per weekly study-time level (1-4); whiskers \
                         span the level's full grade range.",
                    )
                    .size(11.0)
                    .color(Color32::GRAY),
                );
            });
            ui.add_space(CARD_SPACING);

            chart_card(ui, "Detail: Study Time vs Final Grade by Sex", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Filter by group:");
                    let selected_text = sex_filter.map(|s| s.label()).unwrap_or("All");
                    ComboBox::from_id_salt("sex_filter")
                        .width(110.0)
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            let options =
                                [("All", None), ("Male", Some(Sex::Male)), ("Female", Some(Sex::Female))];
                            for (label, value) in options {
                                if ui.selectable_label(sex_filter == value, label).clicked()
                                    && sex_filter != value
                                {
                                    action = DashboardAction::FilterChanged(value);
                                }
                            }
                        });
                });
                charts::draw_line_chart(ui, series, CHART_HEIGHT);
            });
        });

    action
}

/// Titled framed card, shared by all three charts.
fn chart_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .rounding(8.0)
        .stroke(egui::Stroke::new(1.5, CARD_BORDER))
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width() - 24.0);
            ui.label(RichText::new(title).size(16.0).strong().color(CARD_BORDER));
            ui.add_space(8.0);
            add_contents(ui);
        });
}
