use crate::app::MilankoApp;
use milanko_core::range::range_for;

const MAX_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
const MIN_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 140, 240);

pub(super) fn range_section(ui: &mut egui::Ui, app: &mut MilankoApp) {
    // Combinations absent from the published table show nothing at all.
    let Some(range) = range_for(&app.params) else {
        return;
    };
    let t = app.ui_state.language.strings();

    crate::panels::section_header(ui, t.temperature_range, None);
    row(ui, t.min, format!("{:.1}°C", range.t_min), Some(MIN_COLOR));
    row(ui, t.max, format!("{:.1}°C", range.t_max), Some(MAX_COLOR));
    row(ui, t.amplitude, format!("{:.1} K", range.amplitude), None);
    ui.separator();
}

fn row(ui: &mut egui::Ui, label: &str, value: String, color: Option<egui::Color32>) {
    ui.horizontal(|ui| {
        ui.small(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let text = egui::RichText::new(value).small().strong();
            match color {
                Some(c) => ui.label(text.color(c)),
                None => ui.label(text),
            };
        });
    });
}
