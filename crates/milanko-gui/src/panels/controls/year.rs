use crate::app::MilankoApp;
use crate::states::StatsPhase;
use milanko_core::consts::{YEAR_MAX, YEAR_MIN, YEAR_STEP};
use milanko_core::params::snap_year;

const MAX_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
const MIN_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 140, 240);

pub(super) fn year_section(ui: &mut egui::Ui, app: &mut MilankoApp) {
    let t = app.ui_state.language.strings();
    let mut year = app.year;

    ui.horizontal(|ui| {
        ui.label(t.year);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small(t.years);
            let mut entry = i64::from(year);
            let resp = ui.add(
                egui::DragValue::new(&mut entry).speed(f64::from(YEAR_STEP)),
            );
            if resp.changed() {
                // Out-of-range entries are dropped; the prior year stands.
                if let Some(snapped) = snap_year(entry) {
                    year = snapped;
                }
            }
        });
    });

    ui.add(
        egui::Slider::new(&mut year, YEAR_MIN..=YEAR_MAX)
            .step_by(f64::from(YEAR_STEP))
            .show_value(false),
    );

    if year != app.year {
        app.year = year;
        app.request_stats();
    }

    ui.add_space(4.0);
    match &app.stats.phase {
        StatsPhase::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.small(t.loading);
            });
        }
        StatsPhase::Unavailable => {
            ui.small(egui::RichText::new(t.data_unavailable).color(ui.visuals().error_fg_color));
        }
        StatsPhase::Ready(sample) => {
            stat_row(ui, t.mean, format!("{:.2}°C", sample.mean), None);
            stat_row(ui, t.max, format!("{:.2}°C", sample.max), Some(MAX_COLOR));
            stat_row(ui, t.min, format!("{:.2}°C", sample.min), Some(MIN_COLOR));
        }
        StatsPhase::Idle => {}
    }
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: String, color: Option<egui::Color32>) {
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
