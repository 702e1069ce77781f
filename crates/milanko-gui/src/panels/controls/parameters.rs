use crate::app::MilankoApp;
use milanko_core::params::{Albedo, ChartKind, CycleMode, Latitude, Scenario};

pub(super) fn parameter_section(ui: &mut egui::Ui, app: &mut MilankoApp) {
    let t = app.ui_state.language.strings();
    let mut changed = false;

    changed |= crate::panels::choice_combo(
        ui,
        "scenario",
        t.scenario,
        &mut app.params.scenario,
        Scenario::ALL,
        |s| s.to_string(),
    );

    changed |= crate::panels::binary_toggle(
        ui,
        t.chart_kind,
        &mut app.params.chart,
        (ChartKind::Temperature, t.chart_temperature),
        (ChartKind::Variation, t.chart_variation),
    );

    changed |= crate::panels::binary_toggle(
        ui,
        t.albedo,
        &mut app.params.albedo,
        (Albedo::Low, Albedo::Low.as_str()),
        (Albedo::High, Albedo::High.as_str()),
    );

    changed |= cycle_row(ui, t.obliquity, &mut app.params.obliquity, t);
    changed |= cycle_row(ui, t.eccentricity, &mut app.params.eccentricity, t);
    changed |= cycle_row(ui, t.precession, &mut app.params.precession, t);

    ui.horizontal(|ui| {
        ui.label(t.latitude);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for &lat in Latitude::ALL.iter().rev() {
                if ui
                    .radio_value(&mut app.params.latitude, lat, lat.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
        });
    });

    if changed {
        app.request_stats();
    }
}

fn cycle_row(
    ui: &mut egui::Ui,
    label: &str,
    mode: &mut CycleMode,
    t: &crate::i18n::Strings,
) -> bool {
    crate::panels::binary_toggle(
        ui,
        label,
        mode,
        (CycleMode::Constant, t.constant),
        (CycleMode::Variable, t.variable),
    )
}
