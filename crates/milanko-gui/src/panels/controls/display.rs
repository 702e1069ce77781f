use crate::app::MilankoApp;
use crate::i18n::Language;
use milanko_core::layout::LayoutMode;

pub(super) fn display_section(ui: &mut egui::Ui, app: &mut MilankoApp) {
    let t = app.ui_state.language.strings();

    ui.horizontal(|ui| {
        ui.label(t.language);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for &lang in Language::ALL.iter().rev() {
                ui.selectable_value(&mut app.ui_state.language, lang, lang.to_string());
            }
        });
    });

    let layout_changed = crate::panels::choice_combo(
        ui,
        "layout_mode",
        t.layout,
        &mut app.layout,
        LayoutMode::ALL,
        |mode| t.layout_label(*mode).to_string(),
    );
    if layout_changed {
        // The viewer is rebuilt for the new arrangement; pane zooms start over.
        app.zoom.reset();
    }
}
