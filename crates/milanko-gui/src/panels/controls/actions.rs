use crate::app::MilankoApp;
use milanko_core::consts::DATASET_BASE_URL;
use milanko_core::resource;

pub(super) fn actions_section(ui: &mut egui::Ui, app: &mut MilankoApp) {
    let t = app.ui_state.language.strings();

    let add = egui::Button::new(t.add_to_comparison);
    if ui.add_sized([ui.available_width(), 28.0], add).clicked() {
        let url = resource::image_url(DATASET_BASE_URL, &app.params);
        app.comparison.push(url);
        app.ui_state.add_log(t.image_added);
    }

    if !app.comparison.is_empty() {
        ui.add_space(4.0);
        ui.small(format!(
            "{} {}",
            app.comparison.len(),
            t.images_in_comparison
        ));
    }
}
