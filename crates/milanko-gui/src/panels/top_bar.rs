use crate::app::MilankoApp;

pub fn show(ctx: &egui::Context, app: &mut MilankoApp) {
    let t = app.ui_state.language.strings();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui.button("☰").clicked() {
                app.ui_state.sidebar_collapsed = !app.ui_state.sidebar_collapsed;
            }
            ui.strong(t.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(t.about).clicked() {
                    app.show_about = true;
                }
            });
        });
        ui.add_space(2.0);
    });
}
