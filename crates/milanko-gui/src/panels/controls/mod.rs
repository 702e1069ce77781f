mod actions;
mod display;
mod parameters;
mod range;
mod year;

const SIDEBAR_WIDTH: f32 = 300.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::MilankoApp) {
    if app.ui_state.sidebar_collapsed {
        return;
    }

    let t = app.ui_state.language.strings();
    let (title, subtitle) = (t.title, t.subtitle);

    egui::SidePanel::left("controls")
        .default_width(SIDEBAR_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(SIDEBAR_WIDTH - 20.0);

                ui.add_space(4.0);
                ui.heading(title);
                ui.small(subtitle);
                ui.add_space(4.0);
                ui.separator();

                display::display_section(ui, app);
                ui.separator();
                parameters::parameter_section(ui, app);
                ui.separator();
                year::year_section(ui, app);
                ui.separator();
                range::range_section(ui, app);
                actions::actions_section(ui, app);
            });
        });
}
