pub mod controls;
pub mod status;
pub mod top_bar;
pub mod viewer;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Label + ComboBox row for a closed set of choices. Returns `true` if the
/// value changed. Labels come from the active locale, so the widget id is
/// salted separately to survive language switches.
pub(crate) fn choice_combo<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    current: &mut T,
    options: &[T],
    display: impl Fn(&T) -> String,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt(id_salt)
                .selected_text(display(current))
                .show_ui(ui, |ui| {
                    for &choice in options {
                        if ui
                            .selectable_value(current, choice, display(&choice))
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
        });
    });
    changed
}

/// Label + two-way toggle row. Returns `true` if the value changed.
pub(crate) fn binary_toggle<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut T,
    left: (T, &str),
    right: (T, &str),
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left layout: add the rightmost option first.
            if ui.selectable_value(current, right.0, right.1).changed() {
                changed = true;
            }
            if ui.selectable_value(current, left.0, left.1).changed() {
                changed = true;
            }
        });
    });
    changed
}
