//! The comparison viewer: renders the leading entries of the comparison
//! list according to the active layout mode.
//!
//! Pane position always equals the entry's index in the underlying list, so
//! remove and reorder operate on full-list indices even when a mode shows
//! only a prefix of the entries.

use tracing::debug;

use crate::app::MilankoApp;
use crate::states::ImageSlot;
use milanko_core::consts::{
    PANE_MIN_FRACTION, SPLIT_DEFAULT_FRACTION, ZOOM_MAX_PERCENT, ZOOM_MIN_PERCENT,
    ZOOM_STEP_PERCENT,
};
use milanko_core::layout::LayoutMode;
use milanko_core::resource;

/// Mutation collected while rendering, applied once the frame is laid out.
enum PaneAction {
    Remove(usize),
    Move { from: usize, to: usize },
}

pub fn show(ctx: &egui::Context, app: &mut MilankoApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.comparison.is_empty() {
            show_placeholder(ui, app);
            return;
        }

        let visible = app.layout.visible_count(app.comparison.len());
        let mut actions = Vec::new();

        match app.layout {
            LayoutMode::List => list_layout(ui, app, &mut actions),
            LayoutMode::Horizontal => horizontal_layout(ui, app, visible, &mut actions),
            LayoutMode::Vertical => vertical_layout(ui, app, visible, &mut actions),
            LayoutMode::Grid => grid_layout(ui, app, visible, &mut actions),
        }

        apply_actions(app, actions);
    });
}

fn show_placeholder(ui: &mut egui::Ui, app: &MilankoApp) {
    let t = app.ui_state.language.strings();
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(t.empty_viewer)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

// ---------------------------------------------------------------------------
// Arrangements
// ---------------------------------------------------------------------------

fn list_layout(ui: &mut egui::Ui, app: &mut MilankoApp, actions: &mut Vec<PaneAction>) {
    egui::ScrollArea::vertical()
        .id_salt("viewer_list")
        .show(ui, |ui| {
            for index in 0..app.comparison.len() {
                pane_ui(ui, app, index, actions);
                ui.add_space(8.0);
            }
        });
}

fn horizontal_layout(
    ui: &mut egui::Ui,
    app: &mut MilankoApp,
    visible: usize,
    actions: &mut Vec<PaneAction>,
) {
    if visible < 2 {
        pane_ui(ui, app, 0, actions);
        return;
    }
    let total = ui.available_height();
    egui::TopBottomPanel::top(egui::Id::new("viewer_split_top"))
        .resizable(true)
        .default_height(total * SPLIT_DEFAULT_FRACTION)
        .height_range(total * PANE_MIN_FRACTION..=total * (1.0 - PANE_MIN_FRACTION))
        .show_inside(ui, |ui| pane_ui(ui, app, 0, actions));
    egui::CentralPanel::default().show_inside(ui, |ui| pane_ui(ui, app, 1, actions));
}

fn vertical_layout(
    ui: &mut egui::Ui,
    app: &mut MilankoApp,
    visible: usize,
    actions: &mut Vec<PaneAction>,
) {
    if visible < 2 {
        pane_ui(ui, app, 0, actions);
        return;
    }
    let total = ui.available_width();
    egui::SidePanel::left(egui::Id::new("viewer_split_left"))
        .resizable(true)
        .default_width(total * SPLIT_DEFAULT_FRACTION)
        .width_range(total * PANE_MIN_FRACTION..=total * (1.0 - PANE_MIN_FRACTION))
        .show_inside(ui, |ui| pane_ui(ui, app, 0, actions));
    egui::CentralPanel::default().show_inside(ui, |ui| pane_ui(ui, app, 1, actions));
}

fn grid_layout(
    ui: &mut egui::Ui,
    app: &mut MilankoApp,
    visible: usize,
    actions: &mut Vec<PaneAction>,
) {
    match visible {
        0 => {}
        1 => pane_ui(ui, app, 0, actions),
        2 => grid_row(ui, app, "single", 0, 1, actions),
        _ => {
            let total = ui.available_height();
            egui::TopBottomPanel::top(egui::Id::new("viewer_grid_rows"))
                .resizable(true)
                .default_height(total * SPLIT_DEFAULT_FRACTION)
                .height_range(total * PANE_MIN_FRACTION..=total * (1.0 - PANE_MIN_FRACTION))
                .show_inside(ui, |ui| grid_row(ui, app, "top", 0, 1, actions));
            egui::CentralPanel::default().show_inside(ui, |ui| {
                if visible > 3 {
                    grid_row(ui, app, "bottom", 2, 3, actions);
                } else {
                    // A slot with no entry renders nothing, not an empty pane.
                    pane_ui(ui, app, 2, actions);
                }
            });
        }
    }
}

fn grid_row(
    ui: &mut egui::Ui,
    app: &mut MilankoApp,
    salt: &str,
    left: usize,
    right: usize,
    actions: &mut Vec<PaneAction>,
) {
    let total = ui.available_width();
    egui::SidePanel::left(egui::Id::new(("viewer_grid_col", salt)))
        .resizable(true)
        .default_width(total * SPLIT_DEFAULT_FRACTION)
        .width_range(total * PANE_MIN_FRACTION..=total * (1.0 - PANE_MIN_FRACTION))
        .show_inside(ui, |ui| pane_ui(ui, app, left, actions));
    egui::CentralPanel::default().show_inside(ui, |ui| pane_ui(ui, app, right, actions));
}

// ---------------------------------------------------------------------------
// Panes
// ---------------------------------------------------------------------------

fn pane_ui(ui: &mut egui::Ui, app: &mut MilankoApp, index: usize, actions: &mut Vec<PaneAction>) {
    let Some(url) = app.comparison.get(index).map(str::to_string) else {
        return;
    };
    let file = resource::display_name(&url).to_string();

    let frame = egui::Frame::group(ui.style());
    let (_, dropped) = ui.dnd_drop_zone::<usize, ()>(frame, |ui| {
        pane_header(ui, app, index, &file, actions);
        pane_body(ui, app, index, &url, &file);
    });

    if let Some(from) = dropped {
        if *from != index {
            actions.push(PaneAction::Move {
                from: *from,
                to: index,
            });
        }
    }
}

fn pane_header(
    ui: &mut egui::Ui,
    app: &mut MilankoApp,
    index: usize,
    file: &str,
    actions: &mut Vec<PaneAction>,
) {
    let t = app.ui_state.language.strings();
    ui.horizontal(|ui| {
        let drag_id = egui::Id::new(("comparison_pane", index));
        let _ = ui.dnd_drag_source(drag_id, index, |ui| {
            ui.label("⠿");
        });
        ui.small(file);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text(t.remove).clicked() {
                actions.push(PaneAction::Remove(index));
            }
            let mut zoom = i32::from(app.zoom.get(index));
            ui.spacing_mut().slider_width = 80.0;
            let resp = ui.add(
                egui::Slider::new(
                    &mut zoom,
                    i32::from(ZOOM_MIN_PERCENT)..=i32::from(ZOOM_MAX_PERCENT),
                )
                .step_by(f64::from(ZOOM_STEP_PERCENT))
                .suffix("%"),
            );
            if resp.changed() {
                app.zoom.set(index, zoom);
            }
        });
    });
}

fn pane_body(ui: &mut egui::Ui, app: &mut MilankoApp, index: usize, url: &str, file: &str) {
    let t = app.ui_state.language.strings();
    let scale = f32::from(app.zoom.get(index)) / 100.0;

    egui::ScrollArea::both()
        .id_salt(("pane_scroll", index))
        .show(ui, |ui| match app.images.slot(url) {
            Some(ImageSlot::Ready(texture)) => {
                let tex_size = texture.size_vec2();
                let fit = if tex_size.x > 0.0 {
                    (ui.available_width() / tex_size.x).min(1.0)
                } else {
                    1.0
                };
                let size = tex_size * fit * scale;
                let _ = ui.add(egui::Image::from_texture(texture).fit_to_exact_size(size));
            }
            Some(ImageSlot::Failed) => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} {}", t.image_not_found, file))
                            .color(egui::Color32::from_gray(120)),
                    );
                });
                ui.add_space(24.0);
            }
            Some(ImageSlot::Loading) | None => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.small(t.loading);
                });
                ui.add_space(24.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Deferred mutations
// ---------------------------------------------------------------------------

fn apply_actions(app: &mut MilankoApp, actions: Vec<PaneAction>) {
    let t = app.ui_state.language.strings();
    for action in actions {
        match action {
            PaneAction::Remove(index) => {
                if app.comparison.remove_at(index).is_some() {
                    app.ui_state.add_log(t.image_removed);
                }
            }
            PaneAction::Move { from, to } => {
                let mut order: Vec<String> =
                    app.comparison.iter().map(str::to_string).collect();
                if from < order.len() && to < order.len() {
                    let entry = order.remove(from);
                    order.insert(to, entry);
                    if app.comparison.reorder(order) {
                        debug!(from, to, "comparison reordered");
                    }
                }
            }
        }
    }
}
