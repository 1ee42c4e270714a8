use eframe::egui::{self, Color32, Pos2, RichText, ScrollArea, Ui, Vec2};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – species filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong(format!(
        "Species  ({}/{})",
        state.selection.len(),
        state.dataset.species.len()
    ));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let species = state.dataset.species.clone();
            for sp in &species {
                let color = state.colors.color_for(sp);
                let mut checked = state.selection.contains(sp);
                let label = RichText::new(sp).color(color);
                if ui.checkbox(&mut checked, label).changed() {
                    state.toggle_species(sp);
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(
                RichText::new("Charts and tables update with the selection.")
                    .small()
                    .weak(),
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Iris Explorer");
        ui.separator();
        ui.label(format!(
            "{} samples loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        ui.separator();
        match &state.animation {
            Some(meta) => {
                let name = meta.name.as_deref().unwrap_or("animation");
                ui.label(RichText::new(format!("✨ {name}")).weak());
            }
            None => {
                ui.label(RichText::new("animation unavailable").weak());
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Decorative header
// ---------------------------------------------------------------------------

/// Draw the decorative flower animation above the title, paced by the
/// fetched Lottie descriptor. Omitted entirely when the fetch failed.
pub fn decorative_header(ui: &mut Ui, state: &AppState) {
    let Some(meta) = &state.animation else {
        return;
    };

    let height = 64.0;
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), height),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }

    let time = ui.input(|i| i.time);
    let phase = (time % meta.cycle_secs()) / meta.cycle_secs();
    let angle0 = phase * std::f64::consts::TAU;

    let painter = ui.painter();
    let center = rect.center();
    let petals = 6;
    for p in 0..petals {
        let angle = angle0 + p as f64 * std::f64::consts::TAU / petals as f64;
        let orbit = height * 0.30;
        let pos = Pos2::new(
            center.x + orbit * angle.cos() as f32,
            center.y + orbit * angle.sin() as f32,
        );
        let pulse = 0.5 + 0.5 * (angle0 * 2.0 + p as f64).sin() as f32;
        let color = state
            .colors
            .color_for(state.dataset.species.get(p % 3).map_or("", String::as_str));
        painter.circle_filled(pos, 4.0 + 4.0 * pulse, color.gamma_multiply(0.8));
    }
    painter.circle_filled(center, 6.0, Color32::GOLD);

    // Keep the animation moving between interactions.
    ui.ctx().request_repaint();
}
