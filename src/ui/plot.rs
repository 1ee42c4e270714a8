use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxSpread, Legend, Plot, Points};

use crate::chart::{self, Histogram, PairPanel, Scatter};
use crate::color::{SpeciesColors, correlation_color};
use crate::data::model::Feature;
use crate::state::{AppState, ChartTab};

// ---------------------------------------------------------------------------
// Chart area: tab strip + the active chart
// ---------------------------------------------------------------------------

/// Render the tab strip and the currently selected chart.
pub fn chart_area(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in ChartTab::ALL {
            if ui
                .selectable_label(state.active_tab == tab, tab.title())
                .clicked()
            {
                state.active_tab = tab;
            }
        }
    });
    ui.separator();

    match state.active_tab {
        ChartTab::Histogram => histogram_tab(ui, state),
        ChartTab::BoxPlot => box_plot_tab(ui, state),
        ChartTab::Scatter => scatter_tab(ui, state),
        ChartTab::Pairwise => pairwise_tab(ui, state),
        ChartTab::Heatmap => heatmap_tab(ui, state),
    }
}

/// Dropdown over the four numeric features.
fn feature_combo(ui: &mut Ui, id: &str, label: &str, current: &mut Feature) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(current.label())
            .show_ui(ui, |ui: &mut Ui| {
                for feature in Feature::ALL {
                    ui.selectable_value(current, feature, feature.label());
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

fn histogram_tab(ui: &mut Ui, state: &mut AppState) {
    feature_combo(ui, "hist_feature", "Feature", &mut state.hist_feature);

    let spec = chart::histogram(&state.dataset, &state.visible_indices, state.hist_feature);
    let colors = &state.colors;

    Plot::new("histogram")
        .legend(Legend::default())
        .x_axis_label(spec.feature.label())
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            draw_histogram(plot_ui, &spec, colors, 0.95);
        });
}

fn draw_histogram(
    plot_ui: &mut egui_plot::PlotUi,
    spec: &Histogram,
    colors: &SpeciesColors,
    bar_fill: f32,
) {
    if spec.edges.len() < 2 {
        return;
    }
    let width = spec.edges[1] - spec.edges[0];

    for series in &spec.series {
        // Overlaid semi-transparent bars, one chart per species.
        let color = colors.color_for(&series.species).gamma_multiply(0.6);
        let bars: Vec<Bar> = series
            .counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(i, &count)| {
                Bar::new(spec.edges[i] + width / 2.0, count as f64)
                    .width(width * bar_fill as f64)
            })
            .collect();
        plot_ui.bar_chart(BarChart::new(bars).name(&series.species).color(color));
    }
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

fn box_plot_tab(ui: &mut Ui, state: &mut AppState) {
    feature_combo(ui, "box_feature", "Feature", &mut state.box_feature);

    let spec = chart::box_plot(&state.dataset, &state.visible_indices, state.box_feature);
    let colors = &state.colors;
    let names: Vec<String> = spec.groups.iter().map(|g| g.species.clone()).collect();

    Plot::new("box_plot")
        .legend(Legend::default())
        .y_axis_label(spec.feature.label())
        .x_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() < 1e-6 && rounded >= 0.0 {
                names
                    .get(rounded as usize)
                    .cloned()
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for (i, group) in spec.groups.iter().enumerate() {
                let x = i as f64;
                let color = colors.color_for(&group.species);

                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(
                        group.lower_whisker,
                        group.q1,
                        group.median,
                        group.q3,
                        group.upper_whisker,
                    ),
                )
                .box_width(0.5)
                .fill(color.gamma_multiply(0.4))
                .stroke(egui::Stroke::new(1.5, color));

                plot_ui.box_plot(
                    egui_plot::BoxPlot::new(vec![elem])
                        .name(&group.species)
                        .color(color),
                );

                if !group.outliers.is_empty() {
                    let pts: Vec<[f64; 2]> =
                        group.outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(Points::new(pts).radius(3.0).color(color));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// 2D scatter
// ---------------------------------------------------------------------------

fn scatter_tab(ui: &mut Ui, state: &mut AppState) {
    feature_combo(ui, "scatter_x", "X-axis", &mut state.scatter_x);
    feature_combo(ui, "scatter_y", "Y-axis", &mut state.scatter_y);

    let spec = chart::scatter(
        &state.dataset,
        &state.visible_indices,
        state.scatter_x,
        state.scatter_y,
    );
    let colors = &state.colors;

    Plot::new("scatter")
        .legend(Legend::default())
        .x_axis_label(spec.x.label())
        .y_axis_label(spec.y.label())
        .show(ui, |plot_ui| {
            draw_scatter(plot_ui, &spec, colors, 3.0);
        });
}

fn draw_scatter(
    plot_ui: &mut egui_plot::PlotUi,
    spec: &Scatter,
    colors: &SpeciesColors,
    radius: f32,
) {
    for group in &spec.groups {
        let color = colors.color_for(&group.species);
        plot_ui.points(
            Points::new(group.points.clone())
                .name(&group.species)
                .color(color)
                .radius(radius),
        );
    }
}

// ---------------------------------------------------------------------------
// Pairwise matrix
// ---------------------------------------------------------------------------

fn pairwise_tab(ui: &mut Ui, state: &mut AppState) {
    let spec = chart::pairwise(&state.dataset, &state.visible_indices);
    let colors = &state.colors;

    let label_width = 70.0;
    let spacing = 4.0;
    let cell = ((ui.available_width() - label_width - spacing * 4.0)
        / Feature::ALL.len() as f32)
        .clamp(80.0, 170.0);

    // Column headers.
    ui.horizontal(|ui: &mut Ui| {
        ui.add_space(label_width);
        for feature in Feature::ALL {
            ui.add_sized([cell, 16.0], egui::Label::new(RichText::new(feature.name()).small()));
        }
    });

    for (row, row_feature) in Feature::ALL.iter().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            ui.add_sized(
                [label_width, cell],
                egui::Label::new(RichText::new(row_feature.name()).small()),
            );
            for col in 0..Feature::ALL.len() {
                let panel = &spec.panels[row * Feature::ALL.len() + col];
                let plot = Plot::new(format!("pair_{row}_{col}"))
                    .width(cell)
                    .height(cell)
                    .show_axes(false)
                    .show_grid(false)
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .allow_boxed_zoom(false);
                plot.show(ui, |plot_ui| match panel {
                    PairPanel::Distribution(h) => draw_histogram(plot_ui, h, colors, 1.0),
                    PairPanel::Relation(s) => draw_scatter(plot_ui, s, colors, 1.5),
                });
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

fn heatmap_tab(ui: &mut Ui, state: &mut AppState) {
    let spec = chart::correlation_heatmap(&state.dataset, &state.visible_indices);

    egui::Grid::new("heatmap")
        .spacing([2.0, 2.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for feature in spec.features {
                ui.strong(feature.name());
            }
            ui.end_row();

            for (row, row_feature) in spec.features.iter().enumerate() {
                ui.strong(row_feature.name());
                for col in 0..spec.features.len() {
                    let r = spec.matrix[row][col];
                    let fill = correlation_color(r);
                    let text = if r.is_nan() {
                        "NaN".to_string()
                    } else {
                        format!("{r:.2}")
                    };
                    // Dark cells get light text.
                    let luma = fill.r() as u16 + fill.g() as u16 + fill.b() as u16;
                    let text_color = if luma < 360 {
                        Color32::WHITE
                    } else {
                        Color32::BLACK
                    };
                    egui::Frame::new()
                        .fill(fill)
                        .inner_margin(egui::Margin::symmetric(18, 12))
                        .show(ui, |ui: &mut Ui| {
                            ui.label(RichText::new(text).color(text_color).monospace());
                        });
                }
                ui.end_row();
            }
        });

    if state.visible_indices.len() < 2 {
        ui.label(
            RichText::new("Correlations need at least two visible samples.").weak(),
        );
    }
}
