use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Feature;
use crate::data::summary::{FeatureSummary, summarize};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Raw filtered rows
// ---------------------------------------------------------------------------

/// Render the filtered dataset rows as a scrollable table.
pub fn raw_table(ui: &mut Ui, state: &AppState) {
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

    ui.push_id("raw_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(90.0), Feature::ALL.len() + 1)
            .max_scroll_height(260.0)
            .header(20.0, |mut header| {
                for feature in Feature::ALL {
                    header.col(|ui: &mut Ui| {
                        ui.strong(feature.name());
                    });
                }
                header.col(|ui: &mut Ui| {
                    ui.strong("species");
                });
            })
            .body(|body| {
                body.rows(row_height, state.visible_indices.len(), |mut row| {
                    let idx = state.visible_indices[row.index()];
                    let rec = &state.dataset.records[idx];
                    for feature in Feature::ALL {
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{:.1}", feature.value(rec)));
                        });
                    }
                    row.col(|ui: &mut Ui| {
                        let color = state.colors.color_for(&rec.species);
                        ui.label(RichText::new(&rec.species).color(color));
                    });
                });
            });
    });

    if state.visible_indices.is_empty() {
        ui.label(RichText::new("No species selected.").weak());
    }
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

const STAT_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

fn stat_value(summary: &FeatureSummary, stat: &str) -> String {
    let v = match stat {
        "count" => return format!("{}", summary.count),
        "mean" => summary.mean,
        "std" => summary.std,
        "min" => summary.min,
        "25%" => summary.q1,
        "50%" => summary.median,
        "75%" => summary.q3,
        "max" => summary.max,
        _ => f64::NAN,
    };
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.3}")
    }
}

/// Render the per-feature descriptive statistics of the filtered view,
/// one row per statistic like a pandas `describe()` table.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    let summaries = summarize(&state.dataset, &state.visible_indices);

    ui.push_id("summary_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(80.0), Feature::ALL.len() + 1)
            .header(20.0, |mut header| {
                header.col(|_ui| {});
                for (feature, _) in &summaries {
                    let name = feature.name();
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for stat in STAT_ROWS {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.strong(stat);
                        });
                        for (_, summary) in &summaries {
                            row.col(|ui: &mut Ui| {
                                ui.label(stat_value(summary, stat));
                            });
                        }
                    });
                }
            });
    });
}
