use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisExplorerApp {
    pub state: AppState,
}

impl IrisExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for IrisExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: species filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: header, tables, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    central_content(ui, &mut self.state);
                });
        });
    }
}

fn central_content(ui: &mut Ui, state: &mut AppState) {
    panels::decorative_header(ui, state);

    ui.heading("🌼 Interactive Iris EDA Dashboard");
    ui.label(
        "Explore the classic Iris dataset: filter species in the sidebar, \
         inspect the table and summary statistics, and browse the charts below.",
    );
    ui.add_space(4.0);

    egui::CollapsingHeader::new("Dataset description & table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            dataset_description(ui);
            ui.add_space(4.0);
            tables::raw_table(ui, state);
        });

    ui.add_space(8.0);
    ui.heading("Summary statistics");
    tables::summary_table(ui, state);

    ui.add_space(8.0);
    ui.separator();
    plot::chart_area(ui, state);
}

fn dataset_description(ui: &mut Ui) {
    ui.label(RichText::new("Features").strong());
    ui.label("• sepal_length / sepal_width — sepal size (cm)");
    ui.label("• petal_length / petal_width — petal size (cm)");
    ui.label("• species — setosa, versicolor or virginica (50 samples each)");
    ui.add_space(4.0);
    ui.label(RichText::new("Typical uses").strong());
    ui.label("• Pattern recognition and classification exercises");
    ui.label("• Feature engineering practice");
}
