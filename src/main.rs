mod anim;
mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use eframe::egui;

use app::IrisExplorerApp;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is bundled; a parse failure is fatal.
    let dataset = data::loader::load_embedded().context("loading bundled Iris dataset")?;

    // Best-effort, one-shot; a failure just drops the header animation.
    let animation = anim::fetch_animation(anim::LOTTIE_URL);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset, animation);
    eframe::run_native(
        "Iris Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(IrisExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {e}"))?;

    Ok(())
}
