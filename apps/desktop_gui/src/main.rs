mod ui;

use clap::Parser;
use eframe::egui;

use catalog::seed;
use editor_core::AppState;
use ui::theme::{PersistedUiSettings, SETTINGS_STORAGE_KEY};
use ui::CatalogGuiApp;

/// Single-window product catalog editor.
#[derive(Debug, Parser)]
#[command(name = "catalog-editor")]
struct Args {
    /// Start with an empty catalog instead of the demo seed data.
    #[arg(long)]
    empty: bool,

    /// Tracing env filter, e.g. "debug" or "editor_core=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.clone())
        .init();

    let initial_catalog = if args.empty {
        Vec::new()
    } else {
        seed::seed_catalog()
    };
    tracing::info!(products = initial_catalog.len(), "starting catalog editor");
    let initial_state = AppState::new(initial_catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Catalog Editor")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Catalog Editor",
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedUiSettings>(&text).ok())
            });
            Ok(Box::new(CatalogGuiApp::new(
                initial_state,
                persisted_settings,
            )))
        }),
    )
}
