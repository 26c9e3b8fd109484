#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tudor_dashboard::run_app;

// --- WASM ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The bin target still needs a main() even though `start` is the entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    log::info!("Tudor dashboard starting in WASM mode...");

    let web_options = eframe::WebOptions::default();

    // No filesystem in the browser: always the compiled-in sample
    let datasets = tudor_dashboard::bundled_datasets()
        .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("{:#}", e)))?;

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find canvas with id 'the_canvas_id'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(run_app(cc, datasets, None))),
        )
        .await
}

// --- NATIVE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tudor_dashboard::config::APP_STATE_PATH;
    use tudor_dashboard::utils::time_utils::local_weekday_code;
    use tudor_dashboard::{Cli, load_datasets, render_report};

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking, fatal on a malformed document)
    let loaded = match load_datasets(&args.weekly, &args.daily) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to load dashboard data: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Weekly bias from {}, daily recap from {}",
        loaded.weekly_source,
        loaded.daily_source
    );
    let datasets = loaded.datasets;

    // D. Headless report
    if args.report {
        println!("{}", render_report(&datasets, local_weekday_code()));
        return Ok(());
    }

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    let initial_view = args.view;
    eframe::run_native(
        "Tudor Dashboard - Weekly Bias & Daily Recap",
        options,
        Box::new(move |cc| Ok(run_app(cc, datasets, initial_view))),
    )
}
