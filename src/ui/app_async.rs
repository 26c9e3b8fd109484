use eframe::egui::{self, ColorImage, Event, UserData, ViewportCommand};
use poll_promise::Promise;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::export_filename;
use crate::ui::app::{AppError, TudorDashboardApp};
use crate::utils::app_time::{AppInstant, elapsed_ms, now};
use crate::utils::time_utils::utc_now;

/// Export runs in two steps: ask the backend for a screenshot, then write the
/// PNG off the UI thread. Either step in flight counts as busy.
#[derive(Default)]
pub(super) struct ExportState {
    awaiting_screenshot: bool,
    promise: Option<Promise<Result<PathBuf, AppError>>>,
    started: Option<AppInstant>,
}

impl ExportState {
    pub(super) fn is_busy(&self) -> bool {
        self.awaiting_screenshot || self.promise.is_some()
    }
}

fn latest_screenshot(ctx: &egui::Context) -> Option<Arc<ColorImage>> {
    ctx.input(|i| {
        i.events.iter().rev().find_map(|event| match event {
            Event::Screenshot { image, .. } => Some(Arc::clone(image)),
            _ => None,
        })
    })
}

impl TudorDashboardApp {
    pub(super) fn start_export(&mut self, ctx: &egui::Context) {
        if self.export.is_busy() {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_export {
            log::info!("Requesting dashboard screenshot");
        }

        self.export.awaiting_screenshot = true;
        self.export.started = Some(now());
        ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
    }

    pub(super) fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if !self.export.awaiting_screenshot {
            return;
        }
        let Some(image) = latest_screenshot(ctx) else {
            return;
        };
        self.export.awaiting_screenshot = false;

        let capture = match self.export_region {
            Some(rect) => image.region(&rect, Some(ctx.pixels_per_point())),
            None => (*image).clone(),
        };
        if capture.size[0] == 0 || capture.size[1] == 0 {
            self.export.started = None;
            self.last_error = Some(AppError::NothingToExport);
            return;
        }

        let path = PathBuf::from(export_filename(utc_now().date_naive()));

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("dashboard_export", move || {
            crate::data::export::save_png(&capture, &path)
                .map_err(|err| AppError::ExportFailed(format!("{:#}", err)))
        });

        #[cfg(target_arch = "wasm32")]
        let promise = {
            let _ = (capture, path);
            Promise::from_ready(Err(AppError::ExportFailed(
                "PNG export is only available in the desktop build".to_string(),
            )))
        };

        self.export.promise = Some(promise);
    }

    pub(super) fn poll_export(&mut self) {
        let outcome = self
            .export
            .promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        let Some(result) = outcome else {
            return;
        };
        self.export.promise = None;
        let elapsed = self.export.started.take().map(elapsed_ms).unwrap_or_default();

        match result {
            Ok(path) => {
                log::info!("Dashboard exported to {} ({} ms)", path.display(), elapsed);
                self.last_export = Some(path);
            }
            Err(err) => {
                log::error!("{}", err);
                self.last_error = Some(err);
            }
        }
    }
}
