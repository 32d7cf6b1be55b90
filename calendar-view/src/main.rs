//! Application entry point for the stress relief calendar.
//!
//! This binary sets up logging and eframe/egui and delegates all input
//! handling and drawing to [`Viewer`] from the `viewer` module.

mod intro;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Logging goes through `env_logger`; set `RUST_LOG` to change the level
/// (defaults to `info`).
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the month table fails validation or eframe cannot create the
///   native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stress Relief Calendar")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stress Relief Calendar",
        options,
        Box::new(|_cc| {
            let viewer = Viewer::new()?;
            log::info!("calendar ready");
            Ok(Box::new(viewer))
        }),
    )
}
