//! Compactor — front end for a folder compression utility.
//!
//! Thin binary entry point. All logic lives in the `compactor-core`
//! and `compactor-gui` crates. The host process talks to us over stdio:
//! one JSON event per line in on stdin, one JSON command per line out on
//! stdout.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use compactor_core::bridge::{spawn_line_reader, LineBridge};
use compactor_core::ActionDispatcher;
use std::io::BufReader;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. stdout carries the message bridge, so
    // logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Compactor starting");

    let inbound = spawn_line_reader(BufReader::new(std::io::stdin()))?;
    let actions = ActionDispatcher::new(Arc::new(LineBridge::new(std::io::stdout())));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Compactor")
            .with_inner_size([750.0, 430.0])
            .with_min_inner_size([600.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Compactor",
        options,
        Box::new(move |cc| {
            Ok(Box::new(compactor_gui::CompactorApp::new(
                cc, inbound, actions,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
