/// Compactor GUI -- egui-based desktop frontend.
///
/// This crate only paints a `RenderIntent` and turns clicks into commands.
/// All presentation logic lives in `compactor-core`.
pub mod app;
pub mod panels;
pub mod widgets;

pub use app::CompactorApp;
