/// Bottom status bar -- backend status text and progress.
use compactor_core::presentation::Progress;
use compactor_core::RenderIntent;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, intent: &RenderIntent) {
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.horizontal(|ui| {
        if intent.status.is_empty() {
            ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
        } else {
            ui.label(
                egui::RichText::new(&intent.status)
                    .size(12.0)
                    .color(color_normal),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let bar = match intent.progress {
                Progress::Fraction(f) => egui::ProgressBar::new(f).show_percentage(),
                Progress::Indeterminate => egui::ProgressBar::new(0.0).animate(true),
            };
            ui.add(bar.desired_width(180.0));
        });
    });
}
