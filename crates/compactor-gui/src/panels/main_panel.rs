/// Main panel -- folder, summary figures, breakdown and action buttons.
use crate::widgets::breakdown_bar::{breakdown_bar, category_color};
use compactor_core::presentation::Control;
use compactor_core::protocol::{Category, Command};
use compactor_core::RenderIntent;
use egui::Ui;

/// Draw the main page. Returns the command for any button clicked.
pub fn main_panel(ui: &mut Ui, intent: &RenderIntent) -> Option<Command> {
    let mut command = None;
    let muted = ui.visuals().weak_text_color();

    // ── Folder ────────────────────────────────────────────────────────────
    ui.horizontal(|ui| {
        let choose = ui
            .add_enabled(
                !intent.phase.is_active(),
                egui::Button::new("📁 Choose Folder").min_size(egui::vec2(110.0, 28.0)),
            )
            .on_disabled_hover_text("Stop the current operation first");
        if choose.clicked() {
            command = Some(Command::ChooseFolder);
        }

        if intent.folder.is_empty() {
            ui.label(egui::RichText::new("No folder selected").color(muted));
        } else {
            ui.label(egui::RichText::new(&intent.folder).strong());
        }
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    // ── Summary ───────────────────────────────────────────────────────────
    let summary = &intent.summary;
    egui::Grid::new("folder_summary")
        .num_columns(4)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            ui.label(egui::RichText::new("Files").color(muted));
            ui.label(egui::RichText::new("Size").color(muted));
            ui.label(egui::RichText::new("On Disk").color(muted));
            ui.end_row();

            for category in Category::ALL {
                let view = summary.category(category);
                ui.label(egui::RichText::new(category.label()).color(category_color(category)));
                ui.label(view.count.as_str());
                ui.label(view.logical_size.as_str());
                ui.label(view.physical_size.as_str());
                ui.end_row();
            }

            ui.label(egui::RichText::new("Total").strong());
            ui.label("");
            ui.label(egui::RichText::new(&summary.logical_size).strong());
            ui.label(egui::RichText::new(&summary.physical_size).strong());
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Ratio").color(muted));
        ui.label(summary.ratio.as_str());
        ui.separator();
        ui.label(egui::RichText::new("Space saved").color(muted));
        ui.label(summary.space_saved.as_str());
    });

    ui.add_space(6.0);
    breakdown_bar(ui, &summary.breakdown, 14.0);

    ui.add_space(12.0);

    // ── Actions ───────────────────────────────────────────────────────────
    ui.horizontal(|ui| {
        for control in Control::ALL {
            let button = egui::Button::new(control_label(control)).min_size(egui::vec2(90.0, 28.0));
            if ui
                .add_visible(intent.controls.contains(control), button)
                .clicked()
            {
                command = Some(control_command(control));
            }
        }
    });

    command
}

fn control_label(control: Control) -> &'static str {
    match control {
        Control::Pause => "⏸ Pause",
        Control::Resume => "▶ Resume",
        Control::Stop => "⏹ Stop",
        Control::Analyse => "🔍 Analyse",
        Control::Compress => "Compress",
        Control::Decompress => "Decompress",
    }
}

/// The command a control sends when clicked.
pub fn control_command(control: Control) -> Command {
    match control {
        Control::Pause => Command::Pause,
        Control::Resume => Command::Resume,
        Control::Stop => Command::Stop,
        Control::Analyse => Command::Analyse,
        Control::Compress => Command::Compress,
        Control::Decompress => Command::Decompress,
    }
}
