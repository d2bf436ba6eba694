/// About panel -- version information and project links.
use compactor_core::protocol::Command;
use compactor_core::RenderIntent;
use egui::Ui;

const LINKS: [(&str, &str); 2] = [
    ("Project homepage", "https://github.com/Freaky/Compactor"),
    ("Report an issue", "https://github.com/Freaky/Compactor/issues"),
];

/// Draw the about page. Links are opened by the backend.
pub fn about_panel(ui: &mut Ui, intent: &RenderIntent) -> Option<Command> {
    let mut command = None;
    let accent = ui.visuals().hyperlink_color;
    let muted = ui.visuals().weak_text_color();

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Compactor")
                .size(24.0)
                .strong()
                .color(accent),
        );
        ui.add_space(4.0);

        let version = if intent.version.is_empty() {
            "version unknown".to_string()
        } else {
            format!("v{}", intent.version)
        };
        ui.label(egui::RichText::new(version).size(13.0).color(muted));
        if !intent.build_date.is_empty() {
            ui.label(
                egui::RichText::new(format!("built {}", intent.build_date))
                    .size(11.0)
                    .color(muted),
            );
        }

        ui.add_space(12.0);
        ui.label("A front end for the Windows 10 filesystem compression.");
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        for (label, url) in LINKS {
            if ui.link(label).on_hover_text(url).clicked() {
                command = Some(Command::OpenUrl {
                    url: url.to_string(),
                });
            }
        }
    });

    command
}
