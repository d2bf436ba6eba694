/// Settings panel -- unit system, compression algorithm and exclude globs.
///
/// Edits go into a local draft; the app saves it after a quiet period and
/// replaces it whenever the backend reports new settings.
use crate::app::SettingsDraft;
use egui::Ui;

/// Algorithms offered in the compression picker.
const COMPRESSION_CHOICES: [&str; 4] = ["xpress4k", "xpress8k", "xpress16k", "lzx"];

/// What the user did in the settings form this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Edited,
    Reset,
}

/// Draw the settings page.
pub fn settings_panel(ui: &mut Ui, draft: &mut SettingsDraft) -> Option<SettingsAction> {
    let mut edited = false;

    ui.heading("Settings");
    ui.add_space(8.0);

    edited |= ui
        .checkbox(&mut draft.decimal, "Use decimal units (KB = 1000 bytes)")
        .changed();

    ui.add_space(6.0);

    egui::ComboBox::from_label("Compression")
        .selected_text(draft.compression.clone())
        .show_ui(ui, |ui| {
            for choice in COMPRESSION_CHOICES {
                edited |= ui
                    .selectable_value(&mut draft.compression, choice.to_string(), choice)
                    .changed();
            }
        });

    ui.add_space(6.0);
    ui.label("Exclude patterns (one glob per line)");
    edited |= ui
        .add(
            egui::TextEdit::multiline(&mut draft.excludes)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .code_editor(),
        )
        .changed();

    ui.add_space(8.0);
    let reset = ui
        .button("Reset to Defaults")
        .on_hover_text("Ask the backend to restore its default settings")
        .clicked();

    if reset {
        Some(SettingsAction::Reset)
    } else if edited {
        Some(SettingsAction::Edited)
    } else {
        None
    }
}
