/// Top navigation bar -- page tabs.
use compactor_core::presentation::Page;
use egui::Ui;

/// Draw the navigation bar. Returns the page the user asked for, if any.
pub fn nav_bar(ui: &mut Ui, current: Page) -> Option<Page> {
    let mut requested = None;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Compactor")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        for page in Page::ALL {
            if ui.selectable_label(page == current, page.title()).clicked() && page != current {
                requested = Some(page);
            }
        }
    });
    requested
}
