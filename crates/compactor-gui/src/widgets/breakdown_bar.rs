/// Stacked breakdown bar -- one coloured slice per file category.
use compactor_core::presentation::BreakdownSegment;
use compactor_core::protocol::Category;
use egui::{Color32, Rect, Ui, Vec2};

/// Draw a horizontal bar split into category slices by percentage width.
///
/// An empty breakdown draws only the background.
pub fn breakdown_bar(ui: &mut Ui, segments: &[BreakdownSegment], height: f32) {
    let width = ui.available_width();
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    // Background.
    painter.rect_filled(rect, 2.0, Color32::from_rgb(0x2a, 0x2a, 0x3c));

    let mut x = rect.min.x;
    for segment in segments {
        let w = width * (segment.width as f32 / 100.0).clamp(0.0, 1.0);
        if w > 0.5 {
            let slice = Rect::from_min_size(egui::pos2(x, rect.min.y), Vec2::new(w, height));
            painter.rect_filled(slice, 0.0, category_color(segment.category));
        }
        x += w;
    }
}

pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Compressed => Color32::from_rgb(0xa6, 0xe3, 0xa1), // green
        Category::Compressible => Color32::from_rgb(0x89, 0xb4, 0xfa), // blue
        Category::Skipped => Color32::from_rgb(0xf9, 0xe2, 0xaf), // yellow
    }
}
