/// Rendering intent -- what the renderer must show, independent of how.
///
/// Everything here is derived from `UiState` by pure functions; computing an
/// intent never changes state.
use super::{ControlSet, Page, Phase, Progress};
use crate::protocol::{Category, CategorySummary, FolderSummary};
use crate::units::{bytes_to_human, format_number, UnitSystem};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderIntent {
    pub phase: Phase,
    pub controls: ControlSet,
    pub page: Page,
    /// Folder being worked on, or empty before one is chosen.
    pub folder: String,
    pub status: String,
    pub progress: Progress,
    pub version: String,
    pub build_date: String,

    // ── Settings form ──────────────────────────────────
    pub decimal: bool,
    pub compression: String,
    pub excludes: String,

    pub summary: SummaryView,
}

/// Display strings for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub count: String,
    pub logical_size: String,
    pub physical_size: String,
}

/// One slice of the stacked size breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownSegment {
    pub category: Category,
    /// Share of the folder's logical size, in percent.
    pub width: f64,
}

/// Display strings for a folder summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub logical_size: String,
    pub physical_size: String,
    /// Physical over logical size, two decimals. `"1.00"` for an empty folder.
    pub ratio: String,
    pub space_saved: String,
    pub compressed: CategoryView,
    pub compressible: CategoryView,
    pub skipped: CategoryView,
    /// Empty when the folder has no logical size.
    pub breakdown: Vec<BreakdownSegment>,
}

impl SummaryView {
    pub fn new(summary: &FolderSummary, units: UnitSystem) -> Self {
        let ratio = if summary.logical_size > 0 {
            summary.physical_size as f64 / summary.logical_size as f64
        } else {
            1.0
        };
        let saved = summary
            .compressed
            .logical_size
            .saturating_sub(summary.compressed.physical_size);

        let breakdown = if summary.logical_size > 0 {
            Category::ALL
                .into_iter()
                .map(|category| BreakdownSegment {
                    category,
                    width: summary.category(category).physical_size as f64
                        / summary.logical_size as f64
                        * 100.0,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            logical_size: bytes_to_human(summary.logical_size, units),
            physical_size: bytes_to_human(summary.physical_size, units),
            ratio: format_number(ratio, 2),
            space_saved: bytes_to_human(saved, units),
            compressed: CategoryView::new(&summary.compressed, units),
            compressible: CategoryView::new(&summary.compressible, units),
            skipped: CategoryView::new(&summary.skipped, units),
            breakdown,
        }
    }

    pub fn category(&self, category: Category) -> &CategoryView {
        match category {
            Category::Compressed => &self.compressed,
            Category::Compressible => &self.compressible,
            Category::Skipped => &self.skipped,
        }
    }
}

impl CategoryView {
    fn new(category: &CategorySummary, units: UnitSystem) -> Self {
        Self {
            count: format_number(category.count as f64, 0),
            logical_size: bytes_to_human(category.logical_size, units),
            physical_size: bytes_to_human(category.physical_size, units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FolderSummary {
        FolderSummary {
            logical_size: 4_000_000,
            physical_size: 3_000_000,
            compressed: CategorySummary {
                count: 1_500,
                logical_size: 2_000_000,
                physical_size: 1_000_000,
            },
            compressible: CategorySummary {
                count: 20,
                logical_size: 1_500_000,
                physical_size: 1_500_000,
            },
            skipped: CategorySummary {
                count: 3,
                logical_size: 500_000,
                physical_size: 500_000,
            },
        }
    }

    #[test]
    fn empty_folder_has_unit_ratio_and_no_breakdown() {
        let view = SummaryView::new(&FolderSummary::default(), UnitSystem::Decimal);
        assert_eq!(view.ratio, "1.00");
        assert!(view.breakdown.is_empty());
        assert_eq!(view.logical_size, "0");
        assert_eq!(view.space_saved, "0");
        assert_eq!(view.compressed.count, "0");
    }

    #[test]
    fn zero_logical_size_never_divides() {
        let summary = FolderSummary {
            physical_size: 4_096,
            ..Default::default()
        };
        let view = SummaryView::new(&summary, UnitSystem::Binary);
        assert_eq!(view.ratio, "1.00");
        assert!(view.breakdown.is_empty());
    }

    #[test]
    fn derived_figures_decimal() {
        let view = SummaryView::new(&sample(), UnitSystem::Decimal);
        assert_eq!(view.logical_size, "4.00 MB");
        assert_eq!(view.physical_size, "3.00 MB");
        assert_eq!(view.ratio, "0.75");
        assert_eq!(view.space_saved, "1.00 MB");
        assert_eq!(view.compressed.count, "1,500");
        assert_eq!(view.compressible.physical_size, "1.50 MB");
        assert_eq!(view.category(Category::Skipped).count, "3");
    }

    #[test]
    fn sizes_follow_unit_system() {
        let view = SummaryView::new(&sample(), UnitSystem::Binary);
        assert_eq!(view.logical_size, "3.81 MiB");
        assert_eq!(view.space_saved, "976.56 KiB");
    }

    #[test]
    fn breakdown_widths_are_physical_share_of_logical() {
        let view = SummaryView::new(&sample(), UnitSystem::Decimal);
        let widths: Vec<(Category, f64)> =
            view.breakdown.iter().map(|s| (s.category, s.width)).collect();
        assert_eq!(
            widths,
            vec![
                (Category::Compressed, 25.0),
                (Category::Compressible, 37.5),
                (Category::Skipped, 12.5),
            ]
        );
    }

    #[test]
    fn space_saved_never_negative() {
        let summary = FolderSummary {
            logical_size: 10,
            physical_size: 20,
            compressed: CategorySummary {
                count: 1,
                logical_size: 10,
                physical_size: 20,
            },
            ..Default::default()
        };
        let view = SummaryView::new(&summary, UnitSystem::Decimal);
        assert_eq!(view.space_saved, "0");
    }
}
