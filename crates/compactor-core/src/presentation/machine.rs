/// The presentation state machine and the UI state it owns.
///
/// Every event is treated as a self-contained fact from the backend, not as
/// the reply to some earlier command, so transitions are driven purely by the
/// event kind and the current phase. Lifecycle events that make no sense in
/// the current phase (a `Resumed` that was never paused, a `Stopped` with no
/// scan running) leave the state untouched.
use tracing::debug;

use super::intent::{RenderIntent, SummaryView};
use super::{Control, ControlSet, Page, Phase, Progress};
use crate::protocol::{Event, FolderSummary};
use crate::units::UnitSystem;

/// All state the presentation layer keeps. Lives for the UI session and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub phase: Phase,
    /// Controls made visible by the most recent lifecycle transition.
    pub controls: ControlSet,
    /// Currently displayed summary; all-zero until the backend sends one.
    pub summary: FolderSummary,
    pub units: UnitSystem,
    pub page: Page,

    // ── Backend-reported text ──────────────────────────
    pub folder: Option<String>,
    pub status: String,
    pub progress: Progress,
    pub version: String,
    pub build_date: String,

    // ── Settings as last reported by the backend ───────
    pub compression: String,
    pub excludes: String,
}

#[derive(Debug, Clone, Default)]
pub struct PresentationMachine {
    state: UiState,
}

impl PresentationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn controls(&self) -> ControlSet {
        self.state.controls
    }

    /// Process one event to completion.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Folder { path } => {
                // Stale figures from a previous run must never show for the
                // new folder.
                self.state.summary = FolderSummary::default();
                self.state.folder = Some(path);
                self.enter(Phase::Scanning);
            }
            Event::Compacting => match self.state.phase {
                // Compress/Decompress start from `Scanned`, so only a folder
                // is required.
                Phase::Idle => self.ignore(&event),
                _ => self.enter(Phase::Compacting),
            },
            Event::Paused => match self.state.phase {
                Phase::Scanning => self.enter(Phase::Paused {
                    was_compacting: false,
                }),
                Phase::Compacting => self.enter(Phase::Paused {
                    was_compacting: true,
                }),
                Phase::Paused { .. } => {}
                _ => self.ignore(&event),
            },
            Event::Resumed => match self.state.phase {
                Phase::Paused { was_compacting } => self.enter(if was_compacting {
                    Phase::Compacting
                } else {
                    Phase::Scanning
                }),
                _ => self.ignore(&event),
            },
            Event::Stopped | Event::Scanned if self.state.phase.is_active() => {
                self.enter(Phase::Scanned)
            }
            Event::Stopped | Event::Scanned => self.ignore(&event),
            Event::FolderSummary { info } => {
                self.state.summary = info;
            }
            Event::Page { page } => match Page::from_id(&page) {
                Some(page) => self.state.page = page,
                None => debug!("Ignoring unknown page {page:?}"),
            },
            Event::Config {
                decimal,
                compression,
                excludes,
            } => {
                self.state.units = UnitSystem::from_decimal(decimal);
                self.state.compression = compression;
                self.state.excludes = excludes;
            }
            Event::Version { date, version } => {
                self.state.build_date = date;
                self.state.version = version;
            }
            Event::Status { status, pct } => {
                self.state.status = status;
                self.state.progress = Progress::from_pct(pct);
            }
            Event::Unknown => debug!("Ignoring unrecognized event"),
        }
    }

    /// Compute the rendering intent for the current state.
    pub fn intent(&self) -> RenderIntent {
        let s = &self.state;
        RenderIntent {
            phase: s.phase,
            controls: s.controls,
            page: s.page,
            folder: s.folder.clone().unwrap_or_default(),
            status: s.status.clone(),
            progress: s.progress,
            version: s.version.clone(),
            build_date: s.build_date.clone(),
            decimal: s.units.is_decimal(),
            compression: s.compression.clone(),
            excludes: s.excludes.clone(),
            summary: SummaryView::new(&s.summary, s.units),
        }
    }

    /// A lifecycle event that does not apply to the current phase.
    fn ignore(&self, event: &Event) {
        debug!("Ignoring {} while {:?}", event.kind(), self.state.phase);
    }

    fn enter(&mut self, phase: Phase) {
        if self.state.phase != phase {
            debug!("Phase {:?} -> {:?}", self.state.phase, phase);
        }
        self.state.phase = phase;
        self.state.controls = visible_controls(phase, &self.state.summary);
    }
}

/// Controls shown on entering `phase`. Decided from the stored summary, never
/// from rendered output.
fn visible_controls(phase: Phase, summary: &FolderSummary) -> ControlSet {
    match phase {
        Phase::Idle => ControlSet::empty(),
        Phase::Scanning | Phase::Compacting => ControlSet::of(&[Control::Pause, Control::Stop]),
        Phase::Paused { .. } => ControlSet::of(&[Control::Resume, Control::Stop]),
        Phase::Scanned => ControlSet::empty()
            .with(Control::Analyse)
            .with_if(Control::Compress, summary.compressible.count > 0)
            .with_if(Control::Decompress, summary.compressed.count > 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::CategorySummary;

    fn summary(compressed: u64, compressible: u64) -> FolderSummary {
        FolderSummary {
            logical_size: 1_000,
            physical_size: 800,
            compressed: CategorySummary {
                count: compressed,
                logical_size: 400,
                physical_size: 200,
            },
            compressible: CategorySummary {
                count: compressible,
                logical_size: 600,
                physical_size: 600,
            },
            skipped: CategorySummary::default(),
        }
    }

    fn machine_after(events: Vec<Event>) -> PresentationMachine {
        let mut m = PresentationMachine::new();
        for e in events {
            m.apply(e);
        }
        m
    }

    #[test]
    fn starts_idle_with_nothing_visible() {
        let m = PresentationMachine::new();
        assert_eq!(m.phase(), Phase::Idle);
        assert!(m.controls().is_empty());
        assert_eq!(m.state().page, Page::Main);
        assert_eq!(m.state().summary, FolderSummary::default());
    }

    #[test]
    fn folder_enters_scanning() {
        let m = machine_after(vec![Event::folder("C:\\Games")]);
        assert_eq!(m.phase(), Phase::Scanning);
        assert_eq!(m.controls(), ControlSet::of(&[Control::Pause, Control::Stop]));
        assert_eq!(m.state().folder.as_deref(), Some("C:\\Games"));
    }

    #[test]
    fn folder_resets_previous_summary() {
        let mut m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::FolderSummary {
                info: summary(5, 3),
            },
            Event::Scanned,
        ]);
        assert_eq!(m.state().summary.compressed.count, 5);

        m.apply(Event::folder("C:\\B"));
        assert_eq!(m.state().summary, FolderSummary::default());
        assert_eq!(m.state().summary.compressed.count, 0);
        assert_eq!(m.phase(), Phase::Scanning);
    }

    #[test]
    fn pause_and_resume_toggle_controls() {
        let mut m = machine_after(vec![Event::folder("C:\\A"), Event::Paused]);
        assert_eq!(m.phase(), Phase::Paused { was_compacting: false });
        assert!(m.controls().contains(Control::Resume));
        assert!(!m.controls().contains(Control::Pause));

        m.apply(Event::Resumed);
        assert_eq!(m.phase(), Phase::Scanning);
        assert!(m.controls().contains(Control::Pause));
        assert!(!m.controls().contains(Control::Resume));
    }

    #[test]
    fn resume_returns_to_compacting() {
        let mut m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::Compacting,
            Event::Paused,
        ]);
        assert_eq!(m.phase(), Phase::Paused { was_compacting: true });

        m.apply(Event::Resumed);
        assert_eq!(m.phase(), Phase::Compacting);
        assert_eq!(m.controls(), ControlSet::of(&[Control::Pause, Control::Stop]));
    }

    #[test]
    fn scanned_shows_actions_from_stored_counts() {
        let m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::FolderSummary {
                info: summary(12, 0),
            },
            Event::Scanned,
        ]);
        assert_eq!(m.phase(), Phase::Scanned);
        assert!(m.controls().contains(Control::Analyse));
        assert!(m.controls().contains(Control::Decompress));
        assert!(!m.controls().contains(Control::Compress));
        assert!(!m.controls().contains(Control::Pause));
        assert!(!m.controls().contains(Control::Stop));
    }

    #[test]
    fn scanned_with_compressible_files_offers_compress() {
        let m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::FolderSummary {
                info: summary(0, 4),
            },
            Event::Stopped,
        ]);
        assert_eq!(
            m.controls(),
            ControlSet::of(&[Control::Analyse, Control::Compress])
        );
    }

    #[test]
    fn folder_summary_does_not_change_phase_or_controls() {
        let mut m = machine_after(vec![Event::folder("C:\\A")]);
        let before = (m.phase(), m.controls());
        m.apply(Event::FolderSummary {
            info: summary(1, 1),
        });
        assert_eq!((m.phase(), m.controls()), before);
    }

    #[test]
    fn config_sets_units_and_settings_text() {
        let m = machine_after(vec![Event::Config {
            decimal: true,
            compression: "lzx".into(),
            excludes: "*.zip".into(),
        }]);
        assert_eq!(m.state().units, UnitSystem::Decimal);
        assert_eq!(m.state().compression, "lzx");
        assert_eq!(m.state().excludes, "*.zip");
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn status_sets_text_and_progress() {
        let mut m = machine_after(vec![Event::status("Scanning", Some(0.4))]);
        assert_eq!(m.state().status, "Scanning");
        assert_eq!(m.state().progress, Progress::Fraction(0.4));

        m.apply(Event::status("Compacting", None));
        assert_eq!(m.state().progress, Progress::Indeterminate);
    }

    #[test]
    fn unknown_page_is_ignored() {
        let mut m = machine_after(vec![Event::Page {
            page: "settings".into(),
        }]);
        assert_eq!(m.state().page, Page::Settings);

        let before = m.state().clone();
        m.apply(Event::Page {
            page: "nowhere".into(),
        });
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn stray_resume_after_scan_is_ignored() {
        let mut m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::FolderSummary {
                info: summary(2, 1),
            },
            Event::Scanned,
        ]);
        let before = m.state().clone();

        m.apply(Event::Resumed);
        m.apply(Event::Paused);
        assert_eq!(m.state(), &before);
        assert_eq!(m.phase(), Phase::Scanned);
    }

    #[test]
    fn lifecycle_events_while_idle_are_ignored() {
        let mut m = PresentationMachine::new();
        for event in [
            Event::Stopped,
            Event::Scanned,
            Event::Resumed,
            Event::Paused,
            Event::Compacting,
        ] {
            m.apply(event);
            assert_eq!(m.phase(), Phase::Idle);
            assert!(m.controls().is_empty());
        }
    }

    #[test]
    fn resume_while_running_keeps_phase() {
        let mut m = machine_after(vec![Event::folder("C:\\A"), Event::Compacting]);
        m.apply(Event::Resumed);
        assert_eq!(m.phase(), Phase::Compacting);

        let mut m = machine_after(vec![Event::folder("C:\\A")]);
        m.apply(Event::Resumed);
        assert_eq!(m.phase(), Phase::Scanning);
    }

    #[test]
    fn repeated_pause_keeps_resume_target() {
        let m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::Compacting,
            Event::Paused,
            Event::Paused,
        ]);
        assert_eq!(m.phase(), Phase::Paused { was_compacting: true });
    }

    #[test]
    fn compaction_starts_from_scanned() {
        let m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::FolderSummary {
                info: summary(0, 4),
            },
            Event::Scanned,
            Event::Compacting,
        ]);
        assert_eq!(m.phase(), Phase::Compacting);
        assert_eq!(m.controls(), ControlSet::of(&[Control::Pause, Control::Stop]));
    }

    #[test]
    fn unknown_event_changes_nothing() {
        let mut m = machine_after(vec![Event::folder("C:\\A")]);
        let before = m.state().clone();
        m.apply(Event::Unknown);
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn version_has_no_phase_effect() {
        let m = machine_after(vec![
            Event::folder("C:\\A"),
            Event::Version {
                date: "2019-07-01".into(),
                version: "0.7.1-1a2b3c".into(),
            },
        ]);
        assert_eq!(m.phase(), Phase::Scanning);
        assert_eq!(m.state().version, "0.7.1-1a2b3c");
        assert_eq!(m.state().build_date, "2019-07-01");
    }
}
