/// Presentation state machine -- turns backend events into a rendering intent.
///
/// [`PresentationMachine`] owns the UI state and is the only thing that
/// mutates it. Renderers read a [`RenderIntent`] snapshot each frame; they
/// never feed rendered values back in.
pub mod intent;
pub mod machine;

pub use intent::{BreakdownSegment, CategoryView, RenderIntent, SummaryView};
pub use machine::{PresentationMachine, UiState};

/// Lifecycle phase of the current folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No folder chosen yet.
    #[default]
    Idle,
    /// Folder chosen; the backend is scanning or compressing it.
    Scanning,
    /// Active sub-phase while compressed data is being reorganised.
    Compacting,
    /// Work is suspended. Remembers which active phase to return to.
    Paused { was_compacting: bool },
    /// Work finished or was stopped; results are shown.
    Scanned,
}

impl Phase {
    /// True while the backend is doing (or has suspended) work on the folder.
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Scanning | Phase::Compacting | Phase::Paused { .. })
    }
}

/// A named control whose visibility the state machine decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Pause,
    Resume,
    Stop,
    Analyse,
    Compress,
    Decompress,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Pause,
        Control::Resume,
        Control::Stop,
        Control::Analyse,
        Control::Compress,
        Control::Decompress,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of visible controls. Every control not in the set is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlSet(u8);

impl ControlSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn of(controls: &[Control]) -> Self {
        controls.iter().fold(Self::empty(), |set, &c| set.with(c))
    }

    pub fn with(self, control: Control) -> Self {
        Self(self.0 | control.bit())
    }

    pub fn with_if(self, control: Control, cond: bool) -> Self {
        if cond {
            self.with(control)
        } else {
            self
        }
    }

    pub fn contains(self, control: Control) -> bool {
        self.0 & control.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Control> {
        Control::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

/// The page shown by the renderer. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Main,
    Settings,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Main, Page::Settings, Page::About];

    /// Look up a page by its exact identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Page::Main => "main",
            Page::Settings => "settings",
            Page::About => "about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Main => "Compactor",
            Page::Settings => "Settings",
            Page::About => "About",
        }
    }
}

/// Progress indicator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Fraction complete, clamped to `0.0..=1.0`.
    Fraction(f32),
    Indeterminate,
}

impl Default for Progress {
    fn default() -> Self {
        Progress::Fraction(0.0)
    }
}

impl Progress {
    pub fn from_pct(pct: Option<f32>) -> Self {
        match pct {
            Some(p) if p.is_finite() => Progress::Fraction(p.clamp(0.0, 1.0)),
            Some(_) | None => Progress::Indeterminate,
        }
    }
}
