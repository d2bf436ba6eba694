/// Wire protocol -- commands sent to the backend and events received from it.
///
/// Every message is a flat JSON object whose `type` field names the variant,
/// e.g. `{"type":"Folder","path":"C:\\Games"}`. Serde's internal tagging
/// gives exactly that shape, so both enums derive it.
pub mod codec;

use serde::{Deserialize, Serialize};

pub use codec::{decode, encode, CodecError};

/// A user-initiated request to the backend. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    OpenUrl {
        url: String,
    },
    ResetConfig,
    SaveConfig {
        decimal: bool,
        compression: String,
        excludes: String,
    },
    ChooseFolder,
    Compress,
    Decompress,
    Pause,
    Resume,
    Analyse,
    Stop,
    Quit,
}

impl Command {
    /// The wire `type` discriminant of this command.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenUrl { .. } => "OpenUrl",
            Self::ResetConfig => "ResetConfig",
            Self::SaveConfig { .. } => "SaveConfig",
            Self::ChooseFolder => "ChooseFolder",
            Self::Compress => "Compress",
            Self::Decompress => "Decompress",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Analyse => "Analyse",
            Self::Stop => "Stop",
            Self::Quit => "Quit",
        }
    }
}

/// A state change reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Config {
        decimal: bool,
        compression: String,
        excludes: String,
    },
    Folder {
        path: String,
    },
    Version {
        date: String,
        version: String,
    },
    Status {
        status: String,
        /// Progress fraction in `0.0..=1.0`; absent means indeterminate.
        #[serde(default)]
        pct: Option<f32>,
    },
    Paused,
    Resumed,
    Stopped,
    Scanned,
    Compacting,
    FolderSummary {
        info: FolderSummary,
    },
    Page {
        page: String,
    },
    /// Any `type` this build does not know. Decode-only.
    #[serde(other, skip_serializing)]
    Unknown,
}

impl Event {
    /// The wire `type` discriminant of this event.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "Config",
            Self::Folder { .. } => "Folder",
            Self::Version { .. } => "Version",
            Self::Status { .. } => "Status",
            Self::Paused => "Paused",
            Self::Resumed => "Resumed",
            Self::Stopped => "Stopped",
            Self::Scanned => "Scanned",
            Self::Compacting => "Compacting",
            Self::FolderSummary { .. } => "FolderSummary",
            Self::Page { .. } => "Page",
            Self::Unknown => "Unknown",
        }
    }

    pub fn status(status: impl Into<String>, pct: Option<f32>) -> Self {
        Self::Status {
            status: status.into(),
            pct,
        }
    }

    pub fn folder(path: impl Into<String>) -> Self {
        Self::Folder { path: path.into() }
    }
}

/// File count and sizes for one category of scanned files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub count: u64,
    pub logical_size: u64,
    pub physical_size: u64,
}

/// Aggregate breakdown of a scanned folder. Replaced wholesale on every
/// `FolderSummary` event, never patched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    /// Total uncompressed size in bytes.
    pub logical_size: u64,
    /// Total on-disk size in bytes.
    pub physical_size: u64,
    pub compressed: CategorySummary,
    pub compressible: CategorySummary,
    pub skipped: CategorySummary,
}

/// Mutually-exclusive classification of scanned files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Compressed,
    Compressible,
    Skipped,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Compressed,
        Category::Compressible,
        Category::Skipped,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Compressed => "Compressed",
            Category::Compressible => "Compressible",
            Category::Skipped => "Skipped",
        }
    }
}

impl FolderSummary {
    pub fn category(&self, category: Category) -> &CategorySummary {
        match category {
            Category::Compressed => &self.compressed,
            Category::Compressible => &self.compressible,
            Category::Skipped => &self.skipped,
        }
    }
}
