/// Compactor Core -- protocol, presentation state and formatting.
///
/// This crate contains all front-end logic with zero UI dependencies. The
/// backend and the rendering technology are both external: the core consumes
/// backend events and produces a rendering intent.
///
/// # Modules
///
/// - [`units`] — Human-readable byte/count formatting and parsing.
/// - [`ratelimit`] — Debounce and throttle wrappers for UI-triggered commands.
/// - [`protocol`] — Command/event types and the JSON wire codec.
/// - [`bridge`] — The host message bridge seam and concrete bridges.
/// - [`dispatch`] — One action per command, fire-and-forget.
/// - [`presentation`] — The UI state machine and rendering intent.
/// - [`router`] — Feeds decoded inbound messages to the state machine.
pub mod bridge;
pub mod dispatch;
pub mod presentation;
pub mod protocol;
pub mod ratelimit;
pub mod router;
pub mod units;

pub use dispatch::ActionDispatcher;
pub use presentation::{PresentationMachine, RenderIntent};
pub use router::ResponseRouter;
