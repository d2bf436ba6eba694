/// Main `eframe::App` implementation for Compactor.
///
/// Each frame drains inbound bridge messages into the router, fires any due
/// rate-limited commands, computes the rendering intent once, and paints it.
/// Widgets never touch presentation state directly: they return actions, and
/// the app turns those into commands or local events.
use crate::panels;
use crate::panels::settings_panel::SettingsAction;
use crate::widgets;
use compactor_core::presentation::Page;
use compactor_core::protocol::{Command, Event};
use compactor_core::ratelimit::{Debounce, Throttle};
use compactor_core::{ActionDispatcher, RenderIntent, ResponseRouter};
use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

/// Quiet period after the last settings edit before it is saved.
pub const SETTINGS_DEBOUNCE: Duration = Duration::from_millis(500);

/// Minimum spacing between pause/resume commands.
pub const CONTROL_THROTTLE: Duration = Duration::from_millis(250);

/// How often to poll the bridge while the backend is busy.
const ACTIVE_POLL: Duration = Duration::from_millis(100);

/// How often to poll the bridge otherwise.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Settings as edited in the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsDraft {
    pub decimal: bool,
    pub compression: String,
    pub excludes: String,
}

impl SettingsDraft {
    fn reported(intent: &RenderIntent) -> Self {
        Self {
            decimal: intent.decimal,
            compression: intent.compression.clone(),
            excludes: intent.excludes.clone(),
        }
    }
}

/// The Compactor application.
pub struct CompactorApp {
    router: ResponseRouter,
    inbound: Receiver<String>,
    actions: ActionDispatcher,
    draft: SettingsDraft,
    /// Settings as last reported by the backend.
    confirmed: SettingsDraft,
    autosave: Debounce<SettingsDraft>,
    pause_resume: Throttle<Command>,
    quit_sent: bool,
}

impl CompactorApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        inbound: Receiver<String>,
        actions: ActionDispatcher,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::from_parts(inbound, actions)
    }

    /// Build the app without a window.
    pub fn from_parts(inbound: Receiver<String>, actions: ActionDispatcher) -> Self {
        let saver = actions.clone();
        let autosave = Debounce::new(SETTINGS_DEBOUNCE, move |d: SettingsDraft| {
            saver.save_config(d.decimal, d.compression, d.excludes)
        });

        let sender = actions.clone();
        let pause_resume = Throttle::new(CONTROL_THROTTLE, move |c: Command| sender.send(c));

        Self {
            router: ResponseRouter::new(),
            inbound,
            actions,
            draft: SettingsDraft::default(),
            confirmed: SettingsDraft::default(),
            autosave,
            pause_resume,
            quit_sent: false,
        }
    }

    pub fn intent(&self) -> RenderIntent {
        self.router.intent()
    }

    pub fn draft(&self) -> &SettingsDraft {
        &self.draft
    }

    /// Drain inbound messages and fire due rate-limited commands.
    ///
    /// Returns `true` if any inbound event was applied.
    pub fn pump(&mut self) -> bool {
        let changed = self.router.drain(&self.inbound);
        self.autosave.poll();
        self.pause_resume.poll();
        let intent = self.router.intent();
        self.sync_settings(&intent);
        changed
    }

    /// Send a command from a control click.
    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Pause | Command::Resume => self.pause_resume.invoke(command),
            other => self.actions.send(other),
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.router.route_event(Event::Page {
            page: page.id().to_string(),
        });
    }

    pub fn apply_settings_action(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::Edited => self.autosave.invoke(self.draft.clone()),
            SettingsAction::Reset => {
                self.autosave.clear();
                self.actions.reset_config();
            }
        }
    }

    /// Replace the draft with the backend's settings whenever they change.
    fn sync_settings(&mut self, intent: &RenderIntent) {
        let reported = SettingsDraft::reported(intent);
        if reported != self.confirmed {
            self.draft = reported.clone();
            self.confirmed = reported;
        }
    }

    fn next_wakeup(&self) -> Option<Instant> {
        [self.autosave.next_deadline(), self.pause_resume.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }
}

impl eframe::App for CompactorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Process bridge messages and timers ────────────────────────────
        self.pump();

        if ctx.input(|i| i.viewport().close_requested()) && !self.quit_sent {
            tracing::info!("Window closing, asking backend to quit");
            self.actions.quit();
            self.quit_sent = true;
        }

        let intent = self.router.intent();

        let poll = if intent.phase.is_active() {
            ACTIVE_POLL
        } else {
            IDLE_POLL
        };
        let wake = self
            .next_wakeup()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(poll, |d| d.min(poll));
        ctx.request_repaint_after(wake);

        let mut page_request = None;
        let mut command = None;
        let mut settings_action = None;

        // ── Navigation ────────────────────────────────────────────────────
        egui::TopBottomPanel::top("nav_bar")
            .min_height(32.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                page_request = widgets::nav_bar::nav_bar(ui, intent.page);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &intent);
                ui.add_space(2.0);
            });

        // ── Active page ───────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| match intent.page {
            Page::Main => command = panels::main_panel::main_panel(ui, &intent),
            Page::Settings => {
                settings_action = panels::settings_panel::settings_panel(ui, &mut self.draft)
            }
            Page::About => command = panels::about_panel::about_panel(ui, &intent),
        });

        if let Some(page) = page_request {
            self.navigate(page);
        }
        if let Some(action) = settings_action {
            self.apply_settings_action(action);
        }
        if let Some(command) = command {
            self.run_command(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compactor_core::bridge::MemoryBridge;
    use compactor_core::protocol::codec;
    use crossbeam_channel::Sender;
    use std::sync::Arc;

    fn app() -> (CompactorApp, Sender<String>, MemoryBridge) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let bridge = MemoryBridge::new();
        let actions = ActionDispatcher::new(Arc::new(bridge.clone()));
        (CompactorApp::from_parts(rx, actions), tx, bridge)
    }

    fn sent_commands(bridge: &MemoryBridge) -> Vec<Command> {
        bridge
            .take()
            .iter()
            .map(|p| codec::decode_command(p).unwrap())
            .collect()
    }

    #[test]
    fn config_event_populates_draft() {
        let (mut app, tx, _bridge) = app();
        tx.send(r#"{"type":"Config","decimal":true,"compression":"lzx","excludes":"*.zip"}"#.into())
            .unwrap();
        assert!(app.pump());
        assert_eq!(
            app.draft(),
            &SettingsDraft {
                decimal: true,
                compression: "lzx".into(),
                excludes: "*.zip".into(),
            }
        );
    }

    #[test]
    fn local_edits_survive_until_backend_reports_new_settings() {
        let (mut app, tx, _bridge) = app();
        tx.send(r#"{"type":"Config","decimal":false,"compression":"lzx","excludes":""}"#.into())
            .unwrap();
        app.pump();

        app.draft.excludes = "*.iso".into();
        app.pump();
        assert_eq!(app.draft().excludes, "*.iso");

        tx.send(r#"{"type":"Config","decimal":false,"compression":"lzx","excludes":"*.vhd"}"#.into())
            .unwrap();
        app.pump();
        assert_eq!(app.draft().excludes, "*.vhd");
    }

    #[test]
    fn pause_clicks_are_throttled() {
        let (mut app, _tx, bridge) = app();
        app.run_command(Command::Pause);
        app.run_command(Command::Pause);
        assert_eq!(sent_commands(&bridge), vec![Command::Pause]);
        assert!(app.pause_resume.is_pending());
    }

    #[test]
    fn other_commands_are_sent_immediately() {
        let (mut app, _tx, bridge) = app();
        app.run_command(Command::ChooseFolder);
        app.run_command(Command::Analyse);
        assert_eq!(
            sent_commands(&bridge),
            vec![Command::ChooseFolder, Command::Analyse]
        );
    }

    #[test]
    fn settings_edit_is_debounced_and_reset_cancels_it() {
        let (mut app, _tx, bridge) = app();
        app.draft.decimal = true;
        app.apply_settings_action(SettingsAction::Edited);
        assert!(bridge.sent().is_empty());
        assert!(app.autosave.is_pending());

        app.apply_settings_action(SettingsAction::Reset);
        assert!(!app.autosave.is_pending());
        assert_eq!(sent_commands(&bridge), vec![Command::ResetConfig]);
    }

    #[test]
    fn navigation_goes_through_the_router() {
        let (mut app, _tx, _bridge) = app();
        app.navigate(Page::Settings);
        assert_eq!(app.intent().page, Page::Settings);
    }
}
