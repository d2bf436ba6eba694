/// Action dispatcher -- one method per command the user can issue.
///
/// Inputs are forwarded verbatim and nothing is acknowledged: the effect of a
/// command is only ever observed through later events. Encoding or bridge
/// failures are logged and otherwise swallowed.
use std::sync::Arc;
use tracing::{debug, warn};

use crate::bridge::Bridge;
use crate::protocol::{codec, Command};

/// Cheap to clone; clones share the same bridge.
#[derive(Clone)]
pub struct ActionDispatcher {
    bridge: Arc<dyn Bridge>,
}

impl ActionDispatcher {
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self { bridge }
    }

    /// Encode and send any command.
    pub fn send(&self, command: Command) {
        let payload = match codec::encode(&command) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode {} command: {e}", command.kind());
                return;
            }
        };
        debug!("Sending {}", command.kind());
        if let Err(e) = self.bridge.send(payload) {
            warn!("Failed to send {} command: {e}", command.kind());
        }
    }

    pub fn open_url(&self, url: impl Into<String>) {
        self.send(Command::OpenUrl { url: url.into() });
    }

    pub fn reset_config(&self) {
        self.send(Command::ResetConfig);
    }

    pub fn save_config(
        &self,
        decimal: bool,
        compression: impl Into<String>,
        excludes: impl Into<String>,
    ) {
        self.send(Command::SaveConfig {
            decimal,
            compression: compression.into(),
            excludes: excludes.into(),
        });
    }

    pub fn choose_folder(&self) {
        self.send(Command::ChooseFolder);
    }

    pub fn compress(&self) {
        self.send(Command::Compress);
    }

    pub fn decompress(&self) {
        self.send(Command::Decompress);
    }

    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    pub fn analyse(&self) {
        self.send(Command::Analyse);
    }

    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    pub fn quit(&self) {
        self.send(Command::Quit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeError, MemoryBridge};

    fn dispatcher() -> (ActionDispatcher, MemoryBridge) {
        let bridge = MemoryBridge::new();
        (ActionDispatcher::new(Arc::new(bridge.clone())), bridge)
    }

    #[test]
    fn each_action_sends_its_command() {
        let (actions, bridge) = dispatcher();
        actions.reset_config();
        actions.choose_folder();
        actions.compress();
        actions.decompress();
        actions.pause();
        actions.resume();
        actions.analyse();
        actions.stop();
        actions.quit();

        let kinds: Vec<String> = bridge
            .take()
            .iter()
            .map(|p| codec::decode_command(p).unwrap().kind().to_string())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "ResetConfig",
                "ChooseFolder",
                "Compress",
                "Decompress",
                "Pause",
                "Resume",
                "Analyse",
                "Stop",
                "Quit",
            ]
        );
    }

    #[test]
    fn save_config_forwards_values_verbatim() {
        let (actions, bridge) = dispatcher();
        actions.save_config(false, "not-a-real-algorithm", "\n\n*.iso\n");

        let sent = bridge.take();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            codec::decode_command(&sent[0]).unwrap(),
            Command::SaveConfig {
                decimal: false,
                compression: "not-a-real-algorithm".into(),
                excludes: "\n\n*.iso\n".into(),
            }
        );
    }

    #[test]
    fn open_url_carries_url() {
        let (actions, bridge) = dispatcher();
        actions.open_url("https://example.com/compactor");
        assert_eq!(
            bridge.sent(),
            vec![r#"{"type":"OpenUrl","url":"https://example.com/compactor"}"#]
        );
    }

    struct BrokenBridge;

    impl Bridge for BrokenBridge {
        fn send(&self, _payload: String) -> Result<(), BridgeError> {
            Err(BridgeError::Disconnected)
        }
    }

    #[test]
    fn bridge_failure_is_swallowed() {
        let actions = ActionDispatcher::new(Arc::new(BrokenBridge));
        actions.stop();
        actions.quit();
    }
}
