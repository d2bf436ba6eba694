/// Message bridge -- the seam between this front end and the host process.
///
/// Outbound payloads go through a [`Bridge`]. Inbound payloads arrive on a
/// crossbeam `Receiver<String>` which the UI drains once per frame; for a
/// line-oriented host, [`spawn_line_reader`] produces that receiver from any
/// reader on a background thread.
use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use std::io::{BufRead, ErrorKind, Write};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Maximum number of inbound messages that may queue up before the reader
/// thread blocks. The UI drains the channel once per frame.
pub const INBOUND_CHANNEL_CAPACITY: usize = 4_096;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("message bridge disconnected")]
    Disconnected,
    #[error("message bridge I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outbound half of the host message bridge.
pub trait Bridge: Send + Sync {
    fn send(&self, payload: String) -> Result<(), BridgeError>;
}

/// Records every payload in memory. Useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBridge {
    sent: Arc<Mutex<Vec<String>>>,
}

impl MemoryBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    /// Remove and return everything sent so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.sent.lock())
    }
}

impl Bridge for MemoryBridge {
    fn send(&self, payload: String) -> Result<(), BridgeError> {
        self.sent.lock().push(payload);
        Ok(())
    }
}

/// Writes one payload per line to a writer (typically stdout).
pub struct LineBridge<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> LineBridge<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> Bridge for LineBridge<W> {
    fn send(&self, payload: String) -> Result<(), BridgeError> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{payload}")
            .and_then(|()| writer.flush())
            .map_err(|e| match e.kind() {
                ErrorKind::BrokenPipe => BridgeError::Disconnected,
                _ => BridgeError::Io(e),
            })
    }
}

/// Read newline-delimited payloads from `reader` on a background thread.
///
/// Blank lines are skipped, and so are lines that are not valid UTF-8. The
/// thread exits at end of input, on a read error, or once the returned
/// receiver is dropped.
pub fn spawn_line_reader<R>(mut reader: R) -> std::io::Result<Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded::<String>(INBOUND_CHANNEL_CAPACITY);

    thread::Builder::new()
        .name("compactor-bridge-reader".into())
        .spawn(move || {
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Bridge: read failed: {e}");
                        break;
                    }
                }

                let line = match std::str::from_utf8(&buf) {
                    Ok(line) => line.trim_end_matches(['\n', '\r']),
                    Err(e) => {
                        warn!("Bridge: dropping line that is not UTF-8: {e}");
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                if tx.send(line.to_owned()).is_err() {
                    break;
                }
            }
            debug!("Bridge: reader finished");
        })?;

    Ok(rx)
}
