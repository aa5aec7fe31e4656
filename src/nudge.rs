use crate::pointer::PointerHost;
use anyhow::{anyhow, Result};
use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How long the worker sleeps when no nudge is pending.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// Anything that can accept a coalesced repaint request. The session talks
/// to this seam so tests can count scheduling without a worker thread.
pub trait NudgeScheduler {
    fn request_nudge(&self);
}

enum NudgeMessage {
    Request,
    Shutdown,
}

/// Coalesces "please repaint the overlay" requests into at most one
/// synthetic pointer move per debounce window.
///
/// Each request replaces any pending deadline. When a deadline elapses the
/// worker reads the pointer position and warps it back onto itself; the
/// host toolkit treats that as motion and regenerates the overlay paint.
pub struct PointerNudgeDebouncer {
    tx: Sender<NudgeMessage>,
    worker: Option<JoinHandle<()>>,
}

impl PointerNudgeDebouncer {
    pub fn spawn(host: Arc<dyn PointerHost>, interval: Duration) -> Result<Self> {
        let (tx, rx) = channel::<NudgeMessage>();
        let worker = thread::Builder::new()
            .name("ghost-nudge".to_string())
            .spawn(move || {
                let mut deadline: Option<Instant> = None;
                loop {
                    let wait = match deadline {
                        Some(at) => at.saturating_duration_since(Instant::now()),
                        None => IDLE_WAIT,
                    };
                    match rx.recv_timeout(wait) {
                        Ok(NudgeMessage::Request) => {
                            // A newer request supersedes a pending deadline.
                            deadline = Some(Instant::now() + interval);
                        }
                        Ok(NudgeMessage::Shutdown)
                        | Err(RecvTimeoutError::Disconnected) => break,
                        Err(RecvTimeoutError::Timeout) => {
                            if deadline.is_some_and(|at| Instant::now() >= at) {
                                deadline = None;
                                fire_nudge(host.as_ref());
                            }
                        }
                    }
                }
            })
            .map_err(|err| anyhow!("failed to spawn pointer nudge thread: {err}"))?;

        Ok(Self {
            tx,
            worker: Some(worker),
        })
    }
}

impl NudgeScheduler for PointerNudgeDebouncer {
    fn request_nudge(&self) {
        let _ = self.tx.send(NudgeMessage::Request);
    }
}

impl Drop for PointerNudgeDebouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(NudgeMessage::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn fire_nudge(host: &dyn PointerHost) {
    match host.cursor_position() {
        Some(pos) => {
            tracing::debug!(?pos, "re-issuing pointer position to trigger overlay repaint");
            host.warp_cursor(pos);
        }
        None => tracing::debug!("pointer device unavailable, nudge skipped"),
    }
}
