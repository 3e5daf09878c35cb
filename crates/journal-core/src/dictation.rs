//! Dictated search input.
//!
//! A speech-to-text capability outside this crate produces incremental
//! transcripts on a channel. [`Dictation`] forwards them onto a watch channel
//! so readers only ever see the latest text, and tracks whether a recording
//! session is active. Starting while recording and stopping while idle are
//! no-ops.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Whether a dictation session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictationState {
    #[default]
    Idle,
    Recording,
}

/// Two-state dictation controller
#[derive(Debug)]
pub struct Dictation {
    transcript: Arc<watch::Sender<String>>,
    task: Option<JoinHandle<()>>,
}

impl Dictation {
    #[must_use]
    pub fn new() -> Self {
        let (transcript, _) = watch::channel(String::new());
        Self {
            transcript: Arc::new(transcript),
            task: None,
        }
    }

    /// Current state. A session whose speech source closed reads as idle.
    #[must_use]
    pub fn state(&self) -> DictationState {
        match &self.task {
            Some(task) if !task.is_finished() => DictationState::Recording,
            _ => DictationState::Idle,
        }
    }

    /// Whether a session is running
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.state() == DictationState::Recording
    }

    /// Begin forwarding transcript updates from `updates`.
    ///
    /// Returns `false` without touching `updates` when already recording.
    /// Must be called within a Tokio runtime.
    pub fn start(&mut self, mut updates: UnboundedReceiver<String>) -> bool {
        if self.is_recording() {
            tracing::debug!("Dictation already recording; ignoring start");
            return false;
        }

        let transcript = Arc::clone(&self.transcript);
        self.task = Some(tokio::spawn(async move {
            while let Some(text) = updates.recv().await {
                tracing::trace!(len = text.len(), "Transcript update");
                transcript.send_replace(text);
            }
            tracing::debug!("Speech source closed; dictation finished");
        }));

        tracing::info!("Dictation started");
        true
    }

    /// Cancel the running session. Returns `false` when idle.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                tracing::info!("Dictation stopped");
                true
            }
            _ => {
                tracing::debug!("Dictation idle; ignoring stop");
                false
            }
        }
    }

    /// Latest transcript text
    #[must_use]
    pub fn transcript(&self) -> String {
        self.transcript.borrow().clone()
    }

    /// Receiver that observes every new transcript (last value wins)
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<String> {
        self.transcript.subscribe()
    }
}

impl Default for Dictation {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Dictation {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use super::*;

    const WAIT: Duration = Duration::from_secs(2);

    async fn wait_for_transcript(receiver: &mut watch::Receiver<String>, expected: &str) {
        timeout(WAIT, async {
            while receiver.borrow_and_update().as_str() != expected {
                receiver.changed().await.unwrap();
            }
        })
        .await
        .expect("transcript never arrived");
    }

    #[test]
    fn stop_when_idle_is_a_no_op() {
        let mut dictation = Dictation::new();
        assert_eq!(dictation.state(), DictationState::Idle);
        assert!(!dictation.stop());
        assert_eq!(dictation.transcript(), "");
    }

    #[tokio::test]
    async fn start_twice_keeps_first_session() {
        let mut dictation = Dictation::new();
        let (_first_tx, first_rx) = mpsc::unbounded_channel();
        let (_second_tx, second_rx) = mpsc::unbounded_channel();

        assert!(dictation.start(first_rx));
        assert!(!dictation.start(second_rx));
        assert_eq!(dictation.state(), DictationState::Recording);
    }

    #[tokio::test]
    async fn last_transcript_wins() {
        let mut dictation = Dictation::new();
        let mut receiver = dictation.watch();
        let (tx, rx) = mpsc::unbounded_channel();
        assert!(dictation.start(rx));

        for partial in ["trip", "trip to", "trip to Paris"] {
            tx.send(partial.to_string()).unwrap();
        }

        wait_for_transcript(&mut receiver, "trip to Paris").await;
        assert_eq!(dictation.transcript(), "trip to Paris");
    }

    #[tokio::test]
    async fn stop_then_stop_again() {
        let mut dictation = Dictation::new();
        let (_tx, rx) = mpsc::unbounded_channel::<String>();
        assert!(dictation.start(rx));

        assert!(dictation.stop());
        assert_eq!(dictation.state(), DictationState::Idle);
        assert!(!dictation.stop());
    }

    #[tokio::test]
    async fn closed_source_returns_to_idle_and_allows_restart() {
        let mut dictation = Dictation::new();
        let mut receiver = dictation.watch();
        let (tx, rx) = mpsc::unbounded_channel();
        assert!(dictation.start(rx));
        tx.send("hello".to_string()).unwrap();
        drop(tx);

        wait_for_transcript(&mut receiver, "hello").await;
        timeout(WAIT, async {
            while dictation.is_recording() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("dictation never went idle");

        let (tx, rx) = mpsc::unbounded_channel();
        assert!(dictation.start(rx));
        tx.send("again".to_string()).unwrap();
        wait_for_transcript(&mut receiver, "again").await;
    }
}
