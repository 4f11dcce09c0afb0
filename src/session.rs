//! Shared conversation handle
//!
//! A [`DialogueManager`] owns mutable transcript state, so concurrent callers
//! must be serialized. [`AssistantSession`] wraps one manager behind an async
//! mutex; waiting for the lock is the only suspension point; the reply itself
//! is computed synchronously once the lock is held.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::dialogue::DialogueManager;
use crate::transcript::TranscriptEntry;

/// Cloneable, single-writer handle to one conversation.
#[derive(Debug, Clone)]
pub struct AssistantSession {
    inner: Arc<Mutex<DialogueManager>>,
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new(DialogueManager::default())
    }
}

impl AssistantSession {
    pub fn new(manager: DialogueManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub async fn respond(&self, input: &str) -> String {
        self.inner.lock().await.respond(input)
    }

    pub async fn clear_history(&self) {
        self.inner.lock().await.clear_history();
    }

    /// Snapshot of the transcript at the time of the call.
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.inner.lock().await.transcript().to_vec()
    }

    /// Markdown rendering of the transcript.
    pub async fn history_markdown(&self) -> String {
        self.inner.lock().await.history().to_markdown()
    }
}
