//! Conversation transcript: an append-only log of user and assistant turns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    fn now(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of turns. Entries are only ever appended or cleared wholesale.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: &str) {
        self.entries.push(TranscriptEntry::now(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.entries.push(TranscriptEntry::now(Role::Assistant, content));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render as markdown, one section per turn.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "### {} ({})\n\n{}\n\n",
                entry.role.as_str(),
                entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                entry.content
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.push_assistant("hello");
        transcript.push_user("bye");

        let roles: Vec<Role> = transcript.entries().iter().map(|e| e.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(transcript.entries()[2].content, "bye");
    }

    #[test]
    fn timestamps_are_monotonic() {
        let mut transcript = Transcript::new();
        transcript.push_user("a");
        transcript.push_assistant("b");

        let entries = transcript.entries();
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[test]
    fn clear_empties_log() {
        let mut transcript = Transcript::new();
        transcript.push_user("a");
        transcript.clear();

        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn entry_json_shape() {
        let mut transcript = Transcript::new();
        transcript.push_user("what is mcp");

        let value = serde_json::to_value(&transcript.entries()[0]).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "what is mcp");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn markdown_lists_every_turn() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello");
        transcript.push_assistant("Hi there");

        let md = transcript.to_markdown();
        assert!(md.contains("### user"));
        assert!(md.contains("### assistant"));
        assert!(md.find("hello").unwrap() < md.find("Hi there").unwrap());
    }
}
