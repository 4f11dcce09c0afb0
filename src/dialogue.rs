//! Dialogue Manager: turns raw user input into a reply.
//!
//! Input is lowercased and trimmed, then classified in fixed priority order:
//! greeting, help, knowledge lookup. The first match wins, so a greeting word
//! anywhere in the input short-circuits retrieval. Every non-empty input
//! appends exactly two transcript entries: the user turn, then the reply.

use std::sync::Arc;

use tracing::{debug, info};

use crate::knowledge::KnowledgeStore;
use crate::metrics;
use crate::preprocess;
use crate::replies::Reply;
use crate::retrieval::{RetrievalEngine, ScoredRecord, DEFAULT_LIMIT};
use crate::transcript::{Transcript, TranscriptEntry};

pub const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

pub const HELP_PHRASES: &[&str] = &["help", "assist", "guide", "how to use", "what can you do"];

pub const RELATED_TOPICS_HEADER: &str = "\n\n**Related topics:**";

/// Default number of related titles appended after the top answer.
pub const DEFAULT_RELATED_TOPICS: usize = 2;

/// Coarse classification of normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Help,
    Lookup,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::Lookup => "lookup",
        }
    }
}

/// Classify already-normalized input by substring containment.
pub fn classify(normalized: &str) -> Intent {
    if GREETING_PHRASES.iter().any(|p| normalized.contains(p)) {
        Intent::Greeting
    } else if HELP_PHRASES.iter().any(|p| normalized.contains(p)) {
        Intent::Help
    } else {
        Intent::Lookup
    }
}

/// Lowercase and trim raw input.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Tunables for reply generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantOptions {
    /// Cap on retrieval results considered per query.
    pub max_results: usize,
    /// How many runner-up titles to list under the answer.
    pub related_topics: usize,
    /// Expand abbreviations before retrieval.
    pub expand_abbreviations: bool,
}

impl Default for AssistantOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_LIMIT,
            related_topics: DEFAULT_RELATED_TOPICS,
            expand_abbreviations: false,
        }
    }
}

/// One conversation: a knowledge store plus the transcript of turns so far.
#[derive(Debug, Clone)]
pub struct DialogueManager {
    store: Arc<KnowledgeStore>,
    options: AssistantOptions,
    transcript: Transcript,
}

impl Default for DialogueManager {
    fn default() -> Self {
        Self::new(KnowledgeStore::builtin())
    }
}

impl DialogueManager {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self::with_options(store, AssistantOptions::default())
    }

    pub fn with_options(store: Arc<KnowledgeStore>, options: AssistantOptions) -> Self {
        Self {
            store,
            options,
            transcript: Transcript::new(),
        }
    }

    pub fn options(&self) -> &AssistantOptions {
        &self.options
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Produce a reply for `raw_input` and record both turns.
    ///
    /// Never fails. Empty or whitespace-only input gets the "unclear" reply
    /// and leaves the transcript untouched.
    pub fn respond(&mut self, raw_input: &str) -> String {
        let normalized = normalize(raw_input);
        if normalized.is_empty() {
            metrics::record_reply("unclear");
            return Reply::Unclear.text().to_string();
        }

        self.transcript.push_user(raw_input);
        let reply = self.generate(&normalized);
        self.transcript.push_assistant(&reply);

        reply
    }

    fn generate(&self, normalized: &str) -> String {
        let intent = classify(normalized);
        debug!(intent = intent.as_str(), "classified input");

        match intent {
            Intent::Greeting => {
                metrics::record_reply("greeting");
                Reply::Greeting.text().to_string()
            }
            Intent::Help => {
                metrics::record_reply("help");
                Reply::Help.text().to_string()
            }
            Intent::Lookup => {
                let query = if self.options.expand_abbreviations {
                    self.preprocess_query(normalized)
                } else {
                    normalized.to_string()
                };
                let results = self.search(&query);
                match format_answer(&results, self.options.related_topics) {
                    Some(answer) => {
                        metrics::record_reply("answer");
                        answer
                    }
                    None => {
                        metrics::record_reply("fallback");
                        Reply::Fallback.text().to_string()
                    }
                }
            }
        }
    }

    /// Rank knowledge records for `query` with this manager's result cap.
    pub fn search(&self, query: &str) -> Vec<ScoredRecord<'_>> {
        RetrievalEngine::new(&self.store)
            .with_limit(self.options.max_results)
            .search(query)
    }

    /// Expand abbreviations in `query`. Only applied on the reply path when
    /// `expand_abbreviations` is set.
    pub fn preprocess_query(&self, query: &str) -> String {
        preprocess::expand_abbreviations(query)
    }

    /// All turns so far, oldest first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.transcript.entries()
    }

    pub fn history(&self) -> &Transcript {
        &self.transcript
    }

    pub fn clear_history(&mut self) {
        info!(entries = self.transcript.len(), "clearing conversation history");
        self.transcript.clear();
    }
}

/// Top result's content, plus runner-up titles. `None` when nothing matched.
pub fn format_answer(results: &[ScoredRecord<'_>], related_topics: usize) -> Option<String> {
    let (top, rest) = results.split_first()?;
    let mut reply = top.record.content.clone();

    if !rest.is_empty() && related_topics > 0 {
        reply.push_str(RELATED_TOPICS_HEADER);
        for related in rest.iter().take(related_topics) {
            reply.push_str("\n• ");
            reply.push_str(&related.record.title);
        }
    }

    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeRecord;
    use crate::replies::{FALLBACK, GREETING, HELP, UNCLEAR};
    use crate::transcript::Role;

    fn content_of(key: &str) -> String {
        KnowledgeStore::builtin().get(key).unwrap().content.clone()
    }

    #[test]
    fn classify_priority_order() {
        assert_eq!(classify("hello"), Intent::Greeting);
        assert_eq!(classify("hello, can you help"), Intent::Greeting);
        assert_eq!(classify("can you help me"), Intent::Help);
        assert_eq!(classify("what can you do"), Intent::Help);
        assert_eq!(classify("what is mcp"), Intent::Lookup);
    }

    #[test]
    fn classify_matches_inside_words() {
        // "architecture" contains "hi"
        assert_eq!(classify("mcp architecture"), Intent::Greeting);
        // "guidelines" contains "guide"
        assert_eq!(classify("sampling guidelines"), Intent::Help);
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  What IS Mcp \n"), "what is mcp");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn greeting_wins_over_knowledge() {
        let mut manager = DialogueManager::default();
        assert_eq!(manager.respond("hello"), GREETING);
        assert_eq!(manager.respond("hello, what is mcp"), GREETING);
        assert_eq!(manager.respond("Good Morning"), GREETING);
    }

    #[test]
    fn help_reply() {
        let mut manager = DialogueManager::default();
        assert_eq!(manager.respond("Help"), HELP);
        assert_eq!(manager.respond("how to use"), HELP);
    }

    #[test]
    fn single_match_has_no_related_section() {
        let mut manager = DialogueManager::default();
        let reply = manager.respond("what is mcp");

        assert_eq!(reply, content_of("what is mcp"));
        assert!(!reply.contains("Related topics"));
    }

    #[test]
    fn multiple_matches_list_related_titles() {
        let mut manager = DialogueManager::default();
        let reply = manager.respond("server");

        let expected = format!(
            "{}\n\n**Related topics:**\n• Complete Python MCP Server Example\n• MCP Architecture",
            content_of("create mcp server")
        );
        assert_eq!(reply, expected);
    }

    #[test]
    fn two_matches_list_one_related_title() {
        let mut manager = DialogueManager::default();
        let reply = manager.respond("prompts");

        assert!(reply.starts_with(&content_of("mcp prompts")));
        assert!(reply.ends_with("**Related topics:**\n• Complete Python MCP Server Example"));
    }

    #[test]
    fn unmatched_input_falls_back() {
        let mut manager = DialogueManager::default();
        assert_eq!(manager.respond("xyzzy_nonexistent_topic"), FALLBACK);
    }

    #[test]
    fn empty_input_is_unclear_noop() {
        let mut manager = DialogueManager::default();
        assert_eq!(manager.respond(""), UNCLEAR);
        assert_eq!(manager.respond(" \t\n "), UNCLEAR);
        assert!(manager.transcript().is_empty());
    }

    #[test]
    fn every_branch_appends_two_entries() {
        let mut manager = DialogueManager::default();
        let inputs = ["hello", "help", "xyzzy_nonexistent_topic", "what is mcp"];

        for (turn, input) in inputs.iter().enumerate() {
            let reply = manager.respond(input);
            let transcript = manager.transcript();
            assert_eq!(transcript.len(), (turn + 1) * 2);

            let user = &transcript[turn * 2];
            let assistant = &transcript[turn * 2 + 1];
            assert_eq!(user.role, Role::User);
            assert_eq!(user.content, *input);
            assert_eq!(assistant.role, Role::Assistant);
            assert_eq!(assistant.content, reply);
            assert!(user.timestamp <= assistant.timestamp);
        }
    }

    #[test]
    fn transcript_keeps_raw_input() {
        let mut manager = DialogueManager::default();
        manager.respond("  What is MCP  ");
        assert_eq!(manager.transcript()[0].content, "  What is MCP  ");
    }

    #[test]
    fn clear_history_empties_transcript() {
        let mut manager = DialogueManager::default();
        manager.respond("what is mcp");
        manager.clear_history();
        assert!(manager.transcript().is_empty());

        manager.respond("hello");
        assert_eq!(manager.transcript().len(), 2);
        assert_eq!(manager.transcript()[0].content, "hello");
    }

    #[test]
    fn abbreviation_expansion_is_opt_in() {
        let store = KnowledgeStore::new(vec![KnowledgeRecord::new(
            "sdk",
            "SDKs",
            "Available kits.",
            ["software development kit"],
        )])
        .map(Arc::new)
        .unwrap();

        let mut plain = DialogueManager::new(Arc::clone(&store));
        assert_eq!(plain.respond("what about sdk"), FALLBACK);

        let options = AssistantOptions {
            expand_abbreviations: true,
            ..Default::default()
        };
        let mut expanding = DialogueManager::with_options(store, options);
        assert_eq!(expanding.respond("what about sdk"), "Available kits.");
    }

    #[test]
    fn preprocess_query_expands() {
        let manager = DialogueManager::default();
        assert_eq!(
            manager.preprocess_query("mcp api"),
            "model context protocol application programming interface"
        );
    }

    #[test]
    fn related_topics_option_limits_titles() {
        let options = AssistantOptions {
            related_topics: 1,
            ..Default::default()
        };
        let mut manager = DialogueManager::with_options(KnowledgeStore::builtin(), options);
        let reply = manager.respond("server");

        assert!(reply.ends_with("**Related topics:**\n• Complete Python MCP Server Example"));
    }

    #[test]
    fn format_answer_empty_results() {
        assert!(format_answer(&[], 2).is_none());
    }

    #[test]
    fn ties_follow_store_order_in_reply() {
        let store = Arc::new(
            KnowledgeStore::new(vec![
                KnowledgeRecord::new("b", "Beta", "beta body", ["shared"]),
                KnowledgeRecord::new("a", "Alpha", "alpha body", ["shared"]),
            ])
            .unwrap(),
        );
        let mut manager = DialogueManager::new(store);
        let reply = manager.respond("shared");

        assert_eq!(reply, "beta body\n\n**Related topics:**\n• Alpha");
    }

    #[test]
    fn hostile_inputs_do_not_panic() {
        let mut manager = DialogueManager::default();
        let long = "x".repeat(100_000);
        for input in [long.as_str(), "\u{0}\u{1}\u{2}", "ǅ İ ß", "🙂🙂🙂"] {
            let reply = manager.respond(input);
            assert!(!reply.is_empty());
        }
    }
}
