//! MCP documentation Q&A assistant
//!
//! This library provides:
//! - A compiled-in knowledge table of Model Context Protocol topics
//! - Substring-based retrieval that ranks topics against a query
//! - A dialogue manager that answers greetings, help requests and questions
//!   and keeps a transcript of the conversation
//! - A serialized async session handle for callers that share one conversation

pub mod config;
pub mod dialogue;
pub mod error;
pub mod knowledge;
pub mod metrics;
pub mod preprocess;
pub mod replies;
pub mod retrieval;
pub mod session;
pub mod transcript;

// Re-export common types
pub use config::Config;
pub use dialogue::{AssistantOptions, DialogueManager, Intent};
pub use error::{Error, Result};
pub use knowledge::{KnowledgeRecord, KnowledgeStore};
pub use replies::Reply;
pub use retrieval::{RetrievalEngine, ScoredRecord};
pub use session::AssistantSession;
pub use transcript::{Role, Transcript, TranscriptEntry};
