//! Fixed reply texts used when no knowledge record answers the input.

/// Canned replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Answer to a greeting.
    Greeting,
    /// Overview of what the assistant covers.
    Help,
    /// Nothing in the knowledge table matched.
    Fallback,
    /// Input was empty.
    Unclear,
}

pub const GREETING: &str = "Hello! I'm here to help you with Model Context Protocol questions. What would you like to know about MCP?";

pub const FALLBACK: &str = "I couldn't find a specific answer to your question in my knowledge base. I can help you with:

• MCP concepts and architecture
• Server implementation and setup
• Resources, tools, and prompts
• Best practices and troubleshooting
• Code examples and use cases

Please try asking a more specific question about MCP.";

pub const UNCLEAR: &str = "I'm not sure I understand your question. Could you please rephrase it or ask about a specific MCP topic?";

pub const HELP: &str = r#"I can help you with Model Context Protocol topics:

**MCP Fundamentals:**
• What is MCP and how it works
• Architecture and core concepts
• Client-server relationships

**Implementation:**
• Creating MCP servers
• Working with resources, tools, and prompts
• Configuration and setup

**Best Practices:**
• Security considerations
• Performance optimization
• Error handling and debugging

**Troubleshooting:**
• Common issues and solutions
• Debugging techniques
• Configuration problems

Ask me specific questions like "What is MCP?" or "How do I create an MCP server?""#;

impl Reply {
    pub fn text(&self) -> &'static str {
        match self {
            Reply::Greeting => GREETING,
            Reply::Help => HELP,
            Reply::Fallback => FALLBACK,
            Reply::Unclear => UNCLEAR,
        }
    }
}

/// All canned replies.
pub fn list_replies() -> Vec<Reply> {
    vec![Reply::Greeting, Reply::Help, Reply::Fallback, Reply::Unclear]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_texts() {
        assert_eq!(Reply::Greeting.text(), GREETING);
        assert_eq!(Reply::Fallback.text(), FALLBACK);
    }

    #[test]
    fn test_list_replies() {
        assert_eq!(list_replies().len(), 4);
    }

    #[test]
    fn test_all_replies_are_non_empty() {
        for reply in list_replies() {
            assert!(!reply.text().trim().is_empty(), "{:?} is empty", reply);
        }
    }

    #[test]
    fn test_fallback_lists_topic_categories() {
        let bullets: Vec<&str> = FALLBACK.lines().filter(|l| l.starts_with("• ")).collect();
        assert_eq!(bullets.len(), 5);
        assert!(FALLBACK.contains("• MCP concepts and architecture"));
        assert!(FALLBACK.contains("• Code examples and use cases"));
    }

    #[test]
    fn test_help_sections() {
        for section in [
            "**MCP Fundamentals:**",
            "**Implementation:**",
            "**Best Practices:**",
            "**Troubleshooting:**",
        ] {
            assert!(HELP.contains(section), "missing {section}");
        }
        assert!(HELP.ends_with(r#""How do I create an MCP server?""#));
    }

    #[test]
    fn test_reply_debug() {
        let debug_str = format!("{:?}", Reply::Unclear);
        assert!(debug_str.contains("Unclear"));
    }
}
