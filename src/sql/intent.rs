//! Intent classification of sanitized model output.
//!
//! The SQL-generation prompt instructs the model to emit one of two sentinel
//! tokens instead of SQL when the question is not a data question. These
//! tokens are contract constants shared with the prompt template; they are
//! parsed into a tagged variant exactly once, so downstream code never
//! substring-matches the payload again.

/// Sentinel the model emits for questions unrelated to the inventory domain.
pub const OFF_TOPIC_MARKER: &str = "NOT_SQL";

/// Sentinel the model emits for greetings.
pub const GREETING_MARKER: &str = "GREETING";

/// Classified model output, parsed immediately after sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlIntent {
    /// The question was not about the inventory data.
    OffTopic,
    /// The user greeted the assistant.
    Greeting,
    /// An executable statement.
    Statement(String),
}

impl SqlIntent {
    /// Parses sanitized model output into an intent.
    ///
    /// The off-topic marker wins over the greeting marker; the greeting
    /// marker is matched case-insensitively. Everything else is treated as
    /// an executable statement.
    pub fn parse(sanitized: &str) -> Self {
        if sanitized.contains(OFF_TOPIC_MARKER) {
            return Self::OffTopic;
        }
        if sanitized.to_uppercase().contains(GREETING_MARKER) {
            return Self::Greeting;
        }
        Self::Statement(sanitized.to_string())
    }
}
