//! Mock LLM client for testing.
//!
//! Provides deterministic responses based on input patterns, covering both
//! pipeline phases: SQL generation and answer generation.

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::types::{Message, Role};
use crate::llm::LlmClient;

/// Mock LLM client that returns canned responses based on input patterns.
///
/// Used for unit and integration testing without making real API calls.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    /// Custom response mappings (pattern -> response).
    custom_responses: Vec<(String, String)>,
}

impl MockLlmClient {
    /// Creates a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a custom response mapping.
    ///
    /// When the last user message contains `pattern`, the mock returns
    /// `response`. Custom mappings apply to the SQL-generation phase only;
    /// the answer phase is recognized by its `Data:` line.
    pub fn with_response(
        mut self,
        pattern: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.custom_responses
            .push((pattern.into(), response.into()));
        self
    }

    /// Generates a mock response based on the input.
    fn mock_response(&self, input: &str) -> String {
        let input_lower = input.to_lowercase();

        // The answer phase embeds the rendered rows after a "Data:" line.
        if let Some(idx) = input.find("\nData: ") {
            let data = &input[idx + "\nData: ".len()..];
            return format!("Com base nos seus dados: {}", data.trim());
        }

        // Check custom responses first
        for (pattern, response) in &self.custom_responses {
            if input_lower.contains(&pattern.to_lowercase()) {
                return response.clone();
            }
        }

        // Default pattern matching, mirroring the generation contract
        if input_lower.contains("oi")
            || input_lower.contains("ola")
            || input_lower.contains("hello")
        {
            return "GREETING".to_string();
        }

        if input_lower.contains("quantos produtos") {
            return "SELECT count(*) FROM products;".to_string();
        }

        if input_lower.contains("todos os produtos") || input_lower.contains("all products") {
            return "```sql\nSELECT * FROM products;\n```".to_string();
        }

        "NOT_SQL".to_string()
    }

    /// Extracts the last user message content from a message list.
    fn extract_user_input(messages: &[Message]) -> String {
        messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let input = Self::extract_user_input(messages);
        Ok(self.mock_response(&input))
    }
}
