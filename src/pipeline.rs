//! The question-to-answer pipeline.
//!
//! Sequences the two LLM calls around sanitization, intent classification,
//! and statement execution. [`Assistant::answer`] is the single place where
//! pipeline errors become user-facing text; every stage below it threads
//! `Result` explicitly.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::db;
use crate::error::{Result, StockflowError};
use crate::llm::{prompt, LlmClient};
use crate::sql::{sanitize, SqlIntent};

/// Fixed reply for questions outside the inventory domain.
pub const OFF_TOPIC_REPLY: &str =
    "Desculpe, só posso responder perguntas sobre seus dados de estoque.";

/// Fixed reply for greetings, with example questions.
pub const GREETING_REPLY: &str = "Olá! Sou sua IA de Estoque. Pergunte algo como: 'Qual produto tem menos estoque?' ou 'Quanto vendi hoje?'.";

/// Prefix of the reply produced when the store rejects a statement.
pub const QUERY_ERROR_PREFIX: &str = "Desculpe, tive um erro técnico ao consultar o banco";

/// Prefix of the reply produced for any other pipeline fault.
pub const PIPELINE_ERROR_PREFIX: &str = "Erro ao processar sua solicitação";

/// Orchestrates one question through generation, execution, and answering.
///
/// Stateless across questions: each call opens its own store connection and
/// shares nothing with concurrent calls.
pub struct Assistant {
    client: Box<dyn LlmClient>,
    db_path: PathBuf,
}

impl Assistant {
    /// Creates an assistant over the given LLM client and store path.
    pub fn new(client: Box<dyn LlmClient>, db_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            db_path: db_path.into(),
        }
    }

    /// Answers a free-text question about the inventory data.
    ///
    /// Always returns a response string. Execution failures become the fixed
    /// technical-error reply embedding the cause; any other fault (LLM call,
    /// network) becomes the generic error reply. Nothing escapes as an error.
    pub async fn answer(&self, question: &str) -> String {
        let start = Instant::now();

        let reply = match self.try_answer(question).await {
            Ok(reply) => reply,
            Err(StockflowError::Query(msg)) => format!("{QUERY_ERROR_PREFIX}: {msg}"),
            Err(e) => format!("{PIPELINE_ERROR_PREFIX}: {e}"),
        };

        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            reply_len = reply.len(),
            "Question handled"
        );

        reply
    }

    /// The fallible pipeline: generate SQL, sanitize, classify, execute,
    /// generate the answer.
    async fn try_answer(&self, question: &str) -> Result<String> {
        debug!(question_len = question.len(), "Generating SQL");

        let raw = self
            .client
            .complete(&prompt::sql_generation_messages(question))
            .await?;
        let cleaned = sanitize(&raw);

        debug!(raw = %raw, sql = %cleaned, "Sanitized generated SQL");

        match SqlIntent::parse(&cleaned) {
            SqlIntent::OffTopic => Ok(OFF_TOPIC_REPLY.to_string()),
            SqlIntent::Greeting => Ok(GREETING_REPLY.to_string()),
            SqlIntent::Statement(sql) => {
                let result = db::execute_query(&self.db_path, &sql).await?;
                let data = result.render_records();

                debug!(rows = result.row_count(), "Generating answer from rows");

                // Zero rows still reach answer generation: the template is
                // instructed to read an empty sequence as missing history.
                self.client
                    .complete(&prompt::answer_messages(question, &data))
                    .await
            }
        }
    }
}
