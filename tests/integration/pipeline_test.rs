//! End-to-end pipeline tests with a mock LLM and a seeded temporary store.

use super::{count_rows, seeded_store};
use stockflow_ai::llm::MockLlmClient;
use stockflow_ai::pipeline::{
    Assistant, GREETING_REPLY, OFF_TOPIC_REPLY, QUERY_ERROR_PREFIX,
};

#[tokio::test]
async fn test_happy_path_count_question() {
    let (_dir, path) = seeded_store().await;
    let assistant = Assistant::new(Box::new(MockLlmClient::new()), &path);

    let reply = assistant.answer("Quantos produtos tenho?").await;

    // The mock's answer phase echoes the rendered records; the pipeline
    // returns the generated text verbatim.
    assert_eq!(reply, r#"Com base nos seus dados: [{"count(*)":3}]"#);
}

#[tokio::test]
async fn test_empty_result_still_generates_answer() {
    let (_dir, path) = seeded_store().await;
    let client = MockLlmClient::new().with_response(
        "pedidos entregues",
        "SELECT * FROM orders WHERE status = 'DELIVERED'",
    );
    let assistant = Assistant::new(Box::new(client), &path);

    let reply = assistant.answer("Quais pedidos entregues?").await;

    // Zero rows reach answer generation as an explicit empty sequence.
    assert_eq!(reply, "Com base nos seus dados: []");
}

#[tokio::test]
async fn test_execution_error_surfaces_cause() {
    let (_dir, path) = seeded_store().await;
    let client = MockLlmClient::new().with_response("clientes", "SELECT * FROM clients");
    let assistant = Assistant::new(Box::new(client), &path);

    let reply = assistant.answer("Quantos clientes tenho?").await;

    assert!(reply.starts_with(QUERY_ERROR_PREFIX), "got: {reply}");
    assert!(reply.contains("no such table"), "got: {reply}");
}

#[tokio::test]
async fn test_sanitizer_defuses_chained_drop() {
    let (_dir, path) = seeded_store().await;
    let client = MockLlmClient::new().with_response(
        "nomes dos produtos",
        "```sql\nSELECT name, FROM products; DROP TABLE products;\n```",
    );
    let assistant = Assistant::new(Box::new(client), &path);

    let reply = assistant.answer("Liste os nomes dos produtos").await;

    assert!(reply.contains("Milk"), "got: {reply}");
    // The chained DROP was truncated away and never executed.
    assert_eq!(count_rows(&path, "products").await, 3);
}

#[tokio::test]
async fn test_select_star_bounded_end_to_end() {
    let (_dir, path) = seeded_store().await;
    let assistant = Assistant::new(Box::new(MockLlmClient::new()), &path);

    let reply = assistant.answer("Liste todos os produtos").await;

    assert!(reply.starts_with("Com base nos seus dados:"), "got: {reply}");
    assert!(reply.contains("Coffee"), "got: {reply}");
}

#[tokio::test]
async fn test_off_topic_reply_with_real_store() {
    let (_dir, path) = seeded_store().await;
    let assistant = Assistant::new(Box::new(MockLlmClient::new()), &path);

    let reply = assistant.answer("Qual a previsão do tempo?").await;

    assert_eq!(reply, OFF_TOPIC_REPLY);
}

#[tokio::test]
async fn test_greeting_reply_with_real_store() {
    let (_dir, path) = seeded_store().await;
    let assistant = Assistant::new(Box::new(MockLlmClient::new()), &path);

    let reply = assistant.answer("oi").await;

    assert_eq!(reply, GREETING_REPLY);
}
