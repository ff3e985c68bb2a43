//! Prompt construction for the two LLM calls.
//!
//! Two fixed instruction sets: one converts a question into a single SQLite
//! statement (or a sentinel token for non-data intents), the other converts
//! the question plus the executed rows into a natural-language answer.
//! The schema description is fixed; the store's tables are owned by the
//! StockFlow backend, not by this crate.

use crate::llm::types::Message;

/// System prompt for the question-to-SQL call.
///
/// Instructs the model to emit exactly one of: a single raw SQL statement,
/// `NOT_SQL` (off-topic question), or `GREETING` (salutation). The sentinel
/// tokens are parsed by [`crate::sql::SqlIntent`].
const SQL_GENERATION_SYSTEM_PROMPT: &str = r#"You are an expert SQLite Data Analyst.
Tables:
- products (id, name, barcode, description, quantity, category, expiryDate)
- suppliers (id, companyName, contactName, phone, email)
- product_suppliers (productId, supplierId)
- stock_movements (id, productId, type, quantity, date)
- orders (id, supplierId, status, date, totalAmount)
- order_items (id, orderId, productId, quantity, unitPrice)

Date Format in DB: YYYY-MM-DDTHH:MM:SS.sssZ (ISO8601 string).

Rules:
1. Return ONLY valid SQLite SQL. No markdown, no explanations.
2. Use `strftime('%Y-%m-%d', date)` for date comparisons.
3. Do NOT use trailing commas.
4. If the user greets (oi, ola, hello), return "GREETING".
5. If the user asks unrelated questions, return "NOT_SQL".
6. Products DO NOT have a price column. Prices are in `order_items`.
7. To link Products to Suppliers, use `product_suppliers` table.

Examples:
User: "Quantos produtos tenho?"
SQL: SELECT count(*) FROM products;

User: "Qual produto mais vendido?"
SQL: SELECT p.name, SUM(sm.quantity) as total FROM stock_movements sm JOIN products p ON sm.productId = p.id WHERE sm.type = 'OUT' GROUP BY p.name ORDER BY total DESC LIMIT 1;

User: "Pedidos desta semana"
SQL: SELECT * FROM orders WHERE strftime('%Y-%W', date) = strftime('%Y-%W', 'now');

User: "Qual produto mais entrou essa semana?"
SQL: SELECT p.name, SUM(sm.quantity) as total FROM stock_movements sm JOIN products p ON sm.productId = p.id WHERE sm.type = 'IN' AND strftime('%Y-%W', sm.date) = strftime('%Y-%W', 'now') GROUP BY p.name ORDER BY total DESC LIMIT 1;

User: "Produtos vencendo"
SQL: SELECT name, expiryDate FROM products WHERE expiryDate IS NOT NULL AND date(expiryDate) BETWEEN date('now') AND date('now', '+30 days');

User: "Qual estratégia para o próximo mês?"
SQL: SELECT p.name, p.quantity, SUM(CASE WHEN sm.type='OUT' THEN sm.quantity ELSE 0 END) as sales_last_month FROM products p LEFT JOIN stock_movements sm ON p.id = sm.productId AND strftime('%Y-%m', sm.date) = strftime('%Y-%m', 'now', '-1 month') GROUP BY p.name ORDER BY sales_last_month DESC LIMIT 10;"#;

/// System prompt for the rows-to-answer call.
const ANSWER_SYSTEM_PROMPT: &str = r#"You are a helpful StockFlow AI Assistant.
- Answer the user's question based on the provided Data.
- If the user asked for STRATEGY or ADVICE, analyze the data (trends, low stock, high sales) and give actionable business recommendations.
- Be professional, insightful, and friendly. Answer in Portuguese.
- If data is empty, say you need more data history to give advice."#;

/// Builds the message list for the question-to-SQL call.
pub fn sql_generation_messages(question: &str) -> Vec<Message> {
    vec![
        Message::system(SQL_GENERATION_SYSTEM_PROMPT),
        Message::user(question),
    ]
}

/// Builds the message list for the rows-to-answer call.
///
/// `data` is the JSON rendering of the executed rows, `[]` when the
/// statement returned no rows.
pub fn answer_messages(question: &str, data: &str) -> Vec<Message> {
    vec![
        Message::system(ANSWER_SYSTEM_PROMPT),
        Message::user(format!("Question: {question}\nData: {data}")),
    ]
}
