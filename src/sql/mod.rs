//! SQL post-processing for model-generated statements.
//!
//! The model's raw output is untrusted text. It passes through the sanitizer
//! exactly once, then is parsed into an [`SqlIntent`] before anything else
//! looks at it.

mod intent;
mod sanitize;

pub use intent::{SqlIntent, GREETING_MARKER, OFF_TOPIC_MARKER};
pub use sanitize::{sanitize, DEFAULT_ROW_LIMIT};
