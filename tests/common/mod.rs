pub mod assertions;
pub mod fixtures;

use dotwalk::Document;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Converts a `json!` literal into a `Document`.
pub fn doc(value: Value) -> Document {
    Document::from(value)
}

/// Initialise logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
