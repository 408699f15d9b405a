use std::borrow::Cow;
use tessera_derive::tessera_error;

#[tessera_error]
pub enum ParseError {
    #[error("Json error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Missing field{}: {field}", format_context(.context))]
    Missing { field: &'static str, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<serde_json::Value, ParseError> {
    serde_json::from_str(raw).context("reading settings.json")
}

fn require(field: &'static str) -> Result<(), ParseError> {
    Err(ParseError::Missing { field, context: None }).context("page 0")
}

fn main() {
    let err = parse("{").unwrap_err();
    assert!(err.to_string().starts_with("Json error (reading settings.json): "));

    let err = require("id").unwrap_err();
    assert_eq!(err.to_string(), "Missing field (page 0): id");
}
