//! Parser error types for propscan-parser.

/// Errors that abort processing of a single source unit.
///
/// Everything the extractors do not recognize degrades to `unknown` or is
/// skipped instead, so parsing is the only fatal stage.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {dialect} source: {message}")]
    ParseFailed { dialect: String, message: String },
}
