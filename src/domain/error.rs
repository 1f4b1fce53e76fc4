use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Why a single upstream GET did not produce a body.
/// Always recoverable: the resolver moves on to the next stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    Network(String),
}

/// Structural problems with a feed body as a whole. A feed that parses
/// but has no row/column for the requested location is `Ok(None)`, not this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("feed body is not valid UTF-8")]
    Encoding,

    #[error("feed body has no lines")]
    Empty,

    #[error("malformed JSON: {0}")]
    Json(String),
}
