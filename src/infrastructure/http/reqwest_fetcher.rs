use crate::domain::entities::report::RawFeedPayload;
use crate::domain::error::{DomainError, FetchError};
use crate::domain::ports::source_fetcher::SourceFetcher;
use crate::infrastructure::config::TlsConfig;
use async_trait::async_trait;
use std::error::Error as StdError;
use std::io;
use std::time::Duration;

const USER_AGENT: &str = "wbgtwatch/0.1";

/// Plain HTTPS GET against the government feeds.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration, tls: &TlsConfig) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .danger_accept_invalid_certs(!tls.verify);

        if let Some(path) = &tls.ca_cert_path {
            let pem = std::fs::read(path)
                .map_err(|e| DomainError::Config(format!("{}: {e}", path.display())))?;
            let cert = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| DomainError::Config(format!("{}: {e}", path.display())))?;
            builder = builder.add_root_certificate(cert);
        }

        let client = builder
            .build()
            .map_err(|e| DomainError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

/// Walks the source chain for a TLS failure. rustls errors reach reqwest
/// wrapped in an `io::Error` of kind `InvalidData` during connect, whatever
/// their message says; the keyword match only catches wrappers that keep
/// nothing but text.
fn tls_failure(err: &reqwest::Error) -> Option<String> {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<io::Error>() {
            if err.is_connect()
                && io.kind() == io::ErrorKind::InvalidData
                && io.get_ref().is_some()
            {
                return Some(io.to_string());
            }
        }
        let text = cause.to_string();
        let lowered = text.to_lowercase();
        if ["certificate", "tls", "handshake", "ssl"]
            .iter()
            .any(|needle| lowered.contains(needle))
        {
            return Some(text);
        }
        source = cause.source();
    }
    None
}

fn classify_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout;
    }
    if let Some(detail) = tls_failure(&err) {
        return FetchError::Tls(detail);
    }
    match err.status() {
        Some(status) => FetchError::HttpStatus(status.as_u16()),
        None => FetchError::Network(err.to_string()),
    }
}

#[async_trait]
impl SourceFetcher for ReqwestFetcher {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> Result<RawFeedPayload, FetchError> {
        let resp = self.client.get(url).send().await.map_err(classify_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = resp.bytes().await.map_err(classify_error)?;
        Ok(RawFeedPayload::live(bytes.to_vec()))
    }
}
