use crate::domain::entities::report::RawFeedPayload;
use crate::domain::error::FetchError;
use async_trait::async_trait;

/// Single network GET. No retries here: falling back is the resolver's job.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Name of this fetcher for logging.
    fn name(&self) -> &str;

    async fn fetch(&self, url: &str) -> Result<RawFeedPayload, FetchError>;
}
