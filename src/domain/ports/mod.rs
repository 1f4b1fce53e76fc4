pub mod cache_reader;
pub mod source_fetcher;
