//! Token cache integration tests

pub mod token_cache_test;
