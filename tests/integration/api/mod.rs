//! Identity-provider API integration tests
