//! Property-based tests

pub mod guard_proptest;
