//! Core data types for sequence records and classification outcomes.

pub mod record;
pub mod types;
