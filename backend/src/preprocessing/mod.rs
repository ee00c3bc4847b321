//! Preprocessing of raw source records into typed records.

pub mod normalizer;

pub use normalizer::{
    normalize, normalize_with, MalformedRecordPolicy, NormalizeError, NormalizeOptions,
    NormalizeOutcome, SentinelPolicy,
};
