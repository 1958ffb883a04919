//! Common types used across the Bitstamp client library.

pub mod common;
pub mod envelope;

pub use common::*;
pub use envelope::ResultEnvelope;
