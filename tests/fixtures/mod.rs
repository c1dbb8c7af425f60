//! Test fixtures for parcel-dispatch.
//!
//! Provides the reference batches as parsed records and as raw input text.

pub mod sample_batches;

pub use sample_batches::*;
