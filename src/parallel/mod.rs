//! Parallel tokenization support
//!
//! Tokenizes batches of independent sources concurrently.

mod executor;

pub use executor::{tokenize_batch, ParallelConfig};
