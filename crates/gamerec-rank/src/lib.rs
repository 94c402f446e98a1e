#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! gamerec-rank
//!
//! Cosine similarity between a query vector and the feature matrix, followed
//! by rating filter, deterministic ordering and top-k truncation.

pub mod ranker;
pub mod similarity;

pub use ranker::{rank, Ranker};
pub use similarity::{cosine_similarity, cosine_with_norms};
