#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! gamerec-features
//!
//! Turns a catalog into a shared categorical vector space: three sorted
//! vocabularies (modes, languages, genres), one dense row per game, and a
//! query encoder that targets the same columns.

pub mod encoder;
pub mod matrix;
pub mod vocabulary;

pub use encoder::QueryVector;
pub use matrix::FeatureMatrix;
pub use vocabulary::{Segment, Vocabularies, Vocabulary};

use gamerec_core::catalog::Catalog;
use gamerec_core::error::{Error, Result};

/// Vocabularies plus the feature matrix derived from one catalog. Immutable
/// once built; rebuild from a fresh catalog instead of mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpace {
    vocab: Vocabularies,
    matrix: FeatureMatrix,
}

impl FeatureSpace {
    pub fn build(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let vocab = Vocabularies {
            modes: Vocabulary::from_labels(catalog.iter().flat_map(|g| g.modes.iter())),
            languages: Vocabulary::from_labels(catalog.iter().flat_map(|g| g.languages.iter())),
            genres: Vocabulary::from_labels(catalog.iter().map(|g| g.genre.as_str())),
        };
        let matrix = FeatureMatrix::build(&vocab, catalog.games());
        tracing::info!(
            games = matrix.len(),
            modes = vocab.modes.len(),
            languages = vocab.languages.len(),
            genres = vocab.genres.len(),
            dim = vocab.dim(),
            "built feature space"
        );
        Ok(Self { vocab, matrix })
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocab
    }

    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }

    pub fn dim(&self) -> usize {
        self.vocab.dim()
    }
}
