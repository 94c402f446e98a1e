use gamerec_core::traits::QueryEncoder;
use gamerec_core::types::Preferences;

use crate::matrix::l2_norm;
use crate::vocabulary::{Segment, Vocabularies};
use crate::FeatureSpace;

/// A request mapped into the catalog's feature space.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    values: Vec<f32>,
    norm: f32,
}

impl QueryVector {
    pub fn new(values: Vec<f32>) -> Self {
        let norm = l2_norm(&values);
        Self { values, norm }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn norm(&self) -> f32 {
        self.norm
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when nothing selected survived encoding.
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }
}

impl FeatureSpace {
    /// Encode selected labels. Modes and languages are multi-hot; the genre
    /// block gets one unit per distinct selected genre, so a query may lean
    /// towards several genres while each game carries exactly one.
    ///
    /// Labels missing from a vocabulary are skipped and logged at debug level.
    pub fn encode_query<'a, M, L, G>(&self, modes: M, languages: L, genres: G) -> QueryVector
    where
        M: IntoIterator<Item = &'a str>,
        L: IntoIterator<Item = &'a str>,
        G: IntoIterator<Item = &'a str>,
    {
        let vocab = self.vocabularies();
        let mut values = vec![0.0; vocab.dim()];
        mark_logged(vocab, Segment::Modes, modes, &mut values);
        mark_logged(vocab, Segment::Languages, languages, &mut values);
        mark_logged(vocab, Segment::Genres, genres, &mut values);
        QueryVector::new(values)
    }

    pub fn encode_preferences(&self, prefs: &Preferences) -> QueryVector {
        self.encode_query(
            prefs.modes.iter().map(String::as_str),
            prefs.languages.iter().map(String::as_str),
            prefs.genres.iter().map(String::as_str),
        )
    }
}

fn mark_logged<'a, I>(vocab: &Vocabularies, segment: Segment, labels: I, values: &mut [f32])
where
    I: IntoIterator<Item = &'a str>,
{
    for label in vocab.mark(segment, labels, values) {
        tracing::debug!(kind = segment.name(), label, "ignoring unknown label");
    }
}

impl QueryEncoder for FeatureSpace {
    fn dim(&self) -> usize {
        self.vocabularies().dim()
    }

    fn encode(&self, prefs: &Preferences) -> Vec<f32> {
        self.encode_preferences(prefs).into_inner()
    }
}
