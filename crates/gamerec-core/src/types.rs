//! Domain types shared by the feature, ranking and engine crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Lowest rating a catalog entry or threshold may carry.
pub const MIN_RATING: f32 = 0.0;
/// Highest rating a catalog entry or threshold may carry.
pub const MAX_RATING: f32 = 5.0;
/// Threshold used when the caller does not pick one.
pub const DEFAULT_MIN_RATING: f32 = 4.0;
/// Result cap for a single recommendation request.
pub const DEFAULT_TOP_K: usize = 5;

/// One catalog entry.
///
/// - `modes`/`languages`: distinct labels in source order, never empty
/// - `genre`: exactly one label
/// - `rating`: nominally within `MIN_RATING..=MAX_RATING`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub modes: Vec<String>,
    pub languages: Vec<String>,
    pub genre: String,
    pub rating: f32,
}

/// What a user asked for in one request.
///
/// Label sets are deduplicated by construction; each may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub modes: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub min_rating: f32,
}

impl Preferences {
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating, ..Self::default() }
    }

    #[must_use]
    pub fn with_modes<I, S>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modes.extend(modes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(languages.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    /// True when nothing was selected in any of the three categories.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty() && self.languages.is_empty() && self.genres.is_empty()
    }

    /// Checks the request is worth sending to the core at all.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.min_rating) {
            return Err(Error::InvalidMinRating(self.min_rating));
        }
        if self.is_empty() {
            return Err(Error::NoPreferenceSelected);
        }
        Ok(())
    }
}

/// A ranked catalog entry.
///
/// `position` is the entry's index in the catalog. `score` is the cosine
/// similarity against the query; higher is always better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub position: usize,
    pub game: Game,
    pub score: f32,
}
