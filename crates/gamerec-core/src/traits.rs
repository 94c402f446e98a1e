use crate::error::Result;
use crate::types::{Preferences, Recommendation};

pub trait QueryEncoder: Send + Sync {
    /// Width of every vector this encoder produces.
    fn dim(&self) -> usize;
    /// Map a request into the catalog's feature space. Never fails; unknown
    /// labels contribute nothing.
    fn encode(&self, prefs: &Preferences) -> Vec<f32>;
}

pub trait Recommender: Send + Sync {
    fn recommend(&self, prefs: &Preferences) -> Result<Vec<Recommendation>>;
}
