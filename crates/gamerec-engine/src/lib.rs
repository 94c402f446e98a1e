#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod snapshot;

pub use snapshot::{SharedCatalog, Snapshot};

use std::sync::Arc;

use gamerec_core::catalog::Catalog;
use gamerec_core::config::Config;
use gamerec_core::error::Result;
use gamerec_core::traits::Recommender;
use gamerec_core::types::{Preferences, Recommendation};
use gamerec_rank::Ranker;

pub struct RecommendationEngine {
    catalog: Arc<SharedCatalog>,
    ranker: Ranker,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<SharedCatalog>, ranker: Ranker) -> Self {
        Self { catalog, ranker }
    }

    /// Load the configured catalog and build its feature space.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = config.settings()?;
        let catalog = Catalog::from_path(&config.catalog_path()?)?;
        let shared = SharedCatalog::from_catalog(catalog)?;
        Ok(Self::new(Arc::new(shared), Ranker::new(settings.recommend.top_k)))
    }

    pub fn shared(&self) -> &Arc<SharedCatalog> {
        &self.catalog
    }

    pub fn ranker(&self) -> Ranker {
        self.ranker
    }

    pub fn recommend(&self, prefs: &Preferences) -> Result<Vec<Recommendation>> {
        prefs.validate()?;
        let snapshot = self.catalog.current();
        let query = snapshot.space().encode_preferences(prefs);
        self.ranker.rank(&query, snapshot.space().matrix(), snapshot.catalog(), prefs.min_rating)
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(&self, prefs: &Preferences) -> Result<Vec<Recommendation>> {
        Self::recommend(self, prefs)
    }
}
