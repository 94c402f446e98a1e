use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;

use gamerec_core::catalog::Catalog;
use gamerec_core::error::Result;
use gamerec_features::FeatureSpace;

/// A catalog together with the feature space derived from it.
#[derive(Debug)]
pub struct Snapshot {
    catalog: Catalog,
    space: FeatureSpace,
}

impl Snapshot {
    pub fn build(catalog: Catalog) -> Result<Self> {
        let space = FeatureSpace::build(&catalog)?;
        Ok(Self { catalog, space })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn space(&self) -> &FeatureSpace {
        &self.space
    }
}

/// Read-mostly holder for the current snapshot.
///
/// Readers take an `Arc` and keep using it for the whole request. A reload
/// builds the replacement first and then swaps the pointer, so a failed
/// rebuild leaves the previous snapshot in place.
pub struct SharedCatalog {
    current: ArcSwap<Snapshot>,
}

impl SharedCatalog {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { current: ArcSwap::from_pointee(snapshot) }
    }

    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        Ok(Self::new(Snapshot::build(catalog)?))
    }

    pub fn current(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    pub fn replace(&self, catalog: Catalog) -> Result<()> {
        let next = Snapshot::build(catalog)?;
        let games = next.catalog().len();
        self.current.store(Arc::new(next));
        tracing::info!(games, "swapped in new catalog snapshot");
        Ok(())
    }

    pub fn reload_from(&self, path: &Path) -> Result<()> {
        self.replace(Catalog::from_path(path)?)
    }
}
