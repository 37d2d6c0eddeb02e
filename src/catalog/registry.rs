//! Asset catalog: the explicit manifest of tile identities.
//!
//! The catalog replaces scanning an image directory at startup. Hosts
//! build it once and hand it to the engine; level generation samples from
//! it and never touches the filesystem.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::asset::{Asset, Identity};
use crate::core::{GameRng, MatchError, Result};

/// Ordered collection of assets with lookup by identity.
///
/// ## Example
///
/// ```
/// use alien_memory::catalog::AssetCatalog;
///
/// let catalog = AssetCatalog::from_file_names(
///     "images/aliens",
///     ["alien1.png", "alien2.png", "alien3.png"],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.len(), 3);
/// let alien = catalog.get("alien2").unwrap();
/// assert!(alien.face.ends_with("alien2.png"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
    index: FxHashMap<Identity, usize>,
}

impl AssetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from image file names found in `dir`.
    ///
    /// Each identity is the file name without its extension; the face
    /// image path is `dir` joined with the file name.
    pub fn from_file_names<I, S>(dir: impl AsRef<Path>, file_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = dir.as_ref();
        let mut catalog = Self::new();
        for name in file_names {
            let name = name.as_ref();
            let identity = Identity::from_file_name(name)?;
            catalog.register(Asset::new(identity, dir.join(name)))?;
        }
        Ok(catalog)
    }

    /// Add an asset, builder style.
    pub fn with_asset(mut self, asset: Asset) -> Result<Self> {
        self.register(asset)?;
        Ok(self)
    }

    /// Add an asset. Fails if its identity is already registered.
    pub fn register(&mut self, asset: Asset) -> Result<()> {
        if self.index.contains_key(&asset.identity) {
            return Err(MatchError::DuplicateAsset {
                identity: asset.identity.to_string(),
            });
        }
        self.index.insert(asset.identity.clone(), self.assets.len());
        self.assets.push(asset);
        Ok(())
    }

    /// Look up an asset by identity.
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&Asset> {
        self.index.get(identity).map(|&i| &self.assets[i])
    }

    #[must_use]
    pub fn contains(&self, identity: &Identity) -> bool {
        self.index.contains_key(identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over assets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Iterate over identities in registration order.
    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.assets.iter().map(|a| &a.identity)
    }

    /// Pick `count` distinct identities uniformly at random.
    ///
    /// Fails with `InsufficientAssets` when the catalog is too small.
    pub fn sample(&self, count: usize, rng: &mut GameRng) -> Result<Vec<Identity>> {
        let identities: Vec<&Identity> = self.identities().collect();
        rng.sample(&identities, count)
            .map(|picked| picked.into_iter().cloned().collect())
            .ok_or(MatchError::InsufficientAssets {
                requested: count,
                available: self.len(),
            })
    }
}
