//! Tile identities and the images behind them.
//!
//! An `Identity` is the pair-membership key of a tile: exactly two tiles
//! share one per level. Tiles with the same identity are interchangeable
//! for matching; they are still distinct tiles on the board.

use std::borrow::Borrow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{MatchError, Result};

/// Logical category of a tile, e.g. which alien it shows.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Create an identity. Fails on an empty or whitespace-only name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MatchError::InvalidAsset { name });
        }
        Ok(Self(name))
    }

    /// Derive an identity from an image file name by dropping the
    /// extension: `"alien3.png"` becomes `"alien3"`.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if stem.is_empty() || stem.starts_with('.') {
            return Err(MatchError::InvalidAsset {
                name: file_name.to_string(),
            });
        }
        Self::new(stem)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One catalog entry: an identity with its face and cover images.
///
/// `cover` is `None` when the host paints a plain blank card over the
/// face's footprint instead of drawing a dedicated image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub identity: Identity,
    pub face: PathBuf,
    pub cover: Option<PathBuf>,
}

impl Asset {
    /// Create an asset with a face image and no cover image.
    pub fn new(identity: Identity, face: impl Into<PathBuf>) -> Self {
        Self {
            identity,
            face: face.into(),
            cover: None,
        }
    }

    /// Set a dedicated cover image.
    #[must_use]
    pub fn with_cover(mut self, cover: impl Into<PathBuf>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_file_name() {
        let id = Identity::from_file_name("alien3.png").unwrap();
        assert_eq!(id.as_str(), "alien3");

        let id = Identity::from_file_name("green.blob.png").unwrap();
        assert_eq!(id.as_str(), "green.blob");

        let id = Identity::from_file_name("noext").unwrap();
        assert_eq!(id.as_str(), "noext");
    }

    #[test]
    fn test_identity_rejects_empty() {
        assert!(Identity::new("").is_err());
        assert!(Identity::new("   ").is_err());
        assert!(Identity::from_file_name("").is_err());
        assert!(Identity::from_file_name(".png").is_err());
    }

    #[test]
    fn test_asset_builder() {
        let asset = Asset::new(Identity::new("alien1").unwrap(), "images/aliens/alien1.png")
            .with_cover("images/back.png");

        assert_eq!(asset.identity.to_string(), "alien1");
        assert_eq!(asset.face, PathBuf::from("images/aliens/alien1.png"));
        assert_eq!(asset.cover, Some(PathBuf::from("images/back.png")));
    }
}
