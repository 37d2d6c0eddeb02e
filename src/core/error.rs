//! Error type shared by the catalog and the engine.
//!
//! Every variant is a configuration problem detected at startup or at a
//! level transition. Input that misses a tile is not an error.

use derive_more::{Display, Error};

/// Errors raised while building a catalog or generating a level.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// The catalog holds fewer distinct identities than a level needs.
    #[display("insufficient assets: level needs {requested} distinct identities, catalog has {available}")]
    InsufficientAssets { requested: usize, available: usize },

    /// Level numbers start at 1 and stop at the configured maximum.
    #[display("invalid level {level}: levels run from 1 to {max_level}")]
    InvalidLevel { level: u32, max_level: u32 },

    /// An asset name produced an empty identity.
    #[display("invalid asset name {name:?}: identity would be empty")]
    InvalidAsset { name: String },

    /// Two assets resolved to the same identity.
    #[display("duplicate asset identity {identity:?}")]
    DuplicateAsset { identity: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MatchError::InsufficientAssets {
            requested: 6,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "insufficient assets: level needs 6 distinct identities, catalog has 4"
        );

        let err = MatchError::InvalidLevel { level: 0, max_level: 5 };
        assert_eq!(err.to_string(), "invalid level 0: levels run from 1 to 5");

        let err = MatchError::DuplicateAsset {
            identity: "alien1".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate asset identity \"alien1\"");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&MatchError::InvalidAsset {
            name: ".png".to_string(),
        });
    }
}
