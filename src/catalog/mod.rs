//! Asset catalog: tile identities and their images.
//!
//! ## Key Types
//!
//! - `Identity`: Pair-membership key of a tile (e.g. `"alien3"`)
//! - `Asset`: An identity with its face and cover image paths
//! - `AssetCatalog`: Ordered manifest the engine samples levels from

pub mod asset;
pub mod registry;

pub use asset::{Asset, Identity};
pub use registry::AssetCatalog;
