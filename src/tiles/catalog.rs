//! Validated collections of tile types used for one generation run

use std::collections::HashSet;
use std::sync::Arc;

use crate::io::error::{Result, invalid_catalog};
use crate::tiles::tile_type::TileType;

/// Non-empty, duplicate-free set of tile types sharing one tile size
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<Arc<TileType>>,
    tile_size: usize,
}

impl Catalog {
    /// Validate and wrap a list of tile types
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the list is empty, two types share a name,
    /// or the types do not all have the same tile size
    pub fn new(types: Vec<TileType>) -> Result<Self> {
        let Some(first) = types.first() else {
            return Err(invalid_catalog(&"catalog must hold at least one tile type"));
        };
        let tile_size = first.size();

        let mut names = HashSet::with_capacity(types.len());
        for tile_type in &types {
            if !names.insert(tile_type.name()) {
                return Err(invalid_catalog(&format!(
                    "duplicate tile type '{}'",
                    tile_type.name()
                )));
            }
            if tile_type.size() != tile_size {
                return Err(invalid_catalog(&format!(
                    "tile type '{}' has size {}, expected {tile_size}",
                    tile_type.name(),
                    tile_type.size()
                )));
            }
        }

        Ok(Self {
            types: types.into_iter().map(Arc::new).collect(),
            tile_size,
        })
    }

    /// Common side length `N` of every type's unit grid
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of tile types
    pub const fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: construction rejects empty catalogs
    pub const fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Tile types in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TileType>> {
        self.types.iter()
    }

    /// Look up a tile type by name
    pub fn get(&self, name: &str) -> Option<&Arc<TileType>> {
        self.types.iter().find(|tile_type| tile_type.name() == name)
    }
}
