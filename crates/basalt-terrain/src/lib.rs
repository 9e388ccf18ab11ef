//! Basalt Terrain - Heightmap terrain with slope-based lighting
//!
//! Provides heightmap loading and sampling, static grid topology
//! generation, and per-vertex brightness from a slope approximation that
//! costs two height lookups per cell instead of a normal computation.
//! Does not depend on a renderer — geometry and draw state flow out
//! through the [`TerrainRenderer`] trait for a backend to consume.

pub mod heightmap;
pub mod lighting;
pub mod terrain;
pub mod triangle_list;

pub use heightmap::HeightMap;
pub use lighting::{DirectionalLight, SlopeLightInfo};
pub use terrain::{Terrain, TerrainConfig, TerrainRenderer, TextureLayer, MAX_TEXTURE_LAYERS};
pub use triangle_list::{TerrainVertex, TriangleList};
