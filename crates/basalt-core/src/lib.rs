//! Basalt Core - Foundational types for the Basalt engine
//!
//! This crate provides the core types that all other Basalt crates depend on:
//! - `Vec3`, `Color`, `Transform` - Spatial types
//! - `TextureHandle`, `ModelHandle` - Non-owning resource references
//! - Error types and Result alias

mod error;
mod handle;
mod types;

pub use error::{BasaltError, Result};
pub use handle::{ModelHandle, TextureHandle};
pub use types::{Color, Transform, Vec3};
