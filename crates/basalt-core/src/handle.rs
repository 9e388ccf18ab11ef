//! Non-owning resource handles
//!
//! Textures and models live in an external resource manager. Basalt refers
//! to them by index, never by pointer, so pool reallocation in the manager
//! cannot leave the engine with dangling references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a texture in the external resource manager
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureHandle({})", self.0)
    }
}

/// Index of a model in the external resource manager
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelHandle(pub u32);

impl ModelHandle {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelHandle({})", self.0)
    }
}
