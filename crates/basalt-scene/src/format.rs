//! TOML scene file format definitions

use basalt_core::{Color, ModelHandle, Vec3};
use serde::{Deserialize, Serialize};

/// Top-level structure of a scene TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
}

/// Scene metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// One object entry in a scene file
///
/// Resource references are stable handle indices; resolving them is the
/// resource manager's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDef {
    #[serde(default)]
    pub position: Vec3,
    /// Euler angles in degrees
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_color: Option<Color>,
    /// Whether the object starts on the render list
    #[serde(default)]
    pub visible: bool,
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}

impl Default for ObjectDef {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            model: None,
            flat_color: None,
            visible: false,
        }
    }
}
