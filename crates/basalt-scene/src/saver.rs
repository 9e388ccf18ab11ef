//! Scene saving to TOML files

use std::fs;
use std::path::Path;

use basalt_core::Result;

use crate::format::{ObjectDef, SceneFile, SceneMetadata};
use crate::scene::Scene;

/// Save a scene to a TOML file
pub fn save_scene<P: AsRef<Path>>(path: P, scene: &Scene, name: impl Into<String>) -> Result<()> {
    let content = save_scene_string(scene, name)?;
    fs::write(path, content)?;
    Ok(())
}

/// Save a scene to a TOML string
pub fn save_scene_string(scene: &Scene, name: impl Into<String>) -> Result<String> {
    let scene_file = scene_to_file(scene, name);
    let content = toml::to_string_pretty(&scene_file)?;
    Ok(content)
}

/// Convert a scene to its file representation
pub fn scene_to_file(scene: &Scene, name: impl Into<String>) -> SceneFile {
    let objects = scene
        .objects()
        .map(|(handle, object)| ObjectDef {
            position: object.transform.position,
            rotation: object.transform.rotation,
            scale: object.transform.scale,
            model: object.model,
            flat_color: object.flat_color,
            visible: scene.render_list().contains(&handle),
        })
        .collect();

    SceneFile {
        scene: SceneMetadata {
            name: name.into(),
            version: "1.0".to_string(),
        },
        objects,
    }
}
