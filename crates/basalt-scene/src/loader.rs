//! Scene loading from TOML files

use std::fs;
use std::path::Path;

use basalt_core::{Result, Transform};

use crate::format::SceneFile;
use crate::object::SceneObject;
use crate::scene::Scene;

/// Load a scene from a TOML file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<(Scene, SceneFile)> {
    let content = fs::read_to_string(path)?;
    load_scene_string(&content)
}

/// Load a scene from a TOML string
pub fn load_scene_string(content: &str) -> Result<(Scene, SceneFile)> {
    let scene_file: SceneFile = toml::from_str(content)?;
    let mut scene = Scene::new();

    for def in &scene_file.objects {
        let object = SceneObject {
            transform: Transform {
                position: def.position,
                rotation: def.rotation,
                scale: def.scale,
            },
            model: def.model,
            flat_color: def.flat_color,
        };

        let handle = scene.create_object(object)?;
        if def.visible {
            scene.add_to_render_list(handle)?;
        }
    }

    Ok((scene, scene_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_core::{ModelHandle, Vec3};

    #[test]
    fn load_populates_arena_in_file_order() {
        let toml_str = r#"
[scene]
name = "Ground Plane"

[[objects]]
model = 0
rotation = { x = -90.0, y = 0.0, z = 0.0 }
scale = { x = 1000.0, y = 1000.0, z = 1000.0 }
flat_color = { r = 0.5, g = 0.5, b = 0.5 }
visible = true

[[objects]]
model = 1
position = { x = 0.0, y = 1.0, z = 0.0 }
"#;
        let (scene, file) = load_scene_string(toml_str).unwrap();

        assert_eq!(file.scene.name, "Ground Plane");
        assert_eq!(scene.len(), 2);

        let first = scene.object(crate::SceneObjectHandle(0)).unwrap();
        assert_eq!(first.model, Some(ModelHandle(0)));
        assert_eq!(first.transform.rotation, Vec3::new(-90.0, 0.0, 0.0));
        assert_eq!(first.transform.scale, Vec3::new(1000.0, 1000.0, 1000.0));

        let second = scene.object(crate::SceneObjectHandle(1)).unwrap();
        assert_eq!(second.transform.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(second.transform.scale, Vec3::ONE);

        // Only the first object asked to be rendered.
        assert_eq!(scene.render_list(), &[crate::SceneObjectHandle(0)]);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(load_scene_string("not toml at [all").is_err());
        assert!(load_scene_string("[scene]\n").is_err()); // missing name
    }

    #[test]
    fn load_from_file_round_trip() {
        use crate::saver::save_scene;

        let dir = std::env::temp_dir().join("basalt_scene_roundtrip");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("scene.toml");

        let mut scene = Scene::new();
        for i in 0..3 {
            let mut object = SceneObject::with_model(ModelHandle(i));
            object.set_position(Vec3::new(i as f32, 0.0, 0.0));
            let handle = scene.create_object(object).unwrap();
            scene.add_to_render_list(handle).unwrap();
        }
        save_scene(&path, &scene, "Disk Scene").unwrap();

        let (restored, file) = load_scene(&path).unwrap();
        assert_eq!(file.scene.name, "Disk Scene");
        assert_eq!(restored.len(), 3);
        assert_eq!(restored.render_list().len(), 3);
        for (i, (_, object)) in restored.objects().enumerate() {
            assert_eq!(object.model, Some(ModelHandle(i as u32)));
            assert_eq!(object.transform.position.x, i as f32);
        }

        let _ = std::fs::remove_file(&path);
    }
}
