//! Basalt Scene - scene object management and TOML scene files
//!
//! A fixed-capacity arena of scene objects addressed by stable handles,
//! a render list resolved through the arena, and TOML serialization of
//! the scene description.

mod format;
mod loader;
mod object;
mod saver;
mod scene;

pub use format::{ObjectDef, SceneFile, SceneMetadata};
pub use loader::{load_scene, load_scene_string};
pub use object::{SceneObject, SceneObjectHandle};
pub use saver::{save_scene, save_scene_string, scene_to_file};
pub use scene::{Scene, DEFAULT_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_core::{BasaltError, ModelHandle, Vec3};

    #[test]
    fn build_a_default_scene() {
        // The classic startup scene: one big flat ground square.
        let mut scene = Scene::new();
        let mut square = SceneObject::with_model(ModelHandle(0));
        square.set_rotation(Vec3::new(-90.0, 0.0, 0.0));
        square.set_scale(Vec3::new(1000.0, 1000.0, 1000.0));
        square.set_flat_color(basalt_core::Color::new(0.5, 0.5, 0.5));

        let handle = scene.create_object(square).unwrap();
        scene.add_to_render_list(handle).unwrap();

        assert_eq!(scene.render_objects().count(), 1);
        let m = scene.object(handle).unwrap().world_matrix();
        // Scale survives the rotation in the world matrix's column lengths.
        let col0_len = (m[0][0].powi(2) + m[0][1].powi(2) + m[0][2].powi(2)).sqrt();
        assert!((col0_len - 1000.0).abs() < 1e-2);
    }

    #[test]
    fn capacity_is_enforced_across_the_api() {
        let mut scene = Scene::with_capacity(8);
        for _ in 0..8 {
            scene.create_object(SceneObject::new()).unwrap();
        }

        assert!(matches!(
            scene.create_object(SceneObject::new()),
            Err(BasaltError::SceneFull(8))
        ));

        // A handle past the in-use count is invalid even below capacity.
        let mut small = Scene::with_capacity(8);
        small.create_object(SceneObject::new()).unwrap();
        assert!(small.object(SceneObjectHandle(7)).is_err());
    }
}
