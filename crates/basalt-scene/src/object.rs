//! Scene objects and their handles

use std::fmt;

use basalt_core::{Color, ModelHandle, Transform, Vec3};

/// Stable index of an object in a [`Scene`](crate::Scene) arena
///
/// Handles stay valid for the lifetime of the scene; the arena never
/// reuses or moves slots.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SceneObjectHandle(pub u32);

impl SceneObjectHandle {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SceneObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SceneObjectHandle({})", self.0)
    }
}

/// One object in the scene: a transform plus optional model and color
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneObject {
    pub transform: Transform,
    /// Model in the external resource manager, if any
    pub model: Option<ModelHandle>,
    /// Flat color override for modelless primitives
    pub flat_color: Option<Color>,
}

impl SceneObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(model: ModelHandle) -> Self {
        Self {
            model: Some(model),
            ..Default::default()
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    pub fn set_flat_color(&mut self, color: Color) {
        self.flat_color = Some(color);
    }

    /// World matrix: translation x rotation x scale
    pub fn world_matrix(&self) -> [[f32; 4]; 4] {
        self.transform.to_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_identity() {
        let object = SceneObject::new();
        assert_eq!(object.transform, Transform::IDENTITY);
        assert!(object.model.is_none());
        assert!(object.flat_color.is_none());
    }

    #[test]
    fn world_matrix_composes_translation_and_scale() {
        let mut object = SceneObject::with_model(ModelHandle(3));
        object.set_position(Vec3::new(10.0, 0.0, -5.0));
        object.set_scale(Vec3::new(2.0, 2.0, 2.0));

        let m = object.world_matrix();
        assert_eq!([m[3][0], m[3][1], m[3][2]], [10.0, 0.0, -5.0]);
        assert!((m[0][0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn setters_update_in_place() {
        let mut object = SceneObject::new();
        object.set_rotation(Vec3::new(-90.0, 0.0, 0.0));
        object.set_flat_color(Color::new(0.5, 0.5, 0.5));

        assert_eq!(object.transform.rotation, Vec3::new(-90.0, 0.0, 0.0));
        assert_eq!(object.flat_color, Some(Color::new(0.5, 0.5, 0.5)));
    }
}
