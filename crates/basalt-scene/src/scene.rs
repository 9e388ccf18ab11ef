//! The scene object arena and render list

use basalt_core::{BasaltError, Result};

use crate::object::{SceneObject, SceneObjectHandle};

/// Default arena capacity
pub const DEFAULT_CAPACITY: usize = 1024;

/// A fixed-capacity arena of scene objects with an explicit in-use count
///
/// Objects are addressed by stable [`SceneObjectHandle`]s; slots are never
/// reused or moved, so a handle stays valid for the scene's lifetime. The
/// render list holds handles, not references, and resolves them through
/// the arena on iteration.
///
/// Exhausting the arena and presenting an invalid handle are recoverable
/// errors by default. [`Scene::set_fail_fast`] turns both into panics for
/// callers that treat them as programmer errors.
pub struct Scene {
    objects: Vec<SceneObject>,
    capacity: usize,
    render_list: Vec<SceneObjectHandle>,
    fail_fast: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            capacity,
            render_list: Vec::new(),
            fail_fast: false,
        }
    }

    /// Panic on invalid handles and arena exhaustion instead of returning
    /// errors.
    pub fn set_fail_fast(&mut self, enabled: bool) {
        self.fail_fast = enabled;
    }

    /// Allocate a slot for `object` and return its handle.
    pub fn create_object(&mut self, object: SceneObject) -> Result<SceneObjectHandle> {
        if self.objects.len() == self.capacity {
            if self.fail_fast {
                panic!("scene capacity {} exhausted", self.capacity);
            }
            return Err(BasaltError::SceneFull(self.capacity));
        }

        let handle = SceneObjectHandle(self.objects.len() as u32);
        self.objects.push(object);

        Ok(handle)
    }

    pub fn object(&self, handle: SceneObjectHandle) -> Result<&SceneObject> {
        let index = self.resolve(handle)?;
        Ok(&self.objects[index])
    }

    pub fn object_mut(&mut self, handle: SceneObjectHandle) -> Result<&mut SceneObject> {
        let index = self.resolve(handle)?;
        Ok(&mut self.objects[index])
    }

    /// Number of allocated objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over every allocated object with its handle.
    pub fn objects(&self) -> impl Iterator<Item = (SceneObjectHandle, &SceneObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (SceneObjectHandle(i as u32), object))
    }

    /// Put `handle` on the render list. Idempotent.
    pub fn add_to_render_list(&mut self, handle: SceneObjectHandle) -> Result<()> {
        self.resolve(handle)?;
        if !self.render_list.contains(&handle) {
            self.render_list.push(handle);
        }
        Ok(())
    }

    /// Take `handle` off the render list; reports whether it was present.
    pub fn remove_from_render_list(&mut self, handle: SceneObjectHandle) -> bool {
        match self.render_list.iter().position(|h| *h == handle) {
            Some(index) => {
                self.render_list.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn render_list(&self) -> &[SceneObjectHandle] {
        &self.render_list
    }

    /// Resolve the render list through the arena.
    pub fn render_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.render_list
            .iter()
            .map(|handle| &self.objects[handle.raw() as usize])
    }

    /// Drop every object and clear the render list. Capacity is kept.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.render_list.clear();
    }

    fn resolve(&self, handle: SceneObjectHandle) -> Result<usize> {
        let index = handle.raw() as usize;
        if index >= self.objects.len() {
            if self.fail_fast {
                panic!("invalid scene object handle {}", handle.raw());
            }
            return Err(BasaltError::InvalidHandle(handle.raw()));
        }
        Ok(index)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
