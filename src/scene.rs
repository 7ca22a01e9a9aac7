use log::debug;

use crate::object::{ObjectId, SceneObject};
use crate::types::SendList;

/// Owns every object in a world and hands out non-owning ids. Parent links
/// between objects are ids resolved through this container; lifetimes are
/// managed here only, so no cycles can keep objects alive.
#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the object, stamps its id, and returns the handle.
    pub fn add(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        object.id = Some(id);
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0 as usize)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Flattens every object's records into one send list for upload.
    pub fn build_send_list(&self) -> SendList {
        let mut send = SendList::new();
        for object in &self.objects {
            object.append_to(&mut send);
        }
        debug!(
            "send list: {} box(es), {} sphere(s), {} triangle(s)",
            send.boxes.len(),
            send.spheres.len(),
            send.triangles.len()
        );
        send
    }
}
