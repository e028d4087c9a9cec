//! Scene model: styled objects and the in-memory store.
//!
//! The engine only ever reads and writes an object's `style` field. Geometry,
//! text, and z-ordering live with the host document model; this store keeps
//! just enough of each object for selection and style edits to resolve.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::{PartialStyle, Style};

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// The kind of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Ellipse inscribed in the bounding box.
    Ellipse,
    /// Diamond with vertices at the bounding-box edge midpoints.
    Diamond,
    /// Five-point star inscribed in the bounding box.
    Star,
    /// Straight line segment.
    Line,
    /// Directed connector with an arrowhead.
    Arrow,
}

/// A selectable, styleable object in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique identifier.
    pub id: ObjectId,
    /// Shape or connector kind.
    pub kind: ObjectKind,
    /// The object's own style record. May be sparse when the object was
    /// hydrated from an older document.
    pub style: PartialStyle,
}

impl SceneObject {
    /// Create a fresh object carrying a total style record.
    #[must_use]
    pub fn new(kind: ObjectKind, style: Style) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            style: PartialStyle::from(style),
        }
    }
}

/// In-memory store of scene objects, keyed by id.
pub struct SceneStore {
    objects: HashMap<ObjectId, SceneObject>,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Insert or replace an object.
    pub fn insert(&mut self, object: SceneObject) {
        self.objects.insert(object.id, object);
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<SceneObject> {
        self.objects.remove(id)
    }

    /// Look up an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// The style record of an object, if the id resolves.
    #[must_use]
    pub fn style(&self, id: &ObjectId) -> Option<&PartialStyle> {
        self.objects.get(id).map(|object| &object.style)
    }

    /// Apply the present fields of `patch` to one object's style. Attributes
    /// absent from the patch keep whatever the record held, including
    /// absence. Returns false when the id does not resolve.
    pub fn apply_style(&mut self, id: &ObjectId, patch: &PartialStyle) -> bool {
        let Some(object) = self.objects.get_mut(id) else {
            return false;
        };
        object.style.apply(patch);
        true
    }

    /// Replace the whole scene with a snapshot.
    pub fn load_snapshot(&mut self, objects: Vec<SceneObject>) {
        self.objects.clear();
        for object in objects {
            self.objects.insert(object.id, object);
        }
    }

    /// Iterate over all objects, in arbitrary order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Number of objects in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
