//! Minimal document model for recompute results.
//!
//! The CAD host owns the real document; this mirror keeps the shapes a
//! stair object produced so a failed recompute can leave the previous
//! result untouched.

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use stg_solid::FacetSolid;

new_key_type! {
    /// Stable handle to an object owned by a [`Document`].
    pub struct ObjectId;
}

/// A shape the stair generator attached to its parent object, such as a
/// support beam or a handrail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildObject {
    pub label: String,
    pub shape: FacetSolid,
}

/// Shapes produced by stair recomputes, keyed by stable ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    objects: SlotMap<ObjectId, ChildObject>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, shape: FacetSolid) -> ObjectId {
        self.objects.insert(ChildObject {
            label: label.into(),
            shape,
        })
    }

    pub fn get(&self, id: ObjectId) -> Option<&ChildObject> {
        self.objects.get(id)
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<ChildObject> {
        self.objects.remove(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ChildObject)> {
        self.objects.iter()
    }

    /// Drop the given children and insert their replacements, returning
    /// the new ids. Old ids become invalid; this is the swap a recompute
    /// performs once its whole result is known to be good.
    pub fn replace_children(
        &mut self,
        old: &[ObjectId],
        new: Vec<ChildObject>,
    ) -> Vec<ObjectId> {
        for &id in old {
            self.objects.remove(id);
        }
        new.into_iter()
            .map(|c| self.objects.insert(c))
            .collect()
    }
}
