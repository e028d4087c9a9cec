//! Style engine: selection, current style, and the edit contract.
//!
//! DESIGN
//! ======
//! The engine owns the three pieces of state the style panel reads: the
//! scene store, the selected ids, and the long-lived current style. All
//! mutation goes through `&mut self`, so a reader can never observe a
//! half-applied edit.
//!
//! Edits commit through [`StyleEngine::apply_style_patch`]: the current
//! style takes every present field of the patch, every selected object's
//! record takes the same fields, and the whole write comes back as one
//! [`StyleEdit`] for the host to broadcast and record as a single undo
//! entry. With nothing selected the same call degrades to a preference
//! change: only the current style moves, and the edit's target list is
//! empty.
//!
//! The selection is replaced wholesale by [`StyleEngine::set_selection`];
//! ids with no backing object are dropped on the way in, and object removal
//! and snapshot loads prune stale ids, so the selection always resolves.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::merge;
use crate::scene::{ObjectId, ObjectKind, SceneObject, SceneStore};
use crate::style::{PartialStyle, Style, StyleProperty};

/// A committed style edit, returned for the host to dispatch.
///
/// One `StyleEdit` covers the whole transaction: the current-style change
/// plus the write to every object in `targets`. Hosts send it as a single
/// frame and record it as a single undo entry; splitting it would leave
/// peers (or the undo stack) observing a half-applied edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEdit {
    /// Ids of the objects whose records were written, in sorted order.
    pub targets: Vec<ObjectId>,
    /// The fields that were written.
    pub patch: PartialStyle,
}

impl StyleEdit {
    /// True when the edit wrote no fields anywhere.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.patch.is_empty()
    }
}

/// Core state behind the style panel.
pub struct StyleEngine {
    doc: SceneStore,
    selection: HashSet<ObjectId>,
    current_style: Style,
}

impl StyleEngine {
    /// Create an engine with an empty scene, an empty selection, and the
    /// default current style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            doc: SceneStore::new(),
            selection: HashSet::new(),
            current_style: Style::default(),
        }
    }

    /// Replace the scene with a snapshot. Selection ids that no longer
    /// resolve are dropped.
    pub fn load_snapshot(&mut self, objects: Vec<SceneObject>) {
        self.doc.load_snapshot(objects);
        let doc = &self.doc;
        self.selection.retain(|id| doc.get(id).is_some());
    }

    /// Insert or replace an object, e.g. one arriving from a peer.
    pub fn insert_object(&mut self, object: SceneObject) {
        self.doc.insert(object);
    }

    /// Remove an object, dropping it from the selection as well.
    pub fn remove_object(&mut self, id: &ObjectId) -> Option<SceneObject> {
        self.selection.remove(id);
        self.doc.remove(id)
    }

    /// Create a fresh object styled with the current style and insert it.
    /// The created object is returned for the host to broadcast.
    pub fn create_object(&mut self, kind: ObjectKind) -> SceneObject {
        let object = SceneObject::new(kind, self.style_for_new_object());
        self.doc.insert(object.clone());
        object
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.doc.get(id)
    }

    /// Read-only access to the scene store.
    #[must_use]
    pub fn doc(&self) -> &SceneStore {
        &self.doc
    }

    /// Replace the selection wholesale. Ids with no backing object are
    /// dropped on the way in.
    pub fn set_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ObjectId>,
    {
        let doc = &self.doc;
        self.selection = ids.into_iter().filter(|id| doc.get(id).is_some()).collect();
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The currently selected ids.
    #[must_use]
    pub fn selection(&self) -> &HashSet<ObjectId> {
        &self.selection
    }

    /// Number of selected objects.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// True when at least one object is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// True when the selection is large enough to align (two or more).
    #[must_use]
    pub fn has_two_or_more(&self) -> bool {
        self.selection.len() >= 2
    }

    /// True when the selection is large enough to distribute (three or
    /// more).
    #[must_use]
    pub fn has_three_or_more(&self) -> bool {
        self.selection.len() >= 3
    }

    /// The long-lived current style: applied to newly created objects and
    /// used as the fallback when selected objects disagree.
    #[must_use]
    pub fn current_style(&self) -> Style {
        self.current_style
    }

    /// Replace the current style wholesale, e.g. when hydrating a session.
    pub fn set_current_style(&mut self, style: Style) {
        self.current_style = style;
    }

    /// The style a newly created object starts with.
    #[must_use]
    pub fn style_for_new_object(&self) -> Style {
        self.current_style
    }

    /// Compute the style the panel displays for the current selection.
    ///
    /// Reads engine state without mutating it; call again whenever the
    /// selection, an object's style, or the current style changes.
    #[must_use]
    pub fn display_style(&self) -> Style {
        let styles = self.selection.iter().filter_map(|id| self.doc.style(id));
        merge::display_style(styles, &self.current_style)
    }

    /// Apply a single attribute edit from the panel.
    ///
    /// Equivalent to [`StyleEngine::apply_style_patch`] with a one-field
    /// patch.
    pub fn apply_style_edit(&mut self, property: StyleProperty) -> StyleEdit {
        self.apply_style_patch(&PartialStyle::from(property))
    }

    /// Apply a sparse patch as one transaction.
    ///
    /// The current style takes every present field of the patch, and so does
    /// every selected object's record. Attributes absent from the patch are
    /// untouched everywhere. The returned [`StyleEdit`] lists the written
    /// objects in sorted id order, so the same logical edit always produces
    /// the same value.
    pub fn apply_style_patch(&mut self, patch: &PartialStyle) -> StyleEdit {
        self.current_style.apply(patch);

        let mut targets: Vec<ObjectId> = Vec::with_capacity(self.selection.len());
        for id in &self.selection {
            if self.doc.apply_style(id, patch) {
                targets.push(*id);
            }
        }
        targets.sort_unstable();

        debug!(targets = targets.len(), "style edit applied");
        StyleEdit {
            targets,
            patch: *patch,
        }
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}
