//! Selection style engine for a collaborative whiteboard.
//!
//! This crate owns the logic behind the style panel: the closed schema of
//! editable attributes, the palette of legal colors, the reconciliation
//! that turns a mixed multi-selection into the single style the panel
//! displays, and the commit path that fans one edit out to every selected
//! object as a single undoable transaction.
//!
//! The host owns everything else: widgets, pointer input, the wire
//! protocol, and the undo stack itself. It drives [`engine::StyleEngine`]
//! and dispatches the [`engine::StyleEdit`] values it gets back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | State container [`engine::StyleEngine`] and the [`engine::StyleEdit`] edit contract |
//! | [`merge`] | Pure multi-selection reconciliation |
//! | [`palette`] | Color ids and their fill/stroke hex resolution |
//! | [`scene`] | Styled objects and the in-memory store |
//! | [`style`] | Attribute schema and style records |

pub mod engine;
pub mod merge;
pub mod palette;
pub mod scene;
pub mod style;
