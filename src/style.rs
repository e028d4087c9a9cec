//! Style schema: the closed set of editable attributes and the records
//! shapes carry.
//!
//! This module defines the attributes the style panel can edit
//! (`StyleAttribute`), a single attribute-with-value pair (`StyleProperty`),
//! a total style record (`Style`), and a sparse record for entity styles and
//! write instructions (`PartialStyle`).
//!
//! The schema is closed: there are no open-ended keys, and because
//! `StyleProperty` carries its value inside the variant, an attribute paired
//! with a value of the wrong type cannot be constructed.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

use crate::palette::ColorId;

/// One editable visual attribute of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleAttribute {
    /// Interior color.
    Fill,
    /// Outline color.
    Stroke,
    /// Outline width in world units.
    StrokeWidth,
    /// Outline dash pattern.
    Dash,
}

impl StyleAttribute {
    /// Every recognized attribute, in schema order.
    pub const ALL: [Self; 4] = [Self::Fill, Self::Stroke, Self::StrokeWidth, Self::Dash];

    /// Stable index into per-attribute working arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Fill => 0,
            Self::Stroke => 1,
            Self::StrokeWidth => 2,
            Self::Dash => 3,
        }
    }
}

/// Dash pattern for a shape's outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    /// Continuous outline (default).
    #[default]
    Solid,
    /// Evenly dashed outline.
    Dashed,
    /// Dotted outline.
    Dotted,
}

/// One attribute together with its value.
///
/// The value lives in the variant, so callers can hand a single
/// `StyleProperty` around instead of a loose (attribute, value) pair.
/// Serializes externally tagged, e.g. `{"fill":"red"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    /// Set the interior color.
    Fill(ColorId),
    /// Set the outline color.
    Stroke(ColorId),
    /// Set the outline width.
    StrokeWidth(f64),
    /// Set the outline dash pattern.
    Dash(DashStyle),
}

impl StyleProperty {
    /// The attribute this property sets.
    #[must_use]
    pub fn attribute(self) -> StyleAttribute {
        match self {
            Self::Fill(_) => StyleAttribute::Fill,
            Self::Stroke(_) => StyleAttribute::Stroke,
            Self::StrokeWidth(_) => StyleAttribute::StrokeWidth,
            Self::Dash(_) => StyleAttribute::Dash,
        }
    }
}

/// A total style record: one value for every recognized attribute.
///
/// Write targets are always total: the current style, merge results, and
/// the record a newly created object starts with. Serialized with camelCase
/// keys (`strokeWidth`), the same shape the panel and the wire use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Interior color.
    pub fill: ColorId,
    /// Outline color.
    pub stroke: ColorId,
    /// Outline width in world units.
    pub stroke_width: f64,
    /// Outline dash pattern.
    pub dash: DashStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: ColorId::Red,
            stroke: ColorId::Black,
            stroke_width: 1.0,
            dash: DashStyle::Solid,
        }
    }
}

impl Style {
    /// Read the value of one attribute.
    #[must_use]
    pub fn get(&self, attribute: StyleAttribute) -> StyleProperty {
        match attribute {
            StyleAttribute::Fill => StyleProperty::Fill(self.fill),
            StyleAttribute::Stroke => StyleProperty::Stroke(self.stroke),
            StyleAttribute::StrokeWidth => StyleProperty::StrokeWidth(self.stroke_width),
            StyleAttribute::Dash => StyleProperty::Dash(self.dash),
        }
    }

    /// Set the value of one attribute, leaving every other attribute
    /// untouched.
    pub fn set(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Fill(color) => self.fill = color,
            StyleProperty::Stroke(color) => self.stroke = color,
            StyleProperty::StrokeWidth(width) => self.stroke_width = width,
            StyleProperty::Dash(dash) => self.dash = dash,
        }
    }

    /// Apply every present field of a sparse patch.
    pub fn apply(&mut self, patch: &PartialStyle) {
        for property in patch.properties() {
            self.set(property);
        }
    }
}

/// Sparse style record. Only present fields carry meaning.
///
/// Scene objects own one of these: a record hydrated from an older document
/// may be missing attributes, and the merge treats a missing attribute as a
/// mismatch rather than an error. A `PartialStyle` is also the write
/// instruction an edit fans out to the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialStyle {
    /// Interior color, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColorId>,
    /// Outline color, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<ColorId>,
    /// Outline width, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Outline dash pattern, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashStyle>,
}

impl PartialStyle {
    /// Read the value of one attribute, if present.
    #[must_use]
    pub fn get(&self, attribute: StyleAttribute) -> Option<StyleProperty> {
        match attribute {
            StyleAttribute::Fill => self.fill.map(StyleProperty::Fill),
            StyleAttribute::Stroke => self.stroke.map(StyleProperty::Stroke),
            StyleAttribute::StrokeWidth => self.stroke_width.map(StyleProperty::StrokeWidth),
            StyleAttribute::Dash => self.dash.map(StyleProperty::Dash),
        }
    }

    /// Set the value of one attribute.
    pub fn set(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Fill(color) => self.fill = Some(color),
            StyleProperty::Stroke(color) => self.stroke = Some(color),
            StyleProperty::StrokeWidth(width) => self.stroke_width = Some(width),
            StyleProperty::Dash(dash) => self.dash = Some(dash),
        }
    }

    /// Apply every present field of another patch onto this record. Fields
    /// absent from `patch` keep their current value (or absence).
    pub fn apply(&mut self, patch: &PartialStyle) {
        for property in patch.properties() {
            self.set(property);
        }
    }

    /// True when no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        StyleAttribute::ALL
            .iter()
            .all(|attribute| self.get(*attribute).is_none())
    }

    /// The present fields as properties, in schema order.
    pub fn properties(self) -> impl Iterator<Item = StyleProperty> {
        StyleAttribute::ALL
            .into_iter()
            .filter_map(move |attribute| self.get(attribute))
    }
}

impl From<StyleProperty> for PartialStyle {
    /// A patch that writes exactly one attribute.
    fn from(property: StyleProperty) -> Self {
        let mut patch = Self::default();
        patch.set(property);
        patch
    }
}

impl From<Style> for PartialStyle {
    /// A patch carrying every attribute of a total record.
    fn from(style: Style) -> Self {
        Self {
            fill: Some(style.fill),
            stroke: Some(style.stroke),
            stroke_width: Some(style.stroke_width),
            dash: Some(style.dash),
        }
    }
}
