//! Multi-selection style reconciliation.
//!
//! When several objects are selected at once, the style panel still shows a
//! single swatch per attribute. This module decides what that swatch is:
//! for each attribute, the selection's records are scanned in order, and
//!
//! * the first value seen seeds the working value;
//! * an entity that agrees leaves it alone;
//! * the first disagreement locks the attribute to the fallback value for
//!   the rest of the scan, no matter what later entities say;
//! * a record missing the attribute counts as a disagreement.
//!
//! Attributes are reconciled independently, so one contested attribute
//! never disturbs the unanimous ones. The result is always total: mixed or
//! missing attributes surface as the fallback value rather than as a
//! tri-state, which keeps every downstream consumer on the plain [`Style`]
//! type.

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;

use crate::style::{PartialStyle, Style, StyleAttribute, StyleProperty};

/// Number of attribute slots in the working state.
const ATTR_COUNT: usize = StyleAttribute::ALL.len();

/// Compute the style the panel displays for a selection.
///
/// `styles` are the selected objects' records, in any order; `fallback` is
/// the long-lived current style. With an empty selection the fallback is
/// returned unchanged. The inputs are never mutated.
#[must_use]
pub fn display_style<'a, I>(styles: I, fallback: &Style) -> Style
where
    I: IntoIterator<Item = &'a PartialStyle>,
{
    let mut merged: [Option<StyleProperty>; ATTR_COUNT] = [None; ATTR_COUNT];
    let mut locked = [false; ATTR_COUNT];
    let mut seen_any = false;

    for style in styles {
        seen_any = true;
        for attribute in StyleAttribute::ALL {
            let slot = attribute.index();
            if locked[slot] {
                continue;
            }
            match (merged[slot], style.get(attribute)) {
                // First record to carry the attribute seeds the value.
                (None, Some(value)) => merged[slot] = Some(value),
                // Agreement; the working value stands.
                (Some(current), Some(value)) if value == current => {}
                // Disagreement, or a record missing the attribute: lock to
                // the fallback for the rest of the scan.
                _ => {
                    merged[slot] = Some(fallback.get(attribute));
                    locked[slot] = true;
                }
            }
        }
    }

    if !seen_any {
        return *fallback;
    }

    let mut display = *fallback;
    for property in merged.into_iter().flatten() {
        display.set(property);
    }
    display
}
