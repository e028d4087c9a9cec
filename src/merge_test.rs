#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use crate::palette::ColorId;
use crate::style::{DashStyle, PartialStyle, Style};

use super::*;

fn make_fallback() -> Style {
    Style {
        fill: ColorId::Green,
        stroke: ColorId::White,
        stroke_width: 1.0,
        dash: DashStyle::Solid,
    }
}

fn fill_only(color: ColorId) -> PartialStyle {
    PartialStyle {
        fill: Some(color),
        ..Default::default()
    }
}

// =============================================================
// Empty and single selections
// =============================================================

#[test]
fn empty_selection_displays_fallback_unchanged() {
    let fallback = make_fallback();
    let styles: [PartialStyle; 0] = [];
    assert_eq!(display_style(&styles, &fallback), fallback);
}

#[test]
fn single_total_record_displays_as_is() {
    let fallback = make_fallback();
    let own = Style {
        fill: ColorId::Violet,
        stroke: ColorId::Black,
        stroke_width: 4.0,
        dash: DashStyle::Dotted,
    };
    let styles = [PartialStyle::from(own)];
    assert_eq!(display_style(&styles, &fallback), own);
}

#[test]
fn single_sparse_record_fills_gaps_from_fallback() {
    // A missing attribute is a mismatch even with one entity selected.
    let fallback = make_fallback();
    let styles = [fill_only(ColorId::Blue)];
    let display = display_style(&styles, &fallback);
    assert_eq!(display.fill, ColorId::Blue);
    assert_eq!(display.stroke, fallback.stroke);
    assert_eq!(display.stroke_width, fallback.stroke_width);
    assert_eq!(display.dash, fallback.dash);
}

#[test]
fn record_with_no_attributes_displays_fallback() {
    let fallback = make_fallback();
    let styles = [PartialStyle::default()];
    assert_eq!(display_style(&styles, &fallback), fallback);
}

// =============================================================
// Unanimity
// =============================================================

#[test]
fn unanimous_value_survives_differing_fallback() {
    // Two red fills with a green fallback still display red.
    let fallback = make_fallback();
    let styles = [fill_only(ColorId::Red), fill_only(ColorId::Red)];
    assert_eq!(display_style(&styles, &fallback).fill, ColorId::Red);
}

#[test]
fn unanimous_total_records_display_their_style() {
    let fallback = make_fallback();
    let own = Style {
        fill: ColorId::Orange,
        stroke: ColorId::DarkGray,
        stroke_width: 2.0,
        dash: DashStyle::Dashed,
    };
    let styles = [PartialStyle::from(own); 4];
    assert_eq!(display_style(&styles, &fallback), own);
}

#[test]
fn stroke_width_unanimity_is_exact() {
    let fallback = make_fallback();
    let record = PartialStyle {
        stroke_width: Some(2.0),
        ..Default::default()
    };
    let display = display_style(&[record, record], &fallback);
    assert_eq!(display.stroke_width, 2.0);
}

// =============================================================
// Mismatch and locking
// =============================================================

#[test]
fn two_red_one_blue_fill_displays_fallback_green() {
    let fallback = make_fallback();
    let styles = [
        fill_only(ColorId::Red),
        fill_only(ColorId::Red),
        fill_only(ColorId::Blue),
    ];
    assert_eq!(display_style(&styles, &fallback).fill, ColorId::Green);
}

#[test]
fn lock_persists_after_later_agreement() {
    // Entities two through four agree on blue, but entity one already broke
    // unanimity, so the attribute stays at the fallback.
    let fallback = make_fallback();
    let styles = [
        fill_only(ColorId::Red),
        fill_only(ColorId::Blue),
        fill_only(ColorId::Blue),
        fill_only(ColorId::Blue),
    ];
    assert_eq!(display_style(&styles, &fallback).fill, ColorId::Green);
}

#[test]
fn lock_ignores_later_return_to_seed_value() {
    let fallback = make_fallback();
    let styles = [
        fill_only(ColorId::Red),
        fill_only(ColorId::Blue),
        fill_only(ColorId::Red),
    ];
    assert_eq!(display_style(&styles, &fallback).fill, ColorId::Green);
}

#[test]
fn lock_ignores_later_match_with_fallback_value() {
    // Fill locked to the green fallback at entity two; entity three's green
    // equals that value only coincidentally and must not re-seed fill.
    let fallback = make_fallback();
    let styles = [
        fill_only(ColorId::Red),
        fill_only(ColorId::Blue),
        fill_only(ColorId::Green),
    ];
    assert_eq!(display_style(&styles, &fallback).fill, ColorId::Green);
}

#[test]
fn missing_attribute_on_first_record_locks_immediately() {
    let fallback = make_fallback();
    let first = fill_only(ColorId::Red);
    let second = PartialStyle {
        fill: Some(ColorId::Red),
        stroke: Some(ColorId::Black),
        ..Default::default()
    };
    let display = display_style(&[first, second], &fallback);
    assert_eq!(display.fill, ColorId::Red); // unanimous
    assert_eq!(display.stroke, fallback.stroke); // missing anywhere is a mismatch
}

#[test]
fn missing_attribute_on_later_record_locks() {
    let fallback = make_fallback();
    let first = PartialStyle {
        fill: Some(ColorId::Red),
        stroke: Some(ColorId::Black),
        ..Default::default()
    };
    let second = fill_only(ColorId::Red);
    let display = display_style(&[first, second], &fallback);
    assert_eq!(display.fill, ColorId::Red);
    assert_eq!(display.stroke, fallback.stroke);
}

#[test]
fn stroke_width_mismatch_falls_back() {
    let fallback = make_fallback();
    let thin = PartialStyle {
        stroke_width: Some(2.0),
        ..Default::default()
    };
    let thick = PartialStyle {
        stroke_width: Some(2.5),
        ..Default::default()
    };
    let display = display_style(&[thin, thick], &fallback);
    assert_eq!(display.stroke_width, fallback.stroke_width);
}

#[test]
fn every_attribute_contested_displays_exact_fallback() {
    let fallback = make_fallback();
    let a = PartialStyle::from(Style {
        fill: ColorId::Red,
        stroke: ColorId::Black,
        stroke_width: 2.0,
        dash: DashStyle::Dashed,
    });
    let b = PartialStyle::from(Style {
        fill: ColorId::Blue,
        stroke: ColorId::Gray,
        stroke_width: 3.0,
        dash: DashStyle::Dotted,
    });
    assert_eq!(display_style(&[a, b], &fallback), fallback);
}

// =============================================================
// Independence of attributes
// =============================================================

#[test]
fn attributes_reconcile_independently() {
    // Fill is contested; stroke, width, and dash are unanimous.
    let fallback = make_fallback();
    let a = PartialStyle::from(Style {
        fill: ColorId::Red,
        stroke: ColorId::Black,
        stroke_width: 3.0,
        dash: DashStyle::Dotted,
    });
    let b = PartialStyle::from(Style {
        fill: ColorId::Blue,
        stroke: ColorId::Black,
        stroke_width: 3.0,
        dash: DashStyle::Dotted,
    });
    let display = display_style(&[a, b], &fallback);
    assert_eq!(display.fill, fallback.fill); // contested
    assert_eq!(display.stroke, ColorId::Black); // unanimous
    assert_eq!(display.stroke_width, 3.0); // unanimous
    assert_eq!(display.dash, DashStyle::Dotted); // unanimous
}

#[test]
fn conflict_order_does_not_change_result() {
    let fallback = make_fallback();
    let red = fill_only(ColorId::Red);
    let blue = fill_only(ColorId::Blue);
    let forward = display_style(&[red, blue], &fallback);
    let reverse = display_style(&[blue, red], &fallback);
    assert_eq!(forward, reverse);
}

// =============================================================
// Properties
// =============================================================

mod proptests {
    use proptest::option;
    use proptest::prelude::*;

    use crate::merge::display_style;
    use crate::palette::ColorId;
    use crate::style::{DashStyle, PartialStyle, Style, StyleAttribute, StyleProperty};

    fn color_strategy() -> impl Strategy<Value = ColorId> {
        prop::sample::select(ColorId::ALL.to_vec())
    }

    fn dash_strategy() -> impl Strategy<Value = DashStyle> {
        prop::sample::select(vec![DashStyle::Solid, DashStyle::Dashed, DashStyle::Dotted])
    }

    fn width_strategy() -> impl Strategy<Value = f64> {
        prop::sample::select(vec![0.5, 1.0, 2.0, 4.0, 8.0])
    }

    fn style_strategy() -> impl Strategy<Value = Style> {
        (color_strategy(), color_strategy(), width_strategy(), dash_strategy()).prop_map(
            |(fill, stroke, stroke_width, dash)| Style {
                fill,
                stroke,
                stroke_width,
                dash,
            },
        )
    }

    fn partial_style_strategy() -> impl Strategy<Value = PartialStyle> {
        (
            option::of(color_strategy()),
            option::of(color_strategy()),
            option::of(width_strategy()),
            option::of(dash_strategy()),
        )
            .prop_map(|(fill, stroke, stroke_width, dash)| PartialStyle {
                fill,
                stroke,
                stroke_width,
                dash,
            })
    }

    proptest! {
        #[test]
        fn empty_selection_is_identity(fallback in style_strategy()) {
            let styles: Vec<PartialStyle> = Vec::new();
            prop_assert_eq!(display_style(&styles, &fallback), fallback);
        }

        #[test]
        fn unanimous_selection_displays_shared_style(
            own in style_strategy(),
            fallback in style_strategy(),
            count in 1_usize..6,
        ) {
            let styles = vec![PartialStyle::from(own); count];
            prop_assert_eq!(display_style(&styles, &fallback), own);
        }

        #[test]
        fn each_attribute_is_unanimous_or_fallback(
            styles in prop::collection::vec(partial_style_strategy(), 1..6),
            fallback in style_strategy(),
        ) {
            let display = display_style(&styles, &fallback);
            for attribute in StyleAttribute::ALL {
                let values: Vec<Option<StyleProperty>> =
                    styles.iter().map(|style| style.get(attribute)).collect();
                let expected = match values[0] {
                    Some(first) if values.iter().all(|value| *value == Some(first)) => first,
                    _ => fallback.get(attribute),
                };
                prop_assert_eq!(display.get(attribute), expected);
            }
        }

        #[test]
        fn display_is_order_independent(
            styles in prop::collection::vec(partial_style_strategy(), 1..6),
            fallback in style_strategy(),
        ) {
            let forward = display_style(&styles, &fallback);
            let reversed: Vec<PartialStyle> = styles.iter().rev().copied().collect();
            prop_assert_eq!(display_style(&reversed, &fallback), forward);
        }

        #[test]
        fn missing_attribute_anywhere_forces_fallback(
            styles in prop::collection::vec(partial_style_strategy(), 1..6),
            fallback in style_strategy(),
        ) {
            let display = display_style(&styles, &fallback);
            for attribute in StyleAttribute::ALL {
                if styles.iter().any(|style| style.get(attribute).is_none()) {
                    prop_assert_eq!(display.get(attribute), fallback.get(attribute));
                }
            }
        }
    }
}
