//! Integration tests for rectangle geometry.
//!
//! Property tests cover the algebraic guarantees callers rely on when
//! comparing detected regions.

use figure_regions::geometry::Rect;
use figure_regions::regions::{Diagram, Label, LabelId, Panel, Region, RegionKind};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..500, 0i32..300, -500i32..500, 0i32..300).prop_map(|(left, w, top, h)| {
        Rect::new(
            f64::from(left),
            f64::from(left + w),
            f64::from(top),
            f64::from(top + h),
        )
    })
}

proptest! {
    #[test]
    fn contains_is_reflexive(r in rect_strategy()) {
        prop_assert!(r.contains(&r));
    }

    #[test]
    fn overlaps_self_when_not_degenerate(r in rect_strategy()) {
        prop_assert_eq!(r.overlaps(&r), r.width() > 0.0 && r.height() > 0.0);
    }

    #[test]
    fn overlaps_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn separation_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.separation(&b), b.separation(&a));
        prop_assert_eq!(a.separation(&a), 0.0);
        prop_assert!(a.separation(&b) >= 0.0);
    }

    #[test]
    fn contains_is_transitive(a in rect_strategy(), b in rect_strategy(), c in rect_strategy()) {
        if a.contains(&b) && b.contains(&c) {
            prop_assert!(a.contains(&c));
        }
    }

    #[test]
    fn touching_rects_never_overlap(r in rect_strategy(), w in 1i32..100) {
        let right = Rect::new(r.right, r.right + f64::from(w), r.top, r.bottom);
        let below = Rect::new(r.left, r.right, r.bottom, r.bottom + f64::from(w));
        prop_assert!(!r.overlaps(&right));
        prop_assert!(!r.overlaps(&below));
    }

    #[test]
    fn try_new_accepts_ordered_bounds(r in rect_strategy()) {
        let checked = Rect::try_new(r.left, r.right, r.top, r.bottom);
        prop_assert_eq!(checked.ok(), Some(r));
    }
}

#[test]
fn test_touching_example() {
    let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    let b = Rect::new(10.0, 20.0, 0.0, 10.0);
    assert_eq!(a.center().x, 5.0);
    assert_eq!(b.center().x, 15.0);
    assert_eq!(a.separation(&b), 10.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn test_overlapping_example() {
    let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    let b = Rect::new(5.0, 15.0, 0.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(!a.contains(&b));
}

#[test]
fn test_regions_share_rect_geometry() {
    let diagram = Diagram::new(0.0, 10.0, 0.0, 10.0, 0);
    let label = Label::new(10.0, 20.0, 0.0, 10.0, 1);
    assert_eq!(diagram.rect().separation(label.rect()), 10.0);
    assert!(!diagram.rect().overlaps(label.rect()));
}

#[test]
fn test_identical_diagrams_are_distinct_regions() {
    let panels: Vec<Region> = vec![
        Diagram::new(0.0, 10.0, 0.0, 10.0, 0).with_label(LabelId(2)).into(),
        Diagram::new(0.0, 10.0, 0.0, 10.0, 0).into(),
    ];
    // Same geometry, independent state.
    assert_eq!(panels[0].rect(), panels[1].rect());
    assert_eq!(panels[0].as_diagram().unwrap().label, Some(LabelId(2)));
    assert_eq!(panels[1].as_diagram().unwrap().label, None);
}

#[test]
fn test_serde_json() {
    let panel = Panel::new(1.0, 2.0, 3.0, 4.0, 5);
    let json = serde_json::to_string(&panel).unwrap();
    assert!(json.contains("\"tag\":5"));
    assert!(json.contains("\"repeating\":false"));

    let region: Region = serde_json::from_str(
        r#"{"Label":{"panel":{"bbox":{"left":0.0,"right":4.0,"top":0.0,"bottom":2.0},"tag":1,"repeating":true},"text":"3a"}}"#,
    )
    .unwrap();
    assert_eq!(region.kind(), RegionKind::Label);
    assert!(region.panel().repeating);
    assert_eq!(region.as_label().unwrap().text.as_deref(), Some("3a"));
    assert_eq!(region.rect().area(), 8.0);
}
