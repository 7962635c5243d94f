//! Integration tests for component masks
//!
//! Tests the bit algebra that query matching is built on.

use mosaic_foundation::{ComponentMask, MAX_COMPONENT_TYPES};

#[test]
fn mask_width_covers_every_assignable_id() {
    let mut mask = ComponentMask::empty();
    for id in 0..MAX_COMPONENT_TYPES as u32 {
        mask.insert(id);
    }
    assert_eq!(mask.len(), MAX_COMPONENT_TYPES);
}

#[test]
fn superset_test_is_the_include_rule() {
    let entity: ComponentMask = [0, 1, 5].into_iter().collect();
    let include: ComponentMask = [0, 5].into_iter().collect();

    // mask & include == include
    assert_eq!(entity.intersection(include), include);
    assert!(entity.is_superset(&include));
}

#[test]
fn exclusion_rule_bit_algebra() {
    // include = {0}, exclude = {1}
    let include: ComponentMask = [0].into_iter().collect();
    let exclude: ComponentMask = [1].into_iter().collect();
    let combined = include.union(exclude);
    let required = include.difference(exclude);

    // Entity with only the included bit: matches
    let just_included: ComponentMask = [0].into_iter().collect();
    assert_eq!(just_included.intersection(combined), required);

    // Entity with both bits: excluded
    let both: ComponentMask = [0, 1].into_iter().collect();
    assert_ne!(both.intersection(combined), required);

    // Entity with the included bit plus an unrelated one: still matches
    let extra: ComponentMask = [0, 40].into_iter().collect();
    assert_eq!(extra.intersection(combined), required);
}

mod mask_properties {
    use mosaic_foundation::{ComponentMask, MAX_COMPONENT_TYPES};
    use proptest::prelude::*;

    const ID_RANGE: std::ops::Range<u32> = 0..MAX_COMPONENT_TYPES as u32;

    proptest! {
        #[test]
        fn union_covers_both_operands(
            a in proptest::collection::vec(ID_RANGE, 0..16),
            b in proptest::collection::vec(ID_RANGE, 0..16),
        ) {
            let a: ComponentMask = a.into_iter().collect();
            let b: ComponentMask = b.into_iter().collect();
            let union = a.union(b);

            prop_assert!(union.is_superset(&a));
            prop_assert!(union.is_superset(&b));
        }

        #[test]
        fn difference_never_intersects_subtrahend(
            a in proptest::collection::vec(ID_RANGE, 0..16),
            b in proptest::collection::vec(ID_RANGE, 0..16),
        ) {
            let a: ComponentMask = a.into_iter().collect();
            let b: ComponentMask = b.into_iter().collect();

            prop_assert!(!a.difference(b).intersects(&b));
            prop_assert!(a.is_superset(&a.difference(b)));
        }

        #[test]
        fn insert_then_remove_clears_the_bit(
            base in proptest::collection::vec(ID_RANGE, 0..16),
            id in ID_RANGE,
        ) {
            let mut mask: ComponentMask = base.into_iter().collect();
            let had = mask.contains(id);

            mask.insert(id);
            prop_assert!(mask.contains(id));

            if !had {
                mask.remove(id);
                prop_assert!(!mask.contains(id));
            }
        }
    }
}

#[test]
fn masks_spanning_both_words() {
    let low: ComponentMask = [10].into_iter().collect();
    let high: ComponentMask = [100].into_iter().collect();
    let both = low.union(high);

    assert!(both.contains(10));
    assert!(both.contains(100));
    assert!(both.is_superset(&low));
    assert!(both.is_superset(&high));
    assert!(!low.intersects(&high));
}
