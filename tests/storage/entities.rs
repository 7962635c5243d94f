//! Integration tests for entity lifecycle
//!
//! Tests creation, removal, generational identity, and slot reuse.

use mosaic_storage::World;

#[derive(Clone, Default, PartialEq, Debug)]
struct Marker;

#[test]
fn create_world() {
    let world = World::new();
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn create_entity() {
    let mut world = World::new();

    let e1 = world.create(()).unwrap();
    assert!(e1.generation >= 1);

    let e2 = world.create(()).unwrap();
    assert_ne!(e1, e2);
    assert_eq!(world.entity_count(), 2);
}

#[test]
fn remove_and_create_entity_reuses_slot() {
    let mut world = World::new();
    let e1 = world.create(()).unwrap();
    world.remove(e1);

    let e2 = world.create(()).unwrap();
    assert_eq!(e1.index, e2.index);
    assert_ne!(e1, e2);
    assert!(e2.generation > e1.generation);
}

#[test]
fn stale_handle_never_revalidates() {
    let mut world = World::new();
    let e1 = world.create(()).unwrap();
    world.remove(e1);

    // Cycle the slot a few times; the old handle must stay dead
    for _ in 0..3 {
        let e = world.create(()).unwrap();
        assert_eq!(e.index, e1.index);
        assert!(!world.contains(e1));
        world.remove(e);
    }
}

#[test]
fn remove_is_idempotent_through_stale_handle() {
    let mut world = World::new();
    let e1 = world.create(()).unwrap();
    world.remove(e1);
    let e2 = world.create((Marker,)).unwrap();

    // The stale handle shares e2's index; removing it must not hurt e2
    world.remove(e1);

    assert!(world.contains(e2));
    assert!(world.has_component::<Marker>(e2));
}

#[test]
fn entity_count_tracks_lifecycle() {
    let mut world = World::new();
    let e1 = world.create(()).unwrap();
    let _e2 = world.create(()).unwrap();
    let e3 = world.create(()).unwrap();

    world.remove(e1);
    world.remove(e3);
    assert_eq!(world.entity_count(), 1);

    world.create(()).unwrap();
    assert_eq!(world.entity_count(), 2);
}

#[test]
fn entities_iterate_in_index_order() {
    let mut world = World::new();
    let e1 = world.create(()).unwrap();
    let e2 = world.create(()).unwrap();
    let e3 = world.create(()).unwrap();
    world.remove(e2);

    let live: Vec<_> = world.entities().collect();
    assert_eq!(live, vec![e1, e3]);
}
