//! Integration tests for component attachment
//!
//! Tests attach, detach, replacement, and the default-on-read
//! contract for absent components.

use mosaic_storage::World;

#[derive(Clone, Default, PartialEq, Debug)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Clone, Default, PartialEq, Debug)]
struct Velocity {
    dx: f32,
    dy: f32,
}

#[derive(Clone, Default, PartialEq, Debug)]
struct Health(u32);

#[test]
fn attach_and_read_back() {
    let mut world = World::new();
    let e = world.create(()).unwrap();

    world.attach_one(e, Position { x: 1.0, y: 2.0 }).unwrap();

    let p = world.get_component::<Position>(e);
    assert_eq!(p, Position { x: 1.0, y: 2.0 });
}

#[test]
fn attach_replaces_existing_value() {
    let mut world = World::new();
    let e = world.create(()).unwrap();

    world.attach_one(e, Health(10)).unwrap();
    world.attach_one(e, Health(25)).unwrap();

    assert_eq!(world.get_component::<Health>(e), Health(25));
}

#[test]
fn create_with_bundle_attaches_everything() {
    let mut world = World::new();
    let e = world
        .create((Position { x: 3.0, y: 4.0 }, Velocity { dx: 1.0, dy: 0.0 }))
        .unwrap();

    assert!(world.has_component::<Position>(e));
    assert!(world.has_component::<Velocity>(e));
    assert_eq!(world.get_component::<Position>(e).x, 3.0);
}

#[test]
fn absent_component_reads_as_default() {
    let mut world = World::new();
    let e = world.create(()).unwrap();

    assert!(!world.has_component::<Health>(e));
    assert_eq!(world.get_component::<Health>(e), Health::default());
}

#[test]
fn has_component_transitions() {
    let mut world = World::new();
    let e = world.create(()).unwrap();
    assert!(!world.has_component::<Position>(e));

    world.attach_one(e, Position::default()).unwrap();
    assert!(world.has_component::<Position>(e));

    world.detach::<Position>(e);
    assert!(!world.has_component::<Position>(e));
}

#[test]
fn detach_leaves_other_components_intact() {
    let mut world = World::new();
    let e = world
        .create((Position { x: 5.0, y: 5.0 }, Health(3)))
        .unwrap();

    world.detach::<Position>(e);

    assert!(!world.has_component::<Position>(e));
    assert_eq!(world.get_component::<Health>(e), Health(3));
}

#[test]
fn remove_clears_components_before_reuse() {
    let mut world = World::new();
    let e1 = world.create((Health(99),)).unwrap();
    world.remove(e1);

    let e2 = world.create(()).unwrap();
    assert_eq!(e1.index, e2.index);
    assert!(!world.has_component::<Health>(e2));
    assert_eq!(world.get_component::<Health>(e2), Health::default());
}

#[test]
fn stale_handle_component_operations_are_quiet() {
    let mut world = World::new();
    let e1 = world.create(()).unwrap();
    world.remove(e1);
    let e2 = world.create(()).unwrap();

    world.attach_one(e1, Health(7)).unwrap();
    assert!(!world.has_component::<Health>(e2));
    assert_eq!(world.get_component::<Health>(e1), Health::default());

    world.attach_one(e2, Health(8)).unwrap();
    world.detach::<Health>(e1);
    assert_eq!(world.get_component::<Health>(e2), Health(8));
}
