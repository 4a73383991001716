use scene_player::host::clock::ClockHost;
use scene_player::{
    Background, BuildConfig, Element, OverrunPolicy, Placement, PropertyMap, Scene, SceneError,
};

fn animated_element(start: f64, length: f64) -> Element {
    let mut element = Element::new(120.0, 80.0, start, length);
    element.add_key_frame(0.0, PropertyMap::new()).unwrap();
    element.add_key_frame(length, PropertyMap::new()).unwrap();
    element
}

#[test]
fn test_build_realizes_children_in_order() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    scene.add_child(animated_element(0.0, 400.0));
    scene.add_child(Element::image(64.0, 64.0, 200.0, 300.0, "cat.png"));

    let mut host = ClockHost::new();
    let realization = scene.build(&mut host).unwrap();

    assert_eq!(realization.root.child_count(), 2);

    let root_style = realization.root.style();
    assert_eq!(root_style.placement, Placement::Relative);
    assert!(root_style.visible);

    let first = realization.root.child(0).unwrap().style();
    assert_eq!(first.placement, Placement::Absolute);
    assert!(!first.visible);
    assert_eq!(first.background, Background::Transparent);

    let second = realization.root.child(1).unwrap().style();
    assert_eq!(second.background, Background::Image("cat.png".to_string()));
}

#[test]
fn test_keyframeless_elements_produce_no_handles() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    scene.add_child(animated_element(0.0, 500.0));
    scene.add_child(Element::new(50.0, 50.0, 0.0, 500.0)); // no keyframes

    let mut host = ClockHost::new();
    let realization = scene.build(&mut host).unwrap();

    // Both are realized as visuals, only the animated one gets a handle
    assert_eq!(realization.root.child_count(), 2);
    assert_eq!(realization.remote.handle_count(), 1);
}

#[test]
fn test_scene_background_applies_to_root() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    scene.set_background_image("backdrop.jpg");

    let mut host = ClockHost::new();
    let realization = scene.build(&mut host).unwrap();
    assert_eq!(
        realization.root.style().background,
        Background::Image("backdrop.jpg".to_string())
    );
}

#[test]
fn test_build_rejects_overrun_window_before_realizing() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    scene.add_child(animated_element(0.0, 400.0));
    scene.add_child(animated_element(500.0, 800.0)); // ends at 1300ms

    let mut host = ClockHost::new();
    let err = scene.build(&mut host).unwrap_err();
    assert!(matches!(err, SceneError::WindowOutOfBounds { .. }));

    // Validation ran before any handle was created
    assert_eq!(host.handle_count(), 0);
}

#[test]
fn test_build_with_clamp_policy_accepts_overrun() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0)
        .unwrap()
        .with_config(BuildConfig::with_overrun(OverrunPolicy::Clamp));
    scene.add_child(animated_element(500.0, 800.0));

    let mut host = ClockHost::new();
    let realization = scene.build(&mut host).unwrap();
    assert_eq!(realization.remote.handle_count(), 1);
}

#[test]
fn test_rebuild_produces_fresh_realization() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    scene.add_child(animated_element(0.0, 500.0));

    let mut host = ClockHost::new();
    let first = scene.build(&mut host).unwrap();
    let second = scene.build(&mut host).unwrap();

    // Each build realizes its own handle collection
    assert_eq!(first.remote.handle_count(), 1);
    assert_eq!(second.remote.handle_count(), 1);
    assert_eq!(host.handle_count(), 2);
}

#[test]
fn test_realization_staleness_tracks_scene_version() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    let id = scene.add_child(animated_element(0.0, 500.0));

    let mut host = ClockHost::new();
    let realization = scene.build(&mut host).unwrap();
    assert!(!realization.is_stale(&scene));

    // Editing an element's window requires a rebuild to take effect
    scene.child_mut(id).unwrap().set_length(900.0);
    assert!(realization.is_stale(&scene));

    let rebuilt = scene.build(&mut host).unwrap();
    assert!(!rebuilt.is_stale(&scene));
}

#[test]
fn test_build_does_not_mutate_elements() {
    let mut scene = Scene::new(600.0, 480.0, 1000.0).unwrap();
    let id = scene.add_child(animated_element(100.0, 500.0));
    let before = scene.child(id).unwrap().clone();

    let mut host = ClockHost::new();
    scene.build(&mut host).unwrap();

    assert_eq!(scene.child(id).unwrap(), &before);
}
