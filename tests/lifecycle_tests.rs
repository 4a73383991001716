use scene_player::{Element, OverrunPolicy, PropertyMap, PropertyValue, SceneError};

fn props(entries: &[(&str, f64)]) -> PropertyMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), PropertyValue::from(*value)))
        .collect()
}

#[test]
fn test_empty_element_has_empty_lifecycle() {
    let element = Element::new(100.0, 100.0, 0.0, 500.0);
    let lifecycle = element
        .create_lifecycle(1000.0, OverrunPolicy::Reject)
        .unwrap();
    assert!(lifecycle.is_empty());
}

#[test]
fn test_lifecycle_has_n_plus_four_frames() {
    for n in 1..=5 {
        let mut element = Element::new(100.0, 100.0, 100.0, 500.0);
        for i in 0..n {
            element
                .add_key_frame(i as f64 * 100.0, PropertyMap::new())
                .unwrap();
        }
        let lifecycle = element
            .create_lifecycle(1000.0, OverrunPolicy::Reject)
            .unwrap();
        assert_eq!(lifecycle.len(), n + 4);
    }
}

#[test]
fn test_offsets_non_decreasing_and_in_range() {
    let mut element = Element::new(100.0, 100.0, 200.0, 300.0);
    for time in [0.0, 150.0, 300.0] {
        element.add_key_frame(time, PropertyMap::new()).unwrap();
    }

    let lifecycle = element
        .create_lifecycle(1000.0, OverrunPolicy::Reject)
        .unwrap();
    let offsets: Vec<f64> = lifecycle.frames().iter().map(|f| f.offset).collect();

    assert_eq!(offsets, vec![0.0, 0.2, 0.2, 0.35, 0.5, 0.5, 1.0]);
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(offsets.iter().all(|o| (0.0..=1.0).contains(o)));
}

#[test]
fn test_full_window_fade_scenario() {
    let mut element = Element::new(100.0, 100.0, 0.0, 1000.0);
    element
        .add_key_frame(0.0, props(&[("opacity", 0.0)]))
        .unwrap();
    element
        .add_key_frame(1000.0, props(&[("opacity", 1.0)]))
        .unwrap();

    let lifecycle = element
        .create_lifecycle(1000.0, OverrunPolicy::Reject)
        .unwrap();
    let frames = lifecycle.frames();

    let offsets: Vec<f64> = frames.iter().map(|f| f.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

    for frame in &frames[..3] {
        assert_eq!(frame.properties["opacity"].as_number(), Some(0.0));
    }
    for frame in &frames[3..] {
        assert_eq!(frame.properties["opacity"].as_number(), Some(1.0));
    }

    let visibility: Vec<bool> = frames.iter().map(|f| f.visible).collect();
    assert_eq!(visibility, vec![false, false, true, true, false, false]);
}

#[test]
fn test_boundary_frames_carry_first_and_last_properties() {
    let mut element = Element::new(100.0, 100.0, 100.0, 400.0);
    element
        .add_key_frame(0.0, props(&[("opacity", 0.25)]))
        .unwrap();
    element
        .add_key_frame(200.0, props(&[("opacity", 0.5)]))
        .unwrap();
    element
        .add_key_frame(400.0, props(&[("opacity", 0.75)]))
        .unwrap();

    let lifecycle = element
        .create_lifecycle(1000.0, OverrunPolicy::Reject)
        .unwrap();
    let frames = lifecycle.frames();

    assert_eq!(frames[0].properties["opacity"].as_number(), Some(0.25));
    assert_eq!(frames[1].properties["opacity"].as_number(), Some(0.25));
    let last = frames.len() - 1;
    assert_eq!(frames[last].properties["opacity"].as_number(), Some(0.75));
    assert_eq!(frames[last - 1].properties["opacity"].as_number(), Some(0.75));
}

#[test]
fn test_overrun_rejected_by_default_policy() {
    let mut element = Element::new(100.0, 100.0, 500.0, 800.0);
    element.add_key_frame(0.0, PropertyMap::new()).unwrap();

    let err = element
        .create_lifecycle(1000.0, OverrunPolicy::Reject)
        .unwrap_err();
    assert_eq!(
        err,
        SceneError::WindowOutOfBounds {
            start: 500.0,
            length: 800.0,
            scene_length: 1000.0,
        }
    );
}

#[test]
fn test_overrun_clamped_offsets_stay_in_range() {
    let mut element = Element::new(100.0, 100.0, 500.0, 800.0);
    element.add_key_frame(0.0, PropertyMap::new()).unwrap();
    element.add_key_frame(600.0, PropertyMap::new()).unwrap();

    let lifecycle = element
        .create_lifecycle(1000.0, OverrunPolicy::Clamp)
        .unwrap();
    let offsets: Vec<f64> = lifecycle.frames().iter().map(|f| f.offset).collect();

    assert!(offsets.iter().all(|o| (0.0..=1.0).contains(o)));
    // (500 + 600) / 1000 would be 1.1; clamped
    assert_eq!(offsets[3], 1.0);
}

#[test]
fn test_overrun_permitted_offsets_exceed_one() {
    let mut element = Element::new(100.0, 100.0, 500.0, 800.0);
    element.add_key_frame(0.0, PropertyMap::new()).unwrap();

    let lifecycle = element
        .create_lifecycle(1000.0, OverrunPolicy::Permit)
        .unwrap();
    let frames = lifecycle.frames();

    // (500 + 800) / 1000 passes through unclamped
    assert_eq!(frames[frames.len() - 2].offset, 1.3);
}
