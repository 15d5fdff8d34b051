#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use tumble_engine::Scene;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_round_trip() {
    tumble_engine::init();

    let mut scene = Scene::from_settings_json(r#"{"gravity":{"x":0,"y":-10}}"#.to_string())
        .expect("settings parse");
    scene.add_plane(0.0, 1.0, 0.0).expect("plane");
    let ball = scene
        .add_sphere(0.0, 3.0, 0.0, 0.0, 1.0, 1.0, 1.0, false)
        .expect("sphere");

    assert_eq!(scene.query_point_owner(0.0, 3.0), Some(ball));

    let spring = scene.grab(0.0, 3.0, 20.0, 0.5).expect("grab").expect("body under pointer");
    scene.drag_to(spring, 2.0, 3.0).expect("drag");
    scene.update(0.5);

    let position = scene.body_position(ball).expect("ball exists");
    assert!(position[0] > 0.0);
    assert!(scene.remove_body(spring));
    assert_eq!(scene.body_count(), 2);
    assert!(scene.render_json().contains("\"kind\":\"circle\""));
}

#[wasm_bindgen_test]
fn facade_rejects_bad_input() {
    assert!(Scene::from_settings_json(r#"{"fixedTimestep":-1}"#.to_string()).is_err());

    let mut scene = Scene::new();
    assert!(scene.add_sphere(0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 1.0, false).is_err());
    assert!(scene.add_plane(0.0, 0.0, 0.0).is_err());
    assert!(scene.set_fixed_timestep(0.0).is_err());
    assert!(scene.drag_to(12345, 0.0, 0.0).is_err());
}
