use tumble_engine::Scene;

#[test]
fn perf_smoke_update() {
    let mut scene = Scene::new();
    scene.set_gravity(0.0, -9.8);
    scene.enable_perf_metrics(true);
    scene.add_plane(0.0, 1.0, 0.0).unwrap();
    for i in 0..20 {
        let x = (i % 5) as f32 * 3.0;
        let y = 2.0 + (i / 5) as f32 * 3.0;
        if i % 2 == 0 {
            scene.add_sphere(x, y, 0.0, 0.0, 1.0, 1.0, 0.8, false).unwrap();
        } else {
            scene.add_obb(x, y, 0.0, 0.0, 0.3, 0.0, 2.0, 1.0, 1.0, 0.8, false).unwrap();
        }
    }

    scene.update(0.1);

    let stats = scene.get_perf_stats();
    assert!(stats.update_ms() >= 0.0);
    assert!(stats.steps() >= 9);
    assert_eq!(stats.body_count(), 21);
    assert_eq!(stats.energy_anomalies(), 0);

    let core = scene.core();
    assert!(core
        .bodies()
        .all(|(_, object)| object.rigid_body().map_or(true, |body| body.pos.is_finite())));
}
