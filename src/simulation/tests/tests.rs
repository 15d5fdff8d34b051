use super::*;
use crate::core::error::PhysicsError;
use crate::rigid_body::RigidBody;
use crate::shapes::{Obb, Plane, Sphere};
use crate::spring::Spring;

const H: f32 = 1.0 / 64.0;

fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Sphere {
    Sphere::new(RigidBody::new(Vec2::new(x, y), 1.0).with_velocity(Vec2::new(vx, vy)), 1.0)
}

fn floor() -> Plane {
    Plane::new(Vec2::new(0.0, 1.0), 0.0).unwrap()
}

fn position(scene: &SceneCore, handle: BodyHandle) -> Vec2 {
    scene.body(handle).and_then(PhysicsObject::rigid_body).unwrap().pos
}

fn dyadic_scene() -> SceneCore {
    let mut scene = SceneCore::new();
    scene.set_fixed_timestep(H).unwrap();
    scene
}

#[test]
fn defaults_match_settings() {
    let scene = SceneCore::new();
    assert_eq!(scene.fixed_timestep(), 0.01);
    assert_eq!(scene.gravity(), Vec2::zero());
    assert_eq!(scene.settings(), SceneSettings::default());
}

#[test]
fn update_steps_with_fixed_timestep_not_frame_delta() {
    let mut scene = dyadic_scene();
    let handle = scene.add_body(ball(0.0, 0.0, 1.0, 0.0)).unwrap();

    scene.update(4.0 * H);

    assert_eq!(scene.steps_run(), 4);
    assert_eq!(position(&scene, handle), Vec2::new(4.0 * H, 0.0));
}

#[test]
fn accumulator_carries_remainder() {
    let mut scene = dyadic_scene();
    scene.add_body(ball(0.0, 0.0, 1.0, 0.0)).unwrap();

    scene.update(1.5 * H);
    assert_eq!(scene.steps_run(), 1);
    assert_eq!(scene.accumulator(), 0.5 * H);

    scene.update(0.25 * H);
    assert_eq!(scene.steps_run(), 1);

    scene.update(0.25 * H);
    assert_eq!(scene.steps_run(), 2);
    assert_eq!(scene.accumulator(), 0.0);
}

#[test]
fn invalid_frame_delta_is_ignored() {
    let mut scene = dyadic_scene();
    scene.update(f32::NAN);
    scene.update(-1.0);
    assert_eq!(scene.steps_run(), 0);
    assert_eq!(scene.accumulator(), 0.0);
}

#[test]
fn huge_frame_delta_is_capped() {
    let mut scene = SceneCore::new();
    scene.add_body(ball(0.0, 0.0, 1.0, 0.0)).unwrap();

    // 300000 - 0.01 rounds back to 300000 in f32
    scene.update(300_000.0);

    assert_eq!(scene.steps_run(), u64::from(super::step::MAX_STEPS_PER_UPDATE));
    assert!(scene.accumulator() < scene.fixed_timestep());

    scene.update(0.01);
    assert!(scene.steps_run() <= u64::from(super::step::MAX_STEPS_PER_UPDATE) + 2);
}

#[test]
fn identical_runs_are_identical() {
    fn build() -> SceneCore {
        let mut scene = dyadic_scene();
        scene.set_gravity(Vec2::new(0.0, -9.8));
        scene.add_body(floor()).unwrap();
        scene.add_body(ball(0.0, 3.0, 0.5, 0.0)).unwrap();
        scene.add_body(ball(1.5, 5.0, -0.5, 0.0)).unwrap();
        scene
            .add_body(Obb::new(RigidBody::new(Vec2::new(-2.0, 4.0), 2.0).with_angle(0.4), 2.0, 1.0))
            .unwrap();
        scene
    }

    let mut first = build();
    let mut second = build();
    for frame in 0..240 {
        let dt = if frame % 3 == 0 { 2.0 * H } else { H };
        first.update(dt);
        second.update(dt);
    }

    let a: Vec<_> = first.bodies().map(|(_, object)| object.clone()).collect();
    let b: Vec<_> = second.bodies().map(|(_, object)| object.clone()).collect();
    assert_eq!(a, b);
    assert_eq!(first.steps_run(), second.steps_run());
}

#[test]
fn sphere_bounces_on_floor_without_sinking() {
    let mut scene = SceneCore::new();
    scene.set_gravity(Vec2::new(0.0, -10.0));
    scene.add_body(floor()).unwrap();
    let handle = scene.add_body(ball(0.0, 3.0, 0.0, 0.0)).unwrap();

    let mut lowest = f32::MAX;
    for _ in 0..300 {
        scene.update(0.01);
        lowest = lowest.min(position(&scene, handle).y);
    }

    assert!(lowest > 0.5, "sank to {lowest}");
    assert!(lowest <= 1.0);
}

#[test]
fn kinematic_body_keeps_its_course() {
    let mut scene = dyadic_scene();
    let wall = RigidBody::new(Vec2::new(2.0, 0.0), 1.0)
        .with_velocity(Vec2::new(-1.0, 0.0))
        .with_kinematic(true);
    let wall = scene.add_body(Sphere::new(wall, 1.0)).unwrap();
    let mover = scene.add_body(ball(0.0, 0.0, 1.0, 0.0)).unwrap();

    scene.update(8.0 * H);

    let wall_body = scene.body(wall).and_then(PhysicsObject::rigid_body).unwrap();
    assert_eq!(wall_body.velocity, Vec2::new(-1.0, 0.0));
    assert_eq!(wall_body.pos, Vec2::new(2.0 - 8.0 * H, 0.0));
    let mover_body = scene.body(mover).and_then(PhysicsObject::rigid_body).unwrap();
    assert!(mover_body.velocity.x < 0.0);
}

#[test]
fn picking_returns_first_inserted_match() {
    let mut scene = SceneCore::new();
    scene.add_body(floor()).unwrap();
    let first = scene.add_body(ball(0.0, 2.0, 0.0, 0.0)).unwrap();
    let second = scene.add_body(ball(0.5, 2.0, 0.0, 0.0)).unwrap();

    assert_eq!(scene.query_point_owner(Vec2::new(0.25, 2.0)), Some(first));
    assert_eq!(scene.query_point_owner(Vec2::new(1.25, 2.0)), Some(second));
    // Behind the plane, but planes are not pickable
    assert_eq!(scene.query_point_owner(Vec2::new(10.0, -5.0)), None);

    scene.remove_body(first);
    assert_eq!(scene.query_point_owner(Vec2::new(0.25, 2.0)), Some(second));
}

#[test]
fn removal_is_immediate_and_handles_go_stale() {
    let mut scene = SceneCore::new();
    let a = scene.add_body(ball(0.0, 0.0, 0.0, 0.0)).unwrap();
    let b = scene.add_body(ball(5.0, 0.0, 0.0, 0.0)).unwrap();

    assert!(scene.remove_body(a).is_some());
    assert!(scene.remove_body(a).is_none());
    assert_eq!(scene.body_count(), 1);
    assert_eq!(scene.order, vec![b]);

    let c = scene.add_body(ball(1.0, 0.0, 0.0, 0.0)).unwrap();
    assert_ne!(a, c);
    assert!(scene.body(a).is_none());
}

#[test]
fn removing_an_endpoint_deactivates_its_springs() {
    let mut scene = dyadic_scene();
    let a = scene.add_body(ball(0.0, 0.0, 0.0, 0.0)).unwrap();
    let b = scene.add_body(ball(3.0, 0.0, 0.0, 0.0)).unwrap();
    let spring = scene.add_body(Spring::new(a, Some(b), 10.0)).unwrap();

    scene.remove_body(b);

    let state = scene.body(spring).and_then(PhysicsObject::as_spring).unwrap();
    assert!(!state.active);

    scene.update(4.0 * H);
    assert_eq!(position(&scene, a), Vec2::zero());
}

#[test]
fn springs_need_existing_rigid_endpoints() {
    let mut scene = SceneCore::new();
    let a = scene.add_body(ball(0.0, 0.0, 0.0, 0.0)).unwrap();
    let plane = scene.add_body(floor()).unwrap();
    let gone = scene.add_body(ball(1.0, 0.0, 0.0, 0.0)).unwrap();
    scene.remove_body(gone);

    assert_eq!(
        scene.add_body(Spring::new(a, Some(gone), 1.0)),
        Err(PhysicsError::UnknownBody(gone))
    );
    assert_eq!(
        scene.add_body(Spring::new(a, Some(plane), 1.0)),
        Err(PhysicsError::NotARigidBody(plane))
    );
    assert_eq!(scene.body_count(), 2);
}

#[test]
fn invalid_bodies_are_rejected() {
    let mut scene = SceneCore::new();
    let bad_radius = Sphere::new(RigidBody::new(Vec2::zero(), 1.0), 0.0);
    let bad_mass = ball(0.0, 0.0, 0.0, 0.0);
    let mut bad_mass = bad_mass;
    bad_mass.body.mass = -1.0;

    assert!(matches!(scene.add_body(bad_radius), Err(PhysicsError::InvalidDimension { .. })));
    assert_eq!(scene.add_body(bad_mass), Err(PhysicsError::InvalidMass(-1.0)));
    assert_eq!(scene.set_fixed_timestep(0.0), Err(PhysicsError::InvalidTimestep(0.0)));
    assert_eq!(scene.body_count(), 0);
}

#[test]
fn springs_pull_bodies_during_update() {
    let mut scene = dyadic_scene();
    let a = scene.add_body(ball(0.0, 0.0, 0.0, 0.0)).unwrap();
    let b = scene.add_body(ball(6.0, 0.0, 0.0, 0.0)).unwrap();
    scene.add_body(Spring::new(a, Some(b), 20.0).with_rest_length(2.0)).unwrap();

    scene.update(8.0 * H);

    assert!(position(&scene, a).x > 0.0);
    assert!(position(&scene, b).x < 6.0);
    assert_eq!(scene.spring_count(), 1);
}

#[test]
fn pointer_spring_drags_body() {
    let mut scene = dyadic_scene();
    let target = scene.add_body(ball(0.0, 0.0, 0.0, 0.0)).unwrap();

    assert_eq!(scene.attach_pointer_spring(Vec2::new(9.0, 9.0), 50.0, 1.0), Ok(None));

    let spring = scene
        .attach_pointer_spring(Vec2::new(0.5, 0.0), 50.0, 1.0)
        .unwrap()
        .unwrap();
    let state = scene.body(spring).and_then(PhysicsObject::as_spring).unwrap();
    assert_eq!(state.body_a, target);
    assert_eq!(state.contact_a, Vec2::new(0.5, 0.0));

    scene.move_pointer_spring(spring, Vec2::new(5.0, 0.0)).unwrap();
    scene.update(16.0 * H);
    assert!(position(&scene, target).x > 0.0);

    assert_eq!(
        scene.move_pointer_spring(target, Vec2::zero()),
        Err(PhysicsError::NotAPointerSpring(target))
    );

    scene.remove_body(spring);
    assert_eq!(scene.spring_count(), 0);
}

#[test]
fn contacts_are_recorded_and_drawn_on_request() {
    let mut scene = dyadic_scene();
    scene.add_body(floor()).unwrap();
    scene.add_body(ball(0.0, 1.0, 0.0, -2.0)).unwrap();

    scene.update(H);
    assert_eq!(scene.last_contacts().len(), 1);
    // Floor went in first, so the contact is seen from the floor
    assert_eq!(scene.last_contacts()[0].normal, Vec2::new(0.0, 1.0));

    let mut plain = RenderBatch::new();
    scene.render(&mut plain);

    scene.set_debug_contacts(true);
    let mut debug = RenderBatch::new();
    scene.render(&mut debug);

    assert_eq!(debug.len(), plain.len() + 2);
    assert!(scene.render_json().starts_with('['));
}

#[test]
fn perf_stats_count_steps_and_pairs() {
    let mut scene = dyadic_scene();
    scene.enable_perf_metrics(true);
    let a = scene.add_body(ball(0.0, 0.0, 0.0, 0.0)).unwrap();
    scene.add_body(ball(5.0, 0.0, 0.0, 0.0)).unwrap();
    scene.add_body(floor()).unwrap();
    scene.add_body(Spring::new(a, None, 1.0)).unwrap();

    scene.update(5.0 * H);

    let stats = scene.perf_stats();
    assert_eq!(stats.steps(), 5);
    // Three colliding objects give three pairs per step; the spring is skipped
    assert_eq!(stats.pair_tests(), 15);
    assert_eq!(stats.body_count(), 4);
    assert_eq!(stats.spring_count(), 1);
    assert!(stats.update_ms() >= 0.0);

    scene.enable_perf_metrics(false);
    assert_eq!(scene.perf_stats(), PerfStats::default());
}

#[test]
fn settings_json_fills_defaults_and_validates() {
    let settings = SceneSettings::from_json(r#"{"gravity":{"x":0,"y":-9.8},"fixedTimestep":0.02}"#).unwrap();
    assert_eq!(settings.gravity, Vec2::new(0.0, -9.8));
    assert_eq!(settings.fixed_timestep, 0.02);
    assert_eq!(settings.energy_tolerance, SceneSettings::default().energy_tolerance);
    assert!(!settings.debug_contacts);

    assert_eq!(
        SceneSettings::from_json(r#"{"fixedTimestep":0}"#),
        Err(PhysicsError::InvalidTimestep(0.0))
    );
    assert!(matches!(
        SceneSettings::from_json(r#"{"energyTolerance":-1}"#),
        Err(PhysicsError::InvalidSettings(_))
    ));
    assert!(matches!(SceneSettings::from_json("not json"), Err(PhysicsError::InvalidSettings(_))));

    let scene = SceneCore::from_settings_json(r#"{"debugContacts":true}"#).unwrap();
    assert!(scene.settings().debug_contacts);
    assert_eq!(SceneSettings::from_json(&scene.settings().to_json()), Ok(scene.settings()));
}
