use tumble_engine::collision::{
    detect, obb_obb_contact, sphere_plane_contact, CollisionContext,
};
use tumble_engine::{Obb, PhysicsObject, Plane, RigidBody, SceneCore, Sphere, Vec2};

const EPS: f32 = 1e-4;

fn sphere(x: f32, vx: f32, elasticity: f32) -> PhysicsObject {
    let body = RigidBody::new(Vec2::new(x, 0.0), 3.0)
        .with_velocity(Vec2::new(vx, 0.0))
        .with_elasticity(elasticity);
    Sphere::new(body, 1.0).into()
}

fn velocity(object: &PhysicsObject) -> Vec2 {
    object.rigid_body().unwrap().velocity
}

#[test]
fn free_body_advances_by_n_h_v() {
    let mut scene = SceneCore::new();
    scene.set_fixed_timestep(1.0 / 32.0).unwrap();
    let body = RigidBody::new(Vec2::new(-3.0, 1.0), 1.0)
        .with_velocity(Vec2::new(2.0, 0.5))
        .with_angular_velocity(1.5);
    let handle = scene.add_body(Obb::new(body, 1.0, 1.0)).unwrap();

    for _ in 0..64 {
        scene.update(1.0 / 32.0);
    }

    let body = scene.body(handle).and_then(PhysicsObject::rigid_body).unwrap();
    assert!((body.pos.x - 1.0).abs() < EPS);
    assert!((body.pos.y - 2.0).abs() < EPS);
    assert!((body.angle - 3.0).abs() < EPS);
}

#[test]
fn sphere_plane_threshold() {
    let plane = Plane::new(Vec2::new(0.0, 1.0), 0.0).unwrap();
    let approaching = |d: f32| {
        Sphere::new(RigidBody::new(Vec2::new(0.0, d), 1.0).with_velocity(Vec2::new(0.0, -1.0)), 0.5)
    };

    assert!(sphere_plane_contact(&approaching(0.51), &plane).is_none());
    assert!(sphere_plane_contact(&approaching(0.5), &plane).is_some());
    assert!(sphere_plane_contact(&approaching(0.2), &plane).is_some());
}

#[test]
fn head_on_spheres_follow_restitution_law() {
    let mut ctx = CollisionContext::default();

    let mut a = sphere(0.0, 4.0, 1.0);
    let mut b = sphere(1.8, -2.0, 1.0);
    detect(&mut a, &mut b, &mut ctx).unwrap();
    assert!((velocity(&a).x + 2.0).abs() < EPS);
    assert!((velocity(&b).x - 4.0).abs() < EPS);

    let mut a = sphere(0.0, 4.0, 0.0);
    let mut b = sphere(1.8, -2.0, 0.0);
    detect(&mut a, &mut b, &mut ctx).unwrap();
    assert!((velocity(&a).x - 1.0).abs() < EPS);
    assert!((velocity(&b).x - 1.0).abs() < EPS);

    assert_eq!(ctx.anomalies, 0);
}

#[test]
fn kinematic_partner_is_never_moved() {
    let mut ctx = CollisionContext::default();
    let mut a = sphere(0.0, 4.0, 0.5);
    let wall_body = RigidBody::new(Vec2::new(1.4, 0.0), 3.0).with_kinematic(true);
    let mut wall: PhysicsObject = Obb::new(wall_body, 1.0, 4.0).into();

    detect(&mut a, &mut wall, &mut ctx).unwrap();

    let wall_body = wall.rigid_body().unwrap();
    assert_eq!(wall_body.velocity, Vec2::zero());
    assert_eq!(wall_body.angular_vel, 0.0);
    assert_eq!(wall_body.pos, Vec2::new(1.4, 0.0));
    // Full bounce scaled by the averaged restitution of 0.75
    assert!((velocity(&a).x + 3.0).abs() < EPS);
}

#[test]
fn rotated_box_normal_negates_on_swap() {
    let a = Obb::new(RigidBody::new(Vec2::zero(), 1.0), 4.0, 4.0);
    let b = Obb::new(RigidBody::new(Vec2::new(2.4, 0.6), 1.0).with_angle(0.2), 2.0, 1.0);

    let forward = obb_obb_contact(&a, &b).unwrap();
    let backward = obb_obb_contact(&b, &a).unwrap();

    assert!((forward.normal.x + backward.normal.x).abs() < EPS);
    assert!((forward.normal.y + backward.normal.y).abs() < EPS);
    // First towards second
    assert!(forward.normal.dot(b.body.pos - a.body.pos) > 0.0);
}
