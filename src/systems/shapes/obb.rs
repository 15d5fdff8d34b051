use crate::core::error::{positive_dimension, PhysicsResult};
use crate::domain::{Colour, RenderBatch};
use crate::rigid_body::{RigidBody, Vec2};

use super::{ContainsPoint, Integrate, Render};

/// Oriented (rotatable) box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obb {
    pub body: RigidBody,
    /// Half width / half height along the local axes
    pub extents: Vec2,
    pub colour: Colour,
}

/// Running result of corner-containment probes, shared by both perspectives
/// of a box-box test.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerProbe {
    /// Sum of per-perspective average contact points (world space)
    pub contact_sum: Vec2,
    /// Perspectives that contributed to `contact_sum`
    pub contributors: u32,
    /// Smallest face penetration found so far, 0 if none
    pub penetration: f32,
    /// Face normal belonging to `penetration`, in the probing box's frame
    pub normal: Vec2,
}

impl Obb {
    /// Moment of inertia is `m * (w^2 + h^2) / 12`
    pub fn new(mut body: RigidBody, width: f32, height: f32) -> Self {
        body.moment_of_inertia = body.mass * (width * width + height * height) / 12.0;
        Self {
            body,
            extents: Vec2::new(width * 0.5, height * 0.5),
            colour: Colour::WHITE,
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn width(&self) -> f32 {
        self.extents.x * 2.0
    }

    pub fn height(&self) -> f32 {
        self.extents.y * 2.0
    }

    /// World corners in the order (-x,-y), (+x,-y), (-x,+y), (+x,+y) of the local frame
    pub fn corners(&self) -> [Vec2; 4] {
        let p = self.body.pos;
        let x = self.body.local_x() * self.extents.x;
        let y = self.body.local_y() * self.extents.y;
        [p - x - y, p + x - y, p - x + y, p + x + y]
    }

    #[inline]
    fn within_extents(&self, local: Vec2) -> bool {
        local.x >= -self.extents.x
            && local.x <= self.extents.x
            && local.y >= -self.extents.y
            && local.y <= self.extents.y
    }

    /// Probe `other`'s corners against this box.
    ///
    /// Returns `false` straight away if `other` lies wholly outside this box on
    /// one of its local axes, or if none of its corners are inside. Otherwise
    /// the average contained corner is added to `probe`, and the shallowest of
    /// this box's four faces replaces `probe.penetration`/`probe.normal` when it
    /// beats the value already there; the return value says whether it did.
    pub fn probe_corners(&self, other: &Obb, probe: &mut CornerProbe) -> bool {
        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        let mut local_sum = Vec2::zero();
        let mut inside = 0u32;

        for corner in other.corners() {
            let local = self.body.to_local(corner);
            min.x = min.x.min(local.x);
            max.x = max.x.max(local.x);
            min.y = min.y.min(local.y);
            max.y = max.y.max(local.y);

            if self.within_extents(local) {
                inside += 1;
                local_sum += local;
            }
        }

        let e = self.extents;
        if min.x >= e.x || max.x <= -e.x || min.y >= e.y || max.y <= -e.y {
            return false;
        }
        if inside == 0 {
            return false;
        }

        let local_contact = local_sum / inside as f32;
        probe.contact_sum += self.body.to_world(local_contact);
        probe.contributors += 1;

        let faces = [
            (e.x - min.x, self.body.local_x()),
            (max.x + e.x, -self.body.local_x()),
            (e.y - min.y, self.body.local_y()),
            (max.y + e.y, -self.body.local_y()),
        ];

        let mut improved = false;
        for (depth, normal) in faces {
            if depth > 0.0 && (probe.penetration == 0.0 || depth < probe.penetration) {
                probe.penetration = depth;
                probe.normal = normal;
                improved = true;
            }
        }
        improved
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        positive_dimension("width", self.extents.x)?;
        positive_dimension("height", self.extents.y)?;
        self.body.validate()
    }
}

impl Integrate for Obb {
    fn integrate(&mut self, gravity: Vec2, dt: f32) {
        self.body.integrate(gravity, dt);
    }
}

impl ContainsPoint for Obb {
    fn contains_point(&self, point: Vec2) -> bool {
        self.within_extents(self.body.to_local(point))
    }
}

impl Render for Obb {
    fn render(&self, batch: &mut RenderBatch) {
        let [c0, c1, c2, c3] = self.corners();
        batch.polygon(vec![c0, c1, c3, c2], self.colour);
    }
}
