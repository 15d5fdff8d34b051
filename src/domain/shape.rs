use serde::Serialize;

/// Number of shape kinds that take part in collision detection
pub const SHAPE_COUNT: usize = 4;

/// Shape taxonomy.
///
/// The colliding kinds are numbered densely from zero and double as the
/// row/column index of the collision dispatch table. `Joint` is negative so it
/// can never produce a table index.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Joint = -1,
    Plane = 0,
    Sphere = 1,
    Aabb = 2,
    Obb = 3,
}

impl ShapeType {
    /// Every colliding kind, in id order
    pub const COLLIDING: [ShapeType; SHAPE_COUNT] =
        [ShapeType::Plane, ShapeType::Sphere, ShapeType::Aabb, ShapeType::Obb];

    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Row/column in the dispatch table, `None` for joints
    #[inline]
    pub fn collision_index(self) -> Option<usize> {
        usize::try_from(self.id()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colliding_ids_are_dense_from_zero() {
        for (expected, shape) in ShapeType::COLLIDING.iter().enumerate() {
            assert_eq!(shape.collision_index(), Some(expected));
        }
        assert_eq!(ShapeType::Joint.id(), -1);
        assert_eq!(ShapeType::Joint.collision_index(), None);
    }
}
