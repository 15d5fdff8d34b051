use crate::collision::{self, dispatch_index, CollisionContext};

use super::SceneCore;

/// What one sweep did
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SweepStats {
    pub(crate) pair_tests: u32,
    pub(crate) context: CollisionContext,
}

/// Test every unordered pair once, `i < j` in insertion order.
///
/// Resolution is sequential: later pairs see the velocities earlier pairs left.
pub(super) fn collide_all(scene: &mut SceneCore) -> SweepStats {
    let mut stats = SweepStats {
        pair_tests: 0,
        context: CollisionContext::new(scene.energy_tolerance),
    };
    scene.contacts.clear();

    let count = scene.order.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (first, second) = (scene.order[i], scene.order[j]);
            let Some([a, b]) = scene.bodies.get_disjoint_mut([first, second]) else {
                continue;
            };
            // Joints never reach the table
            if dispatch_index(a.shape_type(), b.shape_type()).is_none() {
                continue;
            }

            stats.pair_tests += 1;
            if let Some(contact) = collision::detect(a, b, &mut stats.context) {
                log::trace!(
                    "contact {first:?}/{second:?} at ({:.3}, {:.3}) depth {:.4}",
                    contact.point.x,
                    contact.point.y,
                    contact.penetration
                );
                scene.contacts.push(contact);
            }
        }
    }

    stats
}
