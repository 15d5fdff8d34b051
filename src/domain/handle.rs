use slotmap::{new_key_type, KeyData, SlotMap};

use crate::systems::shapes::PhysicsObject;

new_key_type! {
    /// Generational handle to a body owned by a scene.
    ///
    /// Stale handles (body removed) never alias a newer body.
    pub struct BodyHandle;
}

/// Storage for every object a scene owns
pub type BodyMap = SlotMap<BodyHandle, PhysicsObject>;

impl BodyHandle {
    /// Stable integer form for crossing the JS boundary
    pub fn to_bits(self) -> u64 {
        self.0.as_ffi()
    }

    pub fn from_bits(bits: u64) -> Self {
        KeyData::from_ffi(bits).into()
    }
}
