use wasm_bindgen::prelude::*;

/// Counters for the most recent `update` call
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) update_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) steps: u32,
    pub(super) pair_tests: u32,
    pub(super) contacts: u32,
    pub(super) resolutions: u32,
    pub(super) energy_anomalies: u32,
    pub(super) body_count: u32,
    pub(super) spring_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 { self.pair_tests }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn resolutions(&self) -> u32 { self.resolutions }
    #[wasm_bindgen(getter)]
    pub fn energy_anomalies(&self) -> u32 { self.energy_anomalies }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn spring_count(&self) -> u32 { self.spring_count }
}
