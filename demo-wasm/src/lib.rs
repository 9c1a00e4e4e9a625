use tearcloth::{
    ClothConfig, NoOpStepObserver, SimConfig, Simulation, TearCounter, TickInput, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Tearable Cloth Demo ----

/// Browser-facing wrapper: the page feeds pointer state in and draws the
/// flat buffers this hands back once per animation frame.
#[wasm_bindgen]
pub struct ClothDemo {
    sim: Simulation<f32>,
    input: TickInput<f32>,
    removals: TearCounter,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        cols: usize,
        rows: usize,
        spacing: f32,
    ) -> Result<ClothDemo, JsError> {
        let cloth = ClothConfig::new(cols, rows, spacing, Vec2::new(8.0, 8.0));
        let config = SimConfig::new().with_viewport(width, height);
        let sim = Simulation::from_config(&cloth, config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo {
            sim,
            input: TickInput::idle(),
            removals: TearCounter::default(),
        })
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.input.cursor = Vec2::new(x, y);
    }

    pub fn set_cutting(&mut self, cutting: bool) {
        self.input.cut = cutting;
    }

    /// One fixed tick; call once per rendered frame.
    pub fn update(&mut self) {
        self.sim.step(&self.input, &mut self.removals);
    }

    /// Cut immediately, outside the tick.
    pub fn cut(&mut self, x: f32, y: f32) -> bool {
        self.sim.cut_at(Vec2::new(x, y), &mut NoOpStepObserver).is_some()
    }

    /// Returns flat [x0, y0, x1, y1, ...] in column-major order
    pub fn positions(&self) -> Vec<f32> {
        let points = self.sim.cloth().points();
        let mut out = Vec::with_capacity(points.len() * 2);
        for p in points {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    /// One byte per point mass, 1 if pinned.
    pub fn pinned(&self) -> Vec<u8> {
        self.sim.cloth().points().iter().map(|p| u8::from(p.pinned)).collect()
    }

    /// Returns flat [sx, sy, ex, ey, ...] per active link
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.cloth().link_count() * 4);
        for (start, end) in self.sim.cloth().segments() {
            out.extend_from_slice(&[start.x, start.y, end.x, end.y]);
        }
        out
    }

    pub fn point_count(&self) -> usize {
        self.sim.cloth().point_count()
    }

    pub fn link_count(&self) -> usize {
        self.sim.cloth().link_count()
    }

    pub fn torn(&self) -> usize {
        self.removals.torn
    }

    pub fn cut_count(&self) -> usize {
        self.removals.cut
    }
}
