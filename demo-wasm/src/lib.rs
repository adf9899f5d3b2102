use tatter::{Cloth, GridConfig, Interaction, SolverConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Reference cloth placed for a canvas `width` pixels wide.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64) -> Result<ClothDemo, JsError> {
        let cloth = Cloth::new(GridConfig::for_viewport(width), SolverConfig::default())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo { cloth })
    }

    /// Advance one frame. `drag` and `cut` are the left/right mouse buttons.
    pub fn tick(&mut self, x: f64, y: f64, drag: bool, cut: bool) {
        let input = Interaction {
            cursor: Vec2::new(x, y),
            drag,
            cut,
            quit_requested: false,
        };
        self.cloth.tick(input);
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.cloth.particle_count() * 2);
        for p in self.cloth.particles() {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    /// Returns flat [a0, b0, a1, b1, ...] particle indices of active constraints
    pub fn segments(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.cloth.active_constraint_count() * 2);
        for c in self.cloth.constraints().iter().filter(|c| c.active) {
            out.push(c.a as u32);
            out.push(c.b as u32);
        }
        out
    }

    pub fn active_segments(&self) -> usize {
        self.cloth.active_constraint_count()
    }

    pub fn cols(&self) -> usize {
        self.cloth.cols()
    }
    pub fn rows(&self) -> usize {
        self.cloth.rows()
    }
}
