use crate::charge::ChargeStore;
use crate::config;
use crate::field::{self, GridSpec, Sample};
use crate::vec2::Vec2;

/// All mutable visualizer state, owned by the main loop. Input handlers
/// mutate it; `samples` hands the renderer a cached resample of the grid,
/// recomputed only when the dirty flag says something changed.
pub struct FieldApp {
    charges: ChargeStore,
    strength: i32,
    dirty: bool,
    samples: Vec<Sample>,
    last_grid: Option<GridSpec>,
}

impl Default for FieldApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldApp {
    pub fn new() -> Self {
        Self {
            charges: ChargeStore::new(),
            strength: 1,
            dirty: false,
            samples: Vec::new(),
            last_grid: None,
        }
    }

    /// ArrowUp. Strength only matters at placement time, so no redraw.
    pub fn raise_strength(&mut self) {
        self.strength += config::STRENGTH_STEP;
    }

    /// ArrowDown. No floor; zero and negative are allowed, and zero
    /// suppresses placement.
    pub fn lower_strength(&mut self) {
        self.strength -= config::STRENGTH_STEP;
    }

    /// The `c` key: drop every charge.
    pub fn clear(&mut self) {
        self.charges.clear();
        self.dirty = true;
    }

    /// Primary button: place a charge at the cursor, capturing the current
    /// strength by value. At strength zero nothing is placed, deliberately.
    /// Either way the press dirties the frame.
    pub fn primary_press(&mut self, pos: Vec2) {
        if self.strength != 0 {
            self.charges
                .add(pos, f64::from(self.strength) * config::CHARGE_SCALE);
        }
        self.dirty = true;
    }

    /// Secondary button: remove the nearest charge if it is within the pick
    /// radius. A miss still dirties the frame; the recompute is cheap and
    /// the original behaved this way.
    pub fn secondary_press(&mut self, pos: Vec2) {
        if !self.charges.is_empty() {
            self.charges.remove_nearest(pos, config::PICK_RADIUS);
        }
        self.dirty = true;
    }

    /// Segments for the current frame. Resamples the grid when dirty or when
    /// the canvas size changed; otherwise returns the cached pass untouched.
    pub fn samples(&mut self, grid: GridSpec) -> &[Sample] {
        if self.last_grid != Some(grid) {
            self.last_grid = Some(grid);
            self.dirty = true;
        }
        if self.dirty {
            self.samples =
                field::sample_grid(self.charges.charges(), grid, config::VECTOR_SCALE).collect();
            self.dirty = false;
        }
        &self.samples
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn charges(&self) -> &ChargeStore {
        &self.charges
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }
}
