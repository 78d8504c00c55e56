//! Startup constants for the visualizer. Colors live with the renderer in
//! `main.rs`; everything here is renderer-agnostic.

/// Coulomb's constant, N·m²/C².
pub const COULOMB_K: f64 = 8.988e9;

/// Pixels between sampled grid points, horizontally.
pub const STRIDE_X: u32 = 10;
/// Pixels between sampled grid points, vertically.
pub const STRIDE_Y: u32 = 10;

/// Per-axis cap on a drawn vector, in pixels. Keeps segments near a charge
/// from covering the whole canvas.
pub const VECTOR_SCALE: f64 = 15.0;

/// Coulombs per unit of global strength when a charge is placed.
pub const CHARGE_SCALE: f64 = 5e-6;

/// How close (pixels) a secondary click must land to a charge to remove it.
pub const PICK_RADIUS: f64 = 20.0;

/// How much ArrowUp/ArrowDown change the global strength by.
pub const STRENGTH_STEP: i32 = 1;

/// Frame-rate cap for the canvas tick.
pub const FRAME_RATE: u32 = 60;
