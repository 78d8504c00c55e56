use itertools::iproduct;
use thiserror::Error;

use crate::charge::Charge;
use crate::config;
use crate::vec2::Vec2;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// The sample point sits exactly on a charge, so the inverse-square
    /// magnitude is undefined there.
    #[error("sample point coincides with charge at ({x}, {y})")]
    DegenerateSample { x: f64, y: f64 },
}

/// The sampling lattice: screen size plus the pixel strides between samples.
/// Derived from the live canvas each frame, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    pub stride_x: u32,
    pub stride_y: u32,
}

impl GridSpec {
    pub fn new(width: u32, height: u32, stride_x: u32, stride_y: u32) -> Self {
        Self {
            width,
            height,
            stride_x,
            stride_y,
        }
    }

    pub fn for_size(width: u32, height: u32) -> Self {
        Self::new(width, height, config::STRIDE_X, config::STRIDE_Y)
    }

    /// Grid points in x-major order (all y for the first column, then the
    /// next column, ...), matching the draw order of the segments.
    pub fn points(self) -> impl Iterator<Item = Vec2> {
        iproduct!(
            (0..self.width).step_by(self.stride_x as usize),
            (0..self.height).step_by(self.stride_y as usize)
        )
        .map(|(x, y)| Vec2::new(f64::from(x), f64::from(y)))
    }
}

/// One sampled grid point: where it sits and the clamped field vector there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub origin: Vec2,
    pub vector: Vec2,
}

/// Field contribution of a single charge at `point`, per Coulomb's law.
/// The angle is taken in raw screen space (y grows downward); flipping it to
/// a mathematical y-up convention would mirror the rendered field.
pub fn field_at(charge: &Charge, point: Vec2) -> Result<Vec2, FieldError> {
    let r = point.distance(charge.pos);
    if r == 0.0 {
        return Err(FieldError::DegenerateSample {
            x: point.x,
            y: point.y,
        });
    }
    let mag = config::COULOMB_K * charge.strength / (r * r);
    let rad = (point.y - charge.pos.y).atan2(point.x - charge.pos.x);
    Ok(Vec2::new(mag * rad.cos(), mag * rad.sin()))
}

/// Superposed field at `point`: the sum of every charge's contribution.
/// A charge sitting exactly on `point` is skipped rather than aborting the
/// sum, so a degenerate sample never kills a frame.
pub fn superpose(charges: &[Charge], point: Vec2) -> Vec2 {
    charges
        .iter()
        .filter_map(|c| field_at(c, point).ok())
        .fold(Vec2::ZERO, |acc, v| acc + v)
}

/// Samples the whole grid against the current charge set, clamping each
/// summed vector per-axis to `clamp_scale`. With no charges the iterator is
/// empty without walking the grid; downstream draws nothing.
pub fn sample_grid(
    charges: &[Charge],
    grid: GridSpec,
    clamp_scale: f64,
) -> impl Iterator<Item = Sample> + '_ {
    let points = (!charges.is_empty()).then(|| grid.points());
    points.into_iter().flatten().map(move |origin| Sample {
        origin,
        vector: superpose(charges, origin).clamp_axes(clamp_scale),
    })
}

#[cfg(test)]
mod tests {
    use super::{field_at, sample_grid, superpose, FieldError, GridSpec};
    use crate::charge::{Charge, ChargeStore};
    use crate::vec2::Vec2;
    use approx::assert_relative_eq;

    fn charge(x: f64, y: f64, strength: f64) -> Charge {
        Charge {
            pos: Vec2::new(x, y),
            strength,
        }
    }

    #[test]
    fn empty_charge_set_yields_empty_sequence() {
        let grid = GridSpec::new(700, 700, 10, 10);
        assert_eq!(sample_grid(&[], grid, 15.0).count(), 0);
    }

    #[test]
    fn grid_covers_every_stride_point_in_x_major_order() {
        let grid = GridSpec::new(30, 20, 10, 10);
        let pts: Vec<Vec2> = grid.points().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Vec2::new(0.0, 0.0));
        assert_eq!(pts[1], Vec2::new(0.0, 10.0));
        assert_eq!(pts[2], Vec2::new(10.0, 0.0));
        assert_eq!(pts[5], Vec2::new(20.0, 10.0));
    }

    #[test]
    fn magnitude_falls_off_with_inverse_square() {
        let c = charge(0.0, 0.0, 1e-6);
        let near = field_at(&c, Vec2::new(10.0, 0.0)).unwrap();
        let mid = field_at(&c, Vec2::new(20.0, 0.0)).unwrap();
        let far = field_at(&c, Vec2::new(40.0, 0.0)).unwrap();
        assert!(near.length() > mid.length());
        assert!(mid.length() > far.length());
        // Doubling the distance quarters the magnitude.
        assert_relative_eq!(near.length() / mid.length(), 4.0, max_relative = 1e-9);
        assert_relative_eq!(mid.length() / far.length(), 4.0, max_relative = 1e-9);
    }

    #[test]
    fn component_signs_follow_strength_and_direction() {
        // Positive charge pushes away from itself; negative pulls toward.
        let pos = charge(0.0, 0.0, 1e-6);
        let v = field_at(&pos, Vec2::new(5.0, 7.0)).unwrap();
        assert!(v.x > 0.0 && v.y > 0.0);

        let neg = charge(0.0, 0.0, -1e-6);
        let v = field_at(&neg, Vec2::new(5.0, 7.0)).unwrap();
        assert!(v.x < 0.0 && v.y < 0.0);

        let v = field_at(&pos, Vec2::new(-5.0, 7.0)).unwrap();
        assert!(v.x < 0.0 && v.y > 0.0);
    }

    #[test]
    fn zero_distance_is_an_explicit_error() {
        let c = charge(30.0, 40.0, 1e-6);
        assert_eq!(
            field_at(&c, Vec2::new(30.0, 40.0)),
            Err(FieldError::DegenerateSample { x: 30.0, y: 40.0 })
        );
    }

    #[test]
    fn superpose_skips_coincident_charges() {
        // One charge sits on the sample point; only the other contributes.
        let on_point = charge(10.0, 10.0, 1e-6);
        let nearby = charge(0.0, 10.0, 1e-6);
        let sum = superpose(&[on_point, nearby], Vec2::new(10.0, 10.0));
        let expected = field_at(&nearby, Vec2::new(10.0, 10.0)).unwrap();
        assert_relative_eq!(sum.x, expected.x);
        assert_relative_eq!(sum.y, expected.y);
    }

    #[test]
    fn symmetric_pair_cancels_at_the_midpoint_per_the_formula() {
        // Checked through superposition, not geometric intuition: mirrored
        // charges of equal strength contribute exact opposites at the
        // midpoint, so the sum is (0, 0) before any clamping.
        let a = charge(100.0, 200.0, 2e-6);
        let b = charge(300.0, 200.0, 2e-6);
        let mid = Vec2::new(200.0, 200.0);
        let sum = superpose(&[a, b], mid);
        assert_relative_eq!(sum.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(sum.y, 0.0, epsilon = 1e-12);

        // An opposite-signed pair instead reinforces along the join axis:
        // both contributions point from + toward -, so x doubles.
        let opposite = superpose(&[a, charge(300.0, 200.0, -2e-6)], mid);
        let single = field_at(&a, mid).unwrap();
        assert_relative_eq!(opposite.x, 2.0 * single.x, max_relative = 1e-12);
        assert_relative_eq!(opposite.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sampled_vectors_respect_the_axis_clamp() {
        let charges = [charge(35.0, 35.0, 50.0)];
        let grid = GridSpec::new(70, 70, 10, 10);
        for sample in sample_grid(&charges, grid, 15.0) {
            assert!(sample.vector.x.abs() <= 15.0);
            assert!(sample.vector.y.abs() <= 15.0);
        }
    }

    #[test]
    fn clear_then_sample_yields_nothing() {
        let mut store = ChargeStore::new();
        for i in 0..4 {
            store.add(Vec2::new(100.0 * f64::from(i), 50.0), 1e-6);
        }
        let grid = GridSpec::new(700, 700, 10, 10);
        assert!(sample_grid(store.charges(), grid, 15.0).count() > 0);
        store.clear();
        assert_eq!(sample_grid(store.charges(), grid, 15.0).count(), 0);
    }
}
