use crate::vec2::Vec2;

/// A point charge. `strength` is signed: positive pushes the field outward,
/// negative pulls it inward. The value is fixed at creation; later changes to
/// the global strength never touch existing charges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    pub pos: Vec2,
    pub strength: f64,
}

/// Ordered collection of charges. The store is the only owner; everything
/// else reads through `charges()`.
#[derive(Debug, Default)]
pub struct ChargeStore {
    charges: Vec<Charge>,
}

impl ChargeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pos: Vec2, strength: f64) {
        self.charges.push(Charge { pos, strength });
    }

    /// Removes the charge nearest to `pos`, but only when it lies within
    /// `pick_radius`. Returns whether a removal happened. Ties go to the
    /// earliest-inserted charge.
    pub fn remove_nearest(&mut self, pos: Vec2, pick_radius: f64) -> bool {
        let nearest = self
            .charges
            .iter()
            .enumerate()
            .map(|(i, c)| (i, pos.distance(c.pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match nearest {
            Some((i, dist)) if dist <= pick_radius => {
                self.charges.remove(i);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }
}
