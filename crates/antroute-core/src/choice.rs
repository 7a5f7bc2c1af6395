//! Stochastic next-step choice.
//!
//! An ant standing on a node turns the desire of each open trail into a
//! cumulative distribution and picks the first neighbor whose bound exceeds
//! a uniform draw. The draw comes from a [`DrawSource`], so the whole
//! selection is a pure function of the injected values.

use crate::types::NodeId;

/// Upper bound forced onto the last cumulative entry. Larger than any
/// draw in `[0, 1)`, so rounding in the normalization can never leave a
/// non-empty table without a pick.
pub const FINAL_BOUND: f64 = 1.1;

/// Supplier of uniform values in `[0, 1)`.
pub trait DrawSource {
    fn draw(&mut self) -> f64;
}

impl<T: DrawSource + ?Sized> DrawSource for &mut T {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

impl<T: DrawSource + ?Sized> DrawSource for Box<T> {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// Cumulative choice table over candidate neighbors, in candidate order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceTable {
    nodes: Vec<NodeId>,
    bounds: Vec<f64>,
}

impl ChoiceTable {
    /// Build the table from `(neighbor, desire)` pairs.
    ///
    /// Returns `None` when there are no candidates, or when the total
    /// desire is zero or not finite (every trail evaporated to nothing).
    pub fn from_desires<I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = (NodeId, f64)>,
    {
        let (nodes, desires): (Vec<NodeId>, Vec<f64>) = candidates.into_iter().unzip();
        let total: f64 = desires.iter().sum();
        if nodes.is_empty() || !(total > 0.0) || !total.is_finite() {
            return None;
        }

        let scale = 1.0 / total;
        let mut running = 0.0;
        let mut bounds: Vec<f64> = desires
            .iter()
            .map(|d| {
                running += d;
                running * scale
            })
            .collect();
        if let Some(last) = bounds.last_mut() {
            *last = FINAL_BOUND;
        }

        Some(Self { nodes, bounds })
    }

    /// First neighbor whose cumulative bound exceeds `draw`.
    pub fn select(&self, draw: f64) -> Option<NodeId> {
        self.nodes
            .iter()
            .zip(&self.bounds)
            .find(|(_, bound)| draw < **bound)
            .map(|(node, _)| *node)
    }

    /// Draw once from `source` and select.
    pub fn sample<D: DrawSource + ?Sized>(&self, source: &mut D) -> Option<NodeId> {
        self.select(source.draw())
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
