//! Jittered grid placement clipped to a circle.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::random::{shuffle, Derivation};
use crate::scatter::{ensure_positive, CanvasConfig, Emission, Placement, Scatter};

/// Places instances on an `N × N` grid with `N = ceil(sqrt(count))`.
///
/// The grid fills the square of half-size `inner_radius` around the canvas
/// center, with its origin at the square's top-left corner. Every cell gets a
/// jitter of up to `jitter * cell / 2` per axis, cells are shuffled, and cells
/// whose (unjittered) center lies farther than `admit_radius` from the square's
/// center are discarded. Emissions are then paired with the remaining cells in
/// order, so corner cells being cut off can leave instances unplaced. That
/// under-fill is part of the output contract.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct GridScatter {
    pub inner_radius: f64,
    pub admit_radius: f64,
    /// Jitter in `[0, 1]` as a fraction of half a cell.
    pub jitter: f64,
}

impl Default for GridScatter {
    fn default() -> Self {
        Self {
            inner_radius: 720.0,
            admit_radius: 720.0,
            jitter: 0.25,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct GridCell {
    center: DVec2,
    jitter: DVec2,
}

impl GridScatter {
    pub fn new(inner_radius: f64, jitter: f64) -> Self {
        Self {
            inner_radius,
            admit_radius: inner_radius,
            jitter: jitter.clamp(0.0, 1.0),
        }
    }

    pub fn with_admit_radius(mut self, radius: f64) -> Self {
        self.admit_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.inner_radius, "grid.inner_radius")?;
        ensure_positive(self.admit_radius, "grid.admit_radius")?;
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(Error::InvalidConfig("grid.jitter must be in [0, 1]".into()));
        }
        Ok(())
    }

    /// Grid side for `count` instances; `0` for no instances.
    pub fn side_for(count: usize) -> usize {
        (count as f64).sqrt().ceil() as usize
    }

    fn cells(&self, side: usize, derivation: &mut Derivation) -> Vec<GridCell> {
        let cell = self.inner_radius * 2.0 / side as f64;
        let reach = self.jitter * cell * 0.5;
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                let center = DVec2::new((col as f64 + 0.5) * cell, (row as f64 + 0.5) * cell);
                let jitter = DVec2::new(
                    derivation.next_signed("grid-jitter"),
                    derivation.next_signed("grid-jitter"),
                ) * reach;
                cells.push(GridCell { center, jitter });
            }
        }
        cells
    }
}

impl Scatter for GridScatter {
    fn evaluate(
        &self,
        canvas: &CanvasConfig,
        emissions: &[Emission],
        derivation: &mut Derivation,
    ) -> Vec<Placement> {
        let side = Self::side_for(emissions.len());
        if side == 0 {
            return Vec::new();
        }

        let cells = self.cells(side, derivation);
        let cells = shuffle(derivation, cells);
        let square_center = DVec2::splat(self.inner_radius);
        let admitted = cells
            .into_iter()
            .filter(|c| (c.center - square_center).length() <= self.admit_radius);

        let mut out: Vec<Placement> = emissions
            .iter()
            .zip(admitted)
            .map(|(emission, cell)| {
                emission.place(canvas.from_top_left(cell.center + cell.jitter, self.inner_radius))
            })
            .collect();

        if out.len() < emissions.len() {
            debug!(
                "Grid admitted {} of {} instances.",
                out.len(),
                emissions.len()
            );
        }

        canvas.contain_all(&mut out);
        out
    }
}
