//! Color assignment: explicit palettes, fallback color sources, axis colors.
//!
//! When a dataset carries no `colors`, one color per slot is drawn from a [`ColorSource`].
//! Callers must not assume the fallback colors are stable across renders unless they
//! choose a deterministic source ([`PaletteCycle`] or a seeded [`SampledPalette`]).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ChartDataset;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
pub const OFFICE10: [&str; 10] = [
    "#4472C4", // blue
    "#ED7D31", // orange
    "#A5A5A5", // gray
    "#FFC000", // gold
    "#5B9BD5", // light blue
    "#70AD47", // green
    "#264478", // dark blue
    "#9E480E", // dark orange
    "#636363", // dark gray
    "#997300", // brownish
];

/// Secondary-axis color when the palette has no entry for it.
pub const SECONDARY_AXIS_FALLBACK: &str = "#FF4560";

pub fn office_palette() -> Vec<String> {
    OFFICE10.iter().map(|c| c.to_string()).collect()
}

/// Supplies fallback colors, one per call.
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

/// Next palette entry, wrapping around.
#[derive(Debug, Clone)]
pub struct PaletteCycle {
    palette: Vec<String>,
    next: usize,
}

impl PaletteCycle {
    pub fn new(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            office_palette()
        } else {
            palette
        };
        Self { palette, next: 0 }
    }
}

impl Default for PaletteCycle {
    fn default() -> Self {
        Self::new(office_palette())
    }
}

impl ColorSource for PaletteCycle {
    fn next_color(&mut self) -> String {
        let c = self.palette[self.next % self.palette.len()].clone();
        self.next += 1;
        c
    }
}

/// Uniform sampling with replacement from a palette.
#[derive(Debug, Clone)]
pub struct SampledPalette {
    palette: Vec<String>,
    rng: StdRng,
}

impl SampledPalette {
    /// Reproducible sampling.
    pub fn seeded(palette: Vec<String>, seed: u64) -> Self {
        Self::with_rng(palette, StdRng::seed_from_u64(seed))
    }

    /// Fresh entropy on every construction; colors differ between renders.
    pub fn from_entropy(palette: Vec<String>) -> Self {
        Self::with_rng(palette, StdRng::from_entropy())
    }

    fn with_rng(palette: Vec<String>, rng: StdRng) -> Self {
        let palette = if palette.is_empty() {
            office_palette()
        } else {
            palette
        };
        Self { palette, rng }
    }
}

impl ColorSource for SampledPalette {
    fn next_color(&mut self) -> String {
        let i = self.rng.gen_range(0..self.palette.len());
        self.palette[i].clone()
    }
}

/// Colors for `slots` series or categories: the dataset palette verbatim if present,
/// otherwise one draw from `source` per slot.
pub fn colors_for(dataset: &ChartDataset, slots: usize, source: &mut dyn ColorSource) -> Vec<String> {
    match &dataset.colors {
        Some(colors) => colors.clone(),
        None => (0..slots).map(|_| source.next_color()).collect(),
    }
}

/// Color for axis `index`: `colors[index]` when present, else `fallback`.
pub fn axis_color(colors: Option<&[String]>, index: usize, fallback: &str) -> String {
    colors
        .and_then(|c| c.get(index))
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}
