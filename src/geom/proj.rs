use std::cell::Cell;

use geo::{Coord, Rect};
use log::warn;
use serde::Deserialize;

/// Geographic extent (degrees) that is stretched onto the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self { min_lon, max_lon, min_lat, max_lat }
    }

    #[inline] pub fn width(&self) -> f64 { self.max_lon - self.min_lon }

    #[inline] pub fn height(&self) -> f64 { self.max_lat - self.min_lat }

    /// True when every edge is finite and the box has a positive extent on both axes.
    pub fn is_valid(&self) -> bool {
        [self.min_lon, self.max_lon, self.min_lat, self.max_lat].iter().all(|v| v.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }
}

/// Output drawing surface, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Douglas-Peucker tolerance in canvas pixels.
    pub tolerance: f64,
    pub simplify: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 500.0, height: 800.0, padding: 20.0, tolerance: 0.5, simplify: true }
    }
}

impl Canvas {
    /// Center of the drawing surface, used when a shape has no points of its own.
    pub fn center(&self) -> Coord<f64> {
        Coord { x: self.width / 2.0, y: self.height / 2.0 }
    }

    /// Tolerance to simplify with, or None when simplification is disabled.
    pub fn simplify_tolerance(&self) -> Option<f64> {
        self.simplify.then_some(self.tolerance)
    }
}

/// Affine lon/lat -> canvas mapping (north up, Y down). No cartographic correction.
#[derive(Debug)]
pub struct Projector {
    bounds: Bounds,
    canvas: Canvas,
    invalid: Cell<usize>,
}

impl Projector {
    pub fn new(bounds: Bounds, canvas: Canvas) -> Self {
        Self { bounds, canvas, invalid: Cell::new(0) }
    }

    pub fn bounds(&self) -> &Bounds { &self.bounds }

    pub fn canvas(&self) -> &Canvas { &self.canvas }

    /// Project one lon/lat coordinate. Non-finite input maps to the origin and is counted.
    pub fn project(&self, coord: &Coord<f64>) -> Coord<f64> {
        if !coord.x.is_finite() || !coord.y.is_finite() {
            warn!("[proj] non-finite coordinate ({}, {}), using origin", coord.x, coord.y);
            self.invalid.set(self.invalid.get() + 1);
            return Coord { x: 0.0, y: 0.0 };
        }

        let Canvas { width, height, padding, .. } = self.canvas;
        let nx = (coord.x - self.bounds.min_lon) / self.bounds.width();
        let ny = 1.0 - (coord.y - self.bounds.min_lat) / self.bounds.height();

        Coord {
            x: padding + nx * (width - 2.0 * padding),
            y: padding + ny * (height - 2.0 * padding),
        }
    }

    /// Project a whole ring.
    pub fn project_ring(&self, ring: &[Coord<f64>]) -> Vec<Coord<f64>> {
        ring.iter().map(|coord| self.project(coord)).collect()
    }

    /// Number of non-finite coordinates seen so far.
    pub fn invalid_count(&self) -> usize { self.invalid.get() }
}
