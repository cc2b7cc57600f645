//! Tail-Constraint-Solver: hält die Tail-Spitze in einem Abstandsband
//! zum Körper-Rand, unabhängig von Resize oder Drag.

use glam::Vec2;

use super::boundary::{tail_intersection, TailIntersection};
use super::TableShape;
use crate::shared::TableOptions;

/// Erlaubter Abstand der Tail-Spitze zum Schnittpunkt mit dem Körper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailBand {
    /// Minimaler Abstand (Diagonale / 5)
    pub min: f32,
    /// Maximaler Abstand (Diagonale / 1.5)
    pub max: f32,
}

impl TailBand {
    /// Leitet das Band aus der Diagonalen des Körpers ab.
    pub fn for_size(size: Vec2, options: &TableOptions) -> Self {
        let diagonal = size.x.hypot(size.y);
        Self {
            min: diagonal / options.tail_min_divisor,
            max: diagonal / options.tail_max_divisor,
        }
    }

    /// Liegt der Abstand (mit Toleranz) im Band?
    pub fn contains(&self, distance: f32, tolerance: f32) -> bool {
        distance >= self.min - tolerance && distance <= self.max + tolerance
    }
}

/// Clampt die Tail-Spitze und gibt die neue normierte Position zurück.
///
/// - Tail im Körper → exakt `min` hinter dem Schnittpunkt
/// - Abstand ≤ `min` → auf `min`, Abstand ≥ `max` → auf `max`
/// - sonst unverändert
pub fn clamp_tail(
    shape: &TableShape,
    intersection: &TailIntersection,
    options: &TableOptions,
) -> Vec2 {
    let size = shape.size();
    let band = TailBand::for_size(size, options);
    let tail = shape.tail_in_shape_space();
    let along = |distance: f32| intersection.crossing + intersection.direction * distance;

    let clamped = if intersection.inside {
        along(band.min)
    } else {
        let distance = tail.distance(intersection.crossing);
        if distance <= band.min {
            along(band.min)
        } else if distance >= band.max {
            along(band.max)
        } else {
            tail
        }
    };

    clamped / size
}

/// Berechnet Schnittpunkt und Clamping in einem Schritt und liefert den neuen Shape.
pub fn constrain_tail(shape: TableShape, options: &TableOptions) -> TableShape {
    let intersection = tail_intersection(&shape);
    let tail = clamp_tail(&shape, &intersection, options);
    if tail != shape.tail {
        log::debug!(
            "Shape {}: Tail geclampt ({:.3}, {:.3}) → ({:.3}, {:.3})",
            shape.id,
            shape.tail.x,
            shape.tail.y,
            tail.x,
            tail.y
        );
    }
    shape.with_tail(tail)
}
