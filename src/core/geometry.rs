//! Umriss-Geometrie: Rechteck-Körper plus herausragendes Tail-Dreieck.
//!
//! Die Vertices dienen sowohl dem Hit-Test als auch dem gerenderten Pfad.

use glam::Vec2;

use super::boundary::{tail_base_offset, tail_intersection, BoxEdge};
use super::TableShape;

/// Feste Anzahl der Umriss-Punkte: 4 Ecken + Tail-Basis (2) + Tail-Spitze.
pub const VERTEX_COUNT: usize = 7;

/// Achsenparalleles Begrenzungsrechteck in Shape-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ShapeBounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Berechnet den geschlossenen Umriss im Uhrzeigersinn ab der linken oberen Ecke.
///
/// Das Tail-Dreieck wird auf der gekreuzten Kante eingefügt. Liegt die
/// ungeclampte Spitze im Körper, fallen Basis und Spitze auf den Schnittpunkt
/// und der Umriss ist das Rechteck (gleiche Punktanzahl).
pub fn table_vertices(shape: &TableShape) -> [Vec2; VERTEX_COUNT] {
    let size = shape.size();
    let tl = Vec2::ZERO;
    let tr = Vec2::new(size.x, 0.0);
    let br = size;
    let bl = Vec2::new(0.0, size.y);

    let hit = tail_intersection(shape);
    if hit.inside {
        let c = hit.crossing;
        return match hit.edge {
            BoxEdge::Top => [tl, c, c, c, tr, br, bl],
            BoxEdge::Right => [tl, tr, c, c, c, br, bl],
            BoxEdge::Bottom => [tl, tr, br, c, c, c, bl],
            BoxEdge::Left => [tl, tr, br, bl, c, c, c],
        };
    }

    let tail = shape.tail_in_shape_space();
    let adj = hit.adjusted;
    let offset = tail_base_offset(hit.edge, size);
    let dx = Vec2::new(offset, 0.0);
    let dy = Vec2::new(0.0, offset);

    match hit.edge {
        BoxEdge::Top => [tl, adj - dx, tail, adj + dx, tr, br, bl],
        BoxEdge::Right => [tl, tr, adj - dy, tail, adj + dy, br, bl],
        BoxEdge::Bottom => [tl, tr, br, adj + dx, tail, adj - dx, bl],
        BoxEdge::Left => [tl, tr, br, bl, adj + dy, tail, adj - dy],
    }
}

/// Baut einen SVG-Pfad `M x,y L x,y … Z` aus den Vertices.
pub fn outline_path(vertices: &[Vec2]) -> String {
    let mut path = String::with_capacity(vertices.len() * 16);
    for (i, v) in vertices.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{cmd}{},{}", fmt_coord(v.x), fmt_coord(v.y)));
    }
    if !vertices.is_empty() {
        path.push_str(" Z");
    }
    path
}

/// Rundet auf zwei Nachkommastellen und entfernt überflüssige Nullen.
fn fmt_coord(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // -0 vermeiden
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Even-Odd-Test: liegt `point` im Polygon?
pub fn polygon_contains(vertices: &[Vec2], point: Vec2) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Begrenzungsrechteck aller Vertices (inklusive Tail).
pub fn shape_bounds(vertices: &[Vec2]) -> ShapeBounds {
    if vertices.is_empty() {
        return ShapeBounds {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
        };
    }
    let (min, max) = vertices.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), v| (min.min(*v), max.max(*v)),
    );
    ShapeBounds { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tail::constrain_tail;
    use crate::core::ShapeId;
    use crate::shared::TableOptions;
    use approx::assert_relative_eq;

    fn shape(w: f32, h: f32, tail: Vec2) -> TableShape {
        TableShape::new(ShapeId::new("shape:geo"), &TableOptions::default())
            .with_size(w, h)
            .with_tail(tail)
    }

    #[test]
    fn test_tail_below_inserts_triangle_on_bottom_edge() {
        let s = shape(200.0, 100.0, Vec2::new(0.5, 1.8));
        let v = table_vertices(&s);
        assert_eq!(v[0], Vec2::ZERO);
        assert_eq!(v[2], Vec2::new(200.0, 100.0));
        // Basis ±w/10 um den Schnittpunkt (100, 100), Spitze dazwischen
        assert_relative_eq!(v[3].x, 120.0, epsilon = 1e-3);
        assert_relative_eq!(v[4].y, 180.0, epsilon = 1e-3);
        assert_relative_eq!(v[5].x, 80.0, epsilon = 1e-3);
        assert_eq!(v[6], Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_corner_tail_degrades_to_rectangle() {
        let s = shape(100.0, 80.0, Vec2::ZERO);
        let v = table_vertices(&s);
        assert_eq!(v.len(), VERTEX_COUNT);
        let b = shape_bounds(&v);
        assert_relative_eq!(b.min.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(b.min.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(b.width(), 100.0, epsilon = 1e-4);
        assert_relative_eq!(b.height(), 80.0, epsilon = 1e-4);
    }

    #[test]
    fn test_polygon_contains_center_for_all_clamped_tails() {
        let opts = TableOptions::default();
        let tails = [
            Vec2::ZERO,
            Vec2::new(0.5, 0.5),
            Vec2::new(1.0, 0.0),
            Vec2::new(3.0, 0.5),
            Vec2::new(-2.0, -2.0),
            Vec2::new(0.2, 4.0),
            Vec2::new(0.5, -0.1),
        ];
        for (w, h) in [(356.0, 254.0), (40.0, 500.0), (900.0, 20.0)] {
            for tail in tails {
                let s = constrain_tail(shape(w, h, tail), &opts);
                let v = table_vertices(&s);
                assert_eq!(v.len(), VERTEX_COUNT);
                assert!(
                    polygon_contains(&v, s.center()),
                    "Zentrum nicht im Umriss bei {w}x{h}, Tail {tail:?}"
                );
            }
        }
    }

    #[test]
    fn test_unclamped_inside_tail_still_contains_center() {
        let s = shape(200.0, 100.0, Vec2::new(0.8, 0.6));
        assert!(polygon_contains(&table_vertices(&s), s.center()));
    }

    #[test]
    fn test_outline_path_format() {
        let path = outline_path(&[Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.5, 5.25)]);
        assert_eq!(path, "M0,0 L10,0 L10.5,5.25 Z");
        assert_eq!(outline_path(&[]), "");
    }

    #[test]
    fn test_polygon_contains_rejects_outside_point() {
        let square = [
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(polygon_contains(&square, Vec2::new(5.0, 5.0)));
        assert!(!polygon_contains(&square, Vec2::new(15.0, 5.0)));
        assert!(!polygon_contains(&square[..2], Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_bounds_include_tail() {
        let s = shape(200.0, 100.0, Vec2::new(0.5, 2.0));
        let b = shape_bounds(&table_vertices(&s));
        assert_relative_eq!(b.max.y, 200.0, epsilon = 1e-3);
    }
}
