//! Schnittpunkt der Mittelpunkt→Tail-Linie mit dem Rechteck-Körper.
//!
//! Läuft bei jedem Update *vor* dem Clamping, damit der Tail-Solver auch
//! während eines freien Drags einen aktuellen Referenzpunkt hat.

use glam::Vec2;

use super::TableShape;

/// Fallback-Richtung, wenn der Tail exakt im Mittelpunkt liegt (nach unten).
pub const FALLBACK_DIRECTION: Vec2 = Vec2::Y;

/// Kante des Rechtecks, die der Tail kreuzt (im Uhrzeigersinn ab oben).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Ergebnis der Schnittpunkt-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailIntersection {
    /// Punkt, an dem die Linie Mittelpunkt→Tail den Körper verlässt
    pub crossing: Vec2,
    /// Schnittpunkt mit Abstand zu den Ecken (Basis des Tail-Dreiecks)
    pub adjusted: Vec2,
    /// Gekreuzte Kante
    pub edge: BoxEdge,
    /// Normierte Richtung Mittelpunkt→Tail
    pub direction: Vec2,
    /// Liegt die ungeclampte Tail-Spitze im Körper (Rand zählt dazu)?
    pub inside: bool,
}

/// Halbe Breite der Tail-Basis entlang einer Kante: 1/10 der Kantenlänge.
pub fn tail_base_offset(edge: BoxEdge, size: Vec2) -> f32 {
    match edge {
        BoxEdge::Top | BoxEdge::Bottom => size.x / 10.0,
        BoxEdge::Left | BoxEdge::Right => size.y / 10.0,
    }
}

/// Richtung vom Mittelpunkt zum Tail; Fallback nach unten bei Nulllänge.
pub fn tail_direction(shape: &TableShape) -> Vec2 {
    (shape.tail_in_shape_space() - shape.center())
        .try_normalize()
        .unwrap_or(FALLBACK_DIRECTION)
}

/// Prüft, ob ein Punkt (Shape-Koordinaten) im Rechteck `[0,w] × [0,h]` liegt.
pub fn is_inside_body(point: Vec2, size: Vec2) -> bool {
    point.x >= 0.0 && point.y >= 0.0 && point.x <= size.x && point.y <= size.y
}

/// Berechnet den Schnittpunkt der Linie Mittelpunkt→Tail mit dem Körper-Rand.
///
/// Ein Eck-Treffer wird der oberen/unteren Kante zugeordnet.
pub fn tail_intersection(shape: &TableShape) -> TailIntersection {
    let size = shape.size();
    let center = shape.center();
    let tail = shape.tail_in_shape_space();
    let direction = tail_direction(shape);
    let half = size * 0.5;

    // Strahl-Parameter bis zur vertikalen bzw. horizontalen Kante
    let t_x = if direction.x.abs() > f32::EPSILON {
        half.x / direction.x.abs()
    } else {
        f32::INFINITY
    };
    let t_y = if direction.y.abs() > f32::EPSILON {
        half.y / direction.y.abs()
    } else {
        f32::INFINITY
    };

    let (t, edge) = if t_x < t_y {
        let edge = if direction.x > 0.0 {
            BoxEdge::Right
        } else {
            BoxEdge::Left
        };
        (t_x, edge)
    } else {
        let edge = if direction.y > 0.0 {
            BoxEdge::Bottom
        } else {
            BoxEdge::Top
        };
        (t_y, edge)
    };

    let crossing = (center + direction * t).clamp(Vec2::ZERO, size);
    let adjusted = adjust_away_from_corners(crossing, edge, size);

    TailIntersection {
        crossing,
        adjusted,
        edge,
        direction,
        inside: is_inside_body(tail, size),
    }
}

/// Schiebt den Schnittpunkt entlang der Kante, sodass die Tail-Basis
/// mindestens einen Basis-Offset Abstand zu beiden Ecken hält.
fn adjust_away_from_corners(crossing: Vec2, edge: BoxEdge, size: Vec2) -> Vec2 {
    let margin = 2.0 * tail_base_offset(edge, size);
    match edge {
        BoxEdge::Top | BoxEdge::Bottom => {
            Vec2::new(crossing.x.clamp(margin, size.x - margin), crossing.y)
        }
        BoxEdge::Left | BoxEdge::Right => {
            Vec2::new(crossing.x, crossing.y.clamp(margin, size.y - margin))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeId;
    use crate::shared::TableOptions;
    use approx::assert_relative_eq;

    fn shape_with_tail(w: f32, h: f32, tail: Vec2) -> TableShape {
        TableShape::new(ShapeId::new("shape:b"), &TableOptions::default())
            .with_size(w, h)
            .with_tail(tail)
    }

    #[test]
    fn test_tail_below_hits_bottom_edge() {
        let s = shape_with_tail(200.0, 100.0, Vec2::new(0.5, 2.0));
        let hit = tail_intersection(&s);
        assert_eq!(hit.edge, BoxEdge::Bottom);
        assert!(!hit.inside);
        assert_relative_eq!(hit.crossing.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(hit.crossing.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_tail_right_hits_right_edge() {
        let s = shape_with_tail(200.0, 100.0, Vec2::new(1.5, 0.5));
        let hit = tail_intersection(&s);
        assert_eq!(hit.edge, BoxEdge::Right);
        assert_relative_eq!(hit.crossing.x, 200.0, epsilon = 1e-3);
        assert_relative_eq!(hit.crossing.y, 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_tail_inside_is_classified_inside() {
        let s = shape_with_tail(200.0, 100.0, Vec2::new(0.7, 0.55));
        let hit = tail_intersection(&s);
        assert!(hit.inside);
        // Richtung (40, 5) → rechte Kante
        assert_eq!(hit.edge, BoxEdge::Right);
        assert_relative_eq!(hit.crossing.x, 200.0, epsilon = 1e-3);
        assert_relative_eq!(hit.crossing.y, 62.5, epsilon = 1e-3);
    }

    #[test]
    fn test_corner_tail_resolves_to_top_edge() {
        let s = shape_with_tail(100.0, 100.0, Vec2::ZERO);
        let hit = tail_intersection(&s);
        assert_eq!(hit.edge, BoxEdge::Top);
        assert!(hit.inside, "Ecke zählt als Rand und damit innen");
        assert_relative_eq!(hit.crossing.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(hit.crossing.y, 0.0, epsilon = 1e-3);
        // Basis wird von der Ecke weggeschoben: 2 * w/10
        assert_relative_eq!(hit.adjusted.x, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_tail_at_center_falls_back_downwards() {
        let s = shape_with_tail(100.0, 60.0, Vec2::splat(0.5));
        let hit = tail_intersection(&s);
        assert_eq!(hit.direction, FALLBACK_DIRECTION);
        assert_eq!(hit.edge, BoxEdge::Bottom);
        assert_relative_eq!(hit.crossing.y, 60.0, epsilon = 1e-3);
    }
}
