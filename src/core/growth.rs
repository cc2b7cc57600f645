//! Growth-Engine: passt die Tabellenhöhe an den gemessenen Zellinhalt an.
//!
//! Die Mindesthöhe ist ein monotoner Boden: eine Tabelle kann nie unter
//! eine Höhe schrumpfen, auf die sie für vorhandenen Inhalt gewachsen ist.

use super::{GrowthResult, TableShape};
use crate::shared::TableOptions;

/// Berechnet Höhe und Mindesthöhe nach einer Änderung an Grid, Text oder Messhöhe.
///
/// Ohne Grid wird die Höhe auf `undimensioned_height` zurückgesetzt. Ohne
/// bearbeitete Zelle (keine Messung) bleibt die Höhe bis auf den Boden erhalten.
/// Sonst wird die Differenz zwischen Zeilenanteil und Messhöhe plus Padding addiert.
pub fn grow(shape: &TableShape, options: &TableOptions) -> GrowthResult {
    let min_height = shape.min_height();

    let Some(grid) = shape.grid() else {
        let height = options.undimensioned_height.max(min_height);
        return GrowthResult {
            height,
            min_height: height,
        };
    };

    let height = shape.height();
    let height = match shape.active_cell {
        None => height.max(min_height),
        Some(_) => {
            let line_height = height / grid.rows() as f32;
            let active = shape.active_height;
            if line_height < active {
                // Zelle braucht mehr Platz als ihr Zeilenanteil → wachsen
                min_height.max(height + (active - line_height) + options.growth_padding)
            } else {
                // Zeilenanteil zu groß → Richtung Inhalt schrumpfen
                min_height.max(height - (line_height - active) + options.growth_padding)
            }
        }
    };

    GrowthResult {
        height,
        min_height: min_height.max(height),
    }
}

/// Wendet `grow` an und liefert den aktualisierten Shape.
pub fn apply_growth(shape: TableShape, options: &TableOptions) -> TableShape {
    let result = grow(&shape, options);
    if (result.height - shape.height()).abs() > f32::EPSILON {
        log::debug!(
            "Shape {}: Höhe {:.1} → {:.1} (min {:.1})",
            shape.id,
            shape.height(),
            result.height,
            result.min_height
        );
    }
    shape.with_growth(result)
}
