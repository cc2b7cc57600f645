use crate::core::{CellPos, ShapeId};
use glam::Vec2;

/// Eingaben aus der Darstellung eines Tabellen-Shapes.
/// Intents enthalten keine Mutationslogik; der Controller übersetzt sie.
#[derive(Debug, Clone, PartialEq)]
pub enum TableIntent {
    /// Zeiger über einer Picker-Zelle (1-basiert)
    PickerHovered { id: ShapeId, pos: CellPos },
    /// Zeiger hat das Picker-Raster verlassen
    PickerLeft { id: ShapeId },
    /// Klick auf eine Picker-Zelle
    PickerClicked { id: ShapeId, pos: CellPos },
    /// Text einer Zelle wurde geändert
    CellEdited {
        id: ShapeId,
        index: usize,
        text: String,
    },
    /// Tail-Handle gezogen (Shape-Koordinaten)
    TailDragged { id: ShapeId, handle: Vec2 },
}

impl TableIntent {
    /// Betroffener Shape.
    pub fn shape_id(&self) -> &ShapeId {
        match self {
            TableIntent::PickerHovered { id, .. }
            | TableIntent::PickerLeft { id }
            | TableIntent::PickerClicked { id, .. }
            | TableIntent::CellEdited { id, .. }
            | TableIntent::TailDragged { id, .. } => id,
        }
    }
}
