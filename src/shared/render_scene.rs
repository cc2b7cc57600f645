//! Render-Modell eines Tabellen-Shapes als Übergabevertrag an den Host.
//!
//! Lebt im shared-Modul, da `app` es baut und der Host es darstellt.

use glam::Vec2;

use crate::core::{CellPos, ShapeColor, ShapeId, ShapeStyle};

/// Eine Zelle des Picker-Rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerCellView {
    pub pos: CellPos,
    /// Liegt in der Vorschau-Region
    pub highlighted: bool,
}

/// Eine Zelle der festgelegten Tabelle.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    /// DOM-/Element-ID (`cell-{index}`)
    pub element_id: String,
    /// Row-major Index in `text`
    pub index: usize,
    /// Linke obere Ecke in Shape-Koordinaten
    pub origin: Vec2,
    pub size: Vec2,
    pub text: String,
    /// Nur im Editier-Modus bearbeitbar
    pub editable: bool,
}

/// Inhalt innerhalb des Umrisses.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// Noch keine Dimensionen: Picker-Raster
    Picker {
        rows: u32,
        cols: u32,
        cells: Vec<PickerCellView>,
    },
    /// Festgelegtes Grid mit Zelltexten
    Grid {
        rows: u32,
        cols: u32,
        cells: Vec<CellView>,
    },
}

/// Read-only Daten für das Rendern eines Shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    pub id: ShapeId,
    /// SVG-Pfad des Umrisses inklusive Tail
    pub outline: String,
    pub stroke_width: f32,
    pub color: ShapeColor,
    pub style: ShapeStyle,
    pub body: TableBody,
    /// Einziger selektierter Shape im Host
    pub is_selected: bool,
    pub is_editing: bool,
}

impl RenderScene {
    /// Gibt zurück, ob der Picker statt der Tabelle gezeigt wird.
    pub fn shows_picker(&self) -> bool {
        matches!(self.body, TableBody::Picker { .. })
    }

    /// Findet eine Zelle über ihre Element-ID.
    pub fn cell(&self, element_id: &str) -> Option<&CellView> {
        match &self.body {
            TableBody::Grid { cells, .. } => cells.iter().find(|c| c.element_id == element_id),
            TableBody::Picker { .. } => None,
        }
    }
}
