//! Schnittstelle zum Host-Editor: Shape-Updates, Editier-Status, Textmessung.

use glam::Vec2;

use super::lifecycle::TableShapeUtil;
use crate::core::{CellPos, GridDims, ShapeId, ShapeStyle, TableError, TableShape};
use crate::shared::TextStyle;

/// Misst die gerenderte Höhe eines Zelltexts.
pub trait TextMeasurer {
    /// Höhe inklusive Padding, die `text` unter `style` einnimmt.
    fn measure_rendered_height(&self, text: &str, style: &TextStyle) -> f32;
}

/// Vom Host bereitgestellte Fähigkeiten.
///
/// Der Host besitzt die Shapes; Änderungen laufen ausschließlich über
/// `update_shape`, das vor dem Speichern `on_before_update` ausführt.
pub trait ShapeHost: TextMeasurer {
    /// Aktueller Stand eines Shapes.
    fn shape(&self, id: &ShapeId) -> Option<&TableShape>;

    /// Wendet einen Patch an.
    fn update_shape(&mut self, id: &ShapeId, patch: ShapePatch) -> Result<(), TableError>;

    /// Wird der Shape gerade im Text-Modus bearbeitet?
    fn is_editing(&self, id: &ShapeId) -> bool;

    /// ID des einzigen selektierten Shapes (`None` bei 0 oder mehreren).
    fn only_selected_id(&self) -> Option<&ShapeId>;

    /// Beim Host registriertes Tabellen-Util (Optionen, Picker-Limits).
    fn shape_util(&self) -> &TableShapeUtil;
}

/// Textbearbeitung einer Zelle inklusive Messergebnis.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub index: usize,
    pub text: String,
    pub measured_height: f32,
}

/// Partielle Änderung eines Shapes. Nicht gesetzte Felder bleiben unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePatch {
    pub position: Option<Vec2>,
    pub size: Option<Vec2>,
    pub tail: Option<Vec2>,
    /// `Some(None)` löscht die Picker-Vorschau
    pub hovered: Option<Option<CellPos>>,
    pub grid: Option<GridDims>,
    pub cell: Option<CellEdit>,
    pub style: Option<ShapeStyle>,
}

impl ShapePatch {
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_tail(mut self, tail: Vec2) -> Self {
        self.tail = Some(tail);
        self
    }

    pub fn with_hovered(mut self, hovered: Option<CellPos>) -> Self {
        self.hovered = Some(hovered);
        self
    }

    pub fn with_grid(mut self, grid: GridDims) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_cell(mut self, edit: CellEdit) -> Self {
        self.cell = Some(edit);
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Ist der Patch leer?
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Wendet den Patch auf eine Kopie des Shapes an.
    ///
    /// Schlägt ein Teil fehl (z.B. Grid bereits festgelegt), bleibt der
    /// Eingabe-Shape unverändert, da der Aufrufer das Original behält.
    pub fn apply_to(self, shape: &TableShape) -> Result<TableShape, TableError> {
        let mut next = shape.clone();
        if let Some(position) = self.position {
            next = next.with_position(position);
        }
        if let Some(size) = self.size {
            next = next.with_size(size.x, size.y);
        }
        if let Some(tail) = self.tail {
            next = next.with_tail(tail);
        }
        if let Some(grid) = self.grid {
            next = next.with_committed_grid(grid)?;
        }
        if let Some(hovered) = self.hovered {
            next = next.with_hovered(hovered);
        }
        if let Some(edit) = self.cell {
            next = next
                .with_cell_text(edit.index, edit.text)?
                .with_active_cell(edit.index, edit.measured_height);
        }
        if let Some(style) = self.style {
            next = next.with_style(style);
        }
        Ok(next)
    }
}

// ── Schätzende Textmessung ──────────────────────────────────────

/// Mittlere Zeichenbreite relativ zur Schriftgröße.
const AVG_CHAR_WIDTH: f32 = 0.55;

/// Messung ohne Font-Rendering: feste Zeichenbreite, Umbruch pro Zeile.
///
/// Für CLI und Tests; ein grafischer Host misst das echte Layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingMeasurer;

impl EstimatingMeasurer {
    /// Anzahl der Zeilen nach Umbruch (mindestens 1).
    pub fn line_count(text: &str, style: &TextStyle) -> usize {
        let advance = style.font_size * AVG_CHAR_WIDTH;
        let per_line = if advance > 0.0 {
            ((style.content_width() / advance).floor() as usize).max(1)
        } else {
            usize::MAX
        };
        text.split('\n')
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum()
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure_rendered_height(&self, text: &str, style: &TextStyle) -> f32 {
        Self::line_count(text, style) as f32 * style.line_px() + 2.0 * style.padding
    }
}
