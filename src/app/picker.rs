//! Dimension-Picker: Raster zur Wahl von Zeilen × Spalten vor dem ersten Editieren.
//!
//! Zustandsfolge `Idle → Previewing → Committed`. Nach dem Commit ist das
//! Grid unveränderlich; weitere Events sind No-ops.

use crate::core::{CellPos, GridDims, TableError, TableShape};
use crate::shared::TableOptions;

/// Größe des Picker-Rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLimits {
    pub max_rows: u32,
    pub max_cols: u32,
}

impl Default for PickerLimits {
    fn default() -> Self {
        Self::from_options(&TableOptions::default())
    }
}

impl PickerLimits {
    /// Übernimmt die Grid-Limits aus den Optionen.
    pub fn from_options(options: &TableOptions) -> Self {
        Self {
            max_rows: options.max_rows,
            max_cols: options.max_cols,
        }
    }

    /// Liegt die Zelle im Raster (1-basiert)?
    pub fn contains(&self, pos: CellPos) -> bool {
        (1..=self.max_rows).contains(&pos.row) && (1..=self.max_cols).contains(&pos.col)
    }
}

/// Phasen des Pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// Kein Hover
    Idle,
    /// Vorschau bis einschließlich der gehoverten Zelle
    Previewing(CellPos),
    /// Grid festgelegt (terminal)
    Committed(GridDims),
}

/// Picker eines einzelnen Shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionPicker {
    state: PickerState,
    limits: PickerLimits,
}

impl DimensionPicker {
    pub fn new(limits: PickerLimits) -> Self {
        Self {
            state: PickerState::Idle,
            limits,
        }
    }

    /// Leitet den Zustand aus dem persistierten Shape ab.
    pub fn from_shape(shape: &TableShape, limits: PickerLimits) -> Self {
        let state = match (shape.grid(), shape.hovered) {
            (Some(grid), _) => PickerState::Committed(grid),
            (None, Some(pos)) if limits.contains(pos) => PickerState::Previewing(pos),
            _ => PickerState::Idle,
        };
        Self { state, limits }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn limits(&self) -> PickerLimits {
        self.limits
    }

    pub fn is_committed(&self) -> bool {
        matches!(self.state, PickerState::Committed(_))
    }

    /// Hover über eine Zelle. Gibt `true` zurück wenn sich die Vorschau geändert hat.
    pub fn pointer_enter(&mut self, pos: CellPos) -> bool {
        if self.is_committed() {
            return false;
        }
        if !self.limits.contains(pos) {
            log::debug!(
                "Picker: Hover auf ({}, {}) außerhalb {}x{} ignoriert",
                pos.row,
                pos.col,
                self.limits.max_rows,
                self.limits.max_cols
            );
            return false;
        }
        let next = PickerState::Previewing(pos);
        let changed = self.state != next;
        self.state = next;
        changed
    }

    /// Zeiger verlässt das Raster: Vorschau löschen.
    pub fn pointer_leave(&mut self) -> bool {
        match self.state {
            PickerState::Previewing(_) => {
                self.state = PickerState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Klick auf eine Zelle legt das Grid fest.
    ///
    /// Gibt die neuen Dimensionen zurück, `None` wenn bereits festgelegt
    /// oder die Zelle außerhalb des Rasters liegt.
    pub fn commit(&mut self, pos: CellPos) -> Option<GridDims> {
        if self.is_committed() {
            return None;
        }
        if !self.limits.contains(pos) {
            log::debug!(
                "Picker: Klick auf ({}, {}) außerhalb des Rasters ignoriert",
                pos.row,
                pos.col
            );
            return None;
        }
        let grid = GridDims::new(pos.row, pos.col)?;
        self.state = PickerState::Committed(grid);
        Some(grid)
    }

    /// Aktuell hervorgehobene Ecke (rechts unten) der Vorschau.
    pub fn highlighted(&self) -> Option<CellPos> {
        match self.state {
            PickerState::Previewing(pos) => Some(pos),
            _ => None,
        }
    }

    /// Liegt die Zelle in der hervorgehobenen Region `1..=row × 1..=col`?
    pub fn is_highlighted(&self, pos: CellPos) -> bool {
        self.highlighted()
            .is_some_and(|h| pos.row >= 1 && pos.col >= 1 && pos.row <= h.row && pos.col <= h.col)
    }

    /// Alle Rasterzellen zeilenweise, jeweils mit Hervorhebung.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, bool)> + '_ {
        (1..=self.limits.max_rows).flat_map(move |row| {
            (1..=self.limits.max_cols).map(move |col| {
                let pos = CellPos::new(row, col);
                (pos, self.is_highlighted(pos))
            })
        })
    }
}

/// Legt das Grid eines Shapes fest (geprüft gegen die Limits).
pub fn commit_grid(
    shape: TableShape,
    pos: CellPos,
    limits: PickerLimits,
) -> Result<TableShape, TableError> {
    let mut picker = DimensionPicker::from_shape(&shape, limits);
    if let PickerState::Committed(grid) = picker.state() {
        return Err(TableError::AlreadyCommitted {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    let grid = picker.commit(pos).ok_or(TableError::InvalidDimensions {
        rows: pos.row,
        cols: pos.col,
    })?;
    log::info!(
        "Shape {}: Grid {}x{} festgelegt",
        shape.id,
        grid.rows(),
        grid.cols()
    );
    shape.with_committed_grid(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeId;

    fn picker() -> DimensionPicker {
        DimensionPicker::new(PickerLimits::default())
    }

    #[test]
    fn test_hover_highlights_rectangle() {
        let mut p = picker();
        assert!(p.pointer_enter(CellPos::new(2, 3)));
        assert!(p.is_highlighted(CellPos::new(1, 1)));
        assert!(p.is_highlighted(CellPos::new(2, 3)));
        assert!(!p.is_highlighted(CellPos::new(3, 1)));
        assert!(!p.is_highlighted(CellPos::new(1, 4)));
        assert_eq!(p.cells().filter(|(_, lit)| *lit).count(), 6);
        assert_eq!(p.cells().count(), 70);
    }

    #[test]
    fn test_rehover_and_leave() {
        let mut p = picker();
        p.pointer_enter(CellPos::new(1, 1));
        assert!(p.pointer_enter(CellPos::new(4, 4)));
        assert!(!p.pointer_enter(CellPos::new(4, 4)));
        assert!(p.pointer_leave());
        assert_eq!(p.state(), PickerState::Idle);
        assert!(!p.pointer_leave());
    }

    #[test]
    fn test_commit_is_terminal() {
        let mut p = picker();
        p.pointer_enter(CellPos::new(2, 2));
        let grid = p.commit(CellPos::new(3, 4)).expect("gültige Zelle");
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert!(!p.pointer_enter(CellPos::new(1, 1)));
        assert!(!p.pointer_leave());
        assert!(p.commit(CellPos::new(5, 5)).is_none());
        assert_eq!(p.state(), PickerState::Committed(grid));
    }

    #[test]
    fn test_out_of_range_events_ignored() {
        let mut p = picker();
        assert!(!p.pointer_enter(CellPos::new(0, 1)));
        assert!(!p.pointer_enter(CellPos::new(8, 1)));
        assert!(!p.pointer_enter(CellPos::new(1, 11)));
        assert!(p.commit(CellPos::new(8, 2)).is_none());
        assert_eq!(p.state(), PickerState::Idle);
    }

    #[test]
    fn test_commit_grid_creates_blank_buffer() {
        let shape = TableShape::new(ShapeId::new("shape:pick"), &TableOptions::default())
            .with_hovered(Some(CellPos::new(2, 2)));
        let shape = commit_grid(shape, CellPos::new(3, 4), PickerLimits::default())
            .expect("Commit");
        assert_eq!(shape.grid(), GridDims::new(3, 4));
        assert_eq!(shape.text().len(), 12);
        assert!(shape.text().iter().all(String::is_empty));
        assert!(shape.hovered.is_none());

        let again = commit_grid(shape, CellPos::new(1, 1), PickerLimits::default());
        assert!(matches!(
            again,
            Err(TableError::AlreadyCommitted { rows: 3, cols: 4 })
        ));
    }

    #[test]
    fn test_commit_grid_respects_limits() {
        let shape = TableShape::new(ShapeId::new("shape:pick"), &TableOptions::default());
        let limits = PickerLimits {
            max_rows: 2,
            max_cols: 2,
        };
        assert!(matches!(
            commit_grid(shape, CellPos::new(3, 1), limits),
            Err(TableError::InvalidDimensions { rows: 3, cols: 1 })
        ));
    }

    #[test]
    fn test_from_shape_restores_preview() {
        let shape = TableShape::new(ShapeId::new("shape:pick"), &TableOptions::default())
            .with_hovered(Some(CellPos::new(2, 5)));
        let p = DimensionPicker::from_shape(&shape, PickerLimits::default());
        assert_eq!(p.highlighted(), Some(CellPos::new(2, 5)));
    }
}
