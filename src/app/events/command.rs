use crate::app::host::{CellEdit, ShapePatch};
use crate::core::{CellPos, GridDims, ShapeId};
use glam::Vec2;

/// Commands sind mutierende Schritte, die als Patch an den Host gehen.
#[derive(Debug, Clone, PartialEq)]
pub enum TableCommand {
    /// Picker-Vorschau setzen oder löschen
    SetHovered {
        id: ShapeId,
        hovered: Option<CellPos>,
    },
    /// Grid festlegen
    CommitGrid { id: ShapeId, grid: GridDims },
    /// Gemessenen Zelltext übernehmen
    SetCellText { id: ShapeId, edit: CellEdit },
    /// Neue normierte Tail-Position
    MoveTail { id: ShapeId, tail: Vec2 },
}

impl TableCommand {
    /// Zerlegt den Command in Ziel-ID und Patch.
    pub fn into_patch(self) -> (ShapeId, ShapePatch) {
        let patch = ShapePatch::default();
        match self {
            TableCommand::SetHovered { id, hovered } => (id, patch.with_hovered(hovered)),
            TableCommand::CommitGrid { id, grid } => (id, patch.with_grid(grid)),
            TableCommand::SetCellText { id, edit } => (id, patch.with_cell(edit)),
            TableCommand::MoveTail { id, tail } => (id, patch.with_tail(tail)),
        }
    }
}
