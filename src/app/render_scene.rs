//! Builder für das Render-Modell eines Tabellen-Shapes.

use glam::Vec2;

use super::picker::{DimensionPicker, PickerLimits};
use crate::core::{outline_path, table_vertices, TableShape};
use crate::shared::{CellView, PickerCellView, RenderScene, TableBody};

/// Element-ID einer Zelle, über die der Host Eingaben zuordnet.
pub fn cell_element_id(index: usize) -> String {
    format!("cell-{index}")
}

/// Baut das Render-Modell aus Shape und Host-Zustand.
pub fn build(
    shape: &TableShape,
    limits: PickerLimits,
    is_selected: bool,
    is_editing: bool,
) -> RenderScene {
    let body = match shape.grid() {
        Some(grid) => {
            let cell_size = Vec2::new(
                shape.width() / grid.cols() as f32,
                shape.height() / grid.rows() as f32,
            );
            let cells = shape
                .text()
                .iter()
                .enumerate()
                .map(|(index, text)| {
                    let (row, col) = grid.position_of(index);
                    CellView {
                        element_id: cell_element_id(index),
                        index,
                        origin: Vec2::new(col as f32, row as f32) * cell_size,
                        size: cell_size,
                        text: text.clone(),
                        editable: is_editing,
                    }
                })
                .collect();
            TableBody::Grid {
                rows: grid.rows(),
                cols: grid.cols(),
                cells,
            }
        }
        None => {
            let picker = DimensionPicker::from_shape(shape, limits);
            TableBody::Picker {
                rows: limits.max_rows,
                cols: limits.max_cols,
                cells: picker
                    .cells()
                    .map(|(pos, highlighted)| PickerCellView { pos, highlighted })
                    .collect(),
            }
        }
    };

    RenderScene {
        id: shape.id.clone(),
        outline: outline_path(&table_vertices(shape)),
        stroke_width: shape.style.size.stroke_width(),
        color: shape.style.color,
        style: shape.style,
        body,
        is_selected,
        is_editing,
    }
}
