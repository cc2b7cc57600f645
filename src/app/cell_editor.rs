//! Zell-Editor: ersetzt den Text einer Zelle, misst neu und lässt die Tabelle wachsen.

use super::host::{CellEdit, TextMeasurer};
use crate::core::{apply_growth, TableError, TableShape};
use crate::shared::{TableOptions, TextStyle};

/// Mess-Constraints einer Zelle, abgeleitet aus Stil und Breite des Shapes.
pub fn cell_text_style(shape: &TableShape, options: &TableOptions) -> TextStyle {
    let cols = shape.grid().map_or(1, |g| g.cols()) as f32;
    TextStyle {
        font: shape.style.font,
        font_size: options.label_font_sizes[shape.style.size.index()],
        line_height: options.line_height,
        padding: options.cell_padding,
        max_width: shape.width() / cols,
        align: shape.style.align,
    }
}

/// Prüft den Zellindex und misst den neuen Text, ohne den Shape zu verändern.
///
/// Das Ergebnis wird als Patch an den Host gegeben; Growth läuft dort in
/// `on_before_update`.
pub fn measure_cell_edit<M: TextMeasurer + ?Sized>(
    shape: &TableShape,
    index: usize,
    text: impl Into<String>,
    measurer: &M,
    options: &TableOptions,
) -> Result<CellEdit, TableError> {
    let grid = shape.grid().ok_or(TableError::NotDimensioned)?;
    let len = grid.cell_count();
    if index >= len {
        return Err(TableError::CellOutOfRange { index, len });
    }
    let text = text.into();
    let style = cell_text_style(shape, options);
    let measured_height = measurer.measure_rendered_height(&text, &style);
    log::debug!(
        "Shape {}: Zelle {} gemessen, {:.1}px",
        shape.id,
        index,
        measured_height
    );
    Ok(CellEdit {
        index,
        text,
        measured_height,
    })
}

/// Setzt den Text einer Zelle, misst sie und wendet Growth an.
pub fn set_cell_text<M: TextMeasurer + ?Sized>(
    shape: TableShape,
    index: usize,
    text: impl Into<String>,
    measurer: &M,
    options: &TableOptions,
) -> Result<TableShape, TableError> {
    let edit = measure_cell_edit(&shape, index, text, measurer, options)?;
    let shape = shape
        .with_cell_text(edit.index, edit.text)?
        .with_active_cell(edit.index, edit.measured_height);
    Ok(apply_growth(shape, options))
}
