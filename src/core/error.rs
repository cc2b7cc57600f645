//! Fehlertypen des Tabellen-Kerns.
//!
//! Keiner dieser Fehler ist fatal: Aufrufer loggen ihn und behalten den
//! bisherigen Shape-Zustand bei.

use thiserror::Error;

use super::ShapeId;

/// Fehler bei Operationen auf einem Tabellen-Shape.
#[derive(Debug, Error)]
pub enum TableError {
    /// Persistierter Shape ist kein gültiges JSON bzw. passt nicht zum Schema
    #[error("Shape konnte nicht dekodiert werden: {0}")]
    Decode(#[from] serde_json::Error),
    /// Zellindex liegt außerhalb von `rows * cols`
    #[error("Zellindex {index} außerhalb der Tabelle ({len} Zellen)")]
    CellOutOfRange { index: usize, len: usize },
    /// Tabelle hat noch kein Grid (Picker aktiv)
    #[error("Tabelle hat noch keine Dimensionen")]
    NotDimensioned,
    /// Grid wurde bereits festgelegt und ist unveränderlich
    #[error("Grid bereits festgelegt ({rows}x{cols})")]
    AlreadyCommitted { rows: u32, cols: u32 },
    /// Ungültige Grid-Dimensionen (0 oder über dem Limit)
    #[error("Ungültige Grid-Dimensionen {rows}x{cols}")]
    InvalidDimensions { rows: u32, cols: u32 },
    /// Host kennt den Shape nicht
    #[error("Unbekannter Shape: {0}")]
    UnknownShape(ShapeId),
}
