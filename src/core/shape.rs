//! Das Tabellen-Shape als unveränderlicher Wert.
//!
//! Der Host besitzt den Shape in seinem Scene-Graph; der Kern erzeugt nur
//! neue Werte über `with_*`-Builder. Invarianten, die Builder garantieren:
//! - `text.len() == rows * cols` sobald ein Grid gesetzt ist, sonst leer
//! - das Grid wird genau einmal festgelegt
//! - `min_height` sinkt nie

use glam::Vec2;
use std::fmt;

use super::{ShapeStyle, TableError};
use crate::shared::TableOptions;

/// Kleinste zulässige Breite/Höhe.
pub const MIN_SHAPE_SIZE: f32 = 1.0;

/// Vom Host vergebene Shape-ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    /// Erstellt eine ID aus beliebigem Text.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als String-Slice zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zeilen × Spalten einer festgelegten Tabelle (beide ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    rows: u32,
    cols: u32,
}

impl GridDims {
    /// Erstellt Dimensionen; `None` wenn Zeilen oder Spalten 0 sind.
    pub fn new(rows: u32, cols: u32) -> Option<Self> {
        (rows > 0 && cols > 0).then_some(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Anzahl der Zellen (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major Index einer Zelle (0-basiert).
    pub fn index_of(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// (Zeile, Spalte) zu einem row-major Index (0-basiert).
    pub fn position_of(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }
}

/// Zelle im Picker-Raster (1-basiert, wie in der Vorschau angezeigt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Ergebnis eines Growth-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthResult {
    /// Neue Gesamthöhe
    pub height: f32,
    /// Neue Mindesthöhe (monoton)
    pub min_height: f32,
}

/// Callout-Tabelle: Körper, Tail, Grid und Zelltexte.
#[derive(Debug, Clone, PartialEq)]
pub struct TableShape {
    /// Shape-ID im Host
    pub id: ShapeId,
    /// Seiten-Position (linke obere Ecke)
    pub position: Vec2,
    width: f32,
    height: f32,
    min_height: f32,
    /// Tail-Spitze, normiert auf (width, height)
    pub tail: Vec2,
    grid: Option<GridDims>,
    text: Vec<String>,
    /// Picker-Vorschau (nur solange kein Grid festgelegt ist)
    pub hovered: Option<CellPos>,
    /// Zuletzt bearbeitete Zelle
    pub active_cell: Option<usize>,
    /// Gemessene Höhe der zuletzt bearbeiteten Zelle
    pub active_height: f32,
    /// Stil-Eigenschaften
    pub style: ShapeStyle,
}

/// Rohe Bestandteile eines Shapes, z.B. aus persistierten Daten.
///
/// `TableShape::from_parts` stellt daraus einen konsistenten Shape her.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParts {
    pub id: ShapeId,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub min_height: f32,
    pub tail: Vec2,
    pub grid: Option<GridDims>,
    pub text: Vec<String>,
    pub hovered: Option<CellPos>,
    pub active_cell: Option<usize>,
    pub active_height: f32,
    pub style: ShapeStyle,
}

/// Ersetzt nicht-endliche oder zu kleine Maße durch eine gültige Größe.
fn sanitize_dimension(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_SHAPE_SIZE)
    } else {
        fallback.max(MIN_SHAPE_SIZE)
    }
}

impl TableShape {
    /// Erstellt einen neuen Shape mit den Default-Eigenschaften.
    pub fn new(id: ShapeId, options: &TableOptions) -> Self {
        Self {
            id,
            position: Vec2::ZERO,
            width: sanitize_dimension(options.default_width, MIN_SHAPE_SIZE),
            height: sanitize_dimension(options.default_height, MIN_SHAPE_SIZE),
            min_height: 0.0,
            tail: Vec2::ZERO,
            grid: None,
            text: Vec::new(),
            hovered: None,
            active_cell: None,
            active_height: options.initial_active_height,
            style: ShapeStyle::default(),
        }
    }

    /// Stellt einen konsistenten Shape aus Rohdaten her.
    ///
    /// Repariert statt abzubrechen: ungültige Maße → Mindestgröße,
    /// falsche Textlänge → aufgefüllt/abgeschnitten, Zellindex außerhalb → verworfen,
    /// Höhe unter der Mindesthöhe → angehoben.
    pub fn from_parts(parts: ShapeParts) -> Self {
        let ShapeParts {
            id,
            position,
            width,
            height,
            min_height,
            tail,
            grid,
            mut text,
            hovered,
            active_cell,
            active_height,
            style,
        } = parts;

        let expected = grid.map_or(0, |g| g.cell_count());
        if text.len() != expected {
            log::warn!(
                "Shape {}: Textlänge {} passt nicht zum Grid ({} Zellen), wird angepasst",
                id,
                text.len(),
                expected
            );
            text.resize(expected, String::new());
        }

        let active_cell = active_cell.filter(|&i| i < expected);
        let position = if position.is_finite() {
            position
        } else {
            Vec2::ZERO
        };
        let tail = if tail.is_finite() { tail } else { Vec2::ZERO };
        let min_height = if min_height.is_finite() {
            min_height.max(0.0)
        } else {
            0.0
        };
        let active_height = if active_height.is_finite() {
            active_height.max(0.0)
        } else {
            0.0
        };

        Self {
            id,
            position,
            width: sanitize_dimension(width, MIN_SHAPE_SIZE),
            height: sanitize_dimension(height, MIN_SHAPE_SIZE).max(min_height),
            min_height,
            tail,
            hovered: if grid.is_some() { None } else { hovered },
            grid,
            text,
            active_cell,
            active_height,
            style,
        }
    }

    // ── Lesezugriff ─────────────────────────────────────────────

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Monotone Mindesthöhe aus früheren Growth-Durchläufen.
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Festgelegtes Grid (`None` solange der Picker aktiv ist).
    pub fn grid(&self) -> Option<GridDims> {
        self.grid
    }

    /// Hat die Tabelle bereits Dimensionen?
    pub fn is_dimensioned(&self) -> bool {
        self.grid.is_some()
    }

    /// Alle Zelltexte in row-major Reihenfolge.
    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// Text einer einzelnen Zelle.
    pub fn cell_text(&self, index: usize) -> Option<&str> {
        self.text.get(index).map(String::as_str)
    }

    /// Breite und Höhe als Vektor.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Geometrischer Mittelpunkt in Shape-Koordinaten.
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Tail-Spitze in Shape-Koordinaten (nicht normiert).
    pub fn tail_in_shape_space(&self) -> Vec2 {
        self.tail * self.size()
    }

    // ── Builder ─────────────────────────────────────────────────

    /// Neue Seiten-Position.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Neue Breite/Höhe (mindestens `MIN_SHAPE_SIZE`). Grid, Text und Tail bleiben unverändert.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = sanitize_dimension(width, self.width);
        self.height = sanitize_dimension(height, self.height);
        self
    }

    /// Neue normierte Tail-Position.
    pub fn with_tail(mut self, tail: Vec2) -> Self {
        if tail.is_finite() {
            self.tail = tail;
        }
        self
    }

    /// Neue Picker-Vorschau. Wird ignoriert sobald das Grid festgelegt ist.
    pub fn with_hovered(mut self, hovered: Option<CellPos>) -> Self {
        self.hovered = if self.grid.is_some() { None } else { hovered };
        self
    }

    /// Neue Stil-Eigenschaften.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Legt das Grid einmalig fest und legt einen leeren Textpuffer an.
    pub fn with_committed_grid(mut self, grid: GridDims) -> Result<Self, TableError> {
        if let Some(existing) = self.grid {
            return Err(TableError::AlreadyCommitted {
                rows: existing.rows(),
                cols: existing.cols(),
            });
        }
        self.text = vec![String::new(); grid.cell_count()];
        self.grid = Some(grid);
        self.hovered = None;
        self.active_cell = None;
        Ok(self)
    }

    /// Ersetzt den Text genau einer Zelle.
    pub fn with_cell_text(mut self, index: usize, text: impl Into<String>) -> Result<Self, TableError> {
        if self.grid.is_none() {
            return Err(TableError::NotDimensioned);
        }
        let len = self.text.len();
        let slot = self
            .text
            .get_mut(index)
            .ok_or(TableError::CellOutOfRange { index, len })?;
        *slot = text.into();
        Ok(self)
    }

    /// Setzt die zuletzt bearbeitete Zelle und ihre gemessene Höhe.
    pub fn with_active_cell(mut self, index: usize, measured_height: f32) -> Self {
        if index < self.text.len() {
            self.active_cell = Some(index);
            if measured_height.is_finite() {
                self.active_height = measured_height.max(0.0);
            }
        }
        self
    }

    /// Übernimmt ein Growth-Ergebnis. `min_height` kann dabei nur steigen,
    /// die Höhe nie unter die Mindesthöhe fallen.
    pub fn with_growth(mut self, growth: GrowthResult) -> Self {
        if growth.min_height.is_finite() {
            self.min_height = self.min_height.max(growth.min_height);
        }
        let height = if growth.height.is_finite() {
            growth.height
        } else {
            self.height
        };
        self.height = height.max(self.min_height).max(MIN_SHAPE_SIZE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> TableShape {
        TableShape::new(ShapeId::new("shape:1"), &TableOptions::default())
    }

    #[test]
    fn test_new_shape_has_defaults() {
        let s = shape();
        assert_eq!(s.width(), 356.0);
        assert_eq!(s.height(), 254.0);
        assert_eq!(s.tail, Vec2::ZERO);
        assert!(s.grid().is_none());
        assert!(s.text().is_empty());
    }

    #[test]
    fn test_grid_dims_rejects_zero() {
        assert!(GridDims::new(0, 3).is_none());
        assert!(GridDims::new(3, 0).is_none());
        let g = GridDims::new(3, 4).expect("3x4 gültig");
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.index_of(1, 2), 6);
        assert_eq!(g.position_of(6), (1, 2));
    }

    #[test]
    fn test_commit_grid_only_once() {
        let grid = GridDims::new(2, 2).expect("2x2");
        let s = shape().with_committed_grid(grid).expect("erstes Commit");
        assert_eq!(s.text().len(), 4);
        let err = s.with_committed_grid(GridDims::new(3, 3).expect("3x3"));
        assert!(matches!(
            err,
            Err(TableError::AlreadyCommitted { rows: 2, cols: 2 })
        ));
    }

    #[test]
    fn test_cell_text_requires_grid_and_range() {
        assert!(matches!(
            shape().with_cell_text(0, "x"),
            Err(TableError::NotDimensioned)
        ));
        let s = shape()
            .with_committed_grid(GridDims::new(1, 2).expect("1x2"))
            .expect("commit");
        assert!(matches!(
            s.clone().with_cell_text(2, "x"),
            Err(TableError::CellOutOfRange { index: 2, len: 2 })
        ));
        let s = s.with_cell_text(1, "x").expect("gültiger Index");
        assert_eq!(s.text(), &["".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_growth_never_lowers_min_height() {
        let s = shape().with_growth(GrowthResult {
            height: 400.0,
            min_height: 400.0,
        });
        let s = s.with_growth(GrowthResult {
            height: 100.0,
            min_height: 100.0,
        });
        assert_eq!(s.min_height(), 400.0);
        assert_eq!(s.height(), 400.0);
    }

    #[test]
    fn test_from_parts_repairs_text_length() {
        let parts = ShapeParts {
            id: ShapeId::new("shape:broken"),
            position: Vec2::new(f32::NAN, 3.0),
            width: -5.0,
            height: f32::INFINITY,
            min_height: 0.0,
            tail: Vec2::new(0.5, 1.5),
            grid: GridDims::new(2, 2),
            text: vec!["a".into()],
            hovered: Some(CellPos::new(1, 1)),
            active_cell: Some(9),
            active_height: 150.0,
            style: ShapeStyle::default(),
        };
        let s = TableShape::from_parts(parts);
        assert_eq!(s.text().len(), 4);
        assert_eq!(s.cell_text(0), Some("a"));
        assert_eq!(s.width(), MIN_SHAPE_SIZE);
        assert_eq!(s.height(), MIN_SHAPE_SIZE);
        assert_eq!(s.position, Vec2::ZERO);
        assert!(s.hovered.is_none());
        assert!(s.active_cell.is_none());
    }

    #[test]
    fn test_hovered_ignored_after_commit() {
        let s = shape()
            .with_committed_grid(GridDims::new(1, 1).expect("1x1"))
            .expect("commit")
            .with_hovered(Some(CellPos::new(2, 2)));
        assert!(s.hovered.is_none());
    }
}
