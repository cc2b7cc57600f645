//! Persistiertes Property-Schema des Tabellen-Shapes (JSON).
//!
//! Lesen ist tolerant: fehlende oder falsch typisierte Felder werden durch
//! Defaults ersetzt, inkonsistente Kombinationen repariert. Nur syntaktisch
//! ungültiges JSON führt zu `TableError::Decode`.

use glam::Vec2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    CellPos, FontFamily, GridDims, HorizontalAlign, ShapeColor, ShapeId, ShapeParts, ShapeSize,
    ShapeStyle, TableError, TableShape, VerticalAlign,
};
use crate::shared::options::{DEFAULT_HEIGHT, DEFAULT_WIDTH, INITIAL_ACTIVE_HEIGHT};
use crate::shared::TableOptions;

/// Typ-Name des Shapes im Host.
pub const SHAPE_TYPE: &str = "table";

/// Deserialisiert einen Wert und fällt bei Typfehlern auf `T::default()` zurück.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn default_shape_type() -> String {
    SHAPE_TYPE.to_string()
}

/// Normierter Punkt `{x, y}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VecModel {
    pub x: f32,
    pub y: f32,
}

/// Grid-Dimensionen wie persistiert (Zahlen, nicht zwingend ganzzahlig).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridModel {
    pub rows: f64,
    pub cols: f64,
}

/// Picker-Vorschau wie persistiert.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HoveredModel {
    pub row: f64,
    pub col: f64,
}

/// Property-Bag des Shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableProps {
    #[serde(deserialize_with = "lenient")]
    pub w: f32,
    #[serde(deserialize_with = "lenient")]
    pub h: f32,
    #[serde(deserialize_with = "lenient")]
    pub min_h: f32,
    #[serde(deserialize_with = "lenient")]
    pub tail: VecModel,
    #[serde(deserialize_with = "lenient")]
    pub data: Option<GridModel>,
    #[serde(deserialize_with = "lenient")]
    pub text: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub hovered: Option<HoveredModel>,
    #[serde(deserialize_with = "lenient")]
    pub active_cell: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub active_h: f32,
    #[serde(deserialize_with = "lenient")]
    pub size: ShapeSize,
    #[serde(deserialize_with = "lenient")]
    pub font: FontFamily,
    #[serde(deserialize_with = "lenient")]
    pub align: HorizontalAlign,
    #[serde(deserialize_with = "lenient")]
    pub vertical_align: VerticalAlign,
    #[serde(deserialize_with = "lenient")]
    pub color: ShapeColor,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            w: DEFAULT_WIDTH,
            h: DEFAULT_HEIGHT,
            min_h: 0.0,
            tail: VecModel::default(),
            data: None,
            text: Vec::new(),
            hovered: None,
            active_cell: None,
            active_h: INITIAL_ACTIVE_HEIGHT,
            size: ShapeSize::default(),
            font: FontFamily::default(),
            align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            color: ShapeColor::default(),
        }
    }
}

/// Vollständiger Shape-Record inklusive Hülle (`id`, `type`, Position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default = "default_shape_type")]
    pub shape_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub x: f32,
    #[serde(default, deserialize_with = "lenient")]
    pub y: f32,
    #[serde(default)]
    pub props: TableProps,
}

/// Wandelt eine persistierte Zahl in eine ganze Zahl ≥ `min` um.
fn as_whole(value: f64, min: f64) -> Option<u32> {
    (value.is_finite() && value.fract() == 0.0 && value >= min && value <= u32::MAX as f64)
        .then_some(value as u32)
}

impl TableProps {
    /// Erzeugt den Property-Bag aus einem Shape.
    pub fn from_shape(shape: &TableShape) -> Self {
        Self {
            w: shape.width(),
            h: shape.height(),
            min_h: shape.min_height(),
            tail: VecModel {
                x: shape.tail.x,
                y: shape.tail.y,
            },
            data: shape.grid().map(|g| GridModel {
                rows: g.rows() as f64,
                cols: g.cols() as f64,
            }),
            text: shape.text().to_vec(),
            hovered: shape.hovered.map(|h| HoveredModel {
                row: h.row as f64,
                col: h.col as f64,
            }),
            active_cell: shape.active_cell.map(|i| i as f64),
            active_h: shape.active_height,
            size: shape.style.size,
            font: shape.style.font,
            align: shape.style.align,
            vertical_align: shape.style.vertical_align,
            color: shape.style.color,
        }
    }

    /// Validiert das Grid: ganze Zahlen ab 1 bis zur Persistenz-Obergrenze.
    ///
    /// Die Picker-Limits gelten hier nicht, sie begrenzen nur neue Auswahlen.
    /// `{rows: 0, cols: 0}` bedeutet "noch nicht festgelegt" und ist kein Fehler.
    fn grid_dims(&self, id: &ShapeId, options: &TableOptions) -> Option<GridDims> {
        let data = self.data?;
        if data.rows == 0.0 && data.cols == 0.0 {
            return None;
        }
        let (max_rows, max_cols) = options.persisted_grid_limits();
        let dims = as_whole(data.rows, 1.0)
            .zip(as_whole(data.cols, 1.0))
            .filter(|&(rows, cols)| rows <= max_rows && cols <= max_cols)
            .and_then(|(rows, cols)| GridDims::new(rows, cols));
        if dims.is_none() {
            log::warn!(
                "Shape {}: ungültiges Grid {}x{} verworfen",
                id,
                data.rows,
                data.cols
            );
        }
        dims
    }

    /// Stellt die Shape-Bestandteile her (noch ohne Reparatur, siehe `TableShape::from_parts`).
    pub fn into_parts(self, id: ShapeId, position: Vec2, options: &TableOptions) -> ShapeParts {
        let grid = self.grid_dims(&id, options);
        let positive_or = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let hovered = self.hovered.and_then(|h| {
            let row = as_whole(h.row, 1.0)?;
            let col = as_whole(h.col, 1.0)?;
            (row <= options.max_rows && col <= options.max_cols).then_some(CellPos::new(row, col))
        });

        ShapeParts {
            id,
            position,
            width: positive_or(self.w, options.default_width),
            height: positive_or(self.h, options.default_height),
            min_height: self.min_h,
            tail: Vec2::new(self.tail.x, self.tail.y),
            text: if grid.is_some() { self.text } else { Vec::new() },
            grid,
            hovered,
            active_cell: self
                .active_cell
                .and_then(|i| as_whole(i, 0.0))
                .map(|i| i as usize),
            active_height: self.active_h,
            style: ShapeStyle {
                size: self.size,
                font: self.font,
                align: self.align,
                vertical_align: self.vertical_align,
                color: self.color,
            },
        }
    }
}

impl ShapeRecord {
    /// Erzeugt den Record eines Shapes.
    pub fn from_shape(shape: &TableShape) -> Self {
        Self {
            id: shape.id.to_string(),
            shape_type: SHAPE_TYPE.to_string(),
            x: shape.position.x,
            y: shape.position.y,
            props: TableProps::from_shape(shape),
        }
    }

    /// Stellt einen konsistenten Shape aus dem Record her.
    pub fn into_shape(self, options: &TableOptions) -> TableShape {
        if self.shape_type != SHAPE_TYPE {
            log::warn!(
                "Record {} hat Typ '{}', erwartet '{}'",
                self.id,
                self.shape_type,
                SHAPE_TYPE
            );
        }
        let id = ShapeId::new(self.id);
        let position = Vec2::new(self.x, self.y);
        TableShape::from_parts(self.props.into_parts(id, position, options))
    }
}

/// Dekodiert einen persistierten Shape-Record.
pub fn decode_shape(json: &str, options: &TableOptions) -> Result<TableShape, TableError> {
    let record: ShapeRecord = serde_json::from_str(json)?;
    Ok(record.into_shape(options))
}

/// Kodiert einen Shape als JSON-Record.
pub fn encode_shape(shape: &TableShape) -> Result<String, TableError> {
    Ok(serde_json::to_string_pretty(&ShapeRecord::from_shape(shape))?)
}

/// Dekodiert einen Shape; bei ungültigem JSON wird ein Default-Shape erzeugt.
pub fn load_or_default(json: &str, fallback_id: ShapeId, options: &TableOptions) -> TableShape {
    match decode_shape(json, options) {
        Ok(shape) => shape,
        Err(e) => {
            log::warn!(
                "Shape {} nicht lesbar, verwende Standardwerte: {}",
                fallback_id,
                e
            );
            TableShape::new(fallback_id, options)
        }
    }
}
