//! Callout-Tabelle als Shape-Plugin für Whiteboard-Editoren.
//! Core-Funktionalität als Library exportiert für Host, CLI und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    Scene, ShapeHost, ShapePatch, ShapeUtil, ShapeUtilRegistry, TableCommand, TableController,
    TableIntent, TableShapeUtil, TextMeasurer,
};
pub use core::{
    decode_shape, encode_shape, load_or_default, CellPos, GridDims, ShapeId, ShapeRecord,
    TableError, TableShape,
};
pub use shared::{RenderScene, TableOptions, TextStyle};
