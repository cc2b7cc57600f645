//! Core-Domänentypen: Tabellen-Shape, Geometrie, Tail-Solver, Growth, Persistenz.
//!
//! Alles hier ist rein funktional: Eingabe ist ein `TableShape`-Wert,
//! Ausgabe ein neuer Wert. Kein Zugriff auf Host, UI oder Dateisystem.

pub mod boundary;
pub mod error;
pub mod geometry;
pub mod growth;
pub mod shape;
pub mod style;
pub mod tail;
pub mod wire;

pub use boundary::{tail_intersection, BoxEdge, TailIntersection};
pub use error::TableError;
pub use geometry::{outline_path, polygon_contains, shape_bounds, table_vertices, ShapeBounds};
pub use growth::{apply_growth, grow};
pub use shape::{CellPos, GridDims, GrowthResult, ShapeId, ShapeParts, TableShape, MIN_SHAPE_SIZE};
pub use style::{FontFamily, HorizontalAlign, ShapeColor, ShapeSize, ShapeStyle, VerticalAlign};
pub use tail::{clamp_tail, constrain_tail, TailBand};
pub use wire::{decode_shape, encode_shape, load_or_default, ShapeRecord, TableProps};
