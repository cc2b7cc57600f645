//! Application-Layer: Host-Schnittstelle, Lifecycle-Hooks, Picker, Editor und Controller.

pub mod cell_editor;
pub mod controller;
pub mod events;
pub mod host;
mod intent_mapping;
pub mod lifecycle;
pub mod picker;
pub mod render_scene;
pub mod scene;

pub use cell_editor::{measure_cell_edit, set_cell_text};
pub use controller::TableController;
pub use events::{TableCommand, TableIntent};
pub use host::{CellEdit, EstimatingMeasurer, ShapeHost, ShapePatch, TextMeasurer};
pub use lifecycle::{ResizeInfo, ShapeGeometry, ShapeUtil, ShapeUtilRegistry, TableShapeUtil};
pub use picker::{commit_grid, DimensionPicker, PickerLimits, PickerState};
pub use render_scene::build as build_render_scene;
pub use scene::Scene;
